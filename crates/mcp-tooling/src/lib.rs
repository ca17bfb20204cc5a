//! mcp-tooling
//!
//! Loads tool definitions from MCP servers listed in the environment and
//! exposes them to an agent runtime by name.
//!
//! The registry is lazy and forgiving: nothing is contacted until the
//! first `load()`, the result is cached for the life of the registry, and
//! every failure (no client capability, bad `MCP_SERVERS_JSON`, servers
//! unreachable) degrades to an empty tool set with a log line instead of
//! an error.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use mcp_tooling::{ConsoleLogger, ToolRegistry};
//!
//! // MCP_SERVERS_JSON='{"calendar":{"transport":"sse","url":"http://localhost:3002/sse"}}'
//! let registry = Arc::new(ToolRegistry::from_env(Arc::new(ConsoleLogger::new())));
//!
//! let tools = registry.load().await;
//! if let Some(tool) = registry.get_tool("list_events") {
//!     let output = registry.call_tool(&tool.name, serde_json::json!({})).await?;
//! }
//! ```

pub mod types;
pub mod logging;
pub mod config;
pub mod mcp;
pub mod tools;

// Re-export commonly used types
pub use types::{Tool, ToolCall, ToolResult, ToolOutput};

pub use logging::{Logger, LogLevel, SharedLogger, NoOpLogger, ConsoleLogger, MemoryLogger};

pub use config::{
    ServerConfig, ServerConfigSource, ConfigError, ConfigResult,
    EnvConfigSource, MemoryConfigSource, MCP_SERVERS_ENV,
    parse_servers, load_server_config,
};

pub use mcp::{
    McpClientFactory, MultiServerClient, McpError, McpResult,
    MockClientFactory, default_client_factory,
};
#[cfg(feature = "rmcp-client")]
pub use mcp::RmcpClientFactory;

pub use tools::{ToolRegistry, LoadStatus};
