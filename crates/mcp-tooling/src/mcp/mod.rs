//! MCP client capability
//!
//! The registry never talks to servers itself. It is handed an
//! `McpClientFactory`, which turns a `ServerConfig` into a
//! `MultiServerClient` able to list and call tools across every
//! configured server.
//!
//! The production factory (`RmcpClientFactory`) uses the official rmcp SDK
//! and is compiled with the default `rmcp-client` feature. Builds without
//! it get `None` from `default_client_factory`, and the registry loads an
//! empty tool set.
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_tooling::mcp::default_client_factory;
//! use mcp_tooling::config::parse_servers;
//!
//! let factory = default_client_factory(logger).expect("rmcp-client feature");
//! let servers = parse_servers(r#"{"calendar":{"url":"http://localhost:3002/mcp"}}"#)?;
//!
//! let client = factory.create(&servers)?;
//! let tools = client.get_tools().await?;
//! ```

mod error;
mod traits;
mod mock;
#[cfg(feature = "rmcp-client")]
mod rmcp_client;

use std::sync::Arc;

pub use error::{McpError, McpResult};
pub use traits::{McpClientFactory, MultiServerClient};
pub use mock::{MockClientFactory, MockMode};
#[cfg(feature = "rmcp-client")]
pub use rmcp_client::{RmcpClientFactory, RmcpMultiServerClient};

use crate::logging::SharedLogger;

/// The client capability compiled into this build, if any
#[cfg(feature = "rmcp-client")]
pub fn default_client_factory(logger: SharedLogger) -> Option<Arc<dyn McpClientFactory>> {
    Some(Arc::new(RmcpClientFactory::new(logger)))
}

/// The client capability compiled into this build, if any
#[cfg(not(feature = "rmcp-client"))]
pub fn default_client_factory(_logger: SharedLogger) -> Option<Arc<dyn McpClientFactory>> {
    None
}
