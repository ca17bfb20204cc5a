//! MCP server configuration
//!
//! Server maps come from a single JSON object, normally held in the
//! `MCP_SERVERS_JSON` environment variable:
//!
//! ```text
//! MCP_SERVERS_JSON='{"calendar":{"transport":"sse","url":"http://localhost:3002/sse"}}'
//! ```
//!
//! Sources:
//! - `EnvConfigSource`: reads an environment variable
//! - `MemoryConfigSource`: in-memory, for tests and embedders

mod traits;
mod env;
mod memory;
mod servers;
mod endpoint;

pub use traits::{ServerConfigSource, ConfigError, ConfigResult};
pub use env::{EnvConfigSource, MCP_SERVERS_ENV};
pub use memory::MemoryConfigSource;
pub use servers::{ServerConfig, parse_servers, load_server_config};
pub use endpoint::{ServerSpec, ServerEndpoint, TransportKind};
