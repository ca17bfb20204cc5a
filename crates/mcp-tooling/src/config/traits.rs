//! Configuration source trait

use thiserror::Error;

/// Where a raw server map comes from
///
/// Implementations:
/// - `EnvConfigSource`: environment variable (`MCP_SERVERS_JSON` by default)
/// - `MemoryConfigSource`: in-memory value for testing
pub trait ServerConfigSource: Send + Sync {
    /// Human-readable name, used in log lines
    fn name(&self) -> &str;

    /// The raw JSON text, or `None` when nothing is configured
    fn raw(&self) -> Option<String>;
}

/// Errors that can occur while reading server configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("server map must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("server `{server}`: {message}")]
    InvalidServer { server: String, message: String },

    #[error("server `{server}`: unknown transport `{transport}`")]
    UnknownTransport { server: String, transport: String },
}

impl ConfigError {
    pub fn invalid_server(server: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidServer {
            server: server.into(),
            message: message.into(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
