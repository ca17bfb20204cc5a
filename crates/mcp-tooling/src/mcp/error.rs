//! MCP client error types

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while creating a client, fetching tools or calling them
#[derive(Error, Debug)]
pub enum McpError {
    #[error("Invalid server configuration: {0}")]
    InvalidServerConfig(#[from] ConfigError),

    #[error("Connection to `{server}` failed: {message}")]
    ConnectionFailed { server: String, message: String },

    #[error("Initialization of `{server}` failed: {message}")]
    InitializationFailed { server: String, message: String },

    #[error("Protocol error from `{server}`: {message}")]
    Protocol { server: String, message: String },

    #[error("Tool call failed: {0}")]
    ToolCallFailed(String),

    #[error("Unknown server: {0}")]
    UnknownServer(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("No MCP client available")]
    NoClient,

    #[error("{0}")]
    Other(String),
}

impl McpError {
    pub fn connection_failed(server: impl Into<String>, message: impl ToString) -> Self {
        Self::ConnectionFailed {
            server: server.into(),
            message: message.to_string(),
        }
    }

    pub fn initialization_failed(server: impl Into<String>, message: impl ToString) -> Self {
        Self::InitializationFailed {
            server: server.into(),
            message: message.to_string(),
        }
    }

    pub fn protocol(server: impl Into<String>, message: impl ToString) -> Self {
        Self::Protocol {
            server: server.into(),
            message: message.to_string(),
        }
    }
}

pub type McpResult<T> = Result<T, McpError>;
