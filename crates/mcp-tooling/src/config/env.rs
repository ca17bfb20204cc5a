//! Environment variable configuration source

use std::env;

use super::traits::ServerConfigSource;

/// Default environment variable holding the server map
pub const MCP_SERVERS_ENV: &str = "MCP_SERVERS_JSON";

/// Reads the server map from an environment variable
///
/// The variable is read on every call to `raw()`, so the value seen is
/// whatever the process environment holds at load time. Unset and
/// non-UTF-8 values both read as "not configured".
///
/// # Example
///
/// ```
/// use mcp_tooling::config::{EnvConfigSource, ServerConfigSource};
///
/// let source = EnvConfigSource::new();
/// assert_eq!(source.var(), "MCP_SERVERS_JSON");
/// assert_eq!(source.name(), "env:MCP_SERVERS_JSON");
/// ```
#[derive(Debug, Clone)]
pub struct EnvConfigSource {
    var: String,
    label: String,
}

impl Default for EnvConfigSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvConfigSource {
    /// Source reading `MCP_SERVERS_JSON`
    pub fn new() -> Self {
        Self::with_var(MCP_SERVERS_ENV)
    }

    /// Source reading a custom variable
    pub fn with_var(var: impl Into<String>) -> Self {
        let var = var.into();
        let label = format!("env:{}", var);
        Self { var, label }
    }

    /// Name of the variable this source reads
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl ServerConfigSource for EnvConfigSource {
    fn name(&self) -> &str {
        &self.label
    }

    fn raw(&self) -> Option<String> {
        env::var(&self.var).ok()
    }
}
