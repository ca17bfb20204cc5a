//! Client capability traits

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::error::McpResult;
use crate::config::ServerConfig;
use crate::types::{Tool, ToolOutput};

/// Builds clients for a server map
///
/// Creation only validates and records the configuration; connections are
/// made when tools are fetched or called.
pub trait McpClientFactory: Send + Sync {
    /// Human-readable name of the implementation
    fn name(&self) -> &str;

    /// Create a client covering every server in `servers`
    fn create(&self, servers: &ServerConfig) -> McpResult<Arc<dyn MultiServerClient>>;
}

/// A client spanning several named MCP servers
#[async_trait]
pub trait MultiServerClient: Send + Sync {
    /// Names of the servers this client will contact
    fn servers(&self) -> Vec<String>;

    /// Fetch the tools of every server
    ///
    /// Fails as a whole if any server fails.
    async fn get_tools(&self) -> McpResult<Vec<Tool>>;

    /// Invoke `name` on `server`
    async fn call_tool(&self, server: &str, name: &str, arguments: Value) -> McpResult<ToolOutput>;
}
