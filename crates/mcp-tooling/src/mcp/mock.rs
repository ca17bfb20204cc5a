//! Mock client capability for testing
//!
//! Deterministic tool lists and failures without spawning processes or
//! opening sockets. Counts how often clients are created and how often
//! tools are fetched, so callers can assert caching behavior.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::error::{McpError, McpResult};
use super::traits::{McpClientFactory, MultiServerClient};
use crate::config::ServerConfig;
use crate::types::{Tool, ToolOutput};

/// Mock behavior
#[derive(Debug, Clone)]
pub enum MockMode {
    /// `get_tools` returns these tools
    Tools(Vec<Tool>),
    /// `create` fails with this message
    FailCreate(String),
    /// `get_tools` fails with this message
    FailFetch(String),
}

impl Default for MockMode {
    fn default() -> Self {
        MockMode::Tools(Vec::new())
    }
}

#[derive(Debug, Default)]
struct Counters {
    creates: AtomicUsize,
    fetches: AtomicUsize,
    calls: AtomicUsize,
}

/// Mock client factory
#[derive(Debug, Default)]
pub struct MockClientFactory {
    mode: MockMode,
    fetch_delay: Option<Duration>,
    counters: Arc<Counters>,
}

impl MockClientFactory {
    pub fn with_mode(mode: MockMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Factory whose clients return `tools`
    pub fn tools(tools: Vec<Tool>) -> Self {
        Self::with_mode(MockMode::Tools(tools))
    }

    /// Factory whose clients return tools named `names` on server `server`
    pub fn named(server: &str, names: &[&str]) -> Self {
        Self::tools(names.iter().map(|n| Tool::new(*n, server)).collect())
    }

    /// Factory that fails to create clients
    pub fn fail_create(message: impl Into<String>) -> Self {
        Self::with_mode(MockMode::FailCreate(message.into()))
    }

    /// Factory whose clients fail to fetch tools
    pub fn fail_fetch(message: impl Into<String>) -> Self {
        Self::with_mode(MockMode::FailFetch(message.into()))
    }

    /// Sleep this long inside every fetch
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = Some(delay);
        self
    }

    /// Number of `create` calls so far
    pub fn create_count(&self) -> usize {
        self.counters.creates.load(Ordering::SeqCst)
    }

    /// Number of `get_tools` calls so far, across all created clients
    pub fn fetch_count(&self) -> usize {
        self.counters.fetches.load(Ordering::SeqCst)
    }

    /// Number of `call_tool` calls so far, across all created clients
    pub fn call_count(&self) -> usize {
        self.counters.calls.load(Ordering::SeqCst)
    }
}

impl McpClientFactory for MockClientFactory {
    fn name(&self) -> &str {
        "mock"
    }

    fn create(&self, servers: &ServerConfig) -> McpResult<Arc<dyn MultiServerClient>> {
        self.counters.creates.fetch_add(1, Ordering::SeqCst);

        if let MockMode::FailCreate(message) = &self.mode {
            return Err(McpError::Other(message.clone()));
        }

        Ok(Arc::new(MockClient {
            servers: servers.names().map(String::from).collect(),
            mode: self.mode.clone(),
            fetch_delay: self.fetch_delay,
            counters: self.counters.clone(),
        }))
    }
}

struct MockClient {
    servers: Vec<String>,
    mode: MockMode,
    fetch_delay: Option<Duration>,
    counters: Arc<Counters>,
}

#[async_trait]
impl MultiServerClient for MockClient {
    fn servers(&self) -> Vec<String> {
        self.servers.clone()
    }

    async fn get_tools(&self) -> McpResult<Vec<Tool>> {
        self.counters.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.fetch_delay {
            tokio::time::sleep(delay).await;
        }

        match &self.mode {
            MockMode::Tools(tools) => Ok(tools.clone()),
            MockMode::FailFetch(message) => Err(McpError::protocol("mock", message)),
            MockMode::FailCreate(message) => Err(McpError::Other(message.clone())),
        }
    }

    async fn call_tool(&self, server: &str, name: &str, arguments: Value) -> McpResult<ToolOutput> {
        self.counters.calls.fetch_add(1, Ordering::SeqCst);

        let known = match &self.mode {
            MockMode::Tools(tools) => tools.iter().any(|t| t.server == server && t.name == name),
            _ => false,
        };
        if !known {
            return Err(McpError::ToolNotFound(name.to_string()));
        }

        Ok(ToolOutput::text(format!("{} on {}: {}", name, server, arguments)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn servers() -> ServerConfig {
        ServerConfig::new().with_server("x", json!({"url": "http://h/sse"}))
    }

    #[tokio::test]
    async fn test_mock_tools() {
        let factory = MockClientFactory::named("x", &["a", "b"]);
        let client = factory.create(&servers()).unwrap();

        assert_eq!(client.servers(), vec!["x".to_string()]);
        let tools = client.get_tools().await.unwrap();
        assert_eq!(tools.len(), 2);
        assert_eq!(factory.create_count(), 1);
        assert_eq!(factory.fetch_count(), 1);

        let output = client.call_tool("x", "a", json!({"q": 1})).await.unwrap();
        assert_eq!(output.joined(), r#"a on x: {"q":1}"#);
        assert!(client.call_tool("x", "zzz", json!({})).await.is_err());
        assert_eq!(factory.call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_failures() {
        let factory = MockClientFactory::fail_create("no client");
        assert!(factory.create(&servers()).is_err());
        assert_eq!(factory.create_count(), 1);

        let factory = MockClientFactory::fail_fetch("server went away");
        let client = factory.create(&servers()).unwrap();
        let err = client.get_tools().await.err().unwrap();
        assert!(err.to_string().contains("server went away"));
        assert_eq!(factory.fetch_count(), 1);
    }
}
