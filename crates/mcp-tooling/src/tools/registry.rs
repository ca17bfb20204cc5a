//! Lazily loaded, name-keyed tool registry
//!
//! Load never fails: a missing client capability, missing or malformed
//! configuration, and fetch errors all end in a loaded registry with no
//! tools. The outcome is kept in `LoadStatus`.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::config::{load_server_config, EnvConfigSource, ServerConfig, ServerConfigSource};
use crate::logging::SharedLogger;
use crate::mcp::{default_client_factory, McpClientFactory, McpError, McpResult, MultiServerClient};
use crate::types::{Tool, ToolCall, ToolOutput, ToolResult};
use crate::{log_debug, log_info, log_warn};

/// Outcome of the one-time load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// `load()` has not completed yet
    Unloaded,
    /// No client capability in this build or registry
    Unavailable,
    /// No servers configured
    NotConfigured,
    /// Tools fetched successfully
    Ready { tools: usize },
    /// Client creation or fetch failed, or the load was interrupted
    Failed { reason: String },
}

struct Catalog {
    status: LoadStatus,
    tools: HashMap<String, Tool>,
    client: Option<Arc<dyn MultiServerClient>>,
}

impl Catalog {
    fn empty(status: LoadStatus) -> Self {
        Self {
            status,
            tools: HashMap::new(),
            client: None,
        }
    }
}

enum LoadState {
    Unloaded,
    Loaded(Catalog),
}

/// Marks the registry loaded if a load is dropped before it finishes
struct LoadGuard<'a> {
    state: &'a RwLock<LoadState>,
    armed: bool,
}

impl LoadGuard<'_> {
    fn finish(mut self, catalog: Catalog) {
        *self.state.write() = LoadState::Loaded(catalog);
        self.armed = false;
    }
}

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            *self.state.write() = LoadState::Loaded(Catalog::empty(LoadStatus::Failed {
                reason: "load interrupted".to_string(),
            }));
        }
    }
}

/// Registry of MCP tools, loaded once per instance
///
/// Meant to be built once at startup and shared as `Arc<ToolRegistry>`
/// for the lifetime of the process. There is no reload: after the first
/// `load()` the tool set is fixed.
///
/// Concurrent first calls to `load()` are serialized; exactly one of them
/// fetches and the rest receive its result.
pub struct ToolRegistry {
    factory: Option<Arc<dyn McpClientFactory>>,
    config: Arc<dyn ServerConfigSource>,
    state: RwLock<LoadState>,
    load_lock: Mutex<()>,
    logger: SharedLogger,
}

impl ToolRegistry {
    /// Create a registry
    ///
    /// `factory` is the client capability; `None` means tools can never be
    /// loaded and `load()` returns an empty list.
    pub fn new(
        factory: Option<Arc<dyn McpClientFactory>>,
        config: Arc<dyn ServerConfigSource>,
        logger: SharedLogger,
    ) -> Self {
        Self {
            factory,
            config,
            state: RwLock::new(LoadState::Unloaded),
            load_lock: Mutex::new(()),
            logger,
        }
    }

    /// Registry reading `MCP_SERVERS_JSON` with the compiled-in client
    pub fn from_env(logger: SharedLogger) -> Self {
        Self::new(
            default_client_factory(logger.clone()),
            Arc::new(EnvConfigSource::new()),
            logger,
        )
    }

    /// Load tools on first call; later calls return the cached list
    pub async fn load(&self) -> Vec<Tool> {
        if self.is_loaded() {
            return self.tools();
        }

        let _lock = self.load_lock.lock().await;
        if self.is_loaded() {
            return self.tools();
        }

        let guard = LoadGuard {
            state: &self.state,
            armed: true,
        };
        let catalog = self.build_catalog().await;
        guard.finish(catalog);

        self.tools()
    }

    async fn build_catalog(&self) -> Catalog {
        let Some(factory) = self.factory.as_ref() else {
            log_info!(self.logger, "[ToolRegistry] No MCP client available; skipping MCP tool load");
            return Catalog::empty(LoadStatus::Unavailable);
        };

        let servers = load_server_config(self.config.as_ref(), self.logger.as_ref());
        if servers.is_empty() {
            log_debug!(self.logger, "[ToolRegistry] No MCP servers configured in {}", self.config.name());
            return Catalog::empty(LoadStatus::NotConfigured);
        }

        match self.fetch(factory.as_ref(), &servers).await {
            Ok((client, fetched)) => {
                let mut tools = HashMap::with_capacity(fetched.len());
                for tool in fetched {
                    if let Some(previous) = tools.insert(tool.name.clone(), tool) {
                        log_debug!(
                            self.logger,
                            "[ToolRegistry] Tool `{}` from `{}` replaced by a later definition",
                            previous.name,
                            previous.server
                        );
                    }
                }

                log_info!(
                    self.logger,
                    "[ToolRegistry] Loaded {} tools from {} servers via {}",
                    tools.len(),
                    servers.len(),
                    factory.name()
                );

                Catalog {
                    status: LoadStatus::Ready { tools: tools.len() },
                    tools,
                    client: Some(client),
                }
            }
            Err(e) => {
                log_warn!(self.logger, "[ToolRegistry] Failed to load MCP tools: {}", e);
                Catalog::empty(LoadStatus::Failed { reason: e.to_string() })
            }
        }
    }

    async fn fetch(
        &self,
        factory: &dyn McpClientFactory,
        servers: &ServerConfig,
    ) -> McpResult<(Arc<dyn MultiServerClient>, Vec<Tool>)> {
        let client = factory.create(servers)?;
        log_debug!(
            self.logger,
            "[ToolRegistry] Fetching tools from: {}",
            client.servers().join(", ")
        );
        let tools = client.get_tools().await?;
        Ok((client, tools))
    }

    /// Look up a tool by name
    pub fn get_tool(&self, name: &str) -> Option<Tool> {
        match &*self.state.read() {
            LoadState::Loaded(catalog) => catalog.tools.get(name).cloned(),
            LoadState::Unloaded => None,
        }
    }

    /// Names of all registered tools (snapshot)
    pub fn tool_names(&self) -> HashSet<String> {
        match &*self.state.read() {
            LoadState::Loaded(catalog) => catalog.tools.keys().cloned().collect(),
            LoadState::Unloaded => HashSet::new(),
        }
    }

    /// All registered tools, sorted by name
    pub fn tools(&self) -> Vec<Tool> {
        let mut tools: Vec<Tool> = match &*self.state.read() {
            LoadState::Loaded(catalog) => catalog.tools.values().cloned().collect(),
            LoadState::Unloaded => Vec::new(),
        };
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    pub fn tool_count(&self) -> usize {
        match &*self.state.read() {
            LoadState::Loaded(catalog) => catalog.tools.len(),
            LoadState::Unloaded => 0,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(*self.state.read(), LoadState::Loaded(_))
    }

    pub fn status(&self) -> LoadStatus {
        match &*self.state.read() {
            LoadState::Loaded(catalog) => catalog.status.clone(),
            LoadState::Unloaded => LoadStatus::Unloaded,
        }
    }

    /// Call a registered tool on the server that provided it
    pub async fn call_tool(&self, name: &str, arguments: Value) -> McpResult<ToolOutput> {
        let (client, server) = {
            let state = self.state.read();
            let catalog = match &*state {
                LoadState::Loaded(catalog) => catalog,
                LoadState::Unloaded => return Err(McpError::NoClient),
            };
            let client = catalog.client.clone().ok_or(McpError::NoClient)?;
            let tool = catalog
                .tools
                .get(name)
                .ok_or_else(|| McpError::ToolNotFound(name.to_string()))?;
            (client, tool.server.clone())
        };

        log_info!(self.logger, "[ToolRegistry] Calling tool: {}", name);
        client.call_tool(&server, name, arguments).await
    }

    /// Execute a tool call, folding any failure into an error result
    pub async fn execute_tool_call(&self, tool_call: &ToolCall) -> ToolResult {
        match self.call_tool(&tool_call.name, tool_call.input.clone()).await {
            Ok(output) if output.is_error => ToolResult::error(&tool_call.id, output.joined()),
            Ok(output) => ToolResult::success(&tool_call.id, output.joined()),
            Err(e) => ToolResult::error(&tool_call.id, format!("Error: {}", e)),
        }
    }

    /// Execute tool calls in order
    pub async fn execute_tool_calls(&self, tool_calls: &[ToolCall]) -> Vec<ToolResult> {
        let mut results = Vec::with_capacity(tool_calls.len());
        for call in tool_calls {
            results.push(self.execute_tool_call(call).await);
        }
        results
    }
}
