//! MCP client using the official rmcp SDK
//!
//! Each fetch or call opens a fresh session to the server involved and
//! closes it afterwards; no connection outlives a single operation.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::try_join_all;
use rmcp::{
    model::{CallToolRequestParams, ClientCapabilities, ClientInfo, Implementation, RawContent},
    service::RunningService,
    transport::{
        streamable_http_client::StreamableHttpClientTransportConfig, ConfigureCommandExt,
        StreamableHttpClientTransport, TokioChildProcess,
    },
    RoleClient, ServiceExt,
};
use serde_json::Value;
use tokio::process::Command;

use super::error::{McpError, McpResult};
use super::traits::{McpClientFactory, MultiServerClient};
use crate::config::{ServerConfig, ServerEndpoint, ServerSpec};
use crate::logging::SharedLogger;
use crate::types::{Tool, ToolOutput};
use crate::{log_debug, log_info, log_warn};

type Session = RunningService<RoleClient, ClientInfo>;

/// Factory producing rmcp-backed clients
pub struct RmcpClientFactory {
    logger: SharedLogger,
}

impl RmcpClientFactory {
    pub fn new(logger: SharedLogger) -> Self {
        Self { logger }
    }
}

impl McpClientFactory for RmcpClientFactory {
    fn name(&self) -> &str {
        "rmcp"
    }

    fn create(&self, servers: &ServerConfig) -> McpResult<Arc<dyn MultiServerClient>> {
        let mut specs = Vec::with_capacity(servers.len());
        for (name, value) in servers.iter() {
            let spec = ServerSpec::from_value(name, value)?;
            if spec.disabled {
                log_info!(self.logger, "[McpClient] Skipping disabled server `{}`", name);
                continue;
            }
            let unsupported = spec.endpoint.unsupported_headers();
            if !unsupported.is_empty() {
                log_warn!(
                    self.logger,
                    "[McpClient] Server `{}`: headers not sent (only bearer Authorization is supported): {}",
                    name,
                    unsupported.join(", ")
                );
            }
            specs.push(spec);
        }

        Ok(Arc::new(RmcpMultiServerClient {
            servers: specs,
            logger: self.logger.clone(),
        }))
    }
}

/// Client over a fixed set of servers
pub struct RmcpMultiServerClient {
    servers: Vec<ServerSpec>,
    logger: SharedLogger,
}

impl RmcpMultiServerClient {
    fn client_info() -> ClientInfo {
        ClientInfo {
            meta: None,
            protocol_version: Default::default(),
            capabilities: ClientCapabilities::default(),
            client_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                title: Some("MCP Tooling".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                website_url: None,
                icons: None,
            },
        }
    }

    fn spec(&self, server: &str) -> McpResult<&ServerSpec> {
        self.servers
            .iter()
            .find(|s| s.name == server)
            .ok_or_else(|| McpError::UnknownServer(server.to_string()))
    }

    async fn connect(&self, spec: &ServerSpec) -> McpResult<Session> {
        let session = match &spec.endpoint {
            ServerEndpoint::Stdio { command, args, env, cwd } => {
                log_debug!(self.logger, "[McpClient] Spawning `{}` for server `{}`", command, spec.name);

                let command = Command::new(command).configure(|cmd| {
                    cmd.args(args).envs(env);
                    if let Some(dir) = cwd {
                        cmd.current_dir(dir);
                    }
                });
                let transport = TokioChildProcess::new(command)
                    .map_err(|e| McpError::connection_failed(&spec.name, e))?;

                Self::client_info()
                    .serve(transport)
                    .await
                    .map_err(|e| McpError::initialization_failed(&spec.name, e))?
            }
            ServerEndpoint::StreamableHttp { url, .. } => {
                log_debug!(self.logger, "[McpClient] Connecting to {} for server `{}`", url, spec.name);

                let mut config = StreamableHttpClientTransportConfig::with_uri(url.as_str());
                if let Some(token) = spec.endpoint.bearer_token() {
                    config = config.auth_header(token);
                }
                let transport = StreamableHttpClientTransport::from_config(config);

                Self::client_info()
                    .serve(transport)
                    .await
                    .map_err(|e| McpError::initialization_failed(&spec.name, e))?
            }
        };

        Ok(session)
    }

    async fn close(&self, server: &str, session: Session) {
        if let Err(e) = session.cancel().await {
            log_warn!(self.logger, "[McpClient] Closing session to `{}` failed: {}", server, e);
        }
    }

    async fn list_server_tools(&self, spec: &ServerSpec) -> McpResult<Vec<Tool>> {
        let session = self.connect(spec).await?;
        // Follows `nextCursor` until the server stops paginating
        let listed = session.list_all_tools().await;
        self.close(&spec.name, session).await;

        let tools = listed.map_err(|e| McpError::protocol(&spec.name, e))?;
        log_info!(self.logger, "[McpClient] Server `{}` listed {} tools", spec.name, tools.len());

        Ok(tools
            .into_iter()
            .map(|tool| tool_from_rmcp(&spec.name, tool))
            .collect())
    }
}

fn tool_from_rmcp(server: &str, tool: rmcp::model::Tool) -> Tool {
    Tool {
        name: tool.name.to_string(),
        description: tool.description.map(|s| s.to_string()).unwrap_or_default(),
        // input_schema is Arc<JsonObject>, convert to Value
        input_schema: serde_json::to_value(tool.input_schema.as_ref()).unwrap_or_default(),
        server: server.to_string(),
    }
}

#[async_trait]
impl MultiServerClient for RmcpMultiServerClient {
    fn servers(&self) -> Vec<String> {
        self.servers.iter().map(|s| s.name.clone()).collect()
    }

    async fn get_tools(&self) -> McpResult<Vec<Tool>> {
        let per_server = try_join_all(self.servers.iter().map(|spec| self.list_server_tools(spec))).await?;
        Ok(per_server.into_iter().flatten().collect())
    }

    async fn call_tool(&self, server: &str, name: &str, arguments: Value) -> McpResult<ToolOutput> {
        let spec = self.spec(server)?;
        log_info!(self.logger, "[McpClient] Calling tool `{}` on `{}`", name, server);

        let params = CallToolRequestParams {
            meta: None,
            name: name.to_owned().into(),
            arguments: arguments.as_object().cloned(),
            task: None,
        };

        let session = self.connect(spec).await?;
        let called = session.call_tool(params).await;
        self.close(server, session).await;

        let result = called.map_err(|e| McpError::ToolCallFailed(e.to_string()))?;

        // Content is Annotated<RawContent>; only text parts are kept
        let text = result
            .content
            .iter()
            .filter_map(|c| match &c.raw {
                RawContent::Text(t) => Some(t.text.clone()),
                _ => None,
            })
            .collect();

        Ok(ToolOutput {
            text,
            is_error: result.is_error.unwrap_or(false),
        })
    }
}
