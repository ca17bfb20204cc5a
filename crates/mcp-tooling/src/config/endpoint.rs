//! Typed view of a single server entry

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::Value;

use super::traits::{ConfigError, ConfigResult};

/// How the client talks to a server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportKind {
    /// Child process speaking MCP over stdin/stdout
    Stdio,
    /// Streamable HTTP endpoint
    StreamableHttp,
}

/// Accepted `transport` spellings
///
/// `sse` is served by the streamable HTTP client; there is no separate
/// legacy SSE transport.
static TRANSPORT_ALIASES: Lazy<HashMap<&'static str, TransportKind>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("stdio", TransportKind::Stdio);
    m.insert("streamable_http", TransportKind::StreamableHttp);
    m.insert("streamable-http", TransportKind::StreamableHttp);
    m.insert("http", TransportKind::StreamableHttp);
    m.insert("sse", TransportKind::StreamableHttp);
    m
});

impl TransportKind {
    /// Look up a transport by name (case-insensitive)
    pub fn parse(name: &str) -> Option<Self> {
        TRANSPORT_ALIASES.get(name.to_lowercase().as_str()).copied()
    }
}

#[derive(Debug, Deserialize)]
struct RawServerEntry {
    #[serde(default)]
    transport: Option<String>,

    // stdio server
    #[serde(default)]
    command: Option<String>,
    #[serde(default)]
    args: Vec<String>,
    #[serde(default)]
    env: BTreeMap<String, String>,
    #[serde(default)]
    cwd: Option<PathBuf>,

    // http server
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    headers: BTreeMap<String, String>,

    #[serde(default)]
    disabled: bool,
}

/// Connection details for one server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEndpoint {
    Stdio {
        command: String,
        args: Vec<String>,
        env: BTreeMap<String, String>,
        cwd: Option<PathBuf>,
    },
    StreamableHttp {
        url: String,
        headers: BTreeMap<String, String>,
    },
}

impl ServerEndpoint {
    pub fn transport(&self) -> TransportKind {
        match self {
            ServerEndpoint::Stdio { .. } => TransportKind::Stdio,
            ServerEndpoint::StreamableHttp { .. } => TransportKind::StreamableHttp,
        }
    }

    /// Token of an `Authorization: Bearer <token>` header, if configured
    pub fn bearer_token(&self) -> Option<&str> {
        let ServerEndpoint::StreamableHttp { headers, .. } = self else {
            return None;
        };
        headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("authorization"))
            .and_then(|(_, value)| {
                let (scheme, token) = value.trim().split_once(' ')?;
                scheme.eq_ignore_ascii_case("bearer").then(|| token.trim())
            })
            .filter(|token| !token.is_empty())
    }

    /// Configured headers the HTTP transport cannot send
    ///
    /// Only bearer authorization is forwarded.
    pub fn unsupported_headers(&self) -> Vec<&str> {
        let ServerEndpoint::StreamableHttp { headers, .. } = self else {
            return Vec::new();
        };
        let has_bearer = self.bearer_token().is_some();
        headers
            .keys()
            .map(String::as_str)
            .filter(|name| !(has_bearer && name.eq_ignore_ascii_case("authorization")))
            .collect()
    }
}

/// A server entry resolved into something a client can connect to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSpec {
    pub name: String,
    pub endpoint: ServerEndpoint,
    pub disabled: bool,
}

impl ServerSpec {
    /// Interpret one raw entry of a `ServerConfig`
    ///
    /// Without an explicit `transport`, `command` selects stdio and `url`
    /// selects streamable HTTP. Unknown keys are ignored.
    pub fn from_value(name: &str, value: &Value) -> ConfigResult<Self> {
        let raw: RawServerEntry = serde_json::from_value(value.clone())
            .map_err(|e| ConfigError::invalid_server(name, e.to_string()))?;

        let transport = match raw.transport.as_deref() {
            Some(t) => TransportKind::parse(t).ok_or_else(|| ConfigError::UnknownTransport {
                server: name.to_string(),
                transport: t.to_string(),
            })?,
            None if raw.command.is_some() => TransportKind::Stdio,
            None if raw.url.is_some() => TransportKind::StreamableHttp,
            None => {
                return Err(ConfigError::invalid_server(
                    name,
                    "must have either `command` or `url`",
                ))
            }
        };

        let endpoint = match transport {
            TransportKind::Stdio => ServerEndpoint::Stdio {
                command: raw
                    .command
                    .filter(|c| !c.trim().is_empty())
                    .ok_or_else(|| ConfigError::invalid_server(name, "stdio transport requires `command`"))?,
                args: raw.args,
                env: raw.env,
                cwd: raw.cwd,
            },
            TransportKind::StreamableHttp => ServerEndpoint::StreamableHttp {
                url: raw
                    .url
                    .filter(|u| !u.trim().is_empty())
                    .ok_or_else(|| ConfigError::invalid_server(name, "http transport requires `url`"))?,
                headers: raw.headers,
            },
        };

        Ok(Self {
            name: name.to_string(),
            endpoint,
            disabled: raw.disabled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transport_aliases() {
        assert_eq!(TransportKind::parse("stdio"), Some(TransportKind::Stdio));
        assert_eq!(TransportKind::parse("SSE"), Some(TransportKind::StreamableHttp));
        assert_eq!(TransportKind::parse("streamable-http"), Some(TransportKind::StreamableHttp));
        assert_eq!(TransportKind::parse("websocket"), None);
    }

    #[test]
    fn test_sse_entry() {
        let spec = ServerSpec::from_value(
            "calendar",
            &json!({"transport": "sse", "url": "http://localhost:3002/sse"}),
        )
        .unwrap();

        assert_eq!(spec.name, "calendar");
        assert!(!spec.disabled);
        assert_eq!(
            spec.endpoint,
            ServerEndpoint::StreamableHttp {
                url: "http://localhost:3002/sse".to_string(),
                headers: BTreeMap::new(),
            }
        );
    }

    #[test]
    fn test_stdio_entry_inferred() {
        let spec = ServerSpec::from_value(
            "files",
            &json!({
                "command": "npx",
                "args": ["-y", "@modelcontextprotocol/server-filesystem", "/tmp"],
                "env": {"DEBUG": "1"},
                "headers": {"ignored": "yes"}
            }),
        )
        .unwrap();

        assert_eq!(spec.endpoint.transport(), TransportKind::Stdio);
        match spec.endpoint {
            ServerEndpoint::Stdio { command, args, env, cwd } => {
                assert_eq!(command, "npx");
                assert_eq!(args.len(), 3);
                assert_eq!(env.get("DEBUG").map(String::as_str), Some("1"));
                assert!(cwd.is_none());
            }
            other => panic!("expected stdio endpoint, got {other:?}"),
        }
    }

    #[test]
    fn test_http_headers_kept() {
        let spec = ServerSpec::from_value(
            "crm",
            &json!({
                "transport": "streamable_http",
                "url": "https://crm.example/mcp",
                "headers": {"Authorization": "Bearer s3cret", "X-Tenant": "acme"}
            }),
        )
        .unwrap();

        match &spec.endpoint {
            ServerEndpoint::StreamableHttp { headers, .. } => {
                assert_eq!(headers.get("X-Tenant").map(String::as_str), Some("acme"));
            }
            other => panic!("expected http endpoint, got {other:?}"),
        }
        assert_eq!(spec.endpoint.bearer_token(), Some("s3cret"));
        assert_eq!(spec.endpoint.unsupported_headers(), vec!["X-Tenant"]);
    }

    #[test]
    fn test_non_bearer_authorization_is_unsupported() {
        let spec = ServerSpec::from_value(
            "crm",
            &json!({"url": "https://crm.example/mcp", "headers": {"authorization": "Basic dXNlcg=="}}),
        )
        .unwrap();

        assert_eq!(spec.endpoint.bearer_token(), None);
        assert_eq!(spec.endpoint.unsupported_headers(), vec!["authorization"]);

        let stdio = ServerSpec::from_value("files", &json!({"command": "mcp-files"})).unwrap();
        assert_eq!(stdio.endpoint.bearer_token(), None);
        assert!(stdio.endpoint.unsupported_headers().is_empty());
    }

    #[test]
    fn test_disabled_flag() {
        let spec = ServerSpec::from_value("x", &json!({"url": "http://h/mcp", "disabled": true})).unwrap();
        assert!(spec.disabled);
    }

    #[test]
    fn test_invalid_entries() {
        assert!(matches!(
            ServerSpec::from_value("x", &json!(5)),
            Err(ConfigError::InvalidServer { .. })
        ));
        assert!(matches!(
            ServerSpec::from_value("x", &json!({})),
            Err(ConfigError::InvalidServer { .. })
        ));
        assert!(matches!(
            ServerSpec::from_value("x", &json!({"transport": "stdio", "url": "http://h"})),
            Err(ConfigError::InvalidServer { .. })
        ));
        assert!(matches!(
            ServerSpec::from_value("x", &json!({"transport": "websocket", "url": "ws://h"})),
            Err(ConfigError::UnknownTransport { .. })
        ));
    }
}
