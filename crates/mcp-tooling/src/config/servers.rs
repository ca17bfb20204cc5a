//! Server map parsing and loading

use std::collections::BTreeMap;

use serde_json::Value;

use super::traits::{ConfigError, ConfigResult, ServerConfigSource};
use crate::log_warn;
use crate::logging::Logger;

/// Server name → raw server configuration
///
/// Entries are kept exactly as they were decoded. Interpreting them
/// (transport, command, url) is left to the client; see `ServerSpec`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerConfig(BTreeMap<String, Value>);

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a server entry
    pub fn with_server(mut self, name: impl Into<String>, config: Value) -> Self {
        self.0.insert(name.into(), config);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Server names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<serde_json::Map<String, Value>> for ServerConfig {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self(map.into_iter().collect())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse a JSON server map
///
/// Only the outer shape is checked: the document must be a JSON object.
pub fn parse_servers(raw: &str) -> ConfigResult<ServerConfig> {
    let value: Value = serde_json::from_str(raw)?;
    match value {
        Value::Object(map) => Ok(map.into()),
        other => Err(ConfigError::NotAnObject(json_kind(&other))),
    }
}

/// Load the server map from `source`, degrading to an empty map
///
/// Missing or blank input yields an empty map silently. Input that fails
/// `parse_servers` yields an empty map and a warning.
pub fn load_server_config(source: &dyn ServerConfigSource, logger: &dyn Logger) -> ServerConfig {
    let raw = match source.raw() {
        Some(raw) => raw,
        None => return ServerConfig::new(),
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return ServerConfig::new();
    }

    match parse_servers(raw) {
        Ok(servers) => servers,
        Err(e) => {
            log_warn!(logger, "[Config] Invalid server map from {}: {}", source.name(), e);
            ServerConfig::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfigSource;
    use crate::logging::{LogLevel, MemoryLogger};
    use serde_json::json;

    #[test]
    fn test_parse_servers_object() {
        let servers = parse_servers(
            r#"{"calendar": {"transport": "sse", "url": "http://localhost:3002/sse"}}"#,
        )
        .unwrap();

        assert_eq!(servers.len(), 1);
        assert_eq!(
            servers.get("calendar"),
            Some(&json!({"transport": "sse", "url": "http://localhost:3002/sse"}))
        );
    }

    #[test]
    fn test_parse_servers_keeps_inner_shape() {
        // Inner values are not validated here
        let servers = parse_servers(r#"{"odd": 5, "list": [1, 2]}"#).unwrap();
        assert_eq!(servers.get("odd"), Some(&json!(5)));
        assert_eq!(servers.names().collect::<Vec<_>>(), vec!["list", "odd"]);
    }

    #[test]
    fn test_parse_servers_rejects_non_object() {
        assert!(matches!(parse_servers("[]"), Err(ConfigError::NotAnObject("an array"))));
        assert!(matches!(parse_servers("\"x\""), Err(ConfigError::NotAnObject("a string"))));
        assert!(matches!(parse_servers("null"), Err(ConfigError::NotAnObject("null"))));
        assert!(matches!(parse_servers("{not json"), Err(ConfigError::InvalidJson(_))));
    }

    #[test]
    fn test_load_missing_or_blank_is_empty_and_quiet() {
        let logger = MemoryLogger::new();

        let missing = MemoryConfigSource::new();
        assert!(load_server_config(&missing, &logger).is_empty());

        for blank in ["", "   ", "\n\t"] {
            let source = MemoryConfigSource::with_raw(blank);
            assert!(load_server_config(&source, &logger).is_empty());
        }

        assert!(logger.records().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty_with_warning() {
        for raw in ["{", "42", "[{\"a\": 1}]", "true", "nul"] {
            let logger = MemoryLogger::new();
            let source = MemoryConfigSource::with_raw(raw);

            assert!(load_server_config(&source, &logger).is_empty(), "input: {raw}");
            assert!(logger.contains(LogLevel::Warn, "Invalid server map from memory"), "input: {raw}");
        }
    }

    #[test]
    fn test_load_valid_is_returned_as_is() {
        let logger = MemoryLogger::new();
        let source = MemoryConfigSource::with_raw(
            "  {\"x\": {\"transport\": \"sse\", \"url\": \"http://h/sse\"}}  ",
        );

        let servers = load_server_config(&source, &logger);
        let expected = ServerConfig::new()
            .with_server("x", json!({"transport": "sse", "url": "http://h/sse"}));

        assert_eq!(servers, expected);
        assert!(logger.records().is_empty());
    }
}
