#![cfg(feature = "rmcp-client")]

use std::sync::Arc;

use mcp_tooling::{
    LoadStatus, LogLevel, McpClientFactory, MemoryConfigSource, MemoryLogger, RmcpClientFactory,
    ServerConfig, ToolCall, ToolRegistry,
};
use serde_json::json;

fn stdio_entry() -> serde_json::Value {
    json!({
        "transport": "stdio",
        "command": env!("CARGO_BIN_EXE_mcp-tooling-stdio-test-server"),
    })
}

fn servers() -> ServerConfig {
    ServerConfig::new().with_server("local", stdio_entry())
}

#[tokio::test]
async fn test_get_tools_follows_pagination() {
    let logger = Arc::new(MemoryLogger::new());
    let client = RmcpClientFactory::new(logger.clone()).create(&servers()).unwrap();

    let mut tools = client.get_tools().await.unwrap();
    tools.sort_by(|a, b| a.name.cmp(&b.name));

    let names: Vec<_> = tools.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["echo", "shout"]);
    assert!(logger.contains(LogLevel::Info, "Server `local` listed 2 tools"));
}

#[tokio::test]
async fn test_get_tools_maps_descriptors() {
    let client = RmcpClientFactory::new(Arc::new(MemoryLogger::new()))
        .create(&servers())
        .unwrap();

    let tools = client.get_tools().await.unwrap();
    let echo = tools.iter().find(|t| t.name == "echo").unwrap();
    let shout = tools.iter().find(|t| t.name == "shout").unwrap();

    assert_eq!(echo.server, "local");
    assert_eq!(echo.description, "Echo the `text` argument");
    assert_eq!(echo.input_schema["properties"]["text"]["type"], "string");
    assert_eq!(echo.input_schema["required"], json!(["text"]));
    assert_eq!(shout.description, "");
    assert_eq!(shout.input_schema["type"], "object");
}

#[tokio::test]
async fn test_call_tool_extracts_text() {
    let client = RmcpClientFactory::new(Arc::new(MemoryLogger::new()))
        .create(&servers())
        .unwrap();

    let output = client.call_tool("local", "echo", json!({"text": "hello"})).await.unwrap();
    assert!(!output.is_error);
    assert_eq!(output.text, vec!["hello".to_string(), "done".to_string()]);

    let failed = client.call_tool("local", "shout", json!({})).await.unwrap();
    assert!(failed.is_error);
    assert_eq!(failed.joined(), "shouting is disabled");
}

#[tokio::test]
async fn test_registry_over_stdio_server() {
    let logger = Arc::new(MemoryLogger::new());
    let registry = ToolRegistry::new(
        Some(Arc::new(RmcpClientFactory::new(logger.clone())) as Arc<dyn McpClientFactory>),
        Arc::new(MemoryConfigSource::with_json(&json!({ "local": stdio_entry() }))),
        logger.clone(),
    );

    let tools = registry.load().await;

    assert_eq!(tools.len(), 2);
    assert_eq!(registry.status(), LoadStatus::Ready { tools: 2 });
    assert_eq!(registry.get_tool("shout").map(|t| t.server), Some("local".to_string()));

    let result = registry
        .execute_tool_call(&ToolCall::new("call_1", "echo", json!({"text": "hi"})))
        .await;
    assert!(!result.is_error);
    assert_eq!(result.content, "hi\ndone");
}
