//! Minimal MCP stdio server used by the rmcp client tests.
//!
//! Speaks line-delimited JSON-RPC directly. `tools/list` is split over two
//! pages (`echo`, then `shout` behind cursor `page-2`).

use std::io::{BufRead as _, Write};

use serde_json::{json, Value};

const SECOND_PAGE: &str = "page-2";

fn main() -> std::io::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        if let Some(resp) = handle_line(&line) {
            writeln!(stdout, "{}", resp)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn handle_line(line: &str) -> Option<Value> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let msg: Value = serde_json::from_str(line).ok()?;
    let method = msg.get("method").and_then(Value::as_str)?;

    // Notifications carry no id
    let id = msg.get("id")?.clone();
    let params = msg.get("params").cloned().unwrap_or(Value::Null);

    let outcome = match method {
        "initialize" => Ok(initialize_result(&params)),
        "ping" => Ok(json!({})),
        "tools/list" => tools_list_result(&params),
        "tools/call" => tools_call_result(&params),
        _ => Err(json!({ "code": -32601, "message": "method not found" })),
    };

    Some(match outcome {
        Ok(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
        Err(error) => json!({ "jsonrpc": "2.0", "id": id, "error": error }),
    })
}

fn initialize_result(params: &Value) -> Value {
    let protocol_version = params
        .get("protocolVersion")
        .and_then(Value::as_str)
        .unwrap_or("2024-11-05");

    json!({
        "protocolVersion": protocol_version,
        "capabilities": { "tools": {} },
        "serverInfo": { "name": "mcp-tooling-stdio-test-server", "version": "0" }
    })
}

fn tools_list_result(params: &Value) -> Result<Value, Value> {
    match params.get("cursor").and_then(Value::as_str) {
        None => Ok(json!({
            "tools": [{
                "name": "echo",
                "description": "Echo the `text` argument",
                "inputSchema": {
                    "type": "object",
                    "properties": { "text": { "type": "string" } },
                    "required": ["text"]
                }
            }],
            "nextCursor": SECOND_PAGE
        })),
        Some(SECOND_PAGE) => Ok(json!({
            "tools": [{
                "name": "shout",
                "inputSchema": { "type": "object" }
            }]
        })),
        Some(other) => Err(json!({ "code": -32602, "message": format!("unknown cursor {other}") })),
    }
}

fn tools_call_result(params: &Value) -> Result<Value, Value> {
    let name = params.get("name").and_then(Value::as_str).unwrap_or("");
    let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);

    match name {
        "echo" => {
            let text = arguments.get("text").and_then(Value::as_str).unwrap_or("");
            Ok(json!({
                "content": [
                    { "type": "text", "text": text },
                    { "type": "text", "text": "done" }
                ]
            }))
        }
        "shout" => Ok(json!({
            "content": [{ "type": "text", "text": "shouting is disabled" }],
            "isError": true
        })),
        _ => Err(json!({ "code": -32602, "message": "unknown tool" })),
    }
}
