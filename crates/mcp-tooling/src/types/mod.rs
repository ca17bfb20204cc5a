//! Shared tool types

mod tool;

pub use tool::{Tool, ToolCall, ToolResult, ToolOutput};
