//! Tool registry
//!
//! Loads MCP tools once, on first use, and serves them by name to the
//! agent runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  ToolRegistry                               │
//! │                                             │
//! │  - Reads MCP_SERVERS_JSON (once)            │
//! │  - Fetches tools via the client capability  │
//! │  - Caches name -> tool for process lifetime │
//! │  - Routes tool calls to the owning server   │
//! └─────────────────────────────────────────────┘
//!           │
//!           │ McpClientFactory / MultiServerClient
//!           ▼
//! ┌─────────────────────────────────────────────┐
//! │  MCP servers (stdio, streamable HTTP)       │
//! └─────────────────────────────────────────────┘
//! ```

mod registry;

pub use registry::{ToolRegistry, LoadStatus};
