//! Logging abstractions
//!
//! Components never write to stdout/stderr directly; they are handed an
//! `Arc<dyn Logger>` by whoever embeds them (agent runtime, CLI, tests).

mod traits;
mod noop;
mod console;
mod memory;

pub use traits::{Logger, LogLevel, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use memory::{MemoryLogger, LogRecord};
