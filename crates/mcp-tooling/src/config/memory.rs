//! In-memory configuration source

use parking_lot::RwLock;

use super::traits::ServerConfigSource;

/// In-memory configuration source for testing
#[derive(Debug, Default)]
pub struct MemoryConfigSource {
    raw: RwLock<Option<String>>,
}

impl MemoryConfigSource {
    /// Create an empty source (reads as "not configured")
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source holding `raw`
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RwLock::new(Some(raw.into())),
        }
    }

    /// Create a source from a JSON value
    pub fn with_json(value: &serde_json::Value) -> Self {
        Self::with_raw(value.to_string())
    }

    /// Replace the held value
    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.raw.write() = Some(raw.into());
    }

    pub fn clear(&self) {
        *self.raw.write() = None;
    }
}

impl ServerConfigSource for MemoryConfigSource {
    fn name(&self) -> &str {
        "memory"
    }

    fn raw(&self) -> Option<String> {
        self.raw.read().clone()
    }
}
