use super::SettingsStore;
use crate::error::{ResubError, Result};
use crate::model::Settings;
use serde_json::Value;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    blob: Option<Value>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a raw blob, as if a previous session had
    /// saved it.
    pub fn seeded(blob: Value) -> Self {
        Self { blob: Some(blob) }
    }

    pub fn blob(&self) -> Option<&Value> {
        self.blob.as_ref()
    }
}

impl SettingsStore for InMemoryStore {
    fn load_raw(&self) -> Result<Option<Value>> {
        Ok(self.blob.clone())
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        self.blob = Some(serde_json::to_value(settings).map_err(ResubError::Serialization)?);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use serde_json::{json, Value};

    /// A generation-1 blob: parallel string arrays only.
    pub fn gen1_blob(patterns: &[&str], replacers: &[&str]) -> Value {
        json!({ "patterns": patterns, "replacers": replacers })
    }

    /// A generation-2 blob: string arrays plus per-index flags/comments.
    pub fn gen2_blob(
        patterns: &[&str],
        replacers: &[&str],
        enabled: &[bool],
        comments: &[&str],
    ) -> Value {
        json!({
            "patterns": patterns,
            "replacers": replacers,
            "enabled": enabled,
            "comments": comments,
            "formatVersion": 200
        })
    }
}
