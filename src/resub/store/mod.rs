//! # Storage Layer
//!
//! The [`SettingsStore`] trait is the persistence boundary of the
//! engine. The core only ever asks two things of it: "give me the
//! last-saved raw blob, if any" and "persist this settings value".
//! Shape detection and migration happen on the engine side, so a store
//! never needs to understand old generations.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one pretty-printed JSON
//!   file (`settings.json` by default)
//! - [`memory::InMemoryStore`]: in-memory storage for testing, with no
//!   persistence

use crate::error::Result;
use crate::model::Settings;
use serde_json::Value;

pub mod fs;
pub mod memory;

/// Abstract interface for settings persistence.
pub trait SettingsStore {
    /// Load the last-saved raw blob, or `None` on first run. The blob
    /// may be of any known generation; callers migrate it.
    fn load_raw(&self) -> Result<Option<Value>>;

    /// Persist the current settings.
    fn save(&mut self, settings: &Settings) -> Result<()>;
}
