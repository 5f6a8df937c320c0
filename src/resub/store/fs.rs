use super::SettingsStore;
use crate::error::{ResubError, Result};
use crate::model::Settings;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILENAME: &str = "settings.json";

/// File-backed settings store.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// A store rooted at a directory, using the default file name.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            path: dir.as_ref().join(SETTINGS_FILENAME),
        }
    }

    /// A store at an explicit file path.
    pub fn at_path<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileStore {
    fn load_raw(&self) -> Result<Option<Value>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(ResubError::Io)?;
        let blob = serde_json::from_str(&content).map_err(ResubError::Serialization)?;
        Ok(Some(blob))
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(ResubError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(settings).map_err(ResubError::Serialization)?;
        fs::write(&self.path, content).map_err(ResubError::Io)?;
        Ok(())
    }
}
