//! Calculator configuration: history capacity, storage keys and location.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Number of history entries kept when nothing else is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

const APP_DIR: &str = "genre-calculator";
const STATE_FILE: &str = "state.json";

/// Keys of the three persisted entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub history: String,
    pub always_on_top: String,
    pub opacity: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            history: "mgt2-history".to_string(),
            always_on_top: "mgt2-always-on-top".to_string(),
            opacity: "mgt2-opacity".to_string(),
        }
    }
}

/// Settings for a calculator session.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Maximum number of history entries retained.
    pub history_capacity: usize,

    /// File backing the key-value store. `None` = platform default.
    pub storage_path: Option<PathBuf>,

    pub keys: StorageKeys,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            storage_path: None,
            keys: StorageKeys::default(),
        }
    }
}

impl CalculatorConfig {
    /// Parse and check a TOML configuration document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: CalculatorConfig = toml::from_str(source)?;
        config.check()?;
        Ok(config)
    }

    /// Load a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Platform data directory location of the state file.
    ///
    /// Falls back to the working directory when the platform has no data dir.
    pub fn default_storage_path() -> PathBuf {
        dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR).join(STATE_FILE))
            .unwrap_or_else(|| PathBuf::from(format!("./{}-{}", APP_DIR, STATE_FILE)))
    }

    /// Configured storage path, or the platform default.
    pub fn resolved_storage_path(&self) -> PathBuf {
        self.storage_path
            .clone()
            .unwrap_or_else(Self::default_storage_path)
    }

    fn check(&self) -> Result<()> {
        if self.history_capacity == 0 {
            return Err(Error::Config("history_capacity must be at least 1".to_string()));
        }

        let keys = [&self.keys.history, &self.keys.always_on_top, &self.keys.opacity];
        if keys.iter().any(|key| key.is_empty()) {
            return Err(Error::Config("storage keys must not be empty".to_string()));
        }
        if keys[0] == keys[1] || keys[0] == keys[2] || keys[1] == keys[2] {
            return Err(Error::Config("storage keys must be distinct".to_string()));
        }

        Ok(())
    }
}
