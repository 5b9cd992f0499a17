//! User settings for spendlog
//!
//! A small JSON settings file next to the data directory. Missing settings
//! are created with defaults; individual fields default independently so
//! older files keep working when fields are added.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::SpendlogPaths;
use crate::error::{SpendlogError, SpendlogResult};

/// User settings for spendlog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Expense file override; the default lives in the data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_file: Option<PathBuf>,

    /// Whether to clear the screen between menu screens
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_clear_screen() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            expense_file: None,
            clear_screen: default_clear_screen(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if missing
    pub fn load_or_create(paths: &SpendlogPaths) -> SpendlogResult<Self> {
        let path = paths.settings_file();

        if path.exists() {
            let contents = fs::read_to_string(&path).map_err(|e| {
                SpendlogError::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;
            serde_json::from_str(&contents).map_err(|e| {
                SpendlogError::Config(format!("Failed to parse {}: {}", path.display(), e))
            })
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendlogPaths) -> SpendlogResult<()> {
        paths.ensure_directories()?;

        let path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SpendlogError::Config(format!("Failed to serialize settings: {}", e))
        })?;
        fs::write(&path, contents).map_err(|e| {
            SpendlogError::Config(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}
