use crate::error::{HabitzError, Result};
use crate::model::{SortMode, StatusFilter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STORAGE_KEY: &str = "habits";

/// Configuration for habitz, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct HabitzConfig {
    /// Storage slot the habit list is written under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Sort mode used when none is given
    #[serde(default)]
    pub default_sort: SortMode,

    /// Status filter used when none is given
    #[serde(default)]
    pub default_filter: StatusFilter,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for HabitzConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            default_sort: SortMode::default(),
            default_filter: StatusFilter::default(),
        }
    }
}

impl HabitzConfig {
    pub const KEYS: [&'static str; 3] = ["storage-key", "default-sort", "default-filter"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(HabitzError::Io)?;
        let mut config: HabitzConfig =
            serde_json::from_str(&content).map_err(HabitzError::Serialization)?;
        if !is_valid_storage_key(&config.storage_key) {
            warn!(key = %config.storage_key, "invalid storage key in config, using default");
            config.storage_key = default_storage_key();
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(HabitzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(HabitzError::Serialization)?;
        fs::write(config_path, content).map_err(HabitzError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "storage-key" => Ok(self.storage_key.clone()),
            "default-sort" => Ok(self.default_sort.to_string()),
            "default-filter" => Ok(self.default_filter.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    /// Set a key from its string form, validating the value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                let value = value.trim();
                if !is_valid_storage_key(value) {
                    return Err(HabitzError::Config(format!(
                        "Invalid storage key '{}': use letters, digits, '-' or '_'",
                        value
                    )));
                }
                self.storage_key = value.to_string();
            }
            "default-sort" => self.default_sort = value.parse().map_err(HabitzError::Config)?,
            "default-filter" => {
                self.default_filter = value.parse().map_err(HabitzError::Config)?
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .into_iter()
            .filter_map(|k| self.get(k).ok().map(|v| (k, v)))
            .collect()
    }
}

/// Storage keys name a file in the data directory, so no separators or dots.
fn is_valid_storage_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn unknown_key(key: &str) -> HabitzError {
    HabitzError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        HabitzConfig::KEYS.join(", ")
    ))
}
