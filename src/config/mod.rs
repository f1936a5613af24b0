pub mod models;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, DataDirConfigItem, FileLoggingConfigItem, PageSizeConfigItem,
};
use crate::errors::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    DataDir,
    RawPageSize,
    FileLoggingEnabled,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub data_dir: DataDirConfigItem,
    #[serde(default)]
    pub raw_page_size: PageSizeConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
}

/// (key, description, value) triples for display.
pub type ConfigRows = Vec<(String, String, String)>;

impl Config {
    /// Reads `path`; a file that does not exist yields the defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Ok(Self {
                path,
                data: ConfigFile::default(),
            });
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::Parse(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data_dir(&self) -> &Path {
        self.data.data_dir.get_value()
    }
    pub fn raw_page_size(&self) -> usize {
        self.data.raw_page_size.get_value().0
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    pub fn rows(&self) -> ConfigRows {
        ConfigKey::iter()
            .map(|key| {
                let (description, value) = match key {
                    ConfigKey::DataDir => (
                        self.data.data_dir.description(),
                        self.data_dir().display().to_string(),
                    ),
                    ConfigKey::RawPageSize => (
                        self.data.raw_page_size.description(),
                        self.data.raw_page_size.get_value().to_string(),
                    ),
                    ConfigKey::FileLoggingEnabled => (
                        self.data.file_logging_enabled.description(),
                        self.data.file_logging_enabled.get_value().to_string(),
                    ),
                };
                (key.to_string(), description.to_string(), value)
            })
            .collect()
    }
}
