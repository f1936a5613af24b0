use crate::core::types::{Bool, PageSize};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataDirConfigItem {
    pub value: PathBuf,
    pub description: String,
}

impl Default for DataDirConfigItem {
    fn default() -> Self {
        Self {
            value: PathBuf::from("."),
            description: "Directory holding the city trip files.".into(),
        }
    }
}

impl ConfigItem<PathBuf> for DataDirConfigItem {
    fn get_value(&self) -> &PathBuf {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSizeConfigItem {
    pub value: PageSize,
    pub description: String,
}

impl Default for PageSizeConfigItem {
    fn default() -> Self {
        Self {
            value: PageSize::default(),
            description: "Raw rows shown per page.".into(),
        }
    }
}

impl ConfigItem<PageSize> for PageSizeConfigItem {
    fn get_value(&self) -> &PageSize {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}
