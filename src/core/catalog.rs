use crate::core::types::City;
use crate::errors::Result;
use std::path::PathBuf;
use strum::IntoEnumIterator;

/// Fixed city → data file mapping, rooted at the configured data directory.
#[derive(Debug, Clone)]
pub struct CityCatalog {
    data_dir: PathBuf,
}

impl CityCatalog {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn names(&self) -> Vec<String> {
        City::iter().map(|c| c.to_string()).collect()
    }

    pub fn path_for(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }

    /// Looks `name` up in the catalog; unknown names are `Error::UnknownCity`.
    pub fn resolve(&self, name: &str) -> Result<City> {
        City::try_from(name)
    }
}
