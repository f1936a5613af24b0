use crate::config::Config;
use crate::core::catalog::CityCatalog;
use crate::errors::Result;
use crate::logging::Logger;
use std::path::PathBuf;

/// Process-wide state built once at startup and shared by every session
/// iteration.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub catalog: CityCatalog,
    pub logger: Logger,
    pub startup_displayed: bool,
    pub logs_dir: PathBuf,
}

impl AppContext {
    pub fn new_with_paths(config_path: PathBuf, logs_dir: PathBuf) -> Result<Self> {
        let config = Config::load_from(&config_path)?;
        Ok(Self::from_config(config, logs_dir))
    }

    pub fn from_config(config: Config, logs_dir: PathBuf) -> Self {
        let catalog = CityCatalog::new(config.data_dir());

        let logger = Logger::new(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        Self {
            config,
            catalog,
            logger,
            startup_displayed: false,
            logs_dir,
        }
    }
}
