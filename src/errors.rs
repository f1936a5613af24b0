use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error set shared by the loader, configuration and session flow.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Input & Catalog ----------------------------------------------------
    /// Raw value that could not be turned into a domain value.
    #[error("Parse error: {0}")]
    Parse(String),

    /// City name not present in the catalog.
    #[error("Unknown city: '{0}'")]
    UnknownCity(String),

    // ---- Dataset ------------------------------------------------------------
    /// A required column is absent from the trip file header.
    #[error("Missing column '{column}' in {file}")]
    MissingColumn { column: &'static str, file: String },

    /// A row whose cells cannot be interpreted (bad timestamp, number, ...).
    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    // ---- Config -------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// IO passthrough (data files, log files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader passthrough.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serde JSON passthrough (config decode).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create a parse error from any displayable value.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    /// Helper to create a generic config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
    pub fn invalid_record<S: Into<String>>(row: usize, msg: S) -> Self {
        Error::InvalidRecord {
            row,
            message: msg.into(),
        }
    }
}
