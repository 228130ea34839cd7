//! Error types for the converter.

use thiserror::Error;

/// Error type for every stage of the conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// Download failed or the server answered with a non-2xx status
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Rendered template is not valid INI
    #[error("INI parsing error: {0}")]
    Ini(#[from] ini::ParseError),

    /// Source document is empty or not a mapping
    #[error("source document contains no data")]
    NoData,

    /// UTC offset out of range
    #[error("invalid UTC offset: {0} hours")]
    InvalidOffset(i32),
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, Error>;
