use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while transcoding a catalog file.
///
/// Malformed category cells are deliberately absent here: the literal parser
/// recovers from them locally by falling back to flat-string treatment.
#[derive(Debug, Error)]
pub enum TranscoderError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("CSV processing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid blacklist configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("malformed table: {0}")]
    Table(String),
}

pub type Result<T> = std::result::Result<T, TranscoderError>;
