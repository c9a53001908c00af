//! Error types for Career Theme Park

use thiserror::Error;

/// Main error type for loading and decoding map data
#[derive(Error, Debug)]
pub enum CareerMapError {
    /// Reading a local dataset file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP transport failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Unexpected HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    /// The body was not valid JSON for the expected document
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The JSON parsed but does not have the expected shape
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    /// A dataset source string could not be understood
    #[error("Invalid source: {0}")]
    InvalidSource(String),
}

/// Result type alias using CareerMapError
pub type CareerMapResult<T> = Result<T, CareerMapError>;
