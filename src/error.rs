//! Errors raised by the collaborators around the pipeline.
//!
//! The pipeline itself is total: any HTML string yields a (possibly empty)
//! result. Only fetching a page and loading configuration can fail.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractorError {
    /// The source URL could not be parsed or is not http(s).
    #[error("Invalid product URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Transport-level failure while fetching the page.
    #[error("Failed to fetch '{url}': {reason}")]
    FetchFailed { url: String, reason: String },

    /// The server answered with a non-success status.
    #[error("Fetching '{url}' returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ExtractorError>;
