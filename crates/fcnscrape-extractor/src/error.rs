//! Error types for the Extractor

use fcnscrape_domain::FetchError;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Document source or browser error
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Reference-list response did not have the expected shape
    #[error("Invalid reference list: {0}")]
    InvalidFormat(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Rendering task failed to complete
    #[error("Render task error: {0}")]
    Render(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    /// Whether this is a timeout or connection failure
    ///
    /// Transport failures skip one toolbox; everything else aborts the run.
    pub fn is_transport(&self) -> bool {
        matches!(self, ExtractorError::Fetch(e) if e.is_transport())
    }
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}
