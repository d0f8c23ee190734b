//! Error types for pipeline operations

use fcnscrape_domain::{FetchError, ReleaseError};
use fcnscrape_extractor::ExtractorError;
use thiserror::Error;

/// Errors that abort a pipeline run
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Release token invalid or older than every known layout
    #[error("Release error: {0}")]
    Release(#[from] ReleaseError),

    /// Storage layer error
    #[error("Storage error: {0}")]
    Store(String),

    /// Extraction failed for a reason other than transport
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractorError),

    /// Browser session could not be opened
    #[error("Browser error: {0}")]
    Browser(FetchError),

    /// Product manifest could not be fetched or read
    #[error("Discovery error: {0}")]
    Discovery(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
