//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{
    FetchError, FetchedDocument, FunctionBlacklist, Release, RowQuery, ToolboxCatalog,
    ToolboxUrlMap,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Trait for fetching static documents and API responses
///
/// Implemented by the infrastructure layer (fcnscrape-fetch)
pub trait DocumentSource {
    /// Fetch `url`, giving up after `timeout`
    ///
    /// Non-success statuses are returned as documents, not errors; only
    /// transport-level problems produce a [`FetchError`].
    fn fetch(
        &self,
        url: &str,
        timeout: Duration,
    ) -> impl Future<Output = Result<FetchedDocument, FetchError>> + Send;
}

/// Trait for reading rows out of a script-rendered page
///
/// Implemented by the infrastructure layer (fcnscrape-fetch). Calls block.
pub trait PageRenderer: Send + Sync {
    /// Load `url` and return the link text of every row in the query's container
    ///
    /// Returns `Ok(None)` when the container cannot be located before the
    /// query's locate timeout.
    fn row_link_texts(&self, url: &str, query: &RowQuery) -> Result<Option<Vec<String>>, FetchError>;

    /// Release the session's resources
    fn close(&self) -> Result<(), FetchError> {
        Ok(())
    }
}

/// Trait for opening browser automation sessions
pub trait SessionLauncher {
    /// Open a new rendering session
    fn launch(&self) -> Result<Arc<dyn PageRenderer>, FetchError>;
}

/// Trait for persisting and reading pipeline artifacts
///
/// Implemented by the infrastructure layer (fcnscrape-store)
pub trait ArtifactStore {
    /// Error type for store operations
    type Error;

    /// Load the function blacklist
    fn load_blacklist(&self) -> Result<FunctionBlacklist, Self::Error>;

    /// Whether a URL cache exists for the release
    fn has_catalog(&self, release: &Release) -> bool;

    /// Persist the release's nested toolbox catalog
    fn save_catalog(&self, release: &Release, catalog: &ToolboxCatalog) -> Result<(), Self::Error>;

    /// Load the release's toolbox catalog, denested into a flat map
    fn load_toolbox_urls(&self, release: &Release) -> Result<ToolboxUrlMap, Self::Error>;

    /// Write one toolbox's filtered function list, overwriting any previous one
    fn write_toolbox(&self, release: &Release, toolbox: &str, functions: &[String]) -> Result<(), Self::Error>;

    /// Merge every toolbox artifact into the release's combined artifact
    ///
    /// Returns the number of unique functions written.
    fn combine(&self, release: &Release) -> Result<usize, Self::Error>;
}
