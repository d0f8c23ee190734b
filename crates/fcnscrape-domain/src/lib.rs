//! fcnscrape Domain Layer
//!
//! Core vocabulary for scraping function names out of versioned online
//! documentation. Like the rest of the domain layer it has ZERO external
//! dependencies: infrastructure (HTTP, browser automation, JSON files) lives in
//! other crates and plugs in through the traits in [`traits`].
//!
//! ## Key Concepts
//!
//! - **Release**: a validated documentation version token such as `R2022a`
//! - **DocFormat**: which documentation layout generation a release uses,
//!   resolved once per release from a lookup table
//! - **ToolboxCatalog**: the nested family → [group →] toolbox → URL cache
//! - **ToolboxUrlMap**: the flat toolbox → URL map the orchestrator iterates
//! - **FunctionBlacklist**: exact-match names excluded from every toolbox
//! - **FetchError**: the transport failure taxonomy shared by all fetchers

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod blacklist;
pub mod catalog;
pub mod fetch;
pub mod format;
pub mod release;
pub mod traits;

// Re-exports for convenience
pub use blacklist::FunctionBlacklist;
pub use catalog::{CatalogNode, ToolboxCatalog, ToolboxUrlMap};
pub use fetch::{FetchError, FetchedDocument, RowQuery};
pub use format::{DocFormat, MarkupLayout};
pub use release::{Release, ReleaseError};
