//! fcnscrape Extractor
//!
//! Turns documentation pages into clean lists of function names.
//!
//! # Overview
//!
//! Extraction happens in two stages. The [`RawExtractor`] pulls raw candidate
//! strings out of a toolbox's function list using the strategy that matches
//! the release's [`DocFormat`](fcnscrape_domain::DocFormat). The
//! [`filter_functions`] pass then rejects non-function text and normalizes
//! what is left.
//!
//! # Architecture
//!
//! ```text
//! URL → RawExtractor ─┬─ static markup (td.term / code)
//!                     ├─ reference-list JSON (leaf-items / grouped-leaf-items)
//!                     └─ rendered DOM (container rows → link text)
//!                          ↓
//!                   raw candidates → filter_functions → function names
//! ```
//!
//! # Example Usage
//!
//! ```
//! use fcnscrape_extractor::filter_functions;
//! use fcnscrape_domain::FunctionBlacklist;
//!
//! let blacklist = FunctionBlacklist::new();
//! let raw = ["plot, scatter", "foo (opcda)", "obj.method", "% comment"];
//!
//! let functions = filter_functions(&raw, &blacklist);
//! assert_eq!(functions, vec!["plot", "scatter", "foo", "obj.method"]);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod filter;
mod markup;
mod reflist;
mod rendered;
mod types;
pub mod doc_urls;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::RawExtractor;
pub use filter::{filter_functions, normalize_candidate, Rejection};
pub use markup::extract_markup;
pub use reflist::parse_reflist;
pub use types::{EmptyReason, RawExtraction};
