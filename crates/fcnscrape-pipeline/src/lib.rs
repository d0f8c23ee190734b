//! fcnscrape Pipeline
//!
//! Orchestrates a release scrape: toolbox discovery, per-toolbox extraction
//! and filtering, artifact writing and combination.
//!
//! # Overview
//!
//! The pipeline is responsible for:
//! - **Discovery**: building a release's toolbox URL cache from its product manifest
//! - **Scraping**: extracting and filtering each toolbox's function list in turn
//! - **Failure policy**: skipping toolboxes on timeout or connection failure,
//!   aborting on anything else
//! - **Combination**: merging every written toolbox into the release corpus
//!
//! ## Run Lifecycle
//!
//! | Step | Failure handling |
//! |------|------------------|
//! | Resolve the release's documentation format | Unsupported release aborts before network access |
//! | Load blacklist and toolbox URLs | Missing or malformed artifacts abort |
//! | Open a browser session (rendered releases only) | Launch failure aborts |
//! | Extract, filter and write each toolbox | Transport failures skip the toolbox |
//! | Close the session, run the combiner | Always runs once the loop completes |
//!
//! # Usage
//!
//! ```no_run
//! use fcnscrape_domain::Release;
//! use fcnscrape_fetch::{ChromeLauncher, HttpSource};
//! use fcnscrape_pipeline::{PipelineConfig, ScrapePipeline};
//! use fcnscrape_store::JsonStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PipelineConfig::default();
//!     let store = JsonStore::new(&config.json_root, &config.blacklist_path);
//!     let pipeline = ScrapePipeline::new(HttpSource::new()?, store, ChromeLauncher::new(), config);
//!
//!     let release = Release::parse("R2022a")?;
//!     pipeline.ensure_catalog(&release, false).await?;
//!     let report = pipeline.run(&release).await?;
//!     println!("{}", report.summary());
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! The pipeline can be configured via TOML:
//!
//! ```toml
//! [pipeline]
//! json_root = "./JSONout"
//! blacklist_path = "./function_blacklist.JSON"
//! docset_timeout_secs = 2
//!
//! [pipeline.extractor]
//! html_timeout_secs = 2
//! json_timeout_secs = 10
//!
//! [pipeline.browser]
//! headless = true
//! idle_timeout_secs = 60
//! ```

#![warn(missing_docs)]

mod config;
mod discovery;
mod error;
mod pipeline;
mod report;
mod session;

pub use config::{BrowserConfig, PipelineConfig};
pub use discovery::{discover_toolboxes, parse_docset, title_case, ALL_PRODUCTS};
pub use error::PipelineError;
pub use pipeline::ScrapePipeline;
pub use report::PipelineReport;
pub use session::RenderSession;
