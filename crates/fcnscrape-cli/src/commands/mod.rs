//! Command implementations.

pub mod combine;
pub mod filter;
pub mod run;
pub mod urls;

pub use self::combine::execute_combine;
pub use self::filter::execute_filter;
pub use self::run::execute_run;
pub use self::urls::execute_urls;

use crate::config::Config;
use crate::error::Result;
use fcnscrape_fetch::{ChromeLauncher, HttpSource};
use fcnscrape_pipeline::ScrapePipeline;
use fcnscrape_store::JsonStore;

/// Pipeline wired to the live documentation site.
pub type LivePipeline = ScrapePipeline<HttpSource, JsonStore, ChromeLauncher>;

/// Artifact store described by the configuration.
pub fn build_store(config: &Config) -> JsonStore {
    JsonStore::new(&config.pipeline.json_root, &config.pipeline.blacklist_path)
}

/// Build the live pipeline from the configuration.
pub fn build_pipeline(config: &Config) -> Result<LivePipeline> {
    let browser = &config.pipeline.browser;
    let launcher = ChromeLauncher::new()
        .with_headless(browser.headless)
        .with_idle_timeout(browser.idle_timeout())
        .with_executable(browser.chrome_path.clone());

    Ok(ScrapePipeline::new(
        HttpSource::new()?,
        build_store(config),
        launcher,
        config.pipeline.clone(),
    ))
}
