//! Core pipeline implementation

use crate::discovery::discover_toolboxes;
use crate::report::PipelineReport;
use crate::session::RenderSession;
use crate::{PipelineConfig, PipelineError};
use fcnscrape_domain::traits::{ArtifactStore, DocumentSource, SessionLauncher};
use fcnscrape_domain::{DocFormat, Release, ToolboxCatalog};
use fcnscrape_extractor::{filter_functions, RawExtractor};
use std::time::Instant;
use tracing::{debug, info};

/// Scrapes every toolbox of a release and combines the results
///
/// Toolboxes are processed one at a time. Timeouts and connection failures
/// skip the toolbox; any other failure aborts the run. The combiner runs over
/// whatever was written once the loop completes.
///
/// # Examples
///
/// ```no_run
/// use fcnscrape_domain::Release;
/// use fcnscrape_fetch::{ChromeLauncher, HttpSource};
/// use fcnscrape_pipeline::{PipelineConfig, ScrapePipeline};
/// use fcnscrape_store::JsonStore;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PipelineConfig::default();
/// let store = JsonStore::new(&config.json_root, &config.blacklist_path);
/// let pipeline = ScrapePipeline::new(HttpSource::new()?, store, ChromeLauncher::new(), config);
///
/// let release = Release::parse("R2022a")?;
/// pipeline.ensure_catalog(&release, false).await?;
/// let report = pipeline.run(&release).await?;
/// println!("{}", report.summary());
/// # Ok(())
/// # }
/// ```
pub struct ScrapePipeline<D, S, L>
where
    D: DocumentSource,
    S: ArtifactStore,
    L: SessionLauncher,
{
    extractor: RawExtractor<D>,
    store: S,
    launcher: L,
    config: PipelineConfig,
}

impl<D, S, L> ScrapePipeline<D, S, L>
where
    D: DocumentSource,
    S: ArtifactStore,
    S::Error: std::fmt::Display,
    L: SessionLauncher,
{
    /// Create a new pipeline
    pub fn new(source: D, store: S, launcher: L, config: PipelineConfig) -> Self {
        let extractor = RawExtractor::new(source, config.extractor.clone());
        Self {
            extractor,
            store,
            launcher,
            config,
        }
    }

    /// The artifact store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Pipeline configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Make sure the release has a URL cache, rebuilding it when `force` is set
    ///
    /// Returns `true` when the cache was (re)built.
    pub async fn ensure_catalog(&self, release: &Release, force: bool) -> Result<bool, PipelineError> {
        if !force && self.store.has_catalog(release) {
            debug!("Using cached toolbox URLs for {}", release);
            return Ok(false);
        }
        self.refresh_catalog(release).await?;
        Ok(true)
    }

    /// Fetch the release's product manifest and persist a fresh URL cache
    pub async fn refresh_catalog(&self, release: &Release) -> Result<ToolboxCatalog, PipelineError> {
        let format = DocFormat::for_release(release)?;
        let catalog = discover_toolboxes(
            self.extractor.source(),
            release,
            format,
            self.config.docset_timeout(),
        )
        .await?;
        info!("Found {} toolboxes for {}", catalog.denest().len(), release);

        self.store
            .save_catalog(release, &catalog)
            .map_err(|e| PipelineError::Store(e.to_string()))?;

        Ok(catalog)
    }

    /// Scrape every toolbox in the release's URL cache, then combine
    pub async fn run(&self, release: &Release) -> Result<PipelineReport, PipelineError> {
        let start = Instant::now();
        let format = DocFormat::for_release(release)?;

        let blacklist = self
            .store
            .load_blacklist()
            .map_err(|e| PipelineError::Store(e.to_string()))?;
        let toolboxes = self
            .store
            .load_toolbox_urls(release)
            .map_err(|e| PipelineError::Store(e.to_string()))?;

        let mut report = PipelineReport::new(release.clone(), toolboxes.len());
        info!(
            "Scraping {} toolboxes for {} ({})",
            toolboxes.len(),
            release,
            format.as_str()
        );

        let session = if format.needs_browser() {
            Some(RenderSession::open(&self.launcher).map_err(PipelineError::Browser)?)
        } else {
            None
        };

        for (toolbox, url) in toolboxes.iter() {
            info!("Attempting to scrape {} functions", toolbox);

            let extraction = match self
                .extractor
                .extract(url, format, session.as_ref().map(RenderSession::renderer))
                .await
            {
                Ok(extraction) => extraction,
                Err(e) if e.is_transport() => {
                    info!("Unable to access online docs for '{}': '{}' ({})", toolbox, url, e);
                    report.record_skipped(toolbox);
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            if extraction.is_empty() {
                match extraction.empty_reason {
                    Some(reason) => info!("No functions found for '{}': {} ({})", toolbox, url, reason),
                    None => info!("No functions found for '{}': {}", toolbox, url),
                }
                report.record_empty(toolbox);
                continue;
            }

            let functions = filter_functions(&extraction.candidates, &blacklist);
            self.store
                .write_toolbox(release, toolbox, &functions)
                .map_err(|e| PipelineError::Store(e.to_string()))?;
            debug!(
                "Wrote {} of {} candidates for {}",
                functions.len(),
                extraction.len(),
                toolbox
            );
            report.record_written(toolbox, functions.len());
        }

        drop(session);

        report.combined_count = self
            .store
            .combine(release)
            .map_err(|e| PipelineError::Store(e.to_string()))?;
        report.elapsed = start.elapsed();

        info!(
            "Finished {}: {} written, {} empty, {} skipped, {} unique functions",
            release,
            report.written.len(),
            report.empty.len(),
            report.skipped.len(),
            report.combined_count
        );
        Ok(report)
    }

    /// Rerun only the combiner for a release
    pub fn combine(&self, release: &Release) -> Result<usize, PipelineError> {
        self.store
            .combine(release)
            .map_err(|e| PipelineError::Store(e.to_string()))
    }
}
