//! Core raw extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::markup::extract_markup;
use crate::reflist::parse_reflist;
use crate::rendered::extract_rendered;
use crate::types::{EmptyReason, RawExtraction};
use fcnscrape_domain::traits::{DocumentSource, PageRenderer};
use fcnscrape_domain::{DocFormat, MarkupLayout};
use std::sync::Arc;
use tracing::{debug, warn};

/// Pulls raw candidate strings out of toolbox function lists
///
/// The strategy is chosen by the release's [`DocFormat`]. Empty or missing
/// content is reported through [`RawExtraction::empty_reason`]; only fetch
/// failures and unreadable responses are errors.
pub struct RawExtractor<D>
where
    D: DocumentSource,
{
    source: D,
    config: ExtractorConfig,
}

impl<D> RawExtractor<D>
where
    D: DocumentSource,
{
    /// Create a new RawExtractor
    pub fn new(source: D, config: ExtractorConfig) -> Self {
        Self { source, config }
    }

    /// The document source used for static and API fetches
    pub fn source(&self) -> &D {
        &self.source
    }

    /// Extraction configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract raw candidates from `url`
    ///
    /// `renderer` is required for [`DocFormat::RenderedDom`] and ignored
    /// otherwise.
    pub async fn extract(
        &self,
        url: &str,
        format: DocFormat,
        renderer: Option<&Arc<dyn PageRenderer>>,
    ) -> Result<RawExtraction, ExtractorError> {
        debug!("Extracting {} using {}", url, format.as_str());

        let extraction = match format {
            DocFormat::StaticMarkup(layout) => self.extract_static(url, layout).await?,
            DocFormat::ReflistJson => self.extract_reflist(url).await?,
            DocFormat::RenderedDom => {
                let renderer = renderer.ok_or_else(|| {
                    ExtractorError::Config("rendered pages need a browser session".to_string())
                })?;
                extract_rendered(Arc::clone(renderer), url, self.config.row_query()).await?
            }
        };

        debug!("Found {} raw candidates at {}", extraction.len(), url);
        Ok(extraction)
    }

    async fn extract_static(
        &self,
        url: &str,
        layout: MarkupLayout,
    ) -> Result<RawExtraction, ExtractorError> {
        let document = self.source.fetch(url, self.config.html_timeout()).await?;
        if !document.is_success() {
            // Error pages simply contain no matching elements
            debug!("Static page {} returned HTTP {}", url, document.status);
        }

        Ok(RawExtraction::from_candidates(extract_markup(
            &document.body,
            layout,
        )))
    }

    async fn extract_reflist(&self, url: &str) -> Result<RawExtraction, ExtractorError> {
        let document = self.source.fetch(url, self.config.json_timeout()).await?;
        if !document.is_success() {
            warn!("Reference list request refused with HTTP {}: {}", document.status, url);
            return Ok(RawExtraction::empty(EmptyReason::AccessDenied(document.status)));
        }

        Ok(RawExtraction::from_candidates(parse_reflist(&document.body)?))
    }
}
