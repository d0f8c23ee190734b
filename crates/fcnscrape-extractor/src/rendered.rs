//! Rendered DOM strategy

use crate::error::ExtractorError;
use crate::types::{EmptyReason, RawExtraction};
use fcnscrape_domain::traits::PageRenderer;
use fcnscrape_domain::RowQuery;
use std::sync::Arc;
use tracing::debug;

/// Read row link texts from a script-rendered page
///
/// Renderer calls block, so they run on the blocking pool. A container that
/// never appears yields an empty extraction rather than an error.
pub async fn extract_rendered(
    renderer: Arc<dyn PageRenderer>,
    url: &str,
    query: RowQuery,
) -> Result<RawExtraction, ExtractorError> {
    let target = url.to_string();
    let rows = tokio::task::spawn_blocking(move || renderer.row_link_texts(&target, &query))
        .await
        .map_err(|e| ExtractorError::Render(e.to_string()))??;

    match rows {
        Some(texts) => Ok(RawExtraction::from_candidates(texts)),
        None => {
            debug!("Content container not found at {}", url);
            Ok(RawExtraction::empty(EmptyReason::ContainerNotFound))
        }
    }
}
