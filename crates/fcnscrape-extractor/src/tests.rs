//! Extractor tests against mock sources and renderers

use crate::doc_urls::doc_list_url;
use crate::*;
use fcnscrape_domain::traits::PageRenderer;
use fcnscrape_domain::{DocFormat, FetchError, FunctionBlacklist, MarkupLayout, Release};
use fcnscrape_fetch::{MockRenderer, MockSource};
use std::sync::Arc;

const STATIC_URL: &str = "https://docs.test/stats/functionlist-alpha.html";
const REFLIST_URL: &str = "https://docs.test/reflist?product=stats";
const RENDERED_URL: &str = "https://docs.test/stats/referencelist.html";

fn extractor(source: MockSource) -> RawExtractor<MockSource> {
    RawExtractor::new(source, ExtractorConfig::default())
}

#[tokio::test]
async fn test_static_term_cells() {
    let mut source = MockSource::new();
    source.add_page(
        STATIC_URL,
        r#"<table><tr><td class="term">plot</td></tr><tr><td class="term">bar, barh</td></tr></table>"#,
    );

    let extraction = extractor(source)
        .extract(STATIC_URL, DocFormat::StaticMarkup(MarkupLayout::TermCells), None)
        .await
        .unwrap();

    assert_eq!(extraction.candidates, vec!["plot", "bar, barh"]);
    assert_eq!(extraction.empty_reason, None);
}

#[tokio::test]
async fn test_static_error_page_is_empty() {
    let mut source = MockSource::new();
    source.add_response(STATIC_URL, 404, "<html><body>Page not found</body></html>");

    let extraction = extractor(source)
        .extract(STATIC_URL, DocFormat::StaticMarkup(MarkupLayout::CodeElements), None)
        .await
        .unwrap();

    assert!(extraction.is_empty());
    assert_eq!(extraction.empty_reason, Some(EmptyReason::NoMatches));
}

#[tokio::test]
async fn test_reflist_grouped_response() {
    let mut source = MockSource::new();
    source.add_page(
        REFLIST_URL,
        r#"{"category": {"grouped-leaf-items": [
            {"leaf-items": [{"name": "fitlm"}]},
            {"leaf-items": [{"name": "predict"}, {"name": "anova"}]}
        ]}}"#,
    );

    let extraction = extractor(source)
        .extract(REFLIST_URL, DocFormat::ReflistJson, None)
        .await
        .unwrap();

    assert_eq!(extraction.candidates, vec!["fitlm", "predict", "anova"]);
}

#[tokio::test]
async fn test_reflist_access_denied_is_empty() {
    let mut source = MockSource::new();
    source.add_response(REFLIST_URL, 403, "Forbidden");

    let extraction = extractor(source)
        .extract(REFLIST_URL, DocFormat::ReflistJson, None)
        .await
        .unwrap();

    assert!(extraction.is_empty());
    assert_eq!(extraction.empty_reason, Some(EmptyReason::AccessDenied(403)));
}

#[tokio::test]
async fn test_reflist_malformed_body_is_an_error() {
    let mut source = MockSource::new();
    source.add_page(REFLIST_URL, "{not json");

    let err = extractor(source)
        .extract(REFLIST_URL, DocFormat::ReflistJson, None)
        .await
        .unwrap_err();

    assert!(matches!(err, ExtractorError::JsonParse(_)));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_timeout_propagates_as_transport_error() {
    let mut source = MockSource::new();
    source.add_error(STATIC_URL, FetchError::Timeout("2s elapsed".into()));

    let err = extractor(source)
        .extract(STATIC_URL, DocFormat::StaticMarkup(MarkupLayout::TermCells), None)
        .await
        .unwrap_err();

    assert!(err.is_transport());
}

#[tokio::test]
async fn test_rendered_rows() {
    let mut renderer = MockRenderer::new();
    renderer.add_rows(RENDERED_URL, ["plot", "scatter"]);
    let session: Arc<dyn PageRenderer> = Arc::new(renderer.clone());

    let extraction = extractor(MockSource::new())
        .extract(RENDERED_URL, DocFormat::RenderedDom, Some(&session))
        .await
        .unwrap();

    assert_eq!(extraction.candidates, vec!["plot", "scatter"]);
    assert_eq!(renderer.render_count(), 1);
}

#[tokio::test]
async fn test_rendered_missing_container_is_empty() {
    let renderer = MockRenderer::new();
    let session: Arc<dyn PageRenderer> = Arc::new(renderer);

    let extraction = extractor(MockSource::new())
        .extract(RENDERED_URL, DocFormat::RenderedDom, Some(&session))
        .await
        .unwrap();

    assert!(extraction.is_empty());
    assert_eq!(extraction.empty_reason, Some(EmptyReason::ContainerNotFound));
}

#[tokio::test]
async fn test_rendered_browser_failure_is_not_transport() {
    let mut renderer = MockRenderer::new();
    renderer.add_error(RENDERED_URL, FetchError::Browser("tab crashed".into()));
    let session: Arc<dyn PageRenderer> = Arc::new(renderer);

    let err = extractor(MockSource::new())
        .extract(RENDERED_URL, DocFormat::RenderedDom, Some(&session))
        .await
        .unwrap_err();

    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_rendered_without_session() {
    let source = MockSource::new();
    let err = extractor(source.clone())
        .extract(RENDERED_URL, DocFormat::RenderedDom, None)
        .await
        .unwrap_err();

    assert!(matches!(err, ExtractorError::Config(_)));
    assert_eq!(source.call_count(), 0);
}

#[tokio::test]
async fn test_extract_then_filter() {
    let release = Release::parse("R2017a").unwrap();
    let format = DocFormat::for_release(&release).unwrap();
    let url = doc_list_url("images", &release, format).unwrap();

    let mut source = MockSource::new();
    source.add_page(
        url.as_str(),
        "<ul><li><code>imread</code></li><li><code>imshow, imtool</code></li>\
         <li><code>ocvMatToImage</code></li><li><code>Syntax: x</code></li></ul>",
    );

    let extraction = extractor(source).extract(&url, format, None).await.unwrap();
    let blacklist: FunctionBlacklist = ["imtool"].into_iter().collect();

    // Blacklist matches whole candidates only, so the group member survives
    assert_eq!(
        filter_functions(&extraction.candidates, &blacklist),
        vec!["imread", "imshow", "imtool"]
    );
}
