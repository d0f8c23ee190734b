//! Toolbox discovery from the release's product manifest

use crate::error::PipelineError;
use fcnscrape_domain::traits::DocumentSource;
use fcnscrape_domain::{DocFormat, Release, ToolboxCatalog};
use fcnscrape_extractor::doc_urls::{doc_list_url, docset_url};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, info, warn};

static PRODUCT: LazyLock<Selector> = LazyLock::new(|| selector("product"));
static DISPLAY_NAME: LazyLock<Selector> = LazyLock::new(|| selector("display-name"));
static HELP_LOCATION: LazyLock<Selector> = LazyLock::new(|| selector("help-location"));
static SHORT_NAME: LazyLock<Selector> = LazyLock::new(|| selector("short-name"));
static FAMILY: LazyLock<Selector> = LazyLock::new(|| selector("family"));
static GROUP: LazyLock<Selector> = LazyLock::new(|| selector("group"));

/// Group used by manifests without family information
pub const ALL_PRODUCTS: &str = "all products";

/// Products that are not toolboxes
const SKIPPED_SHORT_NAMES: &[&str] = &["install"];
const SKIPPED_FAMILIES: &[&str] = &["webonlyproducts"];

fn selector(tag: &str) -> Selector {
    Selector::parse(tag).expect("manifest tag selector is valid")
}

/// Fetch the release's product manifest and build its toolbox catalog
///
/// A transport failure or a non-success status is a discovery error: an
/// empty catalog is never returned in place of an unreachable manifest.
pub async fn discover_toolboxes<D: DocumentSource>(
    source: &D,
    release: &Release,
    format: DocFormat,
    timeout: Duration,
) -> Result<ToolboxCatalog, PipelineError> {
    let url = docset_url(release);
    info!("Building toolbox URL cache for {} from {}", release, url);

    let document = source
        .fetch(&url, timeout)
        .await
        .map_err(|e| PipelineError::Discovery(e.to_string()))?;

    if !document.is_success() {
        return Err(PipelineError::Discovery(format!(
            "product manifest returned HTTP {}: {}",
            document.status, url
        )));
    }

    parse_docset(&document.body, release, format)
}

/// Build the nested toolbox catalog from a manifest document
///
/// Each product is filed as `family → [group →] display name → URL`, or
/// under [`ALL_PRODUCTS`] when it carries neither. Products missing a name
/// or help location are skipped.
pub fn parse_docset(
    xml: &str,
    release: &Release,
    format: DocFormat,
) -> Result<ToolboxCatalog, PipelineError> {
    let document = Html::parse_document(xml);
    let mut catalog = ToolboxCatalog::new();

    for product in document.select(&PRODUCT) {
        let (Some(display_name), Some(help_location)) = (
            child_text(product, &DISPLAY_NAME),
            child_text(product, &HELP_LOCATION),
        ) else {
            warn!("Skipping manifest product without a name or help location");
            continue;
        };

        let short_name = child_text(product, &SHORT_NAME);
        let family = child_text(product, &FAMILY);
        let group = child_text(product, &GROUP);

        if short_name.is_some_and(|s| SKIPPED_SHORT_NAMES.contains(&s.as_str()))
            || family.as_ref().is_some_and(|f| SKIPPED_FAMILIES.contains(&f.as_str()))
        {
            debug!("Skipping non-toolbox product {}", display_name);
            continue;
        }

        let url = doc_list_url(&help_location, release, format)?;
        match (family, group) {
            (Some(family), Some(group)) => {
                let pretty_group = title_case(&group.replace('-', " "));
                catalog.insert_url(&[family.as_str(), pretty_group.as_str()], display_name, url);
            }
            (Some(family), None) => catalog.insert_url(&[family.as_str()], display_name, url),
            // A group without a family cannot be placed, so it is filed like an ungrouped product
            (None, _) => catalog.insert_url(&[ALL_PRODUCTS], display_name, url),
        }
    }

    Ok(catalog)
}

/// Trimmed text of the first matching descendant; empty elements count as absent
fn child_text(product: ElementRef<'_>, selector: &Selector) -> Option<String> {
    product
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Capitalize the first letter of every alphabetic run, lowercase the rest
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fcnscrape_domain::CatalogNode;

    const MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<docset>
  <product>
    <display-name>MATLAB</display-name>
    <help-location>matlab</help-location>
    <short-name>matlab</short-name>
    <family>matlab</family>
  </product>
  <product>
    <display-name>Signal Processing Toolbox</display-name>
    <help-location>signal</help-location>
    <short-name>signal</short-name>
    <family>matlab</family>
    <group>signal-processing</group>
  </product>
  <product>
    <display-name>Installation</display-name>
    <help-location>install</help-location>
    <short-name>install</short-name>
    <family>matlab</family>
  </product>
  <product>
    <display-name>Online Only</display-name>
    <help-location>online</help-location>
    <short-name>online</short-name>
    <family>webonlyproducts</family>
  </product>
</docset>"#;

    const LEGACY_MANIFEST: &str = r#"<docset>
  <product>
    <display-name>MATLAB</display-name>
    <help-location>matlab</help-location>
    <short-name>matlab</short-name>
  </product>
  <product>
    <display-name>Statistics Toolbox</display-name>
    <help-location>stats</help-location>
    <short-name>stats</short-name>
    <family></family>
  </product>
</docset>"#;

    fn release(r: &str) -> Release {
        Release::parse(r).unwrap()
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("signal processing"), "Signal Processing");
        assert_eq!(title_case("AUTOMOTIVE"), "Automotive");
        assert_eq!(title_case("3d vision"), "3D Vision");
        assert_eq!(title_case("test and measurement"), "Test And Measurement");
    }

    #[test]
    fn test_grouped_manifest() {
        let r = release("R2020a");
        let catalog = parse_docset(MANIFEST, &r, DocFormat::ReflistJson).unwrap();

        assert_eq!(catalog.entries().len(), 1);
        let (family, node) = &catalog.entries()[0];
        assert_eq!(family, "matlab");
        let CatalogNode::Group(matlab) = node else {
            panic!("family should be a group");
        };
        assert_eq!(matlab.entries()[0].0, "MATLAB");
        assert_eq!(matlab.entries()[1].0, "Signal Processing");

        let urls = catalog.denest();
        assert_eq!(urls.len(), 2);
        assert_eq!(
            urls.get("Signal Processing Toolbox"),
            Some("https://www.mathworks.com/help/search/reflist/doccenter/en/R2020a?type=function&listtype=alpha&product=signal")
        );
        assert!(urls.get("Installation").is_none());
        assert!(urls.get("Online Only").is_none());
    }

    #[test]
    fn test_legacy_manifest_uses_all_products() {
        let r = release("R2015b");
        let format = DocFormat::for_release(&r).unwrap();
        let catalog = parse_docset(LEGACY_MANIFEST, &r, format).unwrap();

        assert_eq!(catalog.entries().len(), 1);
        assert_eq!(catalog.entries()[0].0, ALL_PRODUCTS);
        assert_eq!(
            catalog.denest().get("Statistics Toolbox"),
            Some("https://www.mathworks.com/help/releases/R2015b/stats/functionlist-alpha.html")
        );
    }

    #[test]
    fn test_incomplete_product_is_skipped() {
        let xml = "<docset><product><display-name>Nameless</display-name></product></docset>";
        let catalog = parse_docset(xml, &release("R2020a"), DocFormat::ReflistJson).unwrap();
        assert!(catalog.is_empty());
    }
}
