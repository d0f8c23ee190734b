//! Documentation URL construction

use crate::error::ExtractorError;
use fcnscrape_domain::{DocFormat, Release};

/// Root of the release-pinned documentation tree
pub const BASE_URL_PREFIX: &str = "https://www.mathworks.com/help/releases";

/// Reference-list API root
pub const REFLIST_URL_PREFIX: &str = "https://www.mathworks.com/help/search/reflist/doccenter/en";

/// URL of the release's product manifest
pub fn docset_url(release: &Release) -> String {
    format!("{}/{}/docset.xml", BASE_URL_PREFIX, release)
}

/// URL of a toolbox's alphabetical function list for the given format
///
/// `help_location` is the product's documentation path, e.g. `matlab` or
/// `stats`.
pub fn doc_list_url(
    help_location: &str,
    release: &Release,
    format: DocFormat,
) -> Result<String, ExtractorError> {
    let help_location = help_location.trim_matches('/');
    if help_location.is_empty() {
        return Err(ExtractorError::Config(
            "help location cannot be empty".to_string(),
        ));
    }

    let url = match format {
        DocFormat::StaticMarkup(_) => format!(
            "{}/{}/{}/functionlist-alpha.html",
            BASE_URL_PREFIX, release, help_location
        ),
        DocFormat::ReflistJson => {
            let base = format!("{}/{}", REFLIST_URL_PREFIX, release);
            ::url::Url::parse_with_params(
                &base,
                &[
                    ("type", "function"),
                    ("listtype", "alpha"),
                    ("product", help_location),
                ],
            )
            .map_err(|e| ExtractorError::Config(format!("invalid reference list URL: {}", e)))?
            .to_string()
        }
        DocFormat::RenderedDom => format!(
            "{}/{}/{}/referencelist.html?type=function&listtype=alpha",
            BASE_URL_PREFIX, release, help_location
        ),
    };

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fcnscrape_domain::MarkupLayout;

    fn release(r: &str) -> Release {
        Release::parse(r).unwrap()
    }

    #[test]
    fn test_static_url() {
        let url = doc_list_url(
            "stats",
            &release("R2016b"),
            DocFormat::StaticMarkup(MarkupLayout::CodeElements),
        )
        .unwrap();
        assert_eq!(
            url,
            "https://www.mathworks.com/help/releases/R2016b/stats/functionlist-alpha.html"
        );
    }

    #[test]
    fn test_reflist_url() {
        let url = doc_list_url("matlab", &release("R2020a"), DocFormat::ReflistJson).unwrap();
        assert_eq!(
            url,
            "https://www.mathworks.com/help/search/reflist/doccenter/en/R2020a?type=function&listtype=alpha&product=matlab"
        );
    }

    #[test]
    fn test_reflist_url_encodes_product() {
        let url = doc_list_url("a b&c", &release("R2020a"), DocFormat::ReflistJson).unwrap();
        assert!(url.ends_with("product=a+b%26c"));
    }

    #[test]
    fn test_rendered_url() {
        let url = doc_list_url("/simulink/", &release("R2024a"), DocFormat::RenderedDom).unwrap();
        assert_eq!(
            url,
            "https://www.mathworks.com/help/releases/R2024a/simulink/referencelist.html?type=function&listtype=alpha"
        );
    }

    #[test]
    fn test_empty_help_location() {
        assert!(doc_list_url("", &release("R2020a"), DocFormat::ReflistJson).is_err());
    }

    #[test]
    fn test_docset_url() {
        assert_eq!(
            docset_url(&release("R2019b")),
            "https://www.mathworks.com/help/releases/R2019b/docset.xml"
        );
    }
}
