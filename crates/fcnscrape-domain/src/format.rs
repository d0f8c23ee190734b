//! Documentation format generations
//!
//! Each release's documentation was published in one of a few layouts. The
//! layout decides which extraction strategy applies, so it is resolved once per
//! release here and passed around explicitly.

use crate::release::{Release, ReleaseError};

/// Static HTML layouts for the oldest format generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkupLayout {
    /// Names sit in `<td class="term">` cells, never wrapped in code markup
    TermCells,
    /// Names are wrapped in inline `<code>` elements
    CodeElements,
}

/// Documentation format generation of a release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocFormat {
    /// Static HTML alphabetical function list, parsed without script execution
    StaticMarkup(MarkupLayout),

    /// JSON reference-list API keyed by release and product
    ReflistJson,

    /// Script-rendered reference list, read through a browser session
    RenderedDom,
}

/// Releases whose function list pages put names in table cells
const TERM_CELL_RELEASES: &[&str] = &["R2015b", "R2016a"];

/// Releases whose function list pages wrap names in code elements
const CODE_ELEMENT_RELEASES: &[&str] = &["R2016b", "R2017a", "R2017b", "R2018a"];

/// Oldest release with any known documentation layout
const OLDEST_SUPPORTED_RELEASE: &str = "R2015b";

/// First release whose reference list is only available after script execution
const FIRST_RENDERED_RELEASE: &str = "R2024a";

impl DocFormat {
    /// Resolve the documentation format for a release
    ///
    /// # Errors
    /// Returns [`ReleaseError::Unsupported`] for releases older than every known layout.
    pub fn for_release(release: &Release) -> Result<Self, ReleaseError> {
        let r = release.as_str();

        if TERM_CELL_RELEASES.contains(&r) {
            return Ok(DocFormat::StaticMarkup(MarkupLayout::TermCells));
        }
        if CODE_ELEMENT_RELEASES.contains(&r) {
            return Ok(DocFormat::StaticMarkup(MarkupLayout::CodeElements));
        }
        // Release identifiers are fixed width, so lexical order is chronological
        if r < OLDEST_SUPPORTED_RELEASE {
            return Err(ReleaseError::Unsupported(r.to_string()));
        }
        if r >= FIRST_RENDERED_RELEASE {
            return Ok(DocFormat::RenderedDom);
        }

        Ok(DocFormat::ReflistJson)
    }

    /// Whether extraction needs a browser session
    pub fn needs_browser(&self) -> bool {
        matches!(self, DocFormat::RenderedDom)
    }

    /// Short name for logs and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            DocFormat::StaticMarkup(MarkupLayout::TermCells) => "static-term-cells",
            DocFormat::StaticMarkup(MarkupLayout::CodeElements) => "static-code",
            DocFormat::ReflistJson => "reflist-json",
            DocFormat::RenderedDom => "rendered-dom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_of(r: &str) -> Result<DocFormat, ReleaseError> {
        DocFormat::for_release(&Release::parse(r).unwrap())
    }

    #[test]
    fn test_term_cell_releases() {
        assert_eq!(format_of("R2015b").unwrap(), DocFormat::StaticMarkup(MarkupLayout::TermCells));
        assert_eq!(format_of("R2016a").unwrap(), DocFormat::StaticMarkup(MarkupLayout::TermCells));
    }

    #[test]
    fn test_code_element_releases() {
        for r in ["R2016b", "R2017a", "R2017b", "R2018a"] {
            assert_eq!(format_of(r).unwrap(), DocFormat::StaticMarkup(MarkupLayout::CodeElements));
        }
    }

    #[test]
    fn test_reflist_releases() {
        for r in ["R2018b", "R2020a", "R2022a", "R2023b"] {
            assert_eq!(format_of(r).unwrap(), DocFormat::ReflistJson);
        }
    }

    #[test]
    fn test_rendered_releases() {
        for r in ["R2024a", "R2024b", "R2031a"] {
            let format = format_of(r).unwrap();
            assert_eq!(format, DocFormat::RenderedDom);
            assert!(format.needs_browser());
        }
    }

    #[test]
    fn test_unsupported_release() {
        assert!(matches!(format_of("R2015a"), Err(ReleaseError::Unsupported(_))));
        assert!(matches!(format_of("R2009b"), Err(ReleaseError::Unsupported(_))));
    }
}
