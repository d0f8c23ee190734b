//! Static markup strategy

use fcnscrape_domain::MarkupLayout;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static TERM_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td.term").expect("term cell selector is valid"));

static CODE_ELEMENT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("code").expect("code selector is valid"));

/// Pull raw candidates out of a static function list page
///
/// The text of every matching element is returned in document order, including
/// nested text. Pages with no matching elements yield an empty list.
pub fn extract_markup(html: &str, layout: MarkupLayout) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = match layout {
        MarkupLayout::TermCells => &*TERM_CELL,
        MarkupLayout::CodeElements => &*CODE_ELEMENT,
    };

    document
        .select(selector)
        .map(|el| el.text().collect::<String>())
        .collect()
}
