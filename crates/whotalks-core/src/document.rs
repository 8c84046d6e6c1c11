//! Script body extraction from an archive page.
//!
//! Script pages wrap the screenplay in a `<pre>` block and bold every cue and
//! heading. Only the text directly inside those `<b>` elements is considered.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

/// Bold elements anywhere below a `<pre>`.
static BOLD_IN_PRE: Lazy<Selector> = Lazy::new(|| Selector::parse("pre b").unwrap());

/// Returns the text nodes that are direct children of `<b>` elements inside a
/// `<pre>` block, in document order. Empty when the page has no such markup.
pub fn bold_lines(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&BOLD_IN_PRE)
        .flat_map(|b| {
            b.children()
                .filter_map(|node| node.value().as_text())
                .map(|text| text.to_string())
                .collect::<Vec<_>>()
        })
        .collect()
}
