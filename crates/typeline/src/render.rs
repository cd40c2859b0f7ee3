//! Pluggable match rendering.
//!
//! An [`ItemRenderer`] turns the matcher's output into markup for the list
//! container. The controller treats the markup as opaque text; the surface
//! decides how it becomes item nodes.

use crate::matcher::compile_query;

/// Produces list markup for a set of matches.
///
/// When `query` is present the renderer may decorate matched substrings;
/// when absent (the show-all path for an empty query) items are rendered
/// plain.
pub trait ItemRenderer: Send + Sync {
    /// Render `matches` as markup representing a list of items.
    fn render(&self, matches: &[String], query: Option<&str>) -> String;
}

impl<F> ItemRenderer for F
where
    F: Fn(&[String], Option<&str>) -> String + Send + Sync,
{
    fn render(&self, matches: &[String], query: Option<&str>) -> String {
        self(matches, query)
    }
}

/// The default renderer: one `<li>` per match, with every case-insensitive
/// occurrence of the query wrapped in `<span class="hl">`.
///
/// The query is compiled the same way
/// [`SubstringMatcher`](crate::matcher::SubstringMatcher) compiles it,
/// pattern first with a literal fallback, so whatever the matcher selected
/// is what gets highlighted.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighlightRenderer;

impl ItemRenderer for HighlightRenderer {
    fn render(&self, matches: &[String], query: Option<&str>) -> String {
        match query {
            Some(query) => {
                let regex = compile_query(query);
                matches
                    .iter()
                    .map(|item| {
                        let highlighted =
                            regex.replace_all(item, r#"<span class="hl">${0}</span>"#);
                        format!("<li>{highlighted}</li>")
                    })
                    .collect()
            }
            None => matches.iter().map(|item| format!("<li>{item}</li>")).collect(),
        }
    }
}
