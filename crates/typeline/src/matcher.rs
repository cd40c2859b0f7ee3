//! Pluggable match filtering.
//!
//! A [`Matcher`] decides which collection entries a query selects. The
//! controller never inspects matches itself; it hands the query and the
//! current collection to the configured matcher and renders whatever comes
//! back, in the order it comes back.

use regex::{Regex, RegexBuilder};

/// Filters a collection of candidate strings against a query.
///
/// Implementations must be stateless with respect to the controller: the
/// same query over the same collection must always produce the same ordered
/// result, since the controller relies on re-running the matcher being
/// idempotent.
pub trait Matcher: Send + Sync {
    /// Return the entries of `collection` matched by `query`, retaining
    /// whatever order the matcher deems relevant.
    fn filter(&self, query: &str, collection: &[String]) -> Vec<String>;
}

impl<F> Matcher for F
where
    F: Fn(&str, &[String]) -> Vec<String> + Send + Sync,
{
    fn filter(&self, query: &str, collection: &[String]) -> Vec<String> {
        self(query, collection)
    }
}

/// The default matcher: case-insensitive pattern matching, collection order
/// preserved.
///
/// The query is interpreted as a regular expression, so `gr.pe` matches
/// `"Grape"`. A query that is not a valid pattern (an unbalanced `(` while
/// the user is still typing) degrades to a literal, escaped match rather
/// than failing the keystroke.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

/// Compile a query as a case-insensitive pattern, degrading to a literal,
/// escaped match when the query is not valid regex syntax.
///
/// Shared by [`SubstringMatcher`] and
/// [`HighlightRenderer`](crate::render::HighlightRenderer) so that matching
/// and highlighting always agree on what the query selects.
pub(crate) fn compile_query(query: &str) -> Regex {
    RegexBuilder::new(query)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|_| {
            tracing::debug!(
                target: "typeline::typeahead",
                query,
                "query is not a valid pattern, matching literally"
            );
            RegexBuilder::new(&regex::escape(query))
                .case_insensitive(true)
                .build()
                .expect("escaped pattern always compiles")
        })
}

impl Matcher for SubstringMatcher {
    fn filter(&self, query: &str, collection: &[String]) -> Vec<String> {
        let regex = compile_query(query);
        collection
            .iter()
            .filter(|entry| regex.is_match(entry))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_case_insensitive_substring() {
        let fruits = collection(&["Apple", "Banana", "Grape"]);
        let matches = SubstringMatcher.filter("an", &fruits);
        assert_eq!(matches, vec!["Banana".to_string()]);
    }

    #[test]
    fn test_collection_order_retained() {
        let items = collection(&["grape", "Pineapple", "apple", "pear"]);
        let matches = SubstringMatcher.filter("ap", &items);
        assert_eq!(
            matches,
            vec![
                "grape".to_string(),
                "Pineapple".to_string(),
                "apple".to_string()
            ]
        );
    }

    #[test]
    fn test_query_is_a_pattern() {
        let items = collection(&["Grape", "Gripe", "Grove"]);
        let matches = SubstringMatcher.filter("gr.pe", &items);
        assert_eq!(matches, vec!["Grape".to_string(), "Gripe".to_string()]);
    }

    #[test]
    fn test_invalid_pattern_matches_literally() {
        let items = collection(&["f(x)", "g(y)"]);
        // "(" alone is not a valid pattern; it must still match literally.
        let matches = SubstringMatcher.filter("(x", &items);
        assert_eq!(matches, vec!["f(x)".to_string()]);
    }

    #[test]
    fn test_no_matches() {
        let fruits = collection(&["Apple", "Banana"]);
        assert!(SubstringMatcher.filter("zz", &fruits).is_empty());
    }

    #[test]
    fn test_closure_matcher() {
        let exact = |query: &str, collection: &[String]| -> Vec<String> {
            collection.iter().filter(|c| *c == query).cloned().collect()
        };
        let items = collection(&["one", "two"]);
        assert_eq!(exact.filter("two", &items), vec!["two".to_string()]);
    }
}
