//! Controller configuration.

use std::fmt;
use std::sync::Arc;

use crate::event::ElementId;
use crate::matcher::{Matcher, SubstringMatcher};
use crate::render::{HighlightRenderer, ItemRenderer};

/// Configuration for a [`Typeahead`](crate::Typeahead) controller.
///
/// Every field has a documented default except the input binding: a config
/// without [`with_input`](Self::with_input) builds an inert controller that
/// attaches nothing and reacts to nothing. That is deliberate — absence of
/// the required binding silently disables the widget instead of erroring.
///
/// The configuration is immutable once the controller is constructed; only
/// the collection can be swapped afterwards, via
/// [`Typeahead::replace_collection`](crate::Typeahead::replace_collection).
///
/// # Example
///
/// ```
/// use typeline::{ElementId, TypeaheadConfig};
///
/// let config = TypeaheadConfig::new()
///     .with_input(ElementId::new(1))
///     .with_collection(vec!["Apple".into(), "Banana".into()])
///     .with_key_navigation(true);
/// ```
#[derive(Clone)]
pub struct TypeaheadConfig {
    input: Option<ElementId>,
    collection: Vec<String>,
    key_navigation: bool,
    show_all_when_empty: bool,
    matcher: Arc<dyn Matcher>,
    renderer: Arc<dyn ItemRenderer>,
}

impl Default for TypeaheadConfig {
    /// Defaults: no input binding, empty collection, key navigation off,
    /// nothing shown for an empty query, [`SubstringMatcher`] and
    /// [`HighlightRenderer`] as the pluggable strategies.
    fn default() -> Self {
        Self {
            input: None,
            collection: Vec::new(),
            key_navigation: false,
            show_all_when_empty: false,
            matcher: Arc::new(SubstringMatcher),
            renderer: Arc::new(HighlightRenderer),
        }
    }
}

impl TypeaheadConfig {
    /// Create a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the controller to an input element. Required for the controller
    /// to do anything.
    pub fn with_input(mut self, input: ElementId) -> Self {
        self.input = Some(input);
        self
    }

    /// Set the initial searchable collection.
    pub fn with_collection(mut self, collection: Vec<String>) -> Self {
        self.collection = collection;
        self
    }

    /// Enable or disable Up/Down keyboard navigation.
    pub fn with_key_navigation(mut self, enabled: bool) -> Self {
        self.key_navigation = enabled;
        self
    }

    /// Render the full collection when the query is empty, instead of
    /// clearing and hiding the list.
    pub fn with_show_all_when_empty(mut self, show_all: bool) -> Self {
        self.show_all_when_empty = show_all;
        self
    }

    /// Replace the default matcher.
    pub fn with_matcher(mut self, matcher: impl Matcher + 'static) -> Self {
        self.matcher = Arc::new(matcher);
        self
    }

    /// Replace the default renderer.
    pub fn with_renderer(mut self, renderer: impl ItemRenderer + 'static) -> Self {
        self.renderer = Arc::new(renderer);
        self
    }

    /// The bound input element, if any.
    pub fn input(&self) -> Option<ElementId> {
        self.input
    }

    /// The configured initial collection.
    pub fn collection(&self) -> &[String] {
        &self.collection
    }

    /// Whether Up/Down keyboard navigation is enabled.
    pub fn key_navigation(&self) -> bool {
        self.key_navigation
    }

    /// Whether an empty query renders the full collection.
    pub fn show_all_when_empty(&self) -> bool {
        self.show_all_when_empty
    }

    /// The configured matcher.
    pub fn matcher(&self) -> &dyn Matcher {
        self.matcher.as_ref()
    }

    /// The configured renderer.
    pub fn renderer(&self) -> &dyn ItemRenderer {
        self.renderer.as_ref()
    }

    pub(crate) fn take_collection(&mut self) -> Vec<String> {
        std::mem::take(&mut self.collection)
    }
}

impl fmt::Debug for TypeaheadConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeaheadConfig")
            .field("input", &self.input)
            .field("collection_len", &self.collection.len())
            .field("key_navigation", &self.key_navigation)
            .field("show_all_when_empty", &self.show_all_when_empty)
            .finish()
    }
}
