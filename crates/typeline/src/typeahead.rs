//! The typeahead controller.
//!
//! [`Typeahead`] owns the widget's entire session state: which items are
//! currently rendered, which one is active, and how key input moves
//! between them. Filtering and markup production are delegated to the
//! configured [`Matcher`](crate::Matcher) and
//! [`ItemRenderer`](crate::ItemRenderer); all display mutation goes through
//! the injected [`ListSurface`].
//!
//! # Example
//!
//! ```
//! use typeline::{
//!     ElementId, Key, KeyReleaseEvent, MarkupList, Typeahead, TypeaheadConfig,
//! };
//!
//! let input = ElementId::new(1);
//! let config = TypeaheadConfig::new()
//!     .with_input(input)
//!     .with_collection(vec!["Apple".into(), "Banana".into(), "Grape".into()])
//!     .with_key_navigation(true);
//!
//! let mut typeahead = Typeahead::new(config, MarkupList::new()).unwrap();
//!
//! // Connect to the selection notification
//! typeahead.item_selected.connect(|selection| {
//!     println!("navigation landed on item {}", selection.index);
//! });
//!
//! // The host forwards every document-wide key release
//! typeahead
//!     .handle_key_release(&KeyReleaseEvent::new(input, Key::Character('n'), "an"))
//!     .unwrap();
//! ```

use typeline_core::Signal;

use crate::config::TypeaheadConfig;
use crate::error::Result;
use crate::event::{Key, KeyReleaseEvent, SelectionEvent};
use crate::surface::{ItemHandle, ListSurface};

/// Navigation direction for [`Typeahead::navigate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Move toward the first item, wrapping to the last.
    Up,
    /// Move toward the last item, wrapping to the first.
    Down,
}

/// Which rendered item, if any, is keyboard-active.
///
/// This replaces the usual `-1` sentinel with a tagged value so the "no
/// selection" state is explicit in the type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveItem {
    /// No item is active.
    #[default]
    None,
    /// The item at this index into the rendered list is active.
    At(usize),
}

impl ActiveItem {
    /// The active index, or `None` when nothing is active.
    pub fn index(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::At(index) => Some(index),
        }
    }
}

/// A typeahead controller bound to one input element and one list surface.
///
/// The controller reacts to two inputs: the public operations below, and
/// key-release events forwarded by the host via
/// [`handle_key_release`](Self::handle_key_release). It runs entirely on
/// the thread delivering the event; nothing here suspends, debounces, or
/// spawns work.
///
/// # Signals
///
/// - [`item_selected`](Self::item_selected): emitted whenever Up/Down
///   navigation lands on an item.
pub struct Typeahead<S: ListSurface> {
    /// Immutable-after-construction configuration.
    config: TypeaheadConfig,

    /// The current searchable set, replaceable post-construction.
    collection: Vec<String>,

    /// The presentation surface all display mutation goes through.
    surface: S,

    /// Handles of the currently rendered items, in document order.
    /// `None` when the list is empty, hidden, or navigation was reset.
    rendered: Option<Vec<ItemHandle>>,

    /// The keyboard-active item.
    active: ActiveItem,

    /// Signal emitted when keyboard navigation lands on an item.
    pub item_selected: Signal<SelectionEvent>,
}

impl<S: ListSurface> Typeahead<S> {
    /// Construct a controller from a configuration and a surface.
    ///
    /// With an input binding present, the list container is cleared and
    /// hidden up front. Without one the controller is inert: construction
    /// touches nothing and key events are ignored. Inertness is silent by
    /// contract — it is how a consumer ships the widget disabled.
    pub fn new(mut config: TypeaheadConfig, surface: S) -> Result<Self> {
        let collection = config.take_collection();
        let mut controller = Self {
            config,
            collection,
            surface,
            rendered: None,
            active: ActiveItem::None,
            item_selected: Signal::new(),
        };

        if controller.is_enabled() {
            controller.surface.clear()?;
            controller.surface.hide()?;
            tracing::debug!(
                target: "typeline::typeahead",
                input = ?controller.config.input(),
                collection_len = controller.collection.len(),
                key_navigation = controller.config.key_navigation(),
                "typeahead initialized"
            );
        } else {
            tracing::debug!(
                target: "typeline::typeahead",
                "no input binding, typeahead is inert"
            );
        }

        Ok(controller)
    }

    /// Whether the controller has an input binding and reacts to key events.
    pub fn is_enabled(&self) -> bool {
        self.config.input().is_some()
    }

    /// The controller's configuration.
    pub fn config(&self) -> &TypeaheadConfig {
        &self.config
    }

    /// The current searchable collection.
    pub fn collection(&self) -> &[String] {
        &self.collection
    }

    /// The currently rendered item handles, or `None` when the list is
    /// empty or navigation state was reset.
    pub fn rendered_items(&self) -> Option<&[ItemHandle]> {
        self.rendered.as_deref()
    }

    /// The keyboard-active item.
    pub fn active_item(&self) -> ActiveItem {
        self.active
    }

    /// The presentation surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Filter the collection against `query` and render the result.
    ///
    /// - Non-empty query: reveal the container, run the matcher, render the
    ///   matches with highlighting, and recompute the rendered-item handles.
    /// - Empty query with `show_all_when_empty`: reveal the container and
    ///   render the whole collection, unhighlighted.
    /// - Empty query otherwise: clear and hide the container.
    ///
    /// Re-invoking with the same query and collection reproduces the same
    /// rendered list. The active item is never touched here; only
    /// [`navigate`](Self::navigate) and the explicit resets move it.
    pub fn display_matches(&mut self, query: &str) -> Result<()> {
        if !query.is_empty() {
            self.surface.show()?;
            let matches = self.config.matcher().filter(query, &self.collection);
            tracing::trace!(
                target: "typeline::typeahead",
                query,
                match_count = matches.len(),
                "rendering matches"
            );
            let markup = self.config.renderer().render(&matches, Some(query));
            self.surface.set_markup(&markup)?;
            self.rendered = Some(self.surface.items()?);
        } else if self.config.show_all_when_empty() {
            self.surface.show()?;
            let markup = self.config.renderer().render(&self.collection, None);
            self.surface.set_markup(&markup)?;
            self.rendered = Some(self.surface.items()?);
        } else {
            tracing::trace!(
                target: "typeline::typeahead",
                "empty query, clearing list"
            );
            self.surface.clear()?;
            self.surface.hide()?;
            self.rendered = None;
        }
        Ok(())
    }

    /// Move the active item one step in `direction`, wrapping circularly.
    ///
    /// From the unselected state the two directions converge toward
    /// opposite ends: Down activates the first item, Up activates the last.
    /// With nothing rendered this is a no-op.
    ///
    /// An out-of-range index forced in via
    /// [`set_active_item`](Self::set_active_item) is caller misuse and
    /// faults here, at the dereference.
    pub fn navigate(&mut self, direction: Direction) -> Result<()> {
        let Some(items) = self.rendered.clone().filter(|items| !items.is_empty()) else {
            tracing::trace!(
                target: "typeline::typeahead",
                ?direction,
                "navigation with nothing rendered, ignoring"
            );
            return Ok(());
        };
        let last = items.len() - 1;

        // Remove the marking from the outgoing item before recomputing.
        if let ActiveItem::At(index) = self.active {
            if let Some(&handle) = items.get(index) {
                self.surface.set_active(handle, false)?;
            }
        }

        let next = match (direction, self.active) {
            (Direction::Up, ActiveItem::None) => last,
            (Direction::Up, ActiveItem::At(0)) => last,
            (Direction::Up, ActiveItem::At(index)) => index - 1,
            (Direction::Down, ActiveItem::None) => 0,
            (Direction::Down, ActiveItem::At(index)) if index == last => 0,
            (Direction::Down, ActiveItem::At(index)) => index + 1,
        };

        self.active = ActiveItem::At(next);
        let handle = items[next];
        self.surface.set_active(handle, true)?;
        self.surface.scroll_to_item(handle)?;

        tracing::trace!(
            target: "typeline::typeahead",
            ?direction,
            active_index = next,
            "navigated"
        );
        Ok(())
    }

    /// React to a document-wide key release.
    ///
    /// Events for other targets are ignored, as is Enter — that is the
    /// submission hook point, deliberately left to the consumer via the
    /// item's own selection path. Every other key re-renders from the
    /// input's current value. With key navigation enabled, Up/Down then
    /// move the active item and emit [`item_selected`]; any other key
    /// performs the light reset: scroll to top and forget the navigation
    /// state, leaving the rendered markup visible (unlike
    /// [`clear`](Self::clear), which also empties and hides the container).
    ///
    /// [`item_selected`]: Self::item_selected
    pub fn handle_key_release(&mut self, event: &KeyReleaseEvent) -> Result<()> {
        let Some(input) = self.config.input() else {
            return Ok(());
        };
        if event.target != input {
            return Ok(());
        }
        if event.key == Key::Enter {
            return Ok(());
        }

        self.display_matches(&event.value)?;

        if !self.config.key_navigation() {
            return Ok(());
        }

        match event.key {
            Key::ArrowUp | Key::ArrowDown => {
                let direction = if event.key == Key::ArrowUp {
                    Direction::Up
                } else {
                    Direction::Down
                };
                self.navigate(direction)?;

                if let ActiveItem::At(index) = self.active {
                    if let Some(&item) = self
                        .rendered
                        .as_ref()
                        .and_then(|items| items.get(index))
                    {
                        self.item_selected.emit(SelectionEvent { item, index });
                    }
                }
            }
            _ => {
                // Navigation state only; the markup stays on screen.
                self.surface.scroll_to_top()?;
                self.active = ActiveItem::None;
                self.rendered = None;
            }
        }
        Ok(())
    }

    /// Directly set the active item.
    ///
    /// No validation: passing an index outside the rendered list faults
    /// later, when navigation next dereferences it.
    pub fn set_active_item(&mut self, active: ActiveItem) {
        self.active = active;
    }

    /// Tear down all visible state: empty and hide the list container,
    /// deactivate, and forget the rendered items.
    pub fn clear(&mut self) -> Result<()> {
        self.surface.clear()?;
        self.surface.hide()?;
        self.active = ActiveItem::None;
        self.rendered = None;
        tracing::debug!(target: "typeline::typeahead", "typeahead cleared");
        Ok(())
    }

    /// Swap the searchable collection.
    ///
    /// Takes effect on the next render; does not itself re-render or reset
    /// navigation state.
    pub fn replace_collection(&mut self, collection: Vec<String>) {
        tracing::debug!(
            target: "typeline::typeahead",
            collection_len = collection.len(),
            "collection replaced"
        );
        self.collection = collection;
    }
}

impl<S: ListSurface + std::fmt::Debug> std::fmt::Debug for Typeahead<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typeahead")
            .field("config", &self.config)
            .field("collection_len", &self.collection.len())
            .field("rendered_len", &self.rendered.as_ref().map(Vec::len))
            .field("active", &self.active)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ElementId;
    use crate::surface::MarkupList;

    fn fruits() -> Vec<String> {
        vec!["Apple".into(), "Banana".into(), "Grape".into()]
    }

    fn controller(config: TypeaheadConfig) -> Typeahead<MarkupList> {
        Typeahead::new(config, MarkupList::new()).unwrap()
    }

    #[test]
    fn test_construction_clears_and_hides() {
        let typeahead = controller(
            TypeaheadConfig::new()
                .with_input(ElementId::new(1))
                .with_collection(fruits()),
        );
        assert!(typeahead.surface().is_empty());
        assert!(!typeahead.surface().is_visible());
        assert_eq!(typeahead.active_item(), ActiveItem::None);
        assert!(typeahead.rendered_items().is_none());
    }

    #[test]
    fn test_inert_without_input_binding() {
        let mut surface = MarkupList::new();
        surface.set_markup("<li>stale</li>").unwrap();

        let typeahead =
            Typeahead::new(TypeaheadConfig::new().with_collection(fruits()), surface).unwrap();
        assert!(!typeahead.is_enabled());
        // Construction touched nothing.
        assert_eq!(typeahead.surface().len(), 1);
        assert!(typeahead.surface().is_visible());
    }

    #[test]
    fn test_navigate_with_nothing_rendered_is_noop() {
        let mut typeahead = controller(
            TypeaheadConfig::new()
                .with_input(ElementId::new(1))
                .with_collection(fruits()),
        );
        typeahead.navigate(Direction::Down).unwrap();
        assert_eq!(typeahead.active_item(), ActiveItem::None);
    }

    #[test]
    fn test_navigate_marks_and_scrolls() {
        let mut typeahead = Typeahead::new(
            TypeaheadConfig::new()
                .with_input(ElementId::new(1))
                .with_collection(fruits()),
            MarkupList::new().with_item_height(10.0),
        )
        .unwrap();

        typeahead.display_matches("a").unwrap();
        typeahead.navigate(Direction::Up).unwrap();

        // Up from unselected lands on the last item.
        assert_eq!(typeahead.active_item(), ActiveItem::At(2));
        let items = typeahead.rendered_items().unwrap().to_vec();
        assert!(typeahead.surface().is_active(items[2]));
        assert_eq!(typeahead.surface().scroll_top(), 20.0);
    }

    #[test]
    fn test_navigate_deactivates_previous_item() {
        let mut typeahead = controller(
            TypeaheadConfig::new()
                .with_input(ElementId::new(1))
                .with_collection(fruits()),
        );
        typeahead.display_matches("a").unwrap();
        typeahead.navigate(Direction::Down).unwrap();
        typeahead.navigate(Direction::Down).unwrap();

        let items = typeahead.rendered_items().unwrap().to_vec();
        assert!(!typeahead.surface().is_active(items[0]));
        assert!(typeahead.surface().is_active(items[1]));
    }

    #[test]
    fn test_set_active_item_is_unvalidated() {
        let mut typeahead = controller(
            TypeaheadConfig::new()
                .with_input(ElementId::new(1))
                .with_collection(fruits()),
        );
        typeahead.set_active_item(ActiveItem::At(99));
        assert_eq!(typeahead.active_item(), ActiveItem::At(99));
    }

    #[test]
    fn test_replace_collection_does_not_rerender() {
        let mut typeahead = controller(
            TypeaheadConfig::new()
                .with_input(ElementId::new(1))
                .with_collection(fruits()),
        );
        typeahead.display_matches("an").unwrap();
        let before = typeahead.surface().len();

        typeahead.replace_collection(vec!["Mango".into()]);
        assert_eq!(typeahead.surface().len(), before);
        assert_eq!(typeahead.collection(), &["Mango".to_string()]);

        // The swap takes effect on the next render.
        typeahead.display_matches("an").unwrap();
        let items = typeahead.rendered_items().unwrap().to_vec();
        assert_eq!(items.len(), 1);
        assert!(
            typeahead
                .surface()
                .item_markup(items[0])
                .unwrap()
                .contains("M")
        );
    }
}
