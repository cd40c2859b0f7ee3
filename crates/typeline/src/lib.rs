//! Typeline: a pluggable typeahead controller.
//!
//! Typeline filters a caller-supplied collection of strings as the user
//! types, renders the matches into a list container, highlights matched
//! substrings, and supports circular Up/Down keyboard navigation with a
//! selection notification. The crate owns only the sequencing logic — the
//! state machine governing list visibility, active-item tracking, and
//! key-driven navigation. Everything else is injected:
//!
//! - a [`Matcher`] filters the collection against the query,
//! - an [`ItemRenderer`] turns matches into list markup,
//! - a [`ListSurface`] applies display mutations to the host's container,
//! - the host forwards key-release events to
//!   [`Typeahead::handle_key_release`].
//!
//! There is no network fetching, no debouncing, and no virtualization:
//! every keystroke synchronously filters and re-renders. A consumer that
//! wants debouncing wraps the event delivery externally.
//!
//! # Example
//!
//! ```
//! use typeline::{
//!     ActiveItem, ElementId, Key, KeyReleaseEvent, MarkupList, Typeahead,
//!     TypeaheadConfig,
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
//! // Typing "an" filters to "Banana"
//! typeahead
//!     .handle_key_release(&KeyReleaseEvent::new(input, Key::Character('n'), "an"))
//!     .unwrap();
//! assert_eq!(typeahead.rendered_items().unwrap().len(), 1);
//!
//! // ArrowDown activates the first match
//! typeahead
//!     .handle_key_release(&KeyReleaseEvent::new(input, Key::ArrowDown, "an"))
//!     .unwrap();
//! assert_eq!(typeahead.active_item(), ActiveItem::At(0));
//! ```
//!
//! # Multiple instances
//!
//! Several controllers may coexist on one page. The host forwards every
//! key release to all of them; each controller filters by its own bound
//! [`ElementId`], so instances never interfere.

pub mod config;
pub mod error;
pub mod event;
pub mod matcher;
pub mod render;
pub mod surface;
pub mod typeahead;

pub use config::TypeaheadConfig;
pub use error::{Result, SurfaceError};
pub use event::{ElementId, Key, KeyReleaseEvent, SelectionEvent};
pub use matcher::{Matcher, SubstringMatcher};
pub use render::{HighlightRenderer, ItemRenderer};
pub use surface::{ItemHandle, ListSurface, MarkupList};
pub use typeahead::{ActiveItem, Direction, Typeahead};

// Re-export the signal types consumers need for `Typeahead::item_selected`.
pub use typeline_core::{ConnectionGuard, ConnectionId, Signal};
