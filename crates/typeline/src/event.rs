//! Event types for the typeahead controller.
//!
//! These types stand in for the host platform's event substrate. The host
//! (a DOM bridge, a TUI shell, a test harness) owns event delivery: it
//! listens for key releases document-wide and forwards each one to every
//! controller's [`handle_key_release`](crate::Typeahead::handle_key_release).
//! Each controller filters by its own bound input element, so multiple
//! independent instances can coexist on one page without interfering.

use crate::surface::ItemHandle;

/// An opaque, copyable reference to a host element.
///
/// Controllers hold an `ElementId` for the input they are bound to and
/// compare it against [`KeyReleaseEvent::target`]. How ids map onto real
/// elements (DOM nodes, widget ids) is the host's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u64);

impl ElementId {
    /// Create an element id from a host-assigned raw value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The host-assigned raw value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// The keys the typeahead controller distinguishes.
///
/// Anything that is not navigation or Enter collapses into the catch-all
/// variants: the controller treats all of those identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// The Up arrow key.
    ArrowUp,
    /// The Down arrow key.
    ArrowDown,
    /// The Enter key.
    Enter,
    /// The Backspace key.
    Backspace,
    /// The Escape key.
    Escape,
    /// A printable character key.
    Character(char),
    /// Any other key.
    Unknown,
}

/// A key-release event delivered by the host.
///
/// `value` carries the bound input's full text at release time, so the
/// controller never has to read the input element itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyReleaseEvent {
    /// The element the event was dispatched on.
    pub target: ElementId,
    /// The released key.
    pub key: Key,
    /// The target input's current text.
    pub value: String,
}

impl KeyReleaseEvent {
    /// Convenience constructor.
    pub fn new(target: ElementId, key: Key, value: impl Into<String>) -> Self {
        Self {
            target,
            key,
            value: value.into(),
        }
    }
}

/// Notification that keyboard navigation landed on a rendered item.
///
/// Emitted through [`Typeahead::item_selected`](crate::Typeahead::item_selected)
/// whenever Up/Down navigation activates an item. Carries no payload beyond
/// the item itself; consumers read the selected entry through the handle.
/// A DOM-backed host that needs the legacy custom event can connect a slot
/// that re-dispatches [`SelectionEvent::NAME`] on the item's node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionEvent {
    /// Handle of the item navigation landed on.
    pub item: ItemHandle,
    /// The item's position in the rendered list.
    pub index: usize,
}

impl SelectionEvent {
    /// The fixed event identifier hosts dispatch under.
    pub const NAME: &'static str = "taItemSelected";

    /// The notification bubbles up from the item node.
    pub const BUBBLES: bool = true;

    /// Consumers may cancel downstream handling.
    pub const CANCELABLE: bool = true;
}
