//! The presentation surface a controller renders into.
//!
//! The controller never touches the host's display tree directly. It drives
//! a [`ListSurface`]: show or hide the list container, replace its content
//! with renderer markup, enumerate the item nodes that resulted, mark one
//! active, scroll. A DOM host implements this by resolving its list
//! selector per call (which is where
//! [`SurfaceError::ElementNotFound`](crate::error::SurfaceError::ElementNotFound)
//! comes from); [`MarkupList`] is the in-memory implementation used by
//! tests and demos.

use slotmap::{SlotMap, new_key_type};

use crate::error::Result;

new_key_type! {
    /// An opaque handle to a rendered item node inside the list container.
    ///
    /// Handles are only meaningful against the surface that produced them;
    /// replacing the container's markup invalidates all previous handles.
    pub struct ItemHandle;
}

/// The list container's primitive operations.
///
/// Every method is fallible because a real host resolves the container at
/// call time — the source of truth for the list lives outside this crate,
/// and it can disappear between calls. Implementations must not paper over
/// that: a lookup failure is the caller's fault and is propagated.
pub trait ListSurface {
    /// Reveal the list container.
    fn show(&mut self) -> Result<()>;

    /// Hide the list container. Content is untouched.
    fn hide(&mut self) -> Result<()>;

    /// Replace the container's content with the given markup, rebuilding
    /// the item nodes. All previously returned handles become stale.
    fn set_markup(&mut self, markup: &str) -> Result<()>;

    /// Empty the container of all items.
    fn clear(&mut self) -> Result<()>;

    /// Handles of the currently rendered items, in document order (the
    /// renderer's output order).
    fn items(&self) -> Result<Vec<ItemHandle>>;

    /// Add or remove the active marking on an item.
    fn set_active(&mut self, item: ItemHandle, active: bool) -> Result<()>;

    /// Scroll the container so the item's top aligns with the container's
    /// visible top.
    fn scroll_to_item(&mut self, item: ItemHandle) -> Result<()>;

    /// Scroll the container back to the top.
    fn scroll_to_top(&mut self) -> Result<()>;
}

/// A rendered item inside a [`MarkupList`].
#[derive(Debug, Clone)]
struct ItemNode {
    /// The item's inner markup, as produced by the renderer.
    markup: String,
    /// Whether the item carries the active marking.
    active: bool,
}

/// In-memory list container.
///
/// Stands in for a real host list element: parses `<li>` markup into item
/// nodes, tracks visibility, per-item active marking, and a scroll offset
/// derived from a fixed item height. Infallible by construction — every
/// trait method returns `Ok`.
#[derive(Debug)]
pub struct MarkupList {
    nodes: SlotMap<ItemHandle, ItemNode>,
    /// Document order of the nodes.
    order: Vec<ItemHandle>,
    visible: bool,
    scroll_top: f32,
    item_height: f32,
}

impl Default for MarkupList {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupList {
    /// Create an empty, visible list with the default item height.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            order: Vec::new(),
            visible: true,
            scroll_top: 0.0,
            item_height: 24.0,
        }
    }

    /// Set the item height used for scroll-offset computation.
    pub fn with_item_height(mut self, height: f32) -> Self {
        self.item_height = height.max(1.0);
        self
    }

    /// Whether the container is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The container's current scroll offset.
    pub fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    /// Number of rendered items.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the container holds no items.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The inner markup of an item, if the handle is current.
    pub fn item_markup(&self, item: ItemHandle) -> Option<&str> {
        self.nodes.get(item).map(|node| node.markup.as_str())
    }

    /// Whether an item carries the active marking.
    pub fn is_active(&self, item: ItemHandle) -> bool {
        self.nodes.get(item).is_some_and(|node| node.active)
    }

    /// The currently active item, if any.
    pub fn active_item(&self) -> Option<ItemHandle> {
        self.order
            .iter()
            .copied()
            .find(|&handle| self.is_active(handle))
    }

    /// The vertical offset of an item's top edge within the container.
    pub fn item_offset(&self, item: ItemHandle) -> Option<f32> {
        self.order
            .iter()
            .position(|&handle| handle == item)
            .map(|index| index as f32 * self.item_height)
    }

    /// Split list markup into per-item inner markup.
    ///
    /// Lenient by intent, like a browser: attributes on the opening tag are
    /// accepted, a missing closing tag swallows the rest of the input, and
    /// anything between items is dropped.
    fn parse_items(markup: &str) -> Vec<String> {
        let mut items = Vec::new();
        let mut rest = markup;

        while let Some(open) = rest.find("<li") {
            let after_open = &rest[open + 3..];
            let Some(gt) = after_open.find('>') else {
                break;
            };
            let body = &after_open[gt + 1..];
            match body.find("</li>") {
                Some(close) => {
                    items.push(body[..close].to_string());
                    rest = &body[close + 5..];
                }
                None => {
                    items.push(body.to_string());
                    break;
                }
            }
        }

        items
    }
}

impl ListSurface for MarkupList {
    fn show(&mut self) -> Result<()> {
        self.visible = true;
        Ok(())
    }

    fn hide(&mut self) -> Result<()> {
        self.visible = false;
        Ok(())
    }

    fn set_markup(&mut self, markup: &str) -> Result<()> {
        self.nodes.clear();
        self.order.clear();
        for inner in Self::parse_items(markup) {
            let handle = self.nodes.insert(ItemNode {
                markup: inner,
                active: false,
            });
            self.order.push(handle);
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.nodes.clear();
        self.order.clear();
        Ok(())
    }

    fn items(&self) -> Result<Vec<ItemHandle>> {
        Ok(self.order.clone())
    }

    fn set_active(&mut self, item: ItemHandle, active: bool) -> Result<()> {
        // Stale handles are tolerated, matching class-list updates on a
        // node that was already replaced.
        if let Some(node) = self.nodes.get_mut(item) {
            node.active = active;
        }
        Ok(())
    }

    fn scroll_to_item(&mut self, item: ItemHandle) -> Result<()> {
        if let Some(offset) = self.item_offset(item) {
            self.scroll_top = offset;
        }
        Ok(())
    }

    fn scroll_to_top(&mut self) -> Result<()> {
        self.scroll_top = 0.0;
        Ok(())
    }
}
