//! State shared by every widget.

use std::rc::Rc;

use fifteen_core::{Slots, WidgetId};
use fifteen_render::Rect;

use super::events::{EventKind, MouseEvent};
use super::tree::WidgetTree;

/// A widget event callback.
///
/// Callbacks receive the tree (so they can mutate any widget, including the
/// one they are attached to), the id of the widget that was notified and the
/// event.
pub type Callback = dyn Fn(&mut WidgetTree, WidgetId, &MouseEvent) -> crate::Result<()>;

/// Geometry, hierarchy links and callbacks of one widget.
///
/// The tree owns one `WidgetBase` per node. Widgets receive a shared borrow
/// of theirs in [`Widget::update`](super::Widget::update) and
/// [`Widget::draw`](super::Widget::draw); structural changes go through the
/// tree so the parent/children invariants hold.
pub struct WidgetBase {
    rect: Rect,
    parent: Option<WidgetId>,
    children: Vec<WidgetId>,
    slots: Slots<EventKind, Callback>,
}

impl WidgetBase {
    pub(crate) fn new(rect: Rect) -> Self {
        Self {
            rect,
            parent: None,
            children: Vec::new(),
            slots: Slots::new(),
        }
    }

    /// The widget's rectangle in root coordinates.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The parent view, if any.
    #[inline]
    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    /// Children in paint and hit-test order. Empty for non-views.
    #[inline]
    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    /// Number of callbacks subscribed to `kind`.
    pub fn connection_count(&self, kind: EventKind) -> usize {
        self.slots.connection_count(&kind)
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub(crate) fn set_parent(&mut self, parent: Option<WidgetId>) {
        self.parent = parent;
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<WidgetId> {
        &mut self.children
    }

    pub(crate) fn connect(&mut self, kind: EventKind, callback: Rc<Callback>) {
        self.slots.connect(kind, callback);
    }

    pub(crate) fn callbacks(&self, kind: EventKind) -> Vec<Rc<Callback>> {
        self.slots.snapshot(&kind)
    }
}

impl std::fmt::Debug for WidgetBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetBase")
            .field("rect", &self.rect)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("slots", &self.slots)
            .finish()
    }
}
