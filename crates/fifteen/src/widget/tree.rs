//! The widget arena.

use std::fmt;
use std::rc::Rc;

use fifteen_core::logging::targets;
use fifteen_core::{TreeError, WidgetId};
use fifteen_render::{Point, Rect, Surface};
use slotmap::SlotMap;

use super::base::WidgetBase;
use super::events::{EventKind, MouseEvent};
use super::traits::Widget;
use super::view;

type TreeResult<T> = fifteen_core::Result<T>;

struct Node {
    base: WidgetBase,
    widget: Box<dyn Widget>,
}

/// Owner of every widget, addressed by [`WidgetId`].
///
/// The tree is the only owner: parent links and callbacks refer to widgets by
/// id. A widget is destroyed together with its whole subtree when it is
/// removed from its parent.
///
/// # Hierarchy invariants
///
/// - A widget has at most one parent, and only views have children.
/// - Every child's parent link names the view whose child list contains it.
/// - No widget is its own ancestor.
///
/// Operations that would break one of these fail with a [`TreeError`] and
/// leave the tree untouched.
#[derive(Default)]
pub struct WidgetTree {
    nodes: SlotMap<WidgetId, Node>,
}

impl WidgetTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parentless widget.
    ///
    /// Views are subscribed to their own pointer events here so that events
    /// they receive are forwarded to the child under the pointer.
    pub fn insert<W: Widget>(&mut self, rect: Rect, widget: W) -> WidgetId {
        let mut base = WidgetBase::new(rect);
        if widget.is_view() {
            view::connect_forwarding(&mut base);
        }

        let type_name = widget.type_name();
        let id = self.nodes.insert(Node {
            base,
            widget: Box::new(widget),
        });
        tracing::trace!(target: targets::WIDGET, id = id.as_raw(), widget = type_name, "inserted widget");
        id
    }

    /// Insert a widget and append it to `parent`'s children.
    pub fn insert_child<W: Widget>(
        &mut self,
        parent: WidgetId,
        rect: Rect,
        widget: W,
    ) -> TreeResult<WidgetId> {
        self.ensure_view(parent)?;
        let id = self.insert(rect, widget);
        self.add_widget(parent, id)?;
        Ok(id)
    }

    /// Append `child` to `view`'s children and link it back.
    pub fn add_widget(&mut self, view: WidgetId, child: WidgetId) -> TreeResult<()> {
        self.ensure_view(view)?;
        if let Some(parent) = self.node(child)?.base.parent() {
            return Err(TreeError::AlreadyParented { child, parent });
        }
        if child == view || self.is_ancestor(child, view)? {
            return Err(TreeError::CircularParentage);
        }

        self.node_mut(view)?.base.children_mut().push(child);
        self.node_mut(child)?.base.set_parent(Some(view));
        tracing::trace!(
            target: targets::WIDGET,
            view = view.as_raw(),
            child = child.as_raw(),
            "attached widget"
        );
        Ok(())
    }

    /// Remove the first occurrence of `child` from `view` and destroy it,
    /// along with everything below it.
    pub fn remove_widget(&mut self, view: WidgetId, child: WidgetId) -> TreeResult<()> {
        let children = self.node_mut(view)?.base.children_mut();
        let Some(index) = children.iter().position(|&c| c == child) else {
            return Err(TreeError::NotAChild { view, child });
        };
        children.remove(index);

        let removed = self.destroy_subtree(child);
        tracing::trace!(
            target: targets::WIDGET,
            view = view.as_raw(),
            child = child.as_raw(),
            removed,
            "removed widget"
        );
        Ok(())
    }

    /// Destroy every child of `view`.
    pub fn clear_children(&mut self, view: WidgetId) -> TreeResult<()> {
        let children = std::mem::take(self.node_mut(view)?.base.children_mut());
        let removed: usize = children
            .into_iter()
            .map(|child| self.destroy_subtree(child))
            .sum();
        tracing::trace!(target: targets::WIDGET, view = view.as_raw(), removed, "cleared children");
        Ok(())
    }

    /// Whether `id` names a live widget.
    pub fn contains_widget(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of live widgets.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no widgets.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Shared state of a widget.
    pub fn base(&self, id: WidgetId) -> TreeResult<&WidgetBase> {
        Ok(&self.node(id)?.base)
    }

    /// The widget's rectangle in root coordinates.
    pub fn rect(&self, id: WidgetId) -> TreeResult<Rect> {
        Ok(self.node(id)?.base.rect())
    }

    /// Replace the widget's rectangle. Children are not moved.
    pub fn set_rect(&mut self, id: WidgetId, rect: Rect) -> TreeResult<()> {
        self.node_mut(id)?.base.set_rect(rect);
        Ok(())
    }

    /// The widget's parent view.
    pub fn parent(&self, id: WidgetId) -> TreeResult<Option<WidgetId>> {
        Ok(self.node(id)?.base.parent())
    }

    /// The widget's children in paint and hit-test order.
    pub fn children(&self, id: WidgetId) -> TreeResult<&[WidgetId]> {
        Ok(self.node(id)?.base.children())
    }

    /// The top of the widget's parent chain. A parentless widget is its own root.
    pub fn root(&self, id: WidgetId) -> TreeResult<WidgetId> {
        let mut current = id;
        while let Some(parent) = self.node(current)?.base.parent() {
            current = parent;
        }
        Ok(current)
    }

    /// Whether the widget can hold children.
    pub fn is_view(&self, id: WidgetId) -> TreeResult<bool> {
        Ok(self.node(id)?.widget.is_view())
    }

    /// The concrete type name of the widget.
    pub fn type_name(&self, id: WidgetId) -> TreeResult<&'static str> {
        Ok(self.node(id)?.widget.type_name())
    }

    /// The widget's own short description, if it has one.
    pub fn describe(&self, id: WidgetId) -> TreeResult<Option<String>> {
        Ok(self.node(id)?.widget.describe())
    }

    /// Hit test `point` against the widget.
    pub fn contains_point(&self, id: WidgetId, point: Point) -> TreeResult<bool> {
        let node = self.node(id)?;
        Ok(node.widget.contains(&node.base, point))
    }

    /// The first direct child of `view` that contains `point`.
    ///
    /// Children are tested in insertion order, so earlier children win where
    /// rectangles overlap or share an edge.
    pub fn child_at(&self, view: WidgetId, point: Point) -> TreeResult<Option<WidgetId>> {
        for &child in self.node(view)?.base.children() {
            if self.contains_point(child, point)? {
                return Ok(Some(child));
            }
        }
        Ok(None)
    }

    /// Borrow a widget as its concrete type.
    pub fn widget<T: Widget>(&self, id: WidgetId) -> TreeResult<&T> {
        let widget: &dyn Widget = self.node(id)?.widget.as_ref();
        widget
            .as_any()
            .downcast_ref::<T>()
            .ok_or_else(|| TreeError::WrongWidgetType {
                expected: std::any::type_name::<T>(),
                got: widget.type_name(),
            })
    }

    /// Mutably borrow a widget as its concrete type.
    pub fn widget_mut<T: Widget>(&mut self, id: WidgetId) -> TreeResult<&mut T> {
        let widget: &mut dyn Widget = self.node_mut(id)?.widget.as_mut();
        let got = widget.type_name();
        widget
            .as_any_mut()
            .downcast_mut::<T>()
            .ok_or(TreeError::WrongWidgetType {
                expected: std::any::type_name::<T>(),
                got,
            })
    }

    /// Subscribe `callback` to `kind` events on `id`.
    ///
    /// Callbacks for one kind run in subscription order.
    pub fn connect<F>(&mut self, id: WidgetId, kind: EventKind, callback: F) -> TreeResult<()>
    where
        F: Fn(&mut WidgetTree, WidgetId, &MouseEvent) -> crate::Result<()> + 'static,
    {
        self.node_mut(id)?.base.connect(kind, Rc::new(callback));
        Ok(())
    }

    /// Run every callback subscribed to `kind` on `id`.
    ///
    /// The callback list is copied before the first one runs, so callbacks
    /// may restructure the tree freely, including removing `id` itself. The
    /// first callback error stops the notification and is returned.
    pub fn notify(&mut self, id: WidgetId, kind: EventKind, event: &MouseEvent) -> crate::Result<()> {
        let callbacks = self.node(id)?.base.callbacks(kind);
        if callbacks.is_empty() {
            return Ok(());
        }

        tracing::trace!(
            target: targets::WIDGET,
            id = id.as_raw(),
            event = kind.name(),
            x = event.position.x,
            y = event.position.y,
            callbacks = callbacks.len(),
            "notify"
        );
        for callback in callbacks {
            callback(self, id, event)?;
        }
        Ok(())
    }

    /// Update `id` and then its subtree, depth first in child order.
    pub fn update(&mut self, id: WidgetId) -> TreeResult<()> {
        let node = self.node_mut(id)?;
        node.widget.update(&node.base);
        let children = node.base.children().to_vec();

        for child in children {
            self.update(child)?;
        }
        Ok(())
    }

    /// Draw `id` and then its subtree, depth first in child order.
    pub fn draw(&self, id: WidgetId, surface: &mut dyn Surface) -> TreeResult<()> {
        let node = self.node(id)?;
        node.widget.draw(&node.base, surface);

        for &child in node.base.children() {
            self.draw(child, surface)?;
        }
        Ok(())
    }

    fn node(&self, id: WidgetId) -> TreeResult<&Node> {
        self.nodes.get(id).ok_or(TreeError::InvalidWidgetId(id))
    }

    fn node_mut(&mut self, id: WidgetId) -> TreeResult<&mut Node> {
        self.nodes.get_mut(id).ok_or(TreeError::InvalidWidgetId(id))
    }

    fn ensure_view(&self, id: WidgetId) -> TreeResult<()> {
        if self.node(id)?.widget.is_view() {
            Ok(())
        } else {
            Err(TreeError::NotAView(id))
        }
    }

    /// Whether `ancestor` appears in `id`'s parent chain.
    fn is_ancestor(&self, ancestor: WidgetId, id: WidgetId) -> TreeResult<bool> {
        let mut current = self.node(id)?.base.parent();
        while let Some(parent) = current {
            if parent == ancestor {
                return Ok(true);
            }
            current = self.node(parent)?.base.parent();
        }
        Ok(false)
    }

    /// Drop `id` and all its descendants. Returns how many widgets went away.
    fn destroy_subtree(&mut self, id: WidgetId) -> usize {
        let mut pending = vec![id];
        let mut removed = 0;
        while let Some(id) = pending.pop() {
            if let Some(node) = self.nodes.remove(id) {
                pending.extend_from_slice(node.base.children());
                removed += 1;
            }
        }
        removed
    }
}

impl fmt::Debug for WidgetTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetTree")
            .field("widgets", &self.nodes.len())
            .finish()
    }
}
