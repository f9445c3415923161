//! Container widgets and spatial event forwarding.

use std::rc::Rc;

use fifteen_core::WidgetId;
use fifteen_core::logging::targets;
use fifteen_render::{Color, Surface};

use super::base::{Callback, WidgetBase};
use super::events::{EventKind, MouseEvent};
use super::traits::Widget;
use super::tree::WidgetTree;

/// A plain container.
///
/// A view owns an ordered list of children. Insertion order is both paint
/// order and hit-test priority. Pointer events a view receives are passed on
/// to the first child under the pointer, which is how an event injected at
/// the root travels down one level at a time.
///
/// ```
/// use fifteen::render::{Point, Rect};
/// use fifteen::widget::{View, WidgetTree};
///
/// let mut tree = WidgetTree::new();
/// let root = tree.insert(Rect::new(0.0, 0.0, 100.0, 100.0), View::new());
/// let left = tree.insert_child(root, Rect::new(0.0, 0.0, 50.0, 100.0), View::new()).unwrap();
/// let right = tree.insert_child(root, Rect::new(50.0, 0.0, 50.0, 100.0), View::new()).unwrap();
///
/// // Both children contain x = 50; the first one added wins.
/// assert_eq!(tree.child_at(root, Point::new(50.0, 10.0)).unwrap(), Some(left));
/// assert_eq!(tree.child_at(root, Point::new(51.0, 10.0)).unwrap(), Some(right));
/// ```
#[derive(Debug, Clone, Default)]
pub struct View {
    background: Option<Color>,
}

impl View {
    /// Create a transparent view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a view that fills its rectangle before its children paint.
    pub fn with_background(color: Color) -> Self {
        Self {
            background: Some(color),
        }
    }

    /// The fill color, if any.
    pub fn background(&self) -> Option<Color> {
        self.background
    }
}

impl Widget for View {
    fn draw(&self, base: &WidgetBase, surface: &mut dyn Surface) {
        if let Some(color) = self.background {
            surface.fill_rect(base.rect(), color);
        }
    }

    fn is_view(&self) -> bool {
        true
    }
}

/// Re-dispatch `event` to the first child of `view` containing its position.
///
/// Events no child claims are absorbed.
pub fn forward_to_child(
    tree: &mut WidgetTree,
    view: WidgetId,
    kind: EventKind,
    event: &MouseEvent,
) -> crate::Result<()> {
    match tree.child_at(view, event.position)? {
        Some(child) => {
            tracing::trace!(
                target: targets::WIDGET,
                view = view.as_raw(),
                child = child.as_raw(),
                event = kind.name(),
                "forwarding to child"
            );
            tree.notify(child, kind, event)
        }
        None => Ok(()),
    }
}

/// Subscribe a freshly created view to its own pointer events.
pub(crate) fn connect_forwarding(base: &mut WidgetBase) {
    for kind in EventKind::ALL {
        base.connect(kind, forwarder(kind));
    }
}

fn forwarder(kind: EventKind) -> Rc<Callback> {
    Rc::new(move |tree: &mut WidgetTree, view: WidgetId, event: &MouseEvent| {
        forward_to_child(tree, view, kind, event)
    })
}
