//! Per-frame pointer diffing and event synthesis.
//!
//! # Event Flow
//!
//! Each [`Gui::update`] tick:
//!
//! 1. **Map**: the physical pointer position is mapped into root space through
//!    the viewport, clamped to the root and truncated to whole pixels.
//!
//! 2. **Move**: if the mapped position differs from last frame's, `mousemove`
//!    is injected at the root.
//!
//! 3. **Press**: on the first frame the primary button is down with the
//!    pointer inside the root, `mousedown` is injected. Nothing else is
//!    checked that frame.
//!
//! 4. **Release**: on the frame it comes back up, `mouseup` and then `click`
//!    are injected.
//!
//! Injected events reach deeper widgets through each view's forwarding
//! callbacks, see [`View`](super::View).

use fifteen_core::logging::{span_names, targets};
use fifteen_core::{TreeError, WidgetId};
use fifteen_render::{Point, Rect, Surface};

use super::events::{EventKind, MouseButton, MouseEvent};
use super::input::InputSnapshot;
use super::tree::WidgetTree;
use crate::Result;

/// The root controller.
///
/// Owns the widget tree, the id of its root view, the viewport the root is
/// displayed in and the input snapshot it polls. The host calls
/// [`update`](Self::update) and [`draw`](Self::draw) once per frame.
#[derive(Debug)]
pub struct Gui<I> {
    tree: WidgetTree,
    root: WidgetId,
    viewport: Rect,
    input: I,
    last_position: Point,
    button_held: bool,
}

impl<I: InputSnapshot> Gui<I> {
    /// Create a controller for the tree rooted at `root`.
    ///
    /// The current pointer position becomes the baseline, so the first
    /// update does not report a move unless the pointer actually moved.
    pub fn new(tree: WidgetTree, root: WidgetId, viewport: Rect, input: I) -> Result<Self> {
        if !tree.contains_widget(root) {
            return Err(TreeError::InvalidWidgetId(root).into());
        }
        warn_if_degenerate(viewport);

        let mut gui = Self {
            tree,
            root,
            viewport,
            input,
            last_position: Point::ZERO,
            button_held: false,
        };
        gui.last_position = gui.map_to_root(gui.input.pointer_position())?;
        Ok(gui)
    }

    /// Poll the input snapshot, inject the resulting events at the root and
    /// then update the whole tree.
    pub fn update(&mut self) -> Result<()> {
        let _tick = tracing::trace_span!(target: targets::DISPATCH, span_names::TICK).entered();

        self.dispatch_pointer()?;
        self.tree.update(self.root)?;
        Ok(())
    }

    /// Draw the whole tree, root first.
    pub fn draw(&self, surface: &mut dyn Surface) -> Result<()> {
        let _draw = tracing::trace_span!(target: targets::DISPATCH, span_names::DRAW).entered();

        self.tree.draw(self.root, surface)?;
        Ok(())
    }

    /// The physical rectangle the root is displayed in.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Replace the viewport. Takes effect on the next update.
    pub fn set_viewport(&mut self, viewport: Rect) {
        warn_if_degenerate(viewport);
        tracing::debug!(
            target: targets::DISPATCH,
            x = viewport.left(),
            y = viewport.top(),
            width = viewport.width(),
            height = viewport.height(),
            "viewport changed"
        );
        self.viewport = viewport;
    }

    /// Map a physical position into root space.
    ///
    /// The result is clamped to `[0, root width] x [0, root height]` and
    /// truncated to whole pixels. An empty viewport maps everything to the
    /// origin.
    pub fn map_to_root(&self, physical: Point) -> Result<Point> {
        let root = self.tree.rect(self.root)?;
        let viewport = self.viewport;
        if viewport.is_empty() {
            return Ok(Point::ZERO);
        }

        let x = (physical.x - viewport.left()) / viewport.width() * root.width();
        let y = (physical.y - viewport.top()) / viewport.height() * root.height();

        Ok(Point::new(
            x.clamp(0.0, root.width().max(0.0)),
            y.clamp(0.0, root.height().max(0.0)),
        )
        .trunc())
    }

    /// The widget tree.
    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    /// The widget tree, mutably.
    pub fn tree_mut(&mut self) -> &mut WidgetTree {
        &mut self.tree
    }

    /// The root view.
    pub fn root(&self) -> WidgetId {
        self.root
    }

    /// The input snapshot.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// The input snapshot, mutably. Hosts write the next frame's state here.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Last frame's mapped pointer position.
    pub fn last_position(&self) -> Point {
        self.last_position
    }

    /// Whether a press has been seen without its release.
    pub fn is_button_held(&self) -> bool {
        self.button_held
    }

    fn dispatch_pointer(&mut self) -> Result<()> {
        let position = self.map_to_root(self.input.pointer_position())?;
        let event = MouseEvent::new(position, position - self.last_position);

        if position != self.last_position {
            self.last_position = position;
            self.inject(EventKind::MouseMove, &event)?;
        }

        let pressed = self.input.is_button_down(MouseButton::Left);
        // A press outside the root is not latched; it becomes a press once
        // the held pointer enters the root.
        if pressed && !self.button_held && self.tree.contains_point(self.root, position)? {
            self.button_held = true;
            self.inject(EventKind::MouseDown, &event)?;
            return Ok(());
        }

        if !pressed && self.button_held {
            self.button_held = false;
            if self.tree.contains_point(self.root, position)? {
                self.inject(EventKind::MouseUp, &event)?;
                self.inject(EventKind::Click, &event)?;
            }
        }
        Ok(())
    }

    fn inject(&mut self, kind: EventKind, event: &MouseEvent) -> Result<()> {
        tracing::trace!(
            target: targets::DISPATCH,
            event = kind.name(),
            x = event.position.x,
            y = event.position.y,
            dx = event.delta.x,
            dy = event.delta.y,
            "injecting at root"
        );
        self.tree.notify(self.root, kind, event)
    }
}

fn warn_if_degenerate(viewport: Rect) {
    if viewport.is_empty() {
        tracing::warn!(
            target: targets::DISPATCH,
            width = viewport.width(),
            height = viewport.height(),
            "empty viewport, pointer maps to the root origin"
        );
    }
}
