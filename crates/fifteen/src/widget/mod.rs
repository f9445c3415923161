//! Widget system for fifteen.
//!
//! This module provides the retained-mode widget layer:
//!
//! - [`WidgetTree`]: the arena that owns every widget
//! - [`Widget`] trait: per-variant drawing, updating and hit testing
//! - [`View`]: a container that forwards pointer events to its children
//! - [`Gui`]: the root controller that turns polled pointer state into events
//!
//! # Overview
//!
//! Widgets are stored in a [`WidgetTree`] and addressed by [`WidgetId`].
//! Everything widgets share (rectangle, parent link, children, callbacks)
//! lives in the tree's [`WidgetBase`]; a `Widget` implementation only holds
//! what is specific to it.
//!
//! All rectangles are in root coordinates. There is no per-level coordinate
//! transform, so a child's rectangle is not relative to its parent's.
//!
//! # Events
//!
//! Callbacks are subscribed per [`EventKind`] with [`WidgetTree::connect`]
//! and receive the tree, so they can restructure it:
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use fifteen::render::{Point, Rect};
//! use fifteen::widget::{EventKind, MouseEvent, View, WidgetTree};
//!
//! let mut tree = WidgetTree::new();
//! let root = tree.insert(Rect::new(0.0, 0.0, 100.0, 100.0), View::new());
//! let child = tree.insert_child(root, Rect::new(10.0, 10.0, 20.0, 20.0), View::new()).unwrap();
//!
//! let clicks = Rc::new(Cell::new(0));
//! let counter = clicks.clone();
//! tree.connect(child, EventKind::Click, move |_tree, _id, _event| {
//!     counter.set(counter.get() + 1);
//!     Ok(())
//! })
//! .unwrap();
//!
//! // The root forwards to the child under the pointer.
//! tree.notify(root, EventKind::Click, &MouseEvent::at(Point::new(15.0, 15.0))).unwrap();
//! tree.notify(root, EventKind::Click, &MouseEvent::at(Point::new(50.0, 50.0))).unwrap();
//! assert_eq!(clicks.get(), 1);
//! ```

mod base;
mod debug;
mod dispatcher;
mod events;
pub mod input;
mod traits;
mod tree;
mod view;

#[cfg(test)]
mod tests;

pub use base::{Callback, WidgetBase};
pub use debug::{TreeFormatOptions, TreeStyle, WidgetTreeDebug};
pub use dispatcher::Gui;
pub use events::{EventKind, MouseButton, MouseEvent};
pub use fifteen_core::WidgetId;
pub use input::{InputSnapshot, InputState, from_winit_mouse_button};
pub use traits::{AsAny, Widget};
pub use tree::WidgetTree;
pub use view::{View, forward_to_child};
