//! The [`Widget`] trait.

use std::any::Any;

use fifteen_render::{Point, Surface};

use super::base::WidgetBase;

/// Upcasting helper so `dyn Widget` can be downcast to its concrete type.
///
/// Implemented for every `'static` type; widgets never implement it by hand.
pub trait AsAny: Any {
    /// Borrow as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
    /// Borrow as `&mut dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The per-variant behavior of a node in the [`WidgetTree`](super::WidgetTree).
///
/// The tree stores the state every widget shares (rectangle, parent link,
/// children, callbacks) in a [`WidgetBase`] next to the boxed widget and hands
/// it in where a widget needs it. Implementors only carry what is specific to
/// them.
///
/// # Example
///
/// ```
/// use fifteen::render::{Color, Surface};
/// use fifteen::widget::{Widget, WidgetBase};
///
/// struct Swatch(Color);
///
/// impl Widget for Swatch {
///     fn draw(&self, base: &WidgetBase, surface: &mut dyn Surface) {
///         surface.fill_rect(base.rect(), self.0);
///     }
/// }
/// ```
pub trait Widget: AsAny {
    /// Advance per-frame state. Called once per tick, parents before children.
    fn update(&mut self, _base: &WidgetBase) {}

    /// Paint this widget. Children are painted afterwards by the tree.
    fn draw(&self, base: &WidgetBase, surface: &mut dyn Surface);

    /// Whether this widget can hold children.
    ///
    /// Views answer `true` and get pointer forwarding wired on insertion.
    fn is_view(&self) -> bool {
        false
    }

    /// Hit test in root coordinates.
    ///
    /// The default is the inclusive rectangle test.
    fn contains(&self, base: &WidgetBase, point: Point) -> bool {
        base.rect().contains(point)
    }

    /// A short human-readable description for debug dumps.
    fn describe(&self) -> Option<String> {
        None
    }

    /// Concrete type name, used in error messages and debug dumps.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
