//! Pointer events delivered to widget callbacks.

use std::fmt;

use fifteen_render::Point;

/// The kinds of event a widget can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// Press and release both happened inside the root.
    Click,
    /// The primary button went down.
    MouseDown,
    /// The primary button went up.
    MouseUp,
    /// The pointer moved by at least one root pixel.
    MouseMove,
}

impl EventKind {
    /// Every kind, in the order views subscribe to them.
    pub const ALL: [EventKind; 4] = [
        EventKind::Click,
        EventKind::MouseDown,
        EventKind::MouseUp,
        EventKind::MouseMove,
    ];

    /// The conventional lowercase name (`"click"`, `"mousedown"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::MouseDown => "mousedown",
            Self::MouseUp => "mouseup",
            Self::MouseMove => "mousemove",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A pointer event in root coordinates.
///
/// `delta` is the movement since the previous frame's mapped position. It is
/// zero for presses and releases that happen without movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    /// Pointer position in root space, in whole pixels.
    pub position: Point,
    /// Movement since the previous frame.
    pub delta: Point,
}

impl MouseEvent {
    /// Create an event.
    pub fn new(position: Point, delta: Point) -> Self {
        Self { position, delta }
    }

    /// Create an event with no movement.
    pub fn at(position: Point) -> Self {
        Self::new(position, Point::ZERO)
    }
}

/// Mouse buttons the input snapshot reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button. The only one the dispatcher watches.
    Left,
    /// Secondary button.
    Right,
    /// Wheel button.
    Middle,
}

impl MouseButton {
    pub(crate) fn mask(self) -> u8 {
        match self {
            Self::Left => 0b001,
            Self::Right => 0b010,
            Self::Middle => 0b100,
        }
    }
}
