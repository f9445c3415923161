//! Pointer polling.
//!
//! The dispatcher never receives pointer events directly. Once per frame it
//! reads an [`InputSnapshot`] and derives events by comparing against the
//! previous frame. The host keeps the snapshot current; [`InputState`] is a
//! ready-made snapshot that folds `winit` window events.

use fifteen_render::Point;
use winit::event::{ElementState, WindowEvent};

use super::events::MouseButton;

/// Read-only view of the pointer for the current frame.
pub trait InputSnapshot {
    /// Pointer position in physical (window) coordinates.
    fn pointer_position(&self) -> Point;

    /// Whether `button` is currently held.
    fn is_button_down(&self, button: MouseButton) -> bool;
}

impl<T: InputSnapshot + ?Sized> InputSnapshot for &T {
    fn pointer_position(&self) -> Point {
        (**self).pointer_position()
    }

    fn is_button_down(&self, button: MouseButton) -> bool {
        (**self).is_button_down(button)
    }
}

/// Pointer state written by the host and read by the dispatcher.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    position: Point,
    buttons: u8,
}

impl InputState {
    /// A pointer at the origin with no buttons held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the pointer.
    pub fn set_pointer_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Mark `button` as held.
    pub fn press(&mut self, button: MouseButton) {
        self.buttons |= button.mask();
    }

    /// Mark `button` as released.
    pub fn release(&mut self, button: MouseButton) {
        self.buttons &= !button.mask();
    }

    /// Release every button.
    pub fn release_all(&mut self) {
        self.buttons = 0;
    }

    /// Fold a window event into the snapshot.
    ///
    /// Returns `true` if the event changed pointer state. Losing focus
    /// releases every button: the matching release would otherwise go to
    /// another window and a drag in progress would never end.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.set_pointer_position(Point::new(position.x as f32, position.y as f32));
                true
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let Some(button) = from_winit_mouse_button(*button) else {
                    return false;
                };
                match state {
                    ElementState::Pressed => self.press(button),
                    ElementState::Released => self.release(button),
                }
                true
            }
            WindowEvent::Focused(false) => {
                self.release_all();
                true
            }
            _ => false,
        }
    }
}

impl InputSnapshot for InputState {
    fn pointer_position(&self) -> Point {
        self.position
    }

    fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons & button.mask() != 0
    }
}

/// Convert a winit mouse button. Back, forward and extra buttons are ignored.
pub fn from_winit_mouse_button(button: winit::event::MouseButton) -> Option<MouseButton> {
    match button {
        winit::event::MouseButton::Left => Some(MouseButton::Left),
        winit::event::MouseButton::Right => Some(MouseButton::Right),
        winit::event::MouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}
