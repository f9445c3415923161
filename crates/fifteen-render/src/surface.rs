//! Drawing surfaces.
//!
//! Widgets paint through the [`Surface`] trait. The host owns the real
//! backing store (a window buffer, a texture, a terminal) and is responsible
//! for scaling the surface onto the physical display; widgets only ever see
//! root coordinates.
//!
//! [`RecordingSurface`] keeps the calls as a display list. Headless hosts
//! and tests use it to inspect what a frame would have painted.
//!
//! ```
//! use fifteen_render::{Color, DrawCommand, Rect, RecordingSurface, Size, Surface};
//!
//! let mut surface = RecordingSurface::new(Size::new(400.0, 400.0));
//! surface.fill_rect(Rect::new(0.0, 0.0, 400.0, 400.0), Color::BLACK);
//!
//! assert_eq!(surface.commands().len(), 1);
//! assert!(matches!(surface.commands()[0], DrawCommand::FillRect { .. }));
//! ```

use crate::types::{Color, Rect, RoundedRect, Size};

/// A target for widget painting.
pub trait Surface {
    /// The logical size of the surface in root coordinates.
    fn size(&self) -> Size;

    /// Fill an axis-aligned rectangle with a flat color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a rectangle with rounded corners with a flat color.
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color);

    /// Draw a single line of text centered inside `bounds`.
    ///
    /// `size` is the glyph size in pixels. Rasterizing the glyphs is the
    /// host's job.
    fn draw_text(&mut self, text: &str, bounds: Rect, size: f32, color: Color);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A flat rectangle fill.
    FillRect { rect: Rect, color: Color },
    /// A flat rounded rectangle fill.
    FillRoundedRect { rect: RoundedRect, color: Color },
    /// A centered text label.
    Text {
        text: String,
        bounds: Rect,
        size: f32,
        color: Color,
    },
}

/// A surface that records draw calls instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recording surface of the given logical size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// The commands recorded since the last [`clear`](Self::clear).
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Discard all recorded commands, e.g. at the start of a frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Take ownership of the recorded commands, leaving the list empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Texts drawn so far, in paint order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Change the logical size, as after a host resize.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color) {
        self.commands
            .push(DrawCommand::FillRoundedRect { rect, color });
    }

    fn draw_text(&mut self, text: &str, bounds: Rect, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            bounds,
            size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_paint_order() {
        let mut surface = RecordingSurface::new(Size::new(100.0, 100.0));
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        surface.fill_rect(rect, Color::BLACK);
        surface.fill_rounded_rect(RoundedRect::new(rect, 4.0), Color::WHITE);
        surface.draw_text("7", rect, 24.0, Color::WHITE);

        assert_eq!(surface.commands().len(), 3);
        assert_eq!(surface.texts(), vec!["7"]);
        assert!(matches!(
            surface.commands()[1],
            DrawCommand::FillRoundedRect { rect: RoundedRect { radius, .. }, .. } if radius == 4.0
        ));
    }

    #[test]
    fn test_take_and_clear() {
        let mut surface = RecordingSurface::new(Size::new(1.0, 1.0));
        surface.fill_rect(Rect::ZERO, Color::BLACK);

        let taken = surface.take_commands();
        assert_eq!(taken.len(), 1);
        assert!(surface.commands().is_empty());

        surface.fill_rect(Rect::ZERO, Color::BLACK);
        surface.clear();
        assert!(surface.commands().is_empty());
    }
}
