//! A single numbered tile.

use std::rc::Rc;

use fifteen_render::{RoundedRect, Surface};
use fifteen_style::{
    DEFAULT_TILE_BG, DEFAULT_TILE_LABEL_COLOR, DEFAULT_TILE_LABEL_TEXT_SIZE, Style, attr,
};

use super::EMPTY_LABEL;
use crate::widget::{Widget, WidgetBase};

/// Corner radius of a tile's background.
pub const TILE_CORNER_RADIUS: f32 = 12.0;

/// A tile: a rounded square with its label centered on it.
///
/// The label never changes once the tile exists. A hidden tile paints
/// nothing but still takes part in hit testing.
#[derive(Debug, Clone)]
pub struct Tile {
    label: u8,
    visible: bool,
    style: Rc<Style>,
}

impl Tile {
    /// Create a visible tile.
    pub fn new(label: u8, style: Rc<Style>) -> Self {
        Self {
            label,
            visible: true,
            style,
        }
    }

    /// The tile's number. 0 is the empty slot.
    pub fn label(&self) -> u8 {
        self.label
    }

    /// Whether this is the empty slot.
    pub fn is_empty(&self) -> bool {
        self.label == EMPTY_LABEL
    }

    /// Whether the tile paints.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the tile.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the tile.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// The style the tile paints with.
    pub fn style(&self) -> &Rc<Style> {
        &self.style
    }
}

impl Widget for Tile {
    fn draw(&self, base: &WidgetBase, surface: &mut dyn Surface) {
        if !self.visible {
            return;
        }

        let rect = base.rect();
        surface.fill_rounded_rect(
            RoundedRect::new(rect, TILE_CORNER_RADIUS),
            self.style.color_or(attr::TILE_BG, DEFAULT_TILE_BG),
        );
        surface.draw_text(
            &self.label.to_string(),
            rect,
            self.style
                .size_or(attr::TILE_LABEL_TEXT_SIZE, DEFAULT_TILE_LABEL_TEXT_SIZE),
            self.style
                .color_or(attr::TILE_LABEL_COLOR, DEFAULT_TILE_LABEL_COLOR),
        );
    }

    fn describe(&self) -> Option<String> {
        Some(if self.visible {
            self.label.to_string()
        } else {
            format!("{} hidden", self.label)
        })
    }
}

#[cfg(test)]
mod tests {
    use fifteen_render::{Color, DrawCommand, Rect, RecordingSurface, Size};

    use super::*;
    use crate::widget::WidgetTree;

    fn draw_tile(tile: Tile) -> Vec<DrawCommand> {
        let mut tree = WidgetTree::new();
        let id = tree.insert(Rect::new(8.0, 8.0, 90.0, 90.0), tile);
        let mut surface = RecordingSurface::new(Size::new(400.0, 400.0));
        tree.draw(id, &mut surface).unwrap();
        surface.take_commands()
    }

    #[test]
    fn test_visible_tile_paints_background_and_label() {
        let style = Style::from_pairs([
            (attr::TILE_BG, Color::BLACK),
            (attr::TILE_LABEL_COLOR, Color::WHITE),
        ]);
        let commands = draw_tile(Tile::new(7, Rc::new(style)));
        let rect = Rect::new(8.0, 8.0, 90.0, 90.0);

        assert_eq!(
            commands,
            [
                DrawCommand::FillRoundedRect {
                    rect: RoundedRect::new(rect, 12.0),
                    color: Color::BLACK,
                },
                DrawCommand::Text {
                    text: "7".to_owned(),
                    bounds: rect,
                    size: DEFAULT_TILE_LABEL_TEXT_SIZE,
                    color: Color::WHITE,
                },
            ]
        );
    }

    #[test]
    fn test_hidden_tile_paints_nothing() {
        let mut tile = Tile::new(0, Rc::new(Style::default_theme()));
        assert!(tile.is_empty());
        tile.hide();

        assert!(draw_tile(tile).is_empty());
    }
}
