//! Attribute names and the built-in theme.

use fifteen_render::Color;

use crate::style::Style;

/// Attribute names read by the puzzle widgets.
pub mod attr {
    /// Fill color of a numbered tile.
    pub const TILE_BG: &str = "TILE_BG";
    /// Color of a tile's number.
    pub const TILE_LABEL_COLOR: &str = "TILE_LABEL_COLOR";
    /// Glyph size of a tile's number, in pixels.
    pub const TILE_LABEL_TEXT_SIZE: &str = "TILE_LABEL_TEXT_SIZE";
    /// Fill color behind the tiles, visible through the borders.
    pub const PUZZLE_GRID_BG: &str = "PUZZLE_GRID_BG";
}

/// Default tile fill, a mid blue.
pub const DEFAULT_TILE_BG: Color = Color::from_rgb(50.0 / 255.0, 130.0 / 255.0, 184.0 / 255.0);
/// Default tile number color.
pub const DEFAULT_TILE_LABEL_COLOR: Color = Color::WHITE;
/// Default tile number size.
pub const DEFAULT_TILE_LABEL_TEXT_SIZE: f32 = 24.0;
/// Default grid background, a near-black slate.
pub const DEFAULT_PUZZLE_GRID_BG: Color = Color::from_rgb(27.0 / 255.0, 38.0 / 255.0, 44.0 / 255.0);

impl Style {
    /// The built-in theme every attribute falls back to.
    pub fn default_theme() -> Self {
        let mut style = Self::new();
        style.set_attr(attr::TILE_BG, DEFAULT_TILE_BG);
        style.set_attr(attr::TILE_LABEL_COLOR, DEFAULT_TILE_LABEL_COLOR);
        style.set_attr(attr::TILE_LABEL_TEXT_SIZE, DEFAULT_TILE_LABEL_TEXT_SIZE);
        style.set_attr(attr::PUZZLE_GRID_BG, DEFAULT_PUZZLE_GRID_BG);
        style
    }

    /// The built-in theme with `overrides` layered on top.
    pub fn themed(overrides: &Style) -> Self {
        let mut style = Self::default_theme();
        style.merge(overrides);
        style
    }
}
