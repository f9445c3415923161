//! Styling for fifteen.
//!
//! Styles here are deliberately flat: a [`Style`] is a map from attribute
//! name to a color or a size, loaded once at startup and passed to the
//! widgets that draw with it. There are no selectors, no cascade and no
//! animation.
//!
//! ```
//! use fifteen_style::{attr, Style};
//!
//! let style = Style::default_theme();
//! assert_eq!(style.size(attr::TILE_LABEL_TEXT_SIZE), Some(24.0));
//! ```

mod error;
mod style;
mod theme;

pub use error::{Error, Result};
pub use style::{Style, StyleValue};
pub use theme::{
    attr, DEFAULT_PUZZLE_GRID_BG, DEFAULT_TILE_BG, DEFAULT_TILE_LABEL_COLOR,
    DEFAULT_TILE_LABEL_TEXT_SIZE,
};
