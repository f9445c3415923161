//! fifteen - a small retained-mode widget core and the sliding fifteen-tile
//! puzzle built on it.
//!
//! This is the main crate. It re-exports the building blocks of the lower
//! crates and adds the widget tree, the per-frame pointer dispatcher and the
//! puzzle widgets.
//!
//! # Example
//!
//! ```
//! use fifteen::prelude::*;
//!
//! fn main() -> fifteen::Result<()> {
//!     let mut game = Game::new(&Config::default(), InputState::new())?;
//!     let mut surface = RecordingSurface::new(Size::new(400.0, 400.0));
//!
//!     game.resize(Size::new(800.0, 400.0))?;
//!     game.update()?;
//!     game.draw(&mut surface)?;
//!
//!     // The fifteen numbered tiles were painted; the empty slot was not.
//!     assert_eq!(surface.texts().len(), 15);
//!     Ok(())
//! }
//! ```

pub use fifteen_core::{Slots, TreeError, WidgetId};

pub use fifteen_core::logging;

/// Geometry, colors and drawing surfaces.
pub mod render {
    pub use fifteen_render::*;
}

/// Flat named-attribute styling.
pub mod style {
    pub use fifteen_style::*;
}

pub mod config;
mod error;
pub mod game;
pub mod prelude;
pub mod puzzle;
pub mod widget;

pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use game::{Command, Game, LoopControl};
