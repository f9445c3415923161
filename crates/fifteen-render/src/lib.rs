//! Rendering abstractions for fifteen.
//!
//! This crate provides the geometry and color types used throughout the
//! widget layer, and the [`Surface`] trait widgets paint through. It does not
//! rasterize anything itself; the host application supplies a surface backed
//! by whatever graphics stack it uses.

mod surface;
mod types;

pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use types::{Color, Point, Rect, RoundedRect, Size};
