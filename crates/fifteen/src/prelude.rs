//! Prelude module for fifteen.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use fifteen::prelude::*;
//! ```
//!
//! This provides access to:
//! - The game shell (`Game`, `Config`, `Command`)
//! - Widget foundation (`Widget`, `WidgetTree`, `View`, `Gui`)
//! - Pointer events and input (`MouseEvent`, `EventKind`, `InputState`)
//! - Puzzle widgets (`PuzzleGrid`, `Tile`, `MatrixIndex`)
//! - Geometry, colors and surfaces (`Point`, `Size`, `Rect`, `Color`)

// ============================================================================
// Game Shell
// ============================================================================

pub use crate::{Command, Config, Game, LoopControl};

// ============================================================================
// Errors
// ============================================================================

pub use crate::{Error, Result, TreeError};

// ============================================================================
// Widget Foundation
// ============================================================================

pub use crate::widget::{
    Gui, View, Widget, WidgetBase, WidgetId, WidgetTree, WidgetTreeDebug, forward_to_child,
};

// ============================================================================
// Events and Input
// ============================================================================

pub use crate::widget::{EventKind, InputSnapshot, InputState, MouseButton, MouseEvent};

// ============================================================================
// Puzzle
// ============================================================================

pub use crate::puzzle::{MatrixIndex, PuzzleGrid, Tile, TileDragAndDrop};

// ============================================================================
// Rendering and Style
// ============================================================================

pub use fifteen_render::{Color, Point, Rect, RecordingSurface, Size, Surface};
pub use fifteen_style::{Style, attr};
