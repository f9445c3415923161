//! Error types for widgets, the puzzle and the game shell.

use fifteen_core::{TreeError, WidgetId};

use crate::config::ConfigError;

/// Result type alias for fifteen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the widget layer and the puzzle built on it.
///
/// Every variant is an invariant violation: the failing operation has no
/// effect and the error propagates to whoever drove the frame.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The widget hierarchy rejected an operation.
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// A tile ordering that is not a permutation of the sixteen labels.
    #[error("Tile ordering must be a permutation of 0..=15, got {0:?}")]
    InvalidOrdering(Vec<u8>),

    /// A border width that is negative, not finite, or leaves no room for
    /// tiles in the grid's rectangle.
    #[error("Border width {0} leaves no room for tiles")]
    InvalidBorderWidth(f32),

    /// A matrix index outside the 4x4 grid.
    #[error("Matrix index ({col}, {row}) is outside the grid")]
    MatrixIndexOutOfRange { col: i32, row: i32 },

    /// The tile is not part of the grid's tile sequence.
    #[error("Widget {} is not a tile of this grid", .0.as_raw())]
    TileNotInGrid(WidgetId),

    /// A drag was requested between tiles that are not orthogonal neighbours.
    #[error("Tiles are not orthogonally adjacent")]
    TilesNotAdjacent,

    /// Loading or validating configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
