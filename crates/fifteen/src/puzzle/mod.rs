//! The sliding fifteen-tile puzzle.
//!
//! A [`PuzzleGrid`] is a view holding sixteen [`Tile`]s in a 4x4 matrix, one
//! of which (label 0) is the empty slot. Pressing a tile next to the empty
//! slot starts a [`TileDragAndDrop`]; releasing it far enough toward the
//! empty slot swaps the two.

mod drag_drop;
mod grid;
mod tile;

pub use drag_drop::TileDragAndDrop;
pub use grid::{GridState, PuzzleGrid};
pub use tile::{TILE_CORNER_RADIUS, Tile};

use static_assertions::const_assert_eq;

/// Tiles per row and per column.
pub const GRID_SIZE: usize = 4;

/// Tiles in a grid, the empty slot included.
pub const TILE_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Label of the empty slot.
pub const EMPTY_LABEL: u8 = 0;

/// Default gap between tiles and around the edge, in pixels.
pub const DEFAULT_BORDER_WIDTH: f32 = 8.0;

/// Every label at its own sequence index, empty slot first. A new game
/// starts from this ordering before shuffling.
pub const INITIAL_ORDERING: [u8; TILE_COUNT] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

/// The finished board: tiles in label order, empty slot bottom-right.
pub const SOLVED_ORDERING: [u8; TILE_COUNT] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0];

const_assert_eq!(TILE_COUNT, 16);
const_assert_eq!(INITIAL_ORDERING[TILE_COUNT - 1] as usize, TILE_COUNT - 1);
const_assert_eq!(SOLVED_ORDERING[TILE_COUNT - 1], EMPTY_LABEL);

/// A `(column, row)` position in the grid.
///
/// Components are signed so that neighbour arithmetic can step off the edge
/// and be rejected, rather than wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatrixIndex {
    /// Column, 0 at the left.
    pub col: i32,
    /// Row, 0 at the top.
    pub row: i32,
}

impl MatrixIndex {
    /// Create an index. It may be out of bounds.
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The matrix position of a row-major sequence index.
    pub fn from_sequence(index: usize) -> Self {
        Self::new((index % GRID_SIZE) as i32, (index / GRID_SIZE) as i32)
    }

    /// The row-major sequence index, or `None` when out of bounds.
    pub fn to_sequence(self) -> Option<usize> {
        self.is_in_bounds()
            .then(|| self.row as usize * GRID_SIZE + self.col as usize)
    }

    /// Whether both components are in `0..4`.
    pub fn is_in_bounds(self) -> bool {
        let range = 0..GRID_SIZE as i32;
        range.contains(&self.col) && range.contains(&self.row)
    }

    /// The index `(dc, dr)` away, if still inside the grid.
    pub fn offset(self, dc: i32, dr: i32) -> Option<Self> {
        let next = Self::new(self.col + dc, self.row + dr);
        next.is_in_bounds().then_some(next)
    }

    /// The in-bounds orthogonal neighbours: up, down, left, right.
    pub fn neighbours(self) -> impl Iterator<Item = MatrixIndex> {
        [(0, -1), (0, 1), (-1, 0), (1, 0)]
            .into_iter()
            .filter_map(move |(dc, dr)| self.offset(dc, dr))
    }

    /// Taxicab distance to `other`.
    pub fn manhattan_distance(self, other: Self) -> u32 {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }
}

impl From<(i32, i32)> for MatrixIndex {
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}
