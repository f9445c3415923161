//! The 4x4 tile grid.

use std::rc::Rc;

use fifteen_core::WidgetId;
use fifteen_core::logging::targets;
use fifteen_render::{Rect, Surface};
use fifteen_style::{DEFAULT_PUZZLE_GRID_BG, Style, attr};
use rand::Rng;
use rand::seq::SliceRandom;

use super::drag_drop::TileDragAndDrop;
use super::tile::Tile;
use super::{DEFAULT_BORDER_WIDTH, EMPTY_LABEL, GRID_SIZE, MatrixIndex, TILE_COUNT};
use crate::widget::{EventKind, MouseEvent, Widget, WidgetBase, WidgetTree};
use crate::{Error, Result};

/// The grid's widget state, stored in the tree.
///
/// Besides the tiles in its children list the grid keeps its own row-major
/// tile sequence: the children list also holds the drag proxy while a
/// gesture is in flight, and swaps reorder the sequence without touching
/// paint order.
#[derive(Debug)]
pub struct GridState {
    tiles: Vec<WidgetId>,
    border_width: f32,
    style: Rc<Style>,
    drag: Option<TileDragAndDrop>,
}

impl GridState {
    fn new(style: Rc<Style>) -> Self {
        Self {
            tiles: Vec::with_capacity(TILE_COUNT),
            border_width: DEFAULT_BORDER_WIDTH,
            style,
            drag: None,
        }
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> &[WidgetId] {
        &self.tiles
    }

    /// Gap between tiles and around the edge.
    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    /// The style shared with every tile.
    pub fn style(&self) -> &Rc<Style> {
        &self.style
    }

    /// The gesture in flight, if any.
    pub fn drag(&self) -> Option<&TileDragAndDrop> {
        self.drag.as_ref()
    }

    fn position_of(&self, tile: WidgetId) -> Result<usize> {
        self.tiles
            .iter()
            .position(|&t| t == tile)
            .ok_or(Error::TileNotInGrid(tile))
    }
}

impl Widget for GridState {
    fn draw(&self, base: &WidgetBase, surface: &mut dyn Surface) {
        surface.fill_rect(
            base.rect(),
            self.style.color_or(attr::PUZZLE_GRID_BG, DEFAULT_PUZZLE_GRID_BG),
        );
    }

    fn is_view(&self) -> bool {
        true
    }
}

/// Handle to a puzzle grid living in a [`WidgetTree`].
///
/// The handle is just the grid's id; every operation takes the tree it lives
/// in. Operations on a grid that has been removed from the tree fail with
/// [`TreeError::InvalidWidgetId`](fifteen_core::TreeError::InvalidWidgetId).
///
/// # Example
///
/// ```
/// use std::rc::Rc;
///
/// use fifteen::puzzle::{MatrixIndex, PuzzleGrid};
/// use fifteen::render::Rect;
/// use fifteen::style::Style;
/// use fifteen::widget::{View, WidgetTree};
///
/// # fn main() -> fifteen::Result<()> {
/// let mut tree = WidgetTree::new();
/// let rect = Rect::new(0.0, 0.0, 400.0, 400.0);
/// let root = tree.insert(rect, View::new());
/// let grid = PuzzleGrid::create(&mut tree, root, rect, Rc::new(Style::default_theme()))?;
///
/// grid.set_tiles_ordering(&mut tree, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0])?;
///
/// let tile = grid.tile_at_matrix_index(&tree, MatrixIndex::new(2, 3))?;
/// assert!(grid.can_tile_be_moved(&tree, tile)?);
/// assert_eq!(tree.rect(tile)?, Rect::new(204.0, 302.0, 90.0, 90.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleGrid(WidgetId);

impl PuzzleGrid {
    /// Create an empty grid as a child of `parent`.
    ///
    /// The grid also subscribes to `mousemove` and `mouseup` on the root of
    /// `parent`'s tree, so that a drag keeps tracking the pointer after it
    /// leaves the tile it started on.
    pub fn create(
        tree: &mut WidgetTree,
        parent: WidgetId,
        rect: Rect,
        style: Rc<Style>,
    ) -> Result<Self> {
        let id = tree.insert_child(parent, rect, GridState::new(style))?;
        let grid = Self(id);
        let root = tree.root(id)?;

        tree.connect(root, EventKind::MouseMove, move |tree, _root, event| {
            grid.on_root_mousemove(tree, event)
        })?;
        tree.connect(root, EventKind::MouseUp, move |tree, _root, event| {
            grid.on_root_mouseup(tree, event)
        })?;

        tracing::debug!(target: targets::PUZZLE, grid = id.as_raw(), "created puzzle grid");
        Ok(grid)
    }

    /// Wrap an existing grid id.
    pub fn from_id(id: WidgetId) -> Self {
        Self(id)
    }

    /// The grid's widget id.
    pub fn id(self) -> WidgetId {
        self.0
    }

    /// The grid's state.
    pub fn state(self, tree: &WidgetTree) -> Result<&GridState> {
        Ok(tree.widget::<GridState>(self.0)?)
    }

    fn state_mut(self, tree: &mut WidgetTree) -> Result<&mut GridState> {
        Ok(tree.widget_mut::<GridState>(self.0)?)
    }

    /// Replace every tile with a fresh set in the given label order.
    ///
    /// `ordering` must be a permutation of `0..=15`. Any gesture in flight is
    /// cancelled first. The empty tile is created hidden.
    pub fn set_tiles_ordering(self, tree: &mut WidgetTree, ordering: &[u8]) -> Result<()> {
        if !is_permutation(ordering) {
            return Err(Error::InvalidOrdering(ordering.to_vec()));
        }

        self.cancel_drag(tree)?;
        tree.clear_children(self.0)?;

        let style = self.state(tree)?.style.clone();
        let mut tiles = Vec::with_capacity(TILE_COUNT);
        for &label in ordering {
            let mut tile = Tile::new(label, style.clone());
            if label == EMPTY_LABEL {
                tile.hide();
            }

            let id = tree.insert_child(self.0, Rect::ZERO, tile)?;
            tree.connect(id, EventKind::MouseDown, move |tree, tile, _event| {
                self.on_tile_mousedown(tree, tile)
            })?;
            tiles.push(id);
        }
        self.state_mut(tree)?.tiles = tiles;

        tracing::debug!(target: targets::PUZZLE, ?ordering, "assigned tile ordering");
        self.layout(tree)
    }

    /// Labels in row-major order. Empty until an ordering is assigned.
    pub fn ordering(self, tree: &WidgetTree) -> Result<Vec<u8>> {
        self.state(tree)?
            .tiles
            .iter()
            .map(|&tile| -> Result<u8> { Ok(tree.widget::<Tile>(tile)?.label()) })
            .collect()
    }

    /// Assign a uniformly random ordering.
    ///
    /// Half of all orderings cannot be solved; no attempt is made to avoid
    /// them.
    pub fn shuffle<R: Rng + ?Sized>(self, tree: &mut WidgetTree, rng: &mut R) -> Result<()> {
        let mut ordering: Vec<u8> = (0..TILE_COUNT as u8).collect();
        ordering.shuffle(rng);
        self.set_tiles_ordering(tree, &ordering)
    }

    /// Exchange the sequence positions of two tiles and lay them out again.
    pub fn swap_tiles(self, tree: &mut WidgetTree, a: WidgetId, b: WidgetId) -> Result<()> {
        let state = self.state_mut(tree)?;
        let a_index = state.position_of(a)?;
        let b_index = state.position_of(b)?;
        state.tiles.swap(a_index, b_index);

        tracing::debug!(target: targets::PUZZLE, a_index, b_index, "swapped tiles");
        self.layout(tree)
    }

    /// The tile at `index`.
    pub fn tile_at_matrix_index(self, tree: &WidgetTree, index: MatrixIndex) -> Result<WidgetId> {
        let state = self.state(tree)?;
        index
            .to_sequence()
            .and_then(|i| state.tiles.get(i).copied())
            .ok_or(Error::MatrixIndexOutOfRange {
                col: index.col,
                row: index.row,
            })
    }

    /// The matrix position of `tile`.
    pub fn tile_matrix_index(self, tree: &WidgetTree, tile: WidgetId) -> Result<MatrixIndex> {
        Ok(MatrixIndex::from_sequence(self.state(tree)?.position_of(tile)?))
    }

    /// The empty slot's tile, if an ordering has been assigned.
    pub fn empty_tile(self, tree: &WidgetTree) -> Result<Option<WidgetId>> {
        for &tile in &self.state(tree)?.tiles {
            if tree.widget::<Tile>(tile)?.is_empty() {
                return Ok(Some(tile));
            }
        }
        Ok(None)
    }

    /// Whether `tile` has the empty slot as an orthogonal neighbour.
    ///
    /// The empty tile itself is never movable.
    pub fn can_tile_be_moved(self, tree: &WidgetTree, tile: WidgetId) -> Result<bool> {
        if tree.widget::<Tile>(tile)?.is_empty() {
            return Ok(false);
        }

        let index = self.tile_matrix_index(tree, tile)?;
        for neighbour in index.neighbours() {
            let neighbour = self.tile_at_matrix_index(tree, neighbour)?;
            if tree.widget::<Tile>(neighbour)?.is_empty() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Gap between tiles and around the edge.
    pub fn border_width(self, tree: &WidgetTree) -> Result<f32> {
        Ok(self.state(tree)?.border_width)
    }

    /// Change the gap and lay the tiles out again.
    ///
    /// The five gaps across the grid's shorter side must leave room for
    /// tiles; anything else is rejected and the old width kept.
    pub fn set_border_width(self, tree: &mut WidgetTree, border_width: f32) -> Result<()> {
        let rect = tree.rect(self.0)?;
        let gaps = (GRID_SIZE + 1) as f32 * border_width;
        if !(border_width.is_finite() && border_width >= 0.0)
            || gaps >= rect.width().min(rect.height())
        {
            return Err(Error::InvalidBorderWidth(border_width));
        }

        self.state_mut(tree)?.border_width = border_width;
        self.layout(tree)
    }

    /// Recompute every tile rectangle from its sequence position.
    ///
    /// Each tile is `(grid - 5 * border) / 4` wide and high, placed one border
    /// apart, and snapped to whole pixels.
    pub fn layout(self, tree: &mut WidgetTree) -> Result<()> {
        let rect = tree.rect(self.0)?;
        let state = self.state(tree)?;
        let border = state.border_width;
        let tiles = state.tiles.clone();

        let gaps = (GRID_SIZE + 1) as f32 * border;
        let tile_width = (rect.width() - gaps) / GRID_SIZE as f32;
        let tile_height = (rect.height() - gaps) / GRID_SIZE as f32;

        for (i, tile) in tiles.into_iter().enumerate() {
            let index = MatrixIndex::from_sequence(i);
            let x = ((tile_width + border) * index.col as f32).trunc() + border;
            let y = ((tile_height + border) * index.row as f32).trunc() + border;
            tree.set_rect(
                tile,
                Rect::new(
                    (rect.left() + x).trunc(),
                    (rect.top() + y).trunc(),
                    tile_width.trunc(),
                    tile_height.trunc(),
                ),
            )?;
        }
        Ok(())
    }

    /// Whether a gesture is in flight.
    pub fn is_dragging(self, tree: &WidgetTree) -> Result<bool> {
        Ok(self.state(tree)?.drag.is_some())
    }

    /// The gesture in flight, if any.
    pub fn drag(self, tree: &WidgetTree) -> Result<Option<&TileDragAndDrop>> {
        Ok(self.state(tree)?.drag())
    }

    fn on_tile_mousedown(self, tree: &mut WidgetTree, tile: WidgetId) -> Result<()> {
        if self.is_dragging(tree)? || !self.can_tile_be_moved(tree, tile)? {
            return Ok(());
        }
        let Some(empty) = self.empty_tile(tree)? else {
            return Ok(());
        };

        let drag = TileDragAndDrop::begin(tree, self, tile, empty)?;
        self.state_mut(tree)?.drag = Some(drag);
        Ok(())
    }

    fn on_root_mousemove(self, tree: &mut WidgetTree, event: &MouseEvent) -> Result<()> {
        if !tree.contains_widget(self.0) {
            return Ok(());
        }
        let Some(mut drag) = self.state_mut(tree)?.drag.take() else {
            return Ok(());
        };

        let moved = drag.on_mousemove(tree, event);
        self.state_mut(tree)?.drag = Some(drag);
        moved
    }

    fn on_root_mouseup(self, tree: &mut WidgetTree, event: &MouseEvent) -> Result<()> {
        if !tree.contains_widget(self.0) {
            return Ok(());
        }
        if let Some(drag) = self.state_mut(tree)?.drag.take() {
            drag.finish(tree, event)?;
        }
        Ok(())
    }

    fn cancel_drag(self, tree: &mut WidgetTree) -> Result<()> {
        if let Some(drag) = self.state_mut(tree)?.drag.take() {
            drag.cancel(tree)?;
        }
        Ok(())
    }
}

fn is_permutation(ordering: &[u8]) -> bool {
    if ordering.len() != TILE_COUNT {
        return false;
    }
    let mut seen = [false; TILE_COUNT];
    for &label in ordering {
        match seen.get_mut(label as usize) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
