//! Dragging a tile into the empty slot.
//!
//! A gesture lives from the press on a movable tile until the next release
//! anywhere in the root. While it is in flight the pressed tile is hidden and
//! a proxy tile with the same label follows the pointer, constrained to the
//! axis toward the empty slot and to the span between the two tiles. On
//! release the two tiles swap if the pointer crossed into the empty slot's
//! side.

use fifteen_core::WidgetId;
use fifteen_core::logging::targets;
use fifteen_render::Rect;

use super::grid::PuzzleGrid;
use super::tile::Tile;
use crate::widget::{MouseEvent, WidgetTree};
use crate::{Error, Result};

/// One in-flight tile move.
#[derive(Debug)]
pub struct TileDragAndDrop {
    grid: PuzzleGrid,
    start: WidgetId,
    end: WidgetId,
    direction: (i32, i32),
    proxy: WidgetId,
}

impl TileDragAndDrop {
    /// Start dragging `start` toward `end`.
    ///
    /// The tiles must be orthogonal neighbours in `grid`. Hides `start` and
    /// adds the proxy as the grid's last child so it paints on top.
    pub fn begin(
        tree: &mut WidgetTree,
        grid: PuzzleGrid,
        start: WidgetId,
        end: WidgetId,
    ) -> Result<Self> {
        let from = grid.tile_matrix_index(tree, start)?;
        let to = grid.tile_matrix_index(tree, end)?;
        if from.manhattan_distance(to) != 1 {
            return Err(Error::TilesNotAdjacent);
        }

        let (label, style) = {
            let tile = tree.widget::<Tile>(start)?;
            (tile.label(), tile.style().clone())
        };
        let rect = tree.rect(start)?;
        let proxy = tree.insert_child(grid.id(), rect, Tile::new(label, style))?;
        tree.widget_mut::<Tile>(start)?.hide();

        let direction = (to.col - from.col, to.row - from.row);
        tracing::debug!(
            target: targets::PUZZLE,
            label,
            ?from,
            ?to,
            "drag started"
        );
        Ok(Self {
            grid,
            start,
            end,
            direction,
            proxy,
        })
    }

    /// The grid the gesture happens in.
    pub fn grid(&self) -> PuzzleGrid {
        self.grid
    }

    /// The tile being moved.
    pub fn start(&self) -> WidgetId {
        self.start
    }

    /// The empty tile it moves toward.
    pub fn end(&self) -> WidgetId {
        self.end
    }

    /// Signed `(column, row)` step from start to end. Exactly one component
    /// is non-zero.
    pub fn direction(&self) -> (i32, i32) {
        self.direction
    }

    /// The tile following the pointer.
    pub fn proxy(&self) -> WidgetId {
        self.proxy
    }

    /// Move the proxy by the pointer's movement along the drag axis.
    pub fn on_mousemove(&mut self, tree: &mut WidgetTree, event: &MouseEvent) -> Result<()> {
        let (dx, dy) = self.direction;
        let moved = tree.rect(self.proxy)?.offset(
            event.delta.x * dx.abs() as f32,
            event.delta.y * dy.abs() as f32,
        );
        let clamped = self.clamp(tree, moved)?;
        tree.set_rect(self.proxy, clamped)?;
        Ok(())
    }

    /// End the gesture at the release point.
    ///
    /// Swaps start and end if the release point lies on the end tile's side
    /// of its near edge. Either way the start tile is shown again and the
    /// proxy is removed. Returns whether the swap happened.
    pub fn finish(self, tree: &mut WidgetTree, event: &MouseEvent) -> Result<bool> {
        let end = tree.rect(self.end)?;
        let committed = self.crosses_into(end, event);
        if committed {
            self.grid.swap_tiles(tree, self.start, self.end)?;
        }

        tree.widget_mut::<Tile>(self.start)?.show();
        tree.remove_widget(self.grid.id(), self.proxy)?;

        tracing::debug!(
            target: targets::PUZZLE,
            committed,
            x = event.position.x,
            y = event.position.y,
            "drag finished"
        );
        Ok(committed)
    }

    /// Abandon the gesture without swapping.
    ///
    /// Tolerates tiles that are already gone, as when the grid is about to
    /// be refilled.
    pub fn cancel(self, tree: &mut WidgetTree) -> Result<()> {
        if tree.contains_widget(self.start) {
            tree.widget_mut::<Tile>(self.start)?.show();
        }
        if tree.contains_widget(self.proxy) {
            tree.remove_widget(self.grid.id(), self.proxy)?;
        }
        tracing::debug!(target: targets::PUZZLE, "drag cancelled");
        Ok(())
    }

    fn crosses_into(&self, end: Rect, event: &MouseEvent) -> bool {
        let (dx, dy) = self.direction;
        let position = event.position;

        (dx < 0 && position.x <= end.right())
            || (dx > 0 && position.x >= end.left())
            || (dy > 0 && position.y >= end.top())
            || (dy < 0 && position.y <= end.bottom())
    }

    /// Keep `rect` between the start and end tiles on the drag axis.
    fn clamp(&self, tree: &WidgetTree, rect: Rect) -> Result<Rect> {
        let (dx, dy) = self.direction;
        let start = tree.rect(self.start)?;
        let end = tree.rect(self.end)?;
        let mut origin = rect.origin;

        if dx != 0 {
            let (low, high) = if dx < 0 { (end, start) } else { (start, end) };
            if origin.x < low.left() {
                origin.x = low.left();
            } else if origin.x + rect.width() > high.right() {
                origin.x = high.left();
            }
        }

        if dy != 0 {
            let (low, high) = if dy < 0 { (end, start) } else { (start, end) };
            if origin.y < low.top() {
                origin.y = low.top();
            } else if origin.y + rect.height() > high.bottom() {
                origin.y = high.top();
            }
        }

        Ok(rect.with_origin(origin))
    }
}
