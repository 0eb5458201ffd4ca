//! Movement resolver: one-cell steps with edge wrap and wall blocking.

use crate::entities::Direction;
use crate::grid::TileGrid;

/// Compute where an entity at `(row, col)` ends up after one step.
///
/// Crossing an edge re-enters from the opposite side. If the resulting cell
/// is a wall the move is rejected and the original position comes back
/// unchanged on both axes.
pub fn resolve(row: usize, col: usize, direction: Direction, grid: &TileGrid) -> (usize, usize) {
    let (width, height) = (grid.width(), grid.height());
    let (new_row, new_col) = match direction {
        Direction::Left => (row, if col == 0 { width - 1 } else { col - 1 }),
        Direction::Right => (row, if col + 1 >= width { 0 } else { col + 1 }),
        Direction::Up => (if row == 0 { height - 1 } else { row - 1 }, col),
        Direction::Down => (if row + 1 >= height { 0 } else { row + 1 }, col),
    };

    if grid.is_wall(new_row, new_col) {
        (row, col)
    } else {
        (new_row, new_col)
    }
}

/// Laser step: one row up, no wrap.
///
/// Returns `None` once the laser would reach the top boundary row or a
/// wall, at which point it should be discarded.
pub fn step_up(row: usize, col: usize, grid: &TileGrid) -> Option<(usize, usize)> {
    let new_row = row.checked_sub(1)?;
    if new_row == 0 || grid.is_wall(new_row, col) {
        None
    } else {
        Some((new_row, col))
    }
}
