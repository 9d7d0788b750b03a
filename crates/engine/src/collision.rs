//! Collision detection - walls, floor, occupied cells.

use blockfall_core::{Grid, PieceShape, Pose};

/// Is the posed piece entirely in bounds and over empty cells?
///
/// The single source of truth for legality. Takes everything by shared
/// reference, so a `fits` call can never change the answer of the next one.
pub fn fits(grid: &Grid, shape: &PieceShape, pose: Pose) -> bool {
    shape.cells(pose).all(|cell| {
        cell.row >= 0
            && (cell.row as usize) < grid.rows()
            && cell.col >= 0
            && (cell.col as usize) < grid.cols()
            && !grid.is_filled(cell.row as usize, cell.col as usize)
    })
}
