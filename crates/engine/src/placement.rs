//! Gravity and piece lock-in.

use crate::collision::fits;
use blockfall_core::{Grid, PieceShape, Pose};

/// Where gravity takes the piece from `pose`: the last row at which it still
/// fits when translated straight down. Assumes `pose` itself is legal.
pub fn landing_pose(grid: &Grid, shape: &PieceShape, pose: Pose) -> Pose {
    let mut landing = pose;
    loop {
        let below = Pose {
            row: landing.row + 1,
            ..landing
        };
        if fits(grid, shape, below) {
            landing = below;
        } else {
            return landing;
        }
    }
}

/// Merge the posed piece into a fresh copy of the grid and clear any
/// completed rows. Returns the new grid and the number of rows cleared.
///
/// The input grid is never touched; earlier board states stay valid.
pub fn lock(grid: &Grid, shape: &PieceShape, pose: Pose) -> (Grid, u32) {
    let mut next = grid.clone();
    for cell in shape.cells(pose) {
        // Callers pass legal poses; guard anyway so a bad pose cannot panic.
        if cell.row >= 0
            && (cell.row as usize) < next.rows()
            && cell.col >= 0
            && (cell.col as usize) < next.cols()
        {
            next.set(cell.row as usize, cell.col as usize, 1);
        }
    }
    let cleared = next.clear_full_rows();
    (next, cleared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_core::{Cell, Spin};

    fn dot() -> PieceShape {
        PieceShape::new(Cell::new(0, 0), vec![Cell::new(0, 0)])
    }

    fn domino() -> PieceShape {
        PieceShape::new(Cell::new(0, 1), vec![Cell::new(0, 0), Cell::new(0, 1)])
    }

    #[test]
    fn test_landing_on_empty_grid() {
        let grid = Grid::new(5, 3);
        let landing = landing_pose(&grid, &dot(), Pose::START);
        assert_eq!(landing, Pose::new(4, 0, Spin::R0));
    }

    #[test]
    fn test_landing_on_obstacle() {
        let mut grid = Grid::new(5, 3);
        grid.set(3, 0, 1);
        let landing = landing_pose(&grid, &dot(), Pose::START);
        assert_eq!(landing, Pose::new(2, 0, Spin::R0));
    }

    #[test]
    fn test_landing_from_rotated_pose() {
        let grid = Grid::new(5, 3);
        // Vertical domino: pivot (0, 1), R90 maps offset (0, 1) to (1, 0).
        let landing = landing_pose(&grid, &domino(), Pose::new(0, 0, Spin::R90));
        let cells: Vec<Cell> = domino().cells(landing).collect();
        assert!(cells.contains(&Cell::new(4, 1)));
        assert!(cells.contains(&Cell::new(3, 1)));
    }

    #[test]
    fn test_lock_merges_without_clearing() {
        let grid = Grid::new(3, 3);
        let (next, cleared) = lock(&grid, &dot(), Pose::new(2, 1, Spin::R0));
        assert_eq!(cleared, 0);
        assert!(next.is_filled(2, 1));
        assert_eq!(next.filled_cells(), 1);
        // The source grid is untouched.
        assert_eq!(grid.filled_cells(), 0);
    }

    #[test]
    fn test_lock_completes_a_row() {
        let mut grid = Grid::new(3, 3);
        grid.set(2, 0, 1);
        grid.set(2, 2, 1);
        grid.set(1, 1, 1);
        let (next, cleared) = lock(&grid, &dot(), Pose::new(2, 1, Spin::R0));
        assert_eq!(cleared, 1);
        // The cell from row 1 fell into the bottom row; everything else went.
        assert_eq!(next.filled_cells(), 1);
        assert!(next.is_filled(2, 1));
    }

    #[test]
    fn test_lock_cell_count_accounting() {
        // Zero cleared rows: full cells grow by exactly the piece size.
        let mut grid = Grid::new(4, 4);
        grid.set(3, 0, 1);
        let before = grid.filled_cells();
        let (next, cleared) = lock(&grid, &domino(), Pose::new(3, 0, Spin::R0));
        assert_eq!(cleared, 0);
        assert_eq!(next.filled_cells(), before + 2);
    }

    #[test]
    fn test_lock_clearing_removes_full_rows_of_cells() {
        // Completing k rows removes exactly k * cols cells.
        let mut grid = Grid::new(3, 3);
        grid.set(2, 0, 1);
        let before = grid.filled_cells();
        // Horizontal domino fills (2,1) and (2,2), completing the bottom row.
        let (next, cleared) = lock(&grid, &domino(), Pose::new(2, 0, Spin::R0));
        assert_eq!(cleared, 1);
        let piece_cells = 2;
        assert_eq!(
            next.filled_cells(),
            before + piece_cells - cleared * next.cols() as u32
        );
    }
}
