//! blockfall-eval - structural heuristics over resulting occupancy grids.
//!
//! Every feature reads a finished grid; none of them care how the pieces got
//! there. Scores combine linearly. With the default all-ones weights each
//! feature acts as a penalty, so a lower score means a tidier board.

use blockfall_core::Grid;

/// One weight per structural feature. Static configuration - tune offline,
/// not at runtime.
#[derive(Clone, Debug)]
pub struct EvalWeights {
    pub holes: f32,
    pub altitude: f32,
    pub full_cells: f32,
    pub full_cells_weighted: f32,
    pub higher_slope: f32,
    pub roughness: f32,
    pub components: f32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            holes: 1.0,
            altitude: 1.0,
            full_cells: 1.0,
            full_cells_weighted: 1.0,
            higher_slope: 1.0,
            roughness: 1.0,
            components: 1.0,
        }
    }
}

/// Weighted sum of all features.
pub fn evaluate(grid: &Grid, weights: &EvalWeights) -> f32 {
    weights.holes * count_holes(grid) as f32
        + weights.altitude * altitude(grid) as f32
        + weights.full_cells * full_cells(grid) as f32
        + weights.full_cells_weighted * full_cells_weighted(grid) as f32
        + weights.higher_slope * higher_slope(grid) as f32
        + weights.roughness * roughness(grid) as f32
        + weights.components * components(grid) as f32
}

/// Empty cells with at least one filled cell above them in the same column.
pub fn count_holes(grid: &Grid) -> u32 {
    let mut holes = 0;
    for col in 0..grid.cols() {
        let mut has_ceiling = false;
        for row in 0..grid.rows() {
            if grid.is_filled(row, col) {
                has_ceiling = true;
            } else if has_ceiling {
                holes += 1;
            }
        }
    }
    holes
}

/// Height of the stack: rows from the bottom up to and including the topmost
/// nonempty row. Zero for an empty grid.
pub fn altitude(grid: &Grid) -> u32 {
    for row in 0..grid.rows() {
        if !grid.is_row_empty(row) {
            return (grid.rows() - row) as u32;
        }
    }
    0
}

/// Total filled cells.
pub fn full_cells(grid: &Grid) -> u32 {
    grid.filled_cells()
}

/// Filled cells weighted by distance from the top row, so cells high in the
/// grid cost more. Under minimization this rewards mass near the bottom.
pub fn full_cells_weighted(grid: &Grid) -> u32 {
    let mut total = 0;
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if grid.is_filled(row, col) {
                total += (grid.rows() - row) as u32;
            }
        }
    }
    total
}

/// Length of the contiguous run of nonempty rows starting at the bottom row.
/// A fully-empty row ends the run even if filled cells float above it.
pub fn higher_slope(grid: &Grid) -> u32 {
    let mut run = 0;
    for row in (0..grid.rows()).rev() {
        if grid.is_row_empty(row) {
            break;
        }
        run += 1;
    }
    run
}

/// Surface unevenness: for every filled cell, the empty gap walked downward
/// in each adjacent column, every empty cell counted at most once.
pub fn roughness(grid: &Grid) -> u32 {
    let mut counted = vec![false; grid.rows() * grid.cols()];
    let mut total = 0;
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if !grid.is_filled(row, col) {
                continue;
            }
            for side in neighbor_columns(grid, col) {
                if counted[row * grid.cols() + side] || grid.is_filled(row, side) {
                    continue;
                }
                let mut walk = row;
                while walk < grid.rows() && !grid.is_filled(walk, side) {
                    counted[walk * grid.cols() + side] = true;
                    total += 1;
                    walk += 1;
                }
            }
        }
    }
    total
}

/// Variant of [`roughness`] that scores each filled cell by the larger of its
/// two neighbor gaps instead of summing every gap once.
pub fn roughness_max(grid: &Grid) -> u32 {
    let mut total = 0;
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if !grid.is_filled(row, col) {
                continue;
            }
            let mut deepest = 0;
            for side in neighbor_columns(grid, col) {
                let mut gap = 0;
                let mut walk = row;
                while walk < grid.rows() && !grid.is_filled(walk, side) {
                    gap += 1;
                    walk += 1;
                }
                deepest = deepest.max(gap);
            }
            total += deepest;
        }
    }
    total
}

fn neighbor_columns(grid: &Grid, col: usize) -> impl Iterator<Item = usize> {
    let cols = grid.cols();
    [col.checked_sub(1), (col + 1 < cols).then_some(col + 1)]
        .into_iter()
        .flatten()
}

/// Number of 4-connected regions of same-occupancy cells, counting filled and
/// empty regions alike.
pub fn components(grid: &Grid) -> u32 {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut seen = vec![false; rows * cols];
    let mut regions = 0;
    let mut stack = Vec::new();

    for start_row in 0..rows {
        for start_col in 0..cols {
            if seen[start_row * cols + start_col] {
                continue;
            }
            regions += 1;
            let color = grid.is_filled(start_row, start_col);
            seen[start_row * cols + start_col] = true;
            stack.push((start_row, start_col));
            while let Some((row, col)) = stack.pop() {
                let mut visit = |r: usize, c: usize, stack: &mut Vec<(usize, usize)>| {
                    if !seen[r * cols + c] && grid.is_filled(r, c) == color {
                        seen[r * cols + c] = true;
                        stack.push((r, c));
                    }
                };
                if row > 0 {
                    visit(row - 1, col, &mut stack);
                }
                if row + 1 < rows {
                    visit(row + 1, col, &mut stack);
                }
                if col > 0 {
                    visit(row, col - 1, &mut stack);
                }
                if col + 1 < cols {
                    visit(row, col + 1, &mut stack);
                }
            }
        }
    }
    regions
}
