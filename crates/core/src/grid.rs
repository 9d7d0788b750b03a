//! Occupancy grid - runtime-sized matrix of color ids, 0 = empty.
//!
//! Row 0 is the top row. Dimensions are fixed for the lifetime of a run;
//! placement always works on a fresh clone, never on a grid owned by an
//! earlier board state.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum GridShapeError {
    #[error("grid must have at least one row and one column")]
    Empty,
    #[error("grid rows must all have {expected} columns, found one with {found}")]
    Ragged { expected: usize, found: usize },
}

#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Empty grid of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Build from row-major data. Fails on ragged input or a zero dimension.
    pub fn from_rows(data: Vec<Vec<u8>>) -> Result<Self, GridShapeError> {
        let rows = data.len();
        let cols = data.first().map(Vec::len).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(GridShapeError::Empty);
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for row in &data {
            if row.len() != cols {
                return Err(GridShapeError::Ragged {
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { rows, cols, cells })
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.cols + col]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.cells[row * self.cols + col] = value;
    }

    #[inline(always)]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.get(row, col) != 0
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        self.row_slice(row).iter().all(|&cell| cell != 0)
    }

    pub fn is_row_empty(&self, row: usize) -> bool {
        self.row_slice(row).iter().all(|&cell| cell == 0)
    }

    fn row_slice(&self, row: usize) -> &[u8] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Remove every complete row and return how many were removed.
    ///
    /// Scans bottom-to-top; surviving rows shift down by the number of
    /// removed rows found below them, and the vacated top rows become empty.
    pub fn clear_full_rows(&mut self) -> u32 {
        let cols = self.cols;
        let mut removed = 0usize;
        for row in (0..self.rows).rev() {
            if self.is_row_full(row) {
                removed += 1;
            } else if removed > 0 {
                let src = row * cols;
                let dst = (row + removed) * cols;
                self.cells.copy_within(src..src + cols, dst);
            }
        }
        for cell in &mut self.cells[..removed * cols] {
            *cell = 0;
        }
        removed as u32
    }

    /// Total count of filled cells.
    pub fn filled_cells(&self) -> u32 {
        self.cells.iter().filter(|&&cell| cell != 0).count() as u32
    }
}

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rows: Vec<&[u8]> = (0..self.rows).map(|row| self.row_slice(row)).collect();
        rows.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data: Vec<Vec<u8>> = Vec::deserialize(deserializer)?;
        Grid::from_rows(data).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{}", if self.is_filled(row, col) { "[]" } else { "  " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(grid: &mut Grid, row: usize) {
        for col in 0..grid.cols() {
            grid.set(row, col, 1);
        }
    }

    #[test]
    fn test_set_get() {
        let mut g = Grid::new(4, 3);
        g.set(2, 1, 7);
        assert_eq!(g.get(2, 1), 7);
        assert!(g.is_filled(2, 1));
        assert!(!g.is_filled(2, 0));
    }

    #[test]
    fn test_clear_single_row() {
        let mut g = Grid::new(4, 3);
        fill_row(&mut g, 3);
        g.set(2, 1, 1);
        assert_eq!(g.clear_full_rows(), 1);
        // Row 2 shifted down onto the cleared bottom row.
        assert!(g.is_filled(3, 1));
        assert!(g.is_row_empty(2));
    }

    #[test]
    fn test_clear_non_adjacent_rows() {
        // Rows 2 and 4 of a 6x4 grid full, a marker at (3, 0) and (1, 2).
        let mut g = Grid::new(6, 4);
        fill_row(&mut g, 2);
        fill_row(&mut g, 4);
        g.set(3, 0, 1);
        g.set(1, 2, 1);
        assert_eq!(g.clear_full_rows(), 2);

        let mut expected = Grid::new(6, 4);
        expected.set(4, 0, 1); // (3, 0) shifted past one removed row below it
        expected.set(3, 2, 1); // (1, 2) shifted past both removed rows
        assert_eq!(g, expected);
    }

    #[test]
    fn test_clear_preserves_color_ids() {
        let mut g = Grid::new(3, 2);
        fill_row(&mut g, 2);
        g.set(1, 0, 5);
        assert_eq!(g.clear_full_rows(), 1);
        assert_eq!(g.get(2, 0), 5);
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let err = Grid::from_rows(vec![vec![0, 1], vec![0]]).unwrap_err();
        assert_eq!(
            err,
            GridShapeError::Ragged {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_empty_input() {
        assert_eq!(Grid::from_rows(Vec::new()).unwrap_err(), GridShapeError::Empty);
    }

    #[test]
    fn test_serde_round_trip() {
        let g = Grid::from_rows(vec![vec![0, 1, 0], vec![2, 0, 0]]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[[0,1,0],[2,0,0]]");
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn test_filled_cells() {
        let mut g = Grid::new(3, 3);
        g.set(0, 0, 1);
        g.set(2, 2, 4);
        assert_eq!(g.filled_cells(), 2);
    }
}
