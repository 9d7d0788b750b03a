//! Free-form piece shapes - a pivot plus cell offsets.

use crate::{Pose, Spin};
use serde::{Deserialize, Serialize};

/// Integer board coordinates. Row 0 is the top row; rows grow downward.
/// Also used for pivot-relative offsets, where negative values are routine.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    #[serde(rename = "i")]
    pub row: i32,
    #[serde(rename = "j")]
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// An immutable piece shape: cell offsets measured from a fixed pivot.
/// Shapes carry no pose of their own; see [`PieceShape::cells`].
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PieceShape {
    #[serde(rename = "center")]
    pub pivot: Cell,
    pub offsets: Vec<Cell>,
}

impl PieceShape {
    pub fn new(pivot: Cell, offsets: Vec<Cell>) -> Self {
        Self { pivot, offsets }
    }

    /// Occupied cells as a pure function of shape and pose.
    ///
    /// Each offset is rotated a quarter turn per spin step, then translated by
    /// pivot + pose. Integer arithmetic throughout; four applications of the
    /// quarter turn are the identity.
    pub fn cells(&self, pose: Pose) -> impl Iterator<Item = Cell> + '_ {
        let origin = Cell::new(self.pivot.row + pose.row, self.pivot.col + pose.col);
        self.offsets.iter().map(move |&off| {
            let (dr, dc) = match pose.spin {
                Spin::R0 => (off.row, off.col),
                Spin::R90 => (off.col, -off.row),
                Spin::R180 => (-off.row, -off.col),
                Spin::R270 => (-off.col, off.row),
            };
            Cell::new(origin.row + dr, origin.col + dc)
        })
    }
}
