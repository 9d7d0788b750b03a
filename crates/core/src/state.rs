//! Game state - the grid plus the active piece and its preview queue.

use crate::{Grid, PieceShape};
use serde::{Deserialize, Serialize};

/// One externally-supplied turn: occupancy, the piece to place (implicitly at
/// the identity pose), and the upcoming pieces in order. Successor states are
/// only ever produced by placement, which consumes the preview head-first.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GameState {
    #[serde(rename = "bitmap")]
    pub grid: Grid,
    #[serde(rename = "block")]
    pub piece: PieceShape,
    pub preview: Vec<PieceShape>,
}

impl GameState {
    pub fn new(grid: Grid, piece: PieceShape, preview: Vec<PieceShape>) -> Self {
        Self {
            grid,
            piece,
            preview,
        }
    }
}
