//! Piece pose - a translation plus a four-state rotation.
//!
//! Poses are plain `Copy` values. Occupied cells are always recomputed from
//! `(shape, pose)`, so hypothetical placements never share mutable state.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Spin {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Spin {
    pub fn cw(self) -> Self {
        match self {
            Self::R0 => Self::R90,
            Self::R90 => Self::R180,
            Self::R180 => Self::R270,
            Self::R270 => Self::R0,
        }
    }

    pub fn ccw(self) -> Self {
        match self {
            Self::R0 => Self::R270,
            Self::R270 => Self::R180,
            Self::R180 => Self::R90,
            Self::R90 => Self::R0,
        }
    }
}

/// A placement state relative to the identity pose: `row`/`col` translate the
/// piece pivot, `spin` rotates the offsets around it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub struct Pose {
    pub row: i32,
    pub col: i32,
    pub spin: Spin,
}

impl Pose {
    /// The identity pose every deserialized piece starts in.
    pub const START: Pose = Pose {
        row: 0,
        col: 0,
        spin: Spin::R0,
    };

    pub fn new(row: i32, col: i32, spin: Spin) -> Self {
        Self { row, col, spin }
    }
}
