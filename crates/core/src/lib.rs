//! Blockfall core crate - fundamental types for falling-block board analysis.

mod command;
mod grid;
mod piece;
mod pose;
mod state;

pub use command::{Command, ParseCommandError};
pub use grid::{Grid, GridShapeError};
pub use piece::{Cell, PieceShape};
pub use pose::{Pose, Spin};
pub use state::GameState;
