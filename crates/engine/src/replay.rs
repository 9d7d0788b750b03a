//! Command replay and board succession.
//!
//! Replay failures are expected, checked outcomes - a caller handing us a
//! sequence is asserting it is legal, and we report exactly where that
//! assertion broke.

use thiserror::Error;

use crate::collision::fits;
use crate::movement::try_step;
use crate::placement::{landing_pose, lock};
use blockfall_core::{Command, GameState, Pose};

#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ReplayError {
    #[error("piece started in an invalid position")]
    IllegalStart,
    #[error("piece reached an invalid position after `{command}` (command {index})")]
    IllegalMove { index: usize, command: Command },
    #[error("preview queue is exhausted")]
    PreviewExhausted,
}

/// Drop the piece from `pose`, merge it into a fresh grid, clear completed
/// rows, and promote the preview head to the active piece.
///
/// Looking ahead past the preview is a caller bug, reported rather than
/// papered over - a silently defaulted piece would corrupt every successor
/// board.
pub fn place(state: &GameState, pose: Pose) -> Result<GameState, ReplayError> {
    let (next_piece, rest) = state
        .preview
        .split_first()
        .ok_or(ReplayError::PreviewExhausted)?;
    let landing = landing_pose(&state.grid, &state.piece, pose);
    let (grid, _cleared) = lock(&state.grid, &state.piece, landing);
    Ok(GameState::new(grid, next_piece.clone(), rest.to_vec()))
}

/// Replay a command sequence from the identity pose, then drop.
///
/// A `Drop` command places immediately and ignores any trailing commands;
/// a sequence without one is dropped from wherever it ends up.
pub fn run(state: &GameState, commands: &[Command]) -> Result<GameState, ReplayError> {
    let mut pose = Pose::START;
    if !fits(&state.grid, &state.piece, pose) {
        return Err(ReplayError::IllegalStart);
    }
    for (index, &command) in commands.iter().enumerate() {
        if command == Command::Drop {
            return place(state, pose);
        }
        pose = try_step(&state.grid, &state.piece, pose, command)
            .ok_or(ReplayError::IllegalMove { index, command })?;
    }
    place(state, pose)
}
