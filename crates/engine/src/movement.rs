//! Pose transforms for the elementary commands.
//!
//! Poses are values; a rejected step simply isn't returned, so there is no
//! rollback to get wrong.

use crate::collision::fits;
use blockfall_core::{Command, Grid, PieceShape, Pose};

/// The pose one elementary command away. `Drop` ends a piece rather than
/// moving it, so it has no pose transform and yields `None`.
pub fn step(pose: Pose, command: Command) -> Option<Pose> {
    let next = match command {
        Command::Left => Pose {
            col: pose.col - 1,
            ..pose
        },
        Command::Right => Pose {
            col: pose.col + 1,
            ..pose
        },
        Command::Up => Pose {
            row: pose.row - 1,
            ..pose
        },
        Command::Down => Pose {
            row: pose.row + 1,
            ..pose
        },
        Command::Rotate => Pose {
            spin: pose.spin.cw(),
            ..pose
        },
        Command::Drop => return None,
    };
    Some(next)
}

/// Step, then keep the result only if the piece still fits.
pub fn try_step(grid: &Grid, shape: &PieceShape, pose: Pose, command: Command) -> Option<Pose> {
    let next = step(pose, command)?;
    fits(grid, shape, next).then_some(next)
}
