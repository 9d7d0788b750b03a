//! Reachability search over piece poses.
//!
//! Breadth-first over the pose graph induced by the five elementary commands,
//! recording one command-sequence witness per distinct pose. The visited set
//! is keyed by the pose value itself, so transiently out-of-range
//! translations cost a failed `fits` check instead of an index bug.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::collision::fits;
use crate::movement::try_step;
use blockfall_core::{Command, Grid, PieceShape, Pose};

/// A reachable pose together with the commands that first reached it.
/// The witness is immutable once recorded; later paths to the same pose are
/// discarded by the visited set.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Placement {
    pub pose: Pose,
    pub commands: Vec<Command>,
}

/// Every pose reachable from the identity pose, in discovery order.
///
/// The identity pose comes first with an empty witness. Returns nothing when
/// the piece does not even fit at the start, mirroring a spawn-blocked board.
/// Breadth-first discovery also makes each witness shortest by move count.
pub fn reachable_placements(grid: &Grid, shape: &PieceShape) -> Vec<Placement> {
    let mut placements = Vec::new();
    if !fits(grid, shape, Pose::START) {
        return placements;
    }

    let mut visited = FxHashSet::default();
    visited.insert(Pose::START);

    let mut queue = VecDeque::new();
    queue.push_back(Placement {
        pose: Pose::START,
        commands: Vec::new(),
    });

    while let Some(placement) = queue.pop_front() {
        for command in Command::ELEMENTARY {
            if let Some(next) = try_step(grid, shape, placement.pose, command) {
                if visited.insert(next) {
                    let mut commands = placement.commands.clone();
                    commands.push(command);
                    queue.push_back(Placement {
                        pose: next,
                        commands,
                    });
                }
            }
        }
        placements.push(placement);
    }

    placements
}
