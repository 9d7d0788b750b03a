//! blockfall-engine - collision, movement, placement and move generation.
//!
//! Legality is decided in one place ([`collision::fits`]); movement, replay
//! and the reachability search all route through it.

pub mod collision;
pub mod movegen;
pub mod movement;
pub mod placement;
pub mod replay;

pub use collision::fits;
pub use movegen::{reachable_placements, Placement};
pub use movement::{step, try_step};
pub use placement::{landing_pose, lock};
pub use replay::{place, run, ReplayError};
