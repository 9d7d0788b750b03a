//! blockfall-search - move selection over the reachable placements.

mod selector;

pub use selector::{Plan, ScoreDirection, Selector};
