//! Scores every reachable placement and picks the extremum.

use std::cmp::Ordering;

use blockfall_core::{Command, GameState, Pose};
use blockfall_engine::{landing_pose, lock, place, reachable_placements};
use blockfall_eval::{evaluate, EvalWeights};

/// Which end of the score range wins.
///
/// The default weights frame every feature as a penalty, so the reference
/// behavior is `LowerIsBetter`. Flip this instead of negating weights when a
/// tuned weight set means the opposite.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ScoreDirection {
    #[default]
    LowerIsBetter,
    HigherIsBetter,
}

impl ScoreDirection {
    fn improves(self, candidate: f32, incumbent: f32) -> bool {
        match self {
            Self::LowerIsBetter => candidate < incumbent,
            Self::HigherIsBetter => candidate > incumbent,
        }
    }

    fn cmp(self, a: f32, b: f32) -> Ordering {
        let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self {
            Self::LowerIsBetter => ord,
            Self::HigherIsBetter => ord.reverse(),
        }
    }
}

/// A chosen placement: the witness command sequence, the pose it reaches, and
/// the score of the board it leads to. The consumer finishes the sequence
/// with a final `drop` whether or not one is present.
#[derive(Clone, PartialEq, Debug)]
pub struct Plan {
    pub commands: Vec<Command>,
    pub pose: Pose,
    pub score: f32,
}

pub struct Selector {
    pub weights: EvalWeights,
    pub direction: ScoreDirection,
    /// How many leading candidates the preview-aware search expands.
    pub preview_width: usize,
}

impl Default for Selector {
    fn default() -> Self {
        Self {
            weights: EvalWeights::default(),
            direction: ScoreDirection::default(),
            preview_width: 64,
        }
    }
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best placement for the current piece by immediate board score.
    ///
    /// Ties keep the incumbent, and placements arrive in search discovery
    /// order, so the first-discovered of equally-scored placements wins.
    /// `None` only when the piece cannot even start.
    pub fn choose(&self, state: &GameState) -> Option<Plan> {
        let mut best: Option<Plan> = None;
        for plan in self.scored_placements(state) {
            let better = match &best {
                None => true,
                Some(incumbent) => self.direction.improves(plan.score, incumbent.score),
            };
            if better {
                best = Some(plan);
            }
        }
        best
    }

    /// Every placement scored and sorted best-first. The sort is stable, so
    /// equal scores stay in discovery order.
    pub fn rank(&self, state: &GameState) -> Vec<Plan> {
        let mut plans = self.scored_placements(state);
        plans.sort_by(|a, b| self.direction.cmp(a.score, b.score));
        plans
    }

    /// One-ply lookahead: re-score the leading candidates by the best board
    /// the next preview piece can reach from each of them.
    ///
    /// Falls back to [`Selector::choose`] when the preview is empty. A
    /// candidate whose successor blocks the next piece entirely keeps its
    /// immediate score.
    pub fn choose_with_preview(&self, state: &GameState) -> Option<Plan> {
        if state.preview.is_empty() {
            return self.choose(state);
        }

        let mut candidates = self.rank(state);
        candidates.truncate(self.preview_width.max(1));

        let mut best: Option<Plan> = None;
        for mut plan in candidates {
            // The pose came from the search and the preview is nonempty, so
            // place can only fail if the caller mutated the state under us.
            if let Ok(successor) = place(state, plan.pose) {
                if let Some(follow) = self.best_immediate_score(&successor) {
                    plan.score = follow;
                }
            }
            let better = match &best {
                None => true,
                Some(incumbent) => self.direction.improves(plan.score, incumbent.score),
            };
            if better {
                best = Some(plan);
            }
        }
        best
    }

    fn scored_placements(&self, state: &GameState) -> Vec<Plan> {
        reachable_placements(&state.grid, &state.piece)
            .into_iter()
            .map(|placement| {
                let landing = landing_pose(&state.grid, &state.piece, placement.pose);
                let (grid, _cleared) = lock(&state.grid, &state.piece, landing);
                Plan {
                    commands: placement.commands,
                    pose: placement.pose,
                    score: evaluate(&grid, &self.weights),
                }
            })
            .collect()
    }

    fn best_immediate_score(&self, state: &GameState) -> Option<f32> {
        self.scored_placements(state)
            .into_iter()
            .map(|plan| plan.score)
            .reduce(|a, b| if self.direction.improves(b, a) { b } else { a })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_core::{Cell, Grid, PieceShape};
    use blockfall_engine::run;

    fn dot() -> PieceShape {
        PieceShape::new(Cell::new(0, 0), vec![Cell::new(0, 0)])
    }

    fn state(grid: Grid) -> GameState {
        GameState::new(grid, dot(), vec![dot()])
    }

    #[test]
    fn test_choose_returns_replayable_plan() {
        let state = state(Grid::new(4, 3));
        let plan = Selector::new().choose(&state).unwrap();
        assert!(run(&state, &plan.commands).is_ok());
    }

    #[test]
    fn test_blocked_start_yields_none() {
        let mut grid = Grid::new(3, 3);
        grid.set(0, 0, 1);
        assert!(Selector::new().choose(&state(grid)).is_none());
    }

    #[test]
    fn test_equal_scores_keep_first_discovered() {
        // On a symmetric board every landing scores the same, so the winner
        // must be the start pose - the first placement out of the search.
        let state = state(Grid::new(2, 2));
        let plan = Selector::new().choose(&state).unwrap();
        assert_eq!(plan.pose, Pose::START);
        assert!(plan.commands.is_empty());
    }

    #[test]
    fn test_minimizing_prefers_the_line_clear() {
        let mut grid = Grid::new(3, 2);
        grid.set(2, 0, 1);
        let state = state(grid);
        let plan = Selector::new().choose(&state).unwrap();
        // Completing the bottom row empties the board, the cheapest outcome.
        let next = run(&state, &plan.commands).unwrap();
        assert_eq!(next.grid.filled_cells(), 0);
    }

    #[test]
    fn test_direction_flip_changes_the_winner() {
        let mut grid = Grid::new(3, 2);
        grid.set(2, 0, 1);
        let state = state(grid);
        let maximizer = Selector {
            direction: ScoreDirection::HigherIsBetter,
            ..Selector::new()
        };
        let plan = maximizer.choose(&state).unwrap();
        let next = run(&state, &plan.commands).unwrap();
        assert!(next.grid.filled_cells() > 0);
    }

    #[test]
    fn test_rank_is_sorted_for_the_direction() {
        let mut grid = Grid::new(3, 2);
        grid.set(2, 0, 1);
        let selector = Selector::new();
        let plans = selector.rank(&state(grid));
        assert!(!plans.is_empty());
        for pair in plans.windows(2) {
            assert!(selector.direction.cmp(pair[0].score, pair[1].score) != Ordering::Greater);
        }
    }

    #[test]
    fn test_preview_fallback_without_preview() {
        let state = GameState::new(Grid::new(3, 3), dot(), Vec::new());
        let selector = Selector::new();
        let direct = selector.choose(&state).unwrap();
        let with_preview = selector.choose_with_preview(&state).unwrap();
        assert_eq!(direct.pose, with_preview.pose);
    }

    #[test]
    fn test_preview_plan_is_replayable() {
        let mut grid = Grid::new(4, 3);
        grid.set(3, 1, 1);
        let state = state(grid);
        let plan = Selector::new().choose_with_preview(&state).unwrap();
        assert!(run(&state, &plan.commands).is_ok());
    }
}
