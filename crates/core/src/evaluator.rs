//! Move evaluator - the one-ply greedy auto-player
//!
//! Each direction is tried on a private trial copy of the game (same grid,
//! score and RNG, empty history). A trial that changes the grid is ranked by
//! the empty cells it leaves and then by the resulting score; the live state is
//! never mutated while ranking. There is no lookahead past the trial move and
//! no modelling of where the next tile spawns.

use std::cmp::Ordering;

use log::trace;

use crate::game_state::GameState;
use crate::types::Direction;

/// Empty-cell count recorded for a direction that changes nothing
pub const NO_EFFECT: i32 = -1;

/// Heuristic value of one candidate move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEfficiency {
    /// Empty cells after the move (and its spawn), or [`NO_EFFECT`]
    pub empty_tiles: i32,
    /// Score after the move (0 when the move had no effect)
    pub score: u32,
    pub direction: Direction,
}

impl MoveEfficiency {
    pub fn no_effect(direction: Direction) -> Self {
        Self {
            empty_tiles: NO_EFFECT,
            score: 0,
            direction,
        }
    }

    pub fn is_effective(&self) -> bool {
        self.empty_tiles != NO_EFFECT
    }

    /// Compare by empty cells, then score. Direction does not take part.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.empty_tiles
            .cmp(&other.empty_tiles)
            .then(self.score.cmp(&other.score))
    }
}

/// Trial `direction` against a private copy of `state`.
pub fn evaluate(state: &GameState, direction: Direction) -> MoveEfficiency {
    let mut trial = state.trial();
    trial.make_move(direction);

    let efficiency = if trial.history().peek_changed(trial.grid()) {
        let eff = MoveEfficiency {
            empty_tiles: trial.grid().empty_count() as i32,
            score: trial.score(),
            direction,
        };
        trial.rollback();
        eff
    } else {
        MoveEfficiency::no_effect(direction)
    };

    trace!(
        "evaluate {}: empty {}, score {}",
        direction.as_str(),
        efficiency.empty_tiles,
        efficiency.score
    );
    efficiency
}

/// Evaluate all four directions in evaluation order (Left, Up, Right, Down)
pub fn evaluate_all(state: &GameState) -> [MoveEfficiency; 4] {
    Direction::ALL.map(|direction| evaluate(state, direction))
}

/// Pick the best-ranked effective direction.
///
/// Ties keep the earliest direction in evaluation order. Returns None when no
/// direction changes the grid.
pub fn choose_best(state: &GameState) -> Option<Direction> {
    let candidates = evaluate_all(state);
    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.rank_cmp(&best) == Ordering::Greater {
            best = *candidate;
        }
    }
    best.is_effective().then_some(best.direction)
}
