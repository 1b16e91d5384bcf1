//! JSON records emitted by the headless runner.
//!
//! One [`StepRecord`] per committed move (JSON lines), and a [`RunSummary`]
//! at the end of a run.

use serde::{Deserialize, Serialize};

use crate::core::GameSnapshot;
use crate::types::{GameAction, GRID_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub step: u64,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    pub score: u32,
    pub max_tile: u32,
    pub empty: u32,
    pub won: bool,
    pub lost: bool,
    pub grid: [[u32; GRID_SIZE]; GRID_SIZE],
}

impl StepRecord {
    pub fn from_snapshot(step: u64, action: GameAction, snap: &GameSnapshot) -> Self {
        Self {
            step,
            action: action.as_str().to_string(),
            direction: snap.last_direction.map(|d| d.as_str().to_string()),
            score: snap.score,
            max_tile: snap.max_tile,
            empty: (GRID_SIZE * GRID_SIZE - snap.tile_count()) as u32,
            won: snap.won,
            lost: snap.lost,
            grid: snap.grid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u32,
    pub moves: u64,
    pub score: u32,
    pub max_tile: u32,
    pub won: bool,
    pub lost: bool,
}

impl RunSummary {
    pub fn from_snapshot(moves: u64, snap: &GameSnapshot) -> Self {
        Self {
            seed: snap.seed,
            moves,
            score: snap.score,
            max_tile: snap.max_tile,
            won: snap.won,
            lost: snap.lost,
        }
    }
}
