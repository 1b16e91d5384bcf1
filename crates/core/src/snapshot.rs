use crate::types::{Direction, GRID_SIZE};

/// Read-only copy of everything a renderer or recorder needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: [[u32; GRID_SIZE]; GRID_SIZE],
    pub score: u32,
    pub max_tile: u32,
    pub won: bool,
    pub lost: bool,
    pub undo_depth: u32,
    pub episode_id: u32,
    pub moves: u32,
    pub seed: u32,
    pub last_direction: Option<Direction>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        !self.won && !self.lost
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        self.grid.iter().flatten().filter(|&&v| v != 0).count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u32; GRID_SIZE]; GRID_SIZE],
            score: 0,
            max_tile: 0,
            won: false,
            lost: false,
            undo_depth: 0,
            episode_id: 0,
            moves: 0,
            seed: 0,
            last_direction: None,
        }
    }
}
