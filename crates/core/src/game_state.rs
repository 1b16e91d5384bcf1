//! Game state module - manages the complete game state
//!
//! This module ties together the grid transform engine, the undo history, the
//! seeded RNG and the auto-player. It owns the grid exclusively; collaborators
//! read it back through [`GameState::snapshot`] or the query methods.
//!
//! Status is derived, never stored: a game is won once a merge has produced a
//! tile of at least [`WINNING_TILE`], and lost once no direction can change the
//! grid. Reset is the only way out of either state.

use log::debug;

use crate::evaluator::choose_best;
use crate::grid::Grid;
use crate::history::History;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    history: History,
    rng: SimpleRng,
    /// Seed the game was created with.
    seed: u32,
    score: u32,
    /// Largest tile ever produced by a merge in this episode.
    max_tile: u32,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Committed moves in this episode.
    moves: u32,
    last_direction: Option<Direction>,
}

impl GameState {
    /// Create a new game with the given RNG seed and two spawned tiles
    pub fn new(seed: u32) -> Self {
        let mut state = Self::with_grid(Grid::new(), seed);
        for _ in 0..INITIAL_TILES {
            state.spawn();
        }
        state
    }

    /// Create a game around an explicit grid (nothing is spawned)
    pub fn with_grid(grid: Grid, seed: u32) -> Self {
        Self {
            grid,
            history: History::default(),
            rng: SimpleRng::new(seed),
            seed,
            score: 0,
            max_tile: 0,
            episode_id: 0,
            moves: 0,
            last_direction: None,
        }
    }

    /// Replace the undo history with an empty one holding at most `depth` entries
    pub fn with_undo_depth(mut self, depth: usize) -> Self {
        self.history = History::new(depth);
        self
    }

    /// Private copy used to trial a move: same grid, score and RNG, empty history.
    pub(crate) fn trial(&self) -> Self {
        Self {
            grid: self.grid,
            history: History::new(1),
            rng: self.rng.clone(),
            seed: self.seed,
            score: self.score,
            max_tile: self.max_tile,
            episode_id: self.episode_id,
            moves: self.moves,
            last_direction: self.last_direction,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn max_tile(&self) -> u32 {
        self.max_tile
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    pub fn undo_depth(&self) -> usize {
        self.history.depth()
    }

    /// Start a new episode: empty grid, zero score, cleared history, two tiles.
    ///
    /// The RNG keeps running, so consecutive episodes differ.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.history.clear();
        self.score = 0;
        self.max_tile = 0;
        self.moves = 0;
        self.last_direction = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        for _ in 0..INITIAL_TILES {
            self.spawn();
        }
        debug!("reset: episode {}", self.episode_id);
    }

    /// Slide the grid in `direction`.
    ///
    /// When the grid changes, the pre-move grid and score are pushed onto the
    /// history first, then score and max tile are updated and one tile spawns.
    /// A move that changes nothing leaves the state and the history untouched.
    pub fn make_move(&mut self, direction: Direction) -> bool {
        let (next, outcome) = self.grid.shifted(direction);
        if !outcome.changed {
            return false;
        }

        self.history.snapshot(&self.grid, self.score);
        self.grid = next;
        self.score += outcome.points;
        self.max_tile = self.max_tile.max(outcome.max_merged);
        self.moves = self.moves.wrapping_add(1);
        self.last_direction = Some(direction);
        self.spawn();

        debug!(
            "move {}: +{} -> score {}, max tile {}",
            direction.as_str(),
            outcome.points,
            self.score,
            self.max_tile
        );
        true
    }

    /// Restore grid and score from the most recent snapshot.
    ///
    /// Returns false (state unchanged) when there is nothing to undo.
    pub fn rollback(&mut self) -> bool {
        let Some(entry) = self.history.rollback() else {
            return false;
        };
        self.grid = entry.grid;
        self.score = entry.score;
        self.last_direction = None;
        debug!("rollback: score {}, {} left", self.score, self.history.depth());
        true
    }

    /// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
    ///
    /// Returns false on a full grid.
    pub fn spawn(&mut self) -> bool {
        let empty = self.grid.empty_cells();
        let Some(index) = self.rng.pick_cell(&empty) else {
            return false;
        };
        let value = self.rng.spawn_value();
        self.grid.set_index(index, Tile::new(value))
    }

    /// True iff some direction would change the grid
    pub fn can_move(&self) -> bool {
        self.grid.has_move()
    }

    pub fn is_won(&self) -> bool {
        self.max_tile >= WINNING_TILE
    }

    pub fn is_lost(&self) -> bool {
        !self.can_move()
    }

    /// Still accepting moves (neither won nor lost)
    pub fn playable(&self) -> bool {
        !self.is_won() && !self.is_lost()
    }

    /// Commit the move ranked best by the one-ply heuristic.
    ///
    /// Returns false when no direction changes the grid.
    pub fn auto_move(&mut self) -> bool {
        match choose_best(self) {
            Some(direction) => {
                debug!("auto move: {}", direction.as_str());
                self.make_move(direction)
            }
            None => false,
        }
    }

    /// Slide in a uniformly random direction (which may change nothing)
    pub fn random_move(&mut self) -> bool {
        let i = self.rng.next_range(Direction::ALL.len() as u32) as usize;
        self.make_move(Direction::ALL[i])
    }

    /// Apply a game action
    ///
    /// `Reset`, `Undo` and `RandomMove` are always honored. Directional moves
    /// and `AutoMove` are ignored once the game is won or lost.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Reset => {
                self.reset();
                true
            }
            GameAction::Undo => self.rollback(),
            GameAction::RandomMove => self.random_move(),
            _ if !self.playable() => false,
            GameAction::AutoMove => self.auto_move(),
            GameAction::MoveLeft => self.make_move(Direction::Left),
            GameAction::MoveRight => self.make_move(Direction::Right),
            GameAction::MoveUp => self.make_move(Direction::Up),
            GameAction::MoveDown => self.make_move(Direction::Down),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_values(&mut out.grid);
        out.score = self.score;
        out.max_tile = self.max_tile;
        out.won = self.is_won();
        out.lost = self.is_lost();
        out.undo_depth = self.history.depth() as u32;
        out.episode_id = self.episode_id;
        out.moves = self.moves;
        out.seed = self.seed;
        out.last_direction = self.last_direction;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
