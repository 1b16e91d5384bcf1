//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, headless autoplay).
//!
//! # Grid Dimensions
//!
//! The board is a fixed 4x4 grid addressed row-major as `(row, col)`:
//!
//! - **Rows**: indexed 0-3 (top to bottom)
//! - **Columns**: indexed 0-3 (left to right)
//!
//! # Spawn Policy
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_FOUR_PERCENT` | 10 | Chance (in percent) that a spawned tile is a 4 |
//! | `INITIAL_TILES` | 2 | Tiles placed on a fresh board |
//! | `WINNING_TILE` | 2048 | Tile value that wins the game |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, Tile, GRID_SIZE};
//!
//! // Parse game action
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//! assert_eq!(action.direction(), Some(Direction::Left));
//!
//! // Tiles
//! let tile = Tile::new(2);
//! assert_eq!(tile.doubled().value(), 4);
//! assert!(Tile::EMPTY.is_empty());
//!
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Grid side length in cells
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Tile value that wins the game
pub const WINNING_TILE: u32 = 2048;

/// Number of tiles spawned by a reset
pub const INITIAL_TILES: usize = 2;

/// Percent chance that a spawned tile is a 4 instead of a 2
pub const SPAWN_FOUR_PERCENT: u32 = 10;

/// Default number of undo steps retained by the history stack
pub const DEFAULT_UNDO_DEPTH: usize = 256;

/// A single grid cell.
///
/// A value of 0 is an empty cell; any other value is a positive power of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Tile(u32);

impl Tile {
    /// The empty tile
    pub const EMPTY: Tile = Tile(0);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The tile produced by merging two tiles of this value
    pub const fn doubled(self) -> Self {
        Self(self.0 << 1)
    }
}

impl From<u32> for Tile {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// The four sliding directions.
///
/// Declaration order is the auto-player's evaluation order and therefore its tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// All directions in evaluation order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Clockwise quarter turns that bring this direction onto `Left`
    ///
    /// The inverse turn count (`4 - n`) restores the original orientation.
    pub fn quarter_turns(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Down => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "left" | "l", "up" | "u", "right" | "r", "down" | "d"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "up" | "u" => Some(Direction::Up),
            "right" | "r" => Some(Direction::Right),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These actions are issued by both the keyboard dispatcher and the headless runner.
/// Each action is a single atomic call into the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles left
    MoveLeft,
    /// Slide all tiles right
    MoveRight,
    /// Slide all tiles up
    MoveUp,
    /// Slide all tiles down
    MoveDown,
    /// Let the one-ply heuristic pick and commit a move
    AutoMove,
    /// Commit a uniformly random direction
    RandomMove,
    /// Roll back the last committed move
    Undo,
    /// Start a new game
    Reset,
}

impl GameAction {
    /// Parse action from string (command names, case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveUp"), Some(GameAction::MoveUp));
    /// assert_eq!(GameAction::from_str("autoMove"), Some(GameAction::AutoMove));
    /// assert_eq!(GameAction::from_str("undo"), Some(GameAction::Undo));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "automove" => Some(GameAction::AutoMove),
            "randommove" => Some(GameAction::RandomMove),
            "undo" => Some(GameAction::Undo),
            "reset" => Some(GameAction::Reset),
            _ => None,
        }
    }

    /// Convert to camelCase command name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::AutoMove => "autoMove",
            GameAction::RandomMove => "randomMove",
            GameAction::Undo => "undo",
            GameAction::Reset => "reset",
        }
    }

    /// The sliding direction for directional actions
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            _ => None,
        }
    }
}

impl From<Direction> for GameAction {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Left => GameAction::MoveLeft,
            Direction::Right => GameAction::MoveRight,
            Direction::Up => GameAction::MoveUp,
            Direction::Down => GameAction::MoveDown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turns_are_distinct_per_direction() {
        let mut turns: Vec<usize> = Direction::ALL.iter().map(|d| d.quarter_turns()).collect();
        turns.sort_unstable();
        assert_eq!(turns, vec![0, 1, 2, 3]);
    }

    #[test]
    fn action_names_round_trip() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::MoveUp,
            GameAction::MoveDown,
            GameAction::AutoMove,
            GameAction::RandomMove,
            GameAction::Undo,
            GameAction::Reset,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn directional_actions_map_to_directions() {
        for dir in Direction::ALL {
            assert_eq!(GameAction::from(dir).direction(), Some(dir));
        }
        assert_eq!(GameAction::AutoMove.direction(), None);
        assert_eq!(GameAction::Undo.direction(), None);
    }

    #[test]
    fn direction_parses_short_and_long_names() {
        assert_eq!(Direction::from_str("L"), Some(Direction::Left));
        assert_eq!(Direction::from_str("down"), Some(Direction::Down));
        assert_eq!(Direction::from_str("sideways"), None);
    }

    #[test]
    fn tile_doubling() {
        assert_eq!(Tile::new(1024).doubled(), Tile::new(WINNING_TILE));
        assert!(Tile::default().is_empty());
    }
}
