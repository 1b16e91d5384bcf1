//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and the auto-player.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed and commands produce identical games
//! - **Testable**: Every rule is a plain function or method on plain data
//! - **Portable**: Can run in any environment (terminal, headless, benchmarks)
//! - **Panic-free**: Empty undo, full-grid spawns and no-op moves are silent no-ops
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 grid with the compress/merge/rotate transform engine
//! - [`history`]: bounded undo stack of grid+score snapshots
//! - [`game_state`]: grid, score, max tile, spawning, status and command dispatch
//! - [`evaluator`]: one-ply greedy move ranking for auto-play
//! - [`rng`]: seeded LCG for spawns and random moves
//! - [`snapshot`]: read-only state copy for renderers and recorders
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::GameAction;
//!
//! // Create a game (two tiles already spawned)
//! let mut game = GameState::new(12345);
//!
//! // Apply game actions
//! game.apply_action(GameAction::AutoMove);
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Undo);
//!
//! // Query state
//! assert!(!game.is_lost());
//! assert!(game.grid().empty_count() < 16);
//! ```

pub mod evaluator;
pub mod game_state;
pub mod grid;
pub mod history;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use evaluator::{choose_best, evaluate, evaluate_all, MoveEfficiency, NO_EFFECT};
pub use game_state::GameState;
pub use grid::{compress_line, merge_line, Grid, LineMerge, MoveOutcome};
pub use history::{History, HistoryEntry};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
