//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Every 2048
//! command is a discrete press, so there is no repeat handling here; terminal
//! auto-repeat is ignored by the runner.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, is_autoplay_toggle, should_quit};
