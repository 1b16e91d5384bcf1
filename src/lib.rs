//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the engine crates under `tui_2048::{core,input,term,types}` and
//! hosts the pieces shared by the binaries: runtime configuration and the JSON
//! records written by the headless runner.

pub mod config;
pub mod trace;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
