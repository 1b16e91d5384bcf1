//! Runtime configuration for the binaries.
//!
//! Values come from environment variables first, then command-line flags
//! override them:
//!
//! - `TUI2048_SEED` / `--seed <u32>`: RNG seed (default: derived from the clock)
//! - `TUI2048_UNDO_DEPTH` / `--undo-depth <n>`: undo steps kept (default 256, min 1)
//! - `TUI2048_AUTOPLAY_MS` / `--autoplay-ms <ms>`: interactive autoplay step (default 120)
//! - `--max-moves <n>`: stop the headless runner after `n` moves
//! - `--jsonl`: headless runner prints one JSON record per move
//!
//! Unparsable environment values fall back to the default; unparsable or
//! unknown flags are errors.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::types::DEFAULT_UNDO_DEPTH;

pub const DEFAULT_AUTOPLAY_MS: u64 = 120;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u32,
    pub undo_depth: usize,
    pub autoplay_ms: u64,
    pub max_moves: Option<u64>,
    pub jsonl: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            undo_depth: DEFAULT_UNDO_DEPTH,
            autoplay_ms: DEFAULT_AUTOPLAY_MS,
            max_moves: None,
            jsonl: false,
        }
    }
}

impl RunConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = env_parse::<u32>("TUI2048_SEED") {
            config.seed = seed;
        }
        if let Some(depth) = env_parse::<usize>("TUI2048_UNDO_DEPTH") {
            config.undo_depth = depth.max(1);
        }
        if let Some(ms) = env_parse::<u64>("TUI2048_AUTOPLAY_MS") {
            config.autoplay_ms = ms;
        }

        config
    }

    /// Environment first, then `args` (without the program name) on top.
    pub fn load(args: &[String]) -> Result<Self> {
        Self::from_env().with_args(args)
    }

    /// Apply command-line flags on top of this config.
    pub fn with_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    self.seed = parse_flag(args, &mut i, "--seed")?;
                }
                "--undo-depth" => {
                    let depth: usize = parse_flag(args, &mut i, "--undo-depth")?;
                    self.undo_depth = depth.max(1);
                }
                "--autoplay-ms" => {
                    self.autoplay_ms = parse_flag(args, &mut i, "--autoplay-ms")?;
                }
                "--max-moves" => {
                    self.max_moves = Some(parse_flag(args, &mut i, "--max-moves")?);
                }
                "--jsonl" => self.jsonl = true,
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(self)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

fn parse_flag<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> Result<T> {
    *i += 1;
    let v = args
        .get(*i)
        .ok_or_else(|| anyhow!("missing value for {}", flag))?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
