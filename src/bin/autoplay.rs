//! Headless auto-player.
//!
//! Plays `AutoMove` from a seeded start until the game is won, lost, stuck,
//! or `--max-moves` is reached, then prints a JSON summary. With `--jsonl`,
//! every committed move is printed as a JSON line first.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use env_logger::Env;
use log::{debug, info};

use tui_2048::config::RunConfig;
use tui_2048::core::GameState;
use tui_2048::trace::{RunSummary, StepRecord};
use tui_2048::types::GameAction;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = RunConfig::load(&args)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = play(&config, &mut out)?;

    serde_json::to_writer(&mut out, &summary).context("write summary")?;
    writeln!(out)?;
    out.flush()?;

    info!(
        "seed {}: {} moves, score {}, max tile {}{}",
        summary.seed,
        summary.moves,
        summary.score,
        summary.max_tile,
        if summary.won { " (won)" } else { "" }
    );
    Ok(())
}

fn play(config: &RunConfig, out: &mut impl Write) -> Result<RunSummary> {
    let mut game_state = GameState::new(config.seed).with_undo_depth(config.undo_depth);
    let mut moves: u64 = 0;

    while config.max_moves.map_or(true, |max| moves < max) {
        if !game_state.apply_action(GameAction::AutoMove) {
            debug!("no further auto move after {} moves", moves);
            break;
        }
        moves += 1;

        if config.jsonl {
            let rec = StepRecord::from_snapshot(moves, GameAction::AutoMove, &game_state.snapshot());
            serde_json::to_writer(&mut *out, &rec).context("write step record")?;
            writeln!(out)?;
        }
    }

    Ok(RunSummary::from_snapshot(moves, &game_state.snapshot()))
}
