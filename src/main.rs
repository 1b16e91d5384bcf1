//! Terminal 2048 runner (default binary).
//!
//! This is the interactive entrypoint. It uses crossterm for input and the
//! framebuffer-based renderer from `tui_2048::term`. Every key press is one
//! command into the game state, followed by a redraw. With autoplay toggled
//! on, one `AutoMove` is issued per autoplay tick until the game ends.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::Env;
use log::info;

use tui_2048::config::RunConfig;
use tui_2048::core::GameState;
use tui_2048::input::{handle_key_event, is_autoplay_toggle, should_quit};
use tui_2048::term::{FrameBuffer, GameView, RunStatusView, TerminalRenderer, Viewport};
use tui_2048::types::GameAction;

fn main() -> Result<()> {
    // Off by default: stderr output would tear the alternate screen.
    env_logger::Builder::from_env(Env::default().default_filter_or("off")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = RunConfig::load(&args)?;
    info!("starting with seed {}", config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let mut game_state = GameState::new(config.seed).with_undo_depth(config.undo_depth);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut status = RunStatusView::default();

    let autoplay_step = Duration::from_millis(config.autoplay_ms);
    let mut last_auto = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&game_state.snapshot(), Some(&status), Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        let timeout = if status.autoplay {
            autoplay_step
                .checked_sub(last_auto.elapsed())
                .unwrap_or(Duration::ZERO)
        } else {
            Duration::from_secs(1)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_autoplay_toggle(key) {
                        status.autoplay = !status.autoplay;
                        last_auto = Instant::now();
                        dirty = true;
                    } else if let Some(action) = handle_key_event(key) {
                        game_state.apply_action(action);
                        dirty = true;
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                // Terminal auto-repeat and releases are ignored.
                _ => {}
            }
        }

        if status.autoplay && last_auto.elapsed() >= autoplay_step {
            last_auto = Instant::now();
            if !game_state.apply_action(GameAction::AutoMove) {
                // Won, lost, or stuck: stop driving the board.
                status.autoplay = false;
                info!(
                    "autoplay stopped: score {}, max tile {}",
                    game_state.score(),
                    game_state.max_tile()
                );
            }
            dirty = true;
        }
    }
}
