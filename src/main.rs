//! Terminal dodge runner (default binary).
//!
//! Reads one key at a time (blocking) and redraws only the player glyph.
//! There is no in-game exit; Ctrl+C ends the run and restores the terminal.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tui_dodge::core::{Game, GameConfig};
use tui_dodge::input::{handle_key_event, is_interrupt, is_press};
use tui_dodge::term::{terminal_bounds, TerminalRenderer};

fn main() -> Result<()> {
    let _guard = init_logging(&GameConfig::log_path_from_env())?;
    let config = GameConfig::from_env();
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "game loop failed");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let bounds = terminal_bounds();
    let mut game = Game::new(config, bounds);
    info!(
        width = bounds.width,
        height = bounds.height,
        seed = ?game.seed(),
        obstacles = game.obstacles().len(),
        "board ready"
    );

    game.setup(term)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if !is_press(&key) {
            continue;
        }
        if is_interrupt(key) {
            info!("interrupted");
            return Ok(());
        }

        let action = handle_key_event(key);
        if let (Some(action), Some(outcome)) = (action, game.handle(action, term)?) {
            let pos = game.player().position();
            debug!(
                action = action.as_str(),
                outcome = outcome.as_str(),
                x = pos.x,
                y = pos.y,
                "key handled"
            );
        }
    }
}

/// Log to a file; the terminal belongs to the game.
fn init_logging(path: &Path) -> Result<WorkerGuard> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&dir, file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(guard)
}
