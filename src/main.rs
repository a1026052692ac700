//! Terminal 2048 runner (default binary).
//!
//! Blocks on one key at a time, runs the turn, and redraws the board in place.
//! It uses crossterm for input and a custom framebuffer-based renderer.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{error, info};

use term_2048::cli::{init_logging, Cli};
use term_2048::core::{Game, TurnOutcome};
use term_2048::input::map_key;
use term_2048::term::{BoardView, FrameBuffer, TerminalRenderer};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(cli.log_file.as_deref())?;

    // Grid allocation failures abort here, before the terminal is touched.
    let seed = cli.seed_or_clock();
    let mut game = Game::new(cli.size, seed)?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &mut game));

    // Always try to restore terminal state, even if entering failed halfway.
    let _ = term.exit();
    if let Err(err) = &result {
        error!(error = %err, "game loop failed");
    }
    info!(score = game.score(), moves = game.moves(), "session ended");
    result
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = BoardView::new(game.grid().size());
    let mut fb = FrameBuffer::new(view.width(), view.height());

    view.render_into(game.grid(), &mut fb);
    term.draw(&fb)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(action) = map_key(key) else {
            continue;
        };

        match game.handle(action) {
            TurnOutcome::Redraw => {
                view.render_into(game.grid(), &mut fb);
                term.draw(&fb)?;
            }
            TurnOutcome::GameOver => {
                term.game_over()?;
                return Ok(());
            }
            TurnOutcome::Quit => return Ok(()),
            TurnOutcome::Ignored => {}
        }
    }
}
