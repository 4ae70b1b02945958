// Terminal Sokoban with ratatui
// Controls: W/A/S/D or arrow keys (immediate response), U undo, R restart, Q to quit.

use clap::Parser;
use log::{info, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sokoban_engine::config::Config;
use sokoban_engine::console_interface::ConsoleInput::*;
use sokoban_engine::console_interface::{
    cleanup_terminal, handle_input, render_game, render_grid_to_string, setup_terminal,
};
use sokoban_engine::core::{MoveOutcome, Session};
use sokoban_engine::models::GameRenderState;
use std::io;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    init_logging(&config.log_file)?;

    let store = config.load_store()?;
    let mut session = Session::new(store, config.level)?;

    if let Some(moves) = &config.replay {
        return run_replay(&mut session, moves);
    }

    let mut terminal = setup_terminal()?;
    let result = run_interactive(&mut session, &mut terminal);
    cleanup_terminal()?;
    result
}

fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = std::fs::File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run_replay(session: &mut Session, moves: &str) -> Result<(), Box<dyn std::error::Error>> {
    let state = session.state_mut();
    let applied = state.replay(moves)?;
    print!("{}", render_grid_to_string(state.grid()));
    println!(
        "Level {}: {} moves applied, {} steps, {} pushes, solved: {}",
        state.level(),
        applied,
        state.step_count(),
        state.history().push_count(),
        state.is_solved()
    );
    Ok(())
}

fn run_interactive(
    session: &mut Session,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut error: Option<String> = None;
    let mut last_outcome: Option<MoveOutcome> = None;

    loop {
        let solved = session.state().is_solved();
        render_game(
            terminal,
            &GameRenderState {
                game: session.state(),
                solved,
                has_next: session.next_level().is_some(),
                error: error.clone(),
                last_outcome,
            },
        )?;

        let input = handle_input()?;
        let result = match input {
            Quit => break,
            Timeout | Unknown => continue,
            // Only the level-transition prompt is live once the level is solved
            Confirm if solved => session.advance().map(|level| {
                info!("moving on to level {}", level);
                last_outcome = None;
            }),
            Decline | Restart if solved => session.restart().map(|_| last_outcome = None),
            _ if solved => continue,
            Move(direction) => session
                .state_mut()
                .step(direction)
                .map(|outcome| last_outcome = Some(outcome)),
            Undo => session.state_mut().undo().map(|_| last_outcome = None),
            Restart => session.restart().map(|_| last_outcome = None),
            Confirm | Decline => continue,
        };

        error = match result {
            Ok(()) => None,
            Err(err) => {
                warn!("{}", err);
                Some(err.to_string())
            }
        };
    }

    Ok(())
}
