//! Tic-tac-toe - command-line driver for the rule engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use tictactoe_engine::{BoardView, EngineConfig, GameEngine, GameId, GameResult, Move, Position};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let game = new_game(&config, cli.game_id);

    match cli.command {
        Command::Demo => run_demo(game),
        Command::Play { moves, json } => run_play(game, &moves, json),
        Command::Map => {
            println!("{}", BoardView::coordinate_map());
            Ok(())
        }
    }
}

/// Loads the config file if given, otherwise defaults.
#[instrument]
fn load_config(path: Option<&std::path::Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => {
            debug!("No config file given, using defaults");
            Ok(EngineConfig::default())
        }
    }
}

/// Builds the game, generating a fresh id unless one was supplied.
#[instrument(skip(config))]
fn new_game(config: &EngineConfig, game_id: Option<String>) -> GameEngine {
    match game_id {
        Some(id) => GameEngine::with_first_mover(GameId::new(id), *config.first_mover()),
        None => GameEngine::from_config(config),
    }
}

/// Plays the demonstration opening and prints what the engine reports.
#[instrument(skip(game), fields(game_id = %game.id()))]
fn run_demo(mut game: GameEngine) -> Result<()> {
    println!("{}", game.id());

    let first = game.current_turn();
    let second = first.opponent();
    for (row, column, mark) in [(0, 0, first), (0, 1, second), (1, 1, first), (0, 2, second)] {
        game.attempt_move(row, column, mark)
            .with_context(|| format!("demo move ({row}, {column}, {mark})"))?;
    }

    println!("{}", BoardView::new(&game));
    let history: Vec<String> = game.history().iter().map(Move::to_string).collect();
    println!("History: {}", history.join(", "));
    let empty: Vec<String> = game
        .empty_cells()
        .into_iter()
        .map(|(row, column)| format!("({row}, {column})"))
        .collect();
    println!("Empty: {}", empty.join(", "));
    println!("Next: {}", game.current_turn());

    info!(result = %game.game_state(), "Demo finished");
    Ok(())
}

/// JSON summary printed by `play --json`.
#[derive(Serialize)]
struct PlayReport<'a> {
    game_id: &'a str,
    history: &'a [Move],
    result: GameResult,
}

/// Applies each move with the mark whose turn it is.
#[instrument(skip(game, moves), fields(game_id = %game.id(), moves = moves.len()))]
fn run_play(mut game: GameEngine, moves: &[String], json: bool) -> Result<()> {
    for raw in moves {
        let position =
            Position::parse(raw).with_context(|| format!("unrecognized move {raw:?}"))?;
        let mark = game.current_turn();
        let action = Move::at(position, mark);
        let result = game
            .attempt_move(action.row, action.column, action.mark)
            .with_context(|| format!("move {raw:?} by {mark}"))?;
        debug!(%position, %mark, %result, "Played");
    }

    if json {
        let report = PlayReport {
            game_id: game.id().as_str(),
            history: game.history(),
            result: game.game_state(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", BoardView::new(&game));
        println!("{}", game.game_state());
    }
    Ok(())
}
