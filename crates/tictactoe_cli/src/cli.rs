//! Command-line interface for the tic-tac-toe driver.

use clap::{Parser, Subcommand};

/// Tic-tac-toe - drive the rule engine from the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe moves against the rule engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an engine config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Use this game id instead of generating one
    #[arg(long, global = true)]
    pub game_id: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the four-move demonstration opening
    Demo,

    /// Apply moves in turn order, starting with the configured first mover
    Play {
        /// Moves as `row,column`, a cell index (0-8), or a label like `center`
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print history and result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the row,column label of every cell
    Map,
}
