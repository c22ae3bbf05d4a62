//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Strictly Minimax - tic-tac-toe against an opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "strictly_minimax.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play as circle against the engine
    Play {
        /// Engine thinking delay in milliseconds (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for tie-breaking between equally good moves (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let the engine play itself and report the results
    SelfPlay {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: usize,

        /// Seed for tie-breaking (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the best moves for a board, e.g. "OO_/X__/___"
    Suggest {
        /// Nine cells in row-major order: O, X, or _ for empty
        board: String,

        /// Side to move (inferred from mark counts if omitted)
        #[arg(long, value_enum)]
        side: Option<Side>,

        /// Seed for picking among tied moves (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Side argument for `suggest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    /// Circle (O)
    #[value(alias = "circle")]
    O,
    /// Cross (X)
    #[value(alias = "cross")]
    X,
}
