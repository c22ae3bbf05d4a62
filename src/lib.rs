//! Strictly Minimax library - tic-tac-toe with an optimal opponent
//!
//! # Architecture
//!
//! - **Rules**: pure board evaluation (open, won, tied)
//! - **Engine**: minimax with alpha-beta pruning, random tie-breaking
//! - **Game**: caller-side round state (turns, validation, reset)
//! - **Terminal**: players, orchestrator and a plain-text front end
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Mark, MoveSelector, Position};
//!
//! let board: Board = "OO_/_X_/___".parse().unwrap();
//! let mut selector = MoveSelector::seeded(1);
//! let choice = selector.select_move(&board, Mark::Cross).unwrap();
//! assert_eq!(choice, Position::TopRight);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod engine;
mod games;
mod terminal;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Engine
pub use engine::{
    BestMoves, EngineError, EngineErrorKind, MoveSelector, Score, SearchStats, best_moves, utility,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, Cell, Game, Mark, MoveError, Outcome, Position, evaluate, rules,
};

// Crate-level exports - Terminal front end
pub use terminal::{
    GameEvent, HumanPlayer, MinimaxPlayer, Orchestrator, Player, PlayerQuit, Tally, print_events,
    render_event, run_play, run_self_play,
};
