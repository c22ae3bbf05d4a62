//! Tic-tac-toe board, rules and round state.

mod game;
mod position;
pub mod rules;
mod types;

pub use game::{Game, MoveError};
pub use position::Position;
pub use rules::evaluate;
pub use types::{Board, BoardParseError, Cell, Mark, Outcome};
