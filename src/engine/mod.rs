//! The automated opponent.
//!
//! [`best_moves`] runs an exhaustive minimax search with alpha-beta pruning
//! and returns every move tied for the best score; [`MoveSelector`] picks
//! one of them with an injectable random source.

mod error;
mod minimax;

pub use error::{EngineError, EngineErrorKind};
pub use minimax::{BestMoves, MoveSelector, Score, SearchStats, best_moves, utility};
