//! Player trait and implementations.

mod human;
mod minimax;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;

use crate::games::tictactoe::{Board, Mark, Position};
use anyhow::Result;
use derive_more::{Display, Error};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move for `mark` on `board`.
    ///
    /// Returns an empty position; the orchestrator still validates it.
    async fn get_move(&mut self, board: &Board, mark: Mark) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Whether a person is choosing the moves.
    fn is_human(&self) -> bool {
        false
    }

    /// Asked after each round; `true` starts another one.
    async fn play_again(&mut self) -> Result<bool> {
        Ok(false)
    }
}

/// A player left mid-round.
#[derive(Debug, Clone, Display, Error)]
#[display("{} left the game", name)]
pub struct PlayerQuit {
    /// Who left.
    pub name: String,
}
