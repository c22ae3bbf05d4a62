//! Engine-backed player.

use super::Player;
use crate::engine::MoveSelector;
use crate::games::tictactoe::{Board, Mark, Position};
use anyhow::Result;
use std::time::Duration;
use tracing::debug;

/// Plays the engine's choice after an optional pause.
pub struct MinimaxPlayer {
    name: String,
    selector: MoveSelector,
    delay: Duration,
}

impl MinimaxPlayer {
    /// Creates an engine player that waits `delay` before each move.
    pub fn new(name: impl Into<String>, selector: MoveSelector, delay: Duration) -> Self {
        Self {
            name: name.into(),
            selector,
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for MinimaxPlayer {
    async fn get_move(&mut self, board: &Board, mark: Mark) -> Result<Position> {
        // Only simulates thinking; the choice below does not depend on it.
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let pos = self.selector.select_move(board, mark)?;
        debug!(player = %self.name, position = %pos, "Engine chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
