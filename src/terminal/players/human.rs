//! Human player reading moves line by line.

use super::{Player, PlayerQuit};
use crate::games::tictactoe::{Board, Mark, Position};
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::debug;

/// Human player typing a key 1-9 or a position label per line.
///
/// Unreadable input and occupied cells are ignored and the next line is
/// read, the same as clicking a filled cell. `q`, `quit` or end of input
/// leaves the game.
pub struct HumanPlayer<R> {
    name: String,
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin + Send> HumanPlayer<R> {
    /// Creates a new human player reading from `input`.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            lines: input.lines(),
        }
    }

    async fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.next_line().await?)
    }

    fn quit(&self) -> PlayerQuit {
        PlayerQuit {
            name: self.name.clone(),
        }
    }
}

#[async_trait::async_trait]
impl<R: AsyncBufRead + Unpin + Send> Player for HumanPlayer<R> {
    async fn get_move(&mut self, board: &Board, _mark: Mark) -> Result<Position> {
        while let Some(line) = self.next_line().await? {
            let input = line.trim();
            if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
                return Err(self.quit().into());
            }

            match Position::from_key_or_label(input) {
                Some(pos) if board.is_empty(pos) => return Ok(pos),
                Some(pos) => debug!(player = %self.name, position = %pos, "Ignoring occupied cell"),
                None => debug!(player = %self.name, input, "Ignoring unrecognized input"),
            }
        }

        Err(self.quit().into())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }

    async fn play_again(&mut self) -> Result<bool> {
        let Some(line) = self.next_line().await? else {
            return Ok(false);
        };
        let answer = line.trim().to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}
