//! Game orchestration between players.

use super::players::Player;
use crate::games::tictactoe::{Game, Mark, Outcome, Position};
use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Messages sent from orchestrator to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh board is ready.
    RoundStarted {
        /// Round number, starting at 1.
        round: usize,
        /// Name of the player who opens.
        first: String,
    },
    /// Board redrawn (grid text).
    BoardChanged(String),
    /// Waiting for a human to choose.
    AwaitingMove {
        /// Who is choosing.
        player: String,
        /// Their mark.
        mark: Mark,
    },
    /// The engine is choosing.
    Thinking {
        /// Who is choosing.
        player: String,
        /// Their mark.
        mark: Mark,
    },
    /// Move was made.
    MoveMade {
        /// Who moved.
        player: String,
        /// Their mark.
        mark: Mark,
        /// Where.
        position: Position,
    },
    /// Round ended.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Winner's name, if any.
        winner: Option<String>,
    },
    /// Asking the circle player whether to play again.
    PlayAgainPrompt,
}

/// Orchestrates gameplay between two players.
///
/// Owns the authoritative [`Game`]; players only ever see copies of the
/// board.
pub struct Orchestrator {
    game: Game,
    circle: Box<dyn Player>,
    cross: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    round: usize,
}

impl Orchestrator {
    /// Creates a new orchestrator. `circle` always moves first.
    pub fn new(
        circle: Box<dyn Player>,
        cross: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            game: Game::new(),
            circle,
            cross,
            event_tx,
            round: 0,
        }
    }

    /// Returns the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    fn player_name(&self, mark: Mark) -> String {
        match mark {
            Mark::Circle => self.circle.name().to_string(),
            Mark::Cross => self.cross.name().to_string(),
        }
    }

    /// Plays one round to completion on the current board.
    #[instrument(skip(self), fields(round = self.round + 1))]
    pub async fn run_round(&mut self) -> Result<Outcome> {
        self.round += 1;
        info!("Starting round");

        self.event_tx.send(GameEvent::RoundStarted {
            round: self.round,
            first: self.player_name(self.game.to_move()),
        })?;
        self.event_tx
            .send(GameEvent::BoardChanged(self.game.board().display()))?;

        while !self.game.is_over() {
            let mark = self.game.to_move();
            let board = *self.game.board();
            let player = match mark {
                Mark::Circle => &mut self.circle,
                Mark::Cross => &mut self.cross,
            };
            let name = player.name().to_string();

            if player.is_human() {
                self.event_tx.send(GameEvent::AwaitingMove {
                    player: name.clone(),
                    mark,
                })?;
            } else {
                self.event_tx.send(GameEvent::Thinking {
                    player: name.clone(),
                    mark,
                })?;
            }

            debug!(player = %name, "Waiting for move");
            let position = player.get_move(&board, mark).await?;

            self.game
                .place(position)
                .with_context(|| format!("{} played an illegal move", name))?;

            self.event_tx.send(GameEvent::MoveMade {
                player: name,
                mark,
                position,
            })?;
            self.event_tx
                .send(GameEvent::BoardChanged(self.game.board().display()))?;
        }

        let outcome = self.game.outcome();
        let winner = match outcome {
            Outcome::Won(mark) => Some(self.player_name(mark)),
            Outcome::Tie | Outcome::Open => None,
        };
        info!(%outcome, "Round finished");
        self.event_tx.send(GameEvent::GameOver { outcome, winner })?;

        Ok(outcome)
    }

    /// Plays rounds until the circle player declines a rematch.
    ///
    /// Returns the outcome of every round played.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<Vec<Outcome>> {
        info!("Starting game orchestration");
        let mut outcomes = Vec::new();

        loop {
            outcomes.push(self.run_round().await?);

            self.event_tx.send(GameEvent::PlayAgainPrompt)?;
            if !self.circle.play_again().await? {
                break;
            }
            self.restart();
        }

        info!(rounds = outcomes.len(), "Session finished");
        Ok(outcomes)
    }

    /// Restarts the game with an empty board.
    pub fn restart(&mut self) {
        self.game.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MoveSelector;
    use crate::games::tictactoe::Board;
    use crate::terminal::players::{HumanPlayer, MinimaxPlayer};
    use std::time::Duration;

    fn engine(name: &str, seed: u64) -> Box<dyn Player> {
        Box::new(MinimaxPlayer::new(
            name,
            MoveSelector::seeded(seed),
            Duration::ZERO,
        ))
    }

    #[tokio::test]
    async fn test_engine_never_loses_to_scripted_human() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let human = HumanPlayer::new("Human", "1\n2\n3\n4\n5\n6\n7\n8\n9\n".as_bytes());
        let mut orchestrator = Orchestrator::new(Box::new(human), engine("Cross", 5), tx);

        let outcome = orchestrator.run_round().await.unwrap();
        assert_ne!(outcome, Outcome::Won(Mark::Circle));

        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        assert!(matches!(events.first(), Some(GameEvent::RoundStarted { round: 1, .. })));
        assert!(matches!(events.last(), Some(GameEvent::GameOver { .. })));
        assert!(events.iter().any(|e| matches!(e, GameEvent::AwaitingMove { .. })));
        assert!(events.iter().any(|e| matches!(e, GameEvent::Thinking { .. })));
    }

    /// Picks the first empty cell and accepts a fixed number of rematches.
    struct FirstEmpty {
        rematches: usize,
    }

    #[async_trait::async_trait]
    impl Player for FirstEmpty {
        async fn get_move(&mut self, board: &Board, _mark: Mark) -> Result<Position> {
            Position::valid_moves(board)
                .first()
                .copied()
                .ok_or_else(|| anyhow::anyhow!("No valid moves available"))
        }

        fn name(&self) -> &str {
            "First-empty"
        }

        async fn play_again(&mut self) -> Result<bool> {
            let again = self.rematches > 0;
            self.rematches = self.rematches.saturating_sub(1);
            Ok(again)
        }
    }

    #[tokio::test]
    async fn test_play_again_runs_another_round() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut orchestrator =
            Orchestrator::new(Box::new(FirstEmpty { rematches: 2 }), engine("Cross", 11), tx);

        let outcomes = orchestrator.run().await.unwrap();
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|o| *o != Outcome::Won(Mark::Circle)));

        let mut prompts = 0;
        while let Ok(event) = rx.try_recv() {
            if event == GameEvent::PlayAgainPrompt {
                prompts += 1;
            }
        }
        assert_eq!(prompts, 3);
    }

    #[tokio::test]
    async fn test_engine_against_itself_ties() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut orchestrator = Orchestrator::new(engine("Circle", 1), engine("Cross", 2), tx);

        for _ in 0..5 {
            assert_eq!(orchestrator.run_round().await.unwrap(), Outcome::Tie);
            orchestrator.restart();
        }
    }
}
