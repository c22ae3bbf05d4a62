//! Line-oriented terminal front end.
//!
//! Owns the board between engine calls, reads the human's moves from
//! stdin and prints the game as it goes. The engine itself knows nothing
//! about any of this.

mod orchestrator;
mod players;
mod render;

pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{HumanPlayer, MinimaxPlayer, Player, PlayerQuit};
pub use render::{print_events, render_event};

use crate::config::GameConfig;
use crate::engine::MoveSelector;
use crate::games::tictactoe::{Mark, Outcome};
use anyhow::Result;
use serde::Serialize;
use std::time::Duration;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::{info, instrument};

/// Human (circle) against the engine (cross) until the human stops.
#[instrument(skip(config))]
pub async fn run_play(config: &GameConfig) -> Result<Vec<Outcome>> {
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(print_events(event_rx));

    let human = HumanPlayer::new(
        config.player_name().clone(),
        BufReader::new(tokio::io::stdin()),
    );
    let engine = MinimaxPlayer::new(
        config.engine_name().clone(),
        MoveSelector::from_seed_option(*config.seed()),
        config.thinking_delay(),
    );

    let mut orchestrator = Orchestrator::new(Box::new(human), Box::new(engine), event_tx);
    let result = orchestrator.run().await;

    // Closing the channel lets the renderer drain and finish.
    drop(orchestrator);
    renderer.await?;
    result
}

/// Results of engine-versus-engine games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Games won by circle.
    pub circle_wins: usize,
    /// Games won by cross.
    pub cross_wins: usize,
    /// Tied games.
    pub ties: usize,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Mark::Circle) => self.circle_wins += 1,
            Outcome::Won(Mark::Cross) => self.cross_wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Open => {}
        }
    }

    /// Number of games counted.
    pub fn games(&self) -> usize {
        self.circle_wins + self.cross_wins + self.ties
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: circle {} / cross {} / ties {}",
            self.games(),
            self.circle_wins,
            self.cross_wins,
            self.ties
        )
    }
}

/// Plays the engine against itself `games` times without any delay.
#[instrument]
pub async fn run_self_play(games: usize, seed: Option<u64>) -> Result<Tally> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let circle = MinimaxPlayer::new(
        "Circle",
        MoveSelector::from_seed_option(seed),
        Duration::ZERO,
    );
    let cross = MinimaxPlayer::new(
        "Cross",
        MoveSelector::from_seed_option(seed.map(|s| s.wrapping_add(1))),
        Duration::ZERO,
    );
    let mut orchestrator = Orchestrator::new(Box::new(circle), Box::new(cross), event_tx);

    let mut tally = Tally::default();
    for _ in 0..games {
        tally.record(orchestrator.run_round().await?);
        orchestrator.restart();
        // Nobody renders self-play; drop the round's events.
        while event_rx.try_recv().is_ok() {}
    }

    info!(%tally, "Self-play finished");
    Ok(tally)
}
