//! Plain-text rendering of game events.

use super::orchestrator::GameEvent;
use crate::games::tictactoe::{Mark, Outcome};
use std::io::Write;
use tokio::sync::mpsc;
use tracing::warn;

/// Text shown for an event, if any.
pub fn render_event(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::RoundStarted { round, first } => {
            Some(format!("\n=== Round {} ===\n{} goes first", round, first))
        }
        GameEvent::BoardChanged(grid) => Some(format!("\n{}\n", grid)),
        GameEvent::AwaitingMove { player, mark } => Some(format!(
            "{}'s turn ({}). Pick a cell 1-9, or q to quit:",
            player, mark
        )),
        GameEvent::Thinking { mark, .. } => Some(format!("{} turn", mark.name())),
        GameEvent::MoveMade { .. } => None,
        GameEvent::GameOver { outcome, .. } => Some(
            match outcome {
                Outcome::Won(Mark::Circle) => "Circle wins!",
                Outcome::Won(Mark::Cross) => "Cross wins!",
                Outcome::Tie => "It's a tie!",
                Outcome::Open => return None,
            }
            .to_string(),
        ),
        GameEvent::PlayAgainPrompt => Some("Play again? [y/N]".to_string()),
    }
}

/// Prints events to stdout until the orchestrator hangs up.
pub async fn print_events(mut event_rx: mpsc::UnboundedReceiver<GameEvent>) {
    let stdout = std::io::stdout();
    while let Some(event) = event_rx.recv().await {
        if let Some(text) = render_event(&event) {
            let mut out = stdout.lock();
            if let Err(e) = writeln!(out, "{}", text).and_then(|_| out.flush()) {
                warn!(error = %e, "Failed to write to stdout");
            }
        }
    }
}
