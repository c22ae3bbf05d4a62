//! Strictly Minimax - unified CLI
//!
//! Play tic-tac-toe against the engine, watch it play itself, or ask it for
//! a move.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, Side};
use serde::Serialize;
use strictly_minimax::{
    Board, GameConfig, Mark, MoveSelector, Outcome, PlayerQuit, Position, Score, SearchStats,
    best_moves, run_play, run_self_play,
};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();
    initialize_tracing();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play { delay_ms, seed } => play(config, delay_ms, seed).await,
        Command::SelfPlay { games, seed } => self_play(games, seed.or(*config.seed())).await,
        Command::Suggest {
            board,
            side,
            seed,
            json,
        } => suggest(&board, side, seed.or(*config.seed()), json),
    }
}

/// Logs go to stderr so stdout stays the game display.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,strictly_minimax=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Human against engine.
#[instrument(skip(config))]
async fn play(mut config: GameConfig, delay_ms: Option<u64>, seed: Option<u64>) -> Result<()> {
    if let Some(delay_ms) = delay_ms {
        config = config.with_thinking_delay_ms(delay_ms);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    match run_play(&config).await {
        Ok(outcomes) => {
            info!(rounds = outcomes.len(), "Thanks for playing");
            Ok(())
        }
        Err(e) if e.downcast_ref::<PlayerQuit>().is_some() => {
            info!(reason = %e, "Session ended early");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Engine against engine.
#[instrument]
async fn self_play(games: usize, seed: Option<u64>) -> Result<()> {
    let tally = run_self_play(games, seed).await?;
    println!("{}", tally);
    if tally.circle_wins + tally.cross_wins > 0 {
        anyhow::bail!("Optimal play should always tie, got {}", tally);
    }
    Ok(())
}

#[derive(Serialize)]
struct Suggestion {
    board: String,
    side: Mark,
    score: Score,
    best: Vec<Position>,
    chosen: Position,
    stats: SearchStats,
}

/// Best moves for one board.
#[instrument]
fn suggest(board: &str, side: Option<Side>, seed: Option<u64>, json: bool) -> Result<()> {
    let board: Board = board.parse()?;
    let side = match side {
        Some(Side::O) => Mark::Circle,
        Some(Side::X) => Mark::Cross,
        None => board.side_to_move(),
    };

    let best = best_moves(&board, side)
        .with_context(|| format!("No move to suggest for\n{}", board.display()))?;
    let chosen = MoveSelector::from_seed_option(seed).choose(&best);

    let suggestion = Suggestion {
        board: board.compact(),
        side,
        score: *best.score(),
        best: best.moves().clone(),
        chosen,
        stats: *best.stats(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
        return Ok(());
    }

    println!("{}\n", board.display());
    let expected = match suggestion.score {
        1 => Outcome::Won(side),
        -1 => Outcome::Won(side.opponent()),
        _ => Outcome::Tie,
    };
    println!("{} to move, best play ends in: {}", side.name(), expected);
    let keys: Vec<String> = suggestion
        .best
        .iter()
        .map(|p| format!("{} ({})", p.to_index() + 1, p))
        .collect();
    println!("Equally good moves: {}", keys.join(", "));
    println!("Chosen: {} ({})", chosen.to_index() + 1, chosen);
    println!(
        "Searched {} positions, {} cutoffs",
        suggestion.stats.nodes, suggestion.stats.cutoffs
    );
    Ok(())
}
