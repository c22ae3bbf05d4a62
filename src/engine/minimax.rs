//! Exhaustive minimax search with alpha-beta pruning.
//!
//! The searching side always maximizes. Scores are fixed utilities with no
//! depth discount: +1 when the searching side wins, -1 when it loses, 0 for
//! a tie. Every root move is searched with a fresh `(-inf, +inf)` window so
//! root scores are exact and ties between root moves are real ties.

use super::error::{EngineError, EngineErrorKind};
use crate::games::tictactoe::{Board, Cell, Mark, Outcome, Position, evaluate};
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, instrument};

/// Utility of a position for the searching side.
pub type Score = i32;

const NEG_INF: Score = Score::MIN;
const POS_INF: Score = Score::MAX;

/// Node and cutoff counters for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Positions visited, root children included.
    pub nodes: u64,
    /// Times the remaining siblings of a node were skipped.
    pub cutoffs: u64,
}

/// All root moves sharing the best score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct BestMoves {
    /// Side the search was run for.
    side: Mark,
    /// Score every move in `moves` achieves.
    score: Score,
    /// Equally good moves in board order; never empty.
    moves: Vec<Position>,
    /// Work done by the search.
    stats: SearchStats,
}

/// Maps a terminal outcome to a utility for `maximizer`.
pub fn utility(outcome: Outcome, maximizer: Mark) -> Score {
    match outcome {
        Outcome::Won(mark) if mark == maximizer => 1,
        Outcome::Won(_) => -1,
        Outcome::Tie | Outcome::Open => 0,
    }
}

/// Scratch board plus bookkeeping for one search.
///
/// Owns a private copy of the caller's board; every placement is undone
/// before the next sibling is tried.
struct Search {
    board: Board,
    maximizer: Mark,
    stats: SearchStats,
}

impl Search {
    fn new(board: Board, maximizer: Mark) -> Self {
        Self {
            board,
            maximizer,
            stats: SearchStats::default(),
        }
    }

    /// Scores the root move `pos` for the maximizer.
    fn score_root_move(&mut self, pos: Position) -> Score {
        self.board.set(pos, Cell::Occupied(self.maximizer));
        let score = self.minimax(false, NEG_INF, POS_INF);
        self.board.set(pos, Cell::Empty);
        score
    }

    fn minimax(&mut self, maximizing: bool, mut alpha: Score, mut beta: Score) -> Score {
        self.stats.nodes += 1;

        let outcome = evaluate(&self.board);
        if outcome.is_terminal() {
            return utility(outcome, self.maximizer);
        }

        let mark = if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        };
        let mut best = if maximizing { NEG_INF } else { POS_INF };

        for pos in Position::ALL {
            if !self.board.is_empty(pos) {
                continue;
            }

            self.board.set(pos, Cell::Occupied(mark));
            let score = self.minimax(!maximizing, alpha, beta);
            self.board.set(pos, Cell::Empty);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

/// Finds every move for `side` that achieves the best score.
///
/// # Errors
///
/// Returns [`EngineErrorKind::GameOver`] if the board is already won or
/// tied. An open board always has at least one empty cell.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn best_moves(board: &Board, side: Mark) -> Result<BestMoves, EngineError> {
    let outcome = evaluate(board);
    if outcome.is_terminal() {
        return Err(EngineError::new(EngineErrorKind::GameOver(outcome)));
    }

    let mut search = Search::new(*board, side);
    let mut score = NEG_INF;
    let mut moves = Vec::new();

    for pos in Position::valid_moves(board) {
        let move_score = search.score_root_move(pos);
        if move_score > score {
            score = move_score;
            moves.clear();
            moves.push(pos);
        } else if move_score == score {
            moves.push(pos);
        }
    }

    debug!(
        score,
        tied = moves.len(),
        nodes = search.stats.nodes,
        cutoffs = search.stats.cutoffs,
        "Search complete"
    );

    Ok(BestMoves {
        side,
        score,
        moves,
        stats: search.stats,
    })
}

/// Picks moves for one side, breaking ties with its own random source.
#[derive(Debug, Clone)]
pub struct MoveSelector<R = StdRng> {
    rng: R,
}

impl MoveSelector<StdRng> {
    /// Reproducible selector; the same seed yields the same choices.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Selector seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Seeded when `seed` is given, from entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> MoveSelector<R> {
    /// Creates a selector drawing ties from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Selects an optimal move for `side`; the board is not modified.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] if the board is already terminal.
    #[instrument(skip(self, board), fields(board = %board.compact()))]
    pub fn select_move(&mut self, board: &Board, side: Mark) -> Result<Position, EngineError> {
        let best = best_moves(board, side)?;
        let choice = self.choose(&best);
        debug!(position = %choice, score = best.score, "Move selected");
        Ok(choice)
    }

    /// Draws one move uniformly from a tied set.
    pub fn choose(&mut self, best: &BestMoves) -> Position {
        let idx = self.rng.random_range(0..best.moves.len());
        best.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_every_move_ties() {
        let best = best_moves(&Board::new(), Mark::Cross).unwrap();
        assert_eq!(*best.score(), 0);
        assert_eq!(best.moves().as_slice(), &Position::ALL);
    }

    #[test]
    fn test_blocks_immediate_threat() {
        // O O _ / _ X _ / _ _ _: every move but the block loses at once.
        let b = board("OO__X____");
        let best = best_moves(&b, Mark::Cross).unwrap();
        assert_eq!(best.moves().as_slice(), &[Position::TopRight]);
        assert_eq!(*best.score(), 0);

        let mut selector = MoveSelector::seeded(7);
        assert_eq!(selector.select_move(&b, Mark::Cross).unwrap(), Position::TopRight);
    }

    #[test]
    fn test_lost_position_keeps_every_move() {
        // O O _ / X _ _ / _ _ _: blocking at 2 lets circle fork with the
        // center, so every move scores -1 and all of them stay tied.
        let b = board("OO_X_____");
        let best = best_moves(&b, Mark::Cross).unwrap();
        assert_eq!(*best.score(), -1);
        assert_eq!(best.moves().len(), 6);
        assert!(best.moves().contains(&Position::TopRight));
    }

    #[test]
    fn test_takes_immediate_win() {
        // X X _ / O O _ / _ _ _
        let b = board("XX_OO____");
        let best = best_moves(&b, Mark::Cross).unwrap();
        assert_eq!(*best.score(), 1);
        assert_eq!(best.moves().as_slice(), &[Position::TopRight]);
    }

    #[test]
    fn test_board_is_untouched() {
        let b = board("O___X___O");
        let before = b;
        let mut selector = MoveSelector::seeded(1);
        let pos = selector.select_move(&b, Mark::Cross).unwrap();
        assert_eq!(b, before);
        assert!(before.is_empty(pos));
    }

    #[test]
    fn test_refuses_finished_boards() {
        let won = board("XXX_OO___");
        let err = best_moves(&won, Mark::Circle).unwrap_err();
        assert_eq!(err.kind, EngineErrorKind::GameOver(Outcome::Won(Mark::Cross)));

        let tied = board("OXOXOXXOX");
        let err = MoveSelector::seeded(0)
            .select_move(&tied, Mark::Cross)
            .unwrap_err();
        assert_eq!(err.kind, EngineErrorKind::GameOver(Outcome::Tie));
        assert!(err.to_string().contains("game is over"));
    }

    #[test]
    fn test_same_seed_same_choices() {
        let b = Board::new();
        let mut a = MoveSelector::seeded(42);
        let mut c = MoveSelector::seeded(42);
        for _ in 0..20 {
            assert_eq!(
                a.select_move(&b, Mark::Cross).unwrap(),
                c.select_move(&b, Mark::Cross).unwrap()
            );
        }
    }

    #[test]
    fn test_ties_are_all_reachable() {
        let mut selector = MoveSelector::seeded(3);
        let best = best_moves(&Board::new(), Mark::Cross).unwrap();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(selector.choose(&best));
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_searching_for_circle_uses_circle_perspective() {
        // Circle to move can win on the top row.
        let b = board("OO_XX____");
        let best = best_moves(&b, Mark::Circle).unwrap();
        assert_eq!(*best.score(), 1);
        assert_eq!(best.moves().as_slice(), &[Position::TopRight]);
    }

    #[test]
    fn test_pruning_cuts_work() {
        let best = best_moves(&board("O________"), Mark::Cross).unwrap();
        assert!(best.stats().cutoffs > 0);
        assert!(best.stats().nodes > 0);
    }
}
