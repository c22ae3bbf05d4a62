//! Board evaluation: open, won or tied.

use super::super::{Board, Outcome};
use super::{check_winner, is_full};

/// Evaluates a board snapshot.
///
/// A completed line wins even when empty cells remain; a full board without
/// one is a tie; anything else is still open.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Won(mark)
    } else if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::Open
    }
}
