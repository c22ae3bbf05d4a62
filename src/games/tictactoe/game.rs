//! Authoritative game state for a round of tic-tac-toe.
//!
//! The engine never owns the board; this is the caller-side state manager
//! that validates moves, applies them and re-evaluates after every
//! placement.

use super::position::Position;
use super::rules::evaluate;
use super::types::{Board, Cell, Mark, Outcome};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Errors that can occur when making a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The round has already ended.
    #[display("Game is already over")]
    GameOver,
    /// Index outside 0-8.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),
    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),
}

/// One round of tic-tac-toe. Circle always moves first.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Mark,
    outcome: Outcome,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::Circle,
            outcome: Outcome::Open,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move (the last mover once the game is over).
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether the round has ended.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Makes a move for the side to move at the given index (0-8).
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn make_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }

        self.board.set(pos, Cell::Occupied(self.to_move));
        self.history.push(pos);
        self.outcome = evaluate(&self.board);

        if self.outcome == Outcome::Open {
            self.to_move = self.to_move.opponent();
        }
        debug!(position = %pos, outcome = %self.outcome, "Move applied");

        Ok(self.outcome)
    }

    /// Makes a move at a named position.
    pub fn place(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        self.make_move(pos.to_index())
    }

    /// Clears the board for another round.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_moves_first_and_turns_alternate() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Mark::Circle);
        game.make_move(4).unwrap();
        assert_eq!(game.to_move(), Mark::Cross);
        game.make_move(0).unwrap();
        assert_eq!(game.to_move(), Mark::Circle);
        assert_eq!(game.history(), &[Position::Center, Position::TopLeft]);
    }

    #[test]
    fn test_rejects_occupied_and_out_of_range() {
        let mut game = Game::new();
        game.make_move(4).unwrap();
        assert_eq!(game.make_move(4), Err(MoveError::Occupied(Position::Center)));
        assert_eq!(game.make_move(9), Err(MoveError::OutOfRange(9)));
        // Rejected moves leave the turn unchanged.
        assert_eq!(game.to_move(), Mark::Cross);
    }

    #[test]
    fn test_rejects_moves_after_win() {
        let mut game = Game::new();
        for index in [0, 3, 1, 4] {
            assert_eq!(game.make_move(index), Ok(Outcome::Open));
        }
        assert_eq!(game.make_move(2), Ok(Outcome::Won(Mark::Circle)));
        assert!(game.is_over());
        assert_eq!(game.make_move(8), Err(MoveError::GameOver));
    }

    #[test]
    fn test_full_board_ties() {
        let mut game = Game::new();
        // Ends as O X O / O X X / X O O.
        for index in [0, 1, 2, 4, 7, 5, 3, 6, 8] {
            game.make_move(index).unwrap();
        }
        assert_eq!(game.outcome(), Outcome::Tie);
    }

    #[test]
    fn test_reset_clears_round() {
        let mut game = Game::new();
        game.make_move(0).unwrap();
        game.reset();
        assert_eq!(game.board(), &Board::new());
        assert!(game.history().is_empty());
        assert_eq!(game.to_move(), Mark::Circle);
        assert_eq!(game.outcome(), Outcome::Open);
    }

    #[test]
    fn test_error_messages() {
        assert!(MoveError::Occupied(Position::Center).to_string().contains("occupied"));
        assert!(MoveError::OutOfRange(12).to_string().contains("12"));
    }
}
