//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark, Position};

/// The eight winning lines: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Whether `mark` fills any of the eight lines.
pub fn completes_line(board: &Board, mark: Mark) -> bool {
    let cell = Cell::Occupied(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == cell))
}

/// Checks if there is a winner on the board.
///
/// Circle is checked before Cross, so a malformed board where both sides
/// have a line reports Circle.
pub fn check_winner(board: &Board) -> Option<Mark> {
    [Mark::Circle, Mark::Cross]
        .into_iter()
        .find(|&mark| completes_line(board, mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_line(line: [Position; 3], mark: Mark) -> Board {
        let mut board = Board::new();
        for pos in line {
            board.set(pos, Cell::Occupied(mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_both_marks() {
        for line in LINES {
            for mark in [Mark::Circle, Mark::Cross] {
                let board = board_with_line(line, mark);
                assert_eq!(check_winner(&board), Some(mark), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Mark::Cross));
        board.set(Position::TopCenter, Cell::Occupied(Mark::Cross));
        board.set(Position::TopRight, Cell::Occupied(Mark::Circle));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_circle_has_priority_on_malformed_board() {
        let board: Board = "XXX/OOO/___".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::Circle));
    }
}
