//! Tests for board evaluation.

use strictly_minimax::{Board, Cell, Mark, Outcome, Position, evaluate, rules::LINES};

#[test]
fn test_each_line_alone_wins() {
    for line in LINES {
        for mark in [Mark::Circle, Mark::Cross] {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Cell::Occupied(mark));
            }
            assert_eq!(evaluate(&board), Outcome::Won(mark), "line {:?}", line);
        }
    }
}

#[test]
fn test_empty_board_is_open() {
    assert_eq!(evaluate(&Board::new()), Outcome::Open);
}

#[test]
fn test_full_board_without_line_is_tie() {
    let board: Board = "OXOXOXXOX".parse().unwrap();
    assert_eq!(evaluate(&board), Outcome::Tie);
}

#[test]
fn test_cross_line_wins_with_empty_cells() {
    let board: Board = "XXX_OO___".parse().unwrap();
    assert_eq!(evaluate(&board), Outcome::Won(Mark::Cross));
}

#[test]
fn test_evaluate_does_not_change_board() {
    let board: Board = "O___X___O".parse().unwrap();
    let before = board;
    assert_eq!(evaluate(&board), evaluate(&board));
    assert_eq!(board, before);
}

#[test]
fn test_lines_cover_rows_columns_diagonals() {
    let rows = LINES
        .iter()
        .filter(|line| line.iter().all(|p| p.row() == line[0].row()))
        .count();
    let cols = LINES
        .iter()
        .filter(|line| line.iter().all(|p| p.col() == line[0].col()))
        .count();
    assert_eq!(rows, 3);
    assert_eq!(cols, 3);
    assert!(LINES.contains(&[Position::TopLeft, Position::Center, Position::BottomRight]));
    assert!(LINES.contains(&[Position::TopRight, Position::Center, Position::BottomLeft]));
}
