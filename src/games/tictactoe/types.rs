//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Mark placed by one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mark {
    /// The human player's mark ("O", always moves first).
    #[display("O")]
    Circle,
    /// The engine's mark ("X").
    #[display("X")]
    Cross,
}

impl Mark {
    /// Returns the other side's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Circle => Mark::Cross,
            Mark::Cross => Mark::Circle,
        }
    }

    /// Display name used when announcing results.
    pub fn name(self) -> &'static str {
        match self {
            Mark::Circle => "Circle",
            Mark::Cross => "Cross",
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == Cell::Occupied(mark))
            .count()
    }

    /// Mark whose turn it is under alternating play with Circle first.
    pub fn side_to_move(&self) -> Mark {
        if self.count(Mark::Circle) > self.count(Mark::Cross) {
            Mark::Cross
        } else {
            Mark::Circle
        }
    }

    /// Formats the board as a human-readable grid; empty cells show their 1-9 key.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }

    /// Compact nine-character form (`O`, `X`, `_`), the inverse of [`FromStr`].
    pub fn compact(&self) -> String {
        self.cells
            .iter()
            .map(|c| match c {
                Cell::Empty => '_',
                Cell::Occupied(Mark::Circle) => 'O',
                Cell::Occupied(Mark::Cross) => 'X',
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `O`/`o` is a circle, `X`/`x` a cross, and `_`, `.`, `-` or a space an
    /// empty cell. `/`, newlines and tabs may separate rows.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for ch in s.chars() {
            let cell = match ch {
                'O' | 'o' => Cell::Occupied(Mark::Circle),
                'X' | 'x' => Cell::Occupied(Mark::Cross),
                '_' | '.' | '-' | ' ' => Cell::Empty,
                '/' | '\n' | '\r' | '\t' => continue,
                other => {
                    return Err(BoardParseError::new(format!(
                        "unexpected character {:?}",
                        other
                    )));
                }
            };
            cells.push(cell);
        }

        let cells: [Cell; 9] = cells.try_into().map_err(|v: Vec<Cell>| {
            BoardParseError::new(format!("expected 9 cells, found {}", v.len()))
        })?;
        Ok(Self { cells })
    }
}

/// Board text could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is still open.
    Open,
    /// A side completed a line.
    Won(Mark),
    /// Board is full with no completed line.
    Tie,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Open => write!(f, "open"),
            Outcome::Won(mark) => write!(f, "{} wins", mark.name()),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

impl Outcome {
    /// Whether the game has ended.
    pub fn is_terminal(self) -> bool {
        self != Outcome::Open
    }
}
