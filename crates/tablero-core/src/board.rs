//! The 9×9 Sudoku grid.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display as DeriveDisplay, Error};

use crate::{Digit, Position};

/// A 9×9 Sudoku grid.
///
/// Each cell holds `Option<Digit>`: `None` is an empty cell (rendered as `0`
/// in the text and wire formats), `Some` a placed digit. The board itself
/// carries no game rules; it offers the scans (row, column, 3×3 block) that
/// the game engine builds its move validation from.
///
/// # Text format
///
/// Boards parse from and render to the puzzle pool format: exactly 9 lines,
/// each with 9 whitespace-separated integers in 0-9.
///
/// ```
/// use tablero_core::{Board, Digit, Position};
///
/// let board: Board = "\
/// 5 3 0 0 7 0 0 0 0
/// 6 0 0 1 9 5 0 0 0
/// 0 9 8 0 0 0 0 6 0
/// 8 0 0 0 6 0 0 0 3
/// 4 0 0 8 0 3 0 0 1
/// 7 0 0 0 2 0 0 0 6
/// 0 6 0 0 0 0 2 8 0
/// 0 0 0 4 1 9 0 0 5
/// 0 0 0 0 8 0 0 7 9
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(board.get(Position::new(0, 2)), None);
/// assert!(board.row_contains(0, Digit::D3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Digit>; 9]; 9],
}

/// Error returned when parsing the puzzle text format fails.
///
/// Positions in messages are 0-based, matching [`Position`] indices.
#[derive(Debug, Clone, PartialEq, Eq, DeriveDisplay, Error)]
pub enum ParseBoardError {
    /// The input did not contain exactly 9 non-empty lines.
    #[display("expected 9 rows, found {_0}")]
    WrongRowCount(#[error(not(source))] usize),
    /// A line did not contain exactly 9 cells.
    #[display("row {row}: expected 9 cells, found {count}")]
    WrongCellCount {
        /// Row index of the offending line.
        row: usize,
        /// Number of cells found on that line.
        count: usize,
    },
    /// A cell token was not an integer in 0-9.
    #[display("row {row}, cell {col}: `{token}` is not an integer in 0-9")]
    InvalidCell {
        /// Row index of the offending token.
        row: usize,
        /// Column index of the offending token.
        col: usize,
        /// The token as it appeared in the input.
        token: String,
    },
}

impl Board {
    /// Returns the digit at `pos`, or `None` for an empty cell.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    /// Places `digit` at `pos`, overwriting whatever was there.
    pub const fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.row() as usize][pos.col() as usize] = Some(digit);
    }

    /// Empties the cell at `pos`.
    pub const fn clear(&mut self, pos: Position) {
        self.cells[pos.row() as usize][pos.col() as usize] = None;
    }

    /// Returns `true` if no cell on the board is empty.
    ///
    /// This is the win predicate's input: it says nothing about whether the
    /// filled digits satisfy the Sudoku constraints.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(Option::is_some))
    }

    /// Returns `true` if `digit` appears anywhere in row `row` (0-8).
    #[must_use]
    pub fn row_contains(&self, row: u8, digit: Digit) -> bool {
        self.cells[row as usize].contains(&Some(digit))
    }

    /// Returns `true` if `digit` appears anywhere in column `col` (0-8).
    #[must_use]
    pub fn col_contains(&self, col: u8, digit: Digit) -> bool {
        self.cells.iter().any(|row| row[col as usize] == Some(digit))
    }

    /// Returns `true` if `digit` appears in the 3×3 block containing `pos`.
    #[must_use]
    pub fn block_contains(&self, pos: Position, digit: Digit) -> bool {
        pos.block_cells().any(|cell| self.get(cell) == Some(digit))
    }

    /// Returns the grid as plain values, with `0` for empty cells.
    ///
    /// This is the wire representation served to clients.
    #[must_use]
    pub fn to_values(&self) -> [[u8; 9]; 9] {
        self.cells
            .map(|row| row.map(|cell| cell.map_or(0, Digit::value)))
    }

    /// Returns a mask that is `true` exactly where the board has a digit.
    ///
    /// Taken at puzzle load time, this is the fixed-cell (given) mask.
    #[must_use]
    pub fn filled_mask(&self) -> [[bool; 9]; 9] {
        self.cells.map(|row| row.map(|cell| cell.is_some()))
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().filter(|line| !line.trim().is_empty()).collect();
        if lines.len() != 9 {
            return Err(ParseBoardError::WrongRowCount(lines.len()));
        }

        let mut board = Self::default();
        for (row, line) in lines.iter().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != 9 {
                return Err(ParseBoardError::WrongCellCount {
                    row,
                    count: tokens.len(),
                });
            }
            for (col, token) in tokens.iter().enumerate() {
                let value: u8 = token.parse().map_err(|_| ParseBoardError::InvalidCell {
                    row,
                    col,
                    token: (*token).to_owned(),
                })?;
                if value > 9 {
                    return Err(ParseBoardError::InvalidCell {
                        row,
                        col,
                        token: (*token).to_owned(),
                    });
                }
                if let Some(digit) = Digit::try_from_value(value) {
                    board.cells[row][col] = Some(digit);
                }
            }
        }
        Ok(board)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let mut first = true;
            for cell in row {
                if !first {
                    write!(f, " ")?;
                }
                first = false;
                write!(f, "{}", cell.map_or(0, Digit::value))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
