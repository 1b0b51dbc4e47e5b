use derive_more::{Display, Error};
use tablero_core::{Board, Digit, Position};

/// Maximum number of erases allowed per game. Resets restore the full budget.
pub const MAX_ERASES: u8 = 3;

/// Reasons an insert is rejected.
///
/// The checks run in the order the variants are listed and stop at the first
/// failure, so a move that is wrong in several ways reports only the first
/// reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The target cell already holds a digit (given or player-filled).
    #[display("cell is already occupied")]
    CellOccupied,
    /// The digit already appears in the target row.
    #[display("number already present in this row")]
    DuplicateInRow,
    /// The digit already appears in the target column.
    #[display("number already present in this column")]
    DuplicateInColumn,
    /// The digit already appears in the target 3×3 block.
    #[display("number already present in this block")]
    DuplicateInBlock,
}

/// Reasons an erase is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EraseError {
    /// The erase budget for this game is exhausted.
    #[display("erase limit reached")]
    LimitReached,
}

/// A single Sudoku game session.
///
/// Holds the live board, the mask of given (pre-filled) cells recorded when
/// the puzzle was loaded, and the number of erases spent so far.
///
/// # Examples
///
/// ```
/// use tablero_core::{Digit, Position};
/// use tablero_game::Game;
///
/// let board = "\
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
/// let mut game = Game::new(board);
///
/// // 4 does not clash with row 0, column 2, or the top-left block.
/// game.insert(Position::new(0, 2), Digit::D4).unwrap();
/// assert!(!game.is_won());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    givens: [[bool; 9]; 9],
    erases_used: u8,
}

impl Game {
    /// Starts a game on `board`, recording its non-empty cells as givens.
    #[must_use]
    pub fn new(board: Board) -> Self {
        let givens = board.filled_mask();
        Self {
            board,
            givens,
            erases_used: 0,
        }
    }

    /// Returns the live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns `true` if the cell at `pos` was part of the original puzzle.
    #[must_use]
    pub fn is_given(&self, pos: Position) -> bool {
        self.givens[pos.row() as usize][pos.col() as usize]
    }

    /// Returns the given-cell mask recorded at load time.
    #[must_use]
    pub fn given_mask(&self) -> &[[bool; 9]; 9] {
        &self.givens
    }

    /// Returns the number of erases spent so far (0 through [`MAX_ERASES`]).
    #[must_use]
    pub fn erases_used(&self) -> u8 {
        self.erases_used
    }

    /// Returns the number of erases still available.
    #[must_use]
    pub fn erases_remaining(&self) -> u8 {
        MAX_ERASES - self.erases_used
    }

    /// Attempts to place `digit` at `pos`.
    ///
    /// The board is mutated only on success; a rejected insert leaves the
    /// game untouched.
    ///
    /// # Errors
    ///
    /// First failure wins, in this order:
    ///
    /// - [`MoveError::CellOccupied`] if the cell is not empty,
    /// - [`MoveError::DuplicateInRow`] if the digit is already in the row,
    /// - [`MoveError::DuplicateInColumn`] if it is already in the column,
    /// - [`MoveError::DuplicateInBlock`] if it is already in the 3×3 block.
    pub fn insert(&mut self, pos: Position, digit: Digit) -> Result<(), MoveError> {
        if self.board.get(pos).is_some() {
            return Err(MoveError::CellOccupied);
        }
        if self.board.row_contains(pos.row(), digit) {
            return Err(MoveError::DuplicateInRow);
        }
        if self.board.col_contains(pos.col(), digit) {
            return Err(MoveError::DuplicateInColumn);
        }
        if self.board.block_contains(pos, digit) {
            return Err(MoveError::DuplicateInBlock);
        }
        self.board.set(pos, digit);
        Ok(())
    }

    /// Attempts to erase the cell at `pos`.
    ///
    /// Erasing an empty cell is a no-op: it returns `Ok(false)` and does not
    /// spend budget. Erasing a non-empty cell clears it, spends one erase,
    /// and returns `Ok(true)`. Erase is not guarded by the given mask or the
    /// Sudoku rules; it can never fill a cell, so the win check stays sound.
    ///
    /// # Errors
    ///
    /// Returns [`EraseError::LimitReached`] when the budget is exhausted,
    /// leaving board and counter untouched. This check holds even if a
    /// caller forgets to screen the budget itself.
    pub fn erase(&mut self, pos: Position) -> Result<bool, EraseError> {
        if self.erases_used >= MAX_ERASES {
            return Err(EraseError::LimitReached);
        }
        if self.board.get(pos).is_none() {
            return Ok(false);
        }
        self.board.clear(pos);
        self.erases_used += 1;
        Ok(true)
    }

    /// Returns `true` if the board is completely filled.
    ///
    /// Filled cells are not re-validated: inserts are the only path that
    /// writes digits and each one was rule-checked, so a full board is a
    /// valid solution by construction.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.is_full()
    }

    /// Replaces the board with a freshly loaded puzzle.
    ///
    /// The given mask is recomputed from the new board and the erase counter
    /// returns to zero; the two can never go out of lock-step because this is
    /// the only reset path.
    pub fn reset(&mut self, board: Board) {
        self.givens = board.filled_mask();
        self.board = board;
        self.erases_used = 0;
    }
}
