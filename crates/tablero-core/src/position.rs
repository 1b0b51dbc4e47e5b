//! Cell coordinates on the 9×9 board.

use std::fmt::{self, Display};

/// A cell coordinate on the board: `row` and `col` both in 0-8.
///
/// Row 0 is the top row, column 0 the leftmost column, matching the row-major
/// order of the puzzle text format.
///
/// # Examples
///
/// ```
/// use tablero_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.block_origin(), Position::new(3, 6));
///
/// // Fallible construction for unvalidated input
/// assert!(Position::try_new(9, 0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in 0-8. Use [`Position::try_new`] for
    /// input that has not been validated yet.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "position out of range");
        Self { row, col }
    }

    /// Creates a position, or `None` if `row` or `col` is not in 0-8.
    #[must_use]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < 9 && col < 9 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the top-left cell of the 3×3 block containing this position.
    ///
    /// Block boundaries are `(row / 3 * 3, col / 3 * 3)`.
    #[must_use]
    pub const fn block_origin(self) -> Self {
        Self {
            row: self.row / 3 * 3,
            col: self.col / 3 * 3,
        }
    }

    /// Iterates over the nine cells of the 3×3 block containing this position.
    pub fn block_cells(self) -> impl Iterator<Item = Self> {
        let origin = self.block_origin();
        (origin.row..origin.row + 3)
            .flat_map(move |row| (origin.col..origin.col + 3).map(move |col| Self { row, col }))
    }

    /// Iterates over all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..9).flat_map(|row| (0..9).map(move |col| Self { row, col }))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
