//! The fixed puzzle pool that supplies Tablero's boards.
//!
//! The pool holds exactly ten pre-authored 9×9 puzzles. A new game (and every
//! reset) selects one of them uniformly at random and hands out a fresh
//! mutable copy; the pool itself never changes after construction, so
//! selection can never fail once the pool has been built.
//!
//! Two sources are supported:
//!
//! - [`PuzzlePool::builtin`]: the boards compiled into the binary from
//!   `assets/boards/board{1..10}.txt`,
//! - [`PuzzlePool::from_dir`]: the same file layout read from disk, kept as a
//!   compatibility surface for externally authored pools.
//!
//! Puzzles are trusted as pre-authored: the pool validates shape and cell
//! values, not solvability or uniqueness of solution.

use std::{fs, io, path::Path};

use derive_more::{Display, Error};
use rand::{Rng, RngExt};
use tablero_core::{Board, ParseBoardError};

/// Number of puzzles in a pool. Board files are numbered 1 through 10.
pub const POOL_SIZE: usize = 10;

const BUILTIN_BOARDS: [&str; POOL_SIZE] = [
    include_str!("../../../assets/boards/board1.txt"),
    include_str!("../../../assets/boards/board2.txt"),
    include_str!("../../../assets/boards/board3.txt"),
    include_str!("../../../assets/boards/board4.txt"),
    include_str!("../../../assets/boards/board5.txt"),
    include_str!("../../../assets/boards/board6.txt"),
    include_str!("../../../assets/boards/board7.txt"),
    include_str!("../../../assets/boards/board8.txt"),
    include_str!("../../../assets/boards/board9.txt"),
    include_str!("../../../assets/boards/board10.txt"),
];

/// Error returned when a puzzle pool cannot be loaded.
///
/// `index` is the 1-based board number, matching the `board{index}.txt` file
/// names.
#[derive(Debug, Display, Error)]
pub enum PoolError {
    /// A board file could not be read.
    #[display("failed to read puzzle {index}: {source}")]
    Read {
        /// 1-based board number.
        index: usize,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A board file did not contain a well-formed 9×9 grid.
    #[display("puzzle {index} is malformed: {source}")]
    Malformed {
        /// 1-based board number.
        index: usize,
        /// Underlying parse error.
        source: ParseBoardError,
    },
}

/// The fixed pool of [`POOL_SIZE`] puzzles.
///
/// # Examples
///
/// ```
/// use tablero_pool::{POOL_SIZE, PuzzlePool};
///
/// let pool = PuzzlePool::builtin().unwrap();
/// assert_eq!(pool.len(), POOL_SIZE);
///
/// let board = pool.pick(&mut rand::rng());
/// assert!(!board.is_full());
/// ```
#[derive(Debug, Clone)]
pub struct PuzzlePool {
    boards: Vec<Board>,
}

impl PuzzlePool {
    /// Builds the pool from the boards embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Malformed`] if an embedded board does not parse.
    /// This only happens when the bundled assets are broken, so it is fatal
    /// at startup.
    pub fn builtin() -> Result<Self, PoolError> {
        let boards = BUILTIN_BOARDS
            .iter()
            .enumerate()
            .map(|(i, text)| {
                text.parse()
                    .map_err(|source| PoolError::Malformed { index: i + 1, source })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { boards })
    }

    /// Builds the pool from `board1.txt` through `board10.txt` in `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Read`] if a board file is missing or unreadable,
    /// or [`PoolError::Malformed`] if one does not parse.
    pub fn from_dir(dir: &Path) -> Result<Self, PoolError> {
        let boards = (1..=POOL_SIZE)
            .map(|index| {
                let path = dir.join(format!("board{index}.txt"));
                let text =
                    fs::read_to_string(&path).map_err(|source| PoolError::Read { index, source })?;
                text.parse()
                    .map_err(|source| PoolError::Malformed { index, source })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { boards })
    }

    /// Returns the number of puzzles in the pool (always [`POOL_SIZE`]).
    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Returns `true` if the pool is empty. It never is; this exists to pair
    /// with [`PuzzlePool::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Returns the board at `index` (0-based), without copying.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn board(&self, index: usize) -> &Board {
        &self.boards[index]
    }

    /// Selects a puzzle uniformly at random and returns a fresh mutable copy.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Board {
        self.boards[rng.random_range(0..self.boards.len())].clone()
    }
}
