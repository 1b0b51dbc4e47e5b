//! Game session logic for Tablero.
//!
//! [`Game`] owns one live puzzle: the mutable board, the given-cell mask
//! recorded at load time, and the erase budget. Inserts go through the full
//! rule check (occupancy, then row, column, and block duplicates, in that
//! order); erases are bounded by [`MAX_ERASES`] per game. A game is won when
//! the board has no empty cell left — every digit on the board got there
//! through a validated insert, so a full board is a valid solution.
//!
//! Construct one `Game` per session; all operations are methods on the value,
//! so callers that share a game across threads wrap it in their own lock.

pub use self::game::{EraseError, Game, MAX_ERASES, MoveError};

mod game;
