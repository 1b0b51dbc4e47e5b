//! Core data types for the Tablero Sudoku game.
//!
//! This crate provides the board representation shared by the puzzle pool,
//! the game engine, and the HTTP server:
//!
//! - [`Digit`]: type-safe representation of the digits 1-9
//! - [`Position`]: a `(row, col)` cell coordinate on the 9×9 grid
//! - [`Board`]: the 9×9 grid itself, with the duplicate scans the game rules
//!   are built from and parsing/rendering of the puzzle text format
//!
//! # Examples
//!
//! ```
//! use tablero_core::{Board, Digit, Position};
//!
//! let mut board = Board::default();
//! let pos = Position::new(0, 2);
//! board.set(pos, Digit::D4);
//!
//! assert!(board.row_contains(0, Digit::D4));
//! assert!(!board.is_full());
//! ```

pub mod board;
pub mod digit;
pub mod position;

pub use self::{
    board::{Board, ParseBoardError},
    digit::Digit,
    position::Position,
};
