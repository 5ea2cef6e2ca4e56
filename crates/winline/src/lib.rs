//! Immutable square-board snapshots with winning line detection.
//!
//! A [`Board`] holds one read-only snapshot of an N by N grid of
//! naughts and crosses, parsed from a comma-separated token encoding.
//! [`declare_winner`] scans the full-length lines of the grid (each
//! row and column plus the two corner-to-corner diagonals) and names
//! the mark holding one of them uniformly, at any board size.
//!
//! The board is a snapshot, not a game engine: construction accepts
//! any mix of marks and nothing enforces turn order or move legality.
//!
//! # Example
//!
//! ```
//! use winline::{declare_winner, Board, Mark};
//!
//! let board: Board = "x,x,x,o,o, , , , ".parse()?;
//! assert_eq!(declare_winner(&board), Mark::Cross);
//! assert_eq!(board.winner(), Some(Mark::Cross));
//! # Ok::<(), winline::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod mark;
mod rules;
mod verification;

pub use board::{Board, BoardError};
pub use cell::Cell;
pub use mark::Mark;
pub use rules::{declare_winner, is_draw, is_full};
