//! Rules for reading board snapshots.
//!
//! Pure functions that inspect a snapshot and report on its state.
//! Rules stay separate from board storage so the grid remains a plain
//! value and the queries compose freely.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::declare_winner;
