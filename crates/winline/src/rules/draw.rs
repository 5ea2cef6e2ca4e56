//! Full-board and draw queries over snapshots.

use super::win::declare_winner;
use crate::{Board, Mark};
use tracing::instrument;

/// Checks if every cell of the board is claimed.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

/// Checks if the snapshot is a draw.
///
/// A draw is a fully claimed board with no winning line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && declare_winner(board) == Mark::Empty
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(encoding: &str) -> Board {
        encoding.parse().expect("square token count")
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&board(" , , , , , , , , ")));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&board(" , , , ,x, , , , ")));
    }

    #[test]
    fn test_full_board() {
        assert!(is_full(&board("x,o,x,o,x,x,o,x,o")));
    }

    #[test]
    fn test_draw_detection() {
        // x o x / o x x / o x o: full, no line claimed.
        assert!(is_draw(&board("x,o,x,o,x,x,o,x,o")));
    }

    #[test]
    fn test_not_draw_if_winner() {
        assert!(!is_draw(&board("x,x,x,o,o, , , , ")));
    }

    #[test]
    fn test_not_draw_if_open_cells() {
        assert!(!is_draw(&board(" , , , , , , , , ")));
    }
}
