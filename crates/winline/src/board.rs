//! Immutable board snapshots parsed from a token encoding.

use crate::{Cell, Mark};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Error raised when a board snapshot cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The cell count has no positive integer square root.
    #[display("a board of {} cells is not a square grid", _0)]
    InvalidSize(usize),
}

impl std::error::Error for BoardError {}

/// An immutable square grid of marked cells.
///
/// A board is a snapshot: it is built once from a flat sequence of
/// cell tokens and never changes afterwards. It records no move
/// history and enforces no turn-taking, so any mix of marks is
/// accepted, including layouts unreachable in real play.
///
/// Cells are stored in row-major order with their row, column, and
/// diagonal coordinates baked in at construction (see [`Cell`]).
///
/// Snapshots serialize as their bare mark sequence and rebuild through
/// [`Board::from_marks`] when deserialized, so decoded boards satisfy
/// the square-count invariant and carry derived coordinates only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Mark>", into = "Vec<Mark>")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

// ─────────────────────────────────────────────────────────────
//  Construction
// ─────────────────────────────────────────────────────────────

impl Board {
    /// Builds a board from pre-parsed marks in row-major order.
    ///
    /// The mark count must be N² for a positive N; anything else,
    /// including an empty sequence, is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] carrying the offending
    /// count when it has no positive integer square root.
    #[instrument(skip(marks), fields(cells = marks.len()))]
    pub fn from_marks(marks: Vec<Mark>) -> Result<Self, BoardError> {
        let count = marks.len();
        let size = count.isqrt();
        if size == 0 || size * size != count {
            return Err(BoardError::InvalidSize(count));
        }

        let cells = marks
            .into_iter()
            .enumerate()
            .map(|(index, mark)| Cell::from_index(index, size, mark))
            .collect();

        debug!(size, "board constructed");
        Ok(Self { size, cells })
    }

    /// Builds a board from single-cell tokens in row-major order.
    ///
    /// Tokens map through [`Mark::from_token`], so unrecognized
    /// tokens land as empty cells rather than failing.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] when the token count is
    /// not a perfect square.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_marks(
            tokens
                .into_iter()
                .map(|token| Mark::from_token(token.as_ref()))
                .collect(),
        )
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses a comma-separated encoding such as `" ,o,x,x,o,o, ,x, "`.
    ///
    /// Tokens are split on `','` without trimming. An empty string
    /// splits into one empty token and parses as a 1×1 empty board.
    fn from_str(encoding: &str) -> Result<Self, Self::Err> {
        Self::from_tokens(encoding.split(','))
    }
}

impl TryFrom<Vec<Mark>> for Board {
    type Error = BoardError;

    /// Revalidates marks arriving through deserialization.
    fn try_from(marks: Vec<Mark>) -> Result<Self, Self::Error> {
        Self::from_marks(marks)
    }
}

impl From<Board> for Vec<Mark> {
    fn from(board: Board) -> Self {
        board.cells.into_iter().map(|cell| cell.mark()).collect()
    }
}

// ─────────────────────────────────────────────────────────────
//  Snapshot queries
// ─────────────────────────────────────────────────────────────

impl Board {
    /// Width and height of the square grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mark at the given row and column, if both are in bounds.
    pub fn mark_at(&self, row: usize, column: usize) -> Option<Mark> {
        if row < self.size && column < self.size {
            Some(self.cells[row * self.size + column].mark())
        } else {
            None
        }
    }

    /// Winner of the snapshot, if some full line is claimed.
    ///
    /// Optional-shaped convenience over [`crate::declare_winner`].
    pub fn winner(&self) -> Option<Mark> {
        match crate::rules::declare_winner(self) {
            Mark::Empty => None,
            mark => Some(mark),
        }
    }

    /// Counts the cells holding the given mark.
    pub fn count_of(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|cell| cell.mark() == mark).count()
    }

    /// Tallies every mark across the grid, empties included.
    pub fn tally(&self) -> Vec<(Mark, usize)> {
        Mark::iter().map(|mark| (mark, self.count_of(mark))).collect()
    }
}

// ─────────────────────────────────────────────────────────────
//  Rendering
// ─────────────────────────────────────────────────────────────

impl std::fmt::Display for Board {
    /// Formats the grid with `|` between cells and `-+-` separator
    /// rows, empty cells as spaces:
    ///
    /// ```text
    ///  |o|x
    /// -+-+-
    /// x|o|o
    /// -+-+-
    ///  |x|
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = vec!["-"; self.size].join("+");
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "{}", rule)?;
            }
            for column in 0..self.size {
                if column > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", self.cells[row * self.size + column].mark())?;
            }
        }
        Ok(())
    }
}
