//! Cell occupancy marks.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Occupant of a single board cell.
///
/// `Empty` is a value in its own right, not an error state: the winner
/// detector reports it when no line is claimed, and unrecognized input
/// tokens fall back to it during parsing.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Mark {
    /// Unclaimed cell.
    #[default]
    Empty,
    /// A naught, read from the token `"o"`.
    Naught,
    /// A cross, read from the token `"x"`.
    Cross,
}

impl Mark {
    /// Maps a single-cell token to its mark.
    ///
    /// Only `"x"` and `"o"` name playable marks, and the match is
    /// exact: no trimming, no case folding. Every other token,
    /// whitespace and padded variants like `" x"` included, reads as
    /// an empty cell rather than an error.
    #[instrument]
    pub fn from_token(token: &str) -> Self {
        match token {
            "x" => Mark::Cross,
            "o" => Mark::Naught,
            _ => Mark::Empty,
        }
    }

    /// Returns true for the unclaimed mark.
    pub fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }

    /// The token this mark reads back as.
    pub fn token(self) -> &'static str {
        match self {
            Mark::Empty => " ",
            Mark::Naught => "o",
            Mark::Cross => "x",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
