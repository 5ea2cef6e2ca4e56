//! Winner detection over board snapshots.

use crate::{Board, Cell, Mark};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Declares the winner of a board snapshot.
///
/// Scans every full-length line of the board: all rows in index order,
/// then all columns in index order, then the left diagonal, then the
/// right diagonal. The first line held entirely by one non-empty mark
/// decides the winner. Returns [`Mark::Empty`] when no line qualifies.
///
/// A board reached by real play holds at most one winning mark, so the
/// scan order is only observable for contrived inputs; it is not a
/// guaranteed tie-break.
///
/// # Example
///
/// ```
/// use winline::{declare_winner, Board, Mark};
///
/// let board: Board = "o, ,x,o,x, ,x, , ".parse()?;
/// assert_eq!(declare_winner(&board), Mark::Cross);
/// # Ok::<(), winline::BoardError>(())
/// ```
#[instrument(skip(board), fields(size = board.size()))]
pub fn declare_winner(board: &Board) -> Mark {
    let rows = group_by(board, |cell| cell.row());
    let columns = group_by(board, |cell| cell.column());
    let left_diagonals = group_by(board, |cell| cell.left_diagonal());
    let right_diagonals = group_by(board, |cell| cell.right_diagonal());

    for (index, line) in &rows {
        if let Some(winner) = line_winner(line) {
            debug!(row = *index, ?winner, "full row held by one mark");
            return winner;
        }
    }

    for (index, line) in &columns {
        if let Some(winner) = line_winner(line) {
            debug!(column = *index, ?winner, "full column held by one mark");
            return winner;
        }
    }

    if let Some(line) = full_length_diagonal(&left_diagonals, board.size())
        && let Some(winner) = line_winner(line)
    {
        debug!(?winner, "left diagonal held by one mark");
        return winner;
    }

    if let Some(line) = full_length_diagonal(&right_diagonals, board.size())
        && let Some(winner) = line_winner(line)
    {
        debug!(?winner, "right diagonal held by one mark");
        return winner;
    }

    Mark::Empty
}

/// Buckets the board's marks by a line coordinate.
///
/// Cells arrive in row-major order, so each bucket keeps its marks in
/// board order, and the BTreeMap iterates buckets in index order.
fn group_by<K, F>(board: &Board, key: F) -> BTreeMap<K, Vec<Mark>>
where
    K: Ord + Copy,
    F: Fn(&Cell) -> K,
{
    let mut groups: BTreeMap<K, Vec<Mark>> = BTreeMap::new();
    for cell in board.cells() {
        groups.entry(key(cell)).or_default().push(cell.mark());
    }
    groups
}

/// Selects the one full-length diagonal among the bucketed groups.
///
/// An N by N grid has 2N - 1 diagonals per orientation, but only the
/// corner-to-corner one spans N cells; the coordinate formulas
/// guarantee that a single bucket holds the maximum count, so the rest
/// are ignored.
fn full_length_diagonal(
    groups: &BTreeMap<i32, Vec<Mark>>,
    size: usize,
) -> Option<&Vec<Mark>> {
    let line = groups.values().max_by_key(|line| line.len())?;
    debug_assert_eq!(line.len(), size);
    Some(line)
}

/// The mark holding the whole line, if the line reduces to exactly one
/// distinct non-empty mark.
fn line_winner(line: &[Mark]) -> Option<Mark> {
    match line.split_first() {
        Some((&first, rest)) if !first.is_empty() && rest.iter().all(|mark| *mark == first) => {
            Some(first)
        }
        _ => None,
    }
}
