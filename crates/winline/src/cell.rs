//! Grid cells and their line coordinates.

use crate::Mark;
use serde::{Deserialize, Serialize};

/// One cell of a board snapshot.
///
/// A cell carries the line coordinates computed for it at construction:
/// the row and column it sits in, and the index of the left and right
/// diagonal running through it. Coordinates never change once the cell
/// exists, so the winner detector can bucket cells by any of them
/// without recomputation.
///
/// Diagonal indices label whole diagonals of the grid, not offsets
/// within them. Exactly one index per orientation belongs to the
/// corner-to-corner diagonal of full length; the shorter off-center
/// diagonals get their own index values, which can be negative on the
/// left orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    row: usize,
    column: usize,
    left_diagonal: i32,
    right_diagonal: i32,
    mark: Mark,
}

impl Cell {
    /// Builds the cell at flat position `index` of a `size` by `size`
    /// grid, in row-major order.
    ///
    /// Coordinates derive from the index alone, with integer division
    /// throughout:
    /// - `row = index / size` and `column = index % size`
    /// - `left_diagonal = size / 2 - row + column`
    /// - `right_diagonal = 2 * size - 1 - row - column`
    ///
    /// `size` must be at least 1 and `index` must lie inside the grid.
    pub fn from_index(index: usize, size: usize, mark: Mark) -> Self {
        debug_assert!(size > 0 && index < size * size);
        let row = index / size;
        let column = index % size;
        Self {
            row,
            column,
            left_diagonal: (size / 2) as i32 - row as i32 + column as i32,
            right_diagonal: 2 * size as i32 - 1 - row as i32 - column as i32,
            mark,
        }
    }

    /// Row the cell sits in.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column the cell sits in.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Index of the left diagonal running through this cell.
    pub fn left_diagonal(&self) -> i32 {
        self.left_diagonal
    }

    /// Index of the right diagonal running through this cell.
    pub fn right_diagonal(&self) -> i32 {
        self.right_diagonal
    }

    /// Mark occupying the cell.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns true when the cell is unclaimed.
    pub fn is_empty(&self) -> bool {
        self.mark.is_empty()
    }
}
