//! Kani model-checking harnesses for construction and detection.
//!
//! These harnesses let Kani explore all cell layouts within small
//! bounds and prove the coordinate formulas and the totality of the
//! winner scan.

#[cfg(kani)]
impl kani::Arbitrary for crate::Mark {
    fn any() -> Self {
        let value: u8 = kani::any();
        kani::assume(value < 3);
        match value {
            0 => crate::Mark::Empty,
            1 => crate::Mark::Naught,
            _ => crate::Mark::Cross,
        }
    }
}

#[cfg(kani)]
mod proofs {
    use crate::{Board, Cell, Mark, declare_winner};

    /// Every constructed cell satisfies the coordinate formulas.
    #[kani::proof]
    fn verify_cell_coordinates() {
        let size: usize = kani::any();
        let index: usize = kani::any();
        kani::assume(size >= 1 && size <= 5);
        kani::assume(index < size * size);

        let cell = Cell::from_index(index, size, Mark::Empty);

        assert_eq!(cell.row(), index / size);
        assert_eq!(cell.column(), index % size);
        assert_eq!(
            cell.left_diagonal(),
            (size / 2) as i32 - cell.row() as i32 + cell.column() as i32
        );
        assert_eq!(
            cell.right_diagonal(),
            2 * size as i32 - 1 - cell.row() as i32 - cell.column() as i32
        );
    }

    /// Counts without a positive integer square root never construct.
    #[kani::proof]
    #[kani::unwind(18)]
    fn verify_non_square_counts_rejected() {
        let count: usize = kani::any();
        kani::assume(count <= 16);
        let root = count.isqrt();
        kani::assume(count == 0 || root * root != count);

        let marks = vec![Mark::Empty; count];
        assert!(Board::from_marks(marks).is_err());
    }

    /// The winner scan returns for every 2x2 layout.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_declare_winner_total() {
        let marks: [Mark; 4] = kani::any();
        let Ok(board) = Board::from_marks(marks.to_vec()) else {
            unreachable!("four cells form a square grid")
        };
        let _ = declare_winner(&board);
    }
}
