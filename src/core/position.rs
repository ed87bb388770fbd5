//! Board coordinates.
//!
//! A `Position` is a bare (row, col) pair. It does not know the board size;
//! bounds are checked by whoever indexes a board with it.

use serde::{Deserialize, Serialize};

/// Cell coordinate, row 0 at the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shift by a signed delta. Returns `None` if either coordinate would
    /// go below zero.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// Signed (row, col) difference `to - self`.
    ///
    /// Returns `None` if a coordinate does not fit in an `isize`.
    #[must_use]
    pub fn delta(self, to: Position) -> Option<(isize, isize)> {
        fn axis(from: usize, to: usize) -> Option<isize> {
            isize::try_from(to).ok()?.checked_sub(isize::try_from(from).ok()?)
        }
        Some((axis(self.row, to.row)?, axis(self.col, to.col)?))
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
