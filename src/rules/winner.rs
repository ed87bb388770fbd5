//! Win detection.
//!
//! A side wins with `win_length` contiguous same-colored pieces along a row,
//! a column or either diagonal direction. The window slides over the whole
//! board, so on boards larger than the run length any sub-run counts.
//!
//! ## Scan order
//!
//! 1. Rows, top to bottom, windows left to right
//! 2. Columns, left to right, windows top to bottom
//! 3. Down-right diagonals, starting cells row-major
//! 4. Down-left diagonals, starting cells row-major
//!
//! The first run found decides the result.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, PlayerColor, Position, WIN_LENGTH};

/// Line directions as (row step, col step), in scan order.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A winning run: who made it and which cells it covers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    pub color: PlayerColor,

    /// Cells of the run in order along its direction.
    /// Inline storage covers the default run length.
    pub cells: SmallVec<[Position; WIN_LENGTH]>,
}

/// Return the color owning a run of `WIN_LENGTH` cells, if any.
///
/// ```
/// use gridchess::core::{Board, Piece, PieceType, PlayerColor, Position};
/// use gridchess::rules::check_winner;
///
/// let mut board = Board::new(3);
/// assert_eq!(check_winner(&board), None);
///
/// for col in 0..3 {
///     board.set(Position::new(0, col), Some(Piece::black(PieceType::Pawn)));
/// }
/// assert_eq!(check_winner(&board), Some(PlayerColor::Black));
/// ```
#[must_use]
pub fn check_winner(board: &Board) -> Option<PlayerColor> {
    check_winner_with(board, WIN_LENGTH)
}

/// Like [`check_winner`] with a custom run length.
#[must_use]
pub fn check_winner_with(board: &Board, win_length: usize) -> Option<PlayerColor> {
    winning_line(board, win_length).map(|line| line.color)
}

/// Find the first winning run in scan order.
#[must_use]
pub fn winning_line(board: &Board, win_length: usize) -> Option<WinLine> {
    if win_length == 0 || win_length > board.size() {
        return None;
    }

    DIRECTIONS.iter().find_map(|&direction| {
        scan_starts(board.size(), direction)
            .find_map(|start| run_from(board, start, direction, win_length))
    })
}

/// Candidate starting cells for one direction, in scan order.
fn scan_starts(size: usize, (step_row, step_col): (isize, isize)) -> impl Iterator<Item = Position> {
    let column_major = step_row == 1 && step_col == 0;
    (0..size).flat_map(move |outer| {
        (0..size).map(move |inner| {
            if column_major {
                Position::new(inner, outer)
            } else {
                Position::new(outer, inner)
            }
        })
    })
}

/// Check for a run of `win_length` same-colored pieces starting at `start`.
fn run_from(
    board: &Board,
    start: Position,
    (step_row, step_col): (isize, isize),
    win_length: usize,
) -> Option<WinLine> {
    let color = board.get(start)?.color;

    let mut cells = SmallVec::new();
    cells.push(start);

    let mut current = start;
    for _ in 1..win_length {
        current = current.offset(step_row, step_col)?;
        if board.get(current)?.color != color {
            return None;
        }
        cells.push(current);
    }

    Some(WinLine { color, cells })
}
