//! Piece movement rules.
//!
//! Pure functions over a board snapshot. Legality is geometry plus
//! occupancy only: there is no king, no check and no notion of moving into
//! danger.

use crate::core::{Board, Piece, PieceType, PlayerColor, Position};

/// Check if moving `piece` from `from` to `to` is legal on `board`.
///
/// Rejects, for every piece type:
/// - destinations off the board
/// - a destination equal to the source
/// - destinations holding a piece of the mover's color
///
/// Opposite-color pieces at the destination may be captured by any type.
///
/// ```
/// use gridchess::core::{Board, Piece, PieceType, Position};
/// use gridchess::rules::is_valid_move;
///
/// let board = Board::new(3);
/// let knight = Piece::white(PieceType::Knight);
/// assert!(is_valid_move(&board, Position::new(2, 0), Position::new(0, 1), knight));
/// assert!(!is_valid_move(&board, Position::new(2, 0), Position::new(1, 1), knight));
/// ```
#[must_use]
pub fn is_valid_move(board: &Board, from: Position, to: Position, piece: Piece) -> bool {
    if !board.contains(to) {
        return false;
    }

    if from == to {
        return false;
    }

    // Can't capture your own pieces
    if let Some(target) = board.get(to) {
        if target.color == piece.color {
            return false;
        }
    }

    let Some((d_row, d_col)) = from.delta(to) else {
        return false;
    };

    let shape_ok = match piece.piece_type {
        PieceType::Pawn => is_valid_pawn_move(board, to, d_row, d_col, piece.color),
        PieceType::Knight => is_knight_shape(d_row, d_col),
        PieceType::Bishop => is_diagonal(d_row, d_col),
        PieceType::Rook => is_straight(d_row, d_col),
        PieceType::Queen => is_straight(d_row, d_col) || is_diagonal(d_row, d_col),
    };

    shape_ok && (!piece.piece_type.is_slider() || is_path_clear(board, from, d_row, d_col))
}

/// All legal destinations for `piece` standing at `position`, row-major.
#[must_use]
pub fn valid_moves(board: &Board, position: Position, piece: Piece) -> Vec<Position> {
    board
        .positions()
        .filter(|&to| is_valid_move(board, position, to, piece))
        .collect()
}

fn is_valid_pawn_move(board: &Board, to: Position, d_row: isize, d_col: isize, color: PlayerColor) -> bool {
    if d_row != color.forward() {
        return false;
    }

    match d_col.abs() {
        // Straight ahead onto an empty cell
        0 => board.get(to).is_none(),
        // Diagonal capture only
        1 => board.get(to).is_some(),
        _ => false,
    }
}

fn is_knight_shape(d_row: isize, d_col: isize) -> bool {
    let (d_row, d_col) = (d_row.abs(), d_col.abs());
    (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2)
}

fn is_diagonal(d_row: isize, d_col: isize) -> bool {
    d_row.abs() == d_col.abs()
}

fn is_straight(d_row: isize, d_col: isize) -> bool {
    d_row == 0 || d_col == 0
}

/// Are all cells strictly between `from` and `from + (d_row, d_col)` empty?
///
/// Only meaningful for straight or diagonal lines with a non-zero delta.
/// Scans the occupied cells instead of walking the line.
fn is_path_clear(board: &Board, from: Position, d_row: isize, d_col: isize) -> bool {
    let steps = d_row.abs().max(d_col.abs());
    let (step_row, step_col) = (d_row.signum(), d_col.signum());

    board.pieces().all(|(pos, _)| match from.delta(pos) {
        Some((r, c)) => {
            let k = r.abs().max(c.abs());
            !(k > 0 && k < steps && r == step_row * k && c == step_col * k)
        }
        None => true,
    })
}
