//! Move representation: placement or relocation.
//!
//! A move always names the piece and its destination. Placements come from
//! the supply and have no source square; relocations do.
//!
//! - "Place a white pawn at (2, 0)" = `Move::place(piece, to)`
//! - "Move the white rook from (2, 0) to (0, 0)" = `Move::relocate(piece, from, to)`

use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::position::Position;

/// A complete move request.
///
/// ## Example
///
/// ```
/// use gridchess::core::{Move, Piece, PieceType, Position};
///
/// let drop = Move::place(Piece::white(PieceType::Pawn), Position::new(2, 0));
/// assert!(drop.is_placement());
///
/// let step = Move::relocate(Piece::white(PieceType::Pawn), Position::new(2, 0), Position::new(1, 0));
/// assert_eq!(step.from, Some(Position::new(2, 0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Source square. `None` for placements from the supply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Position>,

    /// Destination square.
    pub to: Position,

    /// The piece being placed or moved.
    pub piece: Piece,
}

impl Move {
    /// Create a placement from the supply.
    #[must_use]
    pub const fn place(piece: Piece, to: Position) -> Self {
        Self {
            from: None,
            to,
            piece,
        }
    }

    /// Create a relocation of a piece already on the board.
    #[must_use]
    pub const fn relocate(piece: Piece, from: Position, to: Position) -> Self {
        Self {
            from: Some(from),
            to,
            piece,
        }
    }

    #[must_use]
    pub const fn is_placement(&self) -> bool {
        self.from.is_none()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.from {
            None => write!(f, "place {} at {}", self.piece, self.to),
            Some(from) => write!(f, "{} {} -> {}", self.piece, from, self.to),
        }
    }
}
