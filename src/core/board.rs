//! Square board of optional pieces.
//!
//! Cells are stored row-major in an `im::Vector`, so cloning a board (and
//! therefore a whole state snapshot) is O(1) and shares structure with the
//! board it was cloned from.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::position::Position;
use crate::error::ConfigError;

/// An N×N grid where each cell is empty or holds exactly one piece.
///
/// Deserialization checks that the cell list matches the side length, so a
/// board read from JSON is always safe to index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    size: usize,
    cells: Vector<Option<Piece>>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct BoardRepr {
    size: usize,
    cells: Vector<Option<Piece>>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = ConfigError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        if repr.size == 0 {
            return Err(ConfigError::ZeroBoardSize);
        }
        let expected = repr.size.saturating_mul(repr.size);
        if repr.cells.len() != expected {
            return Err(ConfigError::CellCount {
                size: repr.size,
                expected,
                actual: repr.cells.len(),
            });
        }
        Ok(Self {
            size: repr.size,
            cells: repr.cells,
        })
    }
}

impl Board {
    /// Create an empty board of `size`×`size` cells.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero. Use [`Board::try_new`] for unchecked input.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board must have at least one cell");

        Self {
            size,
            cells: std::iter::repeat(None).take(size * size).collect(),
        }
    }

    /// Create an empty board, rejecting a zero size.
    pub fn try_new(size: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::ZeroBoardSize);
        }
        Ok(Self::new(size))
    }

    /// Create a board with the given pieces placed.
    ///
    /// ```
    /// use gridchess::core::{Board, Piece, PieceType, Position};
    ///
    /// let board = Board::with_pieces(3, &[(Position::new(1, 1), Piece::white(PieceType::Rook))]);
    /// assert_eq!(board.get(Position::new(1, 1)), Some(Piece::white(PieceType::Rook)));
    /// assert_eq!(board.piece_count(), 1);
    /// ```
    #[must_use]
    pub fn with_pieces(size: usize, pieces: &[(Position, Piece)]) -> Self {
        let mut board = Self::new(size);
        for &(pos, piece) in pieces {
            board.set(pos, Some(piece));
        }
        board
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Does `pos` lie inside the board?
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn index_of(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    /// Get the piece at a cell. Off-board cells read as empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        if !self.contains(pos) {
            return None;
        }
        self.cells[self.index_of(pos)]
    }

    /// Is the cell on the board and empty?
    #[must_use]
    pub fn is_vacant(&self, pos: Position) -> bool {
        self.contains(pos) && self.get(pos).is_none()
    }

    /// Overwrite a cell, returning its previous content.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board.
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) -> Option<Piece> {
        assert!(
            self.contains(pos),
            "Position {} outside {}x{} board",
            pos,
            self.size,
            self.size
        );
        let idx = self.index_of(pos);
        self.cells.set(idx, piece)
    }

    /// Empty a cell, returning what was there.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board.
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        self.set(pos, None)
    }

    /// Does the board hold no pieces at all?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// All cell coordinates in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.positions()
            .filter_map(move |pos| self.get(pos).map(|piece| (pos, piece)))
    }

    /// Cells as nested rows, top row first.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Option<Piece>>> {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| self.get(Position::new(row, col)))
                    .collect()
            })
            .collect()
    }
}

impl std::fmt::Display for Board {
    /// One line per row. White pieces upper case, black lower case, `.` empty.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use super::piece::PieceType;
        use super::player::PlayerColor;

        for row in 0..self.size {
            for col in 0..self.size {
                let ch = match self.get(Position::new(row, col)) {
                    None => '.',
                    Some(piece) => {
                        let ch = match piece.piece_type {
                            PieceType::Rook => 'r',
                            PieceType::Bishop => 'b',
                            PieceType::Knight => 'n',
                            PieceType::Pawn => 'p',
                            PieceType::Queen => 'q',
                        };
                        match piece.color {
                            PlayerColor::White => ch.to_ascii_uppercase(),
                            PlayerColor::Black => ch,
                        }
                    }
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
