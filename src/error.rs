//! Error types for store commands and configuration.
//!
//! Rule functions are total and never fail. Store commands reject requests
//! that break their preconditions instead of silently corrupting state.

use crate::core::{Move, Piece, PieceType, PlayerColor, Position};

/// Errors raised by store commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A position given to a command lies off the board.
    #[error("position {position} is outside the {size}x{size} board")]
    OutOfBounds { position: Position, size: usize },

    /// The placing side has no pieces of this type left.
    #[error("{color} has no {piece_type} left to place")]
    SupplyExhausted {
        color: PlayerColor,
        piece_type: PieceType,
    },

    /// A placement targeted an occupied cell.
    #[error("cell {0} is already occupied")]
    CellOccupied(Position),

    /// The source square does not hold the piece the move names.
    #[error("no {expected} at {position}")]
    PieceMismatch {
        position: Position,
        expected: Piece,
    },

    /// The move breaks the piece's movement rule.
    #[error("illegal move: {0}")]
    IllegalMove(Move),

    /// The moving side is not the side to move.
    #[error("it is {expected}'s turn, not {actual}'s")]
    WrongTurn {
        expected: PlayerColor,
        actual: PlayerColor,
    },

    /// The game already has a winner.
    #[error("game is over, {0} has won")]
    GameOver(PlayerColor),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl GameError {
    /// Is this an "invalid precondition" error, i.e. a request the store
    /// could not even mechanically carry out?
    ///
    /// The remaining variants are rule rejections raised by checked play.
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            GameError::OutOfBounds { .. } | GameError::SupplyExhausted { .. } | GameError::Config(_)
        )
    }
}

/// Errors that can occur when validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size must be at least 1")]
    ZeroBoardSize,

    #[error("win length must be at least 1")]
    ZeroWinLength,

    /// A serialized board whose cell list does not match its side length.
    #[error("a {size}x{size} board needs {expected} cells, got {actual}")]
    CellCount {
        size: usize,
        expected: usize,
        actual: usize,
    },
}

/// Result type alias for store commands.
pub type GameResult<T> = Result<T, GameError>;
