//! Game configuration.
//!
//! A `GameConfig` fixes the shape of a game before it starts:
//! - `board_size`: side length of the square board (default 3)
//! - `win_length`: length of a winning run (default 3)
//! - `supply`: pieces each side may place (default: the standard table)
//!
//! The store keeps its config and uses it on every reset.

use serde::{Deserialize, Serialize};

use super::piece::{PieceSupply, PieceType};
use crate::error::ConfigError;

/// Default side length.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Number of same-colored cells in a row needed to win.
pub const WIN_LENGTH: usize = 3;

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use gridchess::core::{GameConfig, PieceType};
///
/// let config = GameConfig::new()
///     .with_board_size(5)
///     .with_piece_count(PieceType::Queen, 2);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.board_size, 5);
/// assert_eq!(config.supply.count(PieceType::Queen), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the board.
    pub board_size: usize,

    /// Run length checked for a win.
    pub win_length: usize,

    /// Starting supply for each color.
    pub supply: PieceSupply,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            win_length: WIN_LENGTH,
            supply: PieceSupply::standard(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size (builder pattern).
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the winning run length (builder pattern).
    #[must_use]
    pub fn with_win_length(mut self, length: usize) -> Self {
        self.win_length = length;
        self
    }

    /// Replace the starting supply (builder pattern).
    #[must_use]
    pub fn with_supply(mut self, supply: PieceSupply) -> Self {
        self.supply = supply;
        self
    }

    /// Override one entry of the starting supply (builder pattern).
    #[must_use]
    pub fn with_piece_count(mut self, piece_type: PieceType, count: u32) -> Self {
        self.supply.set_count(piece_type, count);
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::ZeroBoardSize);
        }
        if self.win_length == 0 {
            return Err(ConfigError::ZeroWinLength);
        }
        Ok(())
    }
}
