//! Game state snapshot.
//!
//! ## GameState
//!
//! Everything a UI needs to draw a position:
//! - Board and its size
//! - Side to move
//! - Current selection (piece picked up for movement)
//! - Remaining supply per color
//! - Winner, once there is one
//!
//! The board is a persistent vector, so cloning a `GameState` to hand to
//! subscribers is cheap.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::config::GameConfig;
use super::piece::{Piece, PieceSupply};
use super::player::{ColorMap, PlayerColor};
use crate::error::ConfigError;
use super::position::Position;

/// A piece picked up for movement, with where it stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub piece: Piece,
    pub position: Position,
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    pub board: Board,

    /// Side to move. White moves first.
    pub current_player: PlayerColor,

    /// Piece picked up for movement, if any.
    pub selection: Option<Selection>,

    /// Remaining placeable pieces per color.
    pub available: ColorMap<PieceSupply>,

    /// Winner, once decided.
    pub winner: Option<PlayerColor>,
}

impl GameState {
    /// Create a fresh state: empty board, White to move, full supplies.
    ///
    /// ## Defaults
    ///
    /// - `current_player`: White
    /// - `selection`: None
    /// - `available`: `config.supply` for both colors
    /// - `winner`: None
    ///
    /// # Panics
    ///
    /// Panics if `config.board_size` is zero. [`GameState::try_new`]
    /// validates the configuration first.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::new(config.board_size),
            current_player: PlayerColor::White,
            selection: None,
            available: ColorMap::with_value(config.supply.clone()),
            winner: None,
        }
    }

    /// Create a fresh state from a configuration that may be invalid.
    pub fn try_new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Side length of the board.
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Has the game been decided?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Remaining supply for a color.
    #[must_use]
    pub fn supply(&self, color: PlayerColor) -> &PieceSupply {
        &self.available[color]
    }

    /// Hand the move to the other side.
    pub(crate) fn advance_turn(&mut self) {
        self.current_player = self.current_player.other();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
