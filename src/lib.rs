//! # rust-gridchess
//!
//! Chess piece movement on a small square board with a tic-tac-toe win
//! condition: three same-colored pieces in a row, column or diagonal win.
//!
//! ## Design Principles
//!
//! 1. **Rules Are Pure**: Legality and win detection are functions of a
//!    board snapshot. They never mutate and never fail.
//!
//! 2. **One Mutable State**: The store owns the only live `GameState` and is
//!    its sole mutator. Every commit is published to subscribers.
//!
//! 3. **Size-Parameterized**: The board is N×N (default 3×3). Win runs slide
//!    over the whole board, so larger boards work unchanged.
//!
//! ## Modules
//!
//! - `core`: Colors, pieces, positions, board, moves, state, configuration
//! - `rules`: Move legality (`is_valid_move`, `valid_moves`) and win
//!   detection (`check_winner`)
//! - `store`: `GameStore` commands and subscriptions
//! - `error`: Error types for store commands and configuration

pub mod core;
pub mod rules;
pub mod store;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Board, ColorMap, GameConfig, GameState, Move, Piece, PieceSupply, PieceType,
    PlayerColor, Position, Selection,
};

pub use crate::rules::{check_winner, check_winner_with, is_valid_move, valid_moves, winning_line, WinLine};

pub use crate::store::{GameStore, SubscriptionId};

pub use crate::error::{ConfigError, GameError, GameResult};
