//! Core game types: colors, pieces, positions, board, moves, state,
//! configuration.
//!
//! These are the values exchanged between the rule engine, the store and
//! presentation code. None of them know about legality.

pub mod player;
pub mod piece;
pub mod position;
pub mod board;
pub mod config;
pub mod action;
pub mod state;

pub use player::{ColorMap, PlayerColor};
pub use piece::{Piece, PieceSupply, PieceType};
pub use position::Position;
pub use board::Board;
pub use config::{GameConfig, DEFAULT_BOARD_SIZE, WIN_LENGTH};
pub use action::Move;
pub use state::{GameState, Selection};
