//! Rule engine: move legality and win detection.
//!
//! Everything here is a pure function of a board snapshot. The store never
//! calls into these on its plain commands; callers consult them before
//! issuing a command (or use the store's checked `play`).

pub mod movement;
pub mod winner;

pub use movement::{is_valid_move, valid_moves};
pub use winner::{check_winner, check_winner_with, winning_line, WinLine};
