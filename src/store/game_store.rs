//! The game store: one mutable game state plus its subscribers.
//!
//! Every command is an atomic read-modify-publish step: it either rejects
//! with a `GameError` and leaves the state untouched, or it mutates the
//! state and hands the new snapshot to every subscriber before returning.
//!
//! The plain commands (`place_piece`, `move_piece`, ...) do not consult the
//! rule engine. Callers check legality first, or go through `play`, which
//! validates, commits and checks for a winner in one call.

use tracing::{debug, info, warn};

use crate::core::{GameConfig, GameState, Move, Piece, PlayerColor, Position, Selection};
use crate::error::{ConfigError, GameError, GameResult};
use crate::rules;

use super::subscribers::{SubscriberRegistry, SubscriptionId};

/// Owner of the live game state.
///
/// ## Example
///
/// ```
/// use gridchess::core::{Move, Piece, PieceType, PlayerColor, Position};
/// use gridchess::store::GameStore;
///
/// let mut store = GameStore::new();
/// store.play(Move::place(Piece::white(PieceType::Pawn), Position::new(2, 0))).unwrap();
///
/// assert_eq!(store.state().current_player, PlayerColor::Black);
/// ```
#[derive(Debug)]
pub struct GameStore {
    config: GameConfig,
    state: GameState,
    subscribers: SubscriberRegistry,
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStore {
    /// Create a store with the default 3×3 configuration.
    #[must_use]
    pub fn new() -> Self {
        let config = GameConfig::default();
        Self {
            state: GameState::new(&config),
            config,
            subscribers: SubscriberRegistry::new(),
        }
    }

    /// Create a store from a configuration.
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(&config),
            config,
            subscribers: SubscriberRegistry::new(),
        })
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    // === Subscriptions ===

    /// Register a callback for state changes.
    ///
    /// The callback receives the current state immediately, then the new
    /// state after every committed command.
    pub fn subscribe(&mut self, mut callback: impl FnMut(&GameState) + 'static) -> SubscriptionId {
        callback(&self.state);
        let id = self.subscribers.register(Box::new(callback));
        debug!(subscription = %id, "subscriber registered");
        id
    }

    /// Remove a subscriber. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unregister(id)
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    // === Commands ===

    /// Replace the state with a fresh game on a `size`×`size` board.
    pub fn reset(&mut self, size: usize) -> GameResult<()> {
        if size == 0 {
            return Err(self.reject(ConfigError::ZeroBoardSize.into()));
        }

        let config = GameConfig {
            board_size: size,
            ..self.config.clone()
        };
        self.state = GameState::new(&config);
        info!(size, "game reset");
        self.publish();
        Ok(())
    }

    /// Reset using the configured board size.
    pub fn reset_default(&mut self) {
        self.state = GameState::new(&self.config);
        info!(size = self.config.board_size, "game reset");
        self.publish();
    }

    /// Pick up a piece for movement.
    ///
    /// Does not check that `piece` actually stands on `position`.
    pub fn select_piece(&mut self, piece: Piece, position: Position) {
        self.state.selection = Some(Selection { piece, position });
        debug!(%piece, %position, "piece selected");
        self.publish();
    }

    /// Drop the current selection.
    pub fn clear_selection(&mut self) {
        self.state.selection = None;
        debug!("selection cleared");
        self.publish();
    }

    /// Put a piece from its color's supply onto the board.
    ///
    /// Overwrites the cell without a legality check. Consumes one piece of
    /// that type from the placing color, passes the turn and clears the
    /// selection. Never checks for a winner.
    pub fn place_piece(&mut self, piece: Piece, position: Position) -> GameResult<()> {
        self.check_bounds(position)?;

        if self.state.available[piece.color].take(piece.piece_type).is_none() {
            return Err(self.reject(GameError::SupplyExhausted {
                color: piece.color,
                piece_type: piece.piece_type,
            }));
        }

        self.state.board.set(position, Some(piece));
        self.state.advance_turn();
        self.state.selection = None;

        debug!(
            %piece,
            %position,
            remaining = self.state.supply(piece.color).count(piece.piece_type),
            next = %self.state.current_player,
            "piece placed"
        );
        self.publish();
        Ok(())
    }

    /// Move whatever stands on `from` to `to`.
    ///
    /// The destination is overwritten (capture). An empty source empties the
    /// destination. No legality check. While the board holds no pieces at
    /// all this is a no-op: the opening move must be a placement.
    pub fn move_piece(&mut self, from: Position, to: Position) -> GameResult<()> {
        self.check_bounds(from)?;
        self.check_bounds(to)?;

        if self.state.board.is_empty() {
            debug!(%from, %to, "move ignored on empty board");
            return Ok(());
        }

        let piece = self.state.board.take(from);
        let captured = self.state.board.set(to, piece);
        self.state.advance_turn();
        self.state.selection = None;

        debug!(
            %from,
            %to,
            captured = ?captured,
            next = %self.state.current_player,
            "piece moved"
        );
        self.publish();
        Ok(())
    }

    /// Record the winner.
    ///
    /// Board and turn stay as they were. A winner, once set, stands until
    /// reset; later calls are ignored.
    pub fn set_winner(&mut self, color: PlayerColor) {
        if let Some(existing) = self.state.winner {
            if existing != color {
                warn!(%existing, requested = %color, "winner already decided");
            }
            return;
        }

        self.state.winner = Some(color);
        info!(winner = %color, "game won");
        self.publish();
    }

    // === Checked play ===

    /// Validate and commit a move, then check for a winner.
    ///
    /// Returns the winner if this move decided the game. A rejected move
    /// leaves the state untouched and publishes nothing.
    pub fn play(&mut self, mv: Move) -> GameResult<Option<PlayerColor>> {
        if let Some(winner) = self.state.winner {
            return Err(self.reject(GameError::GameOver(winner)));
        }

        if mv.piece.color != self.state.current_player {
            return Err(self.reject(GameError::WrongTurn {
                expected: self.state.current_player,
                actual: mv.piece.color,
            }));
        }

        self.check_bounds(mv.to)?;

        match mv.from {
            None => {
                if self.state.board.get(mv.to).is_some() {
                    return Err(self.reject(GameError::CellOccupied(mv.to)));
                }
                self.place_piece(mv.piece, mv.to)?;
            }
            Some(from) => {
                self.check_bounds(from)?;
                if self.state.board.get(from) != Some(mv.piece) {
                    return Err(self.reject(GameError::PieceMismatch {
                        position: from,
                        expected: mv.piece,
                    }));
                }
                if !rules::is_valid_move(&self.state.board, from, mv.to, mv.piece) {
                    return Err(self.reject(GameError::IllegalMove(mv)));
                }
                self.move_piece(from, mv.to)?;
            }
        }

        let winner = rules::check_winner_with(&self.state.board, self.config.win_length);
        if let Some(color) = winner {
            self.set_winner(color);
        }
        Ok(winner)
    }

    /// Legal destinations for the selected piece, row-major.
    ///
    /// Empty when nothing is selected.
    #[must_use]
    pub fn legal_moves_for_selection(&self) -> Vec<Position> {
        match self.state.selection {
            Some(Selection { piece, position }) => {
                rules::valid_moves(&self.state.board, position, piece)
            }
            None => Vec::new(),
        }
    }

    // === Helpers ===

    fn check_bounds(&self, position: Position) -> GameResult<()> {
        if self.state.board.contains(position) {
            Ok(())
        } else {
            Err(self.reject(GameError::OutOfBounds {
                position,
                size: self.state.board_size(),
            }))
        }
    }

    fn reject(&self, err: GameError) -> GameError {
        warn!(error = %err, "command rejected");
        err
    }

    fn publish(&mut self) {
        self.subscribers.publish(&self.state);
    }
}
