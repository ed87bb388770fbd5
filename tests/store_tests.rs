//! Game store integration tests.
//!
//! These tests drive the store the way a UI does: subscribe, issue
//! commands, and inspect the published snapshots.

use std::cell::RefCell;
use std::rc::Rc;

use gridchess::core::{GameConfig, GameState, Move, Piece, PieceSupply, PieceType, PlayerColor, Position};
use gridchess::error::GameError;
use gridchess::rules::check_winner;
use gridchess::store::GameStore;

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Subscribe a recorder that keeps every published snapshot.
fn record(store: &mut GameStore) -> Rc<RefCell<Vec<GameState>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    store.subscribe(move |state| sink.borrow_mut().push(state.clone()));
    log
}

// =============================================================================
// Command Tests
// =============================================================================

/// Test that placing a white pawn on a fresh board updates every field.
#[test]
fn test_place_white_pawn_on_fresh_board() {
    let mut store = GameStore::new();

    store.place_piece(Piece::white(PieceType::Pawn), pos(0, 0)).unwrap();

    let state = store.state();
    assert_eq!(state.current_player, PlayerColor::Black);
    assert_eq!(state.board.get(pos(0, 0)), Some(Piece::white(PieceType::Pawn)));
    assert_eq!(state.supply(PlayerColor::White).count(PieceType::Pawn), 7);
    assert_eq!(state.selection, None);
}

/// Test that moving relocates the occupant and empties the source.
#[test]
fn test_move_relocates_occupant() {
    let mut store = GameStore::new();
    store.place_piece(Piece::white(PieceType::Bishop), pos(0, 0)).unwrap();

    store.move_piece(pos(0, 0), pos(1, 1)).unwrap();

    assert_eq!(store.state().board.get(pos(0, 0)), None);
    assert_eq!(store.state().board.get(pos(1, 1)), Some(Piece::white(PieceType::Bishop)));
}

/// Test that moving from an empty cell empties the destination.
#[test]
fn test_move_from_empty_source_clears_destination() {
    let mut store = GameStore::new();
    store.place_piece(Piece::black(PieceType::Rook), pos(1, 1)).unwrap();
    store.place_piece(Piece::white(PieceType::Rook), pos(2, 2)).unwrap();

    store.move_piece(pos(0, 0), pos(1, 1)).unwrap();

    assert_eq!(store.state().board.get(pos(1, 1)), None);
    assert_eq!(store.state().board.piece_count(), 1);
}

/// Test that a move captures whatever stands on the destination.
#[test]
fn test_move_captures() {
    let mut store = GameStore::new();
    store.place_piece(Piece::white(PieceType::Rook), pos(2, 0)).unwrap();
    store.place_piece(Piece::black(PieceType::Knight), pos(0, 0)).unwrap();

    store.move_piece(pos(2, 0), pos(0, 0)).unwrap();

    assert_eq!(store.state().board.get(pos(0, 0)), Some(Piece::white(PieceType::Rook)));
    assert_eq!(store.state().board.piece_count(), 1);
}

/// Test that the turn alternates on every placement and move.
#[test]
fn test_turn_alternates() {
    let mut store = GameStore::new();
    let mut expected = PlayerColor::White;

    assert_eq!(store.state().current_player, expected);

    store.place_piece(Piece::white(PieceType::Knight), pos(2, 0)).unwrap();
    expected = expected.other();
    assert_eq!(store.state().current_player, expected);

    store.place_piece(Piece::black(PieceType::Knight), pos(0, 2)).unwrap();
    expected = expected.other();
    assert_eq!(store.state().current_player, expected);

    store.move_piece(pos(2, 0), pos(0, 1)).unwrap();
    expected = expected.other();
    assert_eq!(store.state().current_player, expected);
}

/// Test that selection is set, cleared, and dropped by commits.
#[test]
fn test_selection_lifecycle() {
    let mut store = GameStore::new();
    let knight = Piece::white(PieceType::Knight);

    store.select_piece(knight, pos(2, 0));
    assert_eq!(store.state().selection.map(|s| s.position), Some(pos(2, 0)));

    store.clear_selection();
    assert_eq!(store.state().selection, None);

    store.select_piece(knight, pos(2, 0));
    store.place_piece(knight, pos(2, 0)).unwrap();
    assert_eq!(store.state().selection, None);

    store.select_piece(knight, pos(2, 0));
    store.move_piece(pos(2, 0), pos(0, 1)).unwrap();
    assert_eq!(store.state().selection, None);
}

/// Test that reset restores a fresh game of the requested size.
#[test]
fn test_reset_restores_initial_state() {
    let mut store = GameStore::new();
    store.place_piece(Piece::white(PieceType::Queen), pos(1, 1)).unwrap();
    store.set_winner(PlayerColor::White);

    store.reset(5).unwrap();

    let state = store.state();
    assert_eq!(state.board_size(), 5);
    assert!(state.board.is_empty());
    assert_eq!(state.current_player, PlayerColor::White);
    assert_eq!(state.winner, None);
    assert_eq!(state.selection, None);
    for color in PlayerColor::ALL {
        assert_eq!(state.supply(color), &PieceSupply::standard());
    }
}

/// Test that precondition failures leave the state untouched.
#[test]
fn test_precondition_errors_leave_state() {
    let mut store = GameStore::with_config(GameConfig::new().with_piece_count(PieceType::Rook, 0)).unwrap();
    let log = record(&mut store);
    let before = store.state().clone();

    let err = store.place_piece(Piece::white(PieceType::Rook), pos(0, 0)).unwrap_err();
    assert!(err.is_precondition());

    let err = store.place_piece(Piece::white(PieceType::Pawn), pos(0, 9)).unwrap_err();
    assert!(err.is_precondition());

    let err = store.move_piece(pos(9, 0), pos(0, 0)).unwrap_err();
    assert!(err.is_precondition());

    assert_eq!(store.state(), &before);
    assert_eq!(log.borrow().len(), 1);
}

// =============================================================================
// Subscription Tests
// =============================================================================

/// Test that subscribers get the current state at once and every commit after.
#[test]
fn test_subscribers_receive_every_commit() {
    let mut store = GameStore::new();
    let log = record(&mut store);

    store.select_piece(Piece::white(PieceType::Pawn), pos(2, 1));
    store.place_piece(Piece::white(PieceType::Pawn), pos(2, 1)).unwrap();
    store.clear_selection();

    let log = log.borrow();
    assert_eq!(log.len(), 4);
    assert_eq!(log[0], GameState::default());
    assert!(log[1].selection.is_some());
    assert_eq!(log[2].current_player, PlayerColor::Black);
    assert_eq!(&log[3], store.state());
}

/// Test that subscribers are notified in registration order.
#[test]
fn test_subscribers_notified_in_order() {
    let mut store = GameStore::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    for name in ["board", "sidebar", "status"] {
        let order = Rc::clone(&order);
        store.subscribe(move |_| order.borrow_mut().push(name));
    }
    order.borrow_mut().clear();

    store.set_winner(PlayerColor::Black);

    assert_eq!(*order.borrow(), vec!["board", "sidebar", "status"]);
}

/// Test that unsubscribed callbacks stop receiving updates.
#[test]
fn test_unsubscribe_stops_updates() {
    let mut store = GameStore::new();
    let calls = Rc::new(RefCell::new(0));

    let counter = Rc::clone(&calls);
    let id = store.subscribe(move |_| *counter.borrow_mut() += 1);
    assert_eq!(*calls.borrow(), 1);

    assert!(store.unsubscribe(id));
    store.place_piece(Piece::white(PieceType::Pawn), pos(2, 2)).unwrap();

    assert_eq!(*calls.borrow(), 1);
    assert_eq!(store.subscriber_count(), 0);
}

// =============================================================================
// Checked Play Tests
// =============================================================================

/// Test a short game played through `play` up to a row win.
#[test]
fn test_play_to_row_win() {
    let mut store = GameStore::new();
    let moves = [
        Move::place(Piece::white(PieceType::Pawn), pos(2, 0)),
        Move::place(Piece::black(PieceType::Pawn), pos(0, 0)),
        Move::place(Piece::white(PieceType::Knight), pos(2, 1)),
        Move::place(Piece::black(PieceType::Pawn), pos(0, 1)),
    ];
    for mv in moves {
        assert_eq!(store.play(mv).unwrap(), None);
    }

    let winner = store
        .play(Move::place(Piece::white(PieceType::Rook), pos(2, 2)))
        .unwrap();

    assert_eq!(winner, Some(PlayerColor::White));
    assert_eq!(store.state().winner, Some(PlayerColor::White));
    assert_eq!(check_winner(&store.state().board), Some(PlayerColor::White));

    let err = store
        .play(Move::place(Piece::black(PieceType::Pawn), pos(0, 2)))
        .unwrap_err();
    assert_eq!(err, GameError::GameOver(PlayerColor::White));
}

/// Test that `play` enforces turn order.
#[test]
fn test_play_wrong_turn() {
    let mut store = GameStore::new();

    let err = store
        .play(Move::place(Piece::black(PieceType::Pawn), pos(0, 0)))
        .unwrap_err();

    assert_eq!(
        err,
        GameError::WrongTurn {
            expected: PlayerColor::White,
            actual: PlayerColor::Black,
        }
    );
    assert!(!err.is_precondition());
}

/// Test that `play` refuses placements on occupied cells.
#[test]
fn test_play_rejects_occupied_placement() {
    let mut store = GameStore::new();
    store.play(Move::place(Piece::white(PieceType::Pawn), pos(1, 1))).unwrap();

    let err = store
        .play(Move::place(Piece::black(PieceType::Pawn), pos(1, 1)))
        .unwrap_err();

    assert_eq!(err, GameError::CellOccupied(pos(1, 1)));
    assert_eq!(store.state().current_player, PlayerColor::Black);
}

/// Test that `play` checks the piece on the source square and the move rule.
#[test]
fn test_play_validates_movement() {
    let mut store = GameStore::new();
    let rook = Piece::white(PieceType::Rook);
    store.play(Move::place(rook, pos(2, 0))).unwrap();
    store.play(Move::place(Piece::black(PieceType::Pawn), pos(1, 0))).unwrap();

    // Wrong piece named
    let err = store
        .play(Move::relocate(Piece::white(PieceType::Queen), pos(2, 0), pos(1, 1)))
        .unwrap_err();
    assert!(matches!(err, GameError::PieceMismatch { .. }));

    // Blocked by the black pawn
    let blocked = Move::relocate(rook, pos(2, 0), pos(0, 0));
    assert_eq!(store.play(blocked).unwrap_err(), GameError::IllegalMove(blocked));

    // Capture the blocker
    assert_eq!(store.play(Move::relocate(rook, pos(2, 0), pos(1, 0))).unwrap(), None);
    assert_eq!(store.state().board.get(pos(1, 0)), Some(rook));
    assert_eq!(store.state().current_player, PlayerColor::Black);
}

/// Test that `play` rejects placing a type with no supply left.
#[test]
fn test_play_supply_exhausted() {
    let mut store = GameStore::new();
    store.play(Move::place(Piece::white(PieceType::Queen), pos(0, 0))).unwrap();
    store.play(Move::place(Piece::black(PieceType::Pawn), pos(0, 2))).unwrap();

    let err = store
        .play(Move::place(Piece::white(PieceType::Queen), pos(2, 2)))
        .unwrap_err();

    assert!(err.is_precondition());
    assert_eq!(store.state().current_player, PlayerColor::White);
}

/// Test that a movement win publishes the move and then the winner.
#[test]
fn test_play_winning_move_publishes_twice() {
    let mut store = GameStore::new();
    let rook = Piece::white(PieceType::Rook);

    store.play(Move::place(rook, pos(0, 0))).unwrap();
    store.play(Move::place(Piece::black(PieceType::Pawn), pos(2, 2))).unwrap();
    store.play(Move::place(Piece::white(PieceType::Knight), pos(0, 1))).unwrap();
    store.play(Move::place(Piece::black(PieceType::Pawn), pos(2, 1))).unwrap();
    store.play(Move::place(rook, pos(1, 2))).unwrap();
    store.play(Move::place(Piece::black(PieceType::Knight), pos(1, 0))).unwrap();

    let log = record(&mut store);
    let winner = store.play(Move::relocate(rook, pos(1, 2), pos(0, 2))).unwrap();

    assert_eq!(winner, Some(PlayerColor::White));
    let log = log.borrow();
    assert_eq!(log.len(), 3);
    assert_eq!(log[1].winner, None);
    assert_eq!(log[2].winner, Some(PlayerColor::White));
}

/// Test that `play` uses the configured win length.
#[test]
fn test_play_custom_win_length() {
    let config = GameConfig::new().with_board_size(4).with_win_length(4);
    let mut store = GameStore::with_config(config).unwrap();

    for col in 0..3 {
        store.play(Move::place(Piece::white(PieceType::Pawn), pos(3, col))).unwrap();
        store.play(Move::place(Piece::black(PieceType::Pawn), pos(0, col))).unwrap();
    }
    assert_eq!(store.state().winner, None);

    let winner = store
        .play(Move::place(Piece::white(PieceType::Pawn), pos(3, 3)))
        .unwrap();
    assert_eq!(winner, Some(PlayerColor::White));
}
