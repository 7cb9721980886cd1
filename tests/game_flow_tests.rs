//! Game flow tests: turn rotation, elimination, draw countdown.

use king_arena::{
    Board, GameConfig, GameResult, GameState, IllegalMove, Move, Piece, PieceType, PlayerId,
    Position,
};

fn id(name: &str) -> PlayerId {
    PlayerId::new(name)
}

fn mv(from: (i32, i32), to: (i32, i32)) -> Move {
    Move::new(Position::new(from.0, from.1), Position::new(to.0, to.1))
}

/// Move the active player's only king between two squares.
fn shuttle(state: &GameState, a: (i32, i32), b: (i32, i32)) -> GameState {
    let active = state.active_player().unwrap().clone();
    let at_a = state
        .board()
        .get_at(Position::new(a.0, a.1))
        .is_some_and(|piece| piece.is_owned_by(&active));

    let step = if at_a { mv(a, b) } else { mv(b, a) };
    state.apply_move(step).unwrap()
}

/// End-to-end: adjacent kings, first player captures and wins.
#[test]
fn test_adjacent_capture_scenario() {
    let p1 = id("P1");
    let p2 = id("P2");

    let board = GameState::empty()
        .board()
        .place_at(Position::new(0, 0), Piece::king("P1"))
        .place_at(Position::new(1, 1), Piece::king("P2"));
    let state = GameState::new(board, [p1.clone(), p2.clone()]);

    let capture = mv((0, 0), (1, 1));
    let legal: Vec<_> = state.board().legal_moves(&p1).collect();
    assert!(legal.contains(&capture));

    let next = state.apply_move(capture).unwrap();
    assert!(next.is_done());
    assert_eq!(next.winner(), Some(&p1));
    assert_eq!(next.result(), Some(GameResult::Winner(p1)));
    assert!(next.is_eliminated(&p2));
}

/// Fifty quiet transitions from the default countdown draw the game.
#[test]
fn test_draw_after_fifty_quiet_turns() {
    let board = Board::empty()
        .place_at(Position::new(0, 0), Piece::king("a"))
        .place_at(Position::new(7, 7), Piece::king("b"));
    let mut state = GameState::new(board, [id("a"), id("b")]);

    for turn in 1..=50 {
        assert!(!state.is_done(), "game ended early at turn {}", turn);
        state = if state.active_player() == Some(&id("a")) {
            shuttle(&state, (0, 0), (0, 1))
        } else {
            shuttle(&state, (7, 7), (7, 6))
        };
        assert_eq!(state.turns_until_draw(), 50 - turn);
    }

    assert_eq!(state.turns_until_draw(), 0);
    assert!(state.is_draw());
    assert!(state.is_done());
    assert_eq!(state.winner(), None);
    assert_eq!(state.result(), Some(GameResult::Draw));
}

/// An elimination on the 49th transition restarts the countdown.
#[test]
fn test_elimination_resets_countdown() {
    let board = Board::empty()
        .place_at(Position::new(2, 2), Piece::king("a"))
        .place_at(Position::new(7, 7), Piece::king("b"))
        .place_at(Position::new(3, 3), Piece::king("c"));
    let mut state = GameState::new(board, [id("a"), id("b"), id("c")]);

    for _ in 1..=48 {
        let active = state.active_player().unwrap().clone();
        state = match active.name() {
            "a" => shuttle(&state, (2, 2), (2, 1)),
            "b" => shuttle(&state, (7, 7), (7, 6)),
            _ => shuttle(&state, (3, 3), (4, 4)),
        };
    }

    assert_eq!(state.turns_until_draw(), 2);
    assert_eq!(state.active_player(), Some(&id("a")));

    let next = state.apply_move(mv((2, 2), (3, 3))).unwrap();

    assert_eq!(next.turns_until_draw(), 50);
    assert_eq!(next.dead_players().iter().cloned().collect::<Vec<_>>(), vec![id("c")]);
    assert_eq!(next.players().iter().cloned().collect::<Vec<_>>(), vec![id("b"), id("a")]);
    assert!(!next.is_done());
}

/// Two players eliminated by one capture sweep are recorded in scan order.
#[test]
fn test_multiple_deaths_in_one_transition() {
    // c and d never had kings; b loses its king to a
    let board = Board::empty()
        .place_at(Position::new(4, 4), Piece::king("a"))
        .place_at(Position::new(4, 5), Piece::king("b"))
        .place_at(Position::new(0, 0), Piece::king("e"));
    let state = GameState::new(board, [id("a"), id("d"), id("b"), id("c"), id("e")]);

    let next = state.apply_move(mv((4, 4), (4, 5))).unwrap();

    assert_eq!(
        next.dead_players().iter().cloned().collect::<Vec<_>>(),
        vec![id("d"), id("b"), id("c")]
    );
    assert_eq!(next.players().iter().cloned().collect::<Vec<_>>(), vec![id("e"), id("a")]);
}

/// A rejected move leaves the state usable and unchanged.
#[test]
fn test_illegal_move_keeps_state() {
    let board = Board::empty()
        .place_at(Position::new(0, 0), Piece::king("a"))
        .place_at(Position::new(0, 1), Piece::king("a"))
        .place_at(Position::new(7, 7), Piece::king("b"));
    let state = GameState::new(board, [id("a"), id("b")]);
    let before = state.clone();

    assert_eq!(
        state.apply_move(mv((0, 0), (0, 1))),
        Err(IllegalMove::FriendlyCapture(Position::new(0, 1)))
    );
    assert_eq!(
        state.apply_move(mv((0, 0), (-1, 0))),
        Err(IllegalMove::OutOfBounds(Position::new(-1, 0)))
    );
    assert_eq!(
        state.apply_move(mv((3, 3), (3, 4))),
        Err(IllegalMove::NoPiece(Position::new(3, 3)))
    );
    assert_eq!(state, before);

    // The same state still accepts a legal move
    assert!(state.apply_move(mv((0, 1), (1, 1))).is_ok());
}

/// The view offers the mover's positions and nearest opposing king.
#[test]
fn test_view_closest_opponent_scenario() {
    let board = Board::empty()
        .place_at(Position::new(0, 0), Piece::king("me"))
        .place_at(Position::new(0, 5), Piece::king("far"))
        .place_at(Position::new(1, 0), Piece::king("near"));
    let state = GameState::new(board, [id("me"), id("near"), id("far")]);
    let view = state.view_for(id("me"));

    let home = view.positions(PieceType::King).next().unwrap();
    assert_eq!(home, Position::new(0, 0));
    assert_eq!(
        view.closest_opponent(home, PieceType::King),
        Some(Position::new(1, 0))
    );
}

/// Custom dimensions bound moves by the board's own size.
#[test]
fn test_configured_board_size() {
    let config = GameConfig::default().with_dimensions(3, 3).with_draw_turns(10);
    let board = config
        .empty_board()
        .place_at(Position::new(2, 2), Piece::king("a"))
        .place_at(Position::new(0, 0), Piece::king("b"));
    let state = GameState::with_config(&config, board, [id("a"), id("b")]);

    assert_eq!(state.turns_until_draw(), 10);
    assert_eq!(state.board().legal_moves(&id("a")).count(), 3);
    assert_eq!(
        state.apply_move(mv((2, 2), (3, 3))),
        Err(IllegalMove::OutOfBounds(Position::new(3, 3)))
    );
}
