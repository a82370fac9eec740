use kuba::Marble::{Black as B, Empty as X, Neutral as R, White as W};
use kuba::{
    Board, ConfigError, Direction, GameEngine, GameStatus, Marble, MoveError, Position,
    WinReason, BOARD_SIZE,
};

fn pos(r: i32, c: i32) -> Position {
    Position::new(r, c)
}

fn new_game() -> GameEngine {
    GameEngine::new(("A", W), ("B", B)).unwrap()
}

fn board_with(marbles: &[((i32, i32), Marble)]) -> Board {
    let mut board = Board::empty();
    for &((r, c), m) in marbles {
        board.set(pos(r, c), m).unwrap();
    }
    board
}

#[test]
fn test_fresh_session() {
    let game = new_game();
    assert_eq!(<(usize, usize, usize)>::from(game.marble_count()), (8, 8, 13));
    assert_eq!(game.captured("A"), 0);
    assert_eq!(game.captured("nobody"), 0);
    assert_eq!(game.current_turn(), None);
    assert_eq!(game.winner(), None);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_invalid_configuration() {
    assert_eq!(
        GameEngine::new(("", W), ("B", B)).unwrap_err(),
        ConfigError::EmptyName
    );
    assert_eq!(
        GameEngine::new(("A", W), ("", B)).unwrap_err(),
        ConfigError::EmptyName
    );
    assert_eq!(
        GameEngine::new(("A", R), ("B", B)).unwrap_err(),
        ConfigError::InvalidColor(R)
    );
    assert_eq!(
        GameEngine::new(("A", W), ("B", X)).unwrap_err(),
        ConfigError::InvalidColor(X)
    );
    assert_eq!(
        GameEngine::new(("A", B), ("B", B)).unwrap_err(),
        ConfigError::DuplicateColor(B)
    );
    assert_eq!(
        GameEngine::new(("A", W), ("A", B)).unwrap_err(),
        ConfigError::DuplicateName("A".to_string())
    );
}

#[test]
fn test_first_push_from_corner() {
    let mut game = new_game();
    assert!(game.make_move("A", pos(6, 5), Direction::Forward));

    assert_eq!(game.marble(pos(6, 5)).unwrap(), X);
    assert_eq!(game.marble(pos(5, 5)).unwrap(), W);
    assert_eq!(game.marble(pos(4, 5)).unwrap(), W);
    assert_eq!(game.current_turn(), Some("B"));
    assert_eq!(<(usize, usize, usize)>::from(game.marble_count()), (8, 8, 13));

    // A cannot move twice in a row
    let before = game.snapshot();
    assert!(!game.make_move("A", pos(6, 5), Direction::Left));
    assert_eq!(
        game.try_move("A", pos(6, 6), Direction::Left),
        Err(MoveError::NotYourTurn)
    );
    assert_eq!(game.snapshot(), before);

    // off-board positions are rejected, not a crash
    assert!(!game.make_move("B", pos(7, 0), Direction::Forward));
    assert!(!game.make_move("B", pos(-1, 3), Direction::Back));
    assert!(game.marble(pos(7, 0)).is_err());
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_either_player_may_start() {
    let mut game = new_game();
    assert!(game.make_move("B", pos(0, 6), Direction::Left));
    assert_eq!(game.current_turn(), Some("A"));
    assert!(game.make_move("A", pos(0, 0), Direction::Right));
    assert_eq!(game.current_turn(), Some("B"));
}

#[test]
fn test_rejection_reasons_in_order() {
    let mut game = new_game();
    assert_eq!(
        game.try_move("C", pos(0, 0), Direction::Right),
        Err(MoveError::UnknownPlayer)
    );
    assert_eq!(
        game.try_move("A", pos(0, 7), Direction::Right),
        Err(MoveError::OffBoard)
    );
    // opponent, neutral and empty cells
    for p in [pos(0, 6), pos(3, 3), pos(0, 3)] {
        assert_eq!(
            game.try_move("A", p, Direction::Forward),
            Err(MoveError::NotYourMarble)
        );
    }
    // (0, 0) sits behind (0, 1) when pushing right
    assert_eq!(
        game.try_move("A", pos(0, 1), Direction::Right),
        Err(MoveError::BlockedFromBehind)
    );
    assert_eq!(
        game.try_move("A", pos(5, 5), Direction::Forward),
        Err(MoveError::BlockedFromBehind)
    );
    assert_eq!(game.current_turn(), None);
    assert_eq!(game.board(), &Board::new());
}

#[test]
fn test_reversing_push_is_rejected() {
    let board = board_with(&[((3, 1), W), ((3, 2), B), ((6, 6), W), ((0, 0), B)]);
    let mut game = GameEngine::with_board(("A", W), ("B", B), board).unwrap();

    assert!(game.make_move("A", pos(3, 1), Direction::Right));
    assert_eq!(game.marble(pos(3, 2)).unwrap(), W);
    assert_eq!(game.marble(pos(3, 3)).unwrap(), B);
    let after_first = game.snapshot();

    assert_eq!(
        game.try_move("B", pos(3, 3), Direction::Left),
        Err(MoveError::Repetition)
    );
    assert_eq!(game.snapshot(), after_first);
    assert_eq!(game.current_turn(), Some("B"));

    // any other move is still fine
    assert!(game.make_move("B", pos(0, 0), Direction::Back));
}

#[test]
fn test_seven_captures_win() {
    let mut marbles = vec![((0, 0), B), ((3, 0), W), ((5, 5), W), ((5, 6), R)];
    for c in 1..BOARD_SIZE as i32 {
        marbles.push(((3, c), R));
    }
    let board = board_with(&marbles);
    let mut game = GameEngine::with_board(("A", W), ("B", B), board).unwrap();

    for i in 0..6 {
        let outcome = game.try_move("A", pos(3, i), Direction::Right).unwrap();
        assert_eq!(outcome.captured, 1);
        assert_eq!(outcome.pushed_off, Some(R));
        assert_eq!(outcome.win, None);
        assert_eq!(game.captured("A"), i as u32 + 1);
        assert!(game.make_move("B", pos(0, i), Direction::Right));
    }
    assert_eq!(game.winner(), None);

    let outcome = game.try_move("A", pos(5, 5), Direction::Right).unwrap();
    assert_eq!(outcome.win, Some(WinReason::Captures));
    assert_eq!(game.captured("A"), 7);
    assert_eq!(game.captured("B"), 0);
    assert_eq!(game.winner(), Some("A"));
    assert_eq!(
        game.status(),
        GameStatus::Won {
            winner: "A".to_string(),
            reason: WinReason::Captures
        }
    );
    // turn still flips on the winning move
    assert_eq!(game.current_turn(), Some("B"));

    let before = game.snapshot();
    assert!(!game.make_move("B", pos(0, 6), Direction::Left));
    assert_eq!(
        game.try_move("A", pos(3, 6), Direction::Left),
        Err(MoveError::GameOver)
    );
    assert_eq!(game.snapshot(), before);
    assert!(game.legal_moves("B").is_empty());
}

#[test]
fn test_pushing_off_last_opponent_marble_wins() {
    let board = board_with(&[((3, 5), W), ((3, 6), B)]);
    let mut game = GameEngine::with_board(("A", W), ("B", B), board).unwrap();

    let outcome = game.try_move("A", pos(3, 5), Direction::Right).unwrap();
    assert_eq!(outcome.pushed_off, Some(B));
    assert_eq!(outcome.captured, 0);
    assert_eq!(outcome.win, Some(WinReason::Eliminated));
    assert_eq!(game.winner(), Some("A"));
    assert_eq!(game.marble_count().black, 0);
}

#[test]
fn test_blocked_opponent_loses() {
    let board = board_with(&[
        ((3, 3), B),
        ((2, 3), R),
        ((4, 3), R),
        ((3, 2), R),
        ((3, 4), R),
        ((6, 6), W),
    ]);
    let mut game = GameEngine::with_board(("A", W), ("B", B), board).unwrap();
    assert!(!game.has_legal_move(pos(3, 3)));
    assert!(game.has_legal_move(pos(6, 6)));

    let outcome = game.try_move("A", pos(6, 6), Direction::Forward).unwrap();
    assert_eq!(outcome.win, Some(WinReason::Blocked));
    assert_eq!(game.winner(), Some("A"));
}

#[test]
fn test_pushing_off_own_last_marble_loses() {
    let board = board_with(&[((0, 3), W), ((6, 0), B)]);
    let mut game = GameEngine::with_board(("A", W), ("B", B), board).unwrap();

    let outcome = game.try_move("A", pos(0, 3), Direction::Forward).unwrap();
    assert_eq!(outcome.pushed_off, Some(W));
    assert_eq!(outcome.win, Some(WinReason::Blocked));
    assert_eq!(game.winner(), Some("B"));
}

#[test]
fn test_legal_moves_match_make_move() {
    let game = new_game();
    let moves = game.legal_moves("A");
    // every white marble starts with exactly two open directions
    assert_eq!(moves.len(), 16);
    for (p, d) in &moves {
        assert_eq!(game.marble(*p).unwrap(), W);
        let mut copy = game.clone();
        assert!(copy.make_move("A", *p, *d));
    }
    assert!(game.legal_moves("nobody").is_empty());
}

#[test]
fn test_display_reports_state() {
    let mut game = new_game();
    assert!(game.make_move("A", pos(6, 5), Direction::Forward));
    let text = game.to_string();
    assert!(text.contains("Current Turn: B"));
    assert!(text.contains("Counts      : W=8 B=8 R=13"));
    assert!(text.contains("Captured    : A=0 B=0"));
    assert!(text.contains("6  B B . . . . W  6"));
}

#[test]
fn test_extreme_positions_are_rejected_not_fatal() {
    let mut game = new_game();
    for p in [pos(i32::MIN, 0), pos(0, i32::MAX), pos(i32::MAX, i32::MIN)] {
        assert!(game.marble(p).is_err());
        assert!(game.has_legal_move(p));
        for d in Direction::ALL {
            assert_eq!(game.try_move("A", p, d), Err(MoveError::OffBoard));
        }
    }
    assert_eq!(game.board(), &Board::new());
}
