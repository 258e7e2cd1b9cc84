//! Tests for the headless replay command.

use rewind::replay::{parse_moves, render, run};
use rewind::{Position, ReplayError, Status};
use rewind_tictactoe::Player;

#[test]
fn test_replay_left_column_win() {
    let moves = parse_moves(&["0 1 3 4 6"]).unwrap();
    let game = run(&moves, None).unwrap();
    assert_eq!(game.status(), Status::Winner(Player::X));
    assert!(render(&game).contains("Winner: X"));
}

#[test]
fn test_moves_after_win_are_skipped() {
    let moves = parse_moves(&["0,1,3,4,6,7"]).unwrap();
    let game = run(&moves, None).unwrap();
    assert_eq!(game.len(), 6);
    assert!(game.current_board().is_empty(Position::BottomCenter));
}

#[test]
fn test_replay_jump_views_earlier_board() {
    let moves = parse_moves(&["center", "top-left", "bottom-right"]).unwrap();
    let game = run(&moves, Some(0)).unwrap();
    assert_eq!(game.current_move(), 0);
    assert_eq!(game.len(), 4);

    let text = render(&game);
    assert!(text.starts_with("1|2|3\n"));
    assert!(text.contains("> Go to game start\n"));
    assert!(text.contains("  Go to move #3\n"));
}

#[test]
fn test_replay_json_snapshot() {
    let moves = parse_moves(&["4", "0"]).unwrap();
    let game = run(&moves, None).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&game.snapshot().to_json_pretty().unwrap()).unwrap();
    assert_eq!(json["status"]["NextPlayer"], "X");
    assert_eq!(json["move_log"][1], "Center");
    assert_eq!(json["move_log"][2], "TopLeft");
}

#[test]
fn test_unknown_cell() {
    assert!(matches!(
        parse_moves(&["4", "corner"]),
        Err(ReplayError::UnknownCell(token)) if token == "corner"
    ));
}
