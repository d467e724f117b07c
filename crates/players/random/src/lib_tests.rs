use super::*;
use reversi_core::InitialState;

#[test]
fn random_player_returns_legal_move() {
    let mut player = RandomPlayer::new("random");
    player.start_game(PlayerColor::Dark);

    let mut board = Board::new();
    board.initialize(InitialState::CenterSquare);

    for _ in 0..20 {
        let pos = player.pick_move(&board);
        assert!(board.is_valid_move(PlayerColor::Dark, pos));
    }
}

#[test]
fn random_player_uses_assigned_color() {
    let mut player = RandomPlayer::new("random");
    player.start_game(PlayerColor::Light);
    assert_eq!(player.color(), PlayerColor::Light);

    let mut board = Board::new();
    board.initialize(InitialState::CenterSquare);

    let pos = player.pick_move(&board);
    assert!(board.is_valid_move(PlayerColor::Light, pos));
}

#[test]
fn random_player_picks_the_only_available_move() {
    // Dark's single legal move is the corner capturing (0, 1).
    let board_str = [
        "| |O|*| | | | | |",
        "| | | | | | | | |",
        "| | | | | | | | |",
        "| | | | | | | | |",
        "| | | | | | | | |",
        "| | | | | | | | |",
        "| | | | | | | | |",
        "| | | | | | | | |",
    ]
    .join("\n");
    let board: Board = board_str.parse().unwrap();

    let mut player = RandomPlayer::new("random");
    player.start_game(PlayerColor::Dark);

    assert_eq!(player.pick_move(&board), Position::new(0, 0));
}
