//! Board-level replay of a complete game.

use reversi_core::{Board, InitialState, PlayerColor, Position, Score};

/// The game two first-legal-move players produce from the standard
/// opening. Strictly alternating colors; the board ends full.
const CANONICAL_GAME: [(PlayerColor, usize, usize); 60] = [
    (PlayerColor::Dark, 2, 4),
    (PlayerColor::Light, 2, 3),
    (PlayerColor::Dark, 1, 2),
    (PlayerColor::Light, 1, 3),
    (PlayerColor::Dark, 0, 1),
    (PlayerColor::Light, 0, 3),
    (PlayerColor::Dark, 0, 2),
    (PlayerColor::Light, 0, 0),
    (PlayerColor::Dark, 2, 2),
    (PlayerColor::Light, 2, 1),
    (PlayerColor::Dark, 1, 1),
    (PlayerColor::Light, 2, 0),
    (PlayerColor::Dark, 1, 0),
    (PlayerColor::Light, 2, 5),
    (PlayerColor::Dark, 1, 4),
    (PlayerColor::Light, 0, 4),
    (PlayerColor::Dark, 1, 5),
    (PlayerColor::Light, 0, 5),
    (PlayerColor::Dark, 0, 6),
    (PlayerColor::Light, 0, 7),
    (PlayerColor::Dark, 1, 6),
    (PlayerColor::Light, 2, 6),
    (PlayerColor::Dark, 1, 7),
    (PlayerColor::Light, 2, 7),
    (PlayerColor::Dark, 3, 0),
    (PlayerColor::Light, 3, 1),
    (PlayerColor::Dark, 3, 2),
    (PlayerColor::Light, 3, 5),
    (PlayerColor::Dark, 3, 6),
    (PlayerColor::Light, 4, 0),
    (PlayerColor::Dark, 4, 1),
    (PlayerColor::Light, 3, 7),
    (PlayerColor::Dark, 4, 2),
    (PlayerColor::Light, 4, 5),
    (PlayerColor::Dark, 4, 7),
    (PlayerColor::Light, 4, 6),
    (PlayerColor::Dark, 5, 0),
    (PlayerColor::Light, 5, 1),
    (PlayerColor::Dark, 5, 2),
    (PlayerColor::Light, 5, 3),
    (PlayerColor::Dark, 5, 4),
    (PlayerColor::Light, 5, 5),
    (PlayerColor::Dark, 5, 6),
    (PlayerColor::Light, 5, 7),
    (PlayerColor::Dark, 6, 2),
    (PlayerColor::Light, 6, 0),
    (PlayerColor::Dark, 6, 4),
    (PlayerColor::Light, 6, 1),
    (PlayerColor::Dark, 6, 5),
    (PlayerColor::Light, 6, 3),
    (PlayerColor::Dark, 7, 1),
    (PlayerColor::Light, 6, 6),
    (PlayerColor::Dark, 7, 2),
    (PlayerColor::Light, 6, 7),
    (PlayerColor::Dark, 7, 0),
    (PlayerColor::Light, 7, 3),
    (PlayerColor::Dark, 7, 4),
    (PlayerColor::Light, 7, 5),
    (PlayerColor::Dark, 7, 6),
    (PlayerColor::Light, 7, 7),
];

#[test]
fn canonical_game_replays_move_by_move() {
    let mut board = Board::new();
    board.initialize(InitialState::CenterSquare);

    for (i, &(color, row, col)) in CANONICAL_GAME.iter().enumerate() {
        let pos = Position::new(row, col);
        let moves = board.find_valid_moves(color);

        assert!(
            board.is_valid_move(color, pos),
            "move {i} at {pos} should be valid for {color}"
        );
        // Each move is the first of the sorted legal-move set, which is
        // what makes the sequence canonical.
        assert_eq!(
            moves.iter().next(),
            Some(&pos),
            "move {i} is not the first legal move for {color}"
        );

        board.play_move(color, pos);
    }

    let score = Score::for_board(&board);
    assert_eq!(score.empty(), 0);
    assert_eq!(score.dark() + score.light(), 64);
    assert!(score.light() > score.dark());
    assert_eq!(score.winner(), Some(PlayerColor::Light));
}

#[test]
fn every_intermediate_state_keeps_the_sum_invariant() {
    let mut board = Board::new();
    board.initialize(InitialState::CenterSquare);

    for &(color, row, col) in CANONICAL_GAME.iter() {
        board.play_move(color, Position::new(row, col));
        let score = Score::for_board(&board);
        assert_eq!(score.dark() + score.light() + score.empty(), 64);

        // Text round-trip holds at every state, not just the opening.
        let reparsed: Board = board.to_string().parse().unwrap();
        assert_eq!(reparsed, board);
    }
}
