//! Observer interface for game progress output.
//!
//! The game loop reports every state transition through a [`Notifier`].
//! Notifiers are pure output sinks: nothing they do feeds back into the
//! game logic.

use reversi_core::{Board, GameResult, Player, Position};

use crate::game::Players;

/// Receives game progress messages.
///
/// Only `display_message` is required; the `note_*` methods format the
/// canonical message for each transition and funnel it through
/// `display_message`.
pub trait Notifier {
    fn display_message(&mut self, message: &str);

    fn display_board(&mut self, board: &Board) {
        self.display_message(&board.to_string());
    }

    fn note_new_game(&mut self, players: &Players, board: &Board) {
        self.display_message("Starting a new game.");
        self.display_message(&format!("Dark player: {}", players.dark_player().name()));
        self.display_message(&format!("Light player: {}", players.light_player().name()));
        self.display_board(board);
    }

    fn note_move(&mut self, player: &dyn Player, pos: Position, board: &Board) {
        self.display_message(&format!(
            "\n{} ({}) plays {}.",
            player.name(),
            player.color(),
            pos
        ));
        self.display_board(board);
    }

    fn note_result(&mut self, result: &GameResult) {
        self.display_message(&format!("\nGAME OVER.\n{}", result.summary()));
    }
}

/// Prints every message as a line on stdout.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn display_message(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Discards all messages; used for unattended series.
#[derive(Debug, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn display_message(&mut self, _message: &str) {}
}
