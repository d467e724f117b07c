//! Random Move Reversi Player
//!
//! A simple player that selects moves uniformly at random from all legal
//! moves. Useful for:
//! - Testing the game loop before wiring up real strategies
//! - Baseline comparisons (any deliberate strategy should beat this)
//! - Stress testing the move generator

use rand::seq::SliceRandom;
use rand::thread_rng;
use reversi_core::{Board, Player, PlayerColor, Position};

#[cfg(test)]
mod lib_tests;

/// A player that picks a random legal move.
///
/// It provides no evaluation at all - it simply draws uniformly from
/// the legal-move set. The game loop guarantees `pick_move` is only
/// called when that set is non-empty.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    color: PlayerColor,
}

impl RandomPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: PlayerColor::Dark,
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> PlayerColor {
        self.color
    }

    fn start_game(&mut self, color: PlayerColor) {
        self.color = color;
    }

    fn pick_move(&mut self, board: &Board) -> Position {
        let moves: Vec<Position> = board.find_valid_moves(self.color).into_iter().collect();
        *moves
            .choose(&mut thread_rng())
            .expect("pick_move called without any legal move")
    }
}
