//! Interactive command-line Reversi player.
//!
//! Presents the legal moves as a numbered list in 1-based board
//! coordinates and reads the chosen index from stdin. Input that is not
//! a valid index falls back to the first legal move with a warning, so
//! a typo never aborts a running game.

use std::io::{self, BufRead, Write};

use reversi_core::{Board, Player, PlayerColor, Position};


/// A player driven by a human at the terminal.
#[derive(Debug, Clone)]
pub struct ConsolePlayer {
    name: String,
    color: PlayerColor,
}

impl ConsolePlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: PlayerColor::Dark,
        }
    }
}

impl Player for ConsolePlayer {
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
        assert!(!moves.is_empty(), "pick_move called without any legal move");

        print!("{}", render_move_menu(&moves));
        io::stdout().flush().ok();

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok();

        match parse_selection(&line, moves.len()) {
            Some(index) => moves[index],
            None => {
                println!("Invalid input, returning first move.");
                moves[0]
            }
        }
    }
}

/// The numbered menu shown before reading a selection.
fn render_move_menu(moves: &[Position]) -> String {
    let mut menu = String::from("\nYour possible moves are:\n");
    for (i, pos) in moves.iter().enumerate() {
        menu.push_str(&format!(
            "{:>4}: {:>2}, {:>2}\n",
            i,
            pos.row() + 1,
            pos.column() + 1
        ));
    }
    menu.push_str("Please select a move: ");
    menu
}

/// Parse a selection line into an index into the move list. Returns
/// None for anything that is not a number in `[0, len)`.
fn parse_selection(line: &str, len: usize) -> Option<usize> {
    line.trim().parse::<usize>().ok().filter(|&i| i < len)
}
