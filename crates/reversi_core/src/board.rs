//! The 64-cell board and the flip/capture rules.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use thiserror::Error;

use crate::position::{Direction, DIRECTIONS, EDGE_LENGTH, NUM_FIELDS, Position};
use crate::types::{Field, PlayerColor};

/// Starting configuration selected by [`Board::initialize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitialState {
    Empty,
    CenterSquare,
}

/// A complete board state. Value semantics: every `Board` is an
/// independent snapshot of all 64 cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    fields: [Field; NUM_FIELDS],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            fields: [Field::Empty; NUM_FIELDS],
        }
    }
}

impl Board {
    /// An all-empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every cell; for [`InitialState::CenterSquare`] additionally
    /// place the standard four-disc opening. Idempotent.
    pub fn initialize(&mut self, state: InitialState) {
        self.fields = [Field::Empty; NUM_FIELDS];
        if state == InitialState::CenterSquare {
            self[Position::new(3, 3)] = Field::Dark;
            self[Position::new(3, 4)] = Field::Light;
            self[Position::new(4, 3)] = Field::Light;
            self[Position::new(4, 4)] = Field::Dark;
        }
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self[pos].is_empty()
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self[pos].is_occupied()
    }

    /// A move is valid iff the cell is empty and at least one direction
    /// yields a non-empty flip set.
    pub fn is_valid_move(&self, color: PlayerColor, pos: Position) -> bool {
        self.is_empty(pos) && self.does_move_flip_any_field(color, pos)
    }

    /// All valid moves for `color`, enumerated row-major.
    pub fn find_valid_moves(&self, color: PlayerColor) -> BTreeSet<Position> {
        Position::all()
            .filter(|&pos| self.is_valid_move(color, pos))
            .collect()
    }

    /// Apply a move: place a disc and flip every captured position.
    ///
    /// An invalid move is silently ignored; penalizing illegal moves is
    /// the game loop's responsibility, not the board's.
    pub fn play_move(&mut self, color: PlayerColor, pos: Position) {
        if self.is_valid_move(color, pos) {
            self[pos] = color.field();
            let flipped = self.find_positions_flipped_by_move(color, pos);
            self.flip_positions(color, &flipped);
        }
    }

    fn does_move_flip_any_field(&self, color: PlayerColor, pos: Position) -> bool {
        DIRECTIONS
            .iter()
            .any(|&dir| !self.positions_to_flip_in_direction(color, pos, dir).is_empty())
    }

    /// The positions captured in direction `dir` when `color` plays at
    /// `start`: walk the run of occupied cells, find the furthest cell
    /// owned by `color`, and take every opponent cell before it.
    fn positions_to_flip_in_direction(
        &self,
        color: PlayerColor,
        start: Position,
        dir: Direction,
    ) -> Vec<Position> {
        let run = self.occupied_run_in_direction(dir, start.step(dir));
        match run.iter().rposition(|&pos| self[pos].is_owned_by(color)) {
            Some(highest) => run[..highest]
                .iter()
                .copied()
                .filter(|&pos| self[pos].is_owned_by_opponent_of(color))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Contiguous occupied cells starting at `from` and continuing in
    /// `dir` until an empty cell or the board edge.
    fn occupied_run_in_direction(&self, dir: Direction, from: Option<Position>) -> Vec<Position> {
        let mut run = Vec::new();
        let mut cursor = from;
        while let Some(pos) = cursor {
            if !self.is_occupied(pos) {
                break;
            }
            run.push(pos);
            cursor = pos.step(dir);
        }
        run
    }

    fn find_positions_flipped_by_move(
        &self,
        color: PlayerColor,
        pos: Position,
    ) -> BTreeSet<Position> {
        DIRECTIONS
            .iter()
            .flat_map(|&dir| self.positions_to_flip_in_direction(color, pos, dir))
            .collect()
    }

    fn flip_positions(&mut self, color: PlayerColor, positions: &BTreeSet<Position>) {
        let field = color.field();
        for &pos in positions {
            self[pos] = field;
        }
    }
}

impl Index<Position> for Board {
    type Output = Field;

    fn index(&self, pos: Position) -> &Field {
        &self.fields[pos.to_index()]
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Field {
        &mut self.fields[pos.to_index()]
    }
}

/// Renders the canonical text form: 8 rows of `|c|c|...|c|` joined by
/// newlines, with no trailing newline.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..EDGE_LENGTH {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..EDGE_LENGTH {
                write!(f, "|{}", self[Position::new(row, col)].to_char())?;
            }
            write!(f, "|")?;
        }
        Ok(())
    }
}

/// Failure to parse a board from its text form.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("expected 64 board fields, found {found}")]
    WrongLength { found: usize },
    #[error("field inputs can only be ' ', '*' or 'O', found {0:?}")]
    InvalidChar(char),
}

/// Parses the text form. Any character other than `O`, `*` and space is
/// stripped before the remaining 64 characters are mapped row-major; a
/// cleaned length other than 64 is an error.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = clean_board_str(s);
        if cleaned.chars().count() != NUM_FIELDS {
            return Err(ParseBoardError::WrongLength {
                found: cleaned.chars().count(),
            });
        }
        let mut board = Board::new();
        for (index, c) in cleaned.chars().enumerate() {
            board.fields[index] =
                Field::from_char(c).ok_or(ParseBoardError::InvalidChar(c))?;
        }
        Ok(board)
    }
}

/// Keep only the characters that denote a field.
pub(crate) fn clean_board_str(s: &str) -> String {
    s.chars().filter(|&c| matches!(c, 'O' | '*' | ' ')).collect()
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
