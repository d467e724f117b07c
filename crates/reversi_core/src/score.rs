//! Disc tallies and win/tie comparison.

use crate::board::Board;
use crate::position::{NUM_FIELDS, Position};
use crate::types::{Field, PlayerColor};

/// Cell counts for a board. The three counts always sum to 64.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Score {
    dark: usize,
    light: usize,
    empty: usize,
}

impl Score {
    pub fn new(dark: usize, light: usize, empty: usize) -> Self {
        debug_assert_eq!(dark + light + empty, NUM_FIELDS);
        Self { dark, light, empty }
    }

    /// Tally the cells of `board`.
    pub fn for_board(board: &Board) -> Self {
        let mut score = Self {
            dark: 0,
            light: 0,
            empty: 0,
        };
        for pos in Position::all() {
            match board[pos] {
                Field::Dark => score.dark += 1,
                Field::Light => score.light += 1,
                Field::Empty => score.empty += 1,
            }
        }
        score
    }

    pub fn dark(&self) -> usize {
        self.dark
    }

    pub fn light(&self) -> usize {
        self.light
    }

    pub fn empty(&self) -> usize {
        self.empty
    }

    pub fn count_for(&self, color: PlayerColor) -> usize {
        match color {
            PlayerColor::Dark => self.dark,
            PlayerColor::Light => self.light,
        }
    }

    /// The color with strictly more discs, or None for a tie.
    pub fn winner(&self) -> Option<PlayerColor> {
        match self.dark.cmp(&self.light) {
            std::cmp::Ordering::Greater => Some(PlayerColor::Dark),
            std::cmp::Ordering::Less => Some(PlayerColor::Light),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// `"own:other"` as seen from `color`'s side, e.g. `"44:20"`.
    pub fn display_for(&self, color: PlayerColor) -> String {
        format!(
            "{}:{}",
            self.count_for(color),
            self.count_for(color.other())
        )
    }
}
