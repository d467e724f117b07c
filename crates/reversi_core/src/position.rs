//! Row/column addressing on the 8x8 grid.

use std::fmt;

/// Number of cells on one edge of the board.
pub const EDGE_LENGTH: usize = 8;

/// Total number of cells on the board.
pub const NUM_FIELDS: usize = EDGE_LENGTH * EDGE_LENGTH;

/// One of the eight directions a capture run can extend in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// All eight directions, for scanning around a placed disc.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

impl Direction {
    /// (row delta, column delta) unit vector. North is towards row 0.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

/// A cell address with `row` and `column` in `[0, 8)`.
///
/// The derived ordering is row-major, which gives deterministic
/// enumeration wherever positions are sorted or collected into sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Create a position. Panics if either coordinate is out of range.
    pub fn new(row: usize, col: usize) -> Self {
        assert!(row < EDGE_LENGTH && col < EDGE_LENGTH);
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn column(self) -> usize {
        self.col as usize
    }

    /// Row-major linear index in `[0, 64)`.
    pub fn to_index(self) -> usize {
        self.row as usize * EDGE_LENGTH + self.col as usize
    }

    /// Inverse of [`Position::to_index`]. Panics if `index >= 64`.
    pub fn from_index(index: usize) -> Self {
        assert!(index < NUM_FIELDS);
        Self {
            row: (index / EDGE_LENGTH) as u8,
            col: (index % EDGE_LENGTH) as u8,
        }
    }

    /// All 64 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..NUM_FIELDS).map(Position::from_index)
    }

    /// The neighboring position one step in `dir`, or None at the edge.
    pub fn step(self, dir: Direction) -> Option<Position> {
        let (dr, dc) = dir.delta();
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..EDGE_LENGTH as i8).contains(&row) && (0..EDGE_LENGTH as i8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }
}

/// User-facing 1-based rendering, e.g. `(2, 3)` for row 1, column 2.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        assert_eq!(Position::new(0, 0).to_index(), 0);
        assert_eq!(Position::new(7, 7).to_index(), 63);
        assert_eq!(Position::new(3, 4).to_index(), 28);
        for index in 0..NUM_FIELDS {
            assert_eq!(Position::from_index(index).to_index(), index);
        }
    }

    #[test]
    #[should_panic]
    fn new_rejects_out_of_range() {
        Position::new(0, 8);
    }

    #[test]
    fn all_enumerates_row_major() {
        let positions: Vec<_> = Position::all().collect();
        assert_eq!(positions.len(), NUM_FIELDS);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[8], Position::new(1, 0));
        assert_eq!(positions[63], Position::new(7, 7));
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn step_stays_on_board() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::North), None);
        assert_eq!(corner.step(Direction::West), None);
        assert_eq!(corner.step(Direction::NorthWest), None);
        assert_eq!(corner.step(Direction::SouthEast), Some(Position::new(1, 1)));

        let center = Position::new(3, 3);
        assert_eq!(center.step(Direction::North), Some(Position::new(2, 3)));
        assert_eq!(center.step(Direction::East), Some(Position::new(3, 4)));
    }

    #[test]
    fn display_is_one_based() {
        assert_eq!(Position::new(1, 2).to_string(), "(2, 3)");
        assert_eq!(Position::new(0, 0).to_string(), "(1, 1)");
        assert_eq!(Position::new(7, 7).to_string(), "(8, 8)");
    }
}
