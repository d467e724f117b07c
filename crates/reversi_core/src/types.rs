use std::fmt;

/// Color of one of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerColor {
    Dark,
    Light,
}

impl PlayerColor {
    pub fn other(self) -> PlayerColor {
        match self {
            PlayerColor::Dark => PlayerColor::Light,
            PlayerColor::Light => PlayerColor::Dark,
        }
    }

    /// The field value a disc of this color occupies.
    pub fn field(self) -> Field {
        match self {
            PlayerColor::Dark => Field::Dark,
            PlayerColor::Light => Field::Light,
        }
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerColor::Dark => write!(f, "dark"),
            PlayerColor::Light => write!(f, "light"),
        }
    }
}

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Empty,
    Dark,
    Light,
}

impl Field {
    pub fn is_empty(self) -> bool {
        self == Field::Empty
    }

    pub fn is_occupied(self) -> bool {
        !self.is_empty()
    }

    pub fn is_owned_by(self, color: PlayerColor) -> bool {
        self == color.field()
    }

    pub fn is_owned_by_opponent_of(self, color: PlayerColor) -> bool {
        self == color.other().field()
    }

    /// Character used in the board text format.
    pub fn to_char(self) -> char {
        match self {
            Field::Empty => ' ',
            Field::Dark => '*',
            Field::Light => 'O',
        }
    }

    /// Inverse of [`Field::to_char`]. Returns None for any other character.
    pub fn from_char(c: char) -> Option<Field> {
        match c {
            ' ' => Some(Field::Empty),
            '*' => Some(Field::Dark),
            'O' => Some(Field::Light),
            _ => None,
        }
    }
}
