use crate::error::ParseError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The location of a single square on the board, ie, row and column. This struct is only a
/// reference to a location on the board, and does not contain any other information such as
/// piece placement.
///
/// Row 0 is Red's home rank and row 7 is Black's. In algebraic notation the column is a
/// letter `a`-`h` and the row is printed as a rank number `1`-`8`, so `a1` is `(0, 0)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tile {
    pub row: u8,
    pub col: u8,
}

impl Tile {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Whether both coordinates are within the 8x8 board.
    pub fn in_bounds(&self) -> bool {
        self.row < 8 && self.col < 8
    }

    /// The tile reached by stepping `(dr, dc)` from this one, or `None` if that would leave
    /// the board.
    pub(crate) fn offset(&self, dr: i8, dc: i8) -> Option<Tile> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Tile::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Tile {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyString);
        }
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ParseError::BadStringLen(bytes.len()));
        }
        let col = match bytes[0] {
            c @ b'a'..=b'h' => c - b'a',
            c => return Err(ParseError::BadChar(c as char)),
        };
        let row = match bytes[1] {
            c @ b'1'..=b'8' => c - b'1',
            c => return Err(ParseError::BadChar(c as char)),
        };
        Ok(Tile::new(row, col))
    }
}
