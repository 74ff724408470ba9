use crate::error::ParseError;
use crate::tiles::Tile;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single proposed movement of a piece from one square to another. (Named "Play" rather
/// than "Move" as the lower-cased version of the latter would clash with the Rust keyword.)
///
/// A play carries no guarantee of legality; it is classified and validated by
/// [`crate::Board::process_move`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Play {
    pub from: Tile,
    pub to: Tile,
}

/// How a play is classified by the distance it covers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlayKind {
    /// A single diagonal step onto an empty square.
    Simple,
    /// A two-step diagonal jump over an enemy piece, which is removed.
    Capture,
}

impl Play {
    pub fn new(from: Tile, to: Tile) -> Self {
        Self { from, to }
    }

    /// The signed row and column deltas from source to destination.
    pub(crate) fn delta(&self) -> (i8, i8) {
        (
            self.to.row as i8 - self.from.row as i8,
            self.to.col as i8 - self.from.col as i8,
        )
    }

    /// Classify this play by its delta magnitudes: `(1, 1)` is a simple move, `(2, 2)` a
    /// capture. Any other shape is illegal and yields `None`.
    pub fn kind(&self) -> Option<PlayKind> {
        let (dr, dc) = self.delta();
        match (dr.abs(), dc.abs()) {
            (1, 1) => Some(PlayKind::Simple),
            (2, 2) => Some(PlayKind::Capture),
            _ => None,
        }
    }

    /// The square jumped over by this play, componentwise `(from + to) / 2`. For a capture
    /// this is the square whose piece is removed; it is meaningless for other shapes.
    pub fn midpoint(&self) -> Tile {
        Tile::new(
            (self.from.row + self.to.row) / 2,
            (self.from.col + self.to.col) / 2,
        )
    }
}

impl Display for Play {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl FromStr for Play {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split('-').collect();
        if tokens.len() != 2 {
            return Err(ParseError::BadPlay(String::from(s)));
        }
        Ok(Play::new(Tile::from_str(tokens[0])?, Tile::from_str(tokens[1])?))
    }
}
