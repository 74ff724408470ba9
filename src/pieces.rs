use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the two sides in a game of draughts. Black moves first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    Red,
    Black,
}

impl Player {
    /// The opposing player.
    pub fn other(&self) -> Self {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    /// The row direction in which this player's uncrowned pieces advance: Red moves towards
    /// row 7, Black towards row 0.
    pub(crate) fn forward(&self) -> i8 {
        match self {
            Player::Red => 1,
            Player::Black => -1,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// A piece on the board: its owner plus whether it has been crowned.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub player: Player,
    pub crowned: bool,
}

impl Piece {
    /// An uncrowned piece belonging to the given player.
    pub fn plain(player: Player) -> Self {
        Self { player, crowned: false }
    }

    /// A crowned piece (king) belonging to the given player.
    pub fn king(player: Player) -> Self {
        Self { player, crowned: true }
    }

    /// Whether this piece may move in the given row direction. Kings move in all four
    /// diagonal directions; uncrowned pieces only move forward.
    pub(crate) fn may_move(&self, dr: i8) -> bool {
        self.crowned || dr == self.player.forward()
    }

    /// The character used for this piece in board notation: `r`/`b` for plain pieces,
    /// `R`/`B` for crowned ones.
    pub fn to_char(self) -> char {
        match (self.player, self.crowned) {
            (Player::Red, false) => 'r',
            (Player::Red, true) => 'R',
            (Player::Black, false) => 'b',
            (Player::Black, true) => 'B',
        }
    }

    /// Parse a piece from its board-notation character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'r' => Some(Piece::plain(Player::Red)),
            'R' => Some(Piece::king(Player::Red)),
            'b' => Some(Piece::plain(Player::Black)),
            'B' => Some(Piece::king(Player::Black)),
            _ => None,
        }
    }
}
