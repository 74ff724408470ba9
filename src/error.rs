use crate::tiles::Tile;
use thiserror::Error;

/// The reason why a proposed play was rejected. The board is never mutated when one of
/// these is returned: validation is all-or-nothing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum IllegalMove {
    /// One of the play's coordinates falls outside the board.
    #[error("all coordinates must be between 0 and 7")]
    OutOfBounds,
    /// A capture chain is in progress and the play does not continue it from the locked
    /// square.
    #[error("the chained capture must be continued from {0}")]
    MustContinueChain(Tile),
    /// The start square does not hold a piece owned by the player to move.
    #[error("you must move your own pieces")]
    NotYourPiece,
    /// The destination square is not an empty playable square.
    #[error("you can only move into empty squares")]
    DestinationOccupied,
    /// An uncrowned piece may not move or capture backwards.
    #[error("an uncrowned piece cannot move or capture backwards")]
    BackwardMove,
    /// The play is neither a single diagonal step nor a two-step capture jump.
    #[error("you can only move one square away, or capture two squares away")]
    BadDistance,
    /// A capture is available, and captures are mandatory.
    #[error("a capture is available, so a simple move is forbidden")]
    CaptureAvailable,
    /// The jumped-over square of a capture does not hold an enemy piece.
    #[error("you can only capture your opponent's pieces")]
    NotAnEnemyPiece,
}

/// Error encountered while parsing a tile, play or board from a string.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ParseError {
    /// Tried to parse a string, but it was not the expected length. The given `usize` is
    /// the actual length.
    #[error("string was not the expected length: {0}")]
    BadStringLen(usize),
    /// Tried to parse a multi-line string but encountered a line that was not the expected
    /// length. The given `usize` is the actual length.
    #[error("line was not the expected length: {0}")]
    BadLineLen(usize),
    /// Encountered an unexpected character in a string.
    #[error("unexpected character {0:?}")]
    BadChar(char),
    /// Tried to parse an empty string.
    #[error("tried to parse an empty string")]
    EmptyString,
    /// Tried to parse a string which does not represent a [`crate::Play`].
    #[error("could not parse {0:?} as a play")]
    BadPlay(String),
    /// A board string placed a piece on a square outside the playable diagonal pattern.
    #[error("piece placed on a non-playable square at {0}")]
    NonPlayableSquare(Tile),
}
