mod board;
mod error;
mod pieces;
mod tiles;
pub mod agent;
pub mod game;
pub mod play;

pub use crate::{
    agent::{Agent, RandomAgent},
    board::{Board, PlayOutcome, Square},
    error::{IllegalMove, ParseError},
    game::{Game, GameOutcome, GameStatus, LossReason, TieReason, MOVE_LIMIT},
    pieces::{Piece, Player},
    play::{Play, PlayKind},
    tiles::Tile,
};
