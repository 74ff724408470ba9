use crate::board::Board;
use crate::error::IllegalMove;
use crate::play::Play;
use crate::tiles::Tile;
use rand::seq::SliceRandom;

/// Something that can choose a play when given a snapshot of the board.
///
/// The board passed to [`Agent::select_play`] is a fully independent copy of the
/// authoritative board, taken immediately before the call, so an agent can never observe
/// or affect the real match state. An agent may legitimately return an illegal play; the
/// match driver decides what happens next based on [`Agent::interactive`].
pub trait Agent {
    /// Pick a play for the player whose turn it is on the given board.
    fn select_play(&mut self, board: &Board) -> Play;

    /// Whether an illegal play from this agent should be treated as recoverable (the
    /// driver reports it and asks again) rather than as an immediate forfeit.
    fn interactive(&self) -> bool {
        false
    }

    /// Called by the driver when a play from this agent was rejected. Only invoked for
    /// interactive agents, before they are asked for another play.
    fn notify_illegal(&mut self, _play: Play, _reason: &IllegalMove) {}
}

/// Agent that plays a uniformly random capture when one exists, falling back to a
/// uniformly random simple move.
#[derive(Debug, Default)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Agent for RandomAgent {
    fn select_play(&mut self, board: &Board) -> Play {
        let mut rng = rand::thread_rng();
        let player = board.side_to_play();
        if let Some(play) = board.possible_captures(player).choose(&mut rng) {
            return *play;
        }
        match board.possible_moves(player).choose(&mut rng) {
            Some(play) => *play,
            // The driver never asks for a play in a position with no legal plays; if
            // asked anyway, answer with a play that will be rejected.
            None => Play::new(Tile::new(0, 0), Tile::new(0, 0)),
        }
    }
}
