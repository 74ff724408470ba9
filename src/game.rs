use crate::agent::Agent;
use crate::board::Board;
use crate::error::IllegalMove;
use crate::pieces::Player;
use crate::play::Play;
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The reason why a player has lost the match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LossReason {
    /// The player has no pieces left.
    NoPieces,
    /// The player has pieces but no legal simple move or capture, while the opponent can
    /// still move.
    NoMoves,
    /// The player's agent submitted an illegal play and is not interactive, forfeiting the
    /// match.
    Forfeit,
}

/// The reason why the match has ended in a tie.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TieReason {
    /// Neither player has a legal simple move or capture.
    Stalemate,
    /// More than [`MOVE_LIMIT`] consecutive simple moves were played without a capture.
    MoveLimit,
}

/// The outcome of a single match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameOutcome {
    /// The given player has lost, for the given reason.
    Loss(LossReason, Player),
    /// The match is tied, for the given reason.
    Tie(TieReason),
}

/// The current status of the match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// Match is still ongoing.
    Ongoing,
    /// Match is over, with the given outcome.
    Over(GameOutcome),
}

/// The maximum number of consecutive simple (non-capture) plays before the match is drawn.
pub const MOVE_LIMIT: u32 = 25;

/// The match driver: holds the single authoritative [`Board`], runs the turn loop between
/// two agents, detects terminal conditions and maintains the draw counter.
///
/// Agents only ever see an independent snapshot of the board, so they can never mutate the
/// authoritative state.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Game {
    pub board: Board,
    /// Number of successful plays made by either side.
    pub turn: u32,
    /// Consecutive simple plays since the last capture. This is driver state, not board
    /// state.
    pub plays_since_capture: u32,
    pub status: GameStatus,
}

impl Game {
    /// A new match from the standard starting position.
    pub fn new() -> Self {
        Self::with_board(Board::starting())
    }

    /// A new match from an arbitrary position.
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            turn: 0,
            plays_since_capture: 0,
            status: GameStatus::Ongoing,
        }
    }

    fn can_play(board: &Board, player: Player) -> bool {
        board.has_move(player) || board.has_capture(player)
    }

    /// Evaluate the terminal conditions for the player to move, in order: out of pieces
    /// loses; otherwise, a player with no legal play loses, unless the opponent is also
    /// stuck, which is a tie. Returns `None` while the match can continue.
    ///
    /// The opponent's plays are checked directly, without touching the turn state.
    pub fn terminal_outcome(&self) -> Option<GameOutcome> {
        let player = self.board.side_to_play();
        if self.board.count_pieces(player) == 0 {
            return Some(GameOutcome::Loss(LossReason::NoPieces, player));
        }
        if !Self::can_play(&self.board, player) {
            return Some(if !Self::can_play(&self.board, player.other()) {
                GameOutcome::Tie(TieReason::Stalemate)
            } else {
                GameOutcome::Loss(LossReason::NoMoves, player)
            });
        }
        None
    }

    /// Submit one play to the board, maintaining the turn counter and the 25-move draw
    /// rule. Returns the match status after the play.
    pub fn do_play(&mut self, play: Play) -> Result<GameStatus, IllegalMove> {
        let outcome = self.board.process_move(play)?;
        self.turn += 1;
        if outcome.captured.is_some() {
            self.plays_since_capture = 0;
        } else {
            self.plays_since_capture += 1;
            if self.plays_since_capture > MOVE_LIMIT {
                self.status = GameStatus::Over(GameOutcome::Tie(TieReason::MoveLimit));
            }
        }
        Ok(self.status)
    }

    /// Run the match to completion: `black` plays Black (and so moves first), `red` plays
    /// Red.
    ///
    /// Each turn the terminal conditions are checked, then the current player's agent is
    /// asked for a play against a snapshot of the board, and the play is submitted. An
    /// illegal play from an interactive agent is reported back to it and the agent is
    /// asked again; from any other agent it forfeits the match.
    pub fn play_match<'a>(&mut self, black: &'a mut dyn Agent, red: &'a mut dyn Agent) -> GameOutcome {
        loop {
            if let GameStatus::Over(outcome) = self.status {
                return outcome;
            }
            if let Some(outcome) = self.terminal_outcome() {
                self.status = GameStatus::Over(outcome);
                log::debug!("match over after {} plays: {outcome:?}", self.turn);
                return outcome;
            }
            let side = self.board.side_to_play();
            let agent = match side {
                Player::Black => &mut *black,
                Player::Red => &mut *red,
            };
            let snapshot = self.board.clone();
            let play = agent.select_play(&snapshot);
            if let Err(reason) = self.do_play(play) {
                if agent.interactive() {
                    log::warn!("illegal play {play} by {side}: {reason}");
                    agent.notify_illegal(play, &reason);
                } else {
                    log::warn!("agent for {side} submitted illegal play {play} ({reason}), forfeiting");
                    let outcome = GameOutcome::Loss(LossReason::Forfeit, side);
                    self.status = GameStatus::Over(outcome);
                    return outcome;
                }
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for GameOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Loss(LossReason::NoPieces, p) => {
                write!(f, "{p} lost: no pieces left")
            }
            GameOutcome::Loss(LossReason::NoMoves, p) => {
                write!(f, "{p} lost: no legal move available")
            }
            GameOutcome::Loss(LossReason::Forfeit, p) => {
                write!(f, "{p} lost: forfeited with an illegal move")
            }
            GameOutcome::Tie(TieReason::Stalemate) => write!(f, "tie: both players stalemated"),
            GameOutcome::Tie(TieReason::MoveLimit) => {
                write!(f, "tie: {MOVE_LIMIT}-move rule")
            }
        }
    }
}
