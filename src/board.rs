use crate::error::{IllegalMove, ParseError};
use crate::pieces::{Piece, Player};
use crate::play::{Play, PlayKind};
use crate::tiles::Tile;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four diagonal step directions, in the order in which plays are generated:
/// down-right, up-left, down-left, up-right.
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

/// A single square of the 8x8 grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Square {
    /// A square outside the diagonal pattern. Exactly half the board is made up of these;
    /// they are never playable and never change state.
    Invalid,
    /// A playable square with no piece on it.
    Empty,
    /// A playable square holding the given piece.
    Occupied(Piece),
}

/// Details of a successfully applied play, as returned by [`Board::process_move`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PlayOutcome {
    /// How the play was classified.
    pub kind: PlayKind,
    /// The square whose piece was removed, if the play was a capture.
    pub captured: Option<Tile>,
    /// Whether the play ended with a piece being crowned.
    pub promoted: bool,
}

/// The authoritative state of a game of draughts: the 8x8 grid of squares, the player whose
/// turn it is, and the capture-chain lock.
///
/// The lock names the square a piece has just captured into when that piece has a further
/// capture available; while it is set, the same player must move again and their next play
/// must start from the locked square. Despite the name, it has nothing to do with
/// concurrency control - it is ordinary board state.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    grid: [[Square; 8]; 8],
    side_to_play: Player,
    capture_lock: Option<Tile>,
}

impl Board {
    /// The canonical starting position: twelve uncrowned Red pieces on rows 0-2, twelve
    /// uncrowned Black pieces on rows 5-7, Black to move.
    pub fn starting() -> Self {
        let mut grid = [[Square::Invalid; 8]; 8];
        let mut invalid = true;
        for (i, row) in grid.iter_mut().enumerate() {
            for square in row.iter_mut() {
                if !invalid {
                    *square = if i < 3 {
                        Square::Occupied(Piece::plain(Player::Red))
                    } else if i > 4 {
                        Square::Occupied(Piece::plain(Player::Black))
                    } else {
                        Square::Empty
                    };
                }
                invalid = !invalid;
            }
            // The first square of a row continues the colouring of the previous row's last
            // square, so revert the flip here; otherwise the board ends up with vertical
            // stripes instead of a checkerboard.
            invalid = !invalid;
        }
        Self {
            grid,
            side_to_play: Player::Black,
            capture_lock: None,
        }
    }

    /// The contents of the given square.
    pub fn square(&self, t: Tile) -> Square {
        self.grid[t.row as usize][t.col as usize]
    }

    fn square_mut(&mut self, t: Tile) -> &mut Square {
        &mut self.grid[t.row as usize][t.col as usize]
    }

    /// The player whose turn it is.
    pub fn side_to_play(&self) -> Player {
        self.side_to_play
    }

    /// Give the turn to the given player. Intended for setting up hand-built positions;
    /// during a game the turn is managed by [`Board::process_move`].
    pub fn set_side_to_play(&mut self, player: Player) {
        self.side_to_play = player;
    }

    /// The square from which the current capture chain must be continued, if one is in
    /// progress.
    pub fn capture_lock(&self) -> Option<Tile> {
        self.capture_lock
    }

    /// The piece on the given square, if any.
    pub fn piece_at(&self, t: Tile) -> Option<Piece> {
        match self.square(t) {
            Square::Occupied(piece) => Some(piece),
            _ => None,
        }
    }

    /// The owner of the piece on the given square. `None` for empty and non-playable
    /// squares.
    pub fn owner_of(&self, t: Tile) -> Option<Player> {
        self.piece_at(t).map(|piece| piece.player)
    }

    /// Count the pieces, crowned or not, owned by the given player.
    pub fn count_pieces(&self, player: Player) -> u8 {
        self.tiles()
            .filter(|t| self.owner_of(*t) == Some(player))
            .count() as u8
    }

    /// All tiles of the board in row-major order.
    fn tiles(&self) -> impl Iterator<Item = Tile> {
        (0..8).flat_map(|row| (0..8).map(move |col| Tile::new(row, col)))
    }

    /// The target of a simple move from `from` in direction `(dr, dc)`, if the piece there
    /// may step that way onto an empty square.
    fn step_to(&self, from: Tile, dr: i8, dc: i8) -> Option<Tile> {
        let piece = self.piece_at(from)?;
        if !piece.may_move(dr) {
            return None;
        }
        let to = from.offset(dr, dc)?;
        if self.square(to) == Square::Empty {
            Some(to)
        } else {
            None
        }
    }

    /// The landing square of a capture from `from` in direction `(dr, dc)`, if the piece
    /// there may jump that way over an enemy piece onto an empty square.
    fn jump_to(&self, from: Tile, dr: i8, dc: i8) -> Option<Tile> {
        let piece = self.piece_at(from)?;
        if !piece.may_move(dr) {
            return None;
        }
        let mid = from.offset(dr, dc)?;
        let to = from.offset(dr * 2, dc * 2)?;
        if self.owner_of(mid) == Some(piece.player.other()) && self.square(to) == Square::Empty {
            Some(to)
        } else {
            None
        }
    }

    /// Enumerate every legal simple move for the given player. Callers should treat the
    /// result as a set; the enumeration order is not part of the contract.
    pub fn possible_moves(&self, player: Player) -> Vec<Play> {
        let mut moves = Vec::new();
        for from in self.tiles() {
            if self.owner_of(from) != Some(player) {
                continue;
            }
            for (dr, dc) in DIAGONALS {
                if let Some(to) = self.step_to(from, dr, dc) {
                    moves.push(Play::new(from, to));
                }
            }
        }
        moves
    }

    /// Enumerate every legal capture for the given player. While a capture chain is in
    /// progress, only captures starting from the locked square are returned.
    pub fn possible_captures(&self, player: Player) -> Vec<Play> {
        let mut captures = Vec::new();
        for from in self.tiles() {
            if self.owner_of(from) != Some(player) {
                continue;
            }
            if let Some(lock) = self.capture_lock {
                if from != lock {
                    continue;
                }
            }
            for (dr, dc) in DIAGONALS {
                if let Some(to) = self.jump_to(from, dr, dc) {
                    captures.push(Play::new(from, to));
                }
            }
        }
        captures
    }

    /// Whether the given player has at least one legal simple move.
    pub fn has_move(&self, player: Player) -> bool {
        self.tiles().any(|from| {
            self.owner_of(from) == Some(player)
                && DIAGONALS
                    .iter()
                    .any(|&(dr, dc)| self.step_to(from, dr, dc).is_some())
        })
    }

    /// Whether the given player has at least one legal capture anywhere on the board,
    /// ignoring the capture-chain lock. This is the check behind the mandatory-capture
    /// rule.
    pub fn has_capture(&self, player: Player) -> bool {
        self.tiles().any(|from| {
            self.owner_of(from) == Some(player)
                && DIAGONALS
                    .iter()
                    .any(|&(dr, dc)| self.jump_to(from, dr, dc).is_some())
        })
    }

    /// Whether the piece on the given square has a capture available.
    fn capture_possible_at(&self, from: Tile) -> bool {
        DIAGONALS
            .iter()
            .any(|&(dr, dc)| self.jump_to(from, dr, dc).is_some())
    }

    /// Crown any Red piece on row 7 and any Black piece on row 0. Idempotent: re-applying
    /// to an already-crowned piece is a no-op. Returns whether anything was crowned.
    fn crown_back_ranks(&mut self) -> bool {
        let mut promoted = false;
        for col in 0..8 {
            if let Square::Occupied(piece) = self.grid[7][col] {
                if piece.player == Player::Red && !piece.crowned {
                    self.grid[7][col] = Square::Occupied(Piece::king(Player::Red));
                    promoted = true;
                }
            }
            if let Square::Occupied(piece) = self.grid[0][col] {
                if piece.player == Player::Black && !piece.crowned {
                    self.grid[0][col] = Square::Occupied(Piece::king(Player::Black));
                    promoted = true;
                }
            }
        }
        promoted
    }

    /// Validate and apply a single play for the player to move. This is the only way the
    /// board is mutated after creation.
    ///
    /// The checks run in a fixed order and the first failure is reported; on failure no
    /// part of the play is applied. On success the piece is relocated, any captured piece
    /// is removed, promotion is applied, and either the turn passes to the opponent or -
    /// when a capture leaves a further capture available from the landing square - the
    /// capture-chain lock is set and the same player moves again.
    pub fn process_move(&mut self, play: Play) -> Result<PlayOutcome, IllegalMove> {
        if !(play.from.in_bounds() && play.to.in_bounds()) {
            return Err(IllegalMove::OutOfBounds);
        }
        if let Some(lock) = self.capture_lock {
            if play.from != lock {
                return Err(IllegalMove::MustContinueChain(lock));
            }
        }
        let piece = match self.piece_at(play.from) {
            Some(piece) if piece.player == self.side_to_play => piece,
            _ => return Err(IllegalMove::NotYourPiece),
        };
        if self.square(play.to) != Square::Empty {
            return Err(IllegalMove::DestinationOccupied);
        }
        let (dr, _) = play.delta();
        // Checked before classification, so it applies identically to steps and jumps.
        if !piece.crowned && dr.signum() == -piece.player.forward() {
            return Err(IllegalMove::BackwardMove);
        }
        let kind = play.kind().ok_or(IllegalMove::BadDistance)?;

        let captured = match kind {
            PlayKind::Simple => {
                if let Some(lock) = self.capture_lock {
                    return Err(IllegalMove::MustContinueChain(lock));
                }
                if self.has_capture(self.side_to_play) {
                    return Err(IllegalMove::CaptureAvailable);
                }
                *self.square_mut(play.to) = Square::Occupied(piece);
                *self.square_mut(play.from) = Square::Empty;
                self.side_to_play = self.side_to_play.other();
                None
            }
            PlayKind::Capture => {
                let mid = play.midpoint();
                if self.owner_of(mid) != Some(piece.player.other()) {
                    return Err(IllegalMove::NotAnEnemyPiece);
                }
                *self.square_mut(play.to) = Square::Occupied(piece);
                *self.square_mut(mid) = Square::Empty;
                *self.square_mut(play.from) = Square::Empty;
                if self.capture_possible_at(play.to) {
                    // The chain must be continued: same player, locked to the landing
                    // square.
                    self.capture_lock = Some(play.to);
                } else {
                    self.capture_lock = None;
                    self.side_to_play = self.side_to_play.other();
                }
                Some(mid)
            }
        };
        let promoted = self.crown_back_ranks();
        Ok(PlayOutcome {
            kind,
            captured,
            promoted,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl Display for Board {
    /// Eight lines of eight characters: `r`/`R`/`b`/`B` for pieces, `.` for empty playable
    /// squares and `*` for non-playable squares.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.grid.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for square in row {
                match square {
                    Square::Invalid => write!(f, "*")?,
                    Square::Empty => write!(f, ".")?,
                    Square::Occupied(piece) => write!(f, "{}", piece.to_char())?,
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Parse a board from eight lines of eight characters. Piece characters are those of
    /// [`Piece::from_char`]; `.`, `*` and space are all accepted for squares without a
    /// piece, with the checkerboard parity deciding whether each is playable. Placing a
    /// piece on a non-playable square is an error. The parsed board has Black to move and
    /// no capture chain in progress.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        if lines.len() != 8 {
            return Err(ParseError::BadStringLen(lines.len()));
        }
        let mut grid = [[Square::Invalid; 8]; 8];
        for (i, line) in lines.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != 8 {
                return Err(ParseError::BadLineLen(chars.len()));
            }
            for (j, c) in chars.into_iter().enumerate() {
                let playable = (i + j) % 2 == 1;
                grid[i][j] = match c {
                    '.' | '*' | ' ' => {
                        if playable {
                            Square::Empty
                        } else {
                            Square::Invalid
                        }
                    }
                    c => match Piece::from_char(c) {
                        Some(piece) if playable => Square::Occupied(piece),
                        Some(_) => {
                            return Err(ParseError::NonPlayableSquare(Tile::new(
                                i as u8, j as u8,
                            )))
                        }
                        None => return Err(ParseError::BadChar(c)),
                    },
                };
            }
        }
        Ok(Self {
            grid,
            side_to_play: Player::Black,
            capture_lock: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Square};
    use crate::error::IllegalMove;
    use crate::pieces::{Piece, Player};
    use crate::play::{Play, PlayKind};
    use crate::tiles::Tile;
    use std::str::FromStr;

    fn board(s: &str) -> Board {
        Board::from_str(s).unwrap()
    }

    fn play(s: &str) -> Play {
        Play::from_str(s).unwrap()
    }

    #[test]
    fn test_starting_layout() {
        let b = Board::starting();
        assert_eq!(b.side_to_play(), Player::Black);
        assert_eq!(b.capture_lock(), None);
        assert_eq!(b.count_pieces(Player::Red), 12);
        assert_eq!(b.count_pieces(Player::Black), 12);
        for row in 0..8 {
            for col in 0..8 {
                let t = Tile::new(row, col);
                let playable = (row + col) % 2 == 1;
                assert_eq!(b.square(t) == Square::Invalid, !playable, "square {t}");
                match b.square(t) {
                    Square::Occupied(piece) => {
                        assert!(!piece.crowned);
                        if row < 3 {
                            assert_eq!(piece.player, Player::Red);
                        } else {
                            assert!(row > 4);
                            assert_eq!(piece.player, Player::Black);
                        }
                    }
                    Square::Empty => assert!((3..=4).contains(&row) && playable),
                    Square::Invalid => {}
                }
            }
        }
    }

    #[test]
    fn test_starting_position_black_moves() {
        // Scenario A: Black has exactly 7 simple moves and no captures to begin with.
        let mut b = Board::starting();
        assert_eq!(b.possible_moves(Player::Black).len(), 7);
        assert_eq!(b.possible_captures(Player::Black), vec![]);
        let outcome = b.process_move(Play::new(Tile::new(5, 2), Tile::new(4, 1))).unwrap();
        assert_eq!(outcome.kind, PlayKind::Simple);
        assert_eq!(outcome.captured, None);
        assert!(!outcome.promoted);
        assert_eq!(b.side_to_play(), Player::Red);
        assert_eq!(b.square(Tile::new(5, 2)), Square::Empty);
        assert_eq!(
            b.square(Tile::new(4, 1)),
            Square::Occupied(Piece::plain(Player::Black))
        );
    }

    #[test]
    fn test_validation_failures() {
        let mut b = Board::starting();
        assert_eq!(
            b.process_move(Play::new(Tile::new(5, 2), Tile::new(4, 8))),
            Err(IllegalMove::OutOfBounds)
        );
        // A Red piece, an empty square and a non-playable square are all "not your
        // piece" for Black.
        assert_eq!(
            b.process_move(play("b3-a4")),
            Err(IllegalMove::NotYourPiece)
        );
        assert_eq!(
            b.process_move(play("a4-b5")),
            Err(IllegalMove::NotYourPiece)
        );
        assert_eq!(
            b.process_move(play("a3-b4")),
            Err(IllegalMove::NotYourPiece)
        );
        // b7 holds a Black piece but a6 is occupied by Black too.
        assert_eq!(
            b.process_move(play("b7-a6")),
            Err(IllegalMove::DestinationOccupied)
        );
        // Two squares along a diagonal with nothing to capture.
        assert_eq!(
            b.process_move(play("c6-e4")),
            Err(IllegalMove::NotAnEnemyPiece)
        );
        // Straight and otherwise misshapen moves.
        assert_eq!(
            b.process_move(play("c6-c4")),
            Err(IllegalMove::BadDistance)
        );
        assert_eq!(
            b.process_move(play("c6-f5")),
            Err(IllegalMove::BadDistance)
        );
    }

    #[test]
    fn test_backward_move_rejected() {
        // Scenario F: an uncrowned Red piece may not move from row 4 back to row 3.
        let mut b = board(
            "........\n\
             ........\n\
             ........\n\
             ........\n\
             .r......\n\
             ........\n\
             ........\n\
             ....b...",
        );
        b.set_side_to_play(Player::Red);
        assert_eq!(
            b.process_move(Play::new(Tile::new(4, 1), Tile::new(3, 0))),
            Err(IllegalMove::BackwardMove)
        );
        // Moving forward is fine.
        assert!(b
            .process_move(Play::new(Tile::new(4, 1), Tile::new(5, 0)))
            .is_ok());
    }

    #[test]
    fn test_backward_capture_rejected() {
        // A Black piece is right behind the uncrowned Red piece, but jumping it would
        // move Red backwards. The backward check fires before the capture branch.
        let mut b = board(
            "........\n\
             ........\n\
             ........\n\
             ..b.....\n\
             .r......\n\
             ........\n\
             ........\n\
             ....b...",
        );
        b.set_side_to_play(Player::Red);
        assert_eq!(
            b.process_move(Play::new(Tile::new(4, 1), Tile::new(2, 3))),
            Err(IllegalMove::BackwardMove)
        );
        // A crowned Red piece may make the same jump if it is over an enemy.
        let mut b2 = board(
            "........\n\
             ........\n\
             ........\n\
             ..b.....\n\
             .R......\n\
             ........\n\
             ........\n\
             ....b...",
        );
        b2.set_side_to_play(Player::Red);
        let outcome = b2
            .process_move(Play::new(Tile::new(4, 1), Tile::new(2, 3)))
            .unwrap();
        assert_eq!(outcome.captured, Some(Tile::new(3, 2)));
    }

    #[test]
    fn test_kings_move_all_directions() {
        let mut b = board(
            "........\n\
             ........\n\
             ........\n\
             ........\n\
             .R......\n\
             ........\n\
             ........\n\
             ....b...",
        );
        b.set_side_to_play(Player::Red);
        assert!(b
            .process_move(Play::new(Tile::new(4, 1), Tile::new(3, 0)))
            .is_ok());
        let moves = b.possible_moves(Player::Red);
        assert!(moves.contains(&Play::new(Tile::new(3, 0), Tile::new(4, 1))));
        assert!(moves.contains(&Play::new(Tile::new(3, 0), Tile::new(2, 1))));
    }

    #[test]
    fn test_mandatory_capture() {
        // Black at c6 can capture the Red piece at b5; every simple move must fail.
        let mut b = board(
            "........\n\
             ........\n\
             ........\n\
             ........\n\
             .r......\n\
             ..b.....\n\
             ........\n\
             ....b...",
        );
        assert_eq!(
            b.possible_captures(Player::Black),
            vec![Play::new(Tile::new(5, 2), Tile::new(3, 0))]
        );
        assert_eq!(
            b.process_move(play("c6-d5")),
            Err(IllegalMove::CaptureAvailable)
        );
        assert_eq!(
            b.process_move(play("e8-d7")),
            Err(IllegalMove::CaptureAvailable)
        );
        let outcome = b.process_move(play("c6-a4")).unwrap();
        assert_eq!(outcome.kind, PlayKind::Capture);
        assert_eq!(outcome.captured, Some(Tile::new(4, 1)));
        assert_eq!(b.square(Tile::new(4, 1)), Square::Empty);
        assert_eq!(b.side_to_play(), Player::Red);
        assert_eq!(b.count_pieces(Player::Red), 0);
    }

    #[test]
    fn test_capture_chain_lock() {
        // Scenario B (chain): Black at e6 jumps d5 landing on c4, from where a second
        // capture over b3 is available. The turn must not pass and every play not
        // starting from c4 must be rejected.
        let mut b = board(
            "........\n\
             ........\n\
             .r......\n\
             ........\n\
             ...r....\n\
             ....b...\n\
             ........\n\
             ......b.",
        );
        let first = Play::new(Tile::new(5, 4), Tile::new(3, 2));
        let outcome = b.process_move(first).unwrap();
        assert_eq!(outcome.captured, Some(Tile::new(4, 3)));
        assert_eq!(b.side_to_play(), Player::Black);
        assert_eq!(b.capture_lock(), Some(Tile::new(3, 2)));
        // While locked, capture generation is restricted to the locked square.
        assert_eq!(
            b.possible_captures(Player::Black),
            vec![Play::new(Tile::new(3, 2), Tile::new(1, 0))]
        );
        let lock_err = Err(IllegalMove::MustContinueChain(Tile::new(3, 2)));
        assert_eq!(b.process_move(play("g8-f7")), lock_err);
        assert_eq!(
            b.process_move(Play::new(Tile::new(7, 6), Tile::new(5, 4))),
            lock_err
        );
        // Even a simple move from the locked square must continue the chain.
        assert_eq!(
            b.process_move(Play::new(Tile::new(3, 2), Tile::new(2, 3))),
            lock_err
        );
        let second = Play::new(Tile::new(3, 2), Tile::new(1, 0));
        let outcome = b.process_move(second).unwrap();
        assert_eq!(outcome.captured, Some(Tile::new(2, 1)));
        assert_eq!(b.capture_lock(), None);
        assert_eq!(b.side_to_play(), Player::Red);
        assert_eq!(b.count_pieces(Player::Red), 0);
    }

    #[test]
    fn test_promotion() {
        let mut b = board(
            "........\n\
             ..b.....\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             .r......\n\
             ....b...",
        );
        b.set_side_to_play(Player::Red);
        let outcome = b.process_move(Play::new(Tile::new(6, 1), Tile::new(7, 0))).unwrap();
        assert!(outcome.promoted);
        assert_eq!(
            b.square(Tile::new(7, 0)),
            Square::Occupied(Piece::king(Player::Red))
        );
        let outcome = b.process_move(Play::new(Tile::new(1, 2), Tile::new(0, 1))).unwrap();
        assert!(outcome.promoted);
        assert_eq!(
            b.square(Tile::new(0, 1)),
            Square::Occupied(Piece::king(Player::Black))
        );
        // Idempotence: the crowned pieces stay crowned after further plays.
        let outcome = b.process_move(Play::new(Tile::new(7, 0), Tile::new(6, 1))).unwrap();
        assert!(!outcome.promoted);
        let outcome = b.process_move(Play::new(Tile::new(0, 1), Tile::new(1, 0))).unwrap();
        assert!(!outcome.promoted);
        assert_eq!(
            b.square(Tile::new(1, 0)),
            Square::Occupied(Piece::king(Player::Black))
        );
    }

    #[test]
    fn test_invalid_squares_stay_invalid() {
        let mut b = Board::starting();
        b.process_move(play("c6-b5")).unwrap();
        b.process_move(play("d3-c4")).unwrap();
        for row in 0..8 {
            for col in 0..8 {
                if (row + col) % 2 == 0 {
                    assert_eq!(b.square(Tile::new(row, col)), Square::Invalid);
                }
            }
        }
    }

    #[test]
    fn test_piece_counts_decrease_by_one_per_capture() {
        let mut b = board(
            "........\n\
             ........\n\
             .r......\n\
             ........\n\
             ...r....\n\
             ....b...\n\
             ........\n\
             ......b.",
        );
        assert_eq!(b.count_pieces(Player::Red), 2);
        assert_eq!(b.count_pieces(Player::Black), 2);
        b.process_move(Play::new(Tile::new(5, 4), Tile::new(3, 2))).unwrap();
        assert_eq!(b.count_pieces(Player::Red), 1);
        assert_eq!(b.count_pieces(Player::Black), 2);
        b.process_move(Play::new(Tile::new(3, 2), Tile::new(1, 0))).unwrap();
        assert_eq!(b.count_pieces(Player::Red), 0);
        assert_eq!(b.count_pieces(Player::Black), 2);
    }

    #[test]
    fn test_clone_round_trip() {
        let mut original = board(
            "........\n\
             ........\n\
             .r......\n\
             ........\n\
             ...r....\n\
             ....b...\n\
             ........\n\
             ......b.",
        );
        let mut clone = original.clone();
        assert_eq!(original, clone);
        let plays = [
            Play::new(Tile::new(5, 4), Tile::new(3, 2)),
            Play::new(Tile::new(3, 2), Tile::new(1, 0)),
        ];
        for p in plays {
            original.process_move(p).unwrap();
            clone.process_move(p).unwrap();
            // Structural equality includes the lock and the turn.
            assert_eq!(original, clone);
        }
    }

    #[test]
    fn test_board_notation_round_trip() {
        let b = Board::starting();
        let text = b.to_string();
        assert_eq!(
            text,
            "*r*r*r*r\n\
             r*r*r*r*\n\
             *r*r*r*r\n\
             .*.*.*.*\n\
             *.*.*.*.\n\
             b*b*b*b*\n\
             *b*b*b*b\n\
             b*b*b*b*"
        );
        assert_eq!(Board::from_str(&text).unwrap(), b);
    }

    #[test]
    fn test_bad_board_strings() {
        assert!(Board::from_str("........").is_err());
        assert!(Board::from_str(&"x.......\n".repeat(8).trim_end()).is_err());
        // A piece on a light square is rejected.
        let s = "r.......\n........\n........\n........\n\
                 ........\n........\n........\n........";
        assert!(Board::from_str(s).is_err());
    }
}
