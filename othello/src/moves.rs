use std::str::FromStr;

use crate::{scan, Board, Cell, Coordinate, Direction, IllegalMove, Player, PlayerId, Scan};

/// The token that passes the turn.
pub const SKIP: &str = "skip";

/// What a player asked to do on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    /// Pass the turn without touching the board.
    Skip,
    Place(Coordinate),
}

impl FromStr for Move {
    type Err = IllegalMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == SKIP {
            return Ok(Move::Skip);
        }
        s.parse()
            .map(Move::Place)
            .map_err(|_| IllegalMove::Malformed {
                token: String::from(s),
            })
    }
}

/// Summarizes the effect of an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Skipped,
    Placed {
        coordinate: Coordinate,
        flipped: usize,
    },
}

/// A legal placement, checked against a board but not yet applied to it.
///
/// It records the capture run found in every direction, so that applying it
/// does not need to scan again. It's only meaningful for the board it was
/// calculated on, in the state it had at that time.
#[derive(Clone, Debug)]
pub struct MoveCalculation {
    mover: PlayerId,
    coordinate: Coordinate,
    // Indexed like Direction::ALL
    scans: [Scan; 8],
    dimensions: (usize, usize),
}

impl Board {
    /// Checks whether `mover` may place a disc at `coordinate` and works out
    /// which discs would be flipped.
    ///
    /// All eight directions are scanned before anything is decided, and the
    /// board is not changed. Call [`MoveCalculation::execute()`] to apply
    /// the result.
    pub fn calculate(
        &self,
        mover: PlayerId,
        coordinate: Coordinate,
    ) -> Result<MoveCalculation, IllegalMove> {
        let Coordinate { row, col } = coordinate;
        if row >= self.rows() || col >= self.cols() {
            return Err(IllegalMove::OutOfBounds { coordinate });
        }
        if !self.get(row, col).is_empty() {
            return Err(IllegalMove::Occupied { coordinate });
        }

        let scans = Direction::ALL.map(|direction| scan(self, mover, row, col, direction));
        if !scans.iter().any(|s| s.valid) {
            return Err(IllegalMove::NoCapture { coordinate });
        }

        Ok(MoveCalculation {
            mover,
            coordinate,
            scans,
            dimensions: self.dimensions(),
        })
    }

    /// All coordinates where `mover` could place a disc, in row-major order.
    pub fn legal_moves(&self, mover: PlayerId) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells()
            .filter(|(_, _, cell)| cell.is_empty())
            .map(|(row, col, _)| Coordinate::new(row, col))
            .filter(move |&coordinate| self.calculate(mover, coordinate).is_ok())
    }

    /// Is there any placement for `mover`? If not, they can only skip.
    pub fn has_legal_move(&self, mover: PlayerId) -> bool {
        self.legal_moves(mover).next().is_some()
    }
}

impl MoveCalculation {
    pub fn mover(&self) -> PlayerId {
        self.mover
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// The directions that capture something, with the number of discs captured.
    pub fn runs(&self) -> impl Iterator<Item = (Direction, usize)> + '_ {
        Direction::ALL
            .iter()
            .zip(self.scans.iter())
            .filter_map(|(&direction, s)| s.run().map(|length| (direction, length)))
    }

    /// How many opponent discs this move flips in total.
    pub fn flips(&self) -> usize {
        self.runs().map(|(_, length)| length).sum()
    }

    /// Places the disc and flips every captured run. Returns the number of
    /// flipped discs.
    ///
    /// Panics if `board` is not in the state this was calculated on, i.e. if
    /// the target cell is taken or a captured cell no longer holds an
    /// opponent disc. Nothing is changed in that case.
    pub fn execute(self, board: &mut Board) -> usize {
        assert_eq!(
            board.dimensions(),
            self.dimensions,
            "move calculation applied to a different board"
        );
        let Coordinate { row, col } = self.coordinate;
        assert!(
            board.get(row, col).is_empty(),
            "move calculation applied to a changed board: {} is occupied",
            self.coordinate
        );
        let opponent = Cell::Disc(!self.mover);
        for (direction, length) in self.runs() {
            for steps in 1..=length {
                let (r, c) = direction.step(row, col, steps);
                assert_eq!(
                    board.get(r as usize, c as usize),
                    opponent,
                    "move calculation applied to a changed board"
                );
            }
        }

        let disc = Cell::Disc(self.mover);
        board.set(row, col, disc);

        // Runs in different directions never overlap, so the order doesn't matter.
        let mut flipped = 0;
        for (direction, length) in self.runs() {
            for steps in 1..=length {
                let (r, c) = direction.step(row, col, steps);
                board.set(r as usize, c as usize, disc);
            }
            flipped += length;
        }
        flipped
    }
}

/// Parses and plays `token` for `player`.
///
/// `skip` is always accepted and leaves the board alone. Any other token must
/// name an empty cell on the board from which at least one line of opponent
/// discs is captured. If the move is rejected, the board is unchanged.
pub fn apply_move(
    board: &mut Board,
    player: &Player,
    token: &str,
) -> Result<MoveOutcome, IllegalMove> {
    match token.parse::<Move>()? {
        Move::Skip => Ok(MoveOutcome::Skipped),
        Move::Place(coordinate) => {
            let calculation = board.calculate(player.id(), coordinate)?;
            let flipped = calculation.execute(board);
            Ok(MoveOutcome::Placed {
                coordinate,
                flipped,
            })
        }
    }
}

/// Like [`apply_move()`], but only reports whether the move was accepted.
pub fn try_move(board: &mut Board, player: &Player, token: &str) -> bool {
    apply_move(board, player, token).is_ok()
}
