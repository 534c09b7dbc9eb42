use crate::{Board, Cell, PlayerId};

/// One of the eight compass steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    pub const EAST: Self = Self::new(0, 1);
    pub const SOUTH_EAST: Self = Self::new(1, 1);
    pub const SOUTH: Self = Self::new(1, 0);
    pub const SOUTH_WEST: Self = Self::new(1, -1);
    pub const WEST: Self = Self::new(0, -1);
    pub const NORTH_WEST: Self = Self::new(-1, -1);
    pub const NORTH: Self = Self::new(-1, 0);
    pub const NORTH_EAST: Self = Self::new(-1, 1);

    /// All eight directions, clockwise starting east.
    pub const ALL: [Self; 8] = [
        Self::EAST,
        Self::SOUTH_EAST,
        Self::SOUTH,
        Self::SOUTH_WEST,
        Self::WEST,
        Self::NORTH_WEST,
        Self::NORTH,
        Self::NORTH_EAST,
    ];

    const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }

    /// The position `steps` steps away from `(row, col)`, possibly off the board.
    pub fn step(self, row: usize, col: usize, steps: usize) -> (isize, isize) {
        (
            row as isize + self.d_row as isize * steps as isize,
            col as isize + self.d_col as isize * steps as isize,
        )
    }
}

/// What a line of cells in one direction would capture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scan {
    /// The line ends in a disc of the mover and there is at least one
    /// opponent disc before it.
    pub valid: bool,
    /// The number of opponent discs before the mover's disc.
    pub length: usize,
}

impl Scan {
    const BLOCKED: Self = Self {
        valid: false,
        length: 0,
    };

    /// The number of discs captured, if any.
    pub fn run(self) -> Option<usize> {
        self.valid.then_some(self.length)
    }
}

/// Walks from the cell next to `(row, col)` in `direction` and reports the
/// opponent discs `mover` would capture on that line.
///
/// The line captures nothing if it leaves the board or reaches an empty cell
/// before a disc of `mover`, or if that disc is directly adjacent.
/// The cell at `(row, col)` itself is not looked at.
pub fn scan(board: &Board, mover: PlayerId, row: usize, col: usize, direction: Direction) -> Scan {
    let mut length = 0;
    loop {
        let (r, c) = direction.step(row, col, length + 1);
        if !board.contains(r, c) {
            return Scan::BLOCKED;
        }
        match board.get(r as usize, c as usize) {
            Cell::Empty => return Scan::BLOCKED,
            Cell::Disc(owner) if owner == mover => {
                return Scan {
                    valid: length > 0,
                    length,
                }
            }
            Cell::Disc(_) => length += 1,
        }
    }
}
