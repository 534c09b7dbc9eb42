mod scan;

pub use scan::*;

use crate::PlayerId;

/// The smallest allowed number of rows or columns.
pub const MIN_BOARD_SIZE: usize = 4;
/// The largest allowed number of rows or columns, one per letter.
pub const MAX_BOARD_SIZE: usize = 26;

/// The state of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Disc(PlayerId),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Disc(id) => Some(id),
        }
    }

    /// The character drawn for this cell: a space, `X` or `O`.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Disc(id) => id.symbol(),
        }
    }
}

/// A rectangular Othello board.
///
/// The cells are only reachable through [`Self::get()`] and [`Self::set()`],
/// and through the move engine ([`Self::calculate()`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    // Row-major, i.e. indexed by [row * cols + col].
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Board {
    /// Creates a board with the four starting discs in the center.
    ///
    /// Both dimensions must be even and between [`MIN_BOARD_SIZE`] and
    /// [`MAX_BOARD_SIZE`]. Otherwise the result is the degenerate 0x0 board,
    /// see [`Self::is_degenerate()`].
    pub fn new(rows: usize, cols: usize) -> Self {
        if !Self::is_valid_size(rows) || !Self::is_valid_size(cols) {
            return Self::degenerate();
        }

        let mut board = Self {
            cells: vec![Cell::Empty; rows * cols],
            rows,
            cols,
        };
        let (r, c) = (rows / 2, cols / 2);
        board.set(r - 1, c - 1, Cell::Disc(PlayerId::White));
        board.set(r - 1, c, Cell::Disc(PlayerId::Black));
        board.set(r, c - 1, Cell::Disc(PlayerId::Black));
        board.set(r, c, Cell::Disc(PlayerId::White));
        board
    }

    /// The 0x0 board that stands in for a board with invalid dimensions.
    pub fn degenerate() -> Self {
        Self {
            cells: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Whether `size` is allowed as a number of rows or columns.
    pub fn is_valid_size(size: usize) -> bool {
        (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) && size % 2 == 0
    }

    /// A game cannot be played on this board.
    pub fn is_degenerate(&self) -> bool {
        self.cells.is_empty()
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the signed position lies on the board.
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Panics if the position is outside of the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.idx(row, col)]
    }

    /// Panics if the position is outside of the board.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.idx(row, col);
        self.cells[idx] = cell;
    }

    /// All cells in row-major order, with their positions.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) is outside of the {}x{} board",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discs(board: &Board) -> Vec<(usize, usize, Cell)> {
        board.cells().filter(|(_, _, cell)| !cell.is_empty()).collect()
    }

    #[test]
    fn starting_position_for_every_size() {
        for rows in (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).step_by(2) {
            for cols in (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).step_by(2) {
                let board = Board::new(rows, cols);
                assert_eq!(board.dimensions(), (rows, cols));
                let (r, c) = (rows / 2, cols / 2);
                assert_eq!(
                    discs(&board),
                    vec![
                        (r - 1, c - 1, Cell::Disc(PlayerId::White)),
                        (r - 1, c, Cell::Disc(PlayerId::Black)),
                        (r, c - 1, Cell::Disc(PlayerId::Black)),
                        (r, c, Cell::Disc(PlayerId::White)),
                    ]
                );
            }
        }
    }

    #[test]
    fn standard_board() {
        let board = Board::new(8, 8);
        assert_eq!(board.get(3, 3), Cell::Disc(PlayerId::White));
        assert_eq!(board.get(3, 4), Cell::Disc(PlayerId::Black));
        assert_eq!(board.get(4, 3), Cell::Disc(PlayerId::Black));
        assert_eq!(board.get(4, 4), Cell::Disc(PlayerId::White));
        assert_eq!(discs(&board).len(), 4);
    }

    #[test]
    fn invalid_sizes_are_degenerate() {
        for (rows, cols) in [(5, 8), (28, 8), (8, 28), (2, 8), (8, 0), (8, 7), (0, 0)] {
            let board = Board::new(rows, cols);
            assert!(board.is_degenerate(), "{}x{}", rows, cols);
            assert_eq!(board.dimensions(), (0, 0));
        }
        assert!(!Board::new(4, 26).is_degenerate());
    }

    #[test]
    fn contains() {
        let board = Board::new(4, 6);
        assert!(board.contains(0, 0));
        assert!(board.contains(3, 5));
        assert!(!board.contains(4, 0));
        assert!(!board.contains(0, 6));
        assert!(!board.contains(-1, 2));
        assert!(!Board::degenerate().contains(0, 0));
    }

    #[test]
    fn set_then_get() {
        let mut board = Board::new(6, 4);
        board.set(5, 3, Cell::Disc(PlayerId::Black));
        assert_eq!(board.get(5, 3), Cell::Disc(PlayerId::Black));
        board.set(5, 3, Cell::Empty);
        assert_eq!(board.get(5, 3), Cell::Empty);
    }

    #[test]
    #[should_panic]
    fn get_out_of_bounds() {
        Board::new(4, 4).get(0, 4);
    }

    #[test]
    #[should_panic]
    fn set_on_degenerate_board() {
        Board::degenerate().set(0, 0, Cell::Disc(PlayerId::White));
    }
}
