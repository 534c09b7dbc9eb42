//! Letter names for rows and columns, and the two-letter coordinate token.
//!
//! Both rows and columns are named `a`..`z` (0-indexed), so a token like
//! `"bc"` means row 1, column 2.

use std::fmt::{self, Display, Formatter, Write};
use std::str::FromStr;

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// The letter naming row or column `index`, or `None` past `z`.
pub fn letter_for(index: usize) -> Option<char> {
    LETTERS.chars().nth(index)
}

/// The index named by a single lowercase letter, or `None` for anything else.
pub fn index_for(letter: &str) -> Option<usize> {
    let mut chars = letter.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    LETTERS.find(c)
}

/// A cell position on the board.
///
/// A coordinate is not tied to any board; it may lie outside a particular
/// board, which the move engine checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Writes the two-letter token ("bc"), or "(row, col)" if an index has no letter.
impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match (letter_for(self.row), letter_for(self.col)) {
            (Some(row), Some(col)) => {
                f.write_char(row)?;
                f.write_char(col)
            }
            _ => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseCoordinateError;

impl std::error::Error for ParseCoordinateError {}

impl Display for ParseCoordinateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "expected a row letter followed by a column letter")
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let row = chars.next().ok_or(ParseCoordinateError)?;
        let col = chars.next().ok_or(ParseCoordinateError)?;
        if chars.next().is_some() {
            return Err(ParseCoordinateError);
        }
        let row = LETTERS.find(row).ok_or(ParseCoordinateError)?;
        let col = LETTERS.find(col).ok_or(ParseCoordinateError)?;
        Ok(Self { row, col })
    }
}
