use crate::Coordinate;

/// The error type for [`apply_move()`](crate::apply_move) and
/// [`Board::calculate()`](crate::Board::calculate), i.e. why a move was rejected.
///
/// A rejected move never changes the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    /// The input is neither `skip` nor a row letter followed by a column letter.
    Malformed { token: String },
    OutOfBounds { coordinate: Coordinate },
    Occupied { coordinate: Coordinate },
    /// No line from the coordinate brackets any opponent discs.
    NoCapture { coordinate: Coordinate },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::Malformed { token } => write!(
                f,
                "'{}' is not a move, expected a row letter followed by a column letter, or 'skip'",
                token
            ),
            IllegalMove::OutOfBounds { coordinate } => {
                write!(f, "Cell {} is outside of the board", coordinate)
            }
            IllegalMove::Occupied { coordinate } => {
                write!(f, "Cell {} is already occupied", coordinate)
            }
            IllegalMove::NoCapture { coordinate } => write!(
                f,
                "A disc at {} would not capture any of the opponent's discs",
                coordinate
            ),
        }
    }
}
