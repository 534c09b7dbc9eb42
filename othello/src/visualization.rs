use crate::{letter_for, Board};

/// Draws the board with box-drawing characters, with column letters above
/// and row letters to the left.
///
/// On boards bigger than 5x5, the crossings at the inner corners of the
/// outermost two rows and columns are drawn as `╬`.
/// The degenerate board is drawn as an empty string.
pub fn visualize_board(board: &Board) -> String {
    let (rows, cols) = board.dimensions();
    if board.is_degenerate() {
        return String::new();
    }
    let letter = |idx: usize| letter_for(idx).unwrap_or(' ');
    let is_marked = |row: usize, col: usize| {
        rows > 5 && cols > 5 && (row == 2 || row == rows - 2) && (col == 2 || col == cols - 2)
    };

    // Column labels and the top of the box
    let mut result = String::from("   ");
    for col in 0..cols {
        result += &format!("  {} ", letter(col));
    }
    result += "\n   ┌";
    for col in 0..cols {
        result += "───";
        result += if col == cols - 1 { "┐" } else { "┬" };
    }
    result += "\n";

    for row in 0..rows {
        if row > 0 {
            // Line between two rows
            result += "   ├";
            for col in 0..cols {
                result += "───";
                result += if col == cols - 1 {
                    "┤"
                } else if is_marked(row, col + 1) {
                    "╬"
                } else {
                    "┼"
                };
            }
            result += "\n";
        }
        result += &format!(" {:<2}", letter(row));
        for col in 0..cols {
            result += &format!("│ {} ", board.get(row, col).symbol());
        }
        result += "│\n";
    }

    // Bottom of the box
    result += "   └";
    for col in 0..cols {
        result += "───";
        result += if col == cols - 1 { "┘" } else { "┴" };
    }
    result += "\n";
    result
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&visualize_board(self))
    }
}
