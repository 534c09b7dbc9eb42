use quickcheck::{Arbitrary, Gen};

use crate::{letter_for, Board, Cell, PlayerId, SKIP};

/// A random mid-game board together with a move to try on it.
#[derive(Clone, Debug)]
pub struct MoveInput {
    pub board: Board,
    pub mover: PlayerId,
    pub token: String,
}

fn small_even_size(g: &mut Gen) -> usize {
    *g.choose(&[4, 6, 8, 10]).unwrap()
}

impl Arbitrary for MoveInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let rows = small_even_size(g);
        let cols = small_even_size(g);
        let mut board = Board::new(rows, cols);

        // Scatter discs over the board, keeping some cells empty so that
        // there are places to move to.
        for row in 0..rows {
            for col in 0..cols {
                let cell = match u8::arbitrary(g) % 8 {
                    0..=2 => Cell::Empty,
                    3..=5 => Cell::Disc(PlayerId::arbitrary(g)),
                    _ => continue,
                };
                board.set(row, col, cell);
            }
        }

        // Mostly coordinate tokens, some of them just off the board.
        let token = match u8::arbitrary(g) % 10 {
            0 => String::from(SKIP),
            1 => String::arbitrary(g),
            _ => {
                let row = usize::from(u8::arbitrary(g)) % (rows + 2);
                let col = usize::from(u8::arbitrary(g)) % (cols + 2);
                [letter_for(row), letter_for(col)]
                    .into_iter()
                    .flatten()
                    .collect()
            }
        };

        MoveInput {
            board,
            mover: PlayerId::arbitrary(g),
            token,
        }
    }
}

impl Arbitrary for PlayerId {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[PlayerId::Black, PlayerId::White]).unwrap()
    }
}
