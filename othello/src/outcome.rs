use std::cmp::Ordering;

use crate::{Board, Cell, PlayerId};

/// The result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(PlayerId),
    Draw,
}

/// The number of discs `player` has on the board.
pub fn score(board: &Board, player: PlayerId) -> usize {
    board
        .cells()
        .filter(|&(_, _, cell)| cell == Cell::Disc(player))
        .count()
}

/// Whoever has more discs wins; equal counts are a draw.
///
/// This only compares scores. Whether the game is over is up to the caller.
pub fn classify_outcome(board: &Board, player_a: PlayerId, player_b: PlayerId) -> Outcome {
    match score(board, player_a).cmp(&score(board, player_b)) {
        Ordering::Greater => Outcome::Win(player_a),
        Ordering::Less => Outcome::Win(player_b),
        Ordering::Equal => Outcome::Draw,
    }
}
