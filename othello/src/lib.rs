pub use board::*;
pub use coords::*;
pub use errors::*;
pub use moves::*;
pub use outcome::*;
pub use player::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod coords;
mod errors;
mod moves;
mod outcome;
mod player;
mod visualization;
