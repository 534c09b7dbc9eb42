mod config;
mod console;
mod game;
pub use config::*;
pub use console::*;
pub use game::*;
