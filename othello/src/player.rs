use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which of the two sides a disc belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerId {
    /// Plays the `X` discs.
    Black,
    /// Plays the `O` discs.
    White,
}

impl PlayerId {
    pub fn colour(self) -> &'static str {
        match self {
            PlayerId::Black => "black",
            PlayerId::White => "white",
        }
    }

    /// The single-character symbol drawn on the board for this side's discs.
    pub fn symbol(self) -> char {
        match self {
            PlayerId::Black => 'X',
            PlayerId::White => 'O',
        }
    }

    pub fn default_name(self) -> &'static str {
        match self {
            PlayerId::Black => "Black",
            PlayerId::White => "White",
        }
    }
}

impl std::ops::Not for PlayerId {
    type Output = Self;

    /// The opponent.
    fn not(self) -> Self {
        match self {
            PlayerId::Black => PlayerId::White,
            PlayerId::White => PlayerId::Black,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.colour())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParsePlayerIdError;

impl std::error::Error for ParsePlayerIdError {}

impl std::fmt::Display for ParsePlayerIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "expected 'black', 'white', 'x' or 'o'")
    }
}

impl FromStr for PlayerId {
    type Err = ParsePlayerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "x" => Ok(PlayerId::Black),
            "white" | "o" => Ok(PlayerId::White),
            _ => Err(ParsePlayerIdError),
        }
    }
}

/// One of the two people playing a game.
///
/// The colour and symbol follow from the [`PlayerId`]; only the display name
/// is free. A player is never changed after it is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// A player named after their colour ("Black" / "White").
    pub fn with_default_name(id: PlayerId) -> Self {
        Self::new(id, id.default_name())
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn colour(&self) -> &'static str {
        self.id.colour()
    }

    pub fn symbol(&self) -> char {
        self.id.symbol()
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponents_have_opposite_symbols() {
        assert_eq!(!PlayerId::Black, PlayerId::White);
        assert_eq!(!!PlayerId::White, PlayerId::White);
        assert_ne!(PlayerId::Black.symbol(), PlayerId::White.symbol());
    }

    #[test]
    fn player_id_from_str() {
        assert_eq!("black".parse(), Ok(PlayerId::Black));
        assert_eq!("O".parse(), Ok(PlayerId::White));
        assert_eq!("grey".parse::<PlayerId>(), Err(ParsePlayerIdError));
    }

    #[test]
    fn player_id_serde() {
        assert_eq!(serde_json::to_string(&PlayerId::White).unwrap(), "\"white\"");
        assert_eq!(
            serde_json::from_str::<PlayerId>("\"black\"").unwrap(),
            PlayerId::Black
        );
    }

    #[test]
    fn default_names() {
        let player = Player::with_default_name(PlayerId::Black);
        assert_eq!(player.name(), "Black");
        assert_eq!(player.colour(), "black");
        assert_eq!(player.symbol(), 'X');
    }
}
