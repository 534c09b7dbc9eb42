use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use othello::PlayerId;
use serde::Deserialize;

/// Game settings that can be given up front instead of being asked for.
///
/// Every setting is optional. Missing ones are asked for interactively,
/// or take their default if prompting is turned off.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub black_name: Option<String>,
    pub white_name: Option<String>,
    /// Which side moves first.
    pub first: Option<PlayerId>,
}

impl GameConfig {
    pub const DEFAULT_SIZE: usize = 8;

    /// Reads a config from a JSON file such as
    /// `{"rows": 6, "cols": 10, "black_name": "Ada", "first": "white"}`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open config file '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse config file '{}'", path.display()))
    }

    /// Fills the settings missing from `self` with those of `fallback`.
    pub fn or(self, fallback: GameConfig) -> GameConfig {
        GameConfig {
            rows: self.rows.or(fallback.rows),
            cols: self.cols.or(fallback.cols),
            black_name: self.black_name.or(fallback.black_name),
            white_name: self.white_name.or(fallback.white_name),
            first: self.first.or(fallback.first),
        }
    }

    pub fn name_for(&self, id: PlayerId) -> Option<&str> {
        match id {
            PlayerId::Black => self.black_name.as_deref(),
            PlayerId::White => self.white_name.as_deref(),
        }
    }
}
