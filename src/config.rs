use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub replay: ReplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Letters a rack is refilled to
    pub rack_size: usize,
    /// Consecutive full rounds of passes that end a game
    pub pass_rounds_to_finish: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rack_size: 7,
            pass_rounds_to_finish: 2,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplayConfig {
    pub snapshot_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key/value source
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let game = GameConfig {
            rack_size: lookup("RACK_SIZE")
                .unwrap_or_else(|| "7".to_string())
                .parse()
                .context("RACK_SIZE must be a number")?,
            pass_rounds_to_finish: lookup("PASS_ROUNDS_TO_FINISH")
                .unwrap_or_else(|| "2".to_string())
                .parse()
                .context("PASS_ROUNDS_TO_FINISH must be a number")?,
        };

        if game.rack_size == 0 {
            anyhow::bail!("RACK_SIZE must be at least 1");
        }
        if game.pass_rounds_to_finish == 0 {
            anyhow::bail!("PASS_ROUNDS_TO_FINISH must be at least 1");
        }

        let replay = ReplayConfig {
            snapshot_path: lookup("SNAPSHOT_PATH").unwrap_or_else(|| "./game.json".to_string()),
        };

        Ok(Config { game, replay })
    }
}
