use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::{
    error::GameError,
    models::{Game, Move, Player},
};

/// Everything the engine needs to rebuild a game's board and scores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub moves: Vec<Move>,
    pub players: Vec<Player>,
    #[serde(default)]
    pub is_finished: bool,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        Self {
            moves: game.moves.clone(),
            players: game.players.clone(),
            is_finished: game.is_finished,
        }
    }
}

impl GameSnapshot {
    pub fn from_json(json: &str) -> std::result::Result<Self, GameError> {
        serde_json::from_str(json).map_err(|e| GameError::Snapshot(e.to_string()))
    }

    /// Load a snapshot from a JSON file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
        let snapshot = Self::from_json(&content)?;

        tracing::info!(
            "Loaded snapshot with {} moves and {} players",
            snapshot.moves.len(),
            snapshot.players.len()
        );

        Ok(snapshot)
    }
}
