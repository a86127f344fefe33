use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;
use squabble_backend::{
    config::Config, game::Word, reconstruct_and_score, snapshot::GameSnapshot,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Printed to stdout once the snapshot has been replayed
#[derive(Debug, Serialize)]
struct ReplaySummary {
    board: Vec<String>,
    scores: BTreeMap<Uuid, i32>,
    moves: Vec<MoveSummary>,
}

#[derive(Debug, Serialize)]
struct MoveSummary {
    player_id: Uuid,
    words: Vec<String>,
    score: i32,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "squabble_backend=debug,squabble_replay=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.replay.snapshot_path.clone());
    let snapshot = GameSnapshot::load(&path).await?;

    let replay = reconstruct_and_score(&snapshot.moves, &snapshot.players, snapshot.is_finished);

    for (turn, scored) in replay.moves.iter().enumerate() {
        if scored.mv.is_pass() {
            tracing::info!("Turn {}: {} passed", turn + 1, scored.mv.player_id);
        } else {
            tracing::info!(
                "Turn {}: {} played {} for {}",
                turn + 1,
                scored.mv.player_id,
                scored.mv.word,
                scored.score
            );
        }
    }

    let summary = ReplaySummary {
        board: replay.board.to_rows(),
        scores: replay.scores.into_iter().collect(),
        moves: replay
            .moves
            .iter()
            .map(|scored| MoveSummary {
                player_id: scored.mv.player_id,
                words: scored.words.iter().map(Word::text).collect(),
                score: scored.score,
            })
            .collect(),
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
