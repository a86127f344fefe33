use uuid::Uuid;

/// Errors raised by game lifecycle operations. Replay and scoring never fail.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("game is already finished")]
    GameFinished,

    #[error("player {0} is not part of this game")]
    PlayerNotFound(Uuid),

    #[error("not your turn: seat {expected} is to play, got seat {actual}")]
    NotYourTurn { expected: usize, actual: usize },

    #[error("invalid move: {0}")]
    InvalidMove(String),

    #[error("invalid snapshot: {0}")]
    Snapshot(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
