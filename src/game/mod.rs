// Board reconstruction and scoring engine, plus the turn lifecycle around it

pub mod bag;
pub mod grid;
pub mod reconstructor;
pub mod replay;
pub mod scorer;
pub mod turns;
pub mod validator;
pub mod words;

pub use bag::{LetterBag, Rack};
pub use grid::GridGenerator;
pub use reconstructor::Reconstructor;
pub use replay::{empty_board, reconstruct_and_score, Replay, ScoredMove};
pub use scorer::{ScoreResult, Scorer};
pub use turns::{create_game, join_game, submit_move, MoveOutcome, MoveRequest};
pub use validator::MoveValidator;
pub use words::{Word, WordExtractor};
