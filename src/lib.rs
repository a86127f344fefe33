pub mod config;
pub mod error;
pub mod game;
pub mod models;
pub mod snapshot;
pub mod utils;

pub use error::{GameError, Result};
pub use game::{empty_board, reconstruct_and_score};
pub use utils::letters::{full_letter_bag, get_letter_value};
