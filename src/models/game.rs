use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Coordinate;

/// Character in a move's word marking a cell whose letter is already on the board
pub const SKIP_MARKER: char = '_';

pub type PlayerId = Uuid;
pub type GameId = Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn perpendicular(&self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A submitted play. An empty word is a pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Move {
    pub player_id: PlayerId,
    pub game_id: GameId,
    pub start: Coordinate,
    pub orientation: Orientation,
    pub word: String,
    pub created_at: DateTime<Utc>,
}

impl Move {
    pub fn is_pass(&self) -> bool {
        self.word.is_empty()
    }

    /// Each character of the word paired with the cell it lands on.
    /// Cells that would overflow the coordinate space are `None`.
    pub fn cells(&self) -> impl Iterator<Item = (Option<Coordinate>, char)> + '_ {
        self.word
            .chars()
            .enumerate()
            .map(|(i, letter)| (self.start.step(self.orientation, i), letter))
    }

    /// Letters this move takes from the rack, skip markers excluded
    pub fn placed_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.word.chars().filter(|&c| c != SKIP_MARKER)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub game_id: GameId,
    pub user_id: Uuid,
    /// Seat in turn order
    pub order_index: usize,
    /// Letters currently on the rack
    pub letters: Vec<char>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub free_letters: Vec<char>,
    pub current_player_index: usize,
    pub is_finished: bool,
    pub players: Vec<Player>,
    pub moves: Vec<Move>,
    pub created_at: DateTime<Utc>,
}

impl Game {
    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn player_for_user(&self, user_id: Uuid) -> Option<&Player> {
        self.players.iter().find(|p| p.user_id == user_id)
    }

    /// Moves in creation order
    pub fn ordered_moves(&self) -> Vec<Move> {
        let mut moves = self.moves.clone();
        moves.sort_by_key(|m| m.created_at);
        moves
    }
}
