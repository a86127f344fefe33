use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{
    game::{
        reconstructor::Reconstructor,
        words::{Word, WordExtractor},
    },
    models::{Board, Coordinate, Move, Player, PlayerId, Tile},
    utils::letters::get_letter_value,
};

/// Result of scoring one move
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Every word the move formed
    pub words: Vec<Word>,
    /// Score of each word, in the same order
    pub word_scores: Vec<i32>,
    /// Sum of the word scores
    pub score: i32,
}

pub struct Scorer;

impl Scorer {
    /// Calculate the score of a single word.
    ///
    /// Scoring rules:
    /// - Each letter counts its base value
    /// - DL/TL multiply a letter's value by 2/3
    /// - DW/TW multiply the whole word by 2/3, compounding when several are covered
    /// - Bonuses only count on tiles in `newly_placed`; letters from earlier
    ///   moves are worth their face value
    pub fn score_word(word: &Word, newly_placed: &HashSet<Coordinate>) -> i32 {
        let mut word_multiplier = 1;
        let mut letter_total = 0;

        for tile in &word.tiles {
            let bonus = tile
                .special
                .filter(|_| newly_placed.contains(&tile.coordinate));

            let letter_score = match bonus {
                Some(special) => {
                    word_multiplier *= special.word_multiplier();
                    tile.face_value() * special.letter_multiplier()
                }
                None => tile.face_value(),
            };

            letter_total += letter_score;
        }

        letter_total * word_multiplier
    }

    /// Score every word a move formed. `placed` is what the reconstructor
    /// reported for this move.
    pub fn score_placement(board: &Board, mv: &Move, placed: &[Tile]) -> ScoreResult {
        let newly_placed: HashSet<Coordinate> = placed.iter().map(|t| t.coordinate).collect();
        let words = WordExtractor::words_formed_by(board, mv, &newly_placed);
        let word_scores: Vec<i32> = words
            .iter()
            .map(|word| Self::score_word(word, &newly_placed))
            .collect();

        ScoreResult {
            score: word_scores.iter().sum(),
            words,
            word_scores,
        }
    }

    /// Score a move against the board as it stood before the move. Only cells
    /// that were empty count as newly placed; `board` itself is left untouched.
    pub fn score_move(board: &Board, mv: &Move) -> i32 {
        let mut after = board.clone();
        let placed = Reconstructor::apply(&mut after, mv);
        Self::score_placement(&after, mv, &placed).score
    }

    /// Sum of the base values of the letters left on a rack
    pub fn rack_penalty(letters: &[char]) -> i32 {
        letters.iter().map(|&ch| get_letter_value(ch) as i32).sum()
    }

    /// End-of-game settlement: everyone holding letters loses their value, and
    /// whoever emptied their rack gains the total of those deductions.
    pub fn apply_end_game_adjustment(
        players: &[Player],
        scores: HashMap<PlayerId, i32>,
    ) -> HashMap<PlayerId, i32> {
        let mut scores = scores;
        let mut total_deducted = 0;

        for player in players.iter().filter(|p| !p.letters.is_empty()) {
            let penalty = Self::rack_penalty(&player.letters);
            *scores.entry(player.id).or_insert(0) -= penalty;
            total_deducted += penalty;
        }

        let finishers: Vec<&Player> = players.iter().filter(|p| p.letters.is_empty()).collect();
        if finishers.len() > 1 {
            tracing::warn!(
                "{} players finished with empty racks; each receives the full {} points",
                finishers.len(),
                total_deducted
            );
        }
        for player in finishers {
            *scores.entry(player.id).or_insert(0) += total_deducted;
        }

        scores
    }
}
