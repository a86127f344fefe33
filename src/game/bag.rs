use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{game::scorer::Scorer, models::SKIP_MARKER, utils::letters::full_letter_bag};

/// Letters not yet drawn by any player
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LetterBag(pub Vec<char>);

impl LetterBag {
    pub fn full() -> Self {
        Self(full_letter_bag())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Remove and return one uniformly chosen letter
    pub fn draw(&mut self, rng: &mut impl Rng) -> Option<char> {
        if self.0.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.0.len());
        Some(self.0.swap_remove(index))
    }

    /// Draw up to `count` letters without replacement
    pub fn draw_up_to(&mut self, count: usize, rng: &mut impl Rng) -> Vec<char> {
        let mut drawn = Vec::with_capacity(count.min(self.0.len()));
        while drawn.len() < count {
            match self.draw(rng) {
                Some(letter) => drawn.push(letter),
                None => break,
            }
        }
        drawn
    }

    pub fn into_letters(self) -> Vec<char> {
        self.0
    }
}

/// Letters held by one player
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rack(pub Vec<char>);

impl Rack {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Take the letters of a played word off the rack. Skip markers reuse board
    /// letters and take nothing; letters the rack does not hold are ignored.
    pub fn remove_played(&mut self, word: &str) {
        for letter in word.chars().filter(|&c| c != SKIP_MARKER) {
            if let Some(index) = self.0.iter().position(|&held| held == letter) {
                self.0.remove(index);
            }
        }
    }

    /// Draw from the bag until the rack holds `rack_size` letters or the bag runs out
    pub fn refill(&mut self, bag: &mut LetterBag, rack_size: usize, rng: &mut impl Rng) {
        let missing = rack_size.saturating_sub(self.0.len());
        self.0.extend(bag.draw_up_to(missing, rng));
    }

    /// Base value of everything still held
    pub fn penalty(&self) -> i32 {
        Scorer::rack_penalty(&self.0)
    }

    pub fn into_letters(self) -> Vec<char> {
        self.0
    }
}
