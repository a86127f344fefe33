use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{Board, Coordinate, Move, Orientation, Tile};

/// A run of contiguous tiles read along one line of the board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Word {
    pub orientation: Orientation,
    pub tiles: Vec<Tile>,
}

impl Word {
    pub fn text(&self) -> String {
        self.tiles.iter().filter_map(|t| t.letter).collect()
    }

    /// Number of tiles in the run holding a letter
    pub fn letter_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.has_letter()).count()
    }

    /// Single letters are not words
    pub fn is_word(&self) -> bool {
        self.letter_count() >= 2
    }
}

pub struct WordExtractor;

impl WordExtractor {
    /// Every word a move forms: the word along its own line, then one cross
    /// word per newly placed letter that touches letters perpendicular to it.
    /// Must be called after the move has been written to the board; `placed`
    /// holds the cells the move actually filled.
    pub fn words_formed_by(board: &Board, mv: &Move, placed: &HashSet<Coordinate>) -> Vec<Word> {
        let span: Vec<(Coordinate, char)> = mv
            .cells()
            .filter_map(|(coordinate, letter)| {
                coordinate
                    .filter(Coordinate::is_on_board)
                    .map(|c| (c, letter))
            })
            .collect();

        let (Some(&(first, _)), Some(&(last, _))) = (span.first(), span.last()) else {
            return Vec::new();
        };

        let mut words = vec![Self::extend(board, first, last, mv.orientation)];

        let cross = mv.orientation.perpendicular();
        words.extend(
            span.iter()
                .filter(|(coordinate, _)| placed.contains(coordinate))
                .map(|&(seed, _)| Self::extend(board, seed, seed, cross)),
        );

        words.retain(Word::is_word);
        words
    }

    /// Grow the run `[from, to]` in both directions along `orientation` while
    /// the neighbouring cell holds a letter.
    fn extend(board: &Board, from: Coordinate, to: Coordinate, orientation: Orientation) -> Word {
        let mut start = from;
        while let Some(prev) = start.previous(orientation).filter(|c| board.has_letter_at(*c)) {
            start = prev;
        }

        let mut end = to;
        while let Some(next) = end.next(orientation).filter(|c| board.has_letter_at(*c)) {
            end = next;
        }

        let mut tiles = Vec::new();
        let mut cursor = Some(start);
        while let Some(c) = cursor {
            if let Some(tile) = board.get(c) {
                tiles.push(*tile);
            }
            if c == end {
                break;
            }
            cursor = c.next(orientation);
        }

        Word { orientation, tiles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GridGenerator, Reconstructor};
    use chrono::Utc;
    use uuid::Uuid;

    fn make_move(x: usize, y: usize, orientation: Orientation, word: &str) -> Move {
        Move {
            player_id: Uuid::nil(),
            game_id: Uuid::nil(),
            start: Coordinate::new(x, y),
            orientation,
            word: word.to_string(),
            created_at: Utc::now(),
        }
    }

    fn play(board: &mut Board, mv: &Move) -> Vec<String> {
        let placed: HashSet<Coordinate> = Reconstructor::apply(board, mv)
            .iter()
            .map(|t| t.coordinate)
            .collect();
        WordExtractor::words_formed_by(board, mv, &placed)
            .iter()
            .map(Word::text)
            .collect()
    }

    #[test]
    fn test_single_word_on_empty_board() {
        let mut board = GridGenerator::empty_board();
        let words = play(&mut board, &make_move(7, 7, Orientation::Horizontal, "CAT"));
        assert_eq!(words, vec!["CAT"]);
    }

    #[test]
    fn test_pass_forms_no_words() {
        let mut board = GridGenerator::empty_board();
        assert!(play(&mut board, &make_move(7, 7, Orientation::Horizontal, "")).is_empty());
    }

    #[test]
    fn test_single_letter_is_not_a_word() {
        let mut board = GridGenerator::empty_board();
        assert!(play(&mut board, &make_move(3, 3, Orientation::Vertical, "A")).is_empty());
    }

    #[test]
    fn test_primary_word_extends_over_existing_letters() {
        let mut board = GridGenerator::empty_board();
        play(&mut board, &make_move(7, 7, Orientation::Horizontal, "CAT"));

        // "S" appended after CAT reads as CATS
        let words = play(&mut board, &make_move(10, 7, Orientation::Horizontal, "S"));
        assert_eq!(words, vec!["CATS"]);

        // prefix before the existing word
        let words = play(&mut board, &make_move(6, 7, Orientation::Horizontal, "S"));
        assert_eq!(words, vec!["SCATS"]);
    }

    #[test]
    fn test_skip_marker_through_existing_letter() {
        let mut board = GridGenerator::empty_board();
        play(&mut board, &make_move(7, 7, Orientation::Horizontal, "CAT"));
        let words = play(&mut board, &make_move(9, 6, Orientation::Vertical, "A_E"));
        assert_eq!(words, vec!["ATE"]);
    }

    #[test]
    fn test_cross_words_through_placed_letters() {
        let mut board = GridGenerator::empty_board();
        play(&mut board, &make_move(7, 7, Orientation::Horizontal, "CAT"));

        // "AN" laid under "CA" also forms CA and AA down the columns
        let words = play(&mut board, &make_move(7, 8, Orientation::Horizontal, "AN"));
        assert_eq!(words, vec!["AN", "CA", "AA"]);
    }

    #[test]
    fn test_skipped_cells_do_not_seed_cross_words() {
        let mut board = GridGenerator::empty_board();
        play(&mut board, &make_move(7, 7, Orientation::Vertical, "AT"));

        // the reused A would otherwise yield AT again
        let words = play(&mut board, &make_move(6, 7, Orientation::Horizontal, "B_D"));
        assert_eq!(words, vec!["BAD"]);
    }

    #[test]
    fn test_spelled_out_existing_letter_does_not_seed_cross_word() {
        let mut board = GridGenerator::empty_board();
        play(&mut board, &make_move(7, 7, Orientation::Vertical, "AT"));

        // the A is written out instead of skipped, but the cell was already filled
        let words = play(&mut board, &make_move(6, 7, Orientation::Horizontal, "BAD"));
        assert_eq!(words, vec!["BAD"]);
    }

    #[test]
    fn test_words_stop_at_board_edge() {
        let mut board = GridGenerator::empty_board();
        let words = play(&mut board, &make_move(12, 0, Orientation::Horizontal, "TOE"));
        assert_eq!(words, vec!["TOE"]);

        let words = play(&mut board, &make_move(14, 1, Orientation::Vertical, "ND"));
        assert_eq!(words, vec!["END"]);
    }
}
