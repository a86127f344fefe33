use crate::{
    error::{GameError, Result},
    models::{Move, SKIP_MARKER},
};

pub struct MoveValidator;

impl MoveValidator {
    /// Check that every letter the move places lands on the board.
    /// Replay tolerates malformed moves; submission does not.
    pub fn check_bounds(mv: &Move) -> Result<()> {
        for (i, (coordinate, letter)) in mv.cells().enumerate() {
            if letter == SKIP_MARKER {
                continue;
            }
            if !coordinate.is_some_and(|c| c.is_on_board()) {
                return Err(GameError::InvalidMove(format!(
                    "letter {} at offset {} from {:?} is off the board",
                    letter, i, mv.start
                )));
            }
        }
        Ok(())
    }

    /// Check that the letters a move places are ones a rack can hold
    pub fn check_letters(mv: &Move) -> Result<()> {
        match mv.placed_letters().find(|c| !Self::is_tile_letter(*c)) {
            Some(bad) => Err(GameError::InvalidMove(format!(
                "{:?} is not a playable letter",
                bad
            ))),
            None => Ok(()),
        }
    }

    fn is_tile_letter(letter: char) -> bool {
        letter.is_ascii_uppercase() || letter == crate::utils::letters::BLANK
    }
}
