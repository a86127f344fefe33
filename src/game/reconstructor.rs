use crate::{
    models::{Board, Move, Tile, SKIP_MARKER},
    utils::letters::get_letter_value,
};

pub struct Reconstructor;

impl Reconstructor {
    /// Write a move's letters onto the board and return the tiles it newly filled.
    ///
    /// Skip markers reference letters already on the board and are left alone.
    /// Letters that would land off the board are dropped; input is expected to
    /// have been validated before it was stored.
    pub fn apply(board: &mut Board, mv: &Move) -> Vec<Tile> {
        let mut placed = Vec::new();

        for (coordinate, letter) in mv.cells() {
            if letter == SKIP_MARKER {
                continue;
            }

            let Some(tile) = coordinate.and_then(|c| board.get_mut(c)) else {
                tracing::warn!(
                    "Dropping letter {} of move by {}: {:?} is off the board",
                    letter,
                    mv.player_id,
                    coordinate
                );
                continue;
            };

            if tile.has_letter() {
                tracing::warn!(
                    "Move by {} lands on occupied cell {:?}; keeping {:?}",
                    mv.player_id,
                    tile.coordinate,
                    tile.letter
                );
                continue;
            }

            tile.letter = Some(letter);
            tile.value = Some(get_letter_value(letter));
            placed.push(*tile);
        }

        placed
    }
}
