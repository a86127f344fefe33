pub mod board;
pub mod game;

pub use board::{Board, Coordinate, SpecialTile, Tile, BOARD_CELLS, BOARD_SIZE};
pub use game::{Game, GameId, Move, Orientation, Player, PlayerId, SKIP_MARKER};
