use serde::{Deserialize, Serialize};

use super::Orientation;

/// Width and height of the square board
pub const BOARD_SIZE: usize = 15;
/// Number of cells on the board
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn is_on_board(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// Index into the flat board arena (x + 15y), if the coordinate is on the board
    pub fn index(&self) -> Option<usize> {
        self.is_on_board().then(|| self.x + BOARD_SIZE * self.y)
    }

    /// Coordinate `steps` cells further along `orientation`
    pub fn step(&self, orientation: Orientation, steps: usize) -> Option<Self> {
        match orientation {
            Orientation::Horizontal => self.x.checked_add(steps).map(|x| Self::new(x, self.y)),
            Orientation::Vertical => self.y.checked_add(steps).map(|y| Self::new(self.x, y)),
        }
    }

    /// The neighbouring cell before this one along `orientation`, if it is on the board
    pub fn previous(&self, orientation: Orientation) -> Option<Self> {
        let prev = match orientation {
            Orientation::Horizontal => Self::new(self.x.checked_sub(1)?, self.y),
            Orientation::Vertical => Self::new(self.x, self.y.checked_sub(1)?),
        };
        prev.is_on_board().then_some(prev)
    }

    /// The neighbouring cell after this one along `orientation`, if it is on the board
    pub fn next(&self, orientation: Orientation) -> Option<Self> {
        self.step(orientation, 1).filter(Coordinate::is_on_board)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum SpecialTile {
    TripleWord,
    DoubleWord,
    TripleLetter,
    DoubleLetter,
}

impl SpecialTile {
    pub fn word_multiplier(&self) -> i32 {
        match self {
            SpecialTile::TripleWord => 3,
            SpecialTile::DoubleWord => 2,
            SpecialTile::TripleLetter | SpecialTile::DoubleLetter => 1,
        }
    }

    pub fn letter_multiplier(&self) -> i32 {
        match self {
            SpecialTile::TripleLetter => 3,
            SpecialTile::DoubleLetter => 2,
            SpecialTile::TripleWord | SpecialTile::DoubleWord => 1,
        }
    }
}

/// One cell of the board
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tile {
    pub coordinate: Coordinate,
    pub special: Option<SpecialTile>,
    pub letter: Option<char>,
    /// Base point value of the placed letter
    pub value: Option<u8>,
}

impl Tile {
    pub fn empty(coordinate: Coordinate, special: Option<SpecialTile>) -> Self {
        Self {
            coordinate,
            special,
            letter: None,
            value: None,
        }
    }

    pub fn has_letter(&self) -> bool {
        self.letter.is_some()
    }

    /// Face value of the placed letter, 0 for an empty cell
    pub fn face_value(&self) -> i32 {
        if self.has_letter() {
            self.value.unwrap_or(0) as i32
        } else {
            0
        }
    }
}

/// The 15x15 board, stored as a flat arena indexed by `x + 15y`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// Build a board from its tiles in arena order. Returns `None` unless exactly
    /// one tile per cell is supplied, each at its own index.
    pub fn from_tiles(tiles: Vec<Tile>) -> Option<Self> {
        let well_formed = tiles.len() == BOARD_CELLS
            && tiles
                .iter()
                .enumerate()
                .all(|(i, tile)| tile.coordinate.index() == Some(i));
        well_formed.then_some(Self { tiles })
    }

    pub fn get(&self, coordinate: Coordinate) -> Option<&Tile> {
        coordinate.index().and_then(|i| self.tiles.get(i))
    }

    pub fn get_mut(&mut self, coordinate: Coordinate) -> Option<&mut Tile> {
        coordinate.index().and_then(|i| self.tiles.get_mut(i))
    }

    pub fn has_letter_at(&self, coordinate: Coordinate) -> bool {
        self.get(coordinate).is_some_and(Tile::has_letter)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Render the board as 15 text rows, `.` for empty cells
    pub fn to_rows(&self) -> Vec<String> {
        self.tiles
            .chunks(BOARD_SIZE)
            .map(|row| row.iter().map(|t| t.letter.unwrap_or('.')).collect())
            .collect()
    }
}
