use once_cell::sync::Lazy;

use crate::models::{Board, Coordinate, SpecialTile, Tile, BOARD_CELLS, BOARD_SIZE};

const LAST: usize = BOARD_SIZE - 1;
const CENTER: usize = BOARD_SIZE / 2;

fn cross(xs: &[usize], ys: &[usize]) -> Vec<Coordinate> {
    ys.iter()
        .flat_map(|&y| xs.iter().map(move |&x| Coordinate::new(x, y)))
        .collect()
}

/// Corners and edge midpoints
pub static TRIPLE_WORD_TILES: Lazy<Vec<Coordinate>> = Lazy::new(|| {
    cross(&[0, CENTER, LAST], &[0, CENTER, LAST])
        .into_iter()
        .filter(|c| !(c.x == CENTER && c.y == CENTER))
        .collect()
});

/// Both diagonals, center included
pub static DOUBLE_WORD_TILES: Lazy<Vec<Coordinate>> = Lazy::new(|| {
    [1, 2, 3, 4, 7, 10, 11, 12, 13]
        .iter()
        .flat_map(|&n| [Coordinate::new(n, n), Coordinate::new(n, LAST - n)])
        .collect()
});

pub static TRIPLE_LETTER_TILES: Lazy<Vec<Coordinate>> = Lazy::new(|| {
    let outer = [1, 13];
    cross(&[1, 5, 9, 13], &[1, 5, 9, 13])
        .into_iter()
        .filter(|c| !(outer.contains(&c.x) && outer.contains(&c.y)))
        .collect()
});

pub static DOUBLE_LETTER_TILES: Lazy<Vec<Coordinate>> = Lazy::new(|| {
    let edges = [3, 11].into_iter().flat_map(|n| {
        [
            Coordinate::new(0, n),
            Coordinate::new(LAST, n),
            Coordinate::new(n, 0),
            Coordinate::new(n, LAST),
            Coordinate::new(CENTER, n),
            Coordinate::new(n, CENTER),
        ]
    });
    let inner = [6, 8].into_iter().flat_map(|n| {
        [
            Coordinate::new(n, 2),
            Coordinate::new(2, n),
            Coordinate::new(6, n),
            Coordinate::new(n, 6),
            Coordinate::new(8, n),
            Coordinate::new(n, 8),
            Coordinate::new(n, 12),
            Coordinate::new(12, n),
        ]
    });
    let mut tiles: Vec<Coordinate> = edges.chain(inner).collect();
    tiles.sort_by_key(|c| (c.y, c.x));
    tiles.dedup();
    tiles
});

/// Every bonus set, in classification order
fn bonus_sets() -> [(SpecialTile, &'static [Coordinate]); 4] {
    [
        (SpecialTile::TripleWord, TRIPLE_WORD_TILES.as_slice()),
        (SpecialTile::DoubleWord, DOUBLE_WORD_TILES.as_slice()),
        (SpecialTile::TripleLetter, TRIPLE_LETTER_TILES.as_slice()),
        (SpecialTile::DoubleLetter, DOUBLE_LETTER_TILES.as_slice()),
    ]
}

/// Bonus of a cell. The sets are disjoint; were they not, the last matching
/// set in classification order would win.
fn classify(coordinate: Coordinate) -> Option<SpecialTile> {
    let matches: Vec<SpecialTile> = bonus_sets()
        .into_iter()
        .filter(|(_, tiles)| tiles.contains(&coordinate))
        .map(|(special, _)| special)
        .collect();
    debug_assert!(
        matches.len() <= 1,
        "bonus sets overlap at {:?}: {:?}",
        coordinate,
        matches
    );
    matches.last().copied()
}

/// Bonus of every cell, in arena order
static LAYOUT: Lazy<Vec<Option<SpecialTile>>> = Lazy::new(|| {
    (0..BOARD_CELLS)
        .map(|i| classify(Coordinate::new(i % BOARD_SIZE, i / BOARD_SIZE)))
        .collect()
});

pub struct GridGenerator;

impl GridGenerator {
    /// Bonus at a coordinate, `None` for plain and off-board cells
    pub fn special_tile_for(coordinate: Coordinate) -> Option<SpecialTile> {
        coordinate.index().and_then(|i| LAYOUT[i])
    }

    /// A fresh 15x15 board with bonuses assigned and no letters placed
    pub fn empty_board() -> Board {
        let tiles = (0..BOARD_CELLS)
            .map(|i| {
                let coordinate = Coordinate::new(i % BOARD_SIZE, i / BOARD_SIZE);
                Tile::empty(coordinate, LAYOUT[i])
            })
            .collect();

        match Board::from_tiles(tiles) {
            Some(board) => board,
            None => unreachable!("arena built in index order"),
        }
    }
}
