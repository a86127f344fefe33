use std::collections::HashMap;
use once_cell::sync::Lazy;

/// Marker for a blank tile in the bag and on racks
pub const BLANK: char = '*';

/// Number of letters in a full bag
pub const BAG_SIZE: usize = 100;

/// Scrabble letter values; blanks are worth nothing
pub static LETTER_VALUES: Lazy<HashMap<char, u8>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // 1 point letters
    for ch in ['L', 'S', 'U', 'N', 'R', 'T', 'O', 'A', 'I', 'E'] {
        map.insert(ch, 1);
    }

    // 2 points
    for ch in ['G', 'D'] {
        map.insert(ch, 2);
    }

    // 3 points
    for ch in ['B', 'C', 'M', 'P'] {
        map.insert(ch, 3);
    }

    // 4 points
    for ch in ['F', 'H', 'V', 'W', 'Y'] {
        map.insert(ch, 4);
    }

    // 5 points
    map.insert('K', 5);

    // 8 points
    for ch in ['J', 'X'] {
        map.insert(ch, 8);
    }

    // 10 points
    for ch in ['Q', 'Z'] {
        map.insert(ch, 10);
    }

    map.insert(BLANK, 0);

    map
});

/// How many of each letter a full bag holds
pub static LETTER_FREQUENCIES: Lazy<Vec<(char, usize)>> = Lazy::new(|| {
    let table: [(usize, &[char]); 8] = [
        (1, &['J', 'K', 'Q', 'X', 'Z']),
        (2, &['B', 'C', 'F', 'H', 'M', 'P', 'V', 'W', 'Y', BLANK]),
        (3, &['G']),
        (4, &['D', 'L', 'S', 'U']),
        (6, &['N', 'R', 'T']),
        (8, &['O']),
        (9, &['A', 'I']),
        (12, &['E']),
    ];

    table
        .iter()
        .flat_map(|(count, letters)| letters.iter().map(move |&ch| (ch, *count)))
        .collect()
});

/// Get the point value for a letter, 0 for blanks and anything unknown
pub fn get_letter_value(letter: char) -> u8 {
    let upper = letter.to_ascii_uppercase();
    LETTER_VALUES.get(&upper).copied().unwrap_or(0)
}

/// Every letter of a fresh game, blanks included. Order carries no meaning;
/// callers draw from it uniformly.
pub fn full_letter_bag() -> Vec<char> {
    let mut bag = Vec::with_capacity(BAG_SIZE);
    for &(letter, count) in LETTER_FREQUENCIES.iter() {
        bag.extend(std::iter::repeat(letter).take(count));
    }
    bag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_values() {
        assert_eq!(get_letter_value('E'), 1);
        assert_eq!(get_letter_value('Q'), 10);
        assert_eq!(get_letter_value('X'), 8);
        assert_eq!(get_letter_value('D'), 2);
        assert_eq!(get_letter_value('k'), 5);
    }

    #[test]
    fn test_blank_and_unknown_are_worthless() {
        assert_eq!(get_letter_value(BLANK), 0);
        assert_eq!(get_letter_value('_'), 0);
        assert_eq!(get_letter_value('7'), 0);
        assert_eq!(get_letter_value('É'), 0);
    }

    #[test]
    fn test_full_bag_matches_frequency_table() {
        let bag = full_letter_bag();
        assert_eq!(bag.len(), BAG_SIZE);

        let count = |ch: char| bag.iter().filter(|&&c| c == ch).count();
        assert_eq!(count('E'), 12);
        assert_eq!(count('A'), 9);
        assert_eq!(count('I'), 9);
        assert_eq!(count('O'), 8);
        assert_eq!(count('N'), 6);
        assert_eq!(count('G'), 3);
        assert_eq!(count('S'), 4);
        assert_eq!(count('Z'), 1);
        assert_eq!(count(BLANK), 2);
        assert_eq!(count('_'), 0);
    }

    #[test]
    fn test_every_letter_has_a_value() {
        assert_eq!(LETTER_FREQUENCIES.len(), 27);
        for (letter, _) in LETTER_FREQUENCIES.iter() {
            assert!(LETTER_VALUES.contains_key(letter), "no value for {}", letter);
        }
    }

    #[test]
    fn test_bag_point_checksum() {
        let total: u32 = full_letter_bag()
            .into_iter()
            .map(|ch| get_letter_value(ch) as u32)
            .sum();
        assert_eq!(total, 187);
    }
}
