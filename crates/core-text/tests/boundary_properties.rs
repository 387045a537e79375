//! Property-based tests for the word scanner and DWIM stop lists.

use core_text::{Direction, WordChars, backward_line_stops, scan};
use proptest::prelude::*;

fn line_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just(' '),
            Just('\t'),
            Just('-'),
            Just('/'),
            Just('#'),
            Just('_'),
            Just('\u{e9}'),
            proptest::char::range('a', 'e'),
            proptest::char::range('0', '3'),
        ],
        0..24,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn word_chars_strategy() -> impl Strategy<Value = WordChars> {
    prop_oneof![
        Just(WordChars::alphanumeric()),
        Just(WordChars::NonWhitespace),
        Just(WordChars::from_chars("abc_")),
    ]
}

proptest! {
    // Every scan lands on a valid cursor column and moves in the requested direction.
    #[test]
    fn scan_stays_in_bounds(
        line in line_strategy(),
        seed in 0usize..64,
        wc in word_chars_strategy()
    ) {
        let len = line.chars().count();
        let start = seed % (len + 1);
        let fwd = scan(&line, start, Direction::Forward, &wc);
        let back = scan(&line, start, Direction::Backward, &wc);
        prop_assert!(fwd >= start && fwd <= len);
        prop_assert!(back <= start);
    }

    // A scan that can move always makes progress.
    #[test]
    fn scan_makes_progress(
        line in line_strategy(),
        seed in 0usize..64,
        wc in word_chars_strategy()
    ) {
        let len = line.chars().count();
        let start = seed % (len + 1);
        if start < len {
            prop_assert!(scan(&line, start, Direction::Forward, &wc) > start);
        }
        if start > 0 {
            prop_assert!(scan(&line, start, Direction::Backward, &wc) < start);
        }
    }

    #[test]
    fn scan_edges_are_fixed_points(line in line_strategy(), wc in word_chars_strategy()) {
        let len = line.chars().count();
        prop_assert_eq!(scan(&line, len, Direction::Forward, &wc), len);
        prop_assert_eq!(scan(&line, 0, Direction::Backward, &wc), 0);
    }

    #[test]
    fn stops_strictly_increase_from_zero(line in line_strategy()) {
        let stops = backward_line_stops(&line, &["#", "--", "//"]);
        let len = line.chars().count();
        prop_assert_eq!(stops[0], 0);
        prop_assert!(!stops.is_empty() && stops.len() <= 3);
        prop_assert!(stops.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(stops.iter().all(|&s| s <= len));
    }
}
