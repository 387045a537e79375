//! Directional word-boundary scanner (readline `forward-word` / `backward-word`).
//!
//! One walk serves both directions. Starting from a column the scanner consumes
//! characters one at a time, remembering whether it has consumed a word
//! character and whether it has consumed any non-whitespace character, and
//! stops in front of the first character that is
//! * whitespace after non-whitespace was consumed, or
//! * a non-word character after a word character was consumed.
//!
//! Symbol runs are therefore crossed together with the word that follows them,
//! and whitespace is crossed together with the word after it.
//!
//! Before walking, a single early exit column is fixed: the end of leading
//! whitespace when scanning backward, the start of trailing whitespace when
//! scanning forward. Reaching it after any step ends the scan, so motions
//! settle on the edge of the trimmed content.

use crate::classify::{WordChars, is_whitespace};
use crate::edges::{leading_end, trailing_start};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Character the cursor would cross next, if any.
    fn peek(self, chars: &[char], column: usize) -> Option<char> {
        match self {
            Direction::Forward => chars.get(column).copied(),
            Direction::Backward => column.checked_sub(1).map(|i| chars[i]),
        }
    }

    fn step(self, column: usize) -> usize {
        match self {
            Direction::Forward => column + 1,
            Direction::Backward => column - 1,
        }
    }

    fn early_exit(self, chars: &[char]) -> usize {
        match self {
            Direction::Forward => trailing_start(chars),
            Direction::Backward => leading_end(chars),
        }
    }
}

/// Next word boundary from `start` in `direction`. Always within `0..=len`.
///
/// # Panics
/// If `start` is past the end of the line.
pub fn scan(line: &str, start: usize, direction: Direction, word_chars: &WordChars) -> usize {
    let chars: Vec<char> = line.chars().collect();
    scan_chars(&chars, start, direction, word_chars)
}

pub(crate) fn scan_chars(
    chars: &[char],
    start: usize,
    direction: Direction,
    word_chars: &WordChars,
) -> usize {
    assert!(
        start <= chars.len(),
        "column {start} out of range for line of {} characters",
        chars.len()
    );
    let early_exit = direction.early_exit(chars);
    let mut column = start;
    let mut seen_word = false;
    let mut seen_non_whitespace = false;
    while let Some(c) = direction.peek(chars, column) {
        let whitespace = is_whitespace(c);
        let word = word_chars.contains(c);
        if (whitespace && seen_non_whitespace) || (!word && seen_word) {
            break;
        }
        column = direction.step(column);
        seen_word |= word;
        seen_non_whitespace |= !whitespace;
        if column == early_exit {
            break;
        }
    }
    column
}

pub fn forward_word_cursor(line: &str, column: usize, word_chars: &WordChars) -> usize {
    scan(line, column, Direction::Forward, word_chars)
}

pub fn backward_word_cursor(line: &str, column: usize, word_chars: &WordChars) -> usize {
    scan(line, column, Direction::Backward, word_chars)
}
