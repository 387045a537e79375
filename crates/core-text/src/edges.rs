//! Leading / trailing whitespace edges of a line.

use crate::classify::is_whitespace;

/// Column just past the leading whitespace; the line length when the whole line is blank.
pub fn leading_whitespace_end(line: &str) -> usize {
    leading_end(&line.chars().collect::<Vec<_>>())
}

/// Column where the trailing whitespace run begins; 0 when the whole line is blank.
pub fn trailing_whitespace_start(line: &str) -> usize {
    trailing_start(&line.chars().collect::<Vec<_>>())
}

pub(crate) fn leading_end(chars: &[char]) -> usize {
    chars
        .iter()
        .position(|&c| !is_whitespace(c))
        .unwrap_or(chars.len())
}

pub(crate) fn trailing_start(chars: &[char]) -> usize {
    let trailing = chars.iter().rev().take_while(|&&c| is_whitespace(c)).count();
    chars.len() - trailing
}
