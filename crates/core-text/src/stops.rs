//! Cursor stops for do-what-I-mean home / backward kill.
//!
//! A line yields up to three strictly increasing columns:
//! `0`, the end of indentation, and the first column after a comment leader
//! and the whitespace following it.
//!
//! ```
//! use core_text::backward_line_stops;
//!
//! assert_eq!(backward_line_stops("  -- hi", &["--"]).as_slice(), &[0, 2, 5]);
//! assert_eq!(backward_line_stops("  x = 1", &["--"]).as_slice(), &[0, 2]);
//! ```

use smallvec::SmallVec;

use crate::classify::is_whitespace;
use crate::edges::leading_end;
use crate::trie::ByteTrie;

pub type LineStops = SmallVec<[usize; 3]>;

pub fn backward_line_stops<S: AsRef<str>>(line: &str, comment_leaders: &[S]) -> LineStops {
    let chars: Vec<char> = line.chars().collect();
    let mut stops = LineStops::new();
    stops.push(0);

    let indent = leading_end(&chars);
    push_if_greater(&mut stops, indent);

    let trie = ByteTrie::build(comment_leaders);
    if trie.is_empty() {
        return stops;
    }
    let indent_byte = line
        .char_indices()
        .nth(indent)
        .map(|(b, _)| b)
        .unwrap_or(line.len());
    if let Some(end_byte) = trie.match_from(line, indent_byte) {
        // Leaders are whole UTF-8 sequences, so `end_byte` is a char boundary.
        let mut column = line[..end_byte].chars().count();
        while column < chars.len() && is_whitespace(chars[column]) {
            column += 1;
        }
        push_if_greater(&mut stops, column);
    }
    stops
}

fn push_if_greater(stops: &mut LineStops, column: usize) {
    if stops.last().is_some_and(|&last| column > last) {
        stops.push(column);
    }
}
