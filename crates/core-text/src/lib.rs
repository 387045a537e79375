//! Rope-based text buffer plus the pure line boundary engine.
//!
//! The boundary modules (`classify`, `edges`, `motion`, `trie`, `stops`) never
//! touch a `Buffer`; they compute cursor columns from a single line of text and
//! are shared by every host that drives the readline commands.
//!
//! Columns are zero-based *character* indices: a line of N characters admits
//! cursor columns `0..=N`. Byte offsets only appear inside the comment leader
//! trie, which matches raw bytes.

use anyhow::Result;
use ropey::Rope;

pub mod classify;
pub mod edges;
pub mod motion;
pub mod stops;
pub mod trie;

pub use classify::{WordChars, is_whitespace, is_word_char};
pub use edges::{leading_whitespace_end, trailing_whitespace_start};
pub use motion::{Direction, backward_word_cursor, forward_word_cursor, scan};
pub use stops::{LineStops, backward_line_stops};
pub use trie::ByteTrie;

/// A text buffer backed by a `ropey::Rope`.
#[derive(Clone)]
pub struct Buffer {
    rope: Rope,
    pub name: String,
}

/// A position inside a buffer expressed as (zero-based line index, character column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
    pub fn origin() -> Self {
        Self { line: 0, column: 0 }
    }
}

impl Buffer {
    /// Construct a buffer from an in-memory string slice.
    pub fn from_str(name: impl Into<String>, content: &str) -> Result<Self> {
        Ok(Self {
            rope: Rope::from_str(content),
            name: name.into(),
        })
    }

    /// Total number of lines in the buffer. A final line break terminates the
    /// last line rather than starting an empty one.
    pub fn line_count(&self) -> usize {
        let lines = self.rope.len_lines();
        let len = self.rope.len_chars();
        if lines > 1 && self.rope.char(len - 1) == '\n' {
            lines - 1
        } else {
            lines
        }
    }

    /// Return the requested line as an owned `String` without its line terminator.
    pub fn line(&self, idx: usize) -> Option<String> {
        if idx >= self.line_count() {
            return None;
        }
        let mut s = self.rope.line(idx).to_string();
        if s.ends_with('\n') {
            s.pop();
            if s.ends_with('\r') {
                s.pop();
            }
        }
        Some(s)
    }

    /// Character length of a line (excluding any newline) for clamping purposes.
    pub fn line_char_len(&self, idx: usize) -> usize {
        self.line(idx).map(|l| l.chars().count()).unwrap_or(0)
    }

    /// Whole buffer contents.
    pub fn contents(&self) -> String {
        self.rope.to_string()
    }

    fn absolute_char_index(&self, pos: Position) -> usize {
        self.rope.line_to_char(pos.line) + pos.column
    }

    /// Delete the text between two positions, given in either order, and return it.
    /// Deleting from the end of one line to a column of the next removes the line break.
    pub fn delete_range(&mut self, a: Position, b: Position) -> String {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        assert!(
            hi.line < self.line_count(),
            "delete_range line {} out of bounds ({} lines)",
            hi.line,
            self.line_count()
        );
        let start = self.absolute_char_index(lo);
        let end = self.absolute_char_index(hi).min(self.rope.len_chars());
        if start >= end {
            return String::new();
        }
        let removed = self.rope.slice(start..end).to_string();
        self.rope.remove(start..end);
        removed
    }
}
