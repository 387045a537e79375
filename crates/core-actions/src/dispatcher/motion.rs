//! Motion targets.
//!
//! Each function reads the host's current line and cursor and returns the
//! position a command should move to (or kill up to). Nothing here mutates the
//! host. Word motions fall back to the adjacent line when the cursor already
//! sits on the line edge; a single-line prompt has no adjacent lines, so the
//! cursor stays put there.

use crate::host::{EditorHost, LinePosition};
use core_text::{
    Direction, WordChars, backward_line_stops, leading_whitespace_end, scan,
    trailing_whitespace_start,
};

/// Line text and cursor captured once per command.
struct LineSnapshot {
    text: String,
    len: usize,
    column: usize,
    number: Option<usize>,
    total: Option<usize>,
    block_cursor: bool,
}

impl LineSnapshot {
    fn capture(host: &dyn EditorHost) -> Self {
        let text = host.current_line_text();
        let len = text.chars().count();
        let column = host.current_cursor_column();
        assert!(
            column <= len,
            "cursor column {column} out of range for line of {len} characters"
        );
        Self {
            text,
            len,
            column,
            number: host.current_line_number(),
            total: host.total_line_count(),
            block_cursor: host.block_cursor(),
        }
    }

    fn position(&self) -> LinePosition {
        LinePosition::new(self.number, self.column)
    }

    fn at(&self, column: usize) -> LinePosition {
        LinePosition::new(self.number, column)
    }

    fn last_column(&self) -> usize {
        last_column(self.len, self.block_cursor)
    }

    fn previous_line(&self) -> Option<usize> {
        self.number.filter(|&n| n > 1).map(|n| n - 1)
    }

    fn next_line(&self) -> Option<usize> {
        match (self.number, self.total) {
            (Some(n), Some(total)) if n < total => Some(n + 1),
            _ => None,
        }
    }
}

/// A block cursor cannot rest past the last character.
pub(crate) fn last_column(len: usize, block_cursor: bool) -> usize {
    if block_cursor { len.saturating_sub(1) } else { len }
}

/// Pull a motion target back onto the last character of its line when the
/// cursor is a block. Kill endpoints are not clamped.
pub(crate) fn rest_on_character(host: &dyn EditorHost, target: LinePosition) -> LinePosition {
    if !host.block_cursor() {
        return target;
    }
    let text = match target.line {
        Some(n) if Some(n) != host.current_line_number() => host.get_line_text(n),
        _ => host.current_line_text(),
    };
    let last = last_column(text.chars().count(), true);
    LinePosition::new(target.line, target.column.min(last))
}

pub fn forward_word_target(host: &dyn EditorHost, word_chars: &WordChars) -> LinePosition {
    let line = LineSnapshot::capture(host);
    if line.column >= line.last_column() {
        return match line.next_line() {
            Some(n) => LinePosition::new(Some(n), leading_whitespace_end(&host.get_line_text(n))),
            None => line.position(),
        };
    }
    line.at(scan(&line.text, line.column, Direction::Forward, word_chars))
}

pub fn backward_word_target(host: &dyn EditorHost, word_chars: &WordChars) -> LinePosition {
    let line = LineSnapshot::capture(host);
    if line.column == 0 {
        return match line.previous_line() {
            Some(n) => {
                LinePosition::new(Some(n), trailing_whitespace_start(&host.get_line_text(n)))
            }
            None => line.position(),
        };
    }
    line.at(scan(&line.text, line.column, Direction::Backward, word_chars))
}

pub fn end_of_line_target(host: &dyn EditorHost) -> LinePosition {
    let line = LineSnapshot::capture(host);
    line.at(line.last_column())
}

pub fn beginning_of_line_target(host: &dyn EditorHost) -> LinePosition {
    LineSnapshot::capture(host).at(0)
}

pub fn back_to_indentation_target(host: &dyn EditorHost) -> LinePosition {
    let line = LineSnapshot::capture(host);
    line.at(leading_whitespace_end(&line.text))
}

/// How the DWIM home target behaves once the cursor is at or before the first stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DwimHome {
    /// Wrap around to the last stop.
    pub cycle: bool,
    /// Continue to the end of the previous line.
    pub roll_to_previous_line: bool,
}

impl DwimHome {
    pub const CYCLE: DwimHome = DwimHome {
        cycle: true,
        roll_to_previous_line: false,
    };
    pub const ROLL: DwimHome = DwimHome {
        cycle: false,
        roll_to_previous_line: true,
    };
}

/// Next stop leftward among column 0, the indentation, and the comment text start.
pub fn dwim_beginning_of_line_target<S: AsRef<str>>(
    host: &dyn EditorHost,
    comment_leaders: &[S],
    mode: DwimHome,
) -> LinePosition {
    let line = LineSnapshot::capture(host);
    let stops = backward_line_stops(&line.text, comment_leaders);
    if line.column <= stops[0] {
        if mode.roll_to_previous_line {
            return match line.previous_line() {
                Some(n) => LinePosition::new(Some(n), host.get_line_text(n).chars().count()),
                None => line.position(),
            };
        }
        if mode.cycle {
            return line.at(stops[stops.len() - 1]);
        }
        return line.position();
    }
    // stops[0] < column, so the first stop at or past the cursor has a predecessor.
    let found = stops
        .iter()
        .position(|&stop| stop >= line.column)
        .unwrap_or(stops.len());
    line.at(stops[found - 1])
}
