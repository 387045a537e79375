//! Host capabilities consumed by the dispatcher, and the two line sources.
//!
//! `BufferHost` drives a multi-line buffer with addressable, one-based line
//! numbers. `CommandLineHost` drives a single-line prompt that has no line
//! numbers: cursor placement and deletion are replayed as single-column moves
//! and single-character backspaces. The dispatcher picks neither; it only sees
//! `dyn EditorHost`.

use core_config::{Config, LookupContext, MotionSettings};
use core_state::{CursorShape, EditorState};
use core_text::{Position, WordChars};

/// A cursor stop: one-based line number (absent on a single-line prompt) and
/// zero-based character column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LinePosition {
    pub line: Option<usize>,
    pub column: usize,
}

impl LinePosition {
    pub fn new(line: Option<usize>, column: usize) -> Self {
        Self { line, column }
    }
}

pub trait EditorHost {
    fn current_line_text(&self) -> String;
    fn current_cursor_column(&self) -> usize;
    /// One-based; `None` on a single-line prompt.
    fn current_line_number(&self) -> Option<usize>;
    fn total_line_count(&self) -> Option<usize>;
    /// Text of an existing one-based line.
    fn get_line_text(&self, line_number: usize) -> String;
    fn set_cursor(&mut self, line_number: Option<usize>, column: usize);
    /// Delete between two positions given in either order, at most one line apart.
    fn delete_range(&mut self, from: LinePosition, to: LinePosition);
    fn write_clipboard_register(&mut self, text: &str);
    fn notify_edit_boundary(&mut self);
    /// True when the cursor sits on a character rather than between characters.
    fn block_cursor(&self) -> bool;
    fn lookup_context(&self) -> LookupContext<'_>;

    fn cursor_position(&self) -> LinePosition {
        LinePosition::new(self.current_line_number(), self.current_cursor_column())
    }

    fn lookup_word_characters(&self, config: &Config) -> WordChars {
        config.word_characters(self.lookup_context())
    }

    fn lookup_comment_leaders(&self, config: &Config) -> Vec<String> {
        config.comment_leaders(self.lookup_context())
    }

    /// Both lookups bundled; resolved once per command.
    fn motion_settings(&self, config: &Config) -> MotionSettings {
        MotionSettings {
            word_chars: self.lookup_word_characters(config),
            comment_leaders: self.lookup_comment_leaders(config),
        }
    }
}

pub struct BufferHost<'a> {
    state: &'a mut EditorState,
}

impl<'a> BufferHost<'a> {
    pub fn new(state: &'a mut EditorState) -> Self {
        Self { state }
    }

    fn to_position(&self, pos: LinePosition) -> Position {
        let line = pos
            .line
            .map(|n| {
                assert!(n >= 1, "line numbers are one-based");
                n - 1
            })
            .unwrap_or(self.state.cursor.line);
        Position::new(line, pos.column)
    }
}

impl EditorHost for BufferHost<'_> {
    fn current_line_text(&self) -> String {
        self.state
            .active_buffer()
            .line(self.state.cursor.line)
            .unwrap_or_default()
    }

    fn current_cursor_column(&self) -> usize {
        self.state.cursor.column
    }

    fn current_line_number(&self) -> Option<usize> {
        Some(self.state.cursor.line + 1)
    }

    fn total_line_count(&self) -> Option<usize> {
        Some(self.state.active_buffer().line_count())
    }

    fn get_line_text(&self, line_number: usize) -> String {
        let buffer = self.state.active_buffer();
        assert!(
            (1..=buffer.line_count()).contains(&line_number),
            "line {line_number} out of range ({} lines)",
            buffer.line_count()
        );
        buffer.line(line_number - 1).unwrap_or_default()
    }

    fn set_cursor(&mut self, line_number: Option<usize>, column: usize) {
        // `None` stays on the current line.
        self.state.cursor = self.to_position(LinePosition::new(line_number, column));
    }

    fn delete_range(&mut self, from: LinePosition, to: LinePosition) {
        let a = self.to_position(from);
        let b = self.to_position(to);
        assert!(
            a.line.abs_diff(b.line) <= 1,
            "deletion may span at most two lines ({} and {})",
            a.line + 1,
            b.line + 1
        );
        self.state.active_buffer_mut().delete_range(a, b);
    }

    fn write_clipboard_register(&mut self, text: &str) {
        self.state.registers.record_small_delete(text);
    }

    fn notify_edit_boundary(&mut self) {
        self.state.break_undo_group();
    }

    fn block_cursor(&self) -> bool {
        self.state.cursor_shape == CursorShape::Block
    }

    fn lookup_context(&self) -> LookupContext<'_> {
        LookupContext::new(self.state.filetype.as_deref(), self.state.word_chars.as_deref())
    }
}

pub struct CommandLineHost<'a> {
    state: &'a mut EditorState,
}

impl<'a> CommandLineHost<'a> {
    pub fn new(state: &'a mut EditorState) -> Self {
        Self { state }
    }

    fn step_to(&mut self, column: usize) {
        let line = &mut self.state.command_line;
        while line.cursor() < column && line.move_right() {}
        while line.cursor() > column && line.move_left() {}
    }
}

impl EditorHost for CommandLineHost<'_> {
    fn current_line_text(&self) -> String {
        self.state.command_line.text()
    }

    fn current_cursor_column(&self) -> usize {
        self.state.command_line.cursor()
    }

    fn current_line_number(&self) -> Option<usize> {
        None
    }

    fn total_line_count(&self) -> Option<usize> {
        None
    }

    fn get_line_text(&self, _line_number: usize) -> String {
        self.state.command_line.text()
    }

    fn set_cursor(&mut self, _line_number: Option<usize>, column: usize) {
        self.step_to(column);
    }

    fn delete_range(&mut self, from: LinePosition, to: LinePosition) {
        let (lo, hi) = if from.column <= to.column {
            (from.column, to.column)
        } else {
            (to.column, from.column)
        };
        self.step_to(hi);
        for _ in lo..hi {
            self.state.command_line.backspace();
        }
    }

    fn write_clipboard_register(&mut self, text: &str) {
        self.state.registers.record_small_delete(text);
    }

    fn notify_edit_boundary(&mut self) {
        self.state.break_undo_group();
    }

    fn block_cursor(&self) -> bool {
        false
    }

    fn lookup_context(&self) -> LookupContext<'_> {
        LookupContext::new(None, self.state.word_chars.as_deref())
    }
}
