//! Editor state owned by the in-memory hosts: buffer, cursor, command line,
//! registers and the opaque undo-group counter.
//!
//! Mutation of text goes through `core_text::Buffer`; this crate only adds the
//! bookkeeping a host keeps around it. Registers follow the Vim split between
//! the unnamed register and the small-delete register (`"-`), which receives
//! kills that stay within one line.

use core_text::{Buffer, Position};
use tracing::trace;

#[derive(Debug, Default, Clone)]
pub struct Registers {
    pub unnamed: String,
    small_delete: String,
    writes: u64,
}

impl Registers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a kill that stayed within one line. Mirrors into unnamed.
    pub fn record_small_delete<S: Into<String>>(&mut self, text: S) {
        let s = text.into();
        trace!(
            target: "state.registers",
            register = "-",
            chars = s.chars().count(),
            "register_write"
        );
        self.unnamed = s.clone();
        self.small_delete = s;
        self.writes += 1;
    }

    pub fn small_delete(&self) -> &str {
        &self.small_delete
    }

    pub fn writes(&self) -> u64 {
        self.writes
    }
}

/// Cursor rendering. A block cursor rests on a character, so the last valid
/// column of a non-empty line is one less than its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Bar,
    Block,
}

/// Single-line command input. The cursor only moves by single columns and
/// text is only removed one character at a time, like a terminal prompt.
#[derive(Debug, Default, Clone)]
pub struct CommandLineState {
    chars: Vec<char>,
    cursor: usize,
    steps: u64,
}

impl CommandLineState {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = chars.len();
        Self {
            chars,
            cursor,
            steps: 0,
        }
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of single-column moves and single-character deletes applied so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.steps += 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.chars.len() {
            return false;
        }
        self.cursor += 1;
        self.steps += 1;
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
        self.steps += 1;
        true
    }
}

pub struct EditorState {
    buffer: Buffer,
    pub cursor: Position,
    pub command_line: CommandLineState,
    pub registers: Registers,
    pub cursor_shape: CursorShape,
    pub filetype: Option<String>,
    /// Buffer-local word characters overriding filetype and global settings.
    pub word_chars: Option<String>,
    pub dirty: bool,
    undo_groups: u64,
}

impl EditorState {
    pub fn new(buffer: Buffer) -> Self {
        Self {
            buffer,
            cursor: Position::origin(),
            command_line: CommandLineState::default(),
            registers: Registers::new(),
            cursor_shape: CursorShape::default(),
            filetype: None,
            word_chars: None,
            dirty: false,
            undo_groups: 0,
        }
    }

    pub fn with_filetype(mut self, filetype: impl Into<String>) -> Self {
        self.filetype = Some(filetype.into());
        self
    }

    pub fn active_buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Mutable accessor for the buffer; marks the state dirty.
    pub fn active_buffer_mut(&mut self) -> &mut Buffer {
        self.dirty = true;
        &mut self.buffer
    }

    /// Start a fresh undo group before the next mutation.
    pub fn break_undo_group(&mut self) {
        self.undo_groups += 1;
        trace!(target: "state.undo", groups = self.undo_groups, "undo_group_break");
    }

    pub fn undo_groups(&self) -> u64 {
        self.undo_groups
    }
}
