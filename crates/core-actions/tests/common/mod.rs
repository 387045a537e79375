#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{BufferHost, CommandLineHost, DispatchResult, ReadlineCommand, dispatch};
use core_config::Config;
use core_state::{CommandLineState, CursorShape, EditorState};
use core_text::{Buffer, Position};

/// Buffer state with the cursor at (zero-based line, column).
pub fn buffer_state(content: &str, line: usize, column: usize) -> EditorState {
    let buffer = Buffer::from_str("t", content).unwrap();
    let mut state = EditorState::new(buffer);
    state.cursor = Position::new(line, column);
    state
}

pub fn block_state(content: &str, line: usize, column: usize) -> EditorState {
    let mut state = buffer_state(content, line, column);
    state.cursor_shape = CursorShape::Block;
    state
}

/// Prompt state with the cursor at `column`.
pub fn prompt_state(text: &str, column: usize) -> EditorState {
    let mut state = EditorState::new(Buffer::from_str("t", "").unwrap());
    state.command_line = CommandLineState::new(text);
    while state.command_line.cursor() > column {
        state.command_line.move_left();
    }
    state
}

pub fn run_buffer(state: &mut EditorState, cmd: ReadlineCommand) -> DispatchResult {
    run_buffer_with(state, cmd, &Config::default())
}

pub fn run_buffer_with(
    state: &mut EditorState,
    cmd: ReadlineCommand,
    cfg: &Config,
) -> DispatchResult {
    let mut host = BufferHost::new(state);
    dispatch(cmd, &mut host, cfg)
}

pub fn run_prompt(state: &mut EditorState, cmd: ReadlineCommand) -> DispatchResult {
    let mut host = CommandLineHost::new(state);
    dispatch(cmd, &mut host, &Config::default())
}

pub fn line(state: &EditorState, idx: usize) -> String {
    state.active_buffer().line(idx).unwrap()
}
