//! Dispatcher applying a `ReadlineCommand` to a host.
//!
//! * `motion` - target computation (pure reads of host state)
//! * `kill`   - span deletion + register write + cursor placement
//!
//! Settings (word characters, comment leaders) are resolved from the
//! `Config` on every call using the host's current lookup context.

use crate::ReadlineCommand;
use crate::host::{EditorHost, LinePosition};
use core_config::{Config, MotionSettings};
use core_text::WordChars;

mod kill;
pub mod motion;

use motion::DwimHome;

/// Result of dispatching a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    pub before: LinePosition,
    pub after: LinePosition,
    /// Text written to the small-delete register by a same-line kill.
    pub killed: Option<String>,
    /// Buffer text changed.
    pub edited: bool,
}

impl DispatchResult {
    pub fn moved(&self) -> bool {
        self.before != self.after
    }
}

/// Compute the target of `command` without touching the host.
pub fn resolve_target(
    command: ReadlineCommand,
    host: &dyn EditorHost,
    settings: &MotionSettings,
) -> LinePosition {
    use ReadlineCommand as C;
    match command {
        C::ForwardWord | C::KillWord => motion::forward_word_target(host, &settings.word_chars),
        C::BackwardWord | C::BackwardKillWord => {
            motion::backward_word_target(host, &settings.word_chars)
        }
        C::UnixWordRubout => motion::backward_word_target(host, &WordChars::NonWhitespace),
        C::EndOfLine | C::KillLine => motion::end_of_line_target(host),
        C::BeginningOfLine | C::BackwardKillLine => motion::beginning_of_line_target(host),
        C::BackToIndentation => motion::back_to_indentation_target(host),
        C::DwimBeginningOfLine => {
            motion::dwim_beginning_of_line_target(host, &settings.comment_leaders, DwimHome::CYCLE)
        }
        C::DwimBackwardKillLine => {
            motion::dwim_beginning_of_line_target(host, &settings.comment_leaders, DwimHome::ROLL)
        }
    }
}

/// Apply one command: either move the cursor or kill up to the target.
pub fn dispatch(
    command: ReadlineCommand,
    host: &mut dyn EditorHost,
    config: &Config,
) -> DispatchResult {
    let settings = host.motion_settings(config);
    let before = host.cursor_position();
    let target = resolve_target(command, &*host, &settings);
    let mut edited = false;
    let killed = if command.is_kill() {
        edited = target != before;
        kill::kill_to(host, target)
    } else {
        let target = motion::rest_on_character(&*host, target);
        if target != before {
            host.set_cursor(target.line, target.column);
        }
        None
    };
    let after = host.cursor_position();
    tracing::trace!(
        target: "actions.dispatch",
        command = %command,
        line = ?before.line,
        col = before.column,
        to_line = ?after.line,
        to_col = after.column,
        edited,
        "command"
    );
    DispatchResult {
        before,
        after,
        killed,
        edited,
    }
}
