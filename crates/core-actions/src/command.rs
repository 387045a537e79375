//! Readline command names.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadlineCommand {
    ForwardWord,
    BackwardWord,
    EndOfLine,
    BeginningOfLine,
    DwimBeginningOfLine,
    BackToIndentation,
    KillWord,
    BackwardKillWord,
    UnixWordRubout,
    KillLine,
    BackwardKillLine,
    DwimBackwardKillLine,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown readline command `{0}`")]
pub struct UnknownCommand(pub String);

impl ReadlineCommand {
    pub const ALL: [ReadlineCommand; 12] = [
        Self::ForwardWord,
        Self::BackwardWord,
        Self::EndOfLine,
        Self::BeginningOfLine,
        Self::DwimBeginningOfLine,
        Self::BackToIndentation,
        Self::KillWord,
        Self::BackwardKillWord,
        Self::UnixWordRubout,
        Self::KillLine,
        Self::BackwardKillLine,
        Self::DwimBackwardKillLine,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::ForwardWord => "forward-word",
            Self::BackwardWord => "backward-word",
            Self::EndOfLine => "end-of-line",
            Self::BeginningOfLine => "beginning-of-line",
            Self::DwimBeginningOfLine => "dwim-beginning-of-line",
            Self::BackToIndentation => "back-to-indentation",
            Self::KillWord => "kill-word",
            Self::BackwardKillWord => "backward-kill-word",
            Self::UnixWordRubout => "unix-word-rubout",
            Self::KillLine => "kill-line",
            Self::BackwardKillLine => "backward-kill-line",
            Self::DwimBackwardKillLine => "dwim-backward-kill-line",
        }
    }

    /// Kill commands delete the span they cover; the rest only move the cursor.
    pub fn is_kill(self) -> bool {
        matches!(
            self,
            Self::KillWord
                | Self::BackwardKillWord
                | Self::UnixWordRubout
                | Self::KillLine
                | Self::BackwardKillLine
                | Self::DwimBackwardKillLine
        )
    }
}

impl fmt::Display for ReadlineCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReadlineCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for cmd in ReadlineCommand::ALL {
            assert_eq!(cmd.name().parse::<ReadlineCommand>(), Ok(cmd));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "transpose-chars".parse::<ReadlineCommand>().unwrap_err();
        assert_eq!(err.to_string(), "unknown readline command `transpose-chars`");
    }

    #[test]
    fn kill_classification() {
        let kills = ReadlineCommand::ALL.iter().filter(|c| c.is_kill()).count();
        assert_eq!(kills, 6);
        assert!(!ReadlineCommand::DwimBeginningOfLine.is_kill());
        assert!(ReadlineCommand::UnixWordRubout.is_kill());
    }
}
