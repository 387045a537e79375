//! Configuration loading and layered lookup for readline motions.
//!
//! Parses `rlmotion.toml` (or an override path supplied by the binary) into a
//! `Config` value that hosts pass explicitly into every command. Nothing here
//! is global; each command resolves its `MotionSettings` fresh from the
//! `LookupContext` the host describes.
//!
//! ```toml
//! [words]
//! default = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789"
//!
//! [words.filetype]
//! lisp = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-"
//!
//! [comments.filetype]
//! lua = ["--"]
//! ```
//!
//! Word characters layer buffer override, then filetype override, then the
//! global default. Comment leaders layer the user table over the built-in
//! table; unknown filetypes have no leaders. Unknown fields are ignored.

use anyhow::Result;
use core_text::WordChars;
use core_text::classify::ASCII_ALPHANUMERIC;
use serde::Deserialize;
use std::collections::HashMap;
use std::{fs, path::PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub mod leaders;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("comment leader list for filetype `{filetype}` contains an empty leader")]
    EmptyCommentLeader { filetype: String },
    #[error("word character set `{scope}` is empty")]
    EmptyWordChars { scope: String },
}

/// What the host knows about the text being edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupContext<'a> {
    pub filetype: Option<&'a str>,
    /// Buffer-local word characters, highest priority.
    pub buffer_word_chars: Option<&'a str>,
}

impl<'a> LookupContext<'a> {
    pub fn new(filetype: Option<&'a str>, buffer_word_chars: Option<&'a str>) -> Self {
        Self {
            filetype,
            buffer_word_chars,
        }
    }
}

/// Per-command settings a host resolves from `Config` for its `LookupContext`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MotionSettings {
    pub word_chars: WordChars,
    pub comment_leaders: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WordsConfig {
    #[serde(default = "WordsConfig::default_chars")]
    pub default: String,
    #[serde(default)]
    pub filetype: HashMap<String, String>,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            default: Self::default_chars(),
            filetype: HashMap::new(),
        }
    }
}

impl WordsConfig {
    fn default_chars() -> String {
        ASCII_ALPHANUMERIC.to_string()
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct CommentsConfig {
    #[serde(default)]
    pub filetype: HashMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub words: WordsConfig,
    #[serde(default)]
    pub comments: CommentsConfig,
}

impl ConfigFile {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.words.default.is_empty() {
            return Err(ConfigError::EmptyWordChars {
                scope: "default".to_string(),
            });
        }
        if let Some((ft, _)) = self.words.filetype.iter().find(|(_, chars)| chars.is_empty()) {
            return Err(ConfigError::EmptyWordChars { scope: ft.clone() });
        }
        if let Some((ft, _)) = self
            .comments
            .filetype
            .iter()
            .find(|(_, leaders)| leaders.iter().any(String::is_empty))
        {
            return Err(ConfigError::EmptyCommentLeader {
                filetype: ft.clone(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from("rlmotion.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("rlmotion").join("rlmotion.toml");
    }
    PathBuf::from("rlmotion.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match parse(&content) {
        Ok(cfg) => {
            info!(
                target: "config",
                path = %path.display(),
                word_filetypes = cfg.file.words.filetype.len(),
                comment_filetypes = cfg.file.comments.filetype.len(),
                "config_loaded"
            );
            Ok(cfg)
        }
        Err(e) => {
            // Parse or validation failure falls back to defaults.
            warn!(target: "config", path = %path.display(), error = %e, "config_fallback_defaults");
            Ok(Config::default())
        }
    }
}

/// Parse and validate a TOML document.
pub fn parse(content: &str) -> Result<Config> {
    let file = toml::from_str::<ConfigFile>(content)?;
    file.validate()?;
    Ok(Config {
        raw: Some(content.to_string()),
        file,
    })
}

impl Config {
    pub fn word_characters(&self, ctx: LookupContext<'_>) -> WordChars {
        if let Some(chars) = ctx.buffer_word_chars.filter(|c| !c.is_empty()) {
            return WordChars::from_chars(chars);
        }
        if let Some(chars) = ctx.filetype.and_then(|ft| self.file.words.filetype.get(ft)) {
            return WordChars::from_chars(chars);
        }
        WordChars::from_chars(&self.file.words.default)
    }

    pub fn comment_leaders(&self, ctx: LookupContext<'_>) -> Vec<String> {
        let Some(ft) = ctx.filetype else {
            return Vec::new();
        };
        if let Some(user) = self.file.comments.filetype.get(ft) {
            return user.clone();
        }
        leaders::builtin(ft)
            .iter()
            .map(|l| (*l).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex, MutexGuard};
    use tracing::Level;
    use tracing::subscriber::with_default;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone)]
    struct BufferWriter {
        inner: Arc<Mutex<Vec<u8>>>,
    }

    impl BufferWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buf = Arc::new(Mutex::new(Vec::new()));
            (Self { inner: buf.clone() }, buf)
        }
    }

    struct LockedWriter<'a> {
        guard: MutexGuard<'a, Vec<u8>>,
    }

    impl<'a> Write for LockedWriter<'a> {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.guard.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for BufferWriter {
        type Writer = LockedWriter<'a>;

        fn make_writer(&'a self) -> Self::Writer {
            LockedWriter {
                guard: self.inner.lock().expect("log buffer poisoned"),
            }
        }
    }

    #[test]
    fn default_config_when_missing_file() {
        let cfg = load_from(Some(PathBuf::from("__nonexistent_hopefully__.toml"))).unwrap();
        assert!(cfg.raw.is_none());
        assert_eq!(
            cfg.word_characters(LookupContext::default()),
            WordChars::alphanumeric()
        );
    }

    #[test]
    fn word_chars_layering() {
        let cfg = parse(
            "[words]\ndefault = \"abc\"\n[words.filetype]\nlisp = \"abc-\"\n",
        )
        .unwrap();
        let global = cfg.word_characters(LookupContext::new(Some("rust"), None));
        assert!(!global.contains('-'));
        assert!(!global.contains('d'));
        let ft = cfg.word_characters(LookupContext::new(Some("lisp"), None));
        assert!(ft.contains('-'));
        let buffer = cfg.word_characters(LookupContext::new(Some("lisp"), Some("xyz")));
        assert!(buffer.contains('x'));
        assert!(!buffer.contains('-'));
    }

    #[test]
    fn empty_buffer_override_is_ignored() {
        let cfg = Config::default();
        let wc = cfg.word_characters(LookupContext::new(None, Some("")));
        assert_eq!(wc, WordChars::alphanumeric());
    }

    #[test]
    fn comment_leaders_builtin_and_override() {
        let cfg = parse("[comments.filetype]\nlua = [\"--[[\", \"--\"]\n").unwrap();
        assert_eq!(
            cfg.comment_leaders(LookupContext::new(Some("rust"), None)),
            vec!["//".to_string()]
        );
        assert_eq!(
            cfg.comment_leaders(LookupContext::new(Some("lua"), None)),
            vec!["--[[".to_string(), "--".to_string()]
        );
        assert!(cfg.comment_leaders(LookupContext::new(Some("brainfuck"), None)).is_empty());
        assert!(cfg.comment_leaders(LookupContext::default()).is_empty());
    }

    #[test]
    fn validation_rejects_empty_leader() {
        let err = parse("[comments.filetype]\nlua = [\"\"]\n").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::EmptyCommentLeader {
                filetype: "lua".to_string()
            })
        );
    }

    #[test]
    fn validation_rejects_empty_word_chars() {
        let err = parse("[words]\ndefault = \"\"\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::EmptyWordChars { .. })
        ));
    }

    #[test]
    fn loads_file_from_disk() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[words.filetype]\nsh = \"abc_\"\n").unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert!(cfg.raw.is_some());
        let wc = cfg.word_characters(LookupContext::new(Some("sh"), None));
        assert!(wc.contains('_'));
    }

    #[test]
    fn invalid_file_falls_back_with_warning() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[comments.filetype]\nc = [\"\"]\n").unwrap();
        let (writer, buffer) = BufferWriter::new();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_target(true)
            .with_ansi(false)
            .without_time()
            .with_writer(writer)
            .finish();

        let cfg = with_default(subscriber, || {
            load_from(Some(tmp.path().to_path_buf())).unwrap()
        });

        let log_output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(log_output.contains("WARN config:"));
        assert!(log_output.contains("config_fallback_defaults"));
        assert!(cfg.raw.is_none());
        assert!(cfg.file.comments.filetype.is_empty());
    }

    #[test]
    fn malformed_toml_falls_back() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[words\n").unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert!(cfg.raw.is_none());
    }
}
