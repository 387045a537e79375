//! Character classification for readline word motions.
//!
//! Only ASCII space and horizontal tab count as whitespace. Word characters
//! come from a configurable set, or from the whitespace-only rule used by
//! `unix-word-rubout`.

use std::collections::BTreeSet;

/// Default word characters: ASCII letters and digits.
pub const ASCII_ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// The set of characters treated as part of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordChars {
    /// Every non-whitespace character is a word character.
    NonWhitespace,
    /// Exact, case-sensitive membership.
    Set(BTreeSet<char>),
}

impl WordChars {
    pub fn from_chars(chars: &str) -> Self {
        Self::Set(chars.chars().collect())
    }

    pub fn alphanumeric() -> Self {
        Self::from_chars(ASCII_ALPHANUMERIC)
    }

    pub fn contains(&self, c: char) -> bool {
        match self {
            Self::NonWhitespace => !is_whitespace(c),
            Self::Set(set) => set.contains(&c),
        }
    }
}

impl Default for WordChars {
    fn default() -> Self {
        Self::alphanumeric()
    }
}

/// True for ASCII space and horizontal tab only.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

#[inline]
pub fn is_word_char(c: char, word_chars: &WordChars) -> bool {
    word_chars.contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_space_and_tab_only() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\t'));
        assert!(!is_whitespace('\n'));
        assert!(!is_whitespace('\u{a0}'));
        assert!(!is_whitespace('\u{3000}'));
    }

    #[test]
    fn explicit_set_membership_is_case_sensitive() {
        let wc = WordChars::from_chars("abc_");
        assert!(is_word_char('a', &wc));
        assert!(is_word_char('_', &wc));
        assert!(!is_word_char('A', &wc));
        assert!(!is_word_char('d', &wc));
    }

    #[test]
    fn default_is_ascii_alphanumeric() {
        let wc = WordChars::default();
        assert!(wc.contains('z'));
        assert!(wc.contains('Q'));
        assert!(wc.contains('7'));
        assert!(!wc.contains('_'));
        assert!(!wc.contains('\u{e9}'));
    }

    #[test]
    fn non_whitespace_sentinel_accepts_punctuation() {
        let wc = WordChars::NonWhitespace;
        assert!(wc.contains('-'));
        assert!(wc.contains('/'));
        assert!(!wc.contains(' '));
        assert!(!wc.contains('\t'));
    }
}
