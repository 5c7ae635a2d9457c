//! Word tokenization with a fixed delimiter set and optional ASCII case folding

use std::str::Split;

/// Punctuation discarded between words, in addition to whitespace
pub const PUNCTUATION: [char; 14] = [
    '.', ',', ':', ';', '!', '?', '(', ')', '"', '”', '„', '“', '=', '…',
];

/// How tokens are normalized before being returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// Tokens keep their original spelling
    #[default]
    Sensitive,
    /// ASCII letters are lowercased
    Insensitive,
}

impl CaseMode {
    /// Map the CLI `--ignore-case` flag to a case mode
    pub const fn from_ignore_case(ignore_case: bool) -> Self {
        if ignore_case {
            Self::Insensitive
        } else {
            Self::Sensitive
        }
    }

    /// Apply the normalization of this mode to a single word
    pub fn normalize(self, word: &str) -> String {
        match self {
            Self::Sensitive => word.to_owned(),
            Self::Insensitive => word.to_ascii_lowercase(),
        }
    }
}

/// Whether a character separates two tokens
pub fn is_delimiter(ch: char) -> bool {
    ch.is_whitespace() || PUNCTUATION.contains(&ch)
}

/// Lazy token stream over borrowed text
///
/// Restartable: clone it before consuming to walk the same text twice.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    parts: Split<'a, fn(char) -> bool>,
    case: CaseMode,
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.parts
            .by_ref()
            .find(|part| !part.is_empty())
            .map(|part| self.case.normalize(part))
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Split text into words
///
/// A token is a maximal run of characters outside the delimiter set.
/// Delimiters are dropped and no token is ever empty.
pub fn tokenize(text: &str, case: CaseMode) -> Tokens<'_> {
    Tokens {
        parts: text.split(is_delimiter as fn(char) -> bool),
        case,
    }
}
