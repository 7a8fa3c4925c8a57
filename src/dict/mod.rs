//! Dictionary contract and the word-list implementation.
//!
//! The engine only ever asks one question: is this string a playable word?
//! Lookups are uppercase-normalized on both sides, so blanks' substitute
//! letters and lowercase word lists behave identically.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rustc_hash::FxHashSet;

/// Boolean word-validity lookup.
pub trait Lexicon {
    /// Whether `word` is playable. Implementations must uppercase-normalize.
    fn contains(&self, word: &str) -> bool;
}

/// Failure to build a word list.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("could not read word list: {0}")]
    Io(#[from] std::io::Error),
}

/// A `Lexicon` backed by a hash set of uppercase words.
#[derive(Clone, Debug, Default)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    /// Build from an iterator of words.
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_ascii_uppercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Load a newline-separated word list from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictError> {
        let reader = BufReader::new(File::open(path)?);
        let mut words = FxHashSet::default();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_ascii_uppercase());
            }
        }
        Ok(Self { words })
    }

    /// Number of words in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Lexicon for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let list = WordList::from_words(["cat", "DOG"]);
        assert!(list.contains("CAT"));
        assert!(list.contains("dog"));
        assert!(!list.contains("BIRD"));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let list = WordList::from_words(["cat", "", "  "]);
        assert_eq!(list.len(), 1);
    }
}
