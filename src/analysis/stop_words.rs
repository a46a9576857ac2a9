use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::core::error::{Error, Result};
use std::collections::HashSet;

/// Immutable set of stop-words, established once at construction.
#[derive(Debug, Clone, Default)]
pub struct StopWords(HashSet<String>);

impl StopWords {
    pub fn empty() -> Self {
        StopWords(HashSet::new())
    }

    /// Builds a stop-word set from a space-separated string, the same format
    /// the index store accepts for its own constructor.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_words(split_into_words(text))
    }

    /// Builds a stop-word set from any collection of word-like strings.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for word in words {
            let word = word.as_ref();
            if !is_valid_word(word) {
                return Err(Error::invalid_argument(
                    "stop-word contains a character in [0x00, 0x1F]",
                ));
            }
            set.insert(word.to_string());
        }
        Ok(StopWords(set))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }
}
