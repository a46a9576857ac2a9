//! Word splitting and validation.
//!
//! Grounded on `meilidb-tokenizer`'s `Tokenizer`, which hand-rolls its own
//! word splitter over `char_indices` rather than reaching for a tokenizing
//! crate. That tokenizer treats punctuation as long separators and is
//! CJK-aware; this one only ever has to split on the ASCII space character,
//! so it stays a plain `str::split` — language-aware segmentation is out of
//! scope here.

/// Splits `text` on ASCII space (0x20) into maximal non-empty runs.
/// Mirrors `str::split_whitespace` except that it recognizes *only* 0x20 as a
/// separator, not arbitrary Unicode whitespace.
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|word| !word.is_empty()).collect()
}

/// A word is valid iff it contains no control character in [0x00, 0x1F].
pub fn is_valid_word(word: &str) -> bool {
    !word.bytes().any(|b| b < 0x20)
}
