use crate::analysis::stop_words::StopWords;
use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::core::error::{Error, Result};

/// A query split into disjoint, deduplicated plus/minus word lists. Built by
/// `QueryParser::parse`; `find_top_documents` and `match_document` never see
/// a raw query string, only this.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    pub plus_words: Vec<String>,
    pub minus_words: Vec<String>,
}

struct QueryWord {
    text: String,
    is_minus: bool,
}

/// Parses raw query strings against a fixed stop-word set.
///
/// The parser does not own the stop-word set; `IndexStore` hands it a
/// reference to its own so that query-time stop-word handling can never
/// drift from index-time stop-word handling.
pub struct QueryParser;

impl QueryParser {
    pub fn parse(raw_query: &str, stop_words: &StopWords) -> Result<ParsedQuery> {
        let mut plus_words = Vec::new();
        let mut minus_words = Vec::new();

        for raw_word in split_into_words(raw_query) {
            let word = Self::parse_query_word(raw_word)?;
            if stop_words.contains(&word.text) {
                continue;
            }
            if word.is_minus {
                minus_words.push(word.text);
            } else {
                plus_words.push(word.text);
            }
        }

        dedup_preserving_order(&mut plus_words);
        dedup_preserving_order(&mut minus_words);

        Ok(ParsedQuery { plus_words, minus_words })
    }

    fn parse_query_word(raw_word: &str) -> Result<QueryWord> {
        let is_minus = raw_word.starts_with('-');
        let text = if is_minus { &raw_word[1..] } else { raw_word };

        if is_minus && text.is_empty() {
            return Err(Error::invalid_argument("empty query minus-word (\"-\")"));
        }
        if is_minus && text.starts_with('-') {
            return Err(Error::invalid_argument(format!(
                "invalid query minus-word (double dash): {raw_word}"
            )));
        }
        if !is_valid_word(text) {
            return Err(Error::invalid_argument(format!(
                "query word contains a character in [0x00, 0x1F]: {raw_word}"
            )));
        }

        Ok(QueryWord { text: text.to_string(), is_minus })
    }
}

fn dedup_preserving_order(words: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::with_capacity(words.len());
    words.retain(|word| seen.insert(word.clone()));
}
