use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Caller-assigned document identifier. Non-negative by contract; validated
/// at the `IndexStore::add_document` boundary, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub i64);

impl DocId {
    pub fn new(id: i64) -> Self {
        DocId(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for DocId {
    fn from(id: i64) -> Self {
        DocId(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentStatus {
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

/// Internal record kept by the index store. `text` is retained for
/// introspection and `word_frequencies`/`match_document` display; the
/// indices themselves key on owned copies of its words (see DESIGN.md).
#[derive(Debug, Clone)]
pub struct DocumentRecord {
    pub id: DocId,
    pub status: DocumentStatus,
    pub rating: i64,
    pub text: String,
}

/// Per-document word -> term-frequency map, as returned by
/// `IndexStore::word_frequencies`.
pub type WordFrequencies = HashMap<String, f64>;
