use crate::analysis::stop_words::StopWords;
use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::core::error::{Error, Result};
use crate::core::types::{DocId, DocumentRecord, DocumentStatus, WordFrequencies};
use crate::query::parser::QueryParser;
use log::warn;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap};

/// Owns every piece of persistent state for one corpus: the document
/// records, the ascending order set, the stop-word set, and the forward and
/// inverted indices. Enforces the cross-index invariants across every
/// mutation (see SPEC_FULL.md §3).
///
/// Both indices key on owned `String`s rather than slices borrowed from
/// `DocumentRecord::text` — see DESIGN.md's note on the Open Question this
/// resolves.
pub struct IndexStore {
    stop_words: StopWords,
    order: BTreeSet<DocId>,
    documents: HashMap<DocId, DocumentRecord>,
    forward_index: HashMap<DocId, HashMap<String, f64>>,
    inverted_index: HashMap<String, HashMap<DocId, f64>>,
}

impl IndexStore {
    pub fn new(stop_words: StopWords) -> Self {
        IndexStore {
            stop_words,
            order: BTreeSet::new(),
            documents: HashMap::new(),
            forward_index: HashMap::new(),
            inverted_index: HashMap::new(),
        }
    }

    /// Convenience constructor taking stop-words as a space-separated
    /// string, validated the same way document text is.
    pub fn with_stop_word_text(text: &str) -> Result<Self> {
        Ok(Self::new(StopWords::from_text(text)?))
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Adds a document. Fails with `InvalidArgument` if `id < 0` or `id` is
    /// already present. All validation and tokenization happens before any
    /// field is mutated, so a failed call leaves the store untouched.
    pub fn add_document(
        &mut self,
        id: i64,
        text: &str,
        status: DocumentStatus,
        ratings: &[i64],
    ) -> Result<()> {
        if id < 0 {
            return Err(Error::invalid_argument(format!("document id is negative: {id}")));
        }
        let doc_id = DocId::new(id);
        if self.documents.contains_key(&doc_id) {
            return Err(Error::invalid_argument(format!("document id already exists: {id}")));
        }

        let non_stop_words = self.non_stop_words(text)?;
        let rating = average_rating(ratings);

        let mut word_tf: HashMap<String, f64> = HashMap::new();
        if !non_stop_words.is_empty() {
            let inv_word_count = 1.0 / non_stop_words.len() as f64;
            for word in &non_stop_words {
                *word_tf.entry((*word).to_string()).or_insert(0.0) += inv_word_count;
            }
        }

        // Everything above is fallible or pure; only the store's own fields
        // are mutated below, each exactly once (see DESIGN.md's note on the
        // reference implementation's double-insert defect).
        self.documents.insert(
            doc_id,
            DocumentRecord { id: doc_id, status, rating, text: text.to_string() },
        );
        self.order.insert(doc_id);
        for (word, tf) in &word_tf {
            self.inverted_index.entry(word.clone()).or_default().insert(doc_id, *tf);
        }
        self.forward_index.insert(doc_id, word_tf);

        Ok(())
    }

    /// Tokenizes `text`, strips stop-words, and validates every remaining
    /// word. Pure — does not touch `self` beyond reading the stop-word set.
    fn non_stop_words<'a>(&self, text: &'a str) -> Result<Vec<&'a str>> {
        let mut words = Vec::new();
        for word in split_into_words(text) {
            if !is_valid_word(word) {
                return Err(Error::invalid_argument(format!(
                    "document text contains a character in [0x00, 0x1F]: {word}"
                )));
            }
            if !self.stop_words.contains(word) {
                words.push(word);
            }
        }
        Ok(words)
    }

    /// Removes `id` from every index and from the order set. A no-op if
    /// `id` is unknown.
    pub fn remove_document(&mut self, id: DocId) {
        if self.order.remove(&id) {
            self.documents.remove(&id);
            if let Some(words) = self.forward_index.remove(&id) {
                for word in words.keys() {
                    if let Some(posting) = self.inverted_index.get_mut(word) {
                        posting.remove(&id);
                    }
                }
            }
        }
    }

    /// Same contract as `remove_document`, but fans the per-word posting
    /// erasure out across a rayon thread pool. The word list is
    /// pre-materialized into a `HashSet` before the parallel pass so the
    /// outer inverted-index map's keys are never touched concurrently;
    /// `par_iter_mut` then hands each thread a disjoint `&mut` into one
    /// word's posting map, so distinct words never alias.
    pub fn remove_document_parallel(&mut self, id: DocId) {
        if !self.order.remove(&id) {
            return;
        }
        self.documents.remove(&id);
        let Some(words) = self.forward_index.remove(&id) else { return };
        let word_set: std::collections::HashSet<String> = words.into_keys().collect();

        self.inverted_index
            .par_iter_mut()
            .filter(|(word, _)| word_set.contains(word.as_str()))
            .for_each(|(word, posting)| {
                if posting.is_empty() {
                    warn!("parallel remove_document: word {word:?} already had an empty posting");
                    return;
                }
                posting.remove(&id);
            });
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Ascending iteration over present document ids.
    pub fn ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.order.iter().copied()
    }

    /// The forward-index inner map for `id`, empty if `id` is unknown.
    pub fn word_frequencies(&self, id: DocId) -> WordFrequencies {
        self.forward_index.get(&id).cloned().unwrap_or_default()
    }

    pub(crate) fn inverted_posting(&self, word: &str) -> Option<&HashMap<DocId, f64>> {
        self.inverted_index.get(word)
    }

    pub(crate) fn document_meta(&self, id: DocId) -> Option<(DocumentStatus, i64)> {
        self.documents.get(&id).map(|doc| (doc.status, doc.rating))
    }

    /// Parses `raw_query` with this store's stop-word set and returns
    /// `(matched plus-words, status)`. `NotFound` if `id` is unknown. If any
    /// minus-word is present in the document, the match is empty regardless
    /// of which plus-words would otherwise have matched.
    pub fn match_document(&self, raw_query: &str, id: DocId) -> Result<(Vec<String>, DocumentStatus)> {
        let status = self
            .documents
            .get(&id)
            .map(|doc| doc.status)
            .ok_or_else(|| Error::not_found(format!("document id not found: {}", id.value())))?;

        let query = QueryParser::parse(raw_query, &self.stop_words)?;
        let words = self.forward_index.get(&id);

        let has_minus_match = query
            .minus_words
            .iter()
            .any(|word| words.is_some_and(|w| w.contains_key(word)));
        if has_minus_match {
            return Ok((Vec::new(), status));
        }

        let matched = query
            .plus_words
            .into_iter()
            .filter(|word| words.is_some_and(|w| w.contains_key(word)))
            .collect();

        Ok((matched, status))
    }

    /// Same contract as `match_document`, fanning the minus/plus scans
    /// across a rayon thread pool. Because `par_iter`'s `any`/`filter`
    /// don't preserve input order, the matched list is re-sorted for
    /// determinism before returning.
    pub fn match_document_parallel(
        &self,
        raw_query: &str,
        id: DocId,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        let status = self
            .documents
            .get(&id)
            .map(|doc| doc.status)
            .ok_or_else(|| Error::not_found(format!("document id not found: {}", id.value())))?;

        let query = QueryParser::parse(raw_query, &self.stop_words)?;
        let words = self.forward_index.get(&id);

        let has_minus_match = query
            .minus_words
            .par_iter()
            .any(|word| words.is_some_and(|w| w.contains_key(word)));
        if has_minus_match {
            return Ok((Vec::new(), status));
        }

        let mut matched: Vec<String> = query
            .plus_words
            .into_par_iter()
            .filter(|word| words.is_some_and(|w| w.contains_key(word)))
            .collect();
        matched.sort_unstable();
        matched.dedup();

        Ok((matched, status))
    }
}

/// Arithmetic mean of `ratings`, truncated toward zero; 0 if `ratings` is
/// empty.
fn average_rating(ratings: &[i64]) -> i64 {
    if ratings.is_empty() {
        0
    } else {
        ratings.iter().sum::<i64>() / ratings.len() as i64
    }
}
