use crate::core::config::{MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON};
use crate::core::error::Result;
use crate::core::types::{DocId, DocumentStatus};
use crate::index::store::IndexStore;
use crate::query::parser::{ParsedQuery, QueryParser};
use crate::ranking::document::RankedDocument;
use std::cmp::Ordering;
use std::collections::HashMap;

/// A per-document admission test: `(id, status, rating) -> bool`. Bound into
/// minus-word removal never runs it — see SPEC_FULL.md's design note on
/// minus-words ignoring the predicate by design.
pub trait Predicate: Fn(DocId, DocumentStatus, i64) -> bool {}
impl<F: Fn(DocId, DocumentStatus, i64) -> bool> Predicate for F {}

/// Ranks every candidate document against `raw_query` under TF-IDF and
/// returns the top `MAX_RESULT_DOCUMENT_COUNT` by `(relevance desc, rating
/// desc, id asc)`.
pub fn find_top_documents(
    store: &IndexStore,
    raw_query: &str,
    predicate: impl Predicate,
) -> Result<Vec<RankedDocument>> {
    let query = QueryParser::parse(raw_query, store.stop_words())?;
    let relevance = accumulate_relevance(store, &query, predicate);
    Ok(sort_and_truncate(store, relevance))
}

/// Specialization of `find_top_documents` binding status equality into the
/// predicate; there is no separate status index (see DESIGN.md).
pub fn find_top_documents_with_status(
    store: &IndexStore,
    raw_query: &str,
    status: DocumentStatus,
) -> Result<Vec<RankedDocument>> {
    find_top_documents(store, raw_query, move |_id, doc_status, _rating| doc_status == status)
}

/// Same contract as `find_top_documents_with_status`, defaulting to `Actual`.
pub fn find_top_documents_actual(store: &IndexStore, raw_query: &str) -> Result<Vec<RankedDocument>> {
    find_top_documents_with_status(store, raw_query, DocumentStatus::Actual)
}

fn accumulate_relevance(
    store: &IndexStore,
    query: &ParsedQuery,
    predicate: impl Predicate,
) -> HashMap<DocId, f64> {
    let mut relevance: HashMap<DocId, f64> = HashMap::new();
    let doc_count = store.document_count();

    for word in &query.plus_words {
        let Some(posting) = store.inverted_posting(word) else { continue };
        let idf = inverse_document_frequency(doc_count, posting.len());
        for (&doc_id, &tf) in posting {
            let Some((status, rating)) = store.document_meta(doc_id) else { continue };
            if predicate(doc_id, status, rating) {
                *relevance.entry(doc_id).or_insert(0.0) += tf * idf;
            }
        }
    }

    for word in &query.minus_words {
        let Some(posting) = store.inverted_posting(word) else { continue };
        for doc_id in posting.keys() {
            relevance.remove(doc_id);
        }
    }

    relevance
}

pub(crate) fn inverse_document_frequency(doc_count: usize, posting_size: usize) -> f64 {
    (doc_count as f64 / posting_size as f64).ln()
}

/// Shared by the sequential and parallel ranking paths: materializes
/// `{id, relevance, rating}` triples, sorts them, and truncates to the
/// top-K cap. The sort is fully deterministic — ties on relevance (within
/// `RELEVANCE_EPSILON`) break on rating, and ties on both break on
/// ascending id — so sequential and parallel callers agree bit-for-bit.
pub(crate) fn sort_and_truncate(store: &IndexStore, relevance: HashMap<DocId, f64>) -> Vec<RankedDocument> {
    let mut documents: Vec<RankedDocument> = relevance
        .into_iter()
        .filter_map(|(id, score)| {
            store.document_meta(id).map(|(_, rating)| RankedDocument::new(id, score, rating))
        })
        .collect();

    documents.sort_by(|a, b| compare_ranked(a, b));
    documents.truncate(MAX_RESULT_DOCUMENT_COUNT);
    documents
}

fn compare_ranked(a: &RankedDocument, b: &RankedDocument) -> Ordering {
    if (a.relevance - b.relevance).abs() >= RELEVANCE_EPSILON {
        return b.relevance.partial_cmp(&a.relevance).unwrap_or(Ordering::Equal);
    }
    if a.rating != b.rating {
        return b.rating.cmp(&a.rating);
    }
    a.id.cmp(&b.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::stop_words::StopWords;

    fn always_true(_: DocId, _: DocumentStatus, _: i64) -> bool {
        true
    }

    #[test]
    fn empty_server_returns_no_results() {
        let store = IndexStore::new(StopWords::empty());
        let results = find_top_documents(&store, "cat city blue eyes", always_true).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn ranks_by_tf_idf_relevance() {
        let mut store = IndexStore::new(StopWords::empty());
        store.add_document(1, "cat and cat in the city", DocumentStatus::Actual, &[1, 1, 2]).unwrap();
        store.add_document(2, "red cat", DocumentStatus::Actual, &[]).unwrap();

        let results = find_top_documents(&store, "cat in city", always_true).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, DocId::new(1));
        assert!((results[0].relevance - 0.231049).abs() < 1e-6);
        assert_eq!(results[1].id, DocId::new(2));
        assert!((results[1].relevance - 0.0).abs() < 1e-6);
    }

    #[test]
    fn stop_words_are_excluded_from_ranking() {
        let mut store = IndexStore::with_stop_word_text("in the").unwrap();
        store.add_document(42, "cat in the city", DocumentStatus::Actual, &[1, 2, 3]).unwrap();

        assert!(find_top_documents(&store, "in", always_true).unwrap().is_empty());

        let mut no_stop = IndexStore::new(StopWords::empty());
        no_stop.add_document(42, "cat in the city", DocumentStatus::Actual, &[1, 2, 3]).unwrap();
        let results = find_top_documents(&no_stop, "in", always_true).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, DocId::new(42));
    }

    #[test]
    fn minus_word_excludes_regardless_of_predicate() {
        let mut store = IndexStore::new(StopWords::empty());
        store.add_document(1, "cat and cat in the city", DocumentStatus::Actual, &[]).unwrap();
        store.add_document(2, "red cat", DocumentStatus::Actual, &[]).unwrap();

        let results = find_top_documents(&store, "cat city red -red", always_true).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, DocId::new(1));
    }

    #[test]
    fn truncates_to_top_k_breaking_ties_by_rating() {
        let mut store = IndexStore::new(StopWords::empty());
        let docs = [
            (1, "blue cat city eyes", 5),
            (2, "blue cat city eyes", 9),
            (3, "cat city", 1),
            (4, "cat city blue", 2),
            (5, "eyes", 0),
            (6, "cat", 100),
            (7, "city blue eyes cat", 3),
        ];
        for (id, text, rating) in docs {
            store.add_document(id, text, DocumentStatus::Actual, &[rating]).unwrap();
        }

        let results = find_top_documents(&store, "cat city blue eyes", always_true).unwrap();
        assert_eq!(results.len(), MAX_RESULT_DOCUMENT_COUNT);
        // id 5's whole text is the rare word "eyes", giving it the single
        // highest relevance; ids 1, 2, and 7 then tie on the densest
        // four-word match, broken by rating (9 > 5 > 3); id 4's shorter,
        // blue-less match trails; ids 3 and 6 fall outside the top five.
        let ids: Vec<i64> = results.iter().map(|d| d.id.value()).collect();
        assert_eq!(ids, vec![5, 2, 1, 7, 4]);
    }

    #[test]
    fn result_never_exceeds_five() {
        let mut store = IndexStore::new(StopWords::empty());
        for id in 0..20 {
            store.add_document(id, "cat city blue eyes word", DocumentStatus::Actual, &[]).unwrap();
        }
        let results = find_top_documents(&store, "cat city blue eyes", always_true).unwrap();
        assert!(results.len() <= MAX_RESULT_DOCUMENT_COUNT);
    }
}
