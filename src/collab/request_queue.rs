use crate::core::config::REQUEST_WINDOW_SIZE;
use crate::core::error::Result;
use crate::core::types::{DocId, DocumentStatus};
use crate::index::store::IndexStore;
use crate::ranking::document::RankedDocument;
use crate::ranking::engine::{find_top_documents, find_top_documents_actual, find_top_documents_with_status};
use std::collections::VecDeque;

/// Wraps a read-only reference to an `IndexStore` and records, over a
/// sliding window of the last `REQUEST_WINDOW_SIZE` calls, how many
/// returned no results. Grounded on the reference implementation's
/// `RequestQueue`, which tracks the same thing over a one-day window of
/// per-minute requests; here the window is simply "the last W calls"
/// rather than wall-clock minutes, since this crate has no clock of its own
/// (see SPEC_FULL §4.11).
pub struct RequestQueue<'a> {
    store: &'a IndexStore,
    history: VecDeque<bool>,
    empty_count: usize,
}

impl<'a> RequestQueue<'a> {
    pub fn new(store: &'a IndexStore) -> Self {
        RequestQueue { store, history: VecDeque::new(), empty_count: 0 }
    }

    pub fn add_find_request(
        &mut self,
        raw_query: &str,
        predicate: impl Fn(DocId, DocumentStatus, i64) -> bool,
    ) -> Result<Vec<RankedDocument>> {
        let result = find_top_documents(self.store, raw_query, predicate)?;
        self.record(result.is_empty());
        Ok(result)
    }

    pub fn add_find_request_with_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<RankedDocument>> {
        let result = find_top_documents_with_status(self.store, raw_query, status)?;
        self.record(result.is_empty());
        Ok(result)
    }

    pub fn add_find_request_actual(&mut self, raw_query: &str) -> Result<Vec<RankedDocument>> {
        let result = find_top_documents_actual(self.store, raw_query)?;
        self.record(result.is_empty());
        Ok(result)
    }

    pub fn empty_request_count(&self) -> usize {
        self.empty_count
    }

    fn record(&mut self, was_empty: bool) {
        if self.history.len() >= REQUEST_WINDOW_SIZE {
            if let Some(expired) = self.history.pop_front() {
                if expired {
                    self.empty_count -= 1;
                }
            }
        }
        if was_empty {
            self.empty_count += 1;
        }
        self.history.push_back(was_empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::stop_words::StopWords;

    #[test]
    fn counts_empty_results_within_the_window() {
        let mut store = IndexStore::new(StopWords::empty());
        store.add_document(1, "cat", DocumentStatus::Actual, &[]).unwrap();
        let mut queue = RequestQueue::new(&store);

        queue.add_find_request_actual("cat").unwrap();
        queue.add_find_request_actual("dog").unwrap();
        queue.add_find_request_actual("dog").unwrap();

        assert_eq!(queue.empty_request_count(), 2);
    }

    #[test]
    fn window_slides_once_full() {
        let mut store = IndexStore::new(StopWords::empty());
        store.add_document(1, "cat", DocumentStatus::Actual, &[]).unwrap();
        let mut queue = RequestQueue::new(&store);

        queue.add_find_request_actual("dog").unwrap(); // empty, will eventually fall out of the window
        for _ in 0..REQUEST_WINDOW_SIZE {
            queue.add_find_request_actual("cat").unwrap(); // non-empty
        }

        assert_eq!(queue.empty_request_count(), 0);
    }
}
