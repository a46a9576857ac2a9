use crate::core::types::DocId;
use crate::index::store::IndexStore;
use std::collections::BTreeSet;

/// Two documents are duplicates iff their sets of distinct (post-stop-word)
/// words are equal — frequencies don't matter. Walks documents in ascending
/// id order, keeps the first occurrence of each word-set, and removes every
/// later one via `IndexStore::remove_document`. Grounded on the reference
/// implementation's `RemoveDuplicates`/`ExtractKeys`.
///
/// Prints `Found duplicate document id <ID>` to stdout for each removal, in
/// removal order — this is a load-bearing side effect, not a debug trace.
pub fn remove_duplicates(store: &mut IndexStore) {
    let mut seen_word_sets: BTreeSet<Vec<String>> = BTreeSet::new();
    let mut doomed: Vec<DocId> = Vec::new();

    for id in store.ids().collect::<Vec<_>>() {
        let mut words: Vec<String> = store.word_frequencies(id).into_keys().collect();
        words.sort_unstable();
        if !seen_word_sets.insert(words) {
            doomed.push(id);
        }
    }

    for id in doomed {
        // A concurrent removal making `id` vanish first is not an error —
        // `remove_document` is already a no-op on an unknown id.
        store.remove_document(id);
        println!("Found duplicate document id {}", id.value());
    }
}
