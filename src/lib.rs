pub mod analysis;
pub mod collab;
pub mod core;
pub mod index;
pub mod maintenance;
pub mod query;
pub mod ranking;
pub mod search;

/*
┌──────────────────────────────────────────────────────────────────────────┐
│                         RANKDEX MODULE LAYOUT                            │
└──────────────────────────────────────────────────────────────────────────┘

  analysis::tokenizer / analysis::stop_words
        │  split text into words, validate, strip stop-words
        ▼
  query::parser::QueryParser               ──┐  (parses raw queries the
        │  plus/minus word lists             │   same way add_document
        ▼                                     │   parses document text)
  index::store::IndexStore  ◄─────────────────┘
        │  owns: documents, order set, stop-words,
        │        forward_index (doc -> word -> tf),
        │        inverted_index (word -> doc -> tf)
        │
        ├─ ranking::engine            sequential TF-IDF + top-K
        ├─ ranking::parallel          same contract, sharded accumulator
        │                             (index::concurrent::ShardedMap)
        ├─ search::batch              many queries fanned across a pool
        └─ maintenance::duplicates    word-set equality, oldest-wins

  collab::paginator / collab::request_queue
        consume ranking::document::RankedDocument from the outside;
        neither reaches into IndexStore internals.
*/

/// Convenience re-exports for the crate's most common types, mirroring how
/// a caller typically wires things up: build a store, add documents, rank.
pub mod prelude {
    pub use crate::analysis::stop_words::StopWords;
    pub use crate::collab::paginator::{paginate, Page, Paginator};
    pub use crate::collab::request_queue::RequestQueue;
    pub use crate::core::config::Config;
    pub use crate::core::error::{Error, Result};
    pub use crate::core::types::{DocId, DocumentStatus};
    pub use crate::index::store::IndexStore;
    pub use crate::query::parser::{ParsedQuery, QueryParser};
    pub use crate::ranking::document::RankedDocument;
    pub use crate::ranking::engine::{find_top_documents, find_top_documents_actual, find_top_documents_with_status};
    pub use crate::ranking::parallel::{find_top_documents_parallel, find_top_documents_parallel_with_status};
}
