use crate::core::error::Result;
use crate::index::store::IndexStore;
use crate::ranking::document::RankedDocument;
use crate::ranking::engine::find_top_documents_actual;
use rayon::prelude::*;

/// Runs every query in `queries` concurrently over the same read-only
/// `store`, via rayon's work-stealing pool. Grounded on the reference
/// implementation's `ProcessQueries`, which does the equivalent with
/// `std::execution::par` over a `transform`. The result vector has the same
/// length as `queries` and the i-th entry is that query's own result (or
/// error) — the only ordering promise; the pool itself may evaluate queries
/// in any order.
pub fn process_queries(store: &IndexStore, queries: &[String]) -> Vec<Result<Vec<RankedDocument>>> {
    queries.par_iter().map(|query| find_top_documents_actual(store, query)).collect()
}

/// Flattens the per-query result lists into one sequence, preserving both
/// the input query order and each query's own within-query ordering. A
/// query that failed to parse contributes no rows (matching the reference
/// implementation's behavior of treating the reference `ProcessQueries`
/// call as already having succeeded by the time it's joined).
pub fn process_queries_joined(store: &IndexStore, queries: &[String]) -> Vec<RankedDocument> {
    process_queries(store, queries)
        .into_iter()
        .flat_map(|result| result.unwrap_or_default())
        .collect()
}
