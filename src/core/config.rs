use serde::{Deserialize, Serialize};

/// Cap on the number of results `find_top_documents` returns.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;
/// Two relevance scores closer than this are treated as tied.
pub const RELEVANCE_EPSILON: f64 = 1e-6;
/// Bucket count for the sharded concurrent map used by the parallel ranking path.
pub const ACCUMULATOR_SHARDS: usize = 16;
/// Sliding-window size consumed by the request-rate collaborator.
pub const REQUEST_WINDOW_SIZE: usize = 1440;

/// Tunable knobs for the engine. Not part of the ranking contract — changing
/// any of these cannot change *which* documents rank highest, only how the
/// work is scheduled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub shard_count: usize,
    pub worker_threads: usize,
    pub top_k: usize,
    pub relevance_epsilon: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            shard_count: ACCUMULATOR_SHARDS,
            worker_threads: num_cpus::get(),
            top_k: MAX_RESULT_DOCUMENT_COUNT,
            relevance_epsilon: RELEVANCE_EPSILON,
        }
    }
}
