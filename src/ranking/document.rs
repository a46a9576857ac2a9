use crate::core::types::DocId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One ranked search hit. Grounded on the reference implementation's
/// `Document` (id/relevance/rating triple with a matching `Display`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedDocument {
    pub id: DocId,
    pub relevance: f64,
    pub rating: i64,
}

impl RankedDocument {
    pub fn new(id: DocId, relevance: f64, rating: i64) -> Self {
        RankedDocument { id, relevance, rating }
    }
}

impl fmt::Display for RankedDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id.value(),
            self.relevance,
            self.rating
        )
    }
}
