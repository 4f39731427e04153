use crate::sink::ResultRow;
use serde::Serialize;

#[derive(Serialize)]
pub struct ResultRowResponse {
    pub seed: String,
    pub score: i64,
    pub tally: Vec<i64>,
}

impl From<ResultRow> for ResultRowResponse {
    fn from(row: ResultRow) -> Self {
        Self { seed: row.seed, score: row.score, tally: row.tally }
    }
}

#[derive(Serialize)]
pub struct StartSearchResponse {
    #[serde(rename = "searchId")]
    pub search_id: String,
    #[serde(rename = "fertilizerHits")]
    pub fertilizer_hits: Vec<String>,
}

#[derive(Serialize)]
pub struct SearchStatusResponse {
    #[serde(rename = "searchId")]
    pub search_id: String,
    pub running: bool,
    #[serde(rename = "seedsEvaluated")]
    pub seeds_evaluated: u64,
    #[serde(rename = "batchesCompleted")]
    pub batches_completed: u64,
    #[serde(rename = "lastCompletedBatch")]
    pub last_completed_batch: u64,
    pub top: Vec<ResultRowResponse>,
    #[serde(rename = "filterText")]
    pub filter_text: String,
}
