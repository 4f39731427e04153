//! The bounded, score-ordered result table. Every worker thread in the
//! search driver shares one [`ResultSink`]; insertions are serialized
//! behind whatever lock the implementation chooses.

const CAP: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub seed: String,
    pub score: i64,
    pub tally: Vec<i64>,
}

/// Implementors serialize their own inserts; the search driver never holds
/// a lock itself, it just calls `upsert` once per qualifying lane.
pub trait ResultSink: Send + Sync {
    fn upsert(&self, row: ResultRow);
    /// Scores currently held, sorted descending — feeds the driver's cutoff adaptation.
    fn scores_desc(&self) -> Vec<i64>;
    fn top(&self, limit: usize) -> Vec<ResultRow>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Drop every held row. Called when a new run can't resume the one
    /// already on disk — filter text changed, or there was no checkpoint
    /// to resume from in the first place.
    fn clear(&self);
}

/// In-process sink used by tests, benchmarks, and any run without a
/// database configured. Upsert-by-seed, capped at [`CAP`], lowest score
/// evicted first.
#[derive(Default)]
pub struct MemorySink {
    rows: std::sync::Mutex<std::collections::HashMap<String, ResultRow>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultSink for MemorySink {
    fn upsert(&self, row: ResultRow) {
        let mut rows = self.rows.lock().expect("result sink mutex poisoned");
        match rows.get(&row.seed) {
            Some(existing) if existing.score >= row.score => return,
            _ => {
                rows.insert(row.seed.clone(), row);
            }
        }
        if rows.len() > CAP {
            if let Some(lowest_seed) = rows.values().min_by_key(|r| r.score).map(|r| r.seed.clone()) {
                rows.remove(&lowest_seed);
            }
        }
    }

    fn scores_desc(&self) -> Vec<i64> {
        let rows = self.rows.lock().expect("result sink mutex poisoned");
        let mut scores: Vec<i64> = rows.values().map(|r| r.score).collect();
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores
    }

    fn top(&self, limit: usize) -> Vec<ResultRow> {
        let rows = self.rows.lock().expect("result sink mutex poisoned");
        let mut out: Vec<ResultRow> = rows.values().cloned().collect();
        out.sort_unstable_by(|a, b| b.score.cmp(&a.score));
        out.truncate(limit);
        out
    }

    fn len(&self) -> usize {
        self.rows.lock().expect("result sink mutex poisoned").len()
    }

    fn clear(&self) {
        self.rows.lock().expect("result sink mutex poisoned").clear();
    }
}

#[cfg(feature = "database")]
pub use postgres_sink::PostgresSink;

#[cfg(feature = "database")]
mod postgres_sink {
    use super::{CAP, ResultRow, ResultSink};
    use std::sync::Arc;
    use tokio_postgres::Client;
    use tokio_postgres::types::ToSql;

    /// Bridges the synchronous, rayon-driven search loop to an async
    /// `tokio_postgres::Client` with its own dedicated runtime, so `upsert`
    /// can be called from a plain OS thread with no ambient tokio context.
    pub struct PostgresSink {
        client: Arc<Client>,
        runtime: tokio::runtime::Runtime,
    }

    impl PostgresSink {
        pub fn new(client: Arc<Client>) -> Self {
            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().expect("build sink runtime");
            Self { client, runtime }
        }
    }

    impl ResultSink for PostgresSink {
        fn upsert(&self, row: ResultRow) {
            self.runtime.block_on(async {
                let width = row.tally.len();
                let tally_cols: Vec<String> = (0..width).map(|i| format!("tally_{i}")).collect();
                let placeholders: Vec<String> = (3..3 + width).map(|i| format!("${i}")).collect();
                let set_clause: Vec<String> = tally_cols.iter().map(|c| format!("{c} = EXCLUDED.{c}")).collect();
                let query = format!(
                    "INSERT INTO results (seed, score, {cols}) VALUES ($1, $2, {placeholders}) \
                     ON CONFLICT (seed) DO UPDATE SET score = EXCLUDED.score, {set_clause} \
                     WHERE EXCLUDED.score > results.score",
                    cols = tally_cols.join(", "),
                    placeholders = placeholders.join(", "),
                    set_clause = set_clause.join(", "),
                );
                let mut params: Vec<&(dyn ToSql + Sync)> = vec![&row.seed, &row.score];
                for t in &row.tally {
                    params.push(t);
                }
                self.client.execute(query.as_str(), &params).await.expect("upsert result row");
                self.client
                    .execute(
                        &format!(
                            "DELETE FROM results WHERE seed IN ( \
                                SELECT seed FROM results ORDER BY score ASC OFFSET {CAP} \
                             )"
                        ),
                        &[],
                    )
                    .await
                    .expect("evict rows past the cap");
            });
        }

        fn scores_desc(&self) -> Vec<i64> {
            self.runtime.block_on(async {
                self.client
                    .query("SELECT score FROM results ORDER BY score DESC", &[])
                    .await
                    .expect("read scores")
                    .into_iter()
                    .map(|row| row.get::<_, i64>(0))
                    .collect()
            })
        }

        fn top(&self, limit: usize) -> Vec<ResultRow> {
            self.runtime.block_on(async {
                let rows = self
                    .client
                    .query("SELECT seed, score FROM results ORDER BY score DESC LIMIT $1", &[&(limit as i64)])
                    .await
                    .expect("read top results");
                rows.into_iter().map(|row| ResultRow { seed: row.get(0), score: row.get(1), tally: Vec::new() }).collect()
            })
        }

        fn len(&self) -> usize {
            self.runtime.block_on(async {
                self.client
                    .query_one("SELECT count(*) FROM results", &[])
                    .await
                    .map(|row| row.get::<_, i64>(0) as usize)
                    .unwrap_or(0)
            })
        }

        fn clear(&self) {
            self.runtime.block_on(async {
                self.client.execute("DELETE FROM results", &[]).await.expect("clear results table");
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_keeps_the_higher_score_on_conflict() {
        let sink = MemorySink::new();
        sink.upsert(ResultRow { seed: "AAAAAAAA".into(), score: 10, tally: vec![1] });
        sink.upsert(ResultRow { seed: "AAAAAAAA".into(), score: 5, tally: vec![0] });
        assert_eq!(sink.top(1)[0].score, 10);
    }

    #[test]
    fn table_evicts_lowest_score_past_the_cap() {
        let sink = MemorySink::new();
        for i in 0..CAP + 1 {
            sink.upsert(ResultRow { seed: format!("S{i:07}"), score: i as i64, tally: vec![] });
        }
        assert_eq!(sink.len(), CAP);
        assert_eq!(sink.scores_desc().last().copied(), Some(1));
    }
}
