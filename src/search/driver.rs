//! The search driver: a rayon thread pool dequeuing batches from a shared
//! atomic counter, running the compiled filter pipeline over each, and
//! feeding passing seeds to the result sink. Strictly synchronous and
//! CPU-bound — no async anywhere on this path.

use super::batch::{SeedBatch, total_batches};
use super::cutoff::{AutoCutoff, Cutoff};
use crate::filters::{CompiledPipeline, EvalCtx};
use crate::prng::Mask;
use crate::sink::{FertilizerPile, ResultRow, ResultSink, SearchState, StateStore};
use crate::LANES;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// What a search run was given at the CLI/HTTP boundary; immutable once the
/// driver starts.
pub struct SearchConfig {
    pub threads: usize,
    pub prefix_len: usize,
    pub start_batch: u64,
    pub end_batch: Option<u64>,
    pub cutoff: Cutoff,
    pub filter_id: String,
    pub filter_text: String,
}

/// Live counters a caller can poll while a search runs (the HTTP façade's
/// `GET /search` reads these).
#[derive(Default)]
pub struct SearchStats {
    pub seeds_evaluated: AtomicU64,
    pub batches_completed: AtomicU64,
}

/// Tracks which batch indices have completed and advances a *contiguous*
/// high-water mark, since batches finish out of order but `last_completed_batch`
/// must be safe to resume from.
struct Watermark {
    next_expected: Mutex<u64>,
    completed_out_of_order: Mutex<std::collections::BTreeSet<u64>>,
}

impl Watermark {
    fn new(start: u64) -> Self {
        Self { next_expected: Mutex::new(start), completed_out_of_order: Mutex::new(Default::default()) }
    }

    fn complete(&self, batch_index: u64) -> u64 {
        let mut pending = self.completed_out_of_order.lock().expect("watermark mutex poisoned");
        pending.insert(batch_index);
        let mut next = self.next_expected.lock().expect("watermark mutex poisoned");
        while pending.remove(&next) {
            *next += 1;
        }
        next.saturating_sub(1)
    }
}

pub struct SearchDriver {
    pipeline: Arc<CompiledPipeline>,
    sink: Arc<dyn ResultSink>,
    state_store: Arc<dyn StateStore>,
    fertilizer: Arc<dyn FertilizerPile>,
    config: SearchConfig,
    cutoff: Arc<AutoCutoff>,
    stats: Arc<SearchStats>,
}

impl SearchDriver {
    pub fn new(
        pipeline: CompiledPipeline,
        sink: Arc<dyn ResultSink>,
        state_store: Arc<dyn StateStore>,
        fertilizer: Arc<dyn FertilizerPile>,
        config: SearchConfig,
    ) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            sink,
            state_store,
            fertilizer,
            config,
            cutoff: Arc::new(AutoCutoff::new()),
            stats: Arc::new(SearchStats::default()),
        }
    }

    pub fn stats(&self) -> Arc<SearchStats> {
        self.stats.clone()
    }

    /// Scans the fertilizer pile for seeds already known to satisfy this
    /// pipeline's `must`/`mustNot` clauses — an instant partial result
    /// available before the first batch even runs.
    pub fn fertilize(&self) -> Vec<String> {
        let candidates = self.fertilizer.all();
        if candidates.is_empty() {
            return Vec::new();
        }
        candidates
            .chunks(LANES)
            .flat_map(|chunk| {
                let mut seeds: Vec<String> = chunk.to_vec();
                let real = seeds.len();
                while seeds.len() < LANES {
                    seeds.push(seeds.last().cloned().expect("nonempty chunk"));
                }
                let mut ctx = EvalCtx::new(&seeds, self.pipeline.deck, self.pipeline.stake);
                let mask = must_mask(&self.pipeline, &mut ctx);
                (0..real).filter(|&lane| mask.get(lane)).map(|lane| seeds[lane].clone()).collect::<Vec<_>>()
            })
            .collect()
    }

    /// Runs to completion (or cancellation). Blocks the calling thread.
    pub fn run(&self) {
        let total = total_batches(self.config.prefix_len);
        let end = self.config.end_batch.unwrap_or(total.saturating_sub(1));
        if let Cutoff::Fixed(value) = self.config.cutoff {
            self.cutoff.advance(&[value + 1]);
        }

        let watermark = Watermark::new(self.config.start_batch);
        let next_batch = AtomicU64::new(self.config.start_batch);
        let progress = crate::progress(end.saturating_sub(self.config.start_batch) + 1);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads)
            .build()
            .expect("build search thread pool");

        pool.install(|| {
            use rayon::iter::{IntoParallelIterator, ParallelIterator};
            (0..self.config.threads).into_par_iter().for_each(|_| {
                loop {
                    if crate::cancelled() {
                        break;
                    }
                    let index = next_batch.fetch_add(1, Ordering::Relaxed);
                    if index > end {
                        break;
                    }
                    self.run_batch(index);
                    let published = watermark.complete(index);
                    self.state_store.checkpoint(&SearchState {
                        filter_id: self.config.filter_id.clone(),
                        filter_text: self.config.filter_text.clone(),
                        batch_size: self.config.prefix_len as u8,
                        last_completed_batch: published,
                    });
                    if matches!(self.config.cutoff, Cutoff::Auto) {
                        self.cutoff.advance(&self.sink.scores_desc());
                    }
                    self.stats.batches_completed.fetch_add(1, Ordering::Relaxed);
                    progress.inc(1);
                }
            });
        });

        progress.finish_and_clear();
        self.fertilizer.add(&self.sink.top(1000).into_iter().map(|r| r.seed).collect::<Vec<_>>());
    }

    fn run_batch(&self, batch_index: u64) {
        let batch = SeedBatch::new(self.config.prefix_len, batch_index);
        for group in 0..batch.total_groups() {
            if crate::cancelled() {
                return;
            }
            let (seeds, real) = batch.lane_group(group);
            self.stats.seeds_evaluated.fetch_add(real as u64, Ordering::Relaxed);
            let mut ctx = EvalCtx::new(&seeds, self.pipeline.deck, self.pipeline.stake);

            let gate = must_mask(&self.pipeline, &mut ctx);
            if gate.is_empty() {
                continue;
            }

            let mut scores = [0i64; LANES];
            let mut tallies: Vec<[u16; LANES]> = Vec::with_capacity(self.pipeline.should.len());
            for (evaluator, weight) in &self.pipeline.should {
                let (_, tally) = evaluator.evaluate(&mut ctx);
                for lane in 0..LANES {
                    scores[lane] += tally[lane] as i64 * weight;
                }
                tallies.push(tally);
            }

            let cutoff = self.cutoff.current();
            for lane in 0..real {
                if !gate.get(lane) || scores[lane] < cutoff {
                    continue;
                }
                self.sink.upsert(ResultRow {
                    seed: seeds[lane].clone(),
                    score: scores[lane],
                    tally: tallies.iter().map(|t| t[lane] as i64).collect(),
                });
            }
        }
    }
}

/// `must` evaluators AND together; `mustNot` evaluators OR together and
/// then invert. Either list may be empty (an empty `must` passes everyone,
/// an empty `mustNot` excludes no one).
fn must_mask(pipeline: &CompiledPipeline, ctx: &mut EvalCtx) -> Mask {
    let mut mask = Mask::ALL;
    for evaluator in &pipeline.must {
        let (m, _) = evaluator.evaluate(ctx);
        mask = mask.and(m);
        if mask.is_empty() {
            return mask;
        }
    }
    let mut excluded = Mask::NONE;
    for evaluator in &pipeline.must_not {
        let (m, _) = evaluator.evaluate(ctx);
        excluded = excluded.or(m);
    }
    mask.and(excluded.not())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{compile, FilterDocument};
    use crate::sink::{MemoryFertilizerPile, MemorySink, MemoryStateStore};

    #[test]
    fn empty_filter_passes_every_seed_with_score_zero() {
        let doc = FilterDocument::parse(r#"{ "deck": "Red", "stake": "White" }"#).unwrap();
        let pipeline = compile(&doc).unwrap();
        let sink = Arc::new(MemorySink::new());
        let driver = SearchDriver::new(
            pipeline,
            sink.clone(),
            Arc::new(MemoryStateStore::new()),
            Arc::new(MemoryFertilizerPile::new()),
            SearchConfig {
                threads: 1,
                prefix_len: 8,
                start_batch: 0,
                end_batch: Some(0),
                cutoff: Cutoff::Fixed(0),
                filter_id: "empty".to_string(),
                filter_text: "{}".to_string(),
            },
        );
        driver.run();
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.top(1)[0].score, 0);
    }
}
