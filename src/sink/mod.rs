//! Durable persistence for search results, checkpoints, and the
//! cross-search fertilizer pile. An in-memory implementation of every store
//! is always available (tests, benchmarks, `--no-default-features` runs);
//! the `database` feature adds a Postgres-backed implementation of each.

#[cfg(feature = "database")]
pub mod connect;
pub mod fertilizer;
pub mod results;
pub mod schema;
pub mod state;

pub use fertilizer::{FertilizerPile, MemoryFertilizerPile};
pub use results::{MemorySink, ResultRow, ResultSink};
pub use state::{resumable, MemoryStateStore, SearchState, StateStore};

#[cfg(feature = "database")]
pub use fertilizer::PostgresFertilizerPile;
#[cfg(feature = "database")]
pub use results::PostgresSink;
#[cfg(feature = "database")]
pub use state::PostgresStateStore;

/// Decide where a run of `filter_id`/`filter_text` should start: resume
/// from the checkpointed `last_completed_batch` if the filter text hasn't
/// changed since it was saved, otherwise treat this as a fresh run — the
/// previous results are salvaged into the fertilizer pile, the results
/// table is cleared, and the checkpoint is reset to batch zero.
pub fn resume_or_invalidate(
    state_store: &dyn StateStore,
    sink: &dyn ResultSink,
    fertilizer: &dyn FertilizerPile,
    filter_id: &str,
    filter_text: &str,
    batch_size: u8,
) -> u64 {
    match state_store.load(filter_id) {
        Some(state) if resumable(&state, filter_text) => state.last_completed_batch + 1,
        _ => {
            let salvage: Vec<String> = sink.top(1000).into_iter().map(|row| row.seed).collect();
            if !salvage.is_empty() {
                fertilizer.add(&salvage);
            }
            sink.clear();
            state_store.reset(filter_id, filter_text, batch_size);
            0
        }
    }
}
