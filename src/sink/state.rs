//! Persisted `last_completed_batch` checkpoint, keyed by `filterId`. A
//! filter-text change invalidates the prior state: enumeration restarts at
//! batch zero and the old results are salvaged to the fertilizer pile.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub filter_id: String,
    pub filter_text: String,
    pub batch_size: u8,
    pub last_completed_batch: u64,
}

pub trait StateStore: Send + Sync {
    fn load(&self, filter_id: &str) -> Option<SearchState>;
    fn checkpoint(&self, state: &SearchState);
    fn reset(&self, filter_id: &str, filter_text: &str, batch_size: u8);
}

#[derive(Default)]
pub struct MemoryStateStore {
    states: std::sync::Mutex<std::collections::HashMap<String, SearchState>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self, filter_id: &str) -> Option<SearchState> {
        self.states.lock().expect("state store mutex poisoned").get(filter_id).cloned()
    }

    fn checkpoint(&self, state: &SearchState) {
        self.states.lock().expect("state store mutex poisoned").insert(state.filter_id.clone(), state.clone());
    }

    fn reset(&self, filter_id: &str, filter_text: &str, batch_size: u8) {
        self.states.lock().expect("state store mutex poisoned").insert(
            filter_id.to_string(),
            SearchState { filter_id: filter_id.to_string(), filter_text: filter_text.to_string(), batch_size, last_completed_batch: 0 },
        );
    }
}

/// Decide whether a loaded state can be resumed: only if the filter text
/// hasn't changed since it was checkpointed.
pub fn resumable(state: &SearchState, filter_text: &str) -> bool {
    state.filter_text == filter_text
}

#[cfg(feature = "database")]
pub use postgres_state::PostgresStateStore;

#[cfg(feature = "database")]
mod postgres_state {
    use super::{SearchState, StateStore};
    use std::sync::Arc;
    use tokio_postgres::Client;

    pub struct PostgresStateStore {
        client: Arc<Client>,
        runtime: tokio::runtime::Runtime,
    }

    impl PostgresStateStore {
        pub fn new(client: Arc<Client>) -> Self {
            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().expect("build state store runtime");
            Self { client, runtime }
        }
    }

    impl StateStore for PostgresStateStore {
        fn load(&self, filter_id: &str) -> Option<SearchState> {
            self.runtime.block_on(async {
                self.client
                    .query_opt(
                        "SELECT filter_id, filter_text, batch_size, last_completed_batch FROM search_state WHERE filter_id = $1",
                        &[&filter_id],
                    )
                    .await
                    .ok()
                    .flatten()
                    .map(|row| SearchState {
                        filter_id: row.get(0),
                        filter_text: row.get(1),
                        batch_size: row.get::<_, i32>(2) as u8,
                        last_completed_batch: row.get::<_, i64>(3) as u64,
                    })
            })
        }

        fn checkpoint(&self, state: &SearchState) {
            self.runtime.block_on(async {
                self.client
                    .execute(
                        "INSERT INTO search_state (filter_id, filter_text, batch_size, last_completed_batch, updated_at) \
                         VALUES ($1, $2, $3, $4, now()) \
                         ON CONFLICT (filter_id) DO UPDATE SET \
                            filter_text = EXCLUDED.filter_text, \
                            batch_size = EXCLUDED.batch_size, \
                            last_completed_batch = EXCLUDED.last_completed_batch, \
                            updated_at = now()",
                        &[&state.filter_id, &state.filter_text, &(state.batch_size as i32), &(state.last_completed_batch as i64)],
                    )
                    .await
                    .expect("checkpoint search_state");
            });
        }

        fn reset(&self, filter_id: &str, filter_text: &str, batch_size: u8) {
            self.checkpoint(&SearchState {
                filter_id: filter_id.to_string(),
                filter_text: filter_text.to_string(),
                batch_size,
                last_completed_batch: 0,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_filter_text_is_resumable() {
        let state = SearchState { filter_id: "f".into(), filter_text: "{}".into(), batch_size: 4, last_completed_batch: 12 };
        assert!(resumable(&state, "{}"));
        assert!(!resumable(&state, "{ \"must\": [] }"));
    }

    #[test]
    fn checkpoint_then_load_round_trips() {
        let store = MemoryStateStore::new();
        store.reset("f", "{}", 4);
        let mut state = store.load("f").unwrap();
        state.last_completed_batch = 7;
        store.checkpoint(&state);
        assert_eq!(store.load("f").unwrap().last_completed_batch, 7);
    }
}
