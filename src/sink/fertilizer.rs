//! The fertilizer pile: an append-only, deduplicated union of every
//! search's top results, scanned at the start of a new search so its
//! `must`/`mustNot` clauses can be checked against known-good seeds
//! without re-running the enumeration.

pub trait FertilizerPile: Send + Sync {
    fn add(&self, seeds: &[String]);
    fn all(&self) -> Vec<String>;
}

#[derive(Default)]
pub struct MemoryFertilizerPile {
    seeds: std::sync::Mutex<std::collections::HashSet<String>>,
}

impl MemoryFertilizerPile {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FertilizerPile for MemoryFertilizerPile {
    fn add(&self, seeds: &[String]) {
        let mut set = self.seeds.lock().expect("fertilizer pile mutex poisoned");
        set.extend(seeds.iter().cloned());
    }

    fn all(&self) -> Vec<String> {
        self.seeds.lock().expect("fertilizer pile mutex poisoned").iter().cloned().collect()
    }
}

#[cfg(feature = "database")]
pub use postgres_pile::PostgresFertilizerPile;

#[cfg(feature = "database")]
mod postgres_pile {
    use super::FertilizerPile;
    use std::sync::Arc;
    use tokio_postgres::Client;

    pub struct PostgresFertilizerPile {
        client: Arc<Client>,
        runtime: tokio::runtime::Runtime,
    }

    impl PostgresFertilizerPile {
        pub fn new(client: Arc<Client>) -> Self {
            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().expect("build fertilizer runtime");
            Self { client, runtime }
        }
    }

    impl FertilizerPile for PostgresFertilizerPile {
        fn add(&self, seeds: &[String]) {
            self.runtime.block_on(async {
                for seed in seeds {
                    self.client
                        .execute("INSERT INTO seeds (seed) VALUES ($1) ON CONFLICT (seed) DO NOTHING", &[seed])
                        .await
                        .expect("insert fertilizer seed");
                }
            });
        }

        fn all(&self) -> Vec<String> {
            self.runtime.block_on(async {
                self.client
                    .query("SELECT seed FROM seeds", &[])
                    .await
                    .expect("read fertilizer pile")
                    .into_iter()
                    .map(|row| row.get(0))
                    .collect()
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_deduplicated() {
        let pile = MemoryFertilizerPile::new();
        pile.add(&["AAAAAAAA".to_string(), "AAAAAAAA".to_string()]);
        assert_eq!(pile.all().len(), 1);
    }
}
