//! Seed enumeration and the worker pool that drives the compiled filter
//! pipeline over it.

mod batch;
mod cutoff;
mod driver;

pub use batch::{total_batches, SeedBatch};
pub use cutoff::{AutoCutoff, Cutoff};
pub use driver::{SearchConfig, SearchDriver, SearchStats};
