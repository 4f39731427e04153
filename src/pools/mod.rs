//! Weighted pools: every sampler is, at its core, a cumulative-weight table
//! over a small closed domain. `weighted` is the generic engine; `tables`
//! wires it up once per domain behind `LazyLock`s, the same "own it from a
//! static source, compute derived state once" shape used for histograms
//! elsewhere in this codebase.

mod tables;
mod weighted;

pub use tables::{
    boss_pool, joker_pool, planet_pool, soul_joker_pool, spectral_pool, tag_pool, tarot_pool,
    voucher_pool,
};
pub use weighted::WeightedPool;
