use crate::domain::{Deck, Stake};
use crate::prng::StreamCache;

/// Everything a sampling kernel needs to address its streams: the run's
/// deck/stake (threaded into stream keys and pool conditioning) and the
/// seed under evaluation, plus a cache so clause evaluators sharing a
/// domain/ante pair within one seed's evaluation don't re-hash a key twice.
pub struct SampleContext {
    pub deck: Deck,
    pub stake: Stake,
    pub seed: String,
    cache: StreamCache,
}

impl SampleContext {
    pub fn new(deck: Deck, stake: Stake, seed: impl Into<String>) -> Self {
        Self { deck, stake, seed: seed.into(), cache: StreamCache::new() }
    }

    pub fn draw(&mut self, tag: &str, ante: u8) -> f64 {
        self.cache.get_or_insert(tag, ante, &self.seed).next()
    }

    pub fn draw_n(&mut self, tag: &str, ante: u8, n: usize) -> Vec<f64> {
        self.cache.get_or_insert(tag, ante, &self.seed).next_n(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_tag_and_ante_continue_the_same_stream() {
        let mut ctx = SampleContext::new(Deck::Red, Stake::White, "ABCD2345");
        let a = ctx.draw("Joker1", 1);
        let b = ctx.draw("Joker1", 1);
        assert_ne!(a, b);
    }
}
