use crate::domain::{Deck, Stake};
use crate::prng::Mask;
use crate::sample::SampleContext;
use crate::LANES;

/// Per-lane sampling state shared across every evaluator in one compiled
/// pipeline's pass over a batch: each lane's `SampleContext` caches its own
/// streams, so a joker clause and a voucher clause over the same seed reuse
/// whatever draws they happen to share.
pub struct EvalCtx {
    pub lanes: Vec<SampleContext>,
}

impl EvalCtx {
    pub fn new(seeds: &[String], deck: Deck, stake: Stake) -> Self {
        assert_eq!(seeds.len(), LANES, "a batch group always has exactly LANES seeds");
        let lanes = seeds.iter().map(|s| SampleContext::new(deck, stake, s.clone())).collect();
        Self { lanes }
    }
}

/// One compiled clause's evaluation: a pass mask over the eight lanes plus a
/// per-lane tally (matching-occurrence count), used by `should` scoring and
/// `min`-threshold matching alike.
pub trait ClauseEvaluator: Send + Sync {
    fn name(&self) -> &str;
    fn evaluate(&self, ctx: &mut EvalCtx) -> (Mask, [u16; LANES]);
}

/// Shared helper: run `f` once per lane to get a match count, then set the
/// mask bit wherever that count clears `min`.
pub fn evaluate_per_lane(
    ctx: &mut EvalCtx,
    min: u32,
    mut f: impl FnMut(&mut SampleContext) -> u16,
) -> (Mask, [u16; LANES]) {
    let mut mask = Mask::NONE;
    let mut tally = [0u16; LANES];
    for (lane, sample_ctx) in ctx.lanes.iter_mut().enumerate() {
        let count = f(sample_ctx);
        tally[lane] = count;
        if count as u32 >= min {
            mask.set(lane);
        }
    }
    (mask, tally)
}
