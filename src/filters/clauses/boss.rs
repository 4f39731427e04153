use crate::domain::Boss;
use crate::filters::evaluate::{evaluate_per_lane, ClauseEvaluator, EvalCtx};
use crate::prng::Mask;
use crate::sample::sample_boss;
use crate::LANES;

/// Fixed per-ante draw; no slot enumeration. History across antes matters
/// (the no-repeat constraint lives in the sampler itself), so this walks
/// ante 1 through the clause's highest ante every time rather than jumping
/// straight to the antes of interest.
pub struct BossEvaluator {
    pub name: String,
    pub wanted: Vec<Boss>,
    pub antes: Vec<u8>,
    pub min: u32,
}

impl ClauseEvaluator for BossEvaluator {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, ctx: &mut EvalCtx) -> (Mask, [u16; LANES]) {
        let max_ante = self.antes.iter().copied().max().unwrap_or(1);
        evaluate_per_lane(ctx, self.min, |lane| {
            let mut history = Vec::with_capacity(max_ante as usize);
            let mut count = 0u16;
            for ante in 1..=max_ante {
                let boss = sample_boss(lane, ante, &history);
                if self.antes.contains(&ante) && self.wanted.contains(&boss) {
                    count += 1;
                }
                history.push(boss);
            }
            count
        })
    }
}
