use crate::domain::Tag;
use crate::filters::evaluate::{evaluate_per_lane, ClauseEvaluator, EvalCtx};
use crate::prng::Mask;
use crate::sample::sample_tags;
use crate::LANES;

/// Fixed per-ante draws, no slot enumeration: two tags per ante
/// (small-blind, big-blind), either one counts toward the clause.
pub struct TagEvaluator {
    pub name: String,
    pub wanted: Vec<Tag>,
    pub antes: Vec<u8>,
    pub min: u32,
}

impl ClauseEvaluator for TagEvaluator {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, ctx: &mut EvalCtx) -> (Mask, [u16; LANES]) {
        evaluate_per_lane(ctx, self.min, |lane| {
            let mut count = 0u16;
            for &ante in &self.antes {
                let (small, big) = sample_tags(lane, ante);
                if self.wanted.contains(&small) {
                    count += 1;
                }
                if self.wanted.contains(&big) {
                    count += 1;
                }
            }
            count
        })
    }
}
