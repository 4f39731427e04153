use crate::filters::evaluate::{ClauseEvaluator, EvalCtx};
use crate::prng::Mask;
use crate::LANES;

/// Composes child masks with bitwise AND. Nested compounds recurse.
pub struct AndEvaluator {
    pub name: String,
    pub children: Vec<Box<dyn ClauseEvaluator>>,
}

impl ClauseEvaluator for AndEvaluator {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, ctx: &mut EvalCtx) -> (Mask, [u16; LANES]) {
        let mut mask = Mask::ALL;
        let mut tally = [0u16; LANES];
        for child in &self.children {
            let (child_mask, child_tally) = child.evaluate(ctx);
            mask = mask.and(child_mask);
            for lane in 0..LANES {
                tally[lane] = tally[lane].saturating_add(child_tally[lane]);
            }
        }
        (mask, tally)
    }
}

/// Composes child masks with bitwise OR.
pub struct OrEvaluator {
    pub name: String,
    pub children: Vec<Box<dyn ClauseEvaluator>>,
}

impl ClauseEvaluator for OrEvaluator {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, ctx: &mut EvalCtx) -> (Mask, [u16; LANES]) {
        let mut mask = Mask::NONE;
        let mut tally = [0u16; LANES];
        for child in &self.children {
            let (child_mask, child_tally) = child.evaluate(ctx);
            mask = mask.or(child_mask);
            for lane in 0..LANES {
                tally[lane] = tally[lane].saturating_add(child_tally[lane]);
            }
        }
        (mask, tally)
    }
}
