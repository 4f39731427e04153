use crate::domain::EventKind;
use crate::filters::evaluate::{evaluate_per_lane, ClauseEvaluator, EvalCtx};
use crate::prng::Mask;
use crate::sample::{sample_event, Event};
use crate::LANES;

/// For each `(ante, event kind, roll index)` tuple the clause declares,
/// advance that event's stream to its index and test the outcome against
/// `predicate`. Indices may be non-contiguous; the implementation walks the
/// clause's own index list rather than the full stream prefix.
pub struct EventEvaluator {
    pub name: String,
    pub kind: EventKind,
    pub rolls: Vec<usize>,
    pub antes: Vec<u8>,
    pub predicate: Box<dyn Fn(&Event) -> bool + Send + Sync>,
    pub min: u32,
}

impl ClauseEvaluator for EventEvaluator {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, ctx: &mut EvalCtx) -> (Mask, [u16; LANES]) {
        evaluate_per_lane(ctx, self.min, |lane| {
            let mut count = 0u16;
            for &ante in &self.antes {
                for &roll in &self.rolls {
                    let event = sample_event(lane, ante, self.kind, roll);
                    if (self.predicate)(&event) {
                        count += 1;
                    }
                }
            }
            count
        })
    }
}
