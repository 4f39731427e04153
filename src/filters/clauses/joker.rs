use crate::domain::{Edition, Joker};
use crate::filters::evaluate::{evaluate_per_lane, ClauseEvaluator, EvalCtx};
use crate::prng::Mask;
use crate::sample::{sample_joker, sample_soul_joker};
use crate::LANES;

pub enum JokerSource {
    Shop,
    Soul,
}

/// Covers both `Joker` and `SoulJoker` clauses: for each `(ante, slot)` pair
/// declared by the clause, sample the joker and compare identity + edition.
/// Shop slots and pack slots are both valid appearance sites, so both lists
/// are walked (pack slots are addressed past the shop slots' indices so
/// each site still gets its own stream key).
pub struct JokerEvaluator {
    pub name: String,
    pub source: JokerSource,
    pub wanted: Vec<Joker>,
    pub any: bool,
    pub edition: Option<Edition>,
    pub antes: Vec<u8>,
    pub shop_slots: Vec<u8>,
    pub pack_slots: Vec<u8>,
    pub min: u32,
}

impl ClauseEvaluator for JokerEvaluator {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, ctx: &mut EvalCtx) -> (Mask, [u16; LANES]) {
        evaluate_per_lane(ctx, self.min, |lane| {
            let mut count = 0u16;
            for &ante in &self.antes {
                let mut slot_index: usize = 0;
                for &shop_slot in &self.shop_slots {
                    let draw = match self.source {
                        JokerSource::Shop => sample_joker(lane, ante, shop_slot as usize),
                        JokerSource::Soul => sample_soul_joker(lane, ante),
                    };
                    if self.matches(&draw.joker, draw.edition) {
                        count += 1;
                    }
                    slot_index += 1;
                }
                for &pack_slot in &self.pack_slots {
                    let draw = match self.source {
                        JokerSource::Shop => sample_joker(lane, ante, slot_index + pack_slot as usize),
                        JokerSource::Soul => sample_soul_joker(lane, ante),
                    };
                    if self.matches(&draw.joker, draw.edition) {
                        count += 1;
                    }
                }
            }
            count
        })
    }
}

impl JokerEvaluator {
    fn matches(&self, joker: &Joker, edition: Edition) -> bool {
        if !self.any && !self.wanted.contains(joker) {
            return false;
        }
        match self.edition {
            Some(wanted) => edition == wanted,
            None => true,
        }
    }
}

/// Skips the identity check entirely: a lane passes as soon as any
/// legendary joker with the demanded edition is drawn within the specified
/// antes. Cheaper than [`JokerEvaluator`], so the pipeline runs it first.
pub struct SoulJokerEditionOnlyEvaluator {
    pub name: String,
    pub edition: Edition,
    pub antes: Vec<u8>,
    pub min: u32,
}

impl ClauseEvaluator for SoulJokerEditionOnlyEvaluator {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, ctx: &mut EvalCtx) -> (Mask, [u16; LANES]) {
        evaluate_per_lane(ctx, self.min, |lane| {
            let mut count = 0u16;
            for &ante in &self.antes {
                let draw = sample_soul_joker(lane, ante);
                if draw.edition == self.edition {
                    count += 1;
                }
            }
            count
        })
    }
}
