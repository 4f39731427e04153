use crate::domain::{Edition, Planet, Spectral, Tarot};
use crate::filters::evaluate::{evaluate_per_lane, ClauseEvaluator, EvalCtx};
use crate::prng::Mask;
use crate::sample::{sample_planet, sample_spectral, sample_tarot};
use crate::LANES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardDomain {
    Tarot,
    Planet,
    Spectral,
}

/// Same shape as the joker evaluator, but pack slots only: tarot/planet/
/// spectral cards never populate the shop.
pub struct CardEvaluator {
    pub name: String,
    pub domain: CardDomain,
    pub wanted_tarot: Vec<Tarot>,
    pub wanted_planet: Vec<Planet>,
    pub wanted_spectral: Vec<Spectral>,
    pub any: bool,
    pub edition: Option<Edition>,
    pub antes: Vec<u8>,
    pub pack_slots: Vec<u8>,
    pub min: u32,
}

impl ClauseEvaluator for CardEvaluator {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, ctx: &mut EvalCtx) -> (Mask, [u16; LANES]) {
        evaluate_per_lane(ctx, self.min, |lane| {
            let mut count = 0u16;
            for &ante in &self.antes {
                for &slot in &self.pack_slots {
                    let matched = match self.domain {
                        CardDomain::Tarot => {
                            let (card, edition) = sample_tarot(lane, ante, slot as usize);
                            (self.any || self.wanted_tarot.contains(&card)) && self.edition_ok(edition)
                        }
                        CardDomain::Planet => {
                            let (card, edition) = sample_planet(lane, ante, slot as usize);
                            (self.any || self.wanted_planet.contains(&card)) && self.edition_ok(edition)
                        }
                        CardDomain::Spectral => {
                            let (card, edition) = sample_spectral(lane, ante, slot as usize);
                            (self.any || self.wanted_spectral.contains(&card)) && self.edition_ok(edition)
                        }
                    };
                    if matched {
                        count += 1;
                    }
                }
            }
            count
        })
    }
}

impl CardEvaluator {
    fn edition_ok(&self, edition: Edition) -> bool {
        match self.edition {
            Some(wanted) => edition == wanted,
            None => true,
        }
    }
}
