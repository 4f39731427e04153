use crate::domain::{Edition, Enhancement, Rank, Seal, Suit};
use crate::filters::evaluate::{evaluate_per_lane, ClauseEvaluator, EvalCtx};
use crate::prng::Mask;
use crate::sample::sample_playing_card;
use crate::LANES;

/// A playing card clause can constrain rank and/or suit; unset fields
/// accept anything. Enumerates shop and pack slots, like the joker evaluator.
pub struct PlayingCardEvaluator {
    pub name: String,
    pub wanted_rank: Option<Rank>,
    pub wanted_suit: Option<Suit>,
    pub wanted_enhancement: Option<Enhancement>,
    pub wanted_seal: Option<Seal>,
    pub edition: Option<Edition>,
    pub antes: Vec<u8>,
    pub shop_slots: Vec<u8>,
    pub pack_slots: Vec<u8>,
    pub min: u32,
}

impl ClauseEvaluator for PlayingCardEvaluator {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, ctx: &mut EvalCtx) -> (Mask, [u16; LANES]) {
        evaluate_per_lane(ctx, self.min, |lane| {
            let mut count = 0u16;
            for &ante in &self.antes {
                let mut seen = 0usize;
                for &slot in &self.shop_slots {
                    if self.matches(sample_playing_card(lane, ante, seen)) {
                        count += 1;
                    }
                    seen += 1;
                    let _ = slot;
                }
                for &slot in &self.pack_slots {
                    if self.matches(sample_playing_card(lane, ante, seen)) {
                        count += 1;
                    }
                    seen += 1;
                    let _ = slot;
                }
            }
            count
        })
    }
}

impl PlayingCardEvaluator {
    fn matches(&self, card: crate::sample::PlayingCard) -> bool {
        if let Some(rank) = self.wanted_rank {
            if card.rank != rank {
                return false;
            }
        }
        if let Some(suit) = self.wanted_suit {
            if card.suit != suit {
                return false;
            }
        }
        if let Some(enhancement) = self.wanted_enhancement {
            if card.enhancement != enhancement {
                return false;
            }
        }
        if let Some(seal) = self.wanted_seal {
            if card.seal != seal {
                return false;
            }
        }
        if let Some(edition) = self.edition {
            if card.edition != edition {
                return false;
            }
        }
        true
    }
}
