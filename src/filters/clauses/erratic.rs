use crate::domain::{Rank, Suit};
use crate::filters::evaluate::{evaluate_per_lane, ClauseEvaluator, EvalCtx};
use crate::prng::Mask;
use crate::sample::sample_erratic_deck;
use crate::LANES;

#[derive(Debug, Clone)]
pub struct RankTarget {
    pub rank: Rank,
    pub min: u32,
}

#[derive(Debug, Clone)]
pub struct SuitTarget {
    pub suit: Suit,
    pub min: u32,
}

/// Walks the 52 starting-deck cards exactly once, accumulating counts for
/// every rank and suit clause at the same time — this is the fused
/// evaluator used whenever both `ErraticRank` and `ErraticSuit` clauses are
/// present, so the deck is never regenerated per clause.
pub struct ErraticEvaluator {
    pub name: String,
    pub ranks: Vec<RankTarget>,
    pub suits: Vec<SuitTarget>,
}

impl ClauseEvaluator for ErraticEvaluator {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, ctx: &mut EvalCtx) -> (Mask, [u16; LANES]) {
        // every rank/suit target must clear its own `min`; tally reports how
        // many of the clause's targets were satisfied.
        evaluate_per_lane(ctx, 1, |lane| {
            let deck = sample_erratic_deck(lane);
            let mut rank_counts = vec![0u32; self.ranks.len()];
            let mut suit_counts = vec![0u32; self.suits.len()];
            for &rank in &deck.ranks {
                for (i, target) in self.ranks.iter().enumerate() {
                    if rank == target.rank {
                        rank_counts[i] += 1;
                    }
                }
            }
            for &suit in &deck.suits {
                for (i, target) in self.suits.iter().enumerate() {
                    if suit == target.suit {
                        suit_counts[i] += 1;
                    }
                }
            }
            let all_ranks_met = self.ranks.iter().zip(&rank_counts).all(|(t, &c)| c >= t.min);
            let all_suits_met = self.suits.iter().zip(&suit_counts).all(|(t, &c)| c >= t.min);
            if all_ranks_met && all_suits_met {
                1
            } else {
                0
            }
        })
    }
}
