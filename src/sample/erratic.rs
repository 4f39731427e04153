use super::context::SampleContext;
use crate::domain::{Rank, Suit};

/// the `Erratic` deck's 52-card start-of-run draw: each card is an
/// independent rank/suit roll, produced in a single walk so the
/// erratic-rank and erratic-suit clause evaluators can share it instead of
/// regenerating the deck once per evaluator
#[derive(Debug, Clone)]
pub struct ErraticDeck {
    pub ranks: Vec<Rank>,
    pub suits: Vec<Suit>,
}

const DECK_SIZE: usize = 52;

pub fn sample_erratic_deck(ctx: &mut SampleContext) -> ErraticDeck {
    let mut ranks = Vec::with_capacity(DECK_SIZE);
    let mut suits = Vec::with_capacity(DECK_SIZE);
    for i in 0..DECK_SIZE {
        let rank_draw = ctx.draw(&format!("ErraticRank{i}"), 0);
        let suit_draw = ctx.draw(&format!("ErraticSuit{i}"), 0);
        ranks.push(Rank::from((rank_draw * Rank::all().len() as f64) as u8));
        suits.push(Suit::from((suit_draw * Suit::all().len() as f64) as u8));
    }
    ErraticDeck { ranks, suits }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Deck, Stake};

    #[test]
    fn walk_is_deterministic_and_fully_populated() {
        let mut a = SampleContext::new(Deck::Erratic, Stake::White, "ABCD2345");
        let mut b = SampleContext::new(Deck::Erratic, Stake::White, "ABCD2345");
        let deck_a = sample_erratic_deck(&mut a);
        let deck_b = sample_erratic_deck(&mut b);
        assert_eq!(deck_a.ranks.len(), DECK_SIZE);
        assert_eq!(deck_a.suits.len(), DECK_SIZE);
        for i in 0..DECK_SIZE {
            assert_eq!(deck_a.ranks[i] as u8, deck_b.ranks[i] as u8);
            assert_eq!(deck_a.suits[i] as u8, deck_b.suits[i] as u8);
        }
    }
}
