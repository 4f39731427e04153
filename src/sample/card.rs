use super::context::SampleContext;
use super::edition::roll_edition;
use crate::domain::{Enhancement, Planet, Rank, Seal, Spectral, Suit, Tarot};
use crate::pools::{planet_pool, spectral_pool, tarot_pool};

#[derive(Debug, Clone, Copy)]
pub struct PlayingCard {
    pub rank: Rank,
    pub suit: Suit,
    pub enhancement: Enhancement,
    pub seal: Seal,
    pub edition: crate::domain::Edition,
}

/// each pack-slot card sampler shares the same shape: pool draw, then an
/// edition roll on its own stream key
pub fn sample_tarot(ctx: &mut SampleContext, ante: u8, slot: usize) -> (Tarot, crate::domain::Edition) {
    let tag = format!("Tarot{slot}");
    let card = *tarot_pool().sample(ctx.draw(&tag, ante));
    let edition = roll_edition(ctx, &format!("{tag}Edition"), ante);
    (card, edition)
}

pub fn sample_planet(ctx: &mut SampleContext, ante: u8, slot: usize) -> (Planet, crate::domain::Edition) {
    let tag = format!("Planet{slot}");
    let card = *planet_pool().sample(ctx.draw(&tag, ante));
    let edition = roll_edition(ctx, &format!("{tag}Edition"), ante);
    (card, edition)
}

pub fn sample_spectral(ctx: &mut SampleContext, ante: u8, slot: usize) -> (Spectral, crate::domain::Edition) {
    let tag = format!("Spectral{slot}");
    let card = *spectral_pool().sample(ctx.draw(&tag, ante));
    let edition = roll_edition(ctx, &format!("{tag}Edition"), ante);
    (card, edition)
}

/// a playing card sampled into a shop/pack slot: rank and suit draw, then
/// independent enhancement/seal/edition rolls, each on its own stream
pub fn sample_playing_card(ctx: &mut SampleContext, ante: u8, slot: usize) -> PlayingCard {
    let tag = format!("Card{slot}");
    let rank_draw = ctx.draw(&format!("{tag}Rank"), ante);
    let suit_draw = ctx.draw(&format!("{tag}Suit"), ante);
    let rank = Rank::from((rank_draw * Rank::all().len() as f64) as u8);
    let suit = Suit::from((suit_draw * Suit::all().len() as f64) as u8);
    let enhancement_draw = ctx.draw(&format!("{tag}Enhancement"), ante);
    let enhancement = Enhancement::from((enhancement_draw * Enhancement::all().len() as f64) as u8);
    let seal_draw = ctx.draw(&format!("{tag}Seal"), ante);
    let seal = Seal::from((seal_draw * Seal::all().len() as f64) as u8);
    let edition = roll_edition(ctx, &format!("{tag}Edition"), ante);
    PlayingCard { rank, suit, enhancement, seal, edition }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Deck, Stake};

    #[test]
    fn pack_card_kernels_are_deterministic() {
        let mut a = SampleContext::new(Deck::Red, Stake::White, "ABCD2345");
        let mut b = SampleContext::new(Deck::Red, Stake::White, "ABCD2345");
        assert_eq!(sample_tarot(&mut a, 1, 0).0 as u8, sample_tarot(&mut b, 1, 0).0 as u8);
        assert_eq!(sample_planet(&mut a, 1, 0).0 as u8, sample_planet(&mut b, 1, 0).0 as u8);
        assert_eq!(sample_spectral(&mut a, 1, 0).0 as u8, sample_spectral(&mut b, 1, 0).0 as u8);
    }

    #[test]
    fn playing_card_rank_and_suit_stay_in_range() {
        let mut ctx = SampleContext::new(Deck::Red, Stake::White, "ABCD2345");
        for slot in 0..8 {
            let card = sample_playing_card(&mut ctx, 1, slot);
            assert!((card.rank as u8) < 13);
            assert!((card.suit as u8) < 4);
        }
    }
}
