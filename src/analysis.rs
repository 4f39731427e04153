//! Per-seed analysis dump: runs every sampling kernel across all eight
//! antes for one seed, independent of any filter document. Shared by the
//! `analyze` CLI subcommand and the `POST /analyze` HTTP route.

use crate::domain::{Boss, Deck, Edition, Planet, Spectral, Stake, Tag, Tarot, Voucher};
use crate::sample::{
    sample_boss, sample_erratic_deck, sample_joker, sample_planet, sample_playing_card, sample_soul_joker,
    sample_spectral, sample_tags, sample_tarot, sample_voucher, ErraticDeck, PlayingCard,
};
use crate::sample::SampleContext;
use serde::Serialize;

/// number of shop/pack slots addressed for a given ante: antes after the
/// first open up two extra slots, matching the clause evaluators' own cap
fn slot_count(ante: u8) -> usize {
    if ante <= 1 {
        4
    } else {
        6
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JokerSlot {
    pub slot: usize,
    pub joker: String,
    pub edition: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardSlot {
    pub slot: usize,
    pub value: String,
    pub edition: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayingCardSlot {
    pub slot: usize,
    pub rank: String,
    pub suit: String,
    pub enhancement: String,
    pub seal: String,
    pub edition: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnteReport {
    pub ante: u8,
    pub voucher: String,
    pub tag_small: String,
    pub tag_big: String,
    pub boss: String,
    pub shop_jokers: Vec<JokerSlot>,
    pub soul_joker: JokerSlot,
    pub tarots: Vec<CardSlot>,
    pub planets: Vec<CardSlot>,
    pub spectrals: Vec<CardSlot>,
    pub playing_cards: Vec<PlayingCardSlot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeedAnalysis {
    pub seed: String,
    pub deck: String,
    pub stake: String,
    pub erratic_deck: Option<Vec<(String, String)>>,
    pub antes: Vec<AnteReport>,
}

pub fn analyze(seed: &str, deck: Deck, stake: Stake) -> SeedAnalysis {
    let mut ctx = SampleContext::new(deck, stake, seed);
    let erratic_deck = if deck == Deck::Erratic { Some(dump_erratic(&mut ctx)) } else { None };

    let mut boss_history: Vec<Boss> = Vec::with_capacity(crate::MAX_ANTE as usize);
    let mut antes = Vec::with_capacity(crate::MAX_ANTE as usize);
    for ante in 1..=crate::MAX_ANTE {
        let boss = sample_boss(&mut ctx, ante, &boss_history);
        boss_history.push(boss);
        antes.push(dump_ante(&mut ctx, ante, boss));
    }

    SeedAnalysis { seed: seed.to_string(), deck: deck.to_string(), stake: stake.to_string(), erratic_deck, antes }
}

fn dump_erratic(ctx: &mut SampleContext) -> Vec<(String, String)> {
    let ErraticDeck { ranks, suits } = sample_erratic_deck(ctx);
    ranks.into_iter().zip(suits).map(|(r, s)| (r.to_string(), s.to_string())).collect()
}

fn dump_ante(ctx: &mut SampleContext, ante: u8, boss: Boss) -> AnteReport {
    let voucher: Voucher = sample_voucher(ctx, ante);
    let (tag_small, tag_big): (Tag, Tag) = sample_tags(ctx, ante);
    let slots = slot_count(ante);

    let shop_jokers = (0..slots)
        .map(|slot| {
            let draw = sample_joker(ctx, ante, slot);
            JokerSlot { slot, joker: draw.joker.to_string(), edition: draw.edition.to_string() }
        })
        .collect();
    let soul = sample_soul_joker(ctx, ante);
    let soul_joker = JokerSlot { slot: 0, joker: soul.joker.to_string(), edition: soul.edition.to_string() };

    let tarots = (0..slots)
        .map(|slot| {
            let (card, edition): (Tarot, Edition) = sample_tarot(ctx, ante, slot);
            CardSlot { slot, value: card.to_string(), edition: edition.to_string() }
        })
        .collect();
    let planets = (0..slots)
        .map(|slot| {
            let (card, edition): (Planet, Edition) = sample_planet(ctx, ante, slot);
            CardSlot { slot, value: card.to_string(), edition: edition.to_string() }
        })
        .collect();
    let spectrals = (0..slots)
        .map(|slot| {
            let (card, edition): (Spectral, Edition) = sample_spectral(ctx, ante, slot);
            CardSlot { slot, value: card.to_string(), edition: edition.to_string() }
        })
        .collect();
    let playing_cards = (0..slots)
        .map(|slot| {
            let PlayingCard { rank, suit, enhancement, seal, edition } = sample_playing_card(ctx, ante, slot);
            PlayingCardSlot {
                slot,
                rank: rank.to_string(),
                suit: suit.to_string(),
                enhancement: enhancement.to_string(),
                seal: seal.to_string(),
                edition: edition.to_string(),
            }
        })
        .collect();

    AnteReport {
        ante,
        voucher: voucher.to_string(),
        tag_small: tag_small.to_string(),
        tag_big: tag_big.to_string(),
        boss: boss.to_string(),
        shop_jokers,
        soul_joker,
        tarots,
        planets,
        spectrals,
        playing_cards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dumps_every_ante() {
        let dump = analyze("ABCD2345", Deck::Red, Stake::White);
        assert_eq!(dump.antes.len(), crate::MAX_ANTE as usize);
        assert!(dump.erratic_deck.is_none());
    }

    #[test]
    fn is_deterministic() {
        let a = analyze("ABCD2345", Deck::Red, Stake::White);
        let b = analyze("ABCD2345", Deck::Red, Stake::White);
        assert_eq!(a.antes[0].voucher, b.antes[0].voucher);
        assert_eq!(a.antes[3].shop_jokers[0].joker, b.antes[3].shop_jokers[0].joker);
    }

    #[test]
    fn erratic_deck_is_dumped_for_the_erratic_deck_only() {
        let dump = analyze("ABCD2345", Deck::Erratic, Stake::White);
        assert_eq!(dump.erratic_deck.as_ref().unwrap().len(), 52);
    }
}
