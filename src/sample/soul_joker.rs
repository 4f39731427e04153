use super::context::SampleContext;
use super::edition::roll_edition;
use super::joker::JokerDraw;
use crate::pools::soul_joker_pool;

/// restricted to the legendary set; `require_mega` tightens acceptance to
/// mega-tag-gated appearances at the filter layer, not here — this kernel
/// always produces a legendary draw, the same as the base game's soul card
pub fn sample_soul_joker(ctx: &mut SampleContext, ante: u8) -> JokerDraw {
    let pool = soul_joker_pool();
    let appearance_draw = ctx.draw("SoulJoker", ante);
    let joker = *pool.sample(appearance_draw);
    let edition = roll_edition(ctx, "SoulJokerEdition", ante);
    JokerDraw { joker, edition }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Deck, Rarity, Stake};

    #[test]
    fn always_draws_a_legendary() {
        let mut ctx = SampleContext::new(Deck::Red, Stake::White, "ABCD2345");
        for ante in 1..=8 {
            let draw = sample_soul_joker(&mut ctx, ante);
            assert_eq!(draw.joker.rarity(), Rarity::Legendary);
        }
    }
}
