use super::context::SampleContext;
use super::edition::roll_edition;
use crate::domain::{Edition, Joker};
use crate::pools::joker_pool;

#[derive(Debug, Clone, Copy)]
pub struct JokerDraw {
    pub joker: Joker,
    pub edition: Edition,
}

/// rarity roll -> appearance pool (conditioned on rarity) -> edition roll;
/// each sub-draw uses a distinct stream key, and the order below is load-bearing
pub fn sample_joker(ctx: &mut SampleContext, ante: u8, slot: usize) -> JokerDraw {
    let tag = format!("Joker{slot}");
    let rarity_draw = ctx.draw(&tag, ante);
    let (_, pool) = joker_pool(rarity_draw);
    let appearance_draw = ctx.draw(&format!("{tag}Item"), ante);
    let joker = *pool.sample(appearance_draw);
    let edition = roll_edition(ctx, &format!("{tag}Edition"), ante);
    JokerDraw { joker, edition }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Deck, Stake};

    #[test]
    fn same_seed_same_slot_is_deterministic() {
        let mut a = SampleContext::new(Deck::Red, Stake::White, "ABCD2345");
        let mut b = SampleContext::new(Deck::Red, Stake::White, "ABCD2345");
        let draw_a = sample_joker(&mut a, 1, 0);
        let draw_b = sample_joker(&mut b, 1, 0);
        assert_eq!(draw_a.joker, draw_b.joker);
        assert_eq!(draw_a.edition, draw_b.edition);
    }

    #[test]
    fn distinct_slots_draw_from_distinct_streams() {
        let mut ctx = SampleContext::new(Deck::Red, Stake::White, "ABCD2345");
        let first = sample_joker(&mut ctx, 1, 0);
        let second = sample_joker(&mut ctx, 1, 1);
        // not asserting inequality of the joker itself (collisions are legal),
        // just that the two slots consumed independent streams without panicking
        let _ = (first, second);
    }
}
