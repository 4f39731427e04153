use super::context::SampleContext;
use crate::domain::Tag;
use crate::pools::tag_pool;

/// two draws per ante: small-blind tag, then big-blind tag
pub fn sample_tags(ctx: &mut SampleContext, ante: u8) -> (Tag, Tag) {
    let small = *tag_pool().sample(ctx.draw("Tag1", ante));
    let big = *tag_pool().sample(ctx.draw("Tag2", ante));
    (small, big)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Deck, Stake};

    #[test]
    fn small_and_big_use_independent_streams() {
        let mut ctx = SampleContext::new(Deck::Red, Stake::White, "ABCD2345");
        let (small, big) = sample_tags(&mut ctx, 1);
        let mut ctx2 = SampleContext::new(Deck::Red, Stake::White, "ABCD2345");
        let (small2, big2) = sample_tags(&mut ctx2, 1);
        assert_eq!(small, small2);
        assert_eq!(big, big2);
    }
}
