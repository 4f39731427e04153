use super::context::SampleContext;
use crate::domain::Voucher;
use crate::pools::voucher_pool;

/// one draw per ante, no edition roll (vouchers do not take editions)
pub fn sample_voucher(ctx: &mut SampleContext, ante: u8) -> Voucher {
    let draw = ctx.draw("Voucher", ante);
    *voucher_pool().sample(draw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Deck, Stake};

    #[test]
    fn is_deterministic_per_seed_and_ante() {
        let mut a = SampleContext::new(Deck::Red, Stake::White, "ABCD2345");
        let mut b = SampleContext::new(Deck::Red, Stake::White, "ABCD2345");
        assert_eq!(sample_voucher(&mut a, 1), sample_voucher(&mut b, 1));
    }

    #[test]
    fn different_antes_can_diverge() {
        let mut ctx = SampleContext::new(Deck::Red, Stake::White, "ABCD2345");
        let draws: Vec<_> = (1..=8).map(|ante| sample_voucher(&mut ctx, ante)).collect();
        assert!(draws.iter().any(|&v| v != draws[0]), "eight independent draws should not all collide");
    }
}
