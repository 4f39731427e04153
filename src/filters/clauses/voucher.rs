use crate::domain::Voucher;
use crate::filters::evaluate::{evaluate_per_lane, ClauseEvaluator, EvalCtx};
use crate::prng::Mask;
use crate::sample::sample_voucher;
use crate::LANES;

/// For each ante in the clause, draw the ante's voucher and compare against
/// the wanted value(s). Vouchers carry no edition of their own.
pub struct VoucherEvaluator {
    pub name: String,
    pub wanted: Vec<Voucher>,
    pub antes: Vec<u8>,
    pub min: u32,
}

impl ClauseEvaluator for VoucherEvaluator {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, ctx: &mut EvalCtx) -> (Mask, [u16; LANES]) {
        evaluate_per_lane(ctx, self.min, |lane| {
            let mut count = 0u16;
            for &ante in &self.antes {
                let drawn = sample_voucher(lane, ante);
                if self.wanted.contains(&drawn) {
                    count += 1;
                }
            }
            count
        })
    }
}
