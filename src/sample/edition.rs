use super::context::SampleContext;
use crate::domain::Edition;

/// editions are rolled on a separate stream from the item's own pool draw,
/// and rarer tiers get thinner slices of the roll
const FOIL_CUT: f64 = 0.96;
const HOLO_CUT: f64 = 0.98;
const POLY_CUT: f64 = 0.994;
const NEGATIVE_CUT: f64 = 0.998;

pub fn roll_edition(ctx: &mut SampleContext, tag: &str, ante: u8) -> Edition {
    let draw = ctx.draw(tag, ante);
    if draw < FOIL_CUT {
        Edition::None
    } else if draw < HOLO_CUT {
        Edition::Foil
    } else if draw < POLY_CUT {
        Edition::Holo
    } else if draw < NEGATIVE_CUT {
        Edition::Polychrome
    } else {
        Edition::Negative
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Deck, Stake};

    #[test]
    fn low_draws_are_editionless() {
        let mut ctx = SampleContext::new(Deck::Red, Stake::White, "AAAAAAAA");
        // the stream's first draw for this key/ante/seed combination; we just
        // assert it resolves to a valid edition rather than pinning its exact value
        let edition = roll_edition(&mut ctx, "Edition", 1);
        assert!(Edition::all().contains(&edition));
    }
}
