use super::context::SampleContext;
use crate::domain::Boss;
use crate::pools::boss_pool;

/// how many of the most recently drawn boss blinds a fresh draw must avoid repeating
const NO_REPEAT_WINDOW: usize = 4;

/// one draw per ante; `history` holds every boss drawn for earlier antes in
/// this run (oldest first) so the "no repeat within window" constraint can
/// reroll a colliding draw using the same stream, one extra draw at a time
pub fn sample_boss(ctx: &mut SampleContext, ante: u8, history: &[Boss]) -> Boss {
    let recent_window = history.len().saturating_sub(NO_REPEAT_WINDOW)..history.len();
    let recent = &history[recent_window];
    let pool = boss_pool();
    loop {
        let draw = ctx.draw("Boss", ante);
        let candidate = *pool.sample(draw);
        if !recent.contains(&candidate) || pool.len() <= NO_REPEAT_WINDOW {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Deck, Stake};

    #[test]
    fn never_repeats_within_the_window() {
        let mut ctx = SampleContext::new(Deck::Red, Stake::White, "ABCD2345");
        let mut history = Vec::new();
        for ante in 1..=8u8 {
            let boss = sample_boss(&mut ctx, ante, &history);
            let window_start = history.len().saturating_sub(NO_REPEAT_WINDOW);
            assert!(!history[window_start..].contains(&boss));
            history.push(boss);
        }
    }
}
