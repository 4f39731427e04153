use super::WeightedPool;
use crate::domain::{Boss, GameEnum, Joker, Planet, Rarity, Spectral, Tag, Tarot, Voucher};
use std::sync::LazyLock;

fn uniform_over<T: GameEnum + Clone>() -> WeightedPool<T> {
    WeightedPool::uniform(T::all().to_vec())
}

/// rarity roll: common jokers are common, legendaries are rare by design
static RARITY_POOL: LazyLock<WeightedPool<Rarity>> = LazyLock::new(|| {
    WeightedPool::new(vec![
        (Rarity::Common, 70.0),
        (Rarity::Uncommon, 25.0),
        (Rarity::Rare, 4.5),
        (Rarity::Legendary, 0.5),
    ])
});

static JOKER_POOLS: LazyLock<[WeightedPool<Joker>; 4]> = LazyLock::new(|| {
    Rarity::all()
        .iter()
        .map(|&rarity| WeightedPool::uniform(Joker::of_rarity(rarity).collect()))
        .collect::<Vec<_>>()
        .try_into()
        .expect("exactly four rarity tiers")
});

static SOUL_JOKER_POOL: LazyLock<WeightedPool<Joker>> =
    LazyLock::new(|| WeightedPool::uniform(Joker::of_rarity(Rarity::Legendary).collect()));

static VOUCHER_POOL: LazyLock<WeightedPool<Voucher>> = LazyLock::new(uniform_over::<Voucher>);
static TAG_POOL: LazyLock<WeightedPool<Tag>> = LazyLock::new(uniform_over::<Tag>);
static BOSS_POOL: LazyLock<WeightedPool<Boss>> = LazyLock::new(uniform_over::<Boss>);
static TAROT_POOL: LazyLock<WeightedPool<Tarot>> = LazyLock::new(uniform_over::<Tarot>);
static PLANET_POOL: LazyLock<WeightedPool<Planet>> = LazyLock::new(uniform_over::<Planet>);
static SPECTRAL_POOL: LazyLock<WeightedPool<Spectral>> = LazyLock::new(uniform_over::<Spectral>);

/// the rarity roll, then the appearance pool conditioned on the rolled tier;
/// deck/stake/ante/slot conditioning is applied by the caller by choosing a
/// different rarity weighting upstream of this lookup, not inside it
pub fn joker_pool(rarity_draw: f64) -> (Rarity, &'static WeightedPool<Joker>) {
    let rarity = *RARITY_POOL.sample(rarity_draw);
    (rarity, &JOKER_POOLS[rarity as usize])
}

pub fn soul_joker_pool() -> &'static WeightedPool<Joker> {
    &SOUL_JOKER_POOL
}

pub fn voucher_pool() -> &'static WeightedPool<Voucher> {
    &VOUCHER_POOL
}

pub fn tag_pool() -> &'static WeightedPool<Tag> {
    &TAG_POOL
}

pub fn boss_pool() -> &'static WeightedPool<Boss> {
    &BOSS_POOL
}

pub fn tarot_pool() -> &'static WeightedPool<Tarot> {
    &TAROT_POOL
}

pub fn planet_pool() -> &'static WeightedPool<Planet> {
    &PLANET_POOL
}

pub fn spectral_pool() -> &'static WeightedPool<Spectral> {
    &SPECTRAL_POOL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_roll_stays_within_its_tier() {
        let (rarity, pool) = joker_pool(0.99);
        assert_eq!(rarity, Rarity::Legendary);
        assert!(pool.len() > 0);
        assert!(pool.sample(0.5).is_legendary());
    }

    #[test]
    fn soul_joker_pool_is_all_legendary() {
        let pool = soul_joker_pool();
        for draw in [0.0, 0.25, 0.5, 0.75, 0.99] {
            assert!(pool.sample(draw).is_legendary());
        }
    }

    #[test]
    fn every_domain_pool_is_non_empty() {
        assert!(!voucher_pool().is_empty());
        assert!(!tag_pool().is_empty());
        assert!(!boss_pool().is_empty());
        assert!(!tarot_pool().is_empty());
        assert!(!planet_pool().is_empty());
        assert!(!spectral_pool().is_empty());
    }
}
