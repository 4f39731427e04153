//! Seed lattice enumeration: a batch fixes a prefix of length `L` and walks
//! its `35^(8-L)` suffixes in lane groups of [`crate::LANES`].

use crate::seed::{RADIX, SEED_LEN, Seed};

/// One fixed-prefix slice of the seed lattice.
#[derive(Debug, Clone)]
pub struct SeedBatch {
    prefix: Vec<u8>,
    suffix_len: usize,
}

impl SeedBatch {
    /// `prefix_len` is the batch character count `L`; `batch_index` is `b`,
    /// base-35 encoded into the prefix.
    pub fn new(prefix_len: usize, batch_index: u64) -> Self {
        assert!(prefix_len <= SEED_LEN, "prefix longer than a seed");
        Self { prefix: Seed::encode_prefix(batch_index, prefix_len), suffix_len: SEED_LEN - prefix_len }
    }

    pub fn total_suffixes(&self) -> u64 {
        RADIX.pow(self.suffix_len as u32)
    }

    /// Number of lane groups (`crate::LANES`-wide) needed to cover this batch.
    pub fn total_groups(&self) -> u64 {
        self.total_suffixes().div_ceil(crate::LANES as u64)
    }

    /// The seed strings for lane group `group_index`, plus how many of those
    /// lanes are real (the final group of a batch may be short; unused
    /// lanes are filled by repeating the last real seed so a fixed-width
    /// [`crate::LANES`] evaluation never has to special-case a partial group).
    pub fn lane_group(&self, group_index: u64) -> (Vec<String>, usize) {
        let total = self.total_suffixes();
        let start = group_index * crate::LANES as u64;
        let real = (total.saturating_sub(start)).min(crate::LANES as u64) as usize;
        assert!(real > 0, "group_index past the end of the batch");

        let mut seeds = Vec::with_capacity(crate::LANES);
        for lane in 0..real {
            let suffix_index = start + lane as u64;
            let seed = Seed::from_prefix_and_suffix(&self.prefix, self.suffix_len, suffix_index);
            seeds.push(seed.to_string_upper());
        }
        while seeds.len() < crate::LANES {
            seeds.push(seeds.last().cloned().expect("at least one real lane"));
        }
        (seeds, real)
    }
}

/// Total number of batches for a prefix length `L` (`35^L`).
pub fn total_batches(prefix_len: usize) -> u64 {
    RADIX.pow(prefix_len as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_group_reconstructs_seeds_bit_exactly() {
        let batch = SeedBatch::new(4, 0);
        let (seeds, real) = batch.lane_group(0);
        assert_eq!(real, crate::LANES);
        assert_eq!(seeds.len(), crate::LANES);
        assert!(seeds.iter().all(|s| s.len() == SEED_LEN));
        assert_ne!(seeds[0], seeds[1]);
    }

    #[test]
    fn short_final_group_pads_with_repeated_last_seed() {
        let batch = SeedBatch::new(8, 0);
        assert_eq!(batch.total_suffixes(), 1);
        let (seeds, real) = batch.lane_group(0);
        assert_eq!(real, 1);
        assert!(seeds[1..].iter().all(|s| s == &seeds[0]));
    }

    #[test]
    fn total_groups_rounds_up() {
        let batch = SeedBatch::new(7, 0);
        assert_eq!(batch.total_suffixes(), RADIX);
        assert_eq!(batch.total_groups(), RADIX.div_ceil(crate::LANES as u64));
    }
}
