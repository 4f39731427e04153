/// A cumulative-weight table over a closed domain `T`. Construction takes
/// raw, possibly-unnormalized weights and builds a prefix-sum table once;
/// `sample` then turns a single `[0, 1)` draw into an item via binary search
/// over that prefix sum. The last entry's weight is inflated by a tiny
/// epsilon so a draw of exactly the maximum prefix sum (which floating
/// point rounding can produce right at `1.0`) always resolves to an item
/// instead of falling off the end of the table.
#[derive(Debug, Clone)]
pub struct WeightedPool<T> {
    items: Vec<T>,
    cumulative: Vec<f64>,
}

impl<T: Clone> WeightedPool<T> {
    pub fn new(entries: Vec<(T, f64)>) -> Self {
        assert!(!entries.is_empty(), "a weighted pool needs at least one entry");
        let mut items = Vec::with_capacity(entries.len());
        let mut cumulative = Vec::with_capacity(entries.len());
        let mut running = 0.0;
        for (item, weight) in entries {
            assert!(weight >= 0.0, "pool weights must be non-negative");
            running += weight;
            items.push(item);
            cumulative.push(running);
        }
        // guard against a draw landing exactly on (or a hair past, due to
        // rounding) the final prefix sum
        if let Some(last) = cumulative.last_mut() {
            *last += 1e-9;
        }
        Self { items, cumulative }
    }

    pub fn uniform(items: Vec<T>) -> Self {
        let weight = 1.0;
        Self::new(items.into_iter().map(|i| (i, weight)).collect())
    }

    /// Map `draw` (expected in `[0, 1)`) into an item by scaling it onto
    /// this pool's total weight and binary-searching the prefix sum.
    pub fn sample(&self, draw: f64) -> &T {
        let total = *self.cumulative.last().expect("non-empty pool");
        let target = draw * total;
        let index = self
            .cumulative
            .partition_point(|&cum| cum <= target)
            .min(self.items.len() - 1);
        &self.items[index]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_pool_splits_evenly() {
        let pool = WeightedPool::uniform(vec!["a", "b", "c", "d"]);
        assert_eq!(*pool.sample(0.0), "a");
        assert_eq!(*pool.sample(0.99), "d");
    }

    #[test]
    fn weights_skew_the_split_points() {
        let pool = WeightedPool::new(vec![("rare", 1.0), ("common", 9.0)]);
        assert_eq!(*pool.sample(0.05), "rare");
        assert_eq!(*pool.sample(0.5), "common");
    }

    #[test]
    fn a_draw_at_the_edge_never_panics() {
        let pool = WeightedPool::uniform(vec![1, 2, 3]);
        pool.sample(1.0 - f64::EPSILON);
        pool.sample(0.999_999_999);
    }
}
