use super::Stream;
use std::collections::HashMap;

/// Every sampling kernel declares the stream keys it needs up front; a
/// filter's compiled evaluator set only ever touches the handful of domains
/// its clauses mention, so a single seed's evaluation pulls a small, fixed
/// set of streams. This cache avoids re-hashing the same key twice within
/// one seed's evaluation when multiple clauses share a domain/ante.
#[derive(Debug, Default)]
pub struct StreamCache {
    streams: HashMap<String, Stream>,
}

impl StreamCache {
    pub fn new() -> Self {
        Self { streams: HashMap::new() }
    }

    pub fn get_or_insert(&mut self, tag: &str, ante: u8, seed: &str) -> &mut Stream {
        let key = format!("{tag}{ante}{seed}");
        self.streams.entry(key).or_insert_with(|| Stream::from_parts(tag, ante, seed))
    }

    pub fn clear(&mut self) {
        self.streams.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_lookup_reuses_the_same_stream_state() {
        let mut cache = StreamCache::new();
        let first = cache.get_or_insert("Joker1", 1, "ABCD2345").next();
        let second = cache.get_or_insert("Joker1", 1, "ABCD2345").next();
        assert_ne!(first, second, "second call should continue the same stream, not restart it");
    }

    #[test]
    fn distinct_tags_get_distinct_streams() {
        let mut cache = StreamCache::new();
        let a = cache.get_or_insert("Joker1", 1, "ABCD2345").next();
        let b = cache.get_or_insert("Voucher", 1, "ABCD2345").next();
        assert_ne!(a, b);
    }
}
