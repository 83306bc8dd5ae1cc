//! In-memory rate cache with a freshness window
//!
//! One entry per base currency ever queried; at most 31 given the fixed
//! selector list, so there is no eviction. Staleness is checked lazily on
//! read; nothing sweeps the map in the background. `tokio::time::Instant`
//! timestamps let tests drive freshness with a paused clock.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

/// Default time-to-live for a fetched rate table
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

/// One fetched rate table for a base currency
#[derive(Debug, Clone)]
pub struct RateCacheEntry {
    /// Quote currency -> rate relative to the base
    pub rates: HashMap<String, f64>,
    pub fetched_at: Instant,
}

/// Base currency -> cached rate table
#[derive(Debug)]
pub struct RateCache {
    entries: HashMap<String, RateCacheEntry>,
    ttl: Duration,
}

impl RateCache {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    pub fn get(&self, base: &str) -> Option<&RateCacheEntry> {
        self.entries.get(base)
    }

    /// Unconditional overwrite; last write wins, partial tables never merge.
    pub fn insert(&mut self, base: &str, rates: HashMap<String, f64>, now: Instant) {
        self.entries.insert(
            base.to_string(),
            RateCacheEntry {
                rates,
                fetched_at: now,
            },
        );
    }

    /// Fresh iff strictly less than the TTL has elapsed since the fetch.
    pub fn is_fresh(&self, entry: &RateCacheEntry, now: Instant) -> bool {
        now.saturating_duration_since(entry.fetched_at) < self.ttl
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RateCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_fresh_within_ttl() {
        let mut cache = RateCache::new();
        let t0 = Instant::now();
        cache.insert("USD", rates(&[("EUR", 0.9)]), t0);

        tokio::time::advance(Duration::from_secs(29 * 60)).await;
        let entry = cache.get("USD").unwrap();
        assert!(cache.is_fresh(entry, Instant::now()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_after_ttl() {
        let mut cache = RateCache::new();
        cache.insert("USD", rates(&[("EUR", 0.9)]), Instant::now());

        tokio::time::advance(Duration::from_secs(31 * 60)).await;
        let entry = cache.get("USD").unwrap();
        assert!(!cache.is_fresh(entry, Instant::now()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_insert_overwrites() {
        let mut cache = RateCache::new();
        cache.insert("USD", rates(&[("EUR", 0.9)]), Instant::now());

        tokio::time::advance(Duration::from_secs(60)).await;
        cache.insert("USD", rates(&[("EUR", 0.95)]), Instant::now());

        let entry = cache.get("USD").unwrap();
        assert_eq!(entry.rates["EUR"], 0.95);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entries_keyed_per_base() {
        let mut cache = RateCache::new();
        let now = Instant::now();
        cache.insert("USD", rates(&[("EUR", 0.9)]), now);
        cache.insert("EUR", rates(&[("USD", 1.1)]), now);

        assert_eq!(cache.len(), 2);
        assert!(cache.get("GBP").is_none());
    }
}
