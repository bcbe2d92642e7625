use std::collections::HashMap;
use std::time::{Duration, Instant};

struct CacheEntry<V> {
    value: V,
    fetched_at: Instant,
}

/// Map of source URL → value with a fixed time-to-live.
///
/// Expiry is checked on lookup; an expired entry is simply overwritten by
/// the next `insert`.
pub struct TtlCache<V> {
    ttl: Duration,
    entries: HashMap<String, CacheEntry<V>>,
}

impl<V> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fresh value for `key`, if any. Fresh means `now - fetched_at < ttl`.
    pub fn get(&self, key: &str, now: Instant) -> Option<&V> {
        self.entries
            .get(key)
            .filter(|e| now.saturating_duration_since(e.fetched_at) < self.ttl)
            .map(|e| &e.value)
    }

    pub fn insert(&mut self, key: &str, value: V, now: Instant) {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                fetched_at: now,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
