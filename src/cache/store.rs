//! Cache Store Module
//!
//! The TTL-LRU cache: a key index plus a recency order, bounded in size and
//! with lazy expiry on lookup.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, Clock, LruTracker, SystemClock};

// == TTL LRU Cache ==
/// Size-bounded, time-expiring LRU cache.
///
/// Invariants after every public call:
/// - the index and the recency order hold exactly the same keys
/// - `len() <= max_entries`
///
/// Expiry is only checked on `lookup`. Expired entries that nobody looks up
/// keep occupying a slot until capacity pressure evicts them.
#[derive(Debug)]
pub struct TtlLruCache<V, C = SystemClock> {
    /// Key index
    entries: HashMap<String, CacheEntry<V>>,
    /// Recency order, most recent at the front
    lru: LruTracker<String>,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// How long an entry stays servable
    ttl: Duration,
    clock: C,
}

impl<V: Clone> TtlLruCache<V, SystemClock> {
    // == Constructor ==
    /// Creates a cache using the system clock.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries the cache can hold
    /// * `ttl` - Time an entry stays valid after insertion
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self::with_clock(max_entries, ttl, SystemClock)
    }
}

impl<V: Clone, C: Clock> TtlLruCache<V, C> {
    /// Creates a cache reading time from `clock`.
    pub fn with_clock(max_entries: usize, ttl: Duration, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            max_entries,
            ttl,
            clock,
        }
    }

    // == Lookup ==
    /// Returns the value for `key` if present and not expired.
    ///
    /// A present key is promoted to most recently used before the expiry
    /// check. If it turns out expired it is then removed from both the index
    /// and the recency order. Absent keys leave the cache untouched.
    pub fn lookup(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now();
        let entry = self.entries.get(key)?;
        let expired = entry.is_expired(now, self.ttl);
        let value = (!expired).then(|| entry.value.clone());

        let key = key.to_string();
        self.lru.touch(&key);

        if expired {
            self.entries.remove(&key);
            self.lru.remove(&key);
            debug!(key = %key, "dropped expired entry on lookup");
        }

        value
    }

    // == Insert ==
    /// Stores `value` under `key`, stamped with the current time.
    ///
    /// A new key arriving while the cache is full evicts exactly one entry,
    /// the least recently used, whether or not it has expired. Re-inserting
    /// an existing key replaces its entry and moves it to the front without
    /// evicting anything. With `max_entries == 0` nothing is stored.
    pub fn insert(&mut self, key: String, value: V) {
        if self.max_entries == 0 {
            debug!(key = %key, "cache has zero capacity, not storing");
            return;
        }

        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.evict_oldest();
        }

        let entry = CacheEntry::new(value, self.clock.now());
        self.lru.touch(&key);
        self.entries.insert(key, entry);
    }

    // == Evict Oldest ==
    /// Removes the single least recently used entry.
    fn evict_oldest(&mut self) -> Option<String> {
        let key = self.lru.evict_oldest()?;
        self.entries.remove(&key);
        debug!(key = %key, "evicted least recently used entry");
        Some(key)
    }

    // == Inspection ==
    /// Returns the number of entries, including expired ones not yet looked up.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `key` is indexed. Does not affect recency or check expiry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys from most to least recently used.
    pub fn recency_order(&self) -> Vec<String> {
        self.lru.iter().cloned().collect()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Checks that the index and the recency order hold the same keys, each
    /// once.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.lru.len() == self.entries.len()
            && self.lru.iter().all(|key| self.entries.contains_key(key))
    }
}
