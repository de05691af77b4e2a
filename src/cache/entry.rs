//! Cache Entry Module
//!
//! Defines a cached value together with the instant it entered the cache.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A stored value and its insertion time.
///
/// Entries are never updated in place; re-inserting a key builds a new entry
/// with a fresh `cached_at`.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// When the cache accepted the value
    pub cached_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    pub fn new(value: V, cached_at: Instant) -> Self {
        Self { value, cached_at }
    }

    // == Age ==
    /// Time spent in the cache as of `now`. Saturates to zero if `now` is
    /// earlier than `cached_at`.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.cached_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is past its TTL.
    ///
    /// Boundary condition: an entry whose age equals the TTL is expired. It is
    /// servable only while `age < ttl`.
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) >= ttl
    }
}
