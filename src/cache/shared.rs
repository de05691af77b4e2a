//! Shared Cache Module
//!
//! Thread-safe handle around `TtlLruCache` for use from request handlers.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::cache::{Clock, SystemClock, TtlLruCache};

// == Shared Cache ==
/// Cloneable handle to one cache instance.
///
/// The index and the recency order sit behind a single mutex. `lookup`
/// mutates recency and may delete, so it takes the same exclusive lock as
/// `insert`: all operations on one instance are serialized. The lock is held
/// only for the in-memory operation; callers fetch upstream data before
/// calling `insert`, never while holding the cache.
#[derive(Debug)]
pub struct SharedCache<V, C = SystemClock> {
    inner: Arc<Mutex<TtlLruCache<V, C>>>,
}

impl<V, C> Clone for SharedCache<V, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: Clone> SharedCache<V, SystemClock> {
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self::from_store(TtlLruCache::new(max_entries, ttl))
    }
}

impl<V: Clone, C: Clock> SharedCache<V, C> {
    /// Wraps an existing store.
    pub fn from_store(store: TtlLruCache<V, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// See [`TtlLruCache::lookup`].
    pub async fn lookup(&self, key: &str) -> Option<V> {
        self.inner.lock().await.lookup(key)
    }

    /// See [`TtlLruCache::insert`].
    pub async fn insert(&self, key: String, value: V) {
        self.inner.lock().await.insert(key, value);
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    /// Keys from most to least recently used.
    pub async fn recency_order(&self) -> Vec<String> {
        self.inner.lock().await.recency_order()
    }

    #[cfg(test)]
    pub(crate) async fn is_consistent(&self) -> bool {
        self.inner.lock().await.is_consistent()
    }
}
