//! Bounded, time-expiring key/value store used by the resource services.
//!
//! Entries expire `ttl` after their last write and are removed lazily when a
//! read finds them stale. When a new key arrives at capacity the entry with the
//! oldest write time is evicted first.
//!
//! Timestamps come from [`tokio::time::Instant`], so a paused test runtime
//! controls expiry exactly.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
    /// Write order, breaks ties between entries stored at the same instant
    seq: u64,
}

#[derive(Debug)]
struct CacheState<V> {
    entries: HashMap<String, CacheEntry<V>>,
    next_seq: u64,
    stats: CacheStats,
}

/// Counters describing how a cache has been used
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Size-bounded TTL cache. All mutation goes through `set`, `get` and `clear`.
#[derive(Debug)]
pub struct Cache<V> {
    state: Mutex<CacheState<V>>,
    capacity: usize,
    ttl: Duration,
}

impl<V: Clone> Cache<V> {
    /// Create a cache holding at most `capacity` entries (minimum 1) for `ttl` each.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                next_seq: 0,
                stats: CacheStats::default(),
            }),
            capacity: capacity.max(1),
            ttl,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, CacheState<V>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up a live entry. A stale entry is removed and reported as absent.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut state = self.lock();

        let expired = match state.entries.get(key) {
            None => {
                state.stats.misses += 1;
                return None;
            }
            Some(entry) => entry.stored_at.elapsed() > self.ttl,
        };

        if expired {
            state.entries.remove(key);
            state.stats.expirations += 1;
            state.stats.misses += 1;
            tracing::trace!(key, "cache entry expired");
            return None;
        }

        state.stats.hits += 1;
        state.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Store `value` under `key`, stamping it with the current time.
    ///
    /// Overwriting an existing key refreshes its value and timestamp without
    /// evicting anything else.
    pub fn set(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        let mut state = self.lock();

        if !state.entries.contains_key(&key) && state.entries.len() >= self.capacity {
            if let Some(oldest) = Self::oldest_key(&state.entries) {
                state.entries.remove(&oldest);
                state.stats.evictions += 1;
                tracing::trace!(key = %oldest, "evicted oldest cache entry");
            }
        }

        let seq = state.next_seq;
        state.next_seq += 1;
        state.entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: Instant::now(),
                seq,
            },
        );
    }

    /// Remove every entry. Statistics are kept.
    pub fn clear(&self) {
        self.lock().entries.clear();
    }

    /// Physical number of entries, including stale ones nobody has read yet.
    pub fn size(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn stats(&self) -> CacheStats {
        self.lock().stats
    }

    fn oldest_key(entries: &HashMap<String, CacheEntry<V>>) -> Option<String> {
        entries
            .iter()
            .min_by_key(|(_, entry)| (entry.stored_at, entry.seq))
            .map(|(key, _)| key.clone())
    }
}
