//! Time-to-live key/value store.
//!
//! Entries are immutable once stored; a new `set` for the same key replaces
//! the old one. Expired entries are never purged proactively, they are
//! reported as misses and overwritten by the next `set`.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use log::debug;

/// Default time-to-live for team and player lookups.
pub const ROSTER_TTL: Duration = Duration::from_secs(5 * 60);

/// Default time-to-live for career history lookups.
pub const CAREER_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Clone, Debug)]
struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

impl<V> CacheEntry<V> {
    fn is_fresh(&self, ttl: Option<Duration>, now: Instant) -> bool {
        match ttl {
            Some(ttl) => now.saturating_duration_since(self.stored_at) < ttl,
            None => true,
        }
    }
}

/// Concurrent cache namespace with an optional TTL.
///
/// A `None` TTL keeps entries for the lifetime of the process.
pub struct CacheStore<V> {
    namespace: &'static str,
    ttl: Option<Duration>,
    entries: DashMap<String, CacheEntry<V>>,
}

impl<V: Clone> CacheStore<V> {
    /// Create a namespace whose entries expire after `ttl`.
    pub fn with_ttl(namespace: &'static str, ttl: Duration) -> Self {
        Self {
            namespace,
            ttl: Some(ttl),
            entries: DashMap::new(),
        }
    }

    /// Create a namespace whose entries never expire.
    pub fn unbounded(namespace: &'static str) -> Self {
        Self {
            namespace,
            ttl: None,
            entries: DashMap::new(),
        }
    }

    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Look up `key`, treating expired entries as absent.
    pub fn get(&self, key: &str) -> Option<V> {
        let entry = self.entries.get(key)?;
        if entry.is_fresh(self.ttl, Instant::now()) {
            debug!("Cache hit [{}]: {}", self.namespace, key);
            Some(entry.value.clone())
        } else {
            debug!("Cache expired [{}]: {}", self.namespace, key);
            None
        }
    }

    /// Store `value` under `key`, replacing any previous entry.
    pub fn set(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        debug!("Cached [{}]: {}", self.namespace, key);
        self.entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
