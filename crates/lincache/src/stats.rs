//! Cache statistics tracking

use std::cell::Cell;

/// Statistics for cache performance tracking.
///
/// The cache is single-threaded, so counters use `Cell` rather than atomics;
/// recording still works through a shared reference.
#[derive(Debug, Default, Clone)]
pub struct CacheStats {
    hits: Cell<u64>,
    misses: Cell<u64>,
    evictions: Cell<u64>,
    inserts: Cell<u64>,
    updates: Cell<u64>,
}

impl CacheStats {
    /// Create new stats tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cache hit
    pub fn record_hit(&self) {
        self.hits.set(self.hits.get() + 1);
    }

    /// Record a cache miss
    pub fn record_miss(&self) {
        self.misses.set(self.misses.get() + 1);
    }

    /// Record an eviction
    pub fn record_eviction(&self) {
        self.evictions.set(self.evictions.get() + 1);
    }

    /// Record an insert of a new key
    pub fn record_insert(&self) {
        self.inserts.set(self.inserts.get() + 1);
    }

    /// Record an overwrite of an existing key
    pub fn record_update(&self) {
        self.updates.set(self.updates.get() + 1);
    }

    /// Get total hits
    pub fn hits(&self) -> u64 {
        self.hits.get()
    }

    /// Get total misses
    pub fn misses(&self) -> u64 {
        self.misses.get()
    }

    /// Get total evictions
    pub fn evictions(&self) -> u64 {
        self.evictions.get()
    }

    /// Get total inserts of new keys
    pub fn inserts(&self) -> u64 {
        self.inserts.get()
    }

    /// Get total value overwrites
    pub fn updates(&self) -> u64 {
        self.updates.get()
    }

    /// Calculate hit ratio (0.0 to 1.0)
    pub fn hit_ratio(&self) -> f64 {
        let hits = self.hits();
        let total = hits + self.misses();
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }

    /// Reset all statistics
    pub fn reset(&self) {
        self.hits.set(0);
        self.misses.set(0);
        self.evictions.set(0);
        self.inserts.set(0);
        self.updates.set(0);
    }
}
