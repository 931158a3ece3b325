//! LRU (Least Recently Used) cache
//!
//! Bounded façade over the [`LinkedHashMap`]: every save or hit moves the
//! entry to the fresh end of the order, and inserting past capacity evicts
//! the entry at the oldest end.

use std::fmt;
use std::hash::Hash;

use crate::linked_hashmap::LinkedHashMap;
use crate::stats::CacheStats;

/// LRU cache with fixed capacity
#[derive(Clone)]
pub struct LruCache<K, V> {
    map: LinkedHashMap<K, V>,
    stats: CacheStats,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new LRU cache with the given capacity
    ///
    /// # Panics
    /// Panics if `capacity` is zero; a cache that can hold nothing is
    /// rejected at construction.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");

        Self {
            map: LinkedHashMap::new(),
            stats: CacheStats::new(),
            capacity,
        }
    }

    /// Insert a key-value pair, evicting the least recently used entry if
    /// the cache is full.
    ///
    /// An existing key is removed first, so it never counts twice against
    /// capacity: the save updates its value and promotes it to most recent
    /// without touching any other entry's relative order.
    pub fn save(&mut self, key: K, value: V) {
        let pos = self.map.find(&key);
        if !pos.is_end() {
            if self.map.remove(pos).is_ok() {
                self.stats.record_update();
            }
        } else if self.map.len() >= self.capacity {
            if self.map.remove(self.map.oldest()).is_ok() {
                self.stats.record_eviction();
            }
        }

        self.map.insert(key, value);
        if pos.is_end() {
            self.stats.record_insert();
        }
    }

    /// Get a value from the cache.
    ///
    /// A hit promotes the entry to most recently used (a read counts as a
    /// use) and returns a reference to the live cached value. A miss
    /// returns `None`; it is an expected outcome, never an error.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let pos = self.map.find(key);
        if pos.is_end() {
            self.stats.record_miss();
            return None;
        }
        self.stats.record_hit();

        // Promote by reinserting the same pair at the fresh end
        let (key, value) = self.map.remove(pos).ok()?;
        let (fresh, _) = self.map.insert(key, value);
        self.map.entry(fresh).map(|(_, value)| value).ok()
    }

    /// Check whether a key is resident, without promoting it
    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }
}

impl<K, V> LruCache<K, V> {
    /// Get the current number of resident entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Get the fixed capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every resident entry; capacity and stats are unchanged
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Iterate resident entries from least to most recently used, without
    /// changing recency
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> {
        self.map.iter()
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

impl<K, V> LruCache<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    /// Print resident entries to stdout, least recent first. Debug helper;
    /// does not change recency.
    pub fn print(&self) {
        for (key, value) in self.map.iter() {
            println!("{key:?} {value:?}");
        }
    }
}

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}
