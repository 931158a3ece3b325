//! Bucket-chained hash map over a dense backing store
//!
//! Buckets hold the head index of a singly-linked chain threaded through a
//! dense slab of entries. Growth doubles the bucket count (power of two,
//! starting at 8) and rehashes every live entry into fresh chains once the
//! load factor reaches 0.75. Removal only unlinks the entry from its chain;
//! the freed slot goes on a free list for reuse, so surviving chains keep
//! their indices.

use std::hash::{BuildHasher, Hash};

use ahash::RandomState;

/// Initial bucket count; always grows by doubling
const INITIAL_CAPACITY: usize = 8;

/// Entry in the dense backing store
#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
    next: Option<usize>,
}

/// Hash map with bucket chains over a dense entry store
#[derive(Debug, Clone)]
pub struct HashMap<K, V, S = RandomState> {
    buckets: Vec<Option<usize>>,
    entries: Vec<Option<Entry<K, V>>>,
    free_list: Vec<usize>,
    len: usize,
    hasher: S,
}

impl<K, V> HashMap<K, V> {
    /// Create an empty map with the default hasher
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }
}

impl<K, V> Default for HashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> HashMap<K, V, S> {
    /// Create an empty map with the given hasher
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            buckets: vec![None; INITIAL_CAPACITY],
            entries: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            hasher,
        }
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current bucket count
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Reset to the initial capacity and empty state
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.buckets.resize(INITIAL_CAPACITY, None);
        self.entries.clear();
        self.free_list.clear();
        self.len = 0;
    }

    /// Iterate over entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries
            .iter()
            .filter_map(|slot| slot.as_ref().map(|entry| (&entry.key, &entry.value)))
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Insert a key-value pair.
    ///
    /// # Returns
    /// * `true` if the key was newly inserted
    /// * `false` if the key existed and its value was overwritten in place
    ///   (no new entry, no growth)
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if let Some(idx) = self.find_index(&key) {
            if let Some(entry) = &mut self.entries[idx] {
                entry.value = value;
            }
            return false;
        }

        let bucket = self.bucket_index(&key);
        let idx = self.alloc(Entry {
            key,
            value,
            next: self.buckets[bucket],
        });
        self.buckets[bucket] = Some(idx);
        self.len += 1;

        // Load factor 0.75, checked after the insert
        if self.len * 4 >= self.buckets.len() * 3 {
            self.expand();
        }

        true
    }

    /// Look up a value by key
    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self.find_index(key)?;
        self.entries[idx].as_ref().map(|entry| &entry.value)
    }

    /// Look up a value by key, mutably
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find_index(key)?;
        self.entries[idx].as_mut().map(|entry| &mut entry.value)
    }

    /// Check whether a key is present
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_index(key).is_some()
    }

    /// Remove a key, returning its value if it was present.
    ///
    /// Walks the chain tracking the predecessor link (bucket head or the
    /// previous entry's `next`) so the unlink is a single rewrite.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let bucket = self.bucket_index(key);
        let mut prev: Option<usize> = None;
        let mut cursor = self.buckets[bucket];

        while let Some(idx) = cursor {
            let entry = self.entries[idx].as_ref()?;
            if entry.key == *key {
                let next = entry.next;
                match prev {
                    Some(prev_idx) => {
                        if let Some(prev_entry) = &mut self.entries[prev_idx] {
                            prev_entry.next = next;
                        }
                    }
                    None => {
                        self.buckets[bucket] = next;
                    }
                }
                let removed = self.entries[idx].take()?;
                self.free_list.push(idx);
                self.len -= 1;
                return Some(removed.value);
            }
            prev = Some(idx);
            cursor = entry.next;
        }

        None
    }

    /// Double the bucket count and rehash every live entry into fresh
    /// chains. Entries stay in their slots; only chain links move.
    fn expand(&mut self) {
        let capacity = self.buckets.len() * 2;
        let mut buckets = vec![None; capacity];

        for idx in 0..self.entries.len() {
            let bucket = match &self.entries[idx] {
                Some(entry) => (self.hasher.hash_one(&entry.key) as usize) & (capacity - 1),
                None => continue,
            };
            if let Some(entry) = &mut self.entries[idx] {
                entry.next = buckets[bucket];
                buckets[bucket] = Some(idx);
            }
        }

        self.buckets = buckets;
    }

    fn bucket_index(&self, key: &K) -> usize {
        // Bucket count is always a power of two
        (self.hasher.hash_one(key) as usize) & (self.buckets.len() - 1)
    }

    fn find_index(&self, key: &K) -> Option<usize> {
        let mut cursor = self.buckets[self.bucket_index(key)];
        while let Some(idx) = cursor {
            let entry = self.entries[idx].as_ref()?;
            if entry.key == *key {
                return Some(idx);
            }
            cursor = entry.next;
        }
        None
    }

    fn alloc(&mut self, entry: Entry<K, V>) -> usize {
        if let Some(idx) = self.free_list.pop() {
            self.entries[idx] = Some(entry);
            idx
        } else {
            self.entries.push(Some(entry));
            self.entries.len() - 1
        }
    }
}
