//! Hash map with stable insertion/recency order
//!
//! Composes the bucket-chained [`HashMap`] with the [`DoubleList`]: the
//! list holds the real `(key, value)` pairs and encodes order, while the
//! map stores a [`Position`] handle into the list for each key. Every
//! mutation updates both structures inside one method call, so they can
//! never disagree about which keys exist. The list tail is the fresh
//! (most recently inserted or refreshed) end; the head is the oldest.

use std::hash::Hash;

use crate::error::{Error, Result};
use crate::hashmap::HashMap;
use crate::list::{DoubleList, Position};

/// Hash map whose entries keep a list order, freshest at the tail
#[derive(Debug, Clone)]
pub struct LinkedHashMap<K, V> {
    list: DoubleList<(K, V)>,
    index: HashMap<K, Position>,
}

impl<K, V> Default for LinkedHashMap<K, V> {
    fn default() -> Self {
        Self {
            list: DoubleList::new(),
            index: HashMap::new(),
        }
    }
}

impl<K, V> LinkedHashMap<K, V> {
    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Position of the oldest entry, or end if empty
    pub fn oldest(&self) -> Position {
        self.list.head_position()
    }

    /// Position of the freshest entry, or end if empty
    pub fn freshest(&self) -> Position {
        self.list.tail_position()
    }

    /// Dereference a position into its key and value
    ///
    /// # Returns
    /// * `Err(Error::InvalidIterator)` for end or invalidated positions
    pub fn entry(&self, pos: Position) -> Result<(&K, &V)> {
        self.list.get(pos).map(|(key, value)| (key, value))
    }

    /// Iterate entries oldest to freshest; reversible via `rev()`
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> {
        self.list.iter().map(|(key, value)| (key, value))
    }

    /// Remove every entry from both structures
    pub fn clear(&mut self) {
        self.list.clear();
        self.index.clear();
    }
}

impl<K, V> LinkedHashMap<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            list: DoubleList::new(),
            index: HashMap::new(),
        }
    }

    /// Insert a key-value pair at the fresh end.
    ///
    /// An existing key has its old node erased before the new node is
    /// created, so no key ever owns two nodes, and its stored handle is
    /// repointed at the new node.
    ///
    /// # Returns
    /// * The position of the (re)inserted entry, and `true` if the key was
    ///   newly inserted (`false` for an update)
    pub fn insert(&mut self, key: K, value: V) -> (Position, bool) {
        let fresh = match self.index.get(&key).copied() {
            Some(old_pos) => {
                self.list.erase(old_pos);
                false
            }
            None => true,
        };

        let pos = self.list.insert_tail((key.clone(), value));
        self.index.insert(key, pos);
        (pos, fresh)
    }

    /// Find the position for a key, or end if absent
    pub fn find(&self, key: &K) -> Position {
        self.index.get(key).copied().unwrap_or_else(Position::end)
    }

    /// Remove the entry at a position from both structures.
    ///
    /// # Returns
    /// * The removed key-value pair
    /// * `Err(Error::OutOfRange)` for end or invalidated positions
    pub fn remove(&mut self, pos: Position) -> Result<(K, V)> {
        let key = match self.list.get(pos) {
            Ok((key, _)) => key.clone(),
            Err(_) => return Err(Error::OutOfRange),
        };

        self.index.remove(&key);
        self.list.take(pos).ok_or(Error::OutOfRange)
    }

    /// Direct access to the value for a key.
    ///
    /// Never inserts on a miss; an absent key is reported as
    /// `Err(Error::KeyNotFound)`.
    pub fn at(&self, key: &K) -> Result<&V> {
        let pos = self.index.get(key).ok_or(Error::KeyNotFound)?;
        self.list
            .get(*pos)
            .map(|(_, value)| value)
            .map_err(|_| Error::KeyNotFound)
    }

    /// Direct mutable access to the value for a key
    pub fn at_mut(&mut self, key: &K) -> Result<&mut V> {
        let pos = *self.index.get(key).ok_or(Error::KeyNotFound)?;
        self.list
            .get_mut(pos)
            .map(|(_, value)| value)
            .map_err(|_| Error::KeyNotFound)
    }

    /// Number of entries for a key: 0 or 1
    pub fn count(&self, key: &K) -> usize {
        usize::from(self.index.contains_key(key))
    }

    /// Check whether a key is present
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }
}
