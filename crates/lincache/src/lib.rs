//! # lincache
//!
//! Fixed-capacity LRU cache built on a hand-rolled linked hash map.
//!
//! ## Architecture
//! - **DoubleList**: slab-backed doubly linked list with stable position
//!   handles for O(1) erase and reorder
//! - **HashMap**: bucket-chained table (AHash) with doubling growth for
//!   O(1) lookups
//! - **LinkedHashMap**: composes the two; the map's values are positions
//!   into the list, so identity and recency never disagree
//! - **LruCache**: bounded façade that promotes on access and evicts the
//!   least recently used entry
//!
//! Single-threaded by design; every operation runs to completion and
//! leaves both inner structures consistent.

#![warn(missing_docs)]

mod error;
mod hashmap;
mod linked_hashmap;
mod list;
mod lru;
mod stats;

pub use error::{Error, Result};
pub use hashmap::HashMap;
pub use linked_hashmap::LinkedHashMap;
pub use list::{DoubleList, Iter, Position};
pub use lru::LruCache;
pub use stats::CacheStats;
