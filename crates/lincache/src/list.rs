//! Doubly linked list with stable position handles
//!
//! Nodes live in a slab of optional slots with a free list, so a
//! [`Position`] is an index that stays valid across unrelated insertions
//! and removals. A slot's presence bit doubles as the handle validity
//! check: once the node behind a position is erased, dereferencing that
//! position reports [`Error::InvalidIterator`] instead of touching a
//! recycled node.

use crate::error::{Error, Result};

/// Node in the doubly-linked list
#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Non-owning handle to a node in a [`DoubleList`].
///
/// `Position::end()` is the one-past-the-tail sentinel. A handle becomes
/// invalid when its node is erased; it is never invalidated by operations
/// on other nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    slot: Option<usize>,
}

impl Position {
    /// The end sentinel (one past the tail, also "not found")
    pub fn end() -> Self {
        Position { slot: None }
    }

    /// Check whether this is the end sentinel
    pub fn is_end(&self) -> bool {
        self.slot.is_none()
    }

    fn at(slot: usize) -> Self {
        Position { slot: Some(slot) }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::end()
    }
}

/// Doubly linked list with O(1) end insertion and O(1) erase by position
#[derive(Debug, Clone)]
pub struct DoubleList<T> {
    nodes: Vec<Option<Node<T>>>,
    free_list: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> DoubleList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free_list: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Get the number of elements in the list
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Position of the first element, or end if empty
    pub fn head_position(&self) -> Position {
        match self.head {
            Some(idx) => Position::at(idx),
            None => Position::end(),
        }
    }

    /// Position of the last element, or end if empty
    pub fn tail_position(&self) -> Position {
        match self.tail {
            Some(idx) => Position::at(idx),
            None => Position::end(),
        }
    }

    /// Insert a value at the front of the list
    pub fn insert_head(&mut self, value: T) -> Position {
        let idx = self.alloc(Node {
            value,
            prev: None,
            next: self.head,
        });

        if let Some(old_head) = self.head {
            if let Some(node) = &mut self.nodes[old_head] {
                node.prev = Some(idx);
            }
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        self.len += 1;
        Position::at(idx)
    }

    /// Insert a value at the back of the list
    pub fn insert_tail(&mut self, value: T) -> Position {
        let idx = self.alloc(Node {
            value,
            prev: self.tail,
            next: None,
        });

        if let Some(old_tail) = self.tail {
            if let Some(node) = &mut self.nodes[old_tail] {
                node.next = Some(idx);
            }
        }

        self.tail = Some(idx);
        if self.head.is_none() {
            self.head = Some(idx);
        }
        self.len += 1;
        Position::at(idx)
    }

    /// Remove the first element; no-op on an empty list
    pub fn delete_head(&mut self) {
        self.erase(self.head_position());
    }

    /// Remove the last element; no-op on an empty list
    pub fn delete_tail(&mut self) {
        self.erase(self.tail_position());
    }

    /// Erase the node at `pos` in O(1).
    ///
    /// Returns the position of the element that followed the erased one, or
    /// end if there was none. Erasing the end sentinel (or an already
    /// invalidated position) is a no-op that returns end.
    pub fn erase(&mut self, pos: Position) -> Position {
        let next = match self.node_at(pos) {
            Some(node) => node.next,
            None => return Position::end(),
        };

        self.take(pos);

        match next {
            Some(idx) => Position::at(idx),
            None => Position::end(),
        }
    }

    /// Detach the node at `pos` and return its value, or `None` for
    /// end/invalidated positions. Same relinking as [`erase`](Self::erase).
    pub fn take(&mut self, pos: Position) -> Option<T> {
        let idx = pos.slot?;
        if self.node_at(pos).is_none() {
            return None;
        }

        let node = self.nodes[idx].take()?;

        match node.prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.nodes[prev_idx] {
                    prev_node.next = node.next;
                }
            }
            None => {
                self.head = node.next;
            }
        }

        match node.next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.nodes[next_idx] {
                    next_node.prev = node.prev;
                }
            }
            None => {
                self.tail = node.prev;
            }
        }

        self.free_list.push(idx);
        self.len -= 1;
        Some(node.value)
    }

    /// Dereference a position
    ///
    /// # Returns
    /// * `Err(Error::InvalidIterator)` for the end sentinel or a position
    ///   whose node has been erased
    pub fn get(&self, pos: Position) -> Result<&T> {
        self.node(pos).map(|node| &node.value)
    }

    /// Mutably dereference a position
    pub fn get_mut(&mut self, pos: Position) -> Result<&mut T> {
        let idx = pos.slot.ok_or(Error::InvalidIterator)?;
        self.nodes
            .get_mut(idx)
            .and_then(|slot| slot.as_mut())
            .map(|node| &mut node.value)
            .ok_or(Error::InvalidIterator)
    }

    /// Step a position forward.
    ///
    /// Advancing the tail yields end; advancing end (or an invalidated
    /// position) is an error.
    pub fn next(&self, pos: Position) -> Result<Position> {
        let node = self.node(pos)?;
        Ok(match node.next {
            Some(idx) => Position::at(idx),
            None => Position::end(),
        })
    }

    /// Step a position backward.
    ///
    /// Retreating from the head, from end, or from an invalidated position
    /// is an error.
    pub fn prev(&self, pos: Position) -> Result<Position> {
        let node = self.node(pos)?;
        match node.prev {
            Some(idx) => Ok(Position::at(idx)),
            None => Err(Error::InvalidIterator),
        }
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterate front to back; reversible via `rev()`
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    fn node(&self, pos: Position) -> Result<&Node<T>> {
        self.node_at(pos).ok_or(Error::InvalidIterator)
    }

    fn node_at(&self, pos: Position) -> Option<&Node<T>> {
        let idx = pos.slot?;
        self.nodes.get(idx)?.as_ref()
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        if let Some(idx) = self.free_list.pop() {
            self.nodes[idx] = Some(node);
            idx
        } else {
            self.nodes.push(Some(node));
            self.nodes.len() - 1
        }
    }
}

impl<T> Default for DoubleList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Double-ended iterator over list elements, front to back
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a DoubleList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front?;
        let node = self.list.nodes[idx].as_ref()?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back?;
        let node = self.list.nodes[idx].as_ref()?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &DoubleList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_list_insert_order() {
        let mut list = DoubleList::new();

        list.insert_tail(2);
        list.insert_tail(3);
        list.insert_head(1);

        assert_eq!(collect(&list), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());
    }

    #[test]
    fn test_list_delete_ends() {
        let mut list = DoubleList::new();

        list.insert_tail(1);
        list.insert_tail(2);
        list.insert_tail(3);

        list.delete_head();
        assert_eq!(collect(&list), vec![2, 3]);

        list.delete_tail();
        assert_eq!(collect(&list), vec![2]);

        list.delete_tail();
        assert!(list.is_empty());

        // No-ops on empty
        list.delete_head();
        list.delete_tail();
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_list_erase_returns_successor() {
        let mut list = DoubleList::new();

        list.insert_tail(1);
        let middle = list.insert_tail(2);
        let last = list.insert_tail(3);

        let after = list.erase(middle);
        assert_eq!(after, last);
        assert_eq!(list.get(after).copied(), Ok(3));
        assert_eq!(collect(&list), vec![1, 3]);

        // Erasing the last element yields end
        let after = list.erase(last);
        assert!(after.is_end());
        assert_eq!(collect(&list), vec![1]);
    }

    #[test]
    fn test_list_erase_end_is_noop() {
        let mut list = DoubleList::new();
        list.insert_tail(1);

        let after = list.erase(Position::end());
        assert!(after.is_end());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_list_position_invalidated_by_erase() {
        let mut list = DoubleList::new();

        let pos = list.insert_tail(10);
        list.insert_tail(20);

        assert_eq!(list.get(pos).copied(), Ok(10));
        list.erase(pos);

        assert_eq!(list.get(pos), Err(Error::InvalidIterator));
        assert_eq!(list.next(pos), Err(Error::InvalidIterator));
        assert!(list.erase(pos).is_end());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_list_position_survives_unrelated_mutation() {
        let mut list = DoubleList::new();

        let a = list.insert_tail(1);
        let b = list.insert_tail(2);
        let c = list.insert_tail(3);

        list.erase(b);
        list.insert_head(0);

        assert_eq!(list.get(a).copied(), Ok(1));
        assert_eq!(list.get(c).copied(), Ok(3));
    }

    #[test]
    fn test_list_stepping() {
        let mut list = DoubleList::new();

        let first = list.insert_tail(1);
        let second = list.insert_tail(2);

        assert_eq!(list.next(first), Ok(second));
        assert_eq!(list.prev(second), Ok(first));

        // Advancing the tail reaches end
        assert_eq!(list.next(second), Ok(Position::end()));

        // Stepping end or before-head fails
        assert_eq!(list.next(Position::end()), Err(Error::InvalidIterator));
        assert_eq!(list.prev(first), Err(Error::InvalidIterator));
    }

    #[test]
    fn test_list_get_mut() {
        let mut list = DoubleList::new();
        let pos = list.insert_tail(1);

        *list.get_mut(pos).unwrap() = 42;
        assert_eq!(list.get(pos).copied(), Ok(42));

        assert_eq!(list.get_mut(Position::end()).err(), Some(Error::InvalidIterator));
    }

    #[test]
    fn test_list_take() {
        let mut list = DoubleList::new();

        list.insert_tail(1);
        let pos = list.insert_tail(2);
        list.insert_tail(3);

        assert_eq!(list.take(pos), Some(2));
        assert_eq!(list.take(pos), None);
        assert_eq!(list.take(Position::end()), None);
        assert_eq!(collect(&list), vec![1, 3]);
    }

    #[test]
    fn test_list_slot_reuse() {
        let mut list = DoubleList::new();

        let a = list.insert_tail(1);
        list.insert_tail(2);
        list.erase(a);

        // Reuses the freed slot without disturbing the survivor
        list.insert_tail(3);
        assert_eq!(collect(&list), vec![2, 3]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_list_reverse_iteration() {
        let mut list = DoubleList::new();

        list.insert_tail(1);
        list.insert_tail(2);
        list.insert_tail(3);

        let backwards: Vec<i32> = list.iter().rev().copied().collect();
        assert_eq!(backwards, vec![3, 2, 1]);

        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_list_clone_is_deep() {
        let mut list = DoubleList::new();
        list.insert_tail(1);
        list.insert_tail(2);

        let mut copy = list.clone();
        copy.insert_tail(3);
        copy.delete_head();

        assert_eq!(collect(&list), vec![1, 2]);
        assert_eq!(copy.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_list_clear() {
        let mut list = DoubleList::new();
        let pos = list.insert_tail(1);
        list.insert_tail(2);

        list.clear();

        assert!(list.is_empty());
        assert!(list.head_position().is_end());
        assert!(list.tail_position().is_end());
        assert_eq!(list.get(pos), Err(Error::InvalidIterator));
    }
}
