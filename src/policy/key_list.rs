//! Insertion-ordered key set with O(1) updates.
//!
//! `KeyList` is a doubly linked list threaded through a `HashMap`: each
//! resident key maps to its neighbours, so membership, removal from the
//! middle, and moving a key to the back are all constant time.
//!
//! ```text
//!   links: HashMap<Key, Links>
//!
//!   head ─► [k1] ◄──► [k2] ◄──► [k3] ◄── tail
//!          oldest                newest
//! ```
//!
//! Every policy builds its ordering on this type: LRU keeps one list in
//! recency order, LFU keeps one list per frequency bucket, ARC keeps T1/T2.

use std::collections::HashMap;

use crate::common::Key;

#[derive(Debug, Clone, Copy)]
struct Links {
    prev: Option<Key>,
    next: Option<Key>,
}

/// An ordered set of keys, front = oldest insertion.
#[derive(Debug, Clone, Default)]
pub struct KeyList {
    links: HashMap<Key, Links>,
    head: Option<Key>,
    tail: Option<Key>,
}

impl KeyList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    #[inline]
    pub fn contains(&self, key: Key) -> bool {
        self.links.contains_key(&key)
    }

    /// The oldest key, if any.
    #[inline]
    pub fn front(&self) -> Option<Key> {
        self.head
    }

    /// Append `key` at the back.
    ///
    /// Returns `false` (and leaves the list untouched) if the key is
    /// already present.
    pub fn push_back(&mut self, key: Key) -> bool {
        if self.links.contains_key(&key) {
            return false;
        }

        match self.tail {
            Some(tail) => {
                if let Some(links) = self.links.get_mut(&tail) {
                    links.next = Some(key);
                }
            }
            None => self.head = Some(key),
        }

        self.links.insert(
            key,
            Links {
                prev: self.tail,
                next: None,
            },
        );
        self.tail = Some(key);
        true
    }

    /// Unlink `key` from wherever it sits. Returns `false` if absent.
    pub fn remove(&mut self, key: Key) -> bool {
        let Some(removed) = self.links.remove(&key) else {
            return false;
        };

        match removed.prev {
            Some(prev) => {
                if let Some(links) = self.links.get_mut(&prev) {
                    links.next = removed.next;
                }
            }
            None => self.head = removed.next,
        }

        match removed.next {
            Some(next) => {
                if let Some(links) = self.links.get_mut(&next) {
                    links.prev = removed.prev;
                }
            }
            None => self.tail = removed.prev,
        }

        true
    }

    /// Remove and return the oldest key.
    pub fn pop_front(&mut self) -> Option<Key> {
        let key = self.head?;
        self.remove(key);
        Some(key)
    }

    /// Move an existing key to the back. Returns `false` if absent.
    pub fn move_to_back(&mut self, key: Key) -> bool {
        if self.tail == Some(key) {
            return true;
        }
        if !self.remove(key) {
            return false;
        }
        self.push_back(key)
    }

    /// Iterate from oldest to newest. Use `.rev()` for newest first.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }
}

/// Iterator over a [`KeyList`], oldest first.
#[derive(Debug)]
pub struct Iter<'a> {
    list: &'a KeyList,
    front: Option<Key>,
    back: Option<Key>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.front?;
        self.front = self.list.links.get(&key).and_then(|links| links.next);
        self.remaining -= 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Key> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.back?;
        self.back = self.list.links.get(&key).and_then(|links| links.prev);
        self.remaining -= 1;
        Some(key)
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &KeyList) -> Vec<u64> {
        list.iter().map(|k| k.0).collect()
    }

    #[test]
    fn test_push_back_keeps_insertion_order() {
        let mut list = KeyList::new();
        assert!(list.push_back(Key(1)));
        assert!(list.push_back(Key(2)));
        assert!(list.push_back(Key(3)));

        assert_eq!(collect(&list), vec![1, 2, 3]);
        assert_eq!(list.front(), Some(Key(1)));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_push_back_rejects_duplicates() {
        let mut list = KeyList::new();
        assert!(list.push_back(Key(7)));
        assert!(!list.push_back(Key(7)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_head_middle_tail() {
        let mut list = KeyList::new();
        for k in 1..=5 {
            list.push_back(Key(k));
        }

        assert!(list.remove(Key(3)));
        assert_eq!(collect(&list), vec![1, 2, 4, 5]);

        assert!(list.remove(Key(1)));
        assert_eq!(collect(&list), vec![2, 4, 5]);

        assert!(list.remove(Key(5)));
        assert_eq!(collect(&list), vec![2, 4]);

        assert!(!list.remove(Key(99)));
    }

    #[test]
    fn test_pop_front_drains_in_order() {
        let mut list = KeyList::new();
        list.push_back(Key(10));
        list.push_back(Key(20));

        assert_eq!(list.pop_front(), Some(Key(10)));
        assert_eq!(list.pop_front(), Some(Key(20)));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_move_to_back() {
        let mut list = KeyList::new();
        for k in 1..=3 {
            list.push_back(Key(k));
        }

        assert!(list.move_to_back(Key(1)));
        assert_eq!(collect(&list), vec![2, 3, 1]);

        // Already at the back: no-op
        assert!(list.move_to_back(Key(1)));
        assert_eq!(collect(&list), vec![2, 3, 1]);

        assert!(!list.move_to_back(Key(42)));
    }

    #[test]
    fn test_reverse_iteration() {
        let mut list = KeyList::new();
        for k in 1..=4 {
            list.push_back(Key(k));
        }
        let rev: Vec<u64> = list.iter().rev().map(|k| k.0).collect();
        assert_eq!(rev, vec![4, 3, 2, 1]);
        assert_eq!(list.iter().len(), 4);
    }

    #[test]
    fn test_single_element_links() {
        let mut list = KeyList::new();
        list.push_back(Key(1));
        assert!(list.remove(Key(1)));
        assert_eq!(list.front(), None);

        // List is reusable after being emptied
        list.push_back(Key(2));
        assert_eq!(collect(&list), vec![2]);
    }
}
