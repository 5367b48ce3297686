//! Singly-linked list with slab-backed node storage.
//!
//! Nodes live in a [`slab::Slab`] arena and link to each other through integer
//! indices, so the chain costs one allocation pool instead of one heap box per
//! node, and removed slots are recycled by later insertions. The list keeps a
//! head index only; there is no cached tail, so back-of-list operations walk
//! the chain.
//!
//! # Structure Invariant
//!
//! The chain is acyclic and finite. Every index reachable from `head` is
//! occupied in the slab, the terminal node's `next` is the [`Index`] sentinel,
//! and no occupied slot exists outside the chain. Dropping the list drops the
//! slab, reclaiming every remaining node at once.
//!
//! # Example
//!
//! ```
//! use forward_list::{ForwardList, ListError};
//!
//! let mut list: ForwardList = ForwardList::new();
//!
//! list.push_back(10);
//! list.push_back(20);
//! list.push_front(5);
//!
//! let values: Vec<_> = list.iter().collect();
//! assert_eq!(values, vec![5, 10, 20]);
//!
//! // Positional splicing around a located value
//! list.insert_after(10, 15).unwrap();
//! assert_eq!(list.find_index(15), Ok(3)); // 1-based
//!
//! // Failures are values, and never mutate the list
//! assert_eq!(list.remove_value(99), Err(ListError::NotFound));
//! assert_eq!(list.len(), 4);
//! ```

use slab::Slab;

use crate::{Index, ListError};

/// A chain element: one integer payload plus the index of its successor.
#[derive(Debug)]
struct Node<Idx> {
    value: i64,
    next: Idx,
}

/// Outcome of a successful value search: the matching node, its predecessor
/// (sentinel when the match is the head), and its 1-based position.
struct Located<Idx> {
    prev: Idx,
    node: Idx,
    index: usize,
}

/// A singly-linked list of `i64` values over slab storage.
///
/// External access goes through the head only. Front operations are O(1);
/// back operations and value searches are O(n).
///
/// The index type defaults to `u32`; a narrower type shrinks the per-node
/// footprint when the list is known to stay small. The sentinel value is
/// reserved, so an index type admits at most `Idx::NONE.as_usize()` live
/// nodes (255 for `u8`, ~4 billion for `u32`); inserting beyond that limit
/// panics.
///
/// # Example
///
/// ```
/// use forward_list::ForwardList;
///
/// let mut list: ForwardList = ForwardList::new();
///
/// list.push_back(1);
/// list.push_back(2);
/// list.push_back(3);
///
/// assert_eq!(list.pop_front(), Ok(1));
/// assert_eq!(list.pop_back(), Ok(3));
/// assert_eq!(list.len(), 1);
/// ```
pub struct ForwardList<Idx: Index = u32> {
    nodes: Slab<Node<Idx>>,
    head: Idx,
    len: usize,
}

impl<Idx: Index> ForwardList<Idx> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: Idx::NONE,
            len: 0,
        }
    }

    /// Creates an empty list with pre-allocated slots for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: Idx::NONE,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of nodes the slab can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the first element without removing it.
    #[inline]
    pub fn front(&self) -> Option<i64> {
        if self.head.is_none() {
            return None;
        }
        Some(self.nodes[self.head.as_usize()].value)
    }

    /// Returns the last element without removing it. O(n).
    pub fn back(&self) -> Option<i64> {
        if self.head.is_none() {
            return None;
        }
        Some(self.nodes[self.tail_index().as_usize()].value)
    }

    /// Pushes a value to the front of the list. O(1).
    ///
    /// # Panics
    ///
    /// Panics if the list already holds `Idx::NONE.as_usize()` nodes.
    pub fn push_front(&mut self, value: i64) {
        let idx = self.alloc(value, self.head);
        self.head = idx;
        self.len += 1;
    }

    /// Pushes a value to the back of the list.
    ///
    /// O(n): walks to the current tail, since only the head is cached.
    ///
    /// # Panics
    ///
    /// Panics if the list already holds `Idx::NONE.as_usize()` nodes.
    pub fn push_back(&mut self, value: i64) {
        let idx = self.alloc(value, Idx::NONE);
        if self.head.is_none() {
            self.head = idx;
        } else {
            let tail = self.tail_index();
            self.nodes[tail.as_usize()].next = idx;
        }
        self.len += 1;
    }

    /// Removes and returns the first element. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] if the list has no elements.
    pub fn pop_front(&mut self) -> Result<i64, ListError> {
        if self.head.is_none() {
            return Err(ListError::Empty);
        }
        let node = self.nodes.remove(self.head.as_usize());
        self.head = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    /// Removes and returns the last element. O(n).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] if the list has no elements.
    pub fn pop_back(&mut self) -> Result<i64, ListError> {
        if self.head.is_none() {
            return Err(ListError::Empty);
        }

        // Walk to the tail, tracking its predecessor.
        let mut prev = Idx::NONE;
        let mut cur = self.head;
        loop {
            let next = self.nodes[cur.as_usize()].next;
            if next.is_none() {
                break;
            }
            prev = cur;
            cur = next;
        }

        let node = self.nodes.remove(cur.as_usize());
        if prev.is_none() {
            // Sole element removed, the list is empty again.
            self.head = Idx::NONE;
        } else {
            self.nodes[prev.as_usize()].next = Idx::NONE;
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Returns the 1-based position of the first node holding `value`.
    ///
    /// Linear scan from the head; with duplicate values the lowest index wins.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] on an empty list and [`ListError::NotFound`]
    /// when `value` is absent from a non-empty one. Valid positions are always
    /// >= 1, so neither failure overlaps a real index.
    ///
    /// # Example
    ///
    /// ```
    /// use forward_list::{ForwardList, ListError};
    ///
    /// let mut list: ForwardList = ForwardList::new();
    /// assert_eq!(list.find_index(7), Err(ListError::Empty));
    ///
    /// list.push_back(5);
    /// list.push_back(7);
    /// list.push_back(7);
    ///
    /// assert_eq!(list.find_index(7), Ok(2));
    /// assert_eq!(list.find_index(9), Err(ListError::NotFound));
    /// ```
    pub fn find_index(&self, value: i64) -> Result<usize, ListError> {
        self.locate(value).map(|found| found.index)
    }

    /// Returns `true` if `value` occurs anywhere in the list.
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.locate(value).is_ok()
    }

    /// Inserts `value` immediately before the first node holding `search`.
    ///
    /// When the located node is the head, the new node becomes the head.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] or [`ListError::NotFound`] per
    /// [`find_index`](Self::find_index) semantics; on failure the list is
    /// unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the list already holds `Idx::NONE.as_usize()` nodes.
    pub fn insert_before(&mut self, search: i64, value: i64) -> Result<(), ListError> {
        let found = self.locate(search)?;
        let idx = self.alloc(value, found.node);
        if found.prev.is_none() {
            self.head = idx;
        } else {
            self.nodes[found.prev.as_usize()].next = idx;
        }
        self.len += 1;
        Ok(())
    }

    /// Inserts `value` immediately after the first node holding `search`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] or [`ListError::NotFound`] per
    /// [`find_index`](Self::find_index) semantics; on failure the list is
    /// unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the list already holds `Idx::NONE.as_usize()` nodes.
    pub fn insert_after(&mut self, search: i64, value: i64) -> Result<(), ListError> {
        let found = self.locate(search)?;
        let old_next = self.nodes[found.node.as_usize()].next;
        let idx = self.alloc(value, old_next);
        self.nodes[found.node.as_usize()].next = idx;
        self.len += 1;
        Ok(())
    }

    /// Unlinks and frees the first node holding `value`, returning the value.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] or [`ListError::NotFound`] per
    /// [`find_index`](Self::find_index) semantics; on failure the list is
    /// unchanged.
    pub fn remove_value(&mut self, value: i64) -> Result<i64, ListError> {
        let found = self.locate(value)?;
        let node = self.nodes.remove(found.node.as_usize());
        if found.prev.is_none() {
            self.head = node.next;
        } else {
            self.nodes[found.prev.as_usize()].next = node.next;
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Drops every node at once. The slab's capacity is retained.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = Idx::NONE;
        self.len = 0;
    }

    /// Returns an iterator over the values from head to tail.
    ///
    /// The iterator is lazy and restartable; calling `iter` again without
    /// mutation yields the same sequence.
    pub fn iter(&self) -> Iter<'_, Idx> {
        Iter {
            nodes: &self.nodes,
            cur: self.head,
        }
    }

    /// Returns an iterator over the values from tail to head.
    ///
    /// The traversal order is captured as an index stack up front (no
    /// recursion, no link mutation), then unwound lazily.
    pub fn iter_rev(&self) -> IterRev<'_, Idx> {
        let mut stack = Vec::with_capacity(self.len);
        let mut cur = self.head;
        while cur.is_some() {
            stack.push(cur);
            cur = self.nodes[cur.as_usize()].next;
        }
        IterRev {
            nodes: &self.nodes,
            stack,
        }
    }

    /// Allocates a slab slot for a new node, returning its index.
    ///
    /// # Panics
    ///
    /// Panics if the slab hands out the reserved sentinel key, i.e. the list
    /// already holds `Idx::NONE.as_usize()` nodes. The freshly inserted entry
    /// is removed first, so the list is structurally unchanged.
    fn alloc(&mut self, value: i64, next: Idx) -> Idx {
        let key = self.nodes.insert(Node { value, next });
        if key >= Idx::NONE.as_usize() {
            self.nodes.remove(key);
            panic!(
                "list is full: index type admits at most {} nodes",
                Idx::NONE.as_usize()
            );
        }
        Idx::from_usize(key)
    }

    /// Walks to the terminal node. Caller guarantees the list is non-empty.
    fn tail_index(&self) -> Idx {
        let mut cur = self.head;
        loop {
            let next = self.nodes[cur.as_usize()].next;
            if next.is_none() {
                return cur;
            }
            cur = next;
        }
    }

    /// Linear scan for the first node holding `value`, carrying the
    /// predecessor link so splices need no second traversal.
    fn locate(&self, value: i64) -> Result<Located<Idx>, ListError> {
        if self.head.is_none() {
            return Err(ListError::Empty);
        }
        let mut prev = Idx::NONE;
        let mut cur = self.head;
        let mut index = 1;
        while cur.is_some() {
            let node = &self.nodes[cur.as_usize()];
            if node.value == value {
                return Ok(Located {
                    prev,
                    node: cur,
                    index,
                });
            }
            prev = cur;
            cur = node.next;
            index += 1;
        }
        Err(ListError::NotFound)
    }
}

impl<Idx: Index> Default for ForwardList<Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Idx: Index> core::fmt::Debug for ForwardList<Idx> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Forward iterator over list values.
pub struct Iter<'a, Idx: Index> {
    nodes: &'a Slab<Node<Idx>>,
    cur: Idx,
}

impl<Idx: Index> Iterator for Iter<'_, Idx> {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cur.is_none() {
            return None;
        }
        let node = &self.nodes[self.cur.as_usize()];
        self.cur = node.next;
        Some(node.value)
    }
}

/// Reverse iterator over list values.
///
/// Holds the chain's index order captured at construction; the underlying
/// list is borrowed immutably for the iterator's lifetime.
pub struct IterRev<'a, Idx: Index> {
    nodes: &'a Slab<Node<Idx>>,
    stack: Vec<Idx>,
}

impl<Idx: Index> Iterator for IterRev<'_, Idx> {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        Some(self.nodes[idx.as_usize()].value)
    }
}
