//! Doubly-linked deque implementation
//!
//! Uses a slab of slot-indexed nodes, so the deque owns the whole
//! chain and no reference cycles exist.

use crate::error::{Error, Result};

/// Node in the doubly-linked chain
struct Node {
    value: i64,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Double-ended queue of integers with signed positional indexing.
///
/// Negative indices count from the tail: `-1` is the last element,
/// `-len` the first. Indices are taken as `i128` so that arbitrarily
/// large out-of-range requests are rejected without overflow.
pub struct Deque {
    nodes: Vec<Option<Node>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl Deque {
    /// Create a new empty deque
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of elements in the deque
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the deque is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a value at the tail
    pub fn append(&mut self, value: i64) {
        let slot = self.alloc_node(value, self.tail, None);

        match self.tail {
            Some(tail_slot) => {
                if let Some(tail) = &mut self.nodes[tail_slot] {
                    tail.next = Some(slot);
                }
            }
            None => {
                self.head = Some(slot);
            }
        }

        self.tail = Some(slot);
        self.len += 1;
    }

    /// Prepend a value at the head
    pub fn append_left(&mut self, value: i64) {
        let slot = self.alloc_node(value, None, self.head);

        match self.head {
            Some(head_slot) => {
                if let Some(head) = &mut self.nodes[head_slot] {
                    head.prev = Some(slot);
                }
            }
            None => {
                self.tail = Some(slot);
            }
        }

        self.head = Some(slot);
        self.len += 1;
    }

    /// Append every value in order at the tail.
    ///
    /// An empty input is a no-op.
    pub fn extend(&mut self, values: impl IntoIterator<Item = i64>) {
        for value in values {
            self.append(value);
        }
    }

    /// Prepend every value at the head, one element at a time.
    ///
    /// Each value is prepended in input order, so `extend_left([1, 2, 3])`
    /// on an empty deque yields `[3, 2, 1]` head to tail. This is NOT the
    /// reverse-then-block-prepend convention some deque libraries use.
    pub fn extend_left(&mut self, values: impl IntoIterator<Item = i64>) {
        for value in values {
            self.append_left(value);
        }
    }

    /// Get the value at a signed index
    pub fn get(&self, index: i128) -> Result<i64> {
        let slot = self.resolve(index)?;
        match &self.nodes[slot] {
            Some(node) => Ok(node.value),
            None => Err(Error::OutOfRange {
                index,
                len: self.len,
            }),
        }
    }

    /// Overwrite the value at a signed index in place
    pub fn set(&mut self, index: i128, value: i64) -> Result<()> {
        let slot = self.resolve(index)?;
        if let Some(node) = &mut self.nodes[slot] {
            node.value = value;
        }
        Ok(())
    }

    /// Forward position of the first occurrence of `value`, or `-1`.
    ///
    /// Always scans head to tail; absence is a sentinel, not an error.
    pub fn index_of(&self, value: i64) -> i64 {
        let mut slot = self.head;
        let mut index = 0;

        while let Some(current) = slot {
            match &self.nodes[current] {
                Some(node) if node.value == value => return index,
                Some(node) => slot = node.next,
                None => break,
            }
            index += 1;
        }

        -1
    }

    /// Insert a value so it becomes the element at `index`.
    ///
    /// Index 0 always prepends, even on an empty deque. Any other index
    /// links the new node after the node resolved at `index - 1`, so
    /// `insert(len, v)` appends and negative indices resolve from the
    /// tail. Fails with [`Error::OutOfRange`] when `index - 1` does not
    /// resolve.
    pub fn insert(&mut self, index: i128, value: i64) -> Result<()> {
        if index == 0 {
            self.append_left(value);
            return Ok(());
        }

        // Saturating: anything at i128::MIN is out of range regardless
        let pred = self.resolve(index.saturating_sub(1))?;
        let succ = self.nodes[pred].as_ref().and_then(|node| node.next);

        let slot = self.alloc_node(value, Some(pred), succ);

        if let Some(node) = &mut self.nodes[pred] {
            node.next = Some(slot);
        }

        match succ {
            Some(succ_slot) => {
                if let Some(node) = &mut self.nodes[succ_slot] {
                    node.prev = Some(slot);
                }
            }
            None => {
                self.tail = Some(slot);
            }
        }

        self.len += 1;
        Ok(())
    }

    /// Remove the first occurrence of `value`, scanning head to tail.
    ///
    /// Returns `Ok(true)` if a node was removed, `Ok(false)` if no node
    /// matched, and [`Error::Empty`] if the deque held no elements at
    /// call time.
    pub fn remove(&mut self, value: i64) -> Result<bool> {
        if self.len == 0 {
            return Err(Error::Empty);
        }

        let mut slot = self.head;
        while let Some(current) = slot {
            match &self.nodes[current] {
                Some(node) if node.value == value => {
                    self.detach(current);
                    return Ok(true);
                }
                Some(node) => slot = node.next,
                None => break,
            }
        }

        Ok(false)
    }

    /// Remove and return the tail value
    pub fn pop(&mut self) -> Result<i64> {
        match self.tail {
            Some(slot) => self.detach(slot).ok_or(Error::Empty),
            None => Err(Error::Empty),
        }
    }

    /// Remove and return the head value
    pub fn pop_left(&mut self) -> Result<i64> {
        match self.head {
            Some(slot) => self.detach(slot).ok_or(Error::Empty),
            None => Err(Error::Empty),
        }
    }

    /// Remove all elements
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Resolve a signed index to the slot holding that position.
    ///
    /// Negative indices are normalized against the current length; the
    /// range check happens in `i128` before any narrowing, so huge
    /// indices of either sign cannot overflow.
    fn resolve(&self, index: i128) -> Result<usize> {
        let len = self.len as i128;
        let effective = if index < 0 { len + index } else { index };

        if effective < 0 || effective >= len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }

        let mut slot = match self.head {
            Some(slot) => slot,
            None => {
                return Err(Error::OutOfRange {
                    index,
                    len: self.len,
                })
            }
        };

        for _ in 0..effective {
            match self.nodes[slot].as_ref().and_then(|node| node.next) {
                Some(next) => slot = next,
                None => {
                    return Err(Error::OutOfRange {
                        index,
                        len: self.len,
                    })
                }
            }
        }

        Ok(slot)
    }

    /// Unlink a slot, release it, and return its value
    fn detach(&mut self, slot: usize) -> Option<i64> {
        self.unlink(slot);
        let node = self.nodes[slot].take()?;
        self.free.push(slot);
        self.len -= 1;
        Some(node.value)
    }

    fn unlink(&mut self, slot: usize) {
        let (prev, next) = match &self.nodes[slot] {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_slot) => {
                if let Some(prev_node) = &mut self.nodes[prev_slot] {
                    prev_node.next = next;
                }
            }
            None => {
                self.head = next;
            }
        }

        match next {
            Some(next_slot) => {
                if let Some(next_node) = &mut self.nodes[next_slot] {
                    next_node.prev = prev;
                }
            }
            None => {
                self.tail = prev;
            }
        }
    }

    fn alloc_node(&mut self, value: i64, prev: Option<usize>, next: Option<usize>) -> usize {
        let node = Node { value, prev, next };
        if let Some(slot) = self.free.pop() {
            self.nodes[slot] = Some(node);
            slot
        } else {
            self.nodes.push(Some(node));
            self.nodes.len() - 1
        }
    }
}

impl Default for Deque {
    fn default() -> Self {
        Self::new()
    }
}
