//! # linkdeque
//!
//! Mutable, index-addressable double-ended queue of integers backed by a
//! doubly-linked list.
//!
//! ## Architecture
//! - **Slab nodes**: every node lives in a `Vec` slab and links to its
//!   neighbors by slot index, so the deque owns the whole chain
//! - **Signed indexing**: negative indices count from the tail (`-1` is
//!   the last element), resolved the same way everywhere an index is taken
//! - **Cached ends**: head and tail slots are tracked, making both-end
//!   insertion and removal O(1)
//!
//! Single-threaded and synchronous by design; wrap a [`Deque`] in a lock
//! if it must be shared across threads.

#![warn(missing_docs)]

mod deque;
mod error;

pub use deque::Deque;
pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
