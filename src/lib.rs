//! Slab-backed singly-linked integer list.
//!
//! A classic head-only linked list, rebuilt on arena storage: nodes live in a
//! [`slab::Slab`] and link to each other through integer indices instead of
//! heap pointers.
//!
//! ```text
//! Box<Node> chain   - one allocation per node, pointer chasing across the heap
//! Slab<Node> chain  - one backing allocation, links are u32 indices
//! ```
//!
//! Benefits:
//! - **No per-node allocation churn**: removed slots are recycled by the slab's
//!   free list
//! - **Deterministic teardown**: dropping the list drops the slab, freeing every
//!   remaining node at once with no recursive destructor
//! - **Compact links**: a `u32` (or narrower) index in place of a pointer-sized
//!   `Option<Box<Node>>`
//!
//! # Quick Start
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
//! assert_eq!(list.iter().collect::<Vec<_>>(), vec![5, 10, 20]);
//! assert_eq!(list.iter_rev().collect::<Vec<_>>(), vec![20, 10, 5]);
//!
//! // Search is 1-based; splices locate their target by value
//! assert_eq!(list.find_index(10), Ok(2));
//! list.insert_after(10, 15).unwrap();
//!
//! // Expected failures come back as values, never panics
//! assert_eq!(list.remove_value(99), Err(ListError::NotFound));
//! assert_eq!(list.pop_front(), Ok(5));
//! ```
//!
//! # Error Model
//!
//! [`ListError::Empty`] and [`ListError::NotFound`] are the only recoverable
//! failures, and a failed operation never leaves the list partially mutated.
//! Allocation failure is out of scope (it aborts, as with any Rust container).
//!
//! # Concurrency
//!
//! None. The list is a single-threaded value type; callers own it exclusively
//! and operations run to completion.

#![warn(missing_docs)]

pub mod error;
pub mod index;
pub mod list;

pub use error::ListError;
pub use index::Index;
pub use list::{ForwardList, Iter, IterRev};
