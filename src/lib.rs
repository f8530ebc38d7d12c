//! # Ring Deque
//!
//! A growable double-ended queue backed by a circular buffer, with O(1)
//! amortized insertion and removal at both ends and O(1) access to both ends.
//!
//! `RingDeque` keeps its elements in a ring of tagged slots. Two cursors chase
//! each other around the ring as elements are pushed and popped; when an
//! insertion finds the ring full, the storage doubles and the live elements
//! are relaid contiguously from the start of the new allocation.
//!
//! ## Key Features
//!
//! * **Deque semantics:** Push and pop at either end, so the same container
//!   serves as a FIFO queue, a LIFO stack, or a sliding window.
//! * **Amortized O(1) growth:** Capacity doubles on demand and never shrinks,
//!   starting from a floor of 16 slots.
//! * **Prompt ownership release:** A removed element's slot is cleared
//!   immediately, so its drop runs at pop time rather than at deque teardown.
//! * **Interoperability:** The [`Deque`] trait abstracts over `RingDeque` and
//!   `std::collections::VecDeque`, so callers can swap implementations.
//!
//! `RingDeque` is a single-owner container: it holds no locks and is not safe
//! for unsynchronized concurrent mutation. Callers sharing one across threads
//! must wrap it in external synchronization.
//!
//! ## Examples
//!
//! ### Queue (FIFO)
//!
//! ```rust
//! use ring_deque::RingDeque;
//!
//! let mut queue = RingDeque::new();
//! queue.push_back("a");
//! queue.push_back("b");
//! queue.push_back("c");
//!
//! assert_eq!(queue.pop_front(), Some("a"));
//! assert_eq!(queue.pop_front(), Some("b"));
//! assert_eq!(queue.pop_front(), Some("c"));
//! assert_eq!(queue.pop_front(), None);
//! ```
//!
//! ### Deque
//!
//! ```rust
//! use ring_deque::RingDeque;
//!
//! let mut deque = RingDeque::new();
//! deque.push_back(1);
//! deque.push_back(2);
//! deque.push_front(0);
//!
//! assert_eq!(deque.len(), 3);
//! assert_eq!(deque.front(), Some(&0));
//! assert_eq!(deque.back(), Some(&2));
//!
//! assert_eq!(deque.pop_back(), Some(2));
//! assert_eq!(deque.pop_front(), Some(0));
//! ```
//!
//! ### Growth past the initial capacity
//!
//! ```rust
//! use ring_deque::RingDeque;
//!
//! // Requests below the floor are clamped up to 16 slots.
//! let mut deque = RingDeque::with_capacity(0);
//! assert_eq!(deque.capacity(), 16);
//!
//! for i in 0..100 {
//!     deque.push_back(i);
//! }
//! assert!(deque.capacity() >= 100);
//! assert_eq!(deque.pop_front(), Some(0));
//! ```

// --- Module Declarations ---

pub mod deque;

// --- Re-exports ---

pub use deque::{Deque, IntoIter, Iter, RingDeque};
