//! D-ary Heap Priority Queue for Rust
//!
//! This crate provides an array-backed d-ary heap: the binary-heap
//! generalization in which every node has up to `D` children, with `D` chosen
//! at compile time to trade insertion speed against extraction speed.
//!
//! # Features
//!
//! - **Tunable branching factor**: `D` is a const generic; a flatter tree
//!   makes sift-up shorter (faster `push`) while widening the child scan that
//!   sift-down pays (slower `pop`)
//! - **Injected ordering**: comparators are strategies, not an `Ord` bound on
//!   the container; min-heaps, max-heaps, key-extracted and stateful orders
//!   all use the same type
//! - **Hole-based sifting**: restructuring moves each displaced element once
//!   instead of swapping pairwise, halving writes to the buffer
//! - **O(n) bulk build**: build a heap from an existing `Vec` without paying
//!   n sift-ups
//! - **Arbitrary-slot surgery**: `remove_at` and `update` restructure from
//!   any index in O(D · log_D n)
//! - **Fallible allocation**: `try_push`, `try_with_capacity`,
//!   `try_shrink_to_fit` report [`HeapError`] instead of aborting
//!
//! # Example
//!
//! ```rust
//! use rust_dary_heap::DaryHeap;
//!
//! let mut heap: DaryHeap<i32, 4> = DaryHeap::new();
//! heap.push(5);
//! heap.push(1);
//! heap.push(3);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), Some(5));
//! ```
//!
//! Reversing the comparator turns the min-heap into a max-heap:
//!
//! ```rust
//! use rust_dary_heap::MaxHeap;
//!
//! let mut heap: MaxHeap<i32, 8> = MaxHeap::new();
//! heap.extend([2, 9, 4]);
//! assert_eq!(heap.pop(), Some(9));
//! ```

pub mod compare;
pub mod dary;

// Re-export the main types for convenience
pub use compare::{ByKey, Compare, NaturalOrder, Reversed};
pub use dary::{DaryHeap, HeapError, MaxHeap, MinHeap, PeekMut};
