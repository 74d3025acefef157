//! # Static Range Tree
//!
//! Answers "combine every element in `[lo, hi]`" for a fixed sequence in
//! O(log n) time after a single O(n) build.
//!
//! ## Core Algorithm
//!
//! 1. **Midpoint recursion**: node `[l, r]` splits at `m = l + (r - l) / 2`
//! 2. **Flat storage**: node at slot `i` has children at `2i + 1`, `2i + 2`
//! 3. **Pruned descent**: covered nodes answer from their slot, disjoint
//!    nodes answer with the neutral element, partial overlaps recurse
//!
//! ## Usage Example
//!
//! ```
//! use range_tree::{Combiner, RangeTree};
//!
//! let tree = RangeTree::build(vec![1, 2, 3, 4, 5, 6], Combiner::min()).unwrap();
//! assert_eq!(tree.get(2, 4).unwrap(), 3);
//!
//! let tree = RangeTree::new(vec![6, 5, 4, 3, 2, 1]).unwrap();
//! assert_eq!(tree.get(1, 3).unwrap(), 12);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod algebra; // Combining operations
pub mod tree; // Implicit tree, build and query

pub use algebra::{CombineFn, Combiner};
pub use tree::{RangeTree, TreeNode};

use thiserror::Error;

/// Errors reported by range tree construction, queries and updates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeTreeError {
    /// Construction from a sequence with no elements
    #[error("cannot build a range tree from an empty sequence")]
    EmptyInput,

    /// Query against a tree holding no elements
    #[error("cannot run a range query on an empty tree")]
    EmptyStructure,

    /// Query range outside `[0, len - 1]` or inverted
    #[error("invalid range [{lo}, {hi}] for {len} elements")]
    InvalidRange {
        /// Requested lower bound (inclusive)
        lo: usize,
        /// Requested upper bound (inclusive)
        hi: usize,
        /// Number of elements in the tree
        len: usize,
    },

    /// Update position outside `[0, len - 1]`
    #[error("index {index} out of range for {len} elements")]
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Number of elements in the tree
        len: usize,
    },
}
