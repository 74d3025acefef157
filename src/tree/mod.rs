//! Static range tree over a fixed sequence
//!
//! Implicit representation: only aggregates are stored, in a flat array.
//! Node intervals and child slots are computed on demand from the root.

mod node;
mod traversal;

pub use node::TreeNode;

use std::ops::{Bound, RangeBounds};

use tracing::{debug, trace};

use crate::{algebra::Combiner, RangeTreeError};

/// Range-aggregate tree
///
/// Built once from a non-empty sequence; answers `combine` over any closed
/// index range `[lo, hi]` in O(log n).
#[derive(Debug, Clone)]
pub struct RangeTree<T> {
    /// Backing sequence (owned copy of the caller's input)
    values: Vec<T>,

    /// Aggregate per node, indexed by `TreeNode::slot`
    slots: Vec<T>,

    /// Operation and identity the aggregates were computed with
    combiner: Combiner<T>,
}

impl<T: Clone> RangeTree<T> {
    /// Build a tree that sums ranges.
    pub fn new(values: impl Into<Vec<T>>) -> Result<Self, RangeTreeError>
    where
        T: std::ops::Add<Output = T> + num_traits::Zero + 'static,
    {
        Self::build(values, Combiner::sum())
    }

    /// Build a tree aggregating with `combiner`.
    ///
    /// `combiner` must be associative and its neutral element must be a
    /// true identity; neither is checked.
    pub fn build(
        values: impl Into<Vec<T>>,
        combiner: Combiner<T>,
    ) -> Result<Self, RangeTreeError> {
        let values = values.into();
        if values.is_empty() {
            return Err(RangeTreeError::EmptyInput);
        }

        let len = values.len();
        let mut slots = vec![combiner.neutral().clone(); Self::slot_count(len)];
        traversal::build_subtree(TreeNode::root(len), &values, &combiner, &mut slots);

        debug!(elements = len, slots = slots.len(), "built range tree");

        Ok(Self {
            values,
            slots,
            combiner,
        })
    }

    /// Storage needed for `len` leaves: a complete tree over the next power of two.
    pub fn slot_count(len: usize) -> usize {
        2 * len.max(1).next_power_of_two() - 1
    }

    /// Aggregate of the closed range `[lo, hi]`.
    pub fn get(&self, lo: usize, hi: usize) -> Result<T, RangeTreeError> {
        let len = self.values.len();
        if len == 0 {
            return Err(RangeTreeError::EmptyStructure);
        }
        if hi >= len || lo > hi {
            return Err(RangeTreeError::InvalidRange { lo, hi, len });
        }

        trace!(lo, hi, "range query");
        Ok(traversal::query_subtree(
            TreeNode::root(len),
            lo,
            hi,
            &self.combiner,
            &self.slots,
        ))
    }

    /// Aggregate of any Rust range, e.g. `tree.get_range(2..5)` or `tree.get_range(..)`.
    ///
    /// Empty ranges have no closed equivalent and are rejected.
    pub fn get_range(&self, range: impl RangeBounds<usize>) -> Result<T, RangeTreeError> {
        let len = self.values.len();
        let lo = match range.start_bound() {
            Bound::Included(&lo) => lo,
            Bound::Excluded(&lo) => lo.checked_add(1).ok_or(RangeTreeError::InvalidRange {
                lo,
                hi: lo,
                len,
            })?,
            Bound::Unbounded => 0,
        };
        let hi = match range.end_bound() {
            Bound::Included(&hi) => hi,
            Bound::Excluded(&hi) => hi
                .checked_sub(1)
                .ok_or(RangeTreeError::InvalidRange { lo, hi, len })?,
            Bound::Unbounded => len.saturating_sub(1),
        };
        self.get(lo, hi)
    }

    /// Aggregate of the whole sequence.
    pub fn total(&self) -> T {
        self.slots[0].clone()
    }

    /// Replace the element at `index` and refresh its ancestors.
    ///
    /// Requires exclusive access, so no reader can observe a half-updated path.
    pub fn update(&mut self, index: usize, value: T) -> Result<(), RangeTreeError> {
        let len = self.values.len();
        if index >= len {
            return Err(RangeTreeError::IndexOutOfRange { index, len });
        }

        self.values[index] = value;
        traversal::update_path(
            TreeNode::root(len),
            index,
            &self.values,
            &self.combiner,
            &mut self.slots,
        );

        debug!(index, "updated range tree element");
        Ok(())
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a successfully built tree.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Backing sequence.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Combiner the tree aggregates with.
    pub fn combiner(&self) -> &Combiner<T> {
        &self.combiner
    }

    /// Height of the implicit tree (0 for a single element).
    pub fn height(&self) -> usize {
        TreeNode::root(self.values.len()).depth_to_leaf()
    }
}
