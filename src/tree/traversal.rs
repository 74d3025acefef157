//! Recursive descent over the implicit tree
//!
//! Every routine starts at the root and derives child intervals and slots
//! arithmetically; nothing but the aggregates is stored.

use super::TreeNode;
use crate::algebra::Combiner;

/// Fill `slots` for the subtree rooted at `node`, returning its aggregate.
pub(crate) fn build_subtree<T: Clone>(
    node: TreeNode,
    values: &[T],
    combiner: &Combiner<T>,
    slots: &mut [T],
) -> T {
    let aggregate = if node.is_leaf() {
        values[node.left].clone()
    } else {
        let (left_child, right_child) = node.children();
        let left = build_subtree(left_child, values, combiner, slots);
        let right = build_subtree(right_child, values, combiner, slots);
        combiner.combine(&left, &right)
    };

    slots[node.slot] = aggregate.clone();
    aggregate
}

/// Aggregate of `[lo, hi]` restricted to the subtree rooted at `node`.
///
/// Covered subtrees answer from their slot, disjoint ones contribute the
/// neutral element, partial overlaps split at the midpoint.
pub(crate) fn query_subtree<T: Clone>(
    node: TreeNode,
    lo: usize,
    hi: usize,
    combiner: &Combiner<T>,
    slots: &[T],
) -> T {
    if node.is_covered_by(lo, hi) {
        return slots[node.slot].clone();
    }
    if node.is_disjoint_from(lo, hi) {
        return combiner.neutral().clone();
    }

    let (left_child, right_child) = node.children();
    let left = query_subtree(left_child, lo, hi, combiner, slots);
    let right = query_subtree(right_child, lo, hi, combiner, slots);
    combiner.combine(&left, &right)
}

/// Descend to the leaf for `index`, then recompute aggregates on the way up.
pub(crate) fn update_path<T: Clone>(
    node: TreeNode,
    index: usize,
    values: &[T],
    combiner: &Combiner<T>,
    slots: &mut [T],
) {
    if node.is_leaf() {
        slots[node.slot] = values[index].clone();
        return;
    }

    let (left_child, right_child) = node.children();
    if index <= left_child.right {
        update_path(left_child, index, values, combiner, slots);
    } else {
        update_path(right_child, index, values, combiner, slots);
    }

    slots[node.slot] = combiner.combine(&slots[left_child.slot], &slots[right_child.slot]);
}
