//! Implicit tree node representation
//!
//! Node = closed interval [left, right] ⊆ [0, n-1] plus its flat slot
//! Children computed via midpoint: m = left + (right - left) / 2
//!   Left child: [left, m] at slot 2i + 1
//!   Right child: [m+1, right] at slot 2i + 2

use std::fmt;

/// Tree node (implicit - an interval and the slot caching its aggregate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeNode {
    /// Left element index (inclusive)
    pub left: usize,

    /// Right element index (inclusive)
    pub right: usize,

    /// Position in the flat storage array
    pub slot: usize,
}

impl TreeNode {
    /// Create root spanning [0, len - 1] at slot 0
    pub fn root(len: usize) -> Self {
        debug_assert!(len > 0, "Root of an empty tree");
        Self {
            left: 0,
            right: len - 1,
            slot: 0,
        }
    }

    /// Check if leaf (unit interval)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left == self.right
    }

    /// Interval length
    #[inline]
    pub fn length(&self) -> usize {
        self.right - self.left + 1
    }

    /// Compute midpoint for split
    #[inline]
    pub fn midpoint(&self) -> usize {
        self.left + (self.right - self.left) / 2
    }

    /// Get children via midpoint split
    ///
    /// Returns: ([left, mid] @ 2i+1, [mid+1, right] @ 2i+2)
    pub fn children(&self) -> (TreeNode, TreeNode) {
        debug_assert!(!self.is_leaf(), "Leaf has no children");

        let mid = self.midpoint();
        let left_child = TreeNode {
            left: self.left,
            right: mid,
            slot: 2 * self.slot + 1,
        };
        let right_child = TreeNode {
            left: mid + 1,
            right: self.right,
            slot: 2 * self.slot + 2,
        };

        (left_child, right_child)
    }

    /// Whether [left, right] lies entirely inside [lo, hi]
    #[inline]
    pub fn is_covered_by(&self, lo: usize, hi: usize) -> bool {
        lo <= self.left && self.right <= hi
    }

    /// Whether [left, right] shares no index with [lo, hi]
    #[inline]
    pub fn is_disjoint_from(&self, lo: usize, hi: usize) -> bool {
        self.right < lo || self.left > hi
    }

    /// Compute depth from this node to its deepest leaf
    ///
    /// The left child is never shorter than the right one, so following
    /// left children reaches the deepest level.
    pub fn depth_to_leaf(&self) -> usize {
        let mut node = *self;
        let mut depth = 0;

        while !node.is_leaf() {
            let (left_child, _) = node.children();
            node = left_child;
            depth += 1;
        }

        depth
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leaf() {
            write!(f, "[{}]@{}", self.left, self.slot)
        } else {
            write!(f, "[{}, {}]@{}", self.left, self.right, self.slot)
        }
    }
}
