//! Combining operations for range aggregates
//!
//! A range query is only meaningful when the operation is associative and
//! the neutral element is a true identity for it. Both are caller
//! preconditions: nothing here can check them in general.

mod combiner;

pub use combiner::{Combiner, CombineFn};
