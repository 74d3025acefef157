//! Combiner: an associative operation paired with its neutral element
//!
//! combine(a, combine(b, c)) == combine(combine(a, b), c)
//! combine(e, a) == a == combine(a, e)

use std::{fmt, ops::Add, sync::Arc};

use num_traits::{Bounded, Zero};

/// Shared binary operation stored by a [`Combiner`].
pub type CombineFn<T> = Arc<dyn Fn(&T, &T) -> T + Send + Sync>;

/// Operation and identity used to aggregate ranges
///
/// The two halves are coupled: pairing `min` with `0` instead of the type's
/// maximum silently produces wrong answers for any query that touches a
/// subtree outside the requested range. Commutativity is never assumed;
/// the left operand always covers lower indices.
pub struct Combiner<T> {
    op: CombineFn<T>,
    neutral: T,
}

impl<T> Combiner<T> {
    /// Pair an arbitrary associative operation with its identity.
    pub fn new<F>(op: F, neutral: T) -> Self
    where
        F: Fn(&T, &T) -> T + Send + Sync + 'static,
    {
        Self {
            op: Arc::new(op),
            neutral,
        }
    }

    /// Apply the operation; `left` covers the lower indices.
    #[inline]
    pub fn combine(&self, left: &T, right: &T) -> T {
        (self.op)(left, right)
    }

    /// Identity element returned for segments disjoint from a query.
    #[inline]
    pub fn neutral(&self) -> &T {
        &self.neutral
    }

    /// Left-to-right fold seeded with the neutral element.
    pub fn fold<'a, I>(&self, items: I) -> T
    where
        I: IntoIterator<Item = &'a T>,
        T: Clone + 'a,
    {
        items
            .into_iter()
            .fold(self.neutral.clone(), |acc, item| self.combine(&acc, item))
    }
}

impl<T> Combiner<T>
where
    T: Add<Output = T> + Zero + Clone + 'static,
{
    /// Addition with zero.
    pub fn sum() -> Self {
        Self::new(|a: &T, b: &T| a.clone() + b.clone(), T::zero())
    }
}

impl<T> Combiner<T>
where
    T: Ord + Bounded + Clone + 'static,
{
    /// Minimum with the type's largest value.
    pub fn min() -> Self {
        Self::new(|a: &T, b: &T| a.min(b).clone(), T::max_value())
    }

    /// Maximum with the type's smallest value.
    pub fn max() -> Self {
        Self::new(|a: &T, b: &T| a.max(b).clone(), T::min_value())
    }
}

impl<T> Default for Combiner<T>
where
    T: Add<Output = T> + Zero + Clone + 'static,
{
    fn default() -> Self {
        Self::sum()
    }
}

impl<T: Clone> Clone for Combiner<T> {
    fn clone(&self) -> Self {
        Self {
            op: Arc::clone(&self.op),
            neutral: self.neutral.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Combiner<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combiner")
            .field("neutral", &self.neutral)
            .finish_non_exhaustive()
    }
}
