mod common;

use proptest::prelude::*;
use range_tree::{Combiner, RangeTree, RangeTreeError};

fn values_and_range() -> impl Strategy<Value = (Vec<i64>, usize, usize)> {
    proptest::collection::vec(-1_000i64..1_000, 1..128).prop_flat_map(|values| {
        let len = values.len();
        (Just(values), 0..len, 0..len)
            .prop_map(|(values, a, b)| (values, a.min(b), a.max(b)))
    })
}

proptest! {
    #[test]
    fn query_matches_linear_fold((values, lo, hi) in values_and_range()) {
        for combiner in [Combiner::sum(), Combiner::min(), Combiner::max()] {
            let tree = RangeTree::build(values.clone(), combiner.clone()).expect("tree builds");
            let expected = common::fold_range(&combiner, &values, lo, hi);
            prop_assert_eq!(tree.get(lo, hi).expect("valid range"), expected);
        }
    }

    #[test]
    fn non_commutative_query_matches_fold(
        matrices in proptest::collection::vec(prop::array::uniform4(0u64..1_000), 1..64),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let (a, b) = (a.index(matrices.len()), b.index(matrices.len()));
        let (lo, hi) = (a.min(b), a.max(b));
        let combiner = common::mat_mul();
        let tree = RangeTree::build(matrices.clone(), combiner.clone()).expect("tree builds");
        prop_assert_eq!(
            tree.get(lo, hi).expect("valid range"),
            common::fold_range(&combiner, &matrices, lo, hi)
        );
    }

    #[test]
    fn single_index_returns_element(values in proptest::collection::vec(any::<i32>(), 1..64)) {
        let tree = RangeTree::build(values.clone(), Combiner::max()).expect("tree builds");
        for (index, value) in values.iter().enumerate() {
            prop_assert_eq!(tree.get(index, index).expect("valid range"), *value);
        }
    }

    #[test]
    fn whole_range_equals_total(values in proptest::collection::vec(-1_000i64..1_000, 1..128)) {
        let tree = RangeTree::new(values.clone()).expect("tree builds");
        let expected: i64 = values.iter().sum();
        prop_assert_eq!(tree.get(0, values.len() - 1).expect("valid range"), expected);
        prop_assert_eq!(tree.total(), expected);
    }

    #[test]
    fn out_of_bounds_rejected(
        values in proptest::collection::vec(any::<i64>(), 1..32),
        lo in 0usize..64,
        hi in 0usize..64,
    ) {
        let tree = RangeTree::build(values.clone(), Combiner::min()).expect("tree builds");
        let len = values.len();
        let result = tree.get(lo, hi);
        if lo > hi || hi >= len {
            prop_assert_eq!(result, Err(RangeTreeError::InvalidRange { lo, hi, len }));
        } else {
            prop_assert!(result.is_ok());
        }
    }

    #[test]
    fn updates_match_rebuilt_tree(
        (values, lo, hi) in values_and_range(),
        edits in proptest::collection::vec((any::<prop::sample::Index>(), -1_000i64..1_000), 0..16),
    ) {
        let mut values = values;
        let mut tree = RangeTree::build(values.clone(), Combiner::min()).expect("tree builds");
        for (index, value) in edits {
            let index = index.index(values.len());
            values[index] = value;
            tree.update(index, value).expect("index in range");
        }
        let rebuilt = RangeTree::build(values, Combiner::min()).expect("tree builds");
        prop_assert_eq!(tree.get(lo, hi), rebuilt.get(lo, hi));
    }
}
