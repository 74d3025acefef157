//! Build and query benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use range_tree::{Combiner, RangeTree};

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for len in [1_000usize, 100_000] {
        let values: Vec<i64> = (0..len as i64).collect();
        group.bench_with_input(BenchmarkId::from_parameter(len), &values, |b, values| {
            b.iter(|| RangeTree::build(black_box(values.clone()), Combiner::min()));
        });
    }
    group.finish();
}

fn benchmark_query(c: &mut Criterion) {
    let len = 100_000usize;
    let tree = RangeTree::new((0..len as i64).collect::<Vec<_>>()).expect("tree builds");

    c.bench_function("query_sum_n=100000", |b| {
        let mut lo = 0usize;
        b.iter(|| {
            lo = (lo + 7_919) % (len / 2);
            black_box(tree.get(lo, lo + len / 3))
        });
    });
}

criterion_group!(benches, benchmark_build, benchmark_query);
criterion_main!(benches);
