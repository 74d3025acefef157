#![allow(dead_code)]

use range_tree::Combiner;

/// Brute-force reference: fold `values[lo..=hi]` left to right.
pub fn fold_range<T: Clone>(combiner: &Combiner<T>, values: &[T], lo: usize, hi: usize) -> T {
    combiner.fold(&values[lo..=hi])
}

/// String concatenation: associative, not commutative.
pub fn concat() -> Combiner<String> {
    Combiner::new(|a: &String, b: &String| format!("{a}{b}"), String::new())
}

/// 2x2 matrix product modulo a prime: associative, not commutative.
pub fn mat_mul() -> Combiner<[u64; 4]> {
    const MOD: u64 = 1_000_000_007;
    Combiner::new(
        |a: &[u64; 4], b: &[u64; 4]| {
            [
                (a[0] * b[0] + a[1] * b[2]) % MOD,
                (a[0] * b[1] + a[1] * b[3]) % MOD,
                (a[2] * b[0] + a[3] * b[2]) % MOD,
                (a[2] * b[1] + a[3] * b[3]) % MOD,
            ]
        },
        [1, 0, 0, 1],
    )
}
