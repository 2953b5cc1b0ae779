//! # Random Inputs
//!
//! Test files in the solver's input format, reproducible from a seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

/// `cases` array lengths drawn uniformly from `min_n..=max_n`.
///
/// Without a seed the generator is seeded from the OS.
pub fn generate(cases: usize, min_n: usize, max_n: usize, seed: Option<u64>) -> Vec<usize> {
    assert!(1 <= min_n && min_n <= max_n, "bad range {}..={}", min_n, max_n);
    let mut rng = match seed {
        Some(s) => ChaCha12Rng::seed_from_u64(s),
        None => ChaCha12Rng::from_os_rng(),
    };
    (0..cases).map(|_| rng.random_range(min_n..=max_n)).collect()
}

pub fn format_input(ns: &[usize]) -> String {
    let mut s = format!("{}\n", ns.len());
    for n in ns {
        s.push_str(&format!("{}\n", n));
    }
    s
}
