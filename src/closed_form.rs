//! # Closed-Form Counting
//!
//! Fix the length `m` and a candidate MEX value `mex < n`. An array admits a
//! length-`m` subsequence with that MEX exactly when every value below `mex`
//! occurs and value `mex` occurs at most `n - m` times. Summing over the
//! count of `mex` and telescoping with the hockey-stick identity gives
//!
//! ```text
//! contribution(m, mex) = C(2n-1-mex, n-1) - [mex < m] C(m-mex-1 + n-1, n-1)
//! ```
//!
//! and summing that over `mex` collapses again into four binomials per `m`.

use crate::mat;
use crate::modular::{FactorialTable, Mint};

/// Closed-form answers for one array length `n`. The factorial table is
/// sized `2n` and lives as long as this value.
#[derive(Clone, Debug)]
pub struct ClosedForm {
    n: usize,
    table: FactorialTable,
}

impl ClosedForm {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            table: FactorialTable::new(2 * n),
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn table(&self) -> &FactorialTable {
        &self.table
    }

    fn c(&self, a: usize, b: usize) -> Mint {
        self.table.comb(a as i64, b as i64)
    }

    /// Number of non-decreasing arrays: `C(2n-1, n)`.
    pub fn total_arrays(&self) -> Mint {
        if self.n == 0 {
            return Mint::one();
        }
        self.c(2 * self.n - 1, self.n)
    }

    /// Number of non-decreasing arrays in which some length-`m` subsequence
    /// has MEX exactly `mex`. Requires `1 <= m <= n`.
    pub fn mex_contribution(&self, m: usize, mex: usize) -> Mint {
        let n = self.n;
        debug_assert!(1 <= m && m <= n);
        if mex > m || mex > n {
            return Mint::zero();
        }
        if mex == n {
            // Only the permutation-like array 0, 1, ..., n-1, taken whole.
            return if m == n { Mint::one() } else { Mint::zero() };
        }
        let all = self.c(2 * n - 1 - mex, n - 1);
        let too_short = if mex < m {
            self.c(m - mex - 1 + n - 1, n - 1)
        } else {
            Mint::zero()
        };
        all - too_short
    }

    /// `Σ_A f(A, m)` over all non-decreasing arrays, in O(1).
    pub fn sorted_total(&self, m: usize) -> Mint {
        let n = self.n;
        debug_assert!(1 <= m && m <= n);
        let mut ret =
            self.c(2 * n, n) - self.c(2 * n - 1 - m.min(n - 1), n) - self.c(m + n - 1, n);
        if m == n {
            ret += Mint::one();
        }
        ret
    }

    /// `sorted_total(m)` for `m = 1..=n`.
    pub fn sorted_row(&self) -> Vec<Mint> {
        (1..=self.n).map(|m| self.sorted_total(m)).collect()
    }

    /// `Σ f(A, m)` over all `n^n` arrays, sorted or not, for `m = 1..=n`.
    ///
    /// For `mex < n` the arrays are counted by how many copies `t <= n - m`
    /// of `mex` they hold; the other `n - t` positions draw from the
    /// remaining `n - 1` letters and must cover `0..mex`, which is an
    /// inclusion-exclusion over the missing letters. O(n^3).
    pub fn arrangements_row(&self) -> Vec<Mint> {
        let n = self.n;
        if n == 0 {
            return vec![];
        }
        let mut pw = mat![Mint::one(); n; n + 1];
        for (b, row) in pw.iter_mut().enumerate() {
            for l in 1..=n {
                row[l] = row[l - 1] * Mint::from(b);
            }
        }
        // cover[mex][l]: words of length l over n - 1 letters using each of 0..mex
        let mut cover = mat![Mint::zero(); n; n + 1];
        for (mex, row) in cover.iter_mut().enumerate() {
            for (l, x) in row.iter_mut().enumerate() {
                for j in 0..=mex {
                    let term = self.c(mex, j) * pw[n - 1 - j][l];
                    if j % 2 == 0 {
                        *x += term;
                    } else {
                        *x -= term;
                    }
                }
            }
        }
        (1..=n)
            .map(|m| {
                let mut total = Mint::zero();
                for row in cover.iter().take(m.min(n - 1) + 1) {
                    for t in 0..=n - m {
                        total += self.c(n, t) * row[n - t];
                    }
                }
                if m == n {
                    total += self.table.fact(n);
                }
                total
            })
            .collect()
    }

    /// Arrays counted by their own MEX, for MEX `0..=n`. This is the `m = n`
    /// case, where the only subsequence is the whole array.
    pub fn whole_array_mex_counts(&self) -> Vec<Mint> {
        (0..=self.n)
            .map(|mex| self.mex_contribution(self.n, mex))
            .collect()
    }

    /// The `m = 1` case: a single element has MEX 1 if it is 0 and MEX 0
    /// otherwise, so each array scores `[0 occurs] + [a non-zero occurs]`.
    pub fn single_element_total(&self) -> Mint {
        let n = self.n;
        let with_zero = self.total_arrays() - self.c(2 * n - 2, n);
        let with_nonzero = self.total_arrays() - Mint::one();
        with_zero + with_nonzero
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples;

    fn vals(v: &[Mint]) -> Vec<u32> {
        v.iter().map(|x| x.val()).collect()
    }

    #[test]
    fn sorted_rows_match_known_answers() {
        for s in samples::all_samples() {
            assert_eq!(vals(&ClosedForm::new(s.n).sorted_row()), s.answers, "n = {}", s.n);
        }
    }

    #[test]
    fn per_mex_contributions_sum_to_row() {
        for n in 1..=40 {
            let cf = ClosedForm::new(n);
            for m in 1..=n {
                let by_mex: Mint = (0..=n).map(|mex| cf.mex_contribution(m, mex)).sum();
                assert_eq!(by_mex, cf.sorted_total(m), "n = {}, m = {}", n, m);
            }
        }
    }

    #[test]
    fn whole_array_mex_counts_cover_every_array() {
        for n in 1..=40 {
            let cf = ClosedForm::new(n);
            let counts = cf.whole_array_mex_counts();
            assert_eq!(counts.len(), n + 1);
            assert_eq!(counts[n], Mint::one());
            assert_eq!(counts.iter().sum::<Mint>(), cf.total_arrays());
            assert_eq!(cf.sorted_total(n), cf.total_arrays());
        }
    }

    #[test]
    fn single_element_case() {
        for n in 1..=40 {
            let cf = ClosedForm::new(n);
            assert_eq!(cf.single_element_total(), cf.sorted_total(1), "n = {}", n);
        }
    }

    #[test]
    fn arrangements_small_cases() {
        // [0,0] [0,1] [1,0] [1,1]: singles give 1,2,2,1 MEX values.
        assert_eq!(vals(&ClosedForm::new(2).arrangements_row()), vec![6, 4]);
        assert_eq!(vals(&ClosedForm::new(1).arrangements_row()), vec![1]);
        for n in 1..=9 {
            let row = ClosedForm::new(n).arrangements_row();
            let all = Mint::from(n).pow(n as u64);
            assert_eq!(row[n - 1], all, "n = {}", n);
        }
    }

    #[test]
    fn large_n_is_cheap() {
        let cf = ClosedForm::new(200_000);
        let row = cf.sorted_row();
        assert_eq!(row.len(), 200_000);
        assert_eq!(row[row.len() - 1], cf.total_arrays());
    }
}
