//! # Enumeration Engines
//!
//! Exponential reference counters that visit every count vector. They exist
//! to validate the closed form, so both refuse sizes they cannot finish.

use crate::count_vector::{CountVector, MexProfile, WeakCompositions};
use crate::error::{Error, Result};
use crate::modular::{FactorialTable, Mint};
use crate::solver::{Engine, Weighting};
use rustc_hash::FxHashMap;

fn check_limit(engine: Engine, n: usize, limit: usize) -> Result<()> {
    if n > limit {
        return Err(Error::TooLarge { engine, n, limit });
    }
    Ok(())
}

/// Sums `weight × f` over all count vectors, deciding each MEX with
/// [`CountVector::is_mex_achievable`].
pub struct Enumerator {
    n: usize,
    weighting: Weighting,
    table: FactorialTable,
}

impl Enumerator {
    /// `C(2n-1, n)` vectors, about 1.35 million at the limit.
    pub const LIMIT: usize = 12;

    pub fn new(n: usize, weighting: Weighting) -> Result<Self> {
        check_limit(Engine::Enumerate, n, Self::LIMIT)?;
        Ok(Self {
            n,
            weighting,
            table: FactorialTable::new(2 * n),
        })
    }

    /// Totals for `m = 1..=n` in a single pass over the vectors.
    pub fn row(&self) -> Vec<Mint> {
        let mut row = vec![Mint::zero(); self.n];
        for c in WeakCompositions::new(self.n, self.n) {
            let w = c.weight(self.weighting, &self.table);
            for (i, total) in row.iter_mut().enumerate() {
                *total += w * Mint::from(c.achievable_mex_count(i + 1));
            }
        }
        row
    }
}

/// Sums `weight × f` with `f` read off the MEX of every subsequence of
/// the sorted array.
///
/// Profiles are memoized per count vector, so only the first length pays for
/// the `2^n` subset walk. The memo belongs to this counter and therefore to
/// a single `n`.
pub struct SubsequenceCounter {
    n: usize,
    weighting: Weighting,
    table: FactorialTable,
    memo: FxHashMap<CountVector, MexProfile>,
}

impl SubsequenceCounter {
    pub const LIMIT: usize = 10;

    pub fn new(n: usize, weighting: Weighting) -> Result<Self> {
        check_limit(Engine::Subsequences, n, Self::LIMIT)?;
        Ok(Self {
            n,
            weighting,
            table: FactorialTable::new(2 * n),
            memo: FxHashMap::default(),
        })
    }

    fn profile(&mut self, c: CountVector) -> &MexProfile {
        self.memo.entry(c).or_insert_with_key(MexProfile::new)
    }

    /// `Σ weight × f(A, m)` for one length `m`.
    pub fn total(&mut self, m: usize) -> Mint {
        let mut total = Mint::zero();
        for c in WeakCompositions::new(self.n, self.n) {
            let w = c.weight(self.weighting, &self.table);
            total += w * Mint::from(self.profile(c).count(m));
        }
        total
    }

    pub fn row(&mut self) -> Vec<Mint> {
        (1..=self.n).map(|m| self.total(m)).collect()
    }

    /// Number of memoized profiles.
    pub fn cached(&self) -> usize {
        self.memo.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closed_form::ClosedForm;
    use crate::samples;

    #[test]
    fn engines_reproduce_known_answers() {
        for s in samples::all_samples() {
            let a = Enumerator::new(s.n, Weighting::Sorted).unwrap().row();
            let b = SubsequenceCounter::new(s.n, Weighting::Sorted).unwrap().row();
            let a: Vec<u32> = a.iter().map(|x| x.val()).collect();
            let b: Vec<u32> = b.iter().map(|x| x.val()).collect();
            assert_eq!(a, s.answers, "enumerate n = {}", s.n);
            assert_eq!(b, s.answers, "subsequences n = {}", s.n);
        }
    }

    #[test]
    fn engines_agree_with_closed_form() {
        for n in 1..=6 {
            let cf = ClosedForm::new(n);
            let sorted = Enumerator::new(n, Weighting::Sorted).unwrap().row();
            assert_eq!(sorted, cf.sorted_row(), "n = {}", n);
            let arr = SubsequenceCounter::new(n, Weighting::Arrangements)
                .unwrap()
                .row();
            assert_eq!(arr, cf.arrangements_row(), "n = {}", n);
        }
    }

    #[test]
    fn memo_is_filled_once_per_vector() {
        let mut counter = SubsequenceCounter::new(4, Weighting::Sorted).unwrap();
        counter.total(1);
        assert_eq!(counter.cached(), 35);
        counter.row();
        assert_eq!(counter.cached(), 35);
    }

    #[test]
    fn oversized_inputs_are_rejected() {
        assert!(matches!(
            Enumerator::new(13, Weighting::Sorted),
            Err(Error::TooLarge { n: 13, limit: 12, .. })
        ));
        assert!(matches!(
            SubsequenceCounter::new(11, Weighting::Arrangements),
            Err(Error::TooLarge { limit: 10, .. })
        ));
    }
}
