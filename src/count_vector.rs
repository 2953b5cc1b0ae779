//! # Count Vectors
//!
//! A non-decreasing sequence over `[0, k)` is fully described by how many
//! times each value occurs. This module holds that representation, the lazy
//! enumerator of all of them, and two independent ways of deciding which MEX
//! values a length-`m` subsequence can reach.

use crate::modular::{FactorialTable, Mint};
use crate::solver::Weighting;
use itertools::Itertools;

/// Multiplicity of each value `0..len()` in a sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CountVector(Vec<u32>);

impl CountVector {
    pub fn new(counts: Vec<u32>) -> Self {
        Self(counts)
    }

    /// Counts the values of `seq`, each of which must be below `n_values`.
    pub fn from_sequence(seq: &[u32], n_values: usize) -> Self {
        let mut counts = vec![0; n_values];
        for &x in seq {
            counts[x as usize] += 1;
        }
        Self(counts)
    }

    /// The unique non-decreasing sequence with these counts.
    pub fn to_sequence(&self) -> Vec<u32> {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(v, &c)| std::iter::repeat_n(v as u32, c as usize))
            .collect()
    }

    pub fn counts(&self) -> &[u32] {
        &self.0
    }

    /// Number of value slots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length of the sequence.
    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| c as usize).sum()
    }

    pub fn mex(&self) -> usize {
        self.0
            .iter()
            .position(|&c| c == 0)
            .unwrap_or(self.0.len())
    }

    pub fn distinct(&self) -> usize {
        self.0.iter().filter(|&&c| c > 0).count()
    }

    /// Whether some subsequence of length `m` has MEX exactly `mex`.
    ///
    /// It must contain every value below `mex`, avoid `mex` itself, and be
    /// fillable to length `m` from the remaining values.
    pub fn is_mex_achievable(&self, m: usize, mex: usize) -> bool {
        if mex > m || mex > self.len() || m > self.total() {
            return false;
        }
        if self.mex() < mex {
            return false;
        }
        let excluded = self.0.get(mex).map_or(0, |&c| c as usize);
        self.total() - excluded >= m
    }

    /// `f(A, m)`: how many distinct MEX values length-`m` subsequences reach.
    pub fn achievable_mex_count(&self, m: usize) -> usize {
        let total = self.total();
        if m > total {
            return 0;
        }
        (0..=m.min(self.mex()))
            .filter(|&mex| total - self.0.get(mex).map_or(0, |&c| c as usize) >= m)
            .count()
    }

    /// How many sequences this vector stands for under `weighting`.
    pub fn weight(&self, weighting: Weighting, table: &FactorialTable) -> Mint {
        match weighting {
            Weighting::Sorted => Mint::one(),
            Weighting::Arrangements => table.multinomial(&self.0),
        }
    }
}

impl std::fmt::Display for CountVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.0.iter().join(","))
    }
}

/// All weak compositions of `total` into `parts` parts, in lexicographically
/// decreasing order from `(total, 0, ..., 0)` down to `(0, ..., 0, total)`.
///
/// The iterator is finite; [`reset`](Self::reset) starts it over.
#[derive(Clone, Debug)]
pub struct WeakCompositions {
    total: u32,
    parts: usize,
    next: Option<Vec<u32>>,
}

impl WeakCompositions {
    pub fn new(total: usize, parts: usize) -> Self {
        let mut ret = Self {
            total: total as u32,
            parts,
            next: None,
        };
        ret.reset();
        ret
    }

    pub fn reset(&mut self) {
        self.next = if self.parts == 0 {
            (self.total == 0).then(Vec::new)
        } else {
            let mut first = vec![0; self.parts];
            first[0] = self.total;
            Some(first)
        };
    }
}

impl Iterator for WeakCompositions {
    type Item = CountVector;

    fn next(&mut self) -> Option<CountVector> {
        let cur = self.next.take()?;
        let k = cur.len();
        if k >= 2 {
            // Move one unit out of the last non-zero part before the tail,
            // and carry the whole tail along with it.
            if let Some(i) = (0..k - 1).rev().find(|&i| cur[i] > 0) {
                let mut succ = cur.clone();
                let tail = succ[k - 1];
                succ[k - 1] = 0;
                succ[i] -= 1;
                succ[i + 1] = tail + 1;
                self.next = Some(succ);
            }
        }
        Some(CountVector(cur))
    }
}

/// The MEX values reached by every subsequence of one sorted sequence,
/// grouped by subsequence length.
///
/// Built by visiting all `2^len` subsets, so only usable for short sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MexProfile {
    attained: Vec<u64>,
}

impl MexProfile {
    pub const MAX_LEN: usize = 20;

    pub fn new(counts: &CountVector) -> Self {
        let seq = counts.to_sequence();
        let len = seq.len();
        assert!(len <= Self::MAX_LEN, "sequence too long: {}", len);
        assert!(counts.len() < 64);
        let mut present = vec![0u64; 1 << len];
        let mut attained = vec![0u64; len + 1];
        attained[0] = 1;
        for mask in 1usize..1 << len {
            let low = mask.trailing_zeros() as usize;
            present[mask] = present[mask & (mask - 1)] | 1u64 << seq[low];
            let mex = present[mask].trailing_ones();
            attained[mask.count_ones() as usize] |= 1u64 << mex;
        }
        Self { attained }
    }

    /// Bitset of the MEX values reached by subsequences of length `m`.
    pub fn attained(&self, m: usize) -> u64 {
        self.attained.get(m).copied().unwrap_or(0)
    }

    pub fn contains(&self, m: usize, mex: usize) -> bool {
        mex < 64 && self.attained(m) >> mex & 1 == 1
    }

    pub fn count(&self, m: usize) -> usize {
        self.attained(m).count_ones() as usize
    }
}
