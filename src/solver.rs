use crate::brute::{Enumerator, SubsequenceCounter};
use crate::closed_form::ClosedForm;
use crate::error::{Error, Result};
use crate::modular::Mint;
use std::fmt;

/// How a row of answers is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Engine {
    /// Binomial closed form, linear in `n`.
    ClosedForm,
    /// Visit every count vector and test each MEX with the predicate.
    Enumerate,
    /// Visit every count vector and every subsequence of it.
    Subsequences,
}

impl Engine {
    pub const ALL: [Engine; 3] = [Engine::ClosedForm, Engine::Enumerate, Engine::Subsequences];

    /// Largest `n` the engine accepts, if any.
    pub fn limit(self) -> Option<usize> {
        match self {
            Engine::ClosedForm => None,
            Engine::Enumerate => Some(Enumerator::LIMIT),
            Engine::Subsequences => Some(SubsequenceCounter::LIMIT),
        }
    }

    pub fn accepts(self, n: usize) -> bool {
        self.limit().is_none_or(|limit| n <= limit)
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Engine::ClosedForm => "closed-form",
            Engine::Enumerate => "enumerate",
            Engine::Subsequences => "subsequences",
        };
        f.write_str(name)
    }
}

/// Which arrays are summed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Weighting {
    /// Every non-decreasing array once.
    #[default]
    Sorted,
    /// Every array over `[0, n)`, sorted or not.
    Arrangements,
}

/// Answers for `m = 1..=n`.
pub fn solve_case(n: usize, engine: Engine, weighting: Weighting) -> Result<Vec<Mint>> {
    if n == 0 {
        return Ok(vec![]);
    }
    let row = match engine {
        Engine::ClosedForm => {
            let cf = ClosedForm::new(n);
            match weighting {
                Weighting::Sorted => cf.sorted_row(),
                Weighting::Arrangements => cf.arrangements_row(),
            }
        }
        Engine::Enumerate => Enumerator::new(n, weighting)?.row(),
        Engine::Subsequences => SubsequenceCounter::new(n, weighting)?.row(),
    };
    Ok(row)
}

/// Solves each test case independently; nothing is shared between them.
pub fn solve_all(ns: &[usize], engine: Engine, weighting: Weighting) -> Result<Vec<Vec<Mint>>> {
    ns.iter()
        .map(|&n| solve_case(n, engine, weighting))
        .collect()
}

/// Runs every enumeration engine that accepts `n` against the closed form.
/// Returns how many engines were compared.
pub fn cross_check(n: usize, weighting: Weighting) -> Result<usize> {
    let expected = solve_case(n, Engine::ClosedForm, weighting)?;
    let mut checked = 0;
    for engine in Engine::ALL {
        if engine == Engine::ClosedForm || !engine.accepts(n) {
            continue;
        }
        let actual = solve_case(n, engine, weighting)?;
        if let Some(i) = (0..n).find(|&i| expected[i] != actual[i]) {
            return Err(Error::Mismatch {
                n,
                m: i + 1,
                engine,
                expected: expected[i].val(),
                actual: actual[i].val(),
            });
        }
        checked += 1;
    }
    Ok(checked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_all_keeps_case_order() {
        let rows = solve_all(&[3, 1, 2], Engine::ClosedForm, Weighting::Sorted).unwrap();
        let rows: Vec<Vec<u32>> = rows
            .iter()
            .map(|r| r.iter().map(|x| x.val()).collect())
            .collect();
        assert_eq!(rows, vec![vec![15, 15, 10], vec![1], vec![4, 3]]);
    }

    #[test]
    fn every_engine_gives_the_same_rows() {
        for n in 1..=6 {
            for weighting in [Weighting::Sorted, Weighting::Arrangements] {
                assert_eq!(cross_check(n, weighting).unwrap(), 2, "n = {}", n);
            }
        }
    }

    #[test]
    fn engines_past_their_limit_are_rejected() {
        assert!(Engine::ClosedForm.accepts(1_000_000));
        assert!(!Engine::Subsequences.accepts(11));
        let err = solve_case(13, Engine::Enumerate, Weighting::Sorted).unwrap_err();
        assert_eq!(err.to_string(), "enumerate engine cannot handle N = 13 (limit 12)");
    }

    #[test]
    fn zero_length_has_no_answers() {
        assert!(solve_case(0, Engine::Enumerate, Weighting::Sorted).unwrap().is_empty());
    }
}
