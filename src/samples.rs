use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A hand-checked answer row: `answers[m - 1]` is the sum of `f(A, m)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub n: usize,
    pub answers: &'static [u32],
}

const SAMPLES_DATA: &[Sample] = &[
    Sample {
        n: 1,
        answers: &[1],
    },
    Sample {
        n: 2,
        answers: &[4, 3],
    },
    Sample {
        n: 3,
        answers: &[15, 15, 10],
    },
    Sample {
        n: 4,
        answers: &[54, 60, 54, 35],
    },
    Sample {
        n: 5,
        answers: &[195, 225, 225, 195, 126],
    },
];

pub fn all_samples() -> &'static [Sample] {
    SAMPLES_DATA
}

static SAMPLE_MAP: Lazy<HashMap<usize, &'static Sample>> =
    Lazy::new(|| SAMPLES_DATA.iter().map(|s| (s.n, s)).collect());

pub fn get_sample(n: usize) -> Option<&'static Sample> {
    SAMPLE_MAP.get(&n).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_samples_contains_expected_entries() {
        let all = all_samples();
        let ns: Vec<usize> = all.iter().map(|s| s.n).collect();
        assert_eq!(ns, vec![1, 2, 3, 4, 5]);
        assert!(all.iter().all(|s| s.answers.len() == s.n));
    }

    #[test]
    fn get_sample_returns_expected() {
        let s = get_sample(4).expect("n = 4 should exist");
        assert_eq!(s.answers, &[54, 60, 54, 35]);
        assert!(get_sample(6).is_none());
    }
}
