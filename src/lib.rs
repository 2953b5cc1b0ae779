// # MEX Coverage
//
// For an array length n, counts over all non-decreasing arrays with values
// in [0, n) how many distinct MEX values their length-m subsequences reach,
// for every m = 1..=n, modulo 998244353.
//
// The closed form answers in linear time; the enumeration engines are kept
// to validate it on small n.

/// A macro for convenient initialization of vectors, including nested vectors for multi-dimensional arrays.
///
/// # Examples
///
/// ```
/// use mex_coverage::mat;
/// // A simple vector
/// let v1 = mat![1, 2, 3];
///
/// // A 2x3 matrix initialized with zeros
/// let m1 = mat![0; 2; 3];
/// assert_eq!(m1, vec![vec![0, 0, 0], vec![0, 0, 0]]);
/// ```
#[macro_export]
macro_rules! mat {
    ($($e:expr),*) => { vec![$($e),*] };
    ($($e:expr,)*) => { vec![$($e),*] };
    ($e:expr; $d:expr) => { vec![$e; $d] };
    ($e:expr; $d:expr $(; $ds:expr)+) => { vec![mat![$e $(; $ds)*]; $d] };
}

pub mod error;

/// Residues modulo 998244353 and factorial tables.
pub mod modular;

/// Count vectors, their enumeration, and MEX reachability.
pub mod count_vector;

/// Linear-time closed forms.
pub mod closed_form;

/// Exponential reference engines.
pub mod brute;

/// Engine selection and per-test-case aggregation.
pub mod solver;

/// Reading the test-case list.
pub mod input;

/// Text and JSON output.
pub mod report;

/// Known answers for small n.
pub mod samples;

/// Checking a produced output against the reference.
pub mod judge;

/// Random test inputs.
pub mod casegen;

pub use error::{Error, Result};
pub use modular::Mint;
