use crate::solver::Engine;

/// Errors raised by the counting engines, the input reader and the judge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("test case #{index} has N = 0")]
    ZeroSize { index: usize },

    #[error("{engine} engine cannot handle N = {n} (limit {limit})")]
    TooLarge {
        engine: Engine,
        n: usize,
        limit: usize,
    },

    #[error("N = {n}, M = {m}: {engine} gives {actual}, closed form gives {expected}")]
    Mismatch {
        n: usize,
        m: usize,
        engine: Engine,
        expected: u32,
        actual: u32,
    },

    #[error("malformed output at line {line}: {reason}")]
    OutputFormat { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
