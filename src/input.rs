use crate::error::{Error, Result};
use proconio::input;
use proconio::source::once::OnceSource;

/// Parses `T` followed by `T` array lengths.
///
/// Tokens that are missing or not integers make proconio panic; a zero
/// length is reported as [`Error::ZeroSize`].
pub fn parse_cases(text: &str) -> Result<Vec<usize>> {
    let mut src = OnceSource::from(text);
    input! { from &mut src, t: usize, ns: [usize; t] }
    if let Some(index) = ns.iter().position(|&n| n == 0) {
        return Err(Error::ZeroSize { index: index + 1 });
    }
    Ok(ns)
}

pub fn read_cases_from_stdin() -> anyhow::Result<Vec<usize>> {
    use anyhow::Context;
    use std::io::Read;
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    Ok(parse_cases(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whitespace_separated_cases() {
        assert_eq!(parse_cases("3\n2 3\n  5\n").unwrap(), vec![2, 3, 5]);
        assert_eq!(parse_cases("0\n").unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn rejects_zero_length() {
        let err = parse_cases("2 4 0").unwrap_err();
        assert!(matches!(err, Error::ZeroSize { index: 2 }));
    }
}
