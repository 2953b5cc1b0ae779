//! # Output Checking
//!
//! Recomputes the expected rows for an input with the closed form and
//! compares a contestant's output against them line by line.

use crate::error::{Error, Result};
use crate::input::parse_cases;
use crate::solver::{Engine, Weighting, solve_case};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    WrongAnswer {
        case: usize,
        m: usize,
        expected: u32,
        actual: u32,
    },
}

impl Verdict {
    /// Short status used in `!log status` lines.
    pub fn status(&self) -> &'static str {
        match self {
            Verdict::Accepted => "AC",
            Verdict::WrongAnswer { .. } => "WA",
        }
    }
}

pub fn check(input: &str, output: &str) -> Result<Verdict> {
    let ns = parse_cases(input)?;
    let mut lines = output.lines().filter(|l| !l.trim().is_empty());
    for (case, &n) in ns.iter().enumerate() {
        let line_no = case + 1;
        let line = lines.next().ok_or_else(|| Error::OutputFormat {
            line: line_no,
            reason: "missing line".to_string(),
        })?;
        let actual = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<u32>().map_err(|_| Error::OutputFormat {
                    line: line_no,
                    reason: format!("not an integer: {:?}", tok),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        if actual.len() != n {
            return Err(Error::OutputFormat {
                line: line_no,
                reason: format!("expected {} values, found {}", n, actual.len()),
            });
        }
        let expected = solve_case(n, Engine::ClosedForm, Weighting::Sorted)?;
        for (i, (e, &a)) in expected.iter().zip(&actual).enumerate() {
            if e.val() != a {
                eprintln!("case {}: expected {}", line_no, crate::report::format_line(&expected));
                return Ok(Verdict::WrongAnswer {
                    case: line_no,
                    m: i + 1,
                    expected: e.val(),
                    actual: a,
                });
            }
        }
    }
    if let Some(extra) = lines.next() {
        return Err(Error::OutputFormat {
            line: ns.len() + 1,
            reason: format!("unexpected trailing output: {:?}", extra),
        });
    }
    Ok(Verdict::Accepted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_correct_output() {
        let v = check("2\n2\n3\n", "4 3\n15 15 10\n").unwrap();
        assert_eq!(v, Verdict::Accepted);
        assert_eq!(v.status(), "AC");
    }

    #[test]
    fn reports_first_wrong_value() {
        let v = check("2 2 4", "4 3\n54 60 55 35\n").unwrap();
        assert_eq!(
            v,
            Verdict::WrongAnswer {
                case: 2,
                m: 3,
                expected: 54,
                actual: 55
            }
        );
        assert_eq!(v.status(), "WA");
    }

    #[test]
    fn malformed_output_is_an_error() {
        assert!(matches!(
            check("1 3", "15 15\n"),
            Err(Error::OutputFormat { line: 1, .. })
        ));
        assert!(matches!(
            check("1 2", "4 x\n"),
            Err(Error::OutputFormat { line: 1, .. })
        ));
        assert!(matches!(
            check("2 2 2", "4 3\n"),
            Err(Error::OutputFormat { line: 2, .. })
        ));
        assert!(matches!(
            check("1 2", "4 3\n1\n"),
            Err(Error::OutputFormat { line: 2, .. })
        ));
    }
}
