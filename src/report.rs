use crate::modular::Mint;
use itertools::Itertools;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    pub n: usize,
    pub values: Vec<u32>,
}

impl CaseReport {
    pub fn new(values: &[Mint]) -> Self {
        Self {
            n: values.len(),
            values: values.iter().map(|x| x.val()).collect(),
        }
    }
}

pub fn format_line(values: &[Mint]) -> String {
    values.iter().join(" ")
}

/// One line per test case.
pub fn write_text<W: Write>(out: &mut W, rows: &[Vec<Mint>]) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{}", format_line(row))?;
    }
    Ok(())
}

pub fn to_json(rows: &[Vec<Mint>]) -> serde_json::Result<String> {
    let reports = rows.iter().map(|r| CaseReport::new(r)).collect_vec();
    serde_json::to_string_pretty(&reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(v: &[u32]) -> Vec<Mint> {
        v.iter().map(|&x| Mint::from(x)).collect()
    }

    #[test]
    fn text_output_is_one_line_per_case() {
        let mut buf = vec![];
        write_text(&mut buf, &[row(&[4, 3]), row(&[1])]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "4 3\n1\n");
    }

    #[test]
    fn json_output_lists_cases() {
        let json = to_json(&[row(&[15, 15, 10])]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v, serde_json::json!([{ "n": 3, "values": [15, 15, 10] }]));
    }
}
