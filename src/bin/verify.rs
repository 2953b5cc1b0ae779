use anyhow::bail;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use mex_coverage::closed_form::ClosedForm;
use mex_coverage::report::format_line;
use mex_coverage::samples;
use mex_coverage::solver::{Weighting, cross_check};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Which {
    Sorted,
    Arrangements,
    Both,
}

/// Checks the closed form against the enumeration engines for n = 1..=max_n.
#[derive(Parser, Debug)]
struct Cli {
    #[clap(long, short = 'n', default_value_t = 6)]
    max_n: usize,
    #[clap(long, short = 'w', value_enum, default_value_t = Which::Both)]
    weighting: Which,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let weightings = match cli.weighting {
        Which::Sorted => vec![Weighting::Sorted],
        Which::Arrangements => vec![Weighting::Arrangements],
        Which::Both => vec![Weighting::Sorted, Weighting::Arrangements],
    };

    for s in samples::all_samples().iter().filter(|s| s.n <= cli.max_n) {
        let row = ClosedForm::new(s.n).sorted_row();
        let got: Vec<u32> = row.iter().map(|x| x.val()).collect();
        if got != s.answers {
            bail!("n = {}: closed form gives {}, expected {:?}", s.n, format_line(&row), s.answers);
        }
    }

    let pb = ProgressBar::new((cli.max_n * weightings.len()) as u64);
    pb.set_style(ProgressStyle::with_template(
        "{elapsed_precise} [{bar:40}] {pos}/{len} {msg}",
    )?);
    let mut compared = 0;
    for n in 1..=cli.max_n {
        for &w in &weightings {
            pb.set_message(format!("n = {} {:?}", n, w));
            let engines = cross_check(n, w)?;
            if engines == 0 {
                pb.println(format!("n = {}: no enumeration engine accepts this size", n));
            }
            compared += engines;
            pb.inc(1);
        }
    }
    pb.finish_and_clear();
    eprintln!("!log compared {}", compared);
    eprintln!("!log status AC");
    Ok(())
}
