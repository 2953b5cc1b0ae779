use anyhow::Context;
use clap::{Parser, ValueEnum};
use mex_coverage::input::read_cases_from_stdin;
use mex_coverage::report;
use mex_coverage::solver::{self, Engine, Weighting};
use std::io::{self, BufWriter, Write};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Reads T and T array lengths from stdin and prints one answer row per case.
#[derive(Parser, Debug)]
struct Cli {
    #[clap(long, short = 'e', value_enum, default_value_t = Engine::ClosedForm)]
    engine: Engine,
    #[clap(long, short = 'w', value_enum, default_value_t = Weighting::Sorted)]
    weighting: Weighting,
    #[clap(long, short = 'f', value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let ns = read_cases_from_stdin()?;
    eprintln!("!log cases {}", ns.len());
    let stime = std::time::Instant::now();
    let rows = solver::solve_all(&ns, cli.engine, cli.weighting)?;
    eprintln!("!log time {:.3}", stime.elapsed().as_secs_f64());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.format {
        Format::Text => report::write_text(&mut out, &rows).context("Failed to write output")?,
        Format::Json => writeln!(out, "{}", report::to_json(&rows)?)?,
    }
    out.flush()?;
    Ok(())
}
