use anyhow::bail;
use clap::Parser;
use mex_coverage::casegen;

#[derive(Parser)]
struct Cli {
    #[clap(long, short = 't', default_value = "10")]
    cases: usize,
    #[clap(long, default_value = "1")]
    min_n: usize,
    #[clap(long, default_value = "100")]
    max_n: usize,
    #[clap(long, short = 's')]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    if args.min_n == 0 || args.min_n > args.max_n {
        bail!("Invalid range: {}..={}", args.min_n, args.max_n);
    }
    let ns = casegen::generate(args.cases, args.min_n, args.max_n, args.seed);
    print!("{}", casegen::format_input(&ns));
    Ok(())
}
