use anyhow::Context;
use clap::Parser;
use mex_coverage::judge::{self, Verdict};

/// Runs a solution command with input/output redirection and judges the result.
#[derive(Parser, Debug)]
struct Cli {
    /// The shell command to run (e.g., the solution binary)
    cmd: String,
    /// Path to the input file
    input: String,
    /// Path to the output file (will be created)
    output: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let input_file =
        std::fs::File::open(&cli.input).with_context(|| format!("No such input: {}", cli.input))?;
    let output_file = std::fs::File::create(&cli.output)
        .with_context(|| format!("Cannot create {}", cli.output))?;
    let stime = std::time::Instant::now();
    let status = std::process::Command::new("sh")
        .arg("-c")
        .arg(&cli.cmd)
        .stdin(std::process::Stdio::from(input_file))
        .stdout(std::process::Stdio::from(output_file))
        .stderr(std::process::Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to execute command: {}", cli.cmd))?;
    eprintln!("!log time {:.3}", stime.elapsed().as_secs_f64());
    if !status.success() {
        if status.code() == Some(124) {
            eprintln!("!log status TLE");
        } else {
            eprintln!("!log status RE");
        }
        return Ok(());
    }

    let input = std::fs::read_to_string(&cli.input)?;
    let output = std::fs::read_to_string(&cli.output)?;
    match judge::check(&input, &output) {
        Ok(v) => {
            if let Verdict::WrongAnswer {
                case,
                m,
                expected,
                actual,
            } = &v
            {
                eprintln!(
                    "case {}, M = {}: expected {}, got {}",
                    case, m, expected, actual
                );
            }
            eprintln!("!log status {}", v.status());
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("!log status WA");
        }
    }
    Ok(())
}
