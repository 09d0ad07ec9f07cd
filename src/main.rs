use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use dive::{input, logging};

#[derive(Parser)]
#[command(name = "dive", version)]
#[command(
    about = "Replays the embedded submarine course and prints horizontal position times depth, first with simple navigation, then with aim."
)]
struct Cli {}

/// Solve `course` and write both results, one per line.
///
/// Nothing is written unless both results are available.
fn report(course: &str, out: &mut impl Write) -> Result<()> {
    let answers = dive::solve(course).context("failed to read the embedded course")?;
    writeln!(out, "{}\n{}", answers.simple, answers.aimed).context("failed to write results")?;
    Ok(())
}

fn main() {
    let _cli = Cli::parse();
    logging::init();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = report(input::PUZZLE, &mut handle) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
