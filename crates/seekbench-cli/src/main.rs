//! seekbench - compare linear and binary search timings from a terminal.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use seekbench_cli::args::sweep_config;
use seekbench_cli::{commands, logging, session, Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Sweep {
            sizes,
            repetitions,
            target,
            chart,
        } => {
            let config = sweep_config(&sizes, repetitions, target);
            let chart = (!chart.no_chart).then(|| chart.size());
            let mut out = BufWriter::new(io::stdout().lock());
            commands::sweep(&mut out, &config, chart)?;
            out.flush()?;
        }
        Command::Compare {
            size,
            target,
            repetitions,
            preview,
        } => {
            let mut out = BufWriter::new(io::stdout().lock());
            commands::compare(&mut out, size, target, repetitions, preview)?;
            out.flush()?;
        }
        Command::Session { repetitions, chart } => {
            let chart = (!chart.no_chart).then(|| chart.size());
            // Unbuffered: replies must show before the next read blocks.
            let mut out = io::stdout();
            session::run(io::stdin().lock(), &mut out, repetitions, chart)?;
        }
    }
    Ok(())
}
