//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use seekbench_core::{parse_size, Repetitions, SweepConfig, TargetPolicy};
use seekbench_report::ChartSize;

/// Compare linear and binary search timings across list sizes
#[derive(Debug, Parser)]
#[command(name = "seekbench", author, version, about, long_about = None)]
pub struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(short, long, default_value = "warn", global = true)]
    pub log_level: String,

    /// What to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Benchmark both searches over several list sizes
    Sweep {
        /// Comma separated list sizes [default: 100,1000,10000,100000]
        #[arg(short, long, value_delimiter = ',', value_parser = parse_size)]
        sizes: Vec<usize>,

        /// Timed trials averaged per size
        #[arg(short, long, default_value_t = Repetitions::DEFAULT)]
        repetitions: Repetitions,

        /// Target per size: last, first, middle, absent, random[:SEED] or a number
        #[arg(short, long, default_value = "last")]
        target: TargetPolicy,

        /// Chart layout
        #[command(flatten)]
        chart: ChartArgs,
    },

    /// Search one list once per repetition and report both results
    Compare {
        /// List size
        #[arg(short, long, default_value = "100", value_parser = parse_size)]
        size: usize,

        /// Value to search for [default: size - 1]
        #[arg(short, long, allow_negative_numbers = true)]
        target: Option<i64>,

        /// Timed trials averaged per algorithm
        #[arg(short, long, default_value_t = Repetitions::DEFAULT)]
        repetitions: Repetitions,

        /// Print the generated list (abbreviated above 500 elements)
        #[arg(long)]
        preview: bool,
    },

    /// Interactive session: generate a list, then search it repeatedly
    Session {
        /// Timed trials averaged per search
        #[arg(short, long, default_value_t = Repetitions::DEFAULT)]
        repetitions: Repetitions,

        /// Chart layout
        #[command(flatten)]
        chart: ChartArgs,
    },
}

/// Chart layout flags shared by subcommands.
#[derive(Clone, Copy, Debug, Args)]
pub struct ChartArgs {
    /// Plot width in columns (10-500)
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u16).range(10..=500))]
    pub width: u16,

    /// Plot height in rows (4-200)
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u16).range(4..=200))]
    pub height: u16,

    /// Skip charts, print only the text report
    #[arg(long)]
    pub no_chart: bool,
}

impl ChartArgs {
    /// The plot area requested on the command line.
    pub fn size(&self) -> ChartSize {
        ChartSize {
            width: usize::from(self.width),
            height: usize::from(self.height),
        }
    }
}

/// Build the sweep configuration, falling back to the default sizes.
pub fn sweep_config(sizes: &[usize], repetitions: Repetitions, target: TargetPolicy) -> SweepConfig {
    let sizes = if sizes.is_empty() {
        SweepConfig::DEFAULT_SIZES.to_vec()
    } else {
        sizes.to_vec()
    };
    SweepConfig::new(sizes, repetitions).with_target(target)
}
