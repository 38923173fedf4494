//! Textual reports.

use std::fmt;

use seekbench_core::{Algorithm, BenchmarkResult, SingleRun};

/// Render a search result as `index N` or `not found`.
pub fn describe_index(index: Option<usize>) -> String {
    match index {
        Some(i) => format!("index {i}"),
        None => "not found".to_string(),
    }
}

/// Report for one [`SingleRun`]: dataset size, then index and average time
/// per algorithm with five decimals.
#[derive(Clone, Copy, Debug)]
pub struct SingleReport<'a> {
    run: &'a SingleRun,
}

impl<'a> SingleReport<'a> {
    /// Wrap `run` for display.
    pub fn new(run: &'a SingleRun) -> Self {
        Self { run }
    }
}

impl fmt::Display for SingleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search comparison")?;
        writeln!(f, "List size: {}", self.run.size)?;
        writeln!(f, "Target: {}", self.run.target)?;
        for (algorithm, outcome) in self.run.iter() {
            writeln!(f, "{algorithm} result: {}", describe_index(outcome.index))?;
            writeln!(f, "{algorithm} average time: {:.5} ms", outcome.average_ms)?;
        }
        Ok(())
    }
}

/// Shorthand for `SingleReport::new(run).to_string()`.
pub fn single_report(run: &SingleRun) -> String {
    SingleReport::new(run).to_string()
}

/// Table of per-size averages followed by the global averages.
#[derive(Clone, Copy, Debug)]
pub struct SweepReport<'a> {
    result: &'a BenchmarkResult,
}

impl<'a> SweepReport<'a> {
    /// Wrap `result` for display.
    pub fn new(result: &'a BenchmarkResult) -> Self {
        Self { result }
    }
}

impl fmt::Display for SweepReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;
        if result.is_empty() {
            return writeln!(f, "No sizes benchmarked.");
        }

        writeln!(
            f,
            "{:>10}  {:>14}  {:>14}  {:>10}",
            "size",
            format!("{} (ms)", Algorithm::Linear),
            format!("{} (ms)", Algorithm::Binary),
            "ratio"
        )?;
        let linear = result.series(Algorithm::Linear);
        let binary = result.series(Algorithm::Binary);
        for (i, size) in result.sizes().iter().enumerate() {
            let ratio = if binary[i] > 0.0 {
                format!("{:.1}x", linear[i] / binary[i])
            } else {
                "-".to_string()
            };
            writeln!(
                f,
                "{size:>10}  {:>14.5}  {:>14.5}  {ratio:>10}",
                linear[i], binary[i]
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Global averages")?;
        for (algorithm, avg) in result.global_averages() {
            match avg {
                Some(ms) => writeln!(f, "  {algorithm}: {ms:.5} ms")?,
                None => writeln!(f, "  {algorithm}: -")?,
            }
        }
        Ok(())
    }
}

/// Shorthand for `SweepReport::new(result).to_string()`.
pub fn sweep_report(result: &BenchmarkResult) -> String {
    SweepReport::new(result).to_string()
}
