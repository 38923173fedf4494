//! Subcommand bodies.
//!
//! Each function writes its report to the given writer so tests can
//! capture it; progress goes to the log, not to `out`.

use std::io::Write;

use anyhow::{Context, Result};
use seekbench_core::{run_single, run_sweep_observed, Dataset, Repetitions, SweepConfig, SweepEvent};
use seekbench_report::{bar_chart, dataset_preview, line_chart, single_report, sweep_report, ChartSize};
use tracing::info;

/// Run a sweep and print the table, the line chart and the bar chart.
pub fn sweep<W: Write>(
    out: &mut W,
    config: &SweepConfig,
    chart: Option<ChartSize>,
) -> Result<()> {
    let total = config.sizes.len();
    let result = run_sweep_observed(config, |event| {
        if let SweepEvent::SizeStarted {
            position,
            size,
            target,
        } = event
        {
            info!("[{}/{total}] size {size}, target {target}", position + 1);
        }
    })
    .context("sweep failed")?;

    write!(out, "{}", sweep_report(&result))?;
    if let Some(size) = chart {
        writeln!(out)?;
        write!(out, "{}", line_chart(&result, size))?;
        writeln!(out)?;
        write!(out, "{}", bar_chart(&result, size.width))?;
    }
    Ok(())
}

/// Time both searches once per repetition against a fresh list.
///
/// `target` defaults to the last element.
pub fn compare<W: Write>(
    out: &mut W,
    size: usize,
    target: Option<i64>,
    repetitions: Repetitions,
    preview: bool,
) -> Result<()> {
    let dataset = Dataset::new(size).with_context(|| format!("cannot build list of size {size}"))?;
    let target = target.unwrap_or_else(|| dataset.last_value());
    if preview {
        writeln!(out, "List: {}", dataset_preview(&dataset))?;
    }
    let run = run_single(&dataset, target, repetitions);
    write!(out, "{}", single_report(&run))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reps(n: u32) -> Repetitions {
        Repetitions::new(n).unwrap()
    }

    #[test]
    fn sweep_prints_report_and_charts() {
        let mut out = Vec::new();
        let config = SweepConfig::new(vec![10, 100], reps(1));
        sweep(&mut out, &config, Some(ChartSize::default())).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Global averages"));
        assert!(text.contains("Average time (ms) vs list size"));
        assert!(text.contains("Global average time (ms)"));
    }

    #[test]
    fn sweep_without_chart() {
        let mut out = Vec::new();
        let config = SweepConfig::new(vec![10], reps(1));
        sweep(&mut out, &config, None).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("vs list size"));
    }

    #[test]
    fn compare_defaults_to_last_element() {
        let mut out = Vec::new();
        compare(&mut out, 20, None, reps(2), true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("List: [0, 1, 2"));
        assert!(text.contains("Target: 19"));
        assert!(text.contains("Lineal result: index 19"));
        assert!(text.contains("Binaria result: index 19"));
    }

    #[test]
    fn compare_reports_missing_target() {
        let mut out = Vec::new();
        compare(&mut out, 20, Some(-4), reps(1), false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Lineal result: not found"));
        assert!(text.contains("Binaria result: not found"));
    }

    #[test]
    fn compare_rejects_empty_list() {
        let mut out = Vec::new();
        let err = compare(&mut out, 0, None, reps(1), false).unwrap_err();
        assert!(err.to_string().contains("size 0"));
    }
}
