//! ASCII charts.
//!
//! - [`LineChart`]: average time vs dataset size, log10 size axis
//! - [`BarChart`]: global average time per algorithm
//! - [`HistoryChart`]: average time per execution of a [`Session`]
//!
//! Points are drawn with one glyph per algorithm (`o` linear, `s` binary),
//! joined by `.` segments. Two different glyphs landing on the same cell
//! become `*`.

use std::fmt;

use seekbench_core::{Algorithm, BenchmarkResult, Session};

/// Plot area dimensions in terminal cells, excluding axes and labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartSize {
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
}

impl ChartSize {
    /// Smallest plot area that still renders legibly.
    pub const MIN: ChartSize = ChartSize {
        width: 10,
        height: 4,
    };

    /// Largest plot area; bigger requests are shrunk to it.
    pub const MAX: ChartSize = ChartSize {
        width: 500,
        height: 200,
    };

    fn clamped(self) -> Self {
        Self {
            width: self.width.clamp(Self::MIN.width, Self::MAX.width),
            height: self.height.clamp(Self::MIN.height, Self::MAX.height),
        }
    }
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: 60,
            height: 15,
        }
    }
}

fn glyph(algorithm: Algorithm) -> char {
    match algorithm {
        Algorithm::Linear => 'o',
        Algorithm::Binary => 's',
    }
}

const SEGMENT: char = '.';
const COLLISION: char = '*';

// ── Canvas ─────────────────────────────────────────────────────────

struct Canvas {
    width: usize,
    cells: Vec<char>,
}

impl Canvas {
    fn new(size: ChartSize) -> Self {
        Self {
            width: size.width,
            cells: vec![' '; size.width * size.height],
        }
    }

    /// Points overwrite segments; distinct points collide.
    fn put(&mut self, col: usize, row: usize, ch: char) {
        let cell = &mut self.cells[row * self.width + col];
        *cell = match (*cell, ch) {
            (' ', c) | (SEGMENT, c) => c,
            (existing, SEGMENT) => existing,
            (existing, c) if existing == c => c,
            _ => COLLISION,
        };
    }

    fn row(&self, row: usize) -> impl Iterator<Item = char> + '_ {
        self.cells[row * self.width..(row + 1) * self.width]
            .iter()
            .copied()
    }
}

/// Linear map of `v` in `[lo, hi]` onto `0..=steps`. A degenerate range
/// maps everything to the middle.
fn scale(v: f64, lo: f64, hi: f64, steps: usize) -> usize {
    if hi <= lo || !v.is_finite() {
        return steps / 2;
    }
    let t = ((v - lo) / (hi - lo)).clamp(0.0, 1.0);
    (t * steps as f64).round() as usize
}

/// Shared renderer behind [`LineChart`] and [`HistoryChart`].
struct Plot<'a> {
    title: &'a str,
    x_caption: &'a str,
    xs: Vec<f64>,
    x_labels: (String, String),
    series: Vec<(Algorithm, Vec<f64>)>,
    size: ChartSize,
}

impl Plot<'_> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if self.xs.is_empty() {
            return writeln!(f, "(no results)");
        }

        let size = self.size.clamped();
        let (x_lo, x_hi) = min_max(self.xs.iter().copied());
        let y_hi = self
            .series
            .iter()
            .flat_map(|(_, ys)| ys.iter().copied())
            .filter(|y| y.is_finite())
            .fold(0.0f64, f64::max);

        let mut canvas = Canvas::new(size);
        let to_cell = |x: f64, y: f64| {
            let col = scale(x, x_lo, x_hi, size.width - 1);
            let row = if y_hi > 0.0 {
                size.height - 1 - scale(y, 0.0, y_hi, size.height - 1)
            } else {
                size.height - 1
            };
            (col, row)
        };

        for (_, ys) in &self.series {
            let cells: Vec<(usize, usize)> =
                self.xs.iter().zip(ys).map(|(&x, &y)| to_cell(x, y)).collect();
            for pair in cells.windows(2) {
                draw_segment(&mut canvas, pair[0], pair[1]);
            }
        }
        for (algorithm, ys) in &self.series {
            for (&x, &y) in self.xs.iter().zip(ys) {
                let (col, row) = to_cell(x, y);
                canvas.put(col, row, glyph(*algorithm));
            }
        }

        let top_label = format!("{y_hi:.5}");
        let label_w = top_label.len().max(1);
        for row in 0..size.height {
            let label = if row == 0 {
                top_label.as_str()
            } else if row == size.height - 1 {
                "0"
            } else {
                ""
            };
            let line: String = canvas.row(row).collect();
            writeln!(f, "{label:>label_w$} |{}", line.trim_end())?;
        }
        writeln!(f, "{:>label_w$} +{}", "", "-".repeat(size.width))?;

        let (left, right) = &self.x_labels;
        let gap = size.width.saturating_sub(left.len());
        writeln!(f, "{:>label_w$}  {left}{right:>gap$}", "")?;
        writeln!(f, "{:>label_w$}  {}", "", self.x_caption)?;

        let legend: Vec<String> = self
            .series
            .iter()
            .map(|(a, _)| format!("{} {a}", glyph(*a)))
            .collect();
        writeln!(f, "{}", legend.join("   "))
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Step column by column from `a` to `b`, interpolating the row.
fn draw_segment(canvas: &mut Canvas, a: (usize, usize), b: (usize, usize)) {
    let ((c0, r0), (c1, r1)) = if a.0 <= b.0 { (a, b) } else { (b, a) };
    let span = c1 - c0;
    if span == 0 {
        for row in r0.min(r1)..=r0.max(r1) {
            canvas.put(c0, row, SEGMENT);
        }
        return;
    }
    for col in c0..=c1 {
        let t = (col - c0) as f64 / span as f64;
        let row = r0 as f64 + t * (r1 as f64 - r0 as f64);
        canvas.put(col, row.round() as usize, SEGMENT);
    }
}

// ── LineChart ──────────────────────────────────────────────────────

/// Average time vs dataset size, one line per algorithm, log10 size axis.
#[derive(Clone, Copy, Debug)]
pub struct LineChart<'a> {
    result: &'a BenchmarkResult,
    size: ChartSize,
}

impl<'a> LineChart<'a> {
    /// Chart `result` in a plot area of `size`.
    pub fn new(result: &'a BenchmarkResult, size: ChartSize) -> Self {
        Self { result, size }
    }
}

impl fmt::Display for LineChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sizes = self.result.sizes();
        let xs: Vec<f64> = sizes.iter().map(|&n| (n as f64).log10()).collect();
        let smallest = sizes.iter().min().copied().unwrap_or(0);
        let largest = sizes.iter().max().copied().unwrap_or(0);
        let x_labels = if smallest == largest {
            (smallest.to_string(), String::new())
        } else {
            (smallest.to_string(), largest.to_string())
        };
        Plot {
            title: "Average time (ms) vs list size",
            x_caption: "list size (log scale)",
            xs,
            x_labels,
            series: self
                .result
                .iter()
                .map(|(a, ys)| (a, ys.to_vec()))
                .collect(),
            size: self.size,
        }
        .render(f)
    }
}

/// Shorthand for `LineChart::new(result, size).to_string()`.
pub fn line_chart(result: &BenchmarkResult, size: ChartSize) -> String {
    LineChart::new(result, size).to_string()
}

// ── HistoryChart ───────────────────────────────────────────────────

/// Average time per execution of a [`Session`], one line per algorithm.
#[derive(Clone, Copy, Debug)]
pub struct HistoryChart<'a> {
    session: &'a Session,
    size: ChartSize,
}

impl<'a> HistoryChart<'a> {
    /// Chart the history of `session` in a plot area of `size`.
    pub fn new(session: &'a Session, size: ChartSize) -> Self {
        Self { session, size }
    }
}

impl fmt::Display for HistoryChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let runs = self.session.history().len();
        let xs: Vec<f64> = (1..=runs).map(|n| n as f64).collect();
        let x_labels = match runs {
            0 => (String::new(), String::new()),
            1 => ("1".to_string(), String::new()),
            n => ("1".to_string(), n.to_string()),
        };
        Plot {
            title: "Time comparison (averages)",
            x_caption: "executions",
            xs,
            x_labels,
            series: Algorithm::ALL
                .into_iter()
                .map(|a| (a, self.session.series(a)))
                .collect(),
            size: self.size,
        }
        .render(f)
    }
}

/// Shorthand for `HistoryChart::new(session, size).to_string()`.
pub fn history_chart(session: &Session, size: ChartSize) -> String {
    HistoryChart::new(session, size).to_string()
}

// ── BarChart ───────────────────────────────────────────────────────

/// One horizontal bar per algorithm, scaled to the largest global average.
#[derive(Clone, Copy, Debug)]
pub struct BarChart<'a> {
    result: &'a BenchmarkResult,
    width: usize,
}

impl<'a> BarChart<'a> {
    /// Chart `result` with bars at most `width` cells long, within
    /// [`ChartSize::MIN`] and [`ChartSize::MAX`] widths.
    pub fn new(result: &'a BenchmarkResult, width: usize) -> Self {
        Self {
            result,
            width: width.clamp(ChartSize::MIN.width, ChartSize::MAX.width),
        }
    }
}

impl fmt::Display for BarChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Global average time (ms)")?;
        let averages = self.result.global_averages();
        let max = averages
            .values()
            .flatten()
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0f64, f64::max);
        let name_w = Algorithm::ALL
            .iter()
            .map(|a| a.label().len())
            .max()
            .unwrap_or(0);

        for (algorithm, avg) in averages {
            let Some(ms) = avg else {
                writeln!(f, "{:<name_w$} | -", algorithm.label())?;
                continue;
            };
            let mut len = if max > 0.0 {
                ((ms / max) * self.width as f64).round() as usize
            } else {
                0
            };
            if ms > 0.0 && len == 0 {
                len = 1;
            }
            writeln!(
                f,
                "{:<name_w$} |{} {ms:.5}",
                algorithm.label(),
                "#".repeat(len)
            )?;
        }
        Ok(())
    }
}

/// Shorthand for `BarChart::new(result, width).to_string()`.
pub fn bar_chart(result: &BenchmarkResult, width: usize) -> String {
    BarChart::new(result, width).to_string()
}
