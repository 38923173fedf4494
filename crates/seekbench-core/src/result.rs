//! Accumulated per-size timings of a sweep.

use indexmap::IndexMap;

use crate::runner::SingleRun;
use crate::search::Algorithm;
use crate::timing::mean;

/// Average times per algorithm, one entry per processed dataset size.
///
/// Both algorithm keys are present from construction, in
/// [`Algorithm::ALL`] order. Every series has exactly as many entries as
/// [`sizes()`](Self::sizes) and entries are only ever appended.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkResult {
    sizes: Vec<usize>,
    series: IndexMap<Algorithm, Vec<f64>>,
}

impl BenchmarkResult {
    /// An empty result with both algorithm keys.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// An empty result with room for `sizes` entries per series.
    pub fn with_capacity(sizes: usize) -> Self {
        let series = Algorithm::ALL
            .into_iter()
            .map(|a| (a, Vec::with_capacity(sizes)))
            .collect();
        Self {
            sizes: Vec::with_capacity(sizes),
            series,
        }
    }

    /// Append the averages of one completed size.
    pub fn push(&mut self, run: &SingleRun) {
        self.sizes.push(run.size);
        for (algorithm, values) in self.series.iter_mut() {
            values.push(run.get(*algorithm).average_ms);
        }
        debug_assert!(self.is_aligned());
    }

    /// Dataset sizes in the order they were processed.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Number of sizes processed.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// `true` if no size has been processed.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Average times (ms) for `algorithm`, index-aligned with [`sizes()`](Self::sizes).
    pub fn series(&self, algorithm: Algorithm) -> &[f64] {
        self.series
            .get(&algorithm)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Series keyed by display label (`"Lineal"`, `"Binaria"`).
    pub fn by_label(&self) -> IndexMap<&'static str, &[f64]> {
        self.series
            .iter()
            .map(|(a, v)| (a.label(), v.as_slice()))
            .collect()
    }

    /// Iterate `(algorithm, series)` in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Algorithm, &[f64])> {
        self.series.iter().map(|(a, v)| (*a, v.as_slice()))
    }

    /// Mean of the per-size averages, `None` before any size completes.
    pub fn global_average(&self, algorithm: Algorithm) -> Option<f64> {
        mean(self.series(algorithm))
    }

    /// [`global_average`](Self::global_average) for every algorithm.
    pub fn global_averages(&self) -> IndexMap<Algorithm, Option<f64>> {
        self.series.keys().map(|&a| (a, self.global_average(a))).collect()
    }

    fn is_aligned(&self) -> bool {
        self.series.values().all(|v| v.len() == self.sizes.len())
    }
}

impl Default for BenchmarkResult {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::AlgorithmRun;

    fn run(size: usize, linear_ms: f64, binary_ms: f64) -> SingleRun {
        SingleRun {
            size,
            target: size as i64 - 1,
            linear: AlgorithmRun {
                index: Some(size - 1),
                average_ms: linear_ms,
            },
            binary: AlgorithmRun {
                index: Some(size - 1),
                average_ms: binary_ms,
            },
        }
    }

    #[test]
    fn new_has_both_keys_and_no_values() {
        let r = BenchmarkResult::new();
        assert!(r.is_empty());
        let labels: Vec<_> = r.by_label().keys().copied().collect();
        assert_eq!(labels, vec!["Lineal", "Binaria"]);
        assert!(r.series(Algorithm::Linear).is_empty());
        assert_eq!(r.global_average(Algorithm::Binary), None);
    }

    #[test]
    fn push_appends_in_order() {
        let mut r = BenchmarkResult::new();
        r.push(&run(100, 0.5, 0.1));
        r.push(&run(10, 0.2, 0.05));
        assert_eq!(r.sizes(), &[100, 10]);
        assert_eq!(r.series(Algorithm::Linear), &[0.5, 0.2]);
        assert_eq!(r.series(Algorithm::Binary), &[0.1, 0.05]);
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn global_average_is_mean_of_series() {
        let mut r = BenchmarkResult::new();
        r.push(&run(100, 1.0, 0.25));
        r.push(&run(1000, 3.0, 0.75));
        assert_eq!(r.global_average(Algorithm::Linear), Some(2.0));
        assert_eq!(r.global_average(Algorithm::Binary), Some(0.5));

        let all = r.global_averages();
        assert_eq!(all[&Algorithm::Linear], Some(2.0));
        assert_eq!(all[&Algorithm::Binary], Some(0.5));
    }
}
