//! Benchmark orchestration: repeated trials and multi-size sweeps.
//!
//! Everything here runs on the calling thread, one measured call at a
//! time. Parallel trials would share caches and the scheduler with each
//! other and corrupt the wall-clock numbers.

use smallvec::SmallVec;
use tracing::{debug, info};

use crate::config::{Repetitions, SweepConfig};
use crate::dataset::Dataset;
use crate::error::BenchError;
use crate::result::BenchmarkResult;
use crate::search::Algorithm;
use crate::timing::{mean, measure};

/// Outcome of one algorithm over all repetitions of a single run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlgorithmRun {
    /// Search result of the final repetition.
    pub index: Option<usize>,
    /// Mean elapsed time over all repetitions, in milliseconds.
    pub average_ms: f64,
}

/// Both algorithms timed against one dataset and target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SingleRun {
    /// Dataset size.
    pub size: usize,
    /// Value searched for.
    pub target: i64,
    /// Linear search outcome.
    pub linear: AlgorithmRun,
    /// Binary search outcome.
    pub binary: AlgorithmRun,
}

impl SingleRun {
    /// Outcome for `algorithm`.
    pub fn get(&self, algorithm: Algorithm) -> &AlgorithmRun {
        match algorithm {
            Algorithm::Linear => &self.linear,
            Algorithm::Binary => &self.binary,
        }
    }

    /// `(algorithm, outcome)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Algorithm, &AlgorithmRun)> {
        Algorithm::ALL.into_iter().map(move |a| (a, self.get(a)))
    }
}

/// Progress notifications from [`run_sweep_observed`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SweepEvent<'a> {
    /// A size is about to be benchmarked.
    SizeStarted {
        /// Zero-based position in the size list.
        position: usize,
        /// Dataset size.
        size: usize,
        /// Target chosen for this size.
        target: i64,
    },
    /// A size finished; its averages are already in the result.
    SizeFinished {
        /// Zero-based position in the size list.
        position: usize,
        /// The completed run.
        run: &'a SingleRun,
    },
}

/// Time both algorithms `repetitions` times against `dataset` and `target`.
///
/// Each repetition runs one linear trial followed by one binary trial.
/// The reported index is the result of the last repetition; with an
/// unchanging dataset and target every repetition agrees.
pub fn run_single(dataset: &Dataset, target: i64, repetitions: Repetitions) -> SingleRun {
    let reps = repetitions.get() as usize;
    let mut linear_samples: SmallVec<[f64; 16]> = SmallVec::with_capacity(reps);
    let mut binary_samples: SmallVec<[f64; 16]> = SmallVec::with_capacity(reps);
    let mut linear_index = None;
    let mut binary_index = None;

    let values = dataset.values();
    for _ in 0..reps {
        let lin = measure(|| Algorithm::Linear.run(values, &target));
        linear_index = lin.value;
        linear_samples.push(lin.elapsed_ms);

        let bin = measure(|| Algorithm::Binary.run(values, &target));
        binary_index = bin.value;
        binary_samples.push(bin.elapsed_ms);
    }

    let run = SingleRun {
        size: dataset.len(),
        target,
        linear: AlgorithmRun {
            index: linear_index,
            average_ms: mean(&linear_samples).unwrap_or(0.0),
        },
        binary: AlgorithmRun {
            index: binary_index,
            average_ms: mean(&binary_samples).unwrap_or(0.0),
        },
    };

    for (algorithm, outcome) in run.iter() {
        debug!(
            size = run.size,
            search_target = target,
            algorithm = algorithm.label(),
            index = ?outcome.index,
            average_ms = outcome.average_ms,
            "measured"
        );
    }
    run
}

/// Worst-case sweep: for each size, search for `size - 1`.
///
/// Sizes are processed in the given order. Every size is validated before
/// the first trial runs. An empty `sizes` list yields an empty result.
///
/// # Examples
///
/// ```
/// use seekbench_core::{run_sweep, Algorithm, Repetitions};
///
/// let result = run_sweep(&[], Repetitions::DEFAULT).unwrap();
/// assert!(result.series(Algorithm::Linear).is_empty());
/// assert!(run_sweep(&[10, 0], Repetitions::DEFAULT).is_err());
/// ```
pub fn run_sweep(sizes: &[usize], repetitions: Repetitions) -> Result<BenchmarkResult, BenchError> {
    run_sweep_with(&SweepConfig::new(sizes.to_vec(), repetitions))
}

/// Sweep driven by a full [`SweepConfig`].
pub fn run_sweep_with(config: &SweepConfig) -> Result<BenchmarkResult, BenchError> {
    run_sweep_observed(config, |_| {})
}

/// [`run_sweep_with`] that reports progress through `observer`.
///
/// The observer is called synchronously between measurements, never
/// while a trial is being timed.
pub fn run_sweep_observed<F>(
    config: &SweepConfig,
    mut observer: F,
) -> Result<BenchmarkResult, BenchError>
where
    F: FnMut(SweepEvent<'_>),
{
    config.validate()?;
    info!(
        sizes = config.sizes.len(),
        repetitions = config.repetitions.get(),
        policy = %config.target,
        "sweep started"
    );

    let mut result = BenchmarkResult::with_capacity(config.sizes.len());
    for (position, &size) in config.sizes.iter().enumerate() {
        let target = config.target.target_for(size);
        observer(SweepEvent::SizeStarted {
            position,
            size,
            target,
        });

        let dataset = Dataset::new(size)?;
        let run = run_single(&dataset, target, config.repetitions);
        drop(dataset);

        result.push(&run);
        observer(SweepEvent::SizeFinished {
            position,
            run: &run,
        });
    }

    info!(sizes = result.len(), "sweep finished");
    Ok(result)
}
