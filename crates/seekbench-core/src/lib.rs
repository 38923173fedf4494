//! Core of the seekbench search comparison tool.
//!
//! This is the leaf crate with no presentation dependencies. It holds the
//! two search routines, the timing harness that measures them and the
//! orchestrator that runs repeated trials across dataset sizes:
//!
//! - [`search`]: [`linear_search`] and [`binary_search`] over slices
//! - [`timing`]: [`measure`] wraps a call with a monotonic clock
//! - [`runner`]: [`run_single`] and [`run_sweep`] produce averaged timings
//! - [`session`]: interactive single-dataset comparisons with history
//!
//! # Quick start
//!
//! ```
//! use seekbench_core::{run_sweep, Algorithm, Repetitions};
//!
//! let reps = Repetitions::new(3).unwrap();
//! let result = run_sweep(&[100, 1000], reps).unwrap();
//! assert_eq!(result.series(Algorithm::Linear).len(), 2);
//! assert_eq!(result.series(Algorithm::Binary).len(), 2);
//! assert!(result.global_average(Algorithm::Binary).is_some());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod result;
pub mod runner;
pub mod search;
pub mod session;
pub mod timing;

pub use config::{parse_size, parse_sizes, parse_target, Repetitions, SweepConfig, TargetPolicy};
pub use dataset::Dataset;
pub use error::{BenchError, ConfigError, InputError};
pub use result::BenchmarkResult;
pub use runner::{
    run_single, run_sweep, run_sweep_observed, run_sweep_with, AlgorithmRun, SingleRun,
    SweepEvent,
};
pub use search::{
    binary_search, binary_search_counted, linear_search, linear_search_counted, Algorithm,
    SearchIndex, SearchTrace,
};
pub use session::{Comparison, Session};
pub use timing::{mean, measure, Measured};
