//! Interactive comparisons against one generated dataset.
//!
//! A [`Session`] holds at most one dataset. The user generates it once and
//! then searches it repeatedly with targets of their choice; every
//! comparison is appended to a history that can be charted in execution
//! order. Generating a new dataset clears the history.

use tracing::info;

use crate::config::Repetitions;
use crate::dataset::Dataset;
use crate::error::BenchError;
use crate::runner::{run_single, SingleRun};
use crate::search::Algorithm;

/// One entry of a session history.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comparison {
    /// Execution number, starting at 1.
    pub execution: usize,
    /// The measured run.
    pub run: SingleRun,
}

/// Dataset plus comparison history.
#[derive(Debug, Default)]
pub struct Session {
    dataset: Option<Dataset>,
    history: Vec<Comparison>,
}

impl Session {
    /// A session with no dataset yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fresh dataset of `size` elements and reset the history.
    ///
    /// On error the previous dataset and history are kept.
    pub fn generate(&mut self, size: usize) -> Result<&Dataset, BenchError> {
        let dataset = Dataset::new(size)?;
        self.history.clear();
        info!(size, "dataset generated");
        Ok(self.dataset.insert(dataset))
    }

    /// The current dataset, if one was generated.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Time both searches for `target` and record the result.
    ///
    /// Fails with [`BenchError::NoDataset`] before any timing if
    /// [`generate`](Self::generate) has not been called.
    pub fn compare(
        &mut self,
        target: i64,
        repetitions: Repetitions,
    ) -> Result<&Comparison, BenchError> {
        let dataset = self.dataset.as_ref().ok_or(BenchError::NoDataset)?;
        let run = run_single(dataset, target, repetitions);
        let execution = self.history.len() + 1;
        self.history.push(Comparison { execution, run });
        Ok(&self.history[execution - 1])
    }

    /// All comparisons since the last [`generate`](Self::generate).
    pub fn history(&self) -> &[Comparison] {
        &self.history
    }

    /// Average times for `algorithm` in execution order.
    pub fn series(&self, algorithm: Algorithm) -> Vec<f64> {
        self.history
            .iter()
            .map(|c| c.run.get(algorithm).average_ms)
            .collect()
    }
}
