//! Wall-clock timing of a single call.
//!
//! [`measure`] reads [`Instant`] (monotonic, unaffected by wall-clock
//! adjustments) immediately around the call and reports the elapsed time
//! in fractional milliseconds. Resolution is well below a microsecond on
//! every supported platform, which matters because a 100-element linear
//! scan finishes in well under that.

use std::hint::black_box;
use std::time::Instant;

/// A value returned by a timed call together with its duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measured<R> {
    /// What the operation returned.
    pub value: R,
    /// Elapsed wall-clock time in milliseconds.
    pub elapsed_ms: f64,
}

/// Time one invocation of `operation`.
///
/// The operation runs exactly once. Whatever it returns, including an
/// `Err`, is handed back untouched; a panic unwinds through this frame.
/// The result is passed through [`black_box`] before the second clock read
/// so the optimizer cannot hoist or drop the measured work.
///
/// # Examples
///
/// ```
/// use seekbench_core::{linear_search, measure};
///
/// let data: Vec<i64> = (0..1000).collect();
/// let m = measure(|| linear_search(&data, &999));
/// assert_eq!(m.value, Some(999));
/// assert!(m.elapsed_ms >= 0.0);
/// ```
pub fn measure<R, F>(operation: F) -> Measured<R>
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let value = black_box(operation());
    let elapsed = start.elapsed();
    Measured {
        value,
        elapsed_ms: elapsed.as_secs_f64() * 1000.0,
    }
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}
