//! Benchmark profiles for seekbench.
//!
//! Provides pre-built [`SweepConfig`] profiles for the Criterion benches and
//! for manual comparison runs:
//!
//! - [`reference_profile`]: one size per decade, 100 to 100K, worst-case target
//! - [`stress_profile`]: extends the reference profile to 10M elements
//! - [`targets_for`]: deterministic spread of present targets for one size

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use seekbench_core::{Repetitions, SweepConfig};

/// Sizes of the reference profile.
pub const REFERENCE_SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

/// Sizes of the stress profile.
pub const STRESS_SIZES: [usize; 6] = [100, 1_000, 10_000, 100_000, 1_000_000, 10_000_000];

/// Build the reference profile: four decades, worst-case target.
///
/// `repetitions` of 0 is bumped to 1.
pub fn reference_profile(repetitions: u32) -> SweepConfig {
    SweepConfig::new(REFERENCE_SIZES.to_vec(), reps(repetitions))
}

/// Build the stress profile: up to 10M elements (80 MB per dataset).
///
/// Same target policy as [`reference_profile`]; only the largest sizes
/// differ.
pub fn stress_profile(repetitions: u32) -> SweepConfig {
    SweepConfig::new(STRESS_SIZES.to_vec(), reps(repetitions))
}

fn reps(n: u32) -> Repetitions {
    Repetitions::new(n.max(1)).unwrap_or_default()
}

/// Generate `n` evenly spread targets inside `0..size`.
///
/// Always includes `0` and `size - 1` when `n >= 2`, so both the best and
/// worst case of a linear scan are exercised.
pub fn targets_for(size: usize, n: usize) -> Vec<i64> {
    if size == 0 || n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![size as i64 - 1];
    }
    let last = (size - 1) as u64;
    (0..n as u64)
        .map(|i| (i * last / (n as u64 - 1)) as i64)
        .collect()
}
