//! Sweep contract tests: result shape, isolation between sweeps and the
//! empirical scaling of both algorithms.

use seekbench_core::{
    run_sweep, run_sweep_with, Algorithm, BenchError, ConfigError, Repetitions, SweepConfig,
    TargetPolicy,
};

fn reps(n: u32) -> Repetitions {
    Repetitions::new(n).unwrap()
}

#[test]
fn two_sizes_give_two_non_negative_averages_per_algorithm() {
    let result = run_sweep(&[100, 1000], reps(5)).unwrap();
    let by_label = result.by_label();
    assert_eq!(by_label.len(), 2);
    for label in ["Lineal", "Binaria"] {
        let series = by_label[label];
        assert_eq!(series.len(), 2, "{label}");
        assert!(series.iter().all(|&ms| ms >= 0.0 && ms.is_finite()), "{label}: {series:?}");
    }
    assert_eq!(result.sizes(), &[100, 1000]);
}

#[test]
fn empty_sizes_give_empty_series() {
    let result = run_sweep(&[], reps(5)).unwrap();
    assert!(result.is_empty());
    for algorithm in Algorithm::ALL {
        assert!(result.series(algorithm).is_empty());
        assert_eq!(result.global_average(algorithm), None);
    }
}

#[test]
fn sweeps_do_not_share_state() {
    let first = run_sweep(&[10, 20, 30], reps(1)).unwrap();
    let second = run_sweep(&[40], reps(1)).unwrap();
    assert_eq!(first.len(), 3);
    assert_eq!(second.len(), 1);
    assert_eq!(second.sizes(), &[40]);
}

#[test]
fn global_average_is_mean_of_per_size_averages() {
    let result = run_sweep(&[100, 200, 300], reps(2)).unwrap();
    for algorithm in Algorithm::ALL {
        let series = result.series(algorithm);
        let expected = series.iter().sum::<f64>() / series.len() as f64;
        let got = result.global_average(algorithm).unwrap();
        assert!((got - expected).abs() < 1e-12);
    }
}

#[test]
fn invalid_size_aborts_whole_sweep() {
    let err = run_sweep(&[100, 0, 1000], reps(1)).unwrap_err();
    assert_eq!(err, BenchError::Config(ConfigError::EmptySize { position: 1 }));
}

#[test]
fn oversized_size_aborts_before_timing() {
    let err = run_sweep(&[100, usize::MAX / 2], reps(1)).unwrap_err();
    assert_eq!(
        err,
        BenchError::Config(ConfigError::SizeTooLarge {
            size: usize::MAX / 2
        })
    );
}

#[test]
fn invalid_repetitions_never_reach_the_runner() {
    for input in ["0", "-1", "1.5", "five"] {
        assert!(input.parse::<Repetitions>().is_err(), "{input} accepted");
    }
    assert!(Repetitions::try_from(0i64).is_err());
    assert!(Repetitions::try_from(-3i64).is_err());
}

#[test]
fn absent_target_policy_still_times_both() {
    let config = SweepConfig::new(vec![64, 128], reps(2)).with_target(TargetPolicy::Absent);
    let result = run_sweep_with(&config).unwrap();
    assert_eq!(result.series(Algorithm::Linear).len(), 2);
    assert_eq!(result.series(Algorithm::Binary).len(), 2);
}

/// Per-slot minimum over several sweeps. Sweep averages have no outlier
/// rejection, so a single preemption can inflate one slot; the minimum
/// across independent sweeps filters that out.
fn best_of(sweeps: usize, sizes: &[usize], repetitions: Repetitions) -> Vec<(f64, f64)> {
    let mut best = vec![(f64::INFINITY, f64::INFINITY); sizes.len()];
    for _ in 0..sweeps {
        let result = run_sweep(sizes, repetitions).unwrap();
        let lin = result.series(Algorithm::Linear);
        let bin = result.series(Algorithm::Binary);
        for (i, slot) in best.iter_mut().enumerate() {
            slot.0 = slot.0.min(lin[i]);
            slot.1 = slot.1.min(bin[i]);
        }
    }
    best
}

#[test]
fn linear_grows_with_size_and_binary_stays_flat() {
    let sizes = [100, 1_000, 10_000, 100_000];
    let best = best_of(5, &sizes, reps(20));
    let (lin_small, bin_small) = best[0];
    let (lin_large, bin_large) = best[3];

    // 1000x more elements. Linear is expected near 1000x; accept 10x.
    assert!(
        lin_large > lin_small * 10.0,
        "linear did not scale: {lin_small} ms -> {lin_large} ms"
    );

    // log2(100_000) / log2(100) ≈ 2.5. The absolute floor absorbs
    // clock granularity when both numbers are a few tens of nanoseconds.
    assert!(
        bin_large <= bin_small * 50.0 + 0.01,
        "binary grew too fast: {bin_small} ms -> {bin_large} ms"
    );

    assert!(
        bin_large < lin_large,
        "binary ({bin_large} ms) not faster than linear ({lin_large} ms) at 100k"
    );
}
