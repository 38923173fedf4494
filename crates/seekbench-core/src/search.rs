//! Linear and binary search over slices.
//!
//! Both routines return `Option<usize>`: `Some(i)` is the index of a
//! matching element and `None` signals "not found". Neither panics or
//! allocates. The `_counted` variants additionally report how many
//! elements were probed, which makes the O(N) vs O(log N) contrast
//! observable without a clock.

use std::cmp::Ordering;
use std::fmt;

/// Find the first element equal to `target`, scanning from index 0.
///
/// No ordering precondition. O(N) worst case, O(1) best case.
///
/// # Examples
///
/// ```
/// use seekbench_core::linear_search;
///
/// assert_eq!(linear_search(&[4, 2, 4], &4), Some(0));
/// assert_eq!(linear_search(&[4, 2, 4], &7), None);
/// ```
pub fn linear_search<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    sequence.iter().position(|v| v == target)
}

/// Find an element equal to `target` in an ascending slice.
///
/// Maintains a closed interval `[low, high]` and probes the floor midpoint.
/// The slice must be sorted ascending; on unsorted input the result is
/// unspecified (but never a panic). When `target` occurs more than once,
/// any matching index may be returned.
///
/// # Examples
///
/// ```
/// use seekbench_core::binary_search;
///
/// let data: Vec<i64> = (0..10).collect();
/// assert_eq!(binary_search(&data, &9), Some(9));
/// assert_eq!(binary_search(&data, &10), None);
/// ```
pub fn binary_search<T: Ord>(sequence: &[T], target: &T) -> Option<usize> {
    binary_search_counted(sequence, target).index
}

/// Result of an instrumented search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchTrace {
    /// Index of the match, `None` if absent.
    pub index: Option<usize>,
    /// Number of elements compared against the target.
    pub comparisons: usize,
}

/// [`linear_search`] that also counts probed elements.
pub fn linear_search_counted<T: PartialEq>(sequence: &[T], target: &T) -> SearchTrace {
    let mut comparisons = 0;
    for (i, v) in sequence.iter().enumerate() {
        comparisons += 1;
        if v == target {
            return SearchTrace {
                index: Some(i),
                comparisons,
            };
        }
    }
    SearchTrace {
        index: None,
        comparisons,
    }
}

/// [`binary_search`] that also counts probed elements.
///
/// Each probe is one three-way comparison, so a successful or failed
/// search over `n` elements probes at most `⌈log2(n + 1)⌉` times.
pub fn binary_search_counted<T: Ord>(sequence: &[T], target: &T) -> SearchTrace {
    let mut comparisons = 0;
    if sequence.is_empty() {
        return SearchTrace {
            index: None,
            comparisons,
        };
    }

    let mut low = 0usize;
    let mut high = sequence.len() - 1;
    while low <= high {
        // floor((low + high) / 2) without overflow
        let mid = low + (high - low) / 2;
        comparisons += 1;
        match sequence[mid].cmp(target) {
            Ordering::Equal => {
                return SearchTrace {
                    index: Some(mid),
                    comparisons,
                }
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    break;
                }
                high = mid - 1;
            }
        }
    }
    SearchTrace {
        index: None,
        comparisons,
    }
}

/// Integer view of a search result.
///
/// Some consumers want the classic `-1` sentinel instead of `Option`.
pub trait SearchIndex {
    /// The index as `i64`, or `-1` when not found.
    fn as_sentinel(&self) -> i64;
}

impl SearchIndex for Option<usize> {
    fn as_sentinel(&self) -> i64 {
        match self {
            Some(i) => i64::try_from(*i).unwrap_or(i64::MAX),
            None => -1,
        }
    }
}

/// The two benchmarked search strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    /// Sequential scan, [`linear_search`].
    Linear,
    /// Interval halving, [`binary_search`].
    Binary,
}

impl Algorithm {
    /// Both algorithms, in report order.
    pub const ALL: [Algorithm; 2] = [Algorithm::Linear, Algorithm::Binary];

    /// Result key used in reports and charts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Linear => "Lineal",
            Self::Binary => "Binaria",
        }
    }

    /// Look up an algorithm by its [`label`](Self::label).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.label() == label)
    }

    /// Run this algorithm over `sequence`.
    pub fn run<T: Ord>(self, sequence: &[T], target: &T) -> Option<usize> {
        match self {
            Self::Linear => linear_search(sequence, target),
            Self::Binary => binary_search(sequence, target),
        }
    }

    /// Run the instrumented variant of this algorithm.
    pub fn run_counted<T: Ord>(self, sequence: &[T], target: &T) -> SearchTrace {
        match self {
            Self::Linear => linear_search_counted(sequence, target),
            Self::Binary => binary_search_counted(sequence, target),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// ⌈log2(n + 1)⌉ for n ≥ 1.
    fn probe_bound(n: usize) -> usize {
        (usize::BITS - n.leading_zeros()) as usize
    }

    #[test]
    fn empty_slice_is_not_found() {
        let empty: [i64; 0] = [];
        assert_eq!(linear_search(&empty, &0), None);
        assert_eq!(binary_search(&empty, &0), None);
        assert_eq!(binary_search_counted(&empty, &0).comparisons, 0);
    }

    #[test]
    fn single_element() {
        assert_eq!(binary_search(&[5], &5), Some(0));
        assert_eq!(binary_search(&[5], &4), None);
        assert_eq!(binary_search(&[5], &6), None);
    }

    #[test]
    fn below_first_element_does_not_underflow() {
        let data: Vec<i64> = (10..20).collect();
        assert_eq!(binary_search(&data, &-1), None);
        assert_eq!(binary_search(&data, &i64::MIN), None);
    }

    #[test]
    fn linear_returns_first_occurrence() {
        let data = [1, 3, 3, 3, 7];
        assert_eq!(linear_search(&data, &3), Some(1));
    }

    #[test]
    fn binary_returns_some_occurrence_with_duplicates() {
        let data = [1, 3, 3, 3, 7];
        let i = binary_search(&data, &3).unwrap();
        assert_eq!(data[i], 3);
    }

    #[test]
    fn worst_case_comparison_counts() {
        for n in [1usize, 2, 3, 7, 8, 100, 1000, 10_000] {
            let data: Vec<i64> = (0..n as i64).collect();
            let target = n as i64 - 1;

            let lin = linear_search_counted(&data, &target);
            assert_eq!(lin.index, Some(n - 1));
            assert_eq!(lin.comparisons, n);

            let bin = binary_search_counted(&data, &target);
            assert_eq!(bin.index, Some(n - 1));
            assert!(
                bin.comparisons <= probe_bound(n),
                "n={n}: {} probes > bound {}",
                bin.comparisons,
                probe_bound(n)
            );
        }
    }

    #[test]
    fn sentinel_view() {
        assert_eq!(Some(4usize).as_sentinel(), 4);
        assert_eq!(None::<usize>.as_sentinel(), -1);
    }

    #[test]
    fn labels_round_trip() {
        for a in Algorithm::ALL {
            assert_eq!(Algorithm::from_label(a.label()), Some(a));
        }
        assert_eq!(Algorithm::Linear.to_string(), "Lineal");
        assert_eq!(Algorithm::Binary.to_string(), "Binaria");
        assert_eq!(Algorithm::from_label("Ternaria"), None);
    }

    fn sorted_vec() -> impl Strategy<Value = Vec<i64>> {
        prop::collection::vec(-1000i64..1000, 0..200).prop_map(|mut v| {
            v.sort_unstable();
            v
        })
    }

    proptest! {
        #[test]
        fn present_values_are_found(data in sorted_vec(), pick in any::<prop::sample::Index>()) {
            prop_assume!(!data.is_empty());
            let x = data[pick.index(data.len())];

            let first = data.iter().position(|v| *v == x);
            prop_assert_eq!(linear_search(&data, &x), first);

            let i = binary_search(&data, &x);
            prop_assert!(i.is_some());
            prop_assert_eq!(data[i.unwrap()], x);
        }

        #[test]
        fn absent_values_are_not_found(data in sorted_vec(), x in -2000i64..2000) {
            prop_assume!(!data.contains(&x));
            prop_assert_eq!(linear_search(&data, &x), None);
            prop_assert_eq!(binary_search(&data, &x), None);
        }

        #[test]
        fn searches_are_idempotent(data in sorted_vec(), x in -1000i64..1000) {
            prop_assert_eq!(linear_search(&data, &x), linear_search(&data, &x));
            prop_assert_eq!(binary_search(&data, &x), binary_search(&data, &x));
        }

        #[test]
        fn binary_probes_are_logarithmic(n in 1usize..100_000, x in any::<i64>()) {
            let data: Vec<i64> = (0..n as i64).collect();
            let trace = binary_search_counted(&data, &x);
            prop_assert!(trace.comparisons <= probe_bound(n));
        }
    }
}
