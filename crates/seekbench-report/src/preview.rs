//! Abbreviated rendering of a dataset.

use std::fmt;

/// Datasets up to this many elements are shown in full.
pub const FULL_PREVIEW_MAX: usize = 500;

/// Elements shown from each end of a larger dataset.
pub const PREVIEW_EDGE: usize = 100;

/// `[a, b, c]` for small slices, `[first 100, ..., last 100]` otherwise.
#[derive(Clone, Copy, Debug)]
pub struct DatasetPreview<'a> {
    values: &'a [i64],
}

impl<'a> DatasetPreview<'a> {
    /// Wrap `values` for display.
    pub fn new(values: &'a [i64]) -> Self {
        Self { values }
    }
}

impl fmt::Display for DatasetPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(f: &mut fmt::Formatter<'_>, values: &[i64]) -> fmt::Result {
            for (i, v) in values.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{v}")?;
            }
            Ok(())
        }

        f.write_str("[")?;
        if self.values.len() <= FULL_PREVIEW_MAX {
            join(f, self.values)?;
        } else {
            let tail_start = self.values.len() - PREVIEW_EDGE;
            join(f, &self.values[..PREVIEW_EDGE])?;
            f.write_str(", ..., ")?;
            join(f, &self.values[tail_start..])?;
        }
        f.write_str("]")
    }
}

/// Shorthand for `DatasetPreview::new(values).to_string()`.
pub fn dataset_preview(values: &[i64]) -> String {
    DatasetPreview::new(values).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use seekbench_core::Dataset;

    #[test]
    fn small_dataset_in_full() {
        let d = Dataset::new(4).unwrap();
        assert_eq!(dataset_preview(&d), "[0, 1, 2, 3]");
    }

    #[test]
    fn threshold_is_inclusive() {
        let d = Dataset::new(FULL_PREVIEW_MAX).unwrap();
        let text = dataset_preview(&d);
        assert!(!text.contains("..."));
        assert_eq!(text.matches(", ").count(), FULL_PREVIEW_MAX - 1);
    }

    #[test]
    fn large_dataset_abbreviated() {
        let d = Dataset::new(10_000).unwrap();
        let text = dataset_preview(&d);
        assert!(text.starts_with("[0, 1, 2,"));
        assert!(text.contains("98, 99, ..., 9900, 9901"));
        assert!(text.ends_with("9998, 9999]"));
        assert!(!text.contains(" 100,"));
        assert!(!text.contains("9899"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn preview_keeps_both_ends(size in 1usize..2_000) {
                let d = Dataset::new(size).unwrap();
                let text = dataset_preview(&d);
                let first = format!("[{}", d[0]);
                let last = format!("{}]", d.last_value());
                prop_assert!(text.starts_with(&first));
                prop_assert!(text.ends_with(&last));
                prop_assert_eq!(text.contains("..."), size > FULL_PREVIEW_MAX);
            }

            #[test]
            fn preview_never_exceeds_edge_budget(size in 1usize..2_000) {
                let d = Dataset::new(size).unwrap();
                let shown = dataset_preview(&d)
                    .trim_matches(|c| c == '[' || c == ']')
                    .split(", ")
                    .filter(|item| *item != "...")
                    .count();
                let expected = if size <= FULL_PREVIEW_MAX { size } else { 2 * PREVIEW_EDGE };
                prop_assert_eq!(shown, expected);
            }
        }
    }
}
