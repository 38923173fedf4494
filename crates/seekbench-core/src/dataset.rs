//! Sorted integer datasets searched by the benchmarks.

use std::ops::Deref;

use crate::error::BenchError;

/// An immutable ascending run of integers `0, 1, ..., size - 1`.
///
/// Contiguous values make the dataset sorted and duplicate-free by
/// construction, which is the precondition [`binary_search`] relies on.
///
/// [`binary_search`]: crate::binary_search
///
/// # Examples
///
/// ```
/// use seekbench_core::Dataset;
///
/// let d = Dataset::new(5).unwrap();
/// assert_eq!(d.values(), &[0, 1, 2, 3, 4]);
/// assert_eq!(d.last_value(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataset {
    values: Vec<i64>,
}

impl Dataset {
    /// Largest size accepted by [`Dataset::new`].
    ///
    /// A `Vec` allocation cannot exceed `isize::MAX` bytes, so the cap is
    /// that byte limit divided by the `i64` element width.
    pub const MAX_SIZE: usize = isize::MAX as usize / std::mem::size_of::<i64>();

    /// Build the dataset `0..size`.
    ///
    /// Returns `Err(BenchError::EmptyDataset)` if `size == 0`,
    /// `Err(BenchError::SizeTooLarge)` above [`Dataset::MAX_SIZE`] and
    /// `Err(BenchError::AllocationFailed)` when the allocator refuses the
    /// buffer.
    pub fn new(size: usize) -> Result<Self, BenchError> {
        if size == 0 {
            return Err(BenchError::EmptyDataset);
        }
        if size > Self::MAX_SIZE {
            return Err(BenchError::SizeTooLarge { size });
        }
        let end = i64::try_from(size).map_err(|_| BenchError::SizeTooLarge { size })?;
        let mut values = Vec::new();
        values
            .try_reserve_exact(size)
            .map_err(|_| BenchError::AllocationFailed { size })?;
        values.extend(0..end);
        Ok(Self { values })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always returns `false`: construction rejects `size == 0`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The underlying sorted values.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// The largest value, `size - 1`.
    pub fn last_value(&self) -> i64 {
        self.values.last().copied().unwrap_or(0)
    }
}

impl Deref for Dataset {
    type Target = [i64];

    fn deref(&self) -> &[i64] {
        &self.values
    }
}

impl AsRef<[i64]> for Dataset {
    fn as_ref(&self) -> &[i64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_rejected() {
        assert_eq!(Dataset::new(0), Err(BenchError::EmptyDataset));
    }

    #[test]
    fn contiguous_and_sorted() {
        let d = Dataset::new(1000).unwrap();
        assert_eq!(d.len(), 1000);
        assert!(!d.is_empty());
        assert!(d.windows(2).all(|w| w[0] + 1 == w[1]));
        assert_eq!(d[0], 0);
        assert_eq!(d.last_value(), 999);
    }

    #[test]
    fn size_cap_accounts_for_element_width() {
        assert_eq!(Dataset::MAX_SIZE, isize::MAX as usize / 8);
        assert_eq!(
            Dataset::new(Dataset::MAX_SIZE + 1),
            Err(BenchError::SizeTooLarge {
                size: Dataset::MAX_SIZE + 1
            })
        );
        assert_eq!(
            Dataset::new(usize::MAX),
            Err(BenchError::SizeTooLarge { size: usize::MAX })
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn unallocatable_size_is_an_error() {
        // Within the cap on 64-bit targets, but far beyond any real heap.
        let size = Dataset::MAX_SIZE;
        assert!(matches!(
            Dataset::new(size),
            Err(BenchError::AllocationFailed { .. }) | Err(BenchError::SizeTooLarge { .. })
        ));
    }

    #[test]
    fn single_element() {
        let d = Dataset::new(1).unwrap();
        assert_eq!(d.values(), &[0]);
        assert_eq!(d.last_value(), 0);
    }
}
