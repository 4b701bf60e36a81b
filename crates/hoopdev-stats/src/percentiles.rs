use serde::Serialize;

/// Computes a single percentile value from sorted data.
///
/// Uses the nearest-rank method without interpolation: for `n` values the
/// `p`-th percentile is the element at index `floor(n * p / 100)`, capped
/// at the last element.
///
/// Returns `None` if the input is empty.
///
/// # Examples
///
/// ```
/// use hoopdev_stats::percentiles::compute_percentile;
///
/// let values = [10, 20, 30, 40];
/// assert_eq!(compute_percentile(&values, 25.0), Some(20));
/// assert_eq!(compute_percentile(&values, 50.0), Some(30));
/// assert_eq!(compute_percentile(&values, 75.0), Some(40));
/// assert_eq!(compute_percentile::<u8>(&[], 50.0), None);
/// ```
#[must_use]
pub fn compute_percentile<T>(sorted_values: &[T], percentile: f64) -> Option<T>
where
    T: Copy,
{
    if sorted_values.is_empty() {
        return None;
    }
    let idx = percentile_index(sorted_values.len(), percentile);
    Some(sorted_values[idx])
}

/// Index of the `percentile`-th element among `len` sorted values.
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn percentile_index(len: usize, percentile: f64) -> usize {
    let idx = ((len as f64 * percentile) / 100.0).floor().max(0.0) as usize;
    idx.min(len.saturating_sub(1))
}

/// Minimum, quartiles and maximum of a dataset.
///
/// Quartiles are exact elements of the sorted data (see
/// [`compute_percentile`]), never interpolated between neighbors.
///
/// # Examples
///
/// ```
/// use hoopdev_stats::percentiles::FiveNumberSummary;
///
/// let summary = FiveNumberSummary::new([40, 10, 30, 20]).unwrap();
/// assert_eq!(summary.as_array(), [10, 20, 30, 40, 40]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FiveNumberSummary<T> {
    pub min: T,
    pub q1: T,
    pub median: T,
    pub q3: T,
    pub max: T,
}

impl<T> FiveNumberSummary<T>
where
    T: Copy + Ord,
{
    /// Computes the summary from unsorted values.
    ///
    /// Returns `None` if `values` is empty.
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_unstable();
        Self::from_sorted(&values)
    }

    /// Computes the summary from values sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[T]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );
        Some(Self {
            min: *sorted_values.first()?,
            q1: compute_percentile(sorted_values, 25.0)?,
            median: compute_percentile(sorted_values, 50.0)?,
            q3: compute_percentile(sorted_values, 75.0)?,
            max: *sorted_values.last()?,
        })
    }

    /// Values in min / q1 / median / q3 / max order.
    #[must_use]
    pub fn as_array(&self) -> [T; 5] {
        [self.min, self.q1, self.median, self.q3, self.max]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quartiles_pick_exact_elements() {
        let sorted = [10, 20, 30, 40];
        assert_eq!(percentile_index(4, 25.0), 1);
        assert_eq!(percentile_index(4, 50.0), 2);
        assert_eq!(percentile_index(4, 75.0), 3);
        let summary = FiveNumberSummary::from_sorted(&sorted).unwrap();
        assert_eq!(summary.min, 10);
        assert_eq!(summary.q1, 20);
        assert_eq!(summary.median, 30);
        assert_eq!(summary.q3, 40);
        assert_eq!(summary.max, 40);
    }

    #[test]
    fn test_no_interpolation_for_odd_lengths() {
        let summary = FiveNumberSummary::new([5, 1, 4, 2, 3]).unwrap();
        // indices 1, 2, 3
        assert_eq!(summary.as_array(), [1, 2, 3, 4, 5]);

        let summary = FiveNumberSummary::new([25, 15]).unwrap();
        assert_eq!(summary.as_array(), [15, 15, 25, 25, 25]);
    }

    #[test]
    fn test_new_accepts_any_order() {
        let summary = FiveNumberSummary::new([u32::MAX, 7, 0, 7, 3, u32::MAX, 0]).unwrap();
        assert_eq!(summary.as_array(), [0, 0, 7, u32::MAX, u32::MAX]);
    }

    #[test]
    fn test_single_value() {
        let summary = FiveNumberSummary::new([42u8]).unwrap();
        assert_eq!(summary.as_array(), [42; 5]);
    }

    #[test]
    fn test_empty_values() {
        assert!(FiveNumberSummary::<u8>::new([]).is_none());
        assert_eq!(compute_percentile::<f64>(&[], 25.0), None);
    }

    #[test]
    fn test_percentile_index_caps_at_last() {
        assert_eq!(percentile_index(4, 100.0), 3);
        assert_eq!(percentile_index(4, 150.0), 3);
        assert_eq!(percentile_index(4, -10.0), 0);
        assert_eq!(percentile_index(0, 50.0), 0);
    }

    #[test]
    #[should_panic(expected = "values must be sorted")]
    fn test_from_sorted_rejects_unsorted() {
        let _ = FiveNumberSummary::from_sorted(&[3, 1, 2]);
    }
}
