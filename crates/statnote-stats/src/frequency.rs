use serde::Serialize;

/// Occurrence counts of each distinct sample value.
///
/// Entries are stored in ascending value order.
///
/// # Examples
///
/// ```
/// use statnote_stats::frequency::FrequencyTable;
///
/// let table = FrequencyTable::from_sorted(&[1.0, 2.0, 2.0, 3.0]);
/// assert_eq!(table.as_slice(), &[(1.0, 1), (2.0, 2), (3.0, 1)]);
/// assert_eq!(table.mode(), Some(2.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTable {
    entries: Vec<(f64, u64)>,
}

impl FrequencyTable {
    /// Counts values from unsorted input.
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Counts values from input sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let entries = sorted_values
            .chunk_by(|a, b| a == b)
            .map(|run| (run[0], run.len() as u64))
            .collect();
        Self { entries }
    }

    /// The most frequent value.
    ///
    /// Ties are broken by the smallest value. Returns `None` for an empty table.
    #[must_use]
    pub fn mode(&self) -> Option<f64> {
        let mut best: Option<(f64, u64)> = None;
        for &(value, count) in &self.entries {
            // strictly greater keeps the earliest (smallest) value on ties
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((value, count));
            }
        }
        best.map(|(value, _)| value)
    }

    /// The highest occurrence count, or 0 for an empty table.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.entries.iter().map(|&(_, c)| c).max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, u64)> + '_ {
        self.entries.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[(f64, u64)] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        let table = FrequencyTable::from_sorted(&[]);
        assert!(table.is_empty());
        assert_eq!(table.mode(), None);
        assert_eq!(table.max_count(), 0);
    }

    #[test]
    fn test_tie_goes_to_smallest_value() {
        let table = FrequencyTable::new(&[2.0, 1.0, 2.0, 1.0]);
        assert_eq!(table.mode(), Some(1.0));

        let table = FrequencyTable::new(&[9.0, 8.0, 7.0]);
        assert_eq!(table.mode(), Some(7.0));
    }

    #[test]
    fn test_reference_counts() {
        let table = FrequencyTable::new(&crate::sample::REFERENCE_SAMPLES);
        assert_eq!(
            table.as_slice(),
            &[
                (1.0, 1),
                (2.0, 1),
                (3.0, 2),
                (4.0, 3),
                (5.0, 3),
                (6.0, 5),
                (7.0, 2)
            ]
        );
        assert_eq!(table.mode(), Some(6.0));
        assert_eq!(table.max_count(), 5);
        assert_eq!(table.iter().map(|(_, c)| c).sum::<u64>(), 17);
    }

    #[test]
    #[should_panic(expected = "values must be sorted")]
    fn test_unsorted_panics() {
        let _ = FrequencyTable::from_sorted(&[2.0, 1.0]);
    }
}
