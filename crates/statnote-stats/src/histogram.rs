use std::ops::Range;

use serde::Serialize;

/// Equal-width histogram over the full data range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// Bins in ascending order. The last bin's range ends just past the maximum
    /// so that the maximum itself is counted.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Values covered by this bin (inclusive start, exclusive end).
    pub range: Range<f64>,
    /// Number of values inside `range`.
    pub count: u64,
}

impl Histogram {
    /// Creates a histogram from unsorted values.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statnote_stats::histogram::Histogram;
    /// let histogram = Histogram::new(&[5.0, 2.0, 8.0, 1.0, 9.0, 3.0], 4);
    /// assert_eq!(histogram.bins.len(), 4);
    /// assert_eq!(histogram.bins.iter().map(|b| b.count).sum::<u64>(), 6);
    /// ```
    #[must_use]
    pub fn new(values: &[f64], num_bins: usize) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, num_bins)
    }

    /// Creates a histogram from values sorted in ascending order.
    ///
    /// Empty input or `num_bins == 0` yields no bins. When every value is equal
    /// a single bin holds all of them.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], num_bins: usize) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
            return Self { bins: vec![] };
        };
        if num_bins == 0 {
            return Self { bins: vec![] };
        }

        let width = max - min;
        if width == 0.0 {
            return Self {
                bins: vec![HistogramBin {
                    range: min..max.next_up(),
                    count: sorted_values.len() as u64,
                }],
            };
        }

        let bin_width = width / num_bins as f64;
        let mut bins = (0..num_bins)
            .map(|idx| {
                // recompute each edge from min to avoid accumulating rounding error
                let start = min + bin_width * idx as f64;
                let end = if idx == num_bins - 1 {
                    max.next_up()
                } else {
                    min + bin_width * (idx + 1) as f64
                };
                HistogramBin {
                    range: start..end,
                    count: 0,
                }
            })
            .collect::<Vec<_>>();

        for &val in sorted_values {
            let idx = (((val - min) / bin_width).floor() as usize).min(num_bins - 1);
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// The highest bin count, or 0 when there are no bins.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}
