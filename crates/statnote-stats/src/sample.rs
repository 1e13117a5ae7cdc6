use serde::Serialize;

use crate::error::StatsError;

/// The fixed sample array used by the notebook walkthrough.
pub const REFERENCE_SAMPLES: [f64; 17] = [
    1.0, 4.0, 6.0, 3.0, 5.0, 7.0, 4.0, 2.0, 3.0, 4.0, 6.0, 6.0, 5.0, 7.0, 6.0, 6.0, 5.0,
];

/// A non-empty, immutable set of finite samples.
///
/// The ascending copy needed by the order statistics is derived once at
/// construction, so every statistic computed from the same set sees the same
/// ordering.
///
/// # Examples
///
/// ```
/// use statnote_stats::sample::SampleSet;
///
/// let samples = SampleSet::new([3.0, 1.0, 2.0]).unwrap();
/// assert_eq!(samples.values(), &[3.0, 1.0, 2.0]);
/// assert_eq!(samples.sorted(), &[1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleSet {
    values: Vec<f64>,
    #[serde(skip)]
    sorted: Vec<f64>,
}

impl SampleSet {
    /// Collects samples into a set.
    ///
    /// # Errors
    ///
    /// * [`StatsError::EmptyInput`] - if `values` yields nothing
    /// * [`StatsError::NonFiniteValue`] - if any value is NaN or infinite
    pub fn new<I>(values: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        if values.is_empty() {
            return Err(StatsError::EmptyInput);
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(StatsError::NonFiniteValue { index, value });
        }

        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);
        Ok(Self { values, sorted })
    }

    /// The notebook's reference samples.
    #[must_use]
    pub fn reference() -> Self {
        let values = REFERENCE_SAMPLES.to_vec();
        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);
        Self { values, sorted }
    }

    /// Samples in their original order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Samples in ascending order.
    #[must_use]
    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; kept for symmetry with [`len`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
