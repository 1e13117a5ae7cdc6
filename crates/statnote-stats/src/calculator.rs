//! Individual descriptive statistics over a slice of samples.
//!
//! Every function accepts values in any order and returns
//! [`StatsError::EmptyInput`] for an empty slice. Order statistics (median,
//! quartiles, mode) sort an internal copy; use [`StatsReport`] to share one
//! sort across all statistics.
//!
//! # Conventions
//!
//! * Variance is the population variance (divides by `n`).
//! * Median and quartiles are positional: the element of the ascending
//!   sequence at 0-based index `floor(k * (n + 1) / 4)` for `k = 1, 2, 3`,
//!   without interpolation. This is not the textbook median: for even `n` it
//!   picks the upper of the two middle elements, and for odd `n` the element
//!   one position above the middle.
//! * Kurtosis is excess kurtosis, `m4 / m2^2 - 3`.
//! * Shape statistics fail with [`StatsError::ZeroStdDev`] instead of returning
//!   NaN or infinity when every sample is equal.
//! * Mean, standard deviation and the shape statistics stay finite for any
//!   finite samples. Range, interquartile range, variance and higher central
//!   moments are plain differences and powers; they become infinite when the
//!   true value exceeds `f64::MAX` (for example the range of
//!   `[-1e308, 1e308]`) and can underflow to zero for samples near
//!   `f64::MIN_POSITIVE`.
//!
//! [`StatsReport`]: crate::report::StatsReport

use crate::{error::StatsError, frequency::FrequencyTable};

fn sorted_copy(values: &[f64]) -> Result<Vec<f64>, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

/// Index `floor(numerator * (n + 1) / denominator)`, clamped to the last element.
///
/// The clamp only matters for `n <= 2`, where the unclamped position runs past
/// the end of the sequence.
///
/// # Examples
///
/// ```
/// use statnote_stats::calculator::positional_index;
///
/// assert_eq!(positional_index(17, 1, 2), 9);
/// assert_eq!(positional_index(17, 1, 4), 4);
/// assert_eq!(positional_index(17, 3, 4), 13);
/// assert_eq!(positional_index(1, 1, 2), 0);
/// ```
#[must_use]
pub fn positional_index(n: usize, numerator: usize, denominator: usize) -> usize {
    debug_assert!(n > 0 && denominator > 0);
    (numerator * (n + 1) / denominator).min(n - 1)
}

pub(crate) fn positional_from_sorted(
    sorted_values: &[f64],
    numerator: usize,
    denominator: usize,
) -> f64 {
    sorted_values[positional_index(sorted_values.len(), numerator, denominator)]
}

/// Central moments of a non-empty slice, accumulated on rescaled samples.
///
/// Every sample is divided by a power of two close to the largest magnitude,
/// which is exact for normal numbers, so sums stay in range for samples near
/// `f64::MAX` and squared deviations do not underflow for samples near zero.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Moments {
    scale: f64,
    /// Mean of the rescaled samples.
    mean: f64,
    /// Second central moment of the rescaled samples.
    m2: f64,
}

impl Moments {
    #[expect(clippy::cast_possible_truncation)]
    pub(crate) fn new(values: &[f64]) -> Self {
        debug_assert!(!values.is_empty());
        let max_abs = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        // `as` saturates log2(0) = -inf; the clamp keeps 2^exp and 2^-exp finite
        let exp = (max_abs.log2().round() as i32).clamp(-1000, 1000);
        let scale = 2.0_f64.powi(exp);
        let mean = scaled_moment(values, scale, 0.0, 1);
        let m2 = scaled_moment(values, scale, mean, 2);
        Self { scale, mean, m2 }
    }

    pub(crate) fn mean(&self) -> f64 {
        self.mean * self.scale
    }

    /// May be infinite when the variance itself exceeds `f64::MAX`.
    pub(crate) fn variance(&self) -> f64 {
        self.m2 * self.scale * self.scale
    }

    pub(crate) fn std_dev(&self) -> f64 {
        self.m2.sqrt() * self.scale
    }

    /// `(1/n) * sum((x - mean)^k)` in the original units.
    pub(crate) fn central(&self, values: &[f64], k: i32) -> f64 {
        scaled_moment(values, self.scale, self.mean, k) * self.scale.powi(k)
    }

    /// Rescaled standard deviation, or [`StatsError::ZeroStdDev`] when the
    /// samples have no spread.
    ///
    /// Equal samples can leave a rounding residue in the variance, so the
    /// range is tested as well.
    pub(crate) fn spread(&self, range: f64) -> Result<f64, StatsError> {
        debug_assert!(self.m2.is_finite());
        if range == 0.0 || self.m2 == 0.0 {
            return Err(StatsError::ZeroStdDev);
        }
        Ok(self.m2.sqrt())
    }

    /// `(mean - x) / std_dev`, given the rescaled deviation from [`spread`](Self::spread).
    pub(crate) fn standardized_distance(&self, spread: f64, x: f64) -> f64 {
        (self.mean - x / self.scale) / spread
    }

    /// `m3 / m2^(3/2)`; only meaningful after [`spread`](Self::spread) succeeded.
    pub(crate) fn skewness(&self, values: &[f64]) -> f64 {
        scaled_moment(values, self.scale, self.mean, 3) / self.m2.powf(1.5)
    }

    /// `m4 / m2^2 - 3`; only meaningful after [`spread`](Self::spread) succeeded.
    pub(crate) fn excess_kurtosis(&self, values: &[f64]) -> f64 {
        scaled_moment(values, self.scale, self.mean, 4) / self.m2.powi(2) - 3.0
    }
}

#[expect(clippy::cast_precision_loss)]
fn scaled_moment(values: &[f64], scale: f64, center: f64, k: i32) -> f64 {
    values
        .iter()
        .map(|v| (v / scale - center).powi(k))
        .sum::<f64>()
        / values.len() as f64
}

fn moments(values: &[f64]) -> Result<Moments, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    Ok(Moments::new(values))
}

/// Arithmetic mean, `sum / n`.
///
/// # Examples
///
/// ```
/// use statnote_stats::calculator::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 6.0]), Ok(3.0));
/// assert_eq!(mean(&[1.7e308, 1.7e308]), Ok(1.7e308));
/// ```
pub fn mean(values: &[f64]) -> Result<f64, StatsError> {
    moments(values).map(|m| m.mean())
}

/// Most frequent value; ties go to the smallest value.
pub fn mode(values: &[f64]) -> Result<f64, StatsError> {
    let sorted = sorted_copy(values)?;
    FrequencyTable::from_sorted(&sorted)
        .mode()
        .ok_or(StatsError::EmptyInput)
}

/// Positional median: the element at index `floor((n + 1) / 2)` of the
/// ascending sequence.
///
/// # Examples
///
/// ```
/// use statnote_stats::calculator::median;
///
/// // index floor(6 / 2) = 3 of [1, 3, 5, 7, 9]
/// assert_eq!(median(&[9.0, 1.0, 5.0, 3.0, 7.0]), Ok(7.0));
/// // no averaging of the middle pair
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Ok(3.0));
/// ```
pub fn median(values: &[f64]) -> Result<f64, StatsError> {
    let sorted = sorted_copy(values)?;
    Ok(positional_from_sorted(&sorted, 1, 2))
}

/// `max - min`.
pub fn range(values: &[f64]) -> Result<f64, StatsError> {
    let (min, max) = values
        .iter()
        .copied()
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
        .ok_or(StatsError::EmptyInput)?;
    Ok(max - min)
}

/// Element at index `floor((n + 1) / 4)` of the ascending sequence.
pub fn lower_quartile(values: &[f64]) -> Result<f64, StatsError> {
    let sorted = sorted_copy(values)?;
    Ok(positional_from_sorted(&sorted, 1, 4))
}

/// Element at index `floor(3 * (n + 1) / 4)` of the ascending sequence.
pub fn upper_quartile(values: &[f64]) -> Result<f64, StatsError> {
    let sorted = sorted_copy(values)?;
    Ok(positional_from_sorted(&sorted, 3, 4))
}

/// Interquartile range, `upper_quartile - lower_quartile`.
pub fn iqr(values: &[f64]) -> Result<f64, StatsError> {
    let sorted = sorted_copy(values)?;
    Ok(positional_from_sorted(&sorted, 3, 4) - positional_from_sorted(&sorted, 1, 4))
}

/// The `k`-th central moment, `(1/n) * sum((x - mean)^k)`.
///
/// # Examples
///
/// ```
/// use statnote_stats::calculator::central_moment;
///
/// assert_eq!(central_moment(&[1.0, 3.0], 1), Ok(0.0));
/// assert_eq!(central_moment(&[1.0, 3.0], 2), Ok(1.0));
/// ```
pub fn central_moment(values: &[f64], k: i32) -> Result<f64, StatsError> {
    moments(values).map(|m| m.central(values, k))
}

/// Population variance (divides by `n`).
pub fn variance(values: &[f64]) -> Result<f64, StatsError> {
    moments(values).map(|m| m.variance())
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> Result<f64, StatsError> {
    moments(values).map(|m| m.std_dev())
}

/// Pearson's first skewness coefficient, `(mean - mode) / std_dev`.
pub fn skew_mode_based(values: &[f64]) -> Result<f64, StatsError> {
    let moments = moments(values)?;
    let spread = moments.spread(range(values)?)?;
    Ok(moments.standardized_distance(spread, mode(values)?))
}

/// Pearson's second skewness coefficient, `3 * (mean - median) / std_dev`.
pub fn skew_median_based(values: &[f64]) -> Result<f64, StatsError> {
    let moments = moments(values)?;
    let spread = moments.spread(range(values)?)?;
    Ok(3.0 * moments.standardized_distance(spread, median(values)?))
}

/// Fisher-Pearson coefficient of skewness, `m3 / m2^(3/2)`.
pub fn fisher_pearson_skew(values: &[f64]) -> Result<f64, StatsError> {
    let moments = moments(values)?;
    moments.spread(range(values)?)?;
    Ok(moments.skewness(values))
}

/// Excess kurtosis, `m4 / m2^2 - 3`.
///
/// A normal distribution has excess kurtosis 0.
pub fn kurtosis(values: &[f64]) -> Result<f64, StatsError> {
    let moments = moments(values)?;
    moments.spread(range(values)?)?;
    Ok(moments.excess_kurtosis(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::REFERENCE_SAMPLES;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_reference_values() {
        let v = &REFERENCE_SAMPLES;
        assert_close(mean(v).unwrap(), 4.705_882_352_9);
        assert_eq!(mode(v), Ok(6.0));
        assert_eq!(median(v), Ok(5.0));
        assert_eq!(range(v), Ok(6.0));
        assert_eq!(lower_quartile(v), Ok(4.0));
        assert_eq!(upper_quartile(v), Ok(6.0));
        assert_eq!(iqr(v), Ok(2.0));
        assert_close(variance(v).unwrap(), 2.795_847_750_9);
        assert_close(std_dev(v).unwrap(), 1.672_078_871_0);
        assert_close(skew_mode_based(v).unwrap(), -0.773_957_299_2);
        assert_close(skew_median_based(v).unwrap(), -0.527_698_158_5);
        assert_close(fisher_pearson_skew(v).unwrap(), -0.586_737_655_5);
        assert_close(kurtosis(v).unwrap(), -0.521_578_766_8);
    }

    #[test]
    fn test_empty_input() {
        let empty: &[f64] = &[];
        let ops: [fn(&[f64]) -> Result<f64, StatsError>; 13] = [
            mean,
            mode,
            median,
            range,
            lower_quartile,
            upper_quartile,
            iqr,
            variance,
            std_dev,
            skew_mode_based,
            skew_median_based,
            fisher_pearson_skew,
            kurtosis,
        ];
        for op in ops {
            assert_eq!(op(empty), Err(StatsError::EmptyInput));
        }
        assert_eq!(central_moment(empty, 3), Err(StatsError::EmptyInput));
    }

    #[test]
    fn test_constant_values() {
        let v = [4.0; 6];
        assert_eq!(variance(&v), Ok(0.0));
        assert_eq!(std_dev(&v), Ok(0.0));
        assert_eq!(range(&v), Ok(0.0));
        assert_eq!(iqr(&v), Ok(0.0));
        assert_eq!(skew_mode_based(&v), Err(StatsError::ZeroStdDev));
        assert_eq!(skew_median_based(&v), Err(StatsError::ZeroStdDev));
        assert_eq!(fisher_pearson_skew(&v), Err(StatsError::ZeroStdDev));
        assert_eq!(kurtosis(&v), Err(StatsError::ZeroStdDev));

        let v = [0.1; 3];
        assert_eq!(fisher_pearson_skew(&v), Err(StatsError::ZeroStdDev));
    }

    #[test]
    fn test_extreme_magnitudes() {
        assert_eq!(mean(&[1.7e308, 1.7e308]), Ok(1.7e308));
        let std_dev_max = std_dev(&[f64::MAX, -f64::MAX]).unwrap();
        assert!((std_dev_max / f64::MAX - 1.0).abs() < 1e-15);
        assert_eq!(range(&[f64::MAX, -f64::MAX]), Ok(f64::INFINITY));

        let tiny = [0.0, 1e-200];
        assert_eq!(variance(&tiny), Ok(0.0));
        assert!(std_dev(&tiny).unwrap() > 0.0);
        assert_close(skew_mode_based(&tiny).unwrap(), 1.0);
        assert_close(kurtosis(&tiny).unwrap(), -2.0);

        let subnormal = [0.0, 5e-324];
        assert_eq!(mean(&subnormal).map(f64::is_finite), Ok(true));
        assert_close(fisher_pearson_skew(&subnormal).unwrap(), 0.0);
    }

    #[test]
    fn test_mode_tie_break() {
        for _ in 0..3 {
            assert_eq!(mode(&[1.0, 1.0, 2.0, 2.0]), Ok(1.0));
            assert_eq!(mode(&[2.0, 2.0, 1.0, 1.0]), Ok(1.0));
        }
    }

    #[test]
    fn test_single_value() {
        let v = [7.5];
        assert_eq!(mean(&v), Ok(7.5));
        assert_eq!(median(&v), Ok(7.5));
        assert_eq!(lower_quartile(&v), Ok(7.5));
        assert_eq!(upper_quartile(&v), Ok(7.5));
        assert_eq!(variance(&v), Ok(0.0));
        assert_eq!(kurtosis(&v), Err(StatsError::ZeroStdDev));
    }

    #[test]
    fn test_positional_index_clamps_small_sets() {
        assert_eq!(positional_index(2, 1, 2), 1);
        assert_eq!(positional_index(2, 3, 4), 1);
        assert_eq!(positional_index(2, 1, 4), 0);
        assert_eq!(positional_index(3, 3, 4), 2);
        assert_eq!(positional_index(4, 1, 2), 2);
    }

    #[test]
    fn test_order_independent() {
        let mut v = REFERENCE_SAMPLES;
        v.reverse();
        assert_eq!(median(&v), median(&REFERENCE_SAMPLES));
        assert_eq!(mode(&v), Ok(6.0));
    }

    #[test]
    fn test_symmetric_distribution_has_zero_skew() {
        let v = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_close(fisher_pearson_skew(&v).unwrap(), 0.0);
        // positional median is 4, not 3
        assert_close(skew_median_based(&v).unwrap(), -3.0 / 2.0_f64.sqrt());
        // m2 = 2, m4 = 6.8
        assert_close(kurtosis(&v).unwrap(), 6.8 / 4.0 - 3.0);
    }

    #[test]
    fn test_scipy_reference_moments() {
        // values published with scipy.stats.skew / kurtosis
        let v = [2.0, 8.0, 0.0, 4.0, 1.0, 9.0, 9.0, 0.0];
        assert_close(fisher_pearson_skew(&v).unwrap(), 0.265_055_412_269_857_3);
        assert_close(kurtosis(&v).unwrap(), -1.666_001_075_283_850_8);
    }
}
