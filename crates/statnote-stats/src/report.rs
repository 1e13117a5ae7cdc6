use serde::{Serialize, Serializer};

use crate::{
    calculator::{Moments, positional_from_sorted},
    error::StatsError,
    frequency::FrequencyTable,
    sample::SampleSet,
};

/// All descriptive statistics of a [`SampleSet`].
///
/// Central tendency and dispersion measures cannot fail on a non-empty sample
/// set. The shape statistics divide by the standard deviation and are kept as
/// individual results, so a zero-spread sample set still yields every other
/// statistic. Failed results serialize as `null`.
///
/// # Examples
///
/// ```
/// use statnote_stats::{error::StatsError, report::StatsReport, sample::SampleSet};
///
/// let report = StatsReport::new(&SampleSet::reference());
/// assert_eq!(report.mode, 6.0);
/// assert_eq!(report.iqr, 2.0);
///
/// let flat = StatsReport::new(&SampleSet::new([3.0, 3.0]).unwrap());
/// assert_eq!(flat.variance, 0.0);
/// assert_eq!(flat.kurtosis, Err(StatsError::ZeroStdDev));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub mean: f64,
    pub mode: f64,
    /// Positional median, see [`calculator::median`](crate::calculator::median).
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub lower_quartile: f64,
    pub upper_quartile: f64,
    pub iqr: f64,
    /// Population variance.
    pub variance: f64,
    pub std_dev: f64,
    /// Pearson's first skewness coefficient (sk1).
    #[serde(serialize_with = "serialize_result")]
    pub skew_mode_based: Result<f64, StatsError>,
    /// Pearson's second skewness coefficient (sk2).
    #[serde(serialize_with = "serialize_result")]
    pub skew_median_based: Result<f64, StatsError>,
    /// Fisher-Pearson coefficient of skewness (g1).
    #[serde(serialize_with = "serialize_result")]
    pub fisher_pearson_skew: Result<f64, StatsError>,
    /// Excess kurtosis.
    #[serde(serialize_with = "serialize_result")]
    pub kurtosis: Result<f64, StatsError>,
}

fn serialize_result<S>(value: &Result<f64, StatsError>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    value.as_ref().ok().serialize(serializer)
}

impl StatsReport {
    #[must_use]
    pub fn new(samples: &SampleSet) -> Self {
        let values = samples.values();
        let sorted = samples.sorted();

        // SampleSet guarantees at least one finite value
        let min = sorted[0];
        let max = sorted[sorted.len() - 1];
        let range = max - min;
        let mode = FrequencyTable::from_sorted(sorted).mode().unwrap_or(min);
        let median = positional_from_sorted(sorted, 1, 2);
        let lower_quartile = positional_from_sorted(sorted, 1, 4);
        let upper_quartile = positional_from_sorted(sorted, 3, 4);

        let moments = Moments::new(values);
        let mean = moments.mean();
        let variance = moments.variance();
        let std_dev = moments.std_dev();

        // same zero-spread rule and arithmetic as the calculator functions
        let spread = moments.spread(range);
        let skew_mode_based = spread.map(|spread| moments.standardized_distance(spread, mode));
        let skew_median_based =
            spread.map(|spread| 3.0 * moments.standardized_distance(spread, median));
        let fisher_pearson_skew = spread.map(|_| moments.skewness(values));
        let kurtosis = spread.map(|_| moments.excess_kurtosis(values));

        Self {
            mean,
            mode,
            median,
            min,
            max,
            range,
            lower_quartile,
            upper_quartile,
            iqr: upper_quartile - lower_quartile,
            variance,
            std_dev,
            skew_mode_based,
            skew_median_based,
            fisher_pearson_skew,
            kurtosis,
        }
    }

    /// Looks up a single statistic.
    #[must_use]
    pub fn get(&self, statistic: Statistic) -> Result<f64, StatsError> {
        match statistic {
            Statistic::Mean => Ok(self.mean),
            Statistic::Mode => Ok(self.mode),
            Statistic::Median => Ok(self.median),
            Statistic::Range => Ok(self.range),
            Statistic::UpperQuartile => Ok(self.upper_quartile),
            Statistic::LowerQuartile => Ok(self.lower_quartile),
            Statistic::Iqr => Ok(self.iqr),
            Statistic::Variance => Ok(self.variance),
            Statistic::StdDev => Ok(self.std_dev),
            Statistic::SkewModeBased => self.skew_mode_based,
            Statistic::SkewMedianBased => self.skew_median_based,
            Statistic::FisherPearsonSkew => self.fisher_pearson_skew,
            Statistic::Kurtosis => self.kurtosis,
        }
    }

    /// Every statistic with its value, in [`Statistic::ALL`] order.
    pub fn entries(&self) -> impl Iterator<Item = (Statistic, Result<f64, StatsError>)> + '_ {
        Statistic::ALL.iter().map(|&s| (s, self.get(s)))
    }
}

/// Identifies one reported statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    Mean,
    Mode,
    Median,
    Range,
    UpperQuartile,
    LowerQuartile,
    Iqr,
    Variance,
    StdDev,
    SkewModeBased,
    SkewMedianBased,
    FisherPearsonSkew,
    Kurtosis,
}

impl Statistic {
    /// Report order.
    pub const ALL: [Self; 13] = [
        Self::Mean,
        Self::Mode,
        Self::Median,
        Self::Range,
        Self::UpperQuartile,
        Self::LowerQuartile,
        Self::Iqr,
        Self::Variance,
        Self::StdDev,
        Self::SkewModeBased,
        Self::SkewMedianBased,
        Self::FisherPearsonSkew,
        Self::Kurtosis,
    ];

    /// Short label used in the text report.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Mode => "mode",
            Self::Median => "median",
            Self::Range => "range",
            Self::UpperQuartile => "upper quartile",
            Self::LowerQuartile => "lower quartile",
            Self::Iqr => "IQR",
            Self::Variance => "variance",
            Self::StdDev => "std",
            Self::SkewModeBased => "sk1",
            Self::SkewMedianBased => "sk2",
            Self::FisherPearsonSkew => "g1",
            Self::Kurtosis => "kurtosis",
        }
    }

    /// Full name of the statistic.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Mean => "Arithmetic mean",
            Self::Mode => "Mode",
            Self::Median => "Median",
            Self::Range => "Range",
            Self::UpperQuartile => "Upper quartile",
            Self::LowerQuartile => "Lower quartile",
            Self::Iqr => "Interquartile range",
            Self::Variance => "Variance",
            Self::StdDev => "Standard deviation",
            Self::SkewModeBased => "Pearson's first skewness coefficient",
            Self::SkewMedianBased => "Pearson's second skewness coefficient",
            Self::FisherPearsonSkew => "Fisher-Pearson coefficient of skewness",
            Self::Kurtosis => "Excess kurtosis",
        }
    }

    /// Formula as computed by this crate.
    #[must_use]
    pub fn formula(self) -> &'static str {
        match self {
            Self::Mean => "sum(x) / n",
            Self::Mode => "most frequent value, smallest on ties",
            Self::Median => "sorted[floor((n + 1) / 2)]",
            Self::Range => "max - min",
            Self::UpperQuartile => "sorted[floor(3 * (n + 1) / 4)]",
            Self::LowerQuartile => "sorted[floor((n + 1) / 4)]",
            Self::Iqr => "upper quartile - lower quartile",
            Self::Variance => "sum((x - mean)^2) / n",
            Self::StdDev => "sqrt(variance)",
            Self::SkewModeBased => "(mean - mode) / std",
            Self::SkewMedianBased => "3 * (mean - median) / std",
            Self::FisherPearsonSkew => "m3 / m2^(3/2)",
            Self::Kurtosis => "m4 / m2^2 - 3",
        }
    }

    /// Explanatory paragraph shown alongside the value.
    #[must_use]
    pub fn explanation(self) -> &'static str {
        match self {
            Self::Mean => {
                "The mean is the sum of all samples divided by their count. It is a measure of \
                 central tendency that every sample contributes to, so outliers pull it."
            }
            Self::Mode => {
                "The mode is the value that occurs most often. A sample set can have several \
                 values with the same highest count; the smallest of them is reported."
            }
            Self::Median => {
                "The median splits the ordered samples into a lower and an upper half. It is \
                 taken here as the element at a fixed position of the sorted samples, without \
                 averaging the two middle elements, so it can differ from the textbook median."
            }
            Self::Range => {
                "The range is the distance between the largest and the smallest sample, the \
                 simplest measure of dispersion."
            }
            Self::UpperQuartile => {
                "The upper quartile marks the point below which three quarters of the ordered \
                 samples fall. It is read at a fixed position without interpolation."
            }
            Self::LowerQuartile => {
                "The lower quartile marks the point below which one quarter of the ordered \
                 samples fall. It is read at a fixed position without interpolation."
            }
            Self::Iqr => {
                "The interquartile range is the spread of the middle half of the samples. \
                 Unlike the range it ignores the extreme values."
            }
            Self::Variance => {
                "The variance is the mean squared distance of the samples from their mean. \
                 The population form divides by n rather than n - 1."
            }
            Self::StdDev => {
                "The standard deviation is the square root of the variance, expressing the \
                 typical distance from the mean in the units of the samples."
            }
            Self::SkewModeBased => {
                "Pearson's first coefficient compares the mean with the mode. A negative value \
                 means the mean lies below the mode and the distribution leans to the left."
            }
            Self::SkewMedianBased => {
                "Pearson's second coefficient compares the mean with the median, which is more \
                 stable than the mode for small sample sets."
            }
            Self::FisherPearsonSkew => {
                "The Fisher-Pearson coefficient is the third standardized moment. It is zero \
                 for a symmetric distribution, negative for a longer left tail and positive \
                 for a longer right tail."
            }
            Self::Kurtosis => {
                "Kurtosis is the fourth standardized moment and describes how heavy the tails \
                 are. Three is subtracted so that a normal distribution scores zero; negative \
                 values indicate lighter tails, positive values heavier tails."
            }
        }
    }
}
