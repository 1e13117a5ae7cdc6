use serde::Serialize;

/// Failure of a single statistic computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// The statistic needs at least one sample.
    #[display("sample set is empty")]
    EmptyInput,
    /// A sample is NaN or infinite.
    #[display("sample #{index} is not a finite number ({value})")]
    NonFiniteValue { index: usize, value: f64 },
    /// The statistic divides by the standard deviation, which is zero.
    #[display("standard deviation is zero (all samples are equal)")]
    ZeroStdDev,
}
