//! Descriptive statistics over small in-memory sample sets.
//!
//! This crate provides:
//!
//! - **Sample sets**: validated, immutable input with a shared sorted copy
//! - **Calculator**: one function per statistic (mean, mode, median, range,
//!   quartiles, variance, standard deviation, skewness, kurtosis)
//! - **Reports**: every statistic of a sample set computed in one pass
//! - **Frequency tables and histograms**: distribution summaries for display
//!
//! # Modules
//!
//! - [`sample`]: Sample set construction and the reference samples
//! - [`calculator`]: Individual statistics and their conventions
//! - [`report`]: The combined report and statistic metadata
//! - [`frequency`]: Value occurrence counts, used for the mode
//! - [`histogram`]: Equal-width binning
//! - [`error`]: The error type shared by all statistics
//!
//! # Examples
//!
//! ## Computing a report
//!
//! ```
//! use statnote_stats::{report::StatsReport, sample::SampleSet};
//!
//! let samples = SampleSet::new([1.0, 4.0, 6.0, 3.0, 5.0, 7.0, 4.0]).unwrap();
//! let report = StatsReport::new(&samples);
//! assert_eq!(report.range, 6.0);
//! assert_eq!(report.mode, 4.0);
//! ```
//!
//! ## Computing a single statistic
//!
//! ```
//! use statnote_stats::{calculator, error::StatsError};
//!
//! assert_eq!(calculator::variance(&[1.0, 3.0]), Ok(1.0));
//! assert_eq!(calculator::mean(&[]), Err(StatsError::EmptyInput));
//! assert_eq!(calculator::kurtosis(&[2.0, 2.0]), Err(StatsError::ZeroStdDev));
//! ```

pub mod calculator;
pub mod error;
pub mod frequency;
pub mod histogram;
pub mod report;
pub mod sample;
