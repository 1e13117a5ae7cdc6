use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use statnote_stats::{frequency::FrequencyTable, report::StatsReport, sample::SampleSet};

/// JSON document written by `describe --format json`
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument<'a> {
    /// Timestamp when the report was generated (ISO 8601 format)
    pub generated_at: DateTime<Utc>,
    /// Where the samples came from
    pub source: SampleSource,
    /// Samples in input order
    pub samples: &'a [f64],
    /// Computed statistics; undefined statistics are null
    pub report: &'a StatsReport,
    /// Occurrence count of each distinct value
    pub frequencies: FrequencyTable,
}

impl<'a> ReportDocument<'a> {
    pub fn new(source: SampleSource, samples: &'a SampleSet, report: &'a StatsReport) -> Self {
        Self {
            generated_at: Utc::now(),
            source,
            samples: samples.values(),
            report,
            frequencies: FrequencyTable::from_sorted(samples.sorted()),
        }
    }
}

/// Origin of a sample set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleSource {
    /// The built-in reference samples
    Reference,
    /// Values given on the command line
    Arguments,
    /// Values read from a file
    File { path: PathBuf },
}
