use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use statnote_stats::{
    frequency::FrequencyTable, histogram::Histogram, report::StatsReport, sample::SampleSet,
};

use crate::{
    render::{self, TextOptions},
    schema::report::{ReportDocument, SampleSource},
    util::{self, Output},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct DescribeArg {
    /// Sample values (the reference samples are used when neither values nor --input are given)
    #[arg(allow_negative_numbers = true, conflicts_with = "input")]
    values: Vec<f64>,

    /// Read samples from a file (.json array, or numbers separated by whitespace/commas)
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Output file path (defaults to stdout)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Print an explanation below each statistic
    #[arg(long)]
    explain: bool,

    /// Digits after the decimal point in text output (statistics and histogram bin edges)
    #[arg(long, default_value_t = 6)]
    precision: usize,

    /// Histogram bin count for the text chart (0 disables the chart,
    /// omitted draws one bar per distinct value)
    #[arg(long)]
    bins: Option<usize>,
}

impl Default for DescribeArg {
    fn default() -> Self {
        Self {
            values: vec![],
            input: None,
            format: Format::Text,
            output: None,
            explain: false,
            precision: 6,
            bins: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

pub(crate) fn run(arg: &DescribeArg) -> anyhow::Result<()> {
    let (source, samples) = load_samples(arg)?;
    tracing::info!(count = samples.len(), ?source, "loaded samples");

    let report = StatsReport::new(&samples);
    tracing::debug!(?report, "computed report");
    for (statistic, value) in report.entries() {
        if let Err(e) = value {
            tracing::warn!("{} is undefined: {e}", statistic.label());
        }
    }

    let mut output = Output::from_output_path(arg.output.clone())?;
    tracing::info!(destination = %output.display_path(), "writing report");
    match arg.format {
        Format::Json => output.write_json(ReportDocument::new(source, &samples, &report))?,
        Format::Text => output.write_text(&render_text(arg, &samples, &report)?)?,
    }
    Ok(())
}

fn load_samples(arg: &DescribeArg) -> anyhow::Result<(SampleSource, SampleSet)> {
    if let Some(path) = &arg.input {
        let values = util::read_samples_file(path)?;
        let samples = SampleSet::new(values)
            .with_context(|| format!("Invalid samples in {}", path.display()))?;
        return Ok((SampleSource::File { path: path.clone() }, samples));
    }
    if !arg.values.is_empty() {
        let samples = SampleSet::new(arg.values.iter().copied())
            .context("Invalid samples on the command line")?;
        return Ok((SampleSource::Arguments, samples));
    }
    Ok((SampleSource::Reference, SampleSet::reference()))
}

fn render_text(
    arg: &DescribeArg,
    samples: &SampleSet,
    report: &StatsReport,
) -> anyhow::Result<String> {
    let options = TextOptions {
        precision: arg.precision,
        explain: arg.explain,
    };
    let mut text = render::render_report(samples.values(), report, options)?;
    let chart = match arg.bins {
        Some(0) => None,
        Some(num_bins) => Some(render::render_histogram(
            &Histogram::from_sorted(samples.sorted(), num_bins),
            arg.precision,
        )?),
        None => Some(render::render_frequency_chart(&FrequencyTable::from_sorted(
            samples.sorted(),
        ))?),
    };
    if let Some(chart) = chart {
        text.push('\n');
        text.push_str(&chart);
    }
    Ok(text)
}
