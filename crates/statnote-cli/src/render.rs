//! Text rendering of reports
//!
//! Every function writes into a `String` so the caller decides where the text
//! goes.

use std::fmt::{self, Write as _};

use statnote_stats::{
    frequency::FrequencyTable,
    histogram::Histogram,
    report::{Statistic, StatsReport},
};

const LABEL_WIDTH: usize = 16;
const BAR_WIDTH: usize = 40;

/// Report layout options
#[derive(Debug, Clone, Copy)]
pub struct TextOptions {
    /// Digits after the decimal point
    pub precision: usize,
    /// Print the explanation below each statistic
    pub explain: bool,
}

/// Render the samples line followed by one line per statistic
pub fn render_report(
    samples: &[f64],
    report: &StatsReport,
    options: TextOptions,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let samples = samples
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "{:<LABEL_WIDTH$}: [{samples}]", "samples")?;

    for (statistic, value) in report.entries() {
        let value = match value {
            Ok(v) => format!("{v:.prec$}", prec = options.precision),
            Err(e) => format!("undefined ({e})"),
        };
        writeln!(out, "{:<LABEL_WIDTH$}: {value}", statistic.label())?;
        if options.explain {
            write_wrapped(&mut out, statistic.explanation(), 4)?;
        }
    }
    Ok(out)
}

/// Render the description of every statistic
pub fn render_explanations() -> Result<String, fmt::Error> {
    let mut out = String::new();
    for (idx, statistic) in Statistic::ALL.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        writeln!(out, "{} ({})", statistic.name(), statistic.label())?;
        writeln!(out, "    formula: {}", statistic.formula())?;
        write_wrapped(&mut out, statistic.explanation(), 4)?;
    }
    Ok(out)
}

/// Render one bar per distinct value
pub fn render_frequency_chart(table: &FrequencyTable) -> Result<String, fmt::Error> {
    let labels = table
        .iter()
        .map(|(value, _)| value.to_string())
        .collect::<Vec<_>>();
    let width = labels.iter().map(String::len).max().unwrap_or(0);
    let max_count = table.max_count();

    let mut out = String::new();
    writeln!(out, "Frequencies:")?;
    for (label, (_, count)) in labels.iter().zip(table.iter()) {
        writeln!(
            out,
            "  {label:>width$} | {} {count}",
            bar(count, max_count)
        )?;
    }
    Ok(out)
}

/// Render one bar per histogram bin
pub fn render_histogram(histogram: &Histogram, precision: usize) -> Result<String, fmt::Error> {
    let labels = histogram
        .bins
        .iter()
        .enumerate()
        .map(|(idx, bin)| {
            let close = if idx + 1 == histogram.bins.len() {
                ']'
            } else {
                ')'
            };
            // the last range ends at next_up(max); show the max itself
            let end = if close == ']' {
                bin.range.end.next_down()
            } else {
                bin.range.end
            };
            format!(
                "[{:.precision$}, {end:.precision$}{close}",
                bin.range.start
            )
        })
        .collect::<Vec<_>>();
    let width = labels.iter().map(String::len).max().unwrap_or(0);
    let max_count = histogram.max_count();

    let mut out = String::new();
    writeln!(out, "Histogram:")?;
    for (label, bin) in labels.iter().zip(&histogram.bins) {
        writeln!(
            out,
            "  {label:<width$} | {} {}",
            bar(bin.count, max_count),
            bin.count
        )?;
    }
    Ok(out)
}

#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn bar(count: u64, max_count: u64) -> String {
    if max_count == 0 {
        return String::new();
    }
    let len = ((count as f64 / max_count as f64) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.max(usize::from(count > 0)))
}

fn write_wrapped(out: &mut String, text: &str, indent: usize) -> fmt::Result {
    const WRAP: usize = 76;
    let mut line_len = 0;
    for word in text.split_whitespace() {
        if line_len == 0 {
            write!(out, "{:indent$}{word}", "")?;
            line_len = indent + word.len();
        } else if line_len + 1 + word.len() > WRAP {
            write!(out, "\n{:indent$}{word}", "")?;
            line_len = indent + word.len();
        } else {
            write!(out, " {word}")?;
            line_len += 1 + word.len();
        }
    }
    if line_len > 0 {
        out.push('\n');
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use statnote_stats::sample::SampleSet;

    use super::*;

    const OPTIONS: TextOptions = TextOptions {
        precision: 4,
        explain: false,
    };

    #[test]
    fn test_report_lines_in_order() {
        let samples = SampleSet::reference();
        let report = StatsReport::new(&samples);
        let text = render_report(samples.values(), &report, OPTIONS).unwrap();
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 14);
        assert_eq!(
            lines[0],
            "samples         : [1, 4, 6, 3, 5, 7, 4, 2, 3, 4, 6, 6, 5, 7, 6, 6, 5]"
        );
        assert_eq!(lines[1], "mean            : 4.7059");
        assert_eq!(lines[2], "mode            : 6.0000");
        assert_eq!(lines[4], "range           : 6.0000");
        assert_eq!(lines[5], "upper quartile  : 6.0000");
        assert_eq!(lines[6], "lower quartile  : 4.0000");
        assert_eq!(lines[10], "sk1             : -0.7740");
        assert_eq!(lines[13], "kurtosis        : -0.5216");
    }

    #[test]
    fn test_undefined_statistics() {
        let samples = SampleSet::new([5.0, 5.0]).unwrap();
        let report = StatsReport::new(&samples);
        let text = render_report(samples.values(), &report, OPTIONS).unwrap();
        assert!(text.contains(
            "g1              : undefined (standard deviation is zero (all samples are equal))"
        ));
        assert!(text.contains("variance        : 0.0000"));
    }

    #[test]
    fn test_explain_adds_text() {
        let samples = SampleSet::reference();
        let report = StatsReport::new(&samples);
        let plain = render_report(samples.values(), &report, OPTIONS).unwrap();
        let explained = render_report(
            samples.values(),
            &report,
            TextOptions {
                explain: true,
                ..OPTIONS
            },
        )
        .unwrap();
        assert!(explained.len() > plain.len());
        assert!(explained.lines().all(|l| l.len() <= 80));
    }

    #[test]
    fn test_explanations_cover_every_statistic() {
        let text = render_explanations().unwrap();
        for statistic in Statistic::ALL {
            assert!(text.contains(statistic.name()));
            assert!(text.contains(statistic.formula()));
        }
    }

    #[test]
    fn test_frequency_chart() {
        let table = FrequencyTable::new(&[1.0, 2.0, 2.0, 10.0]);
        let text = render_frequency_chart(&table).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "Frequencies:");
        assert_eq!(lines[1], format!("   1 | {} 1", "#".repeat(20)));
        assert_eq!(lines[2], format!("   2 | {} 2", "#".repeat(40)));
        assert_eq!(lines[3], format!("  10 | {} 1", "#".repeat(20)));
    }

    #[test]
    fn test_histogram_chart() {
        let histogram = Histogram::new(&[0.0, 1.0, 1.5, 4.0], 2);
        let text = render_histogram(&histogram, 1).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "Histogram:");
        assert_eq!(lines[1], format!("  [0.0, 2.0) | {} 3", "#".repeat(40)));
        assert_eq!(lines[2], format!("  [2.0, 4.0] | {} 1", "#".repeat(13)));
    }

    #[test]
    fn test_bar_keeps_nonzero_counts_visible() {
        assert_eq!(bar(1, 1000), "#");
        assert_eq!(bar(0, 10), "");
        assert_eq!(bar(0, 0), "");
    }
}
