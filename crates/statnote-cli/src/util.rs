use std::{
    fs::{self, File},
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.finish()
    }

    pub fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.write_all(text.as_bytes())
            .with_context(|| format!("Failed to write report to {}", self.display_path()))?;
        self.finish()
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

/// Read sample values from a file
///
/// Files with a `.json` extension must hold a JSON array of numbers. Any other
/// file is read as plain text, see [`parse_samples_text`].
///
/// # Errors
///
/// Returns error if the file cannot be read or a value cannot be parsed
pub fn read_samples_file<P>(path: P) -> anyhow::Result<Vec<f64>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to open samples file: {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse samples JSON file: {}", path.display()))
    } else {
        parse_samples_text(&content)
            .with_context(|| format!("Failed to parse samples file: {}", path.display()))
    }
}

/// Parse numbers separated by whitespace and/or commas
///
/// Lines whose first non-blank character is `#` are comments.
///
/// # Errors
///
/// Returns error naming the line and token that is not a number
pub fn parse_samples_text(content: &str) -> anyhow::Result<Vec<f64>> {
    let mut values = vec![];
    for (line_idx, line) in content.lines().enumerate() {
        if line.trim_start().starts_with('#') {
            continue;
        }
        for token in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let value = token
                .parse::<f64>()
                .with_context(|| format!("line {}: '{token}' is not a number", line_idx + 1))?;
            values.push(value);
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_separators() {
        let values = parse_samples_text("1, 4,6\n3 5\t7\n\n").unwrap();
        assert_eq!(values, [1.0, 4.0, 6.0, 3.0, 5.0, 7.0]);
    }

    #[test]
    fn test_parse_skips_comments() {
        let values = parse_samples_text("# exam scores\n  # second comment\n2.5 -1e2\n").unwrap();
        assert_eq!(values, [2.5, -100.0]);
    }

    #[test]
    fn test_parse_reports_bad_token() {
        let err = parse_samples_text("1 2\n3 four\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2: 'four' is not a number");
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_samples_text("").unwrap().is_empty());
    }

    #[test]
    fn test_read_json_and_text_files() {
        let dir = std::env::temp_dir().join(format!("statnote-util-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let json_path = dir.join("samples.json");
        fs::write(&json_path, "[1, 2.5, 3]").unwrap();
        assert_eq!(read_samples_file(&json_path).unwrap(), [1.0, 2.5, 3.0]);

        let text_path = dir.join("samples.txt");
        fs::write(&text_path, "4 5\n6").unwrap();
        assert_eq!(read_samples_file(&text_path).unwrap(), [4.0, 5.0, 6.0]);

        let missing = dir.join("missing.txt");
        let err = read_samples_file(&missing).unwrap_err();
        assert!(err.to_string().starts_with("Failed to open samples file"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
