//! JSON output formatter

use super::ReportFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use textlens_core::AnalysisResult;

/// JSON formatter - outputs all reports as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<ReportRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportRecord {
    /// File path, `<stdin>` or `<text>`
    pub source: String,
    /// Analysis of the source
    pub analysis: AnalysisResult,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }
}

impl<W: Write> ReportFormatter for JsonFormatter<W> {
    fn format_report(&mut self, source: &str, result: &AnalysisResult) -> Result<()> {
        self.records.push(ReportRecord {
            source: source.to_string(),
            analysis: result.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{sample_result, SharedBuffer};

    #[test]
    fn test_json_array_of_records() {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(buffer.clone(), false);
        formatter.format_report("a.txt", &sample_result()).unwrap();
        formatter.finish().unwrap();

        let output = buffer.contents();
        assert_eq!(output.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["source"], "a.txt");
        assert_eq!(value[0]["analysis"]["language_code"], "pt");
        assert_eq!(value[0]["analysis"]["keywords"][0], "Brasil");
        assert_eq!(value[0]["analysis"]["readability_grade"], "Easy");
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(buffer.clone(), true);
        formatter.finish().unwrap();
        assert_eq!(buffer.contents(), "[]\n");
    }
}
