//! Output formatting module

use anyhow::Result;
use std::io::Write;
use textlens_core::AnalysisResult;

/// Trait for report formatters
pub trait ReportFormatter {
    /// Format and output the report for one source
    fn format_report(&mut self, source: &str, result: &AnalysisResult) -> Result<()>;

    /// Finalize output (e.g., write the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::{JsonFormatter, ReportRecord};
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// JSON array of analysis records
    Json,
    /// Markdown report
    Markdown,
}

impl OutputFormat {
    /// All formats with a short description
    pub fn descriptions() -> [(&'static str, &'static str); 3] {
        [
            ("text", "Human-readable report (default)"),
            ("json", "JSON array of {source, analysis} records"),
            ("markdown", "Markdown report with tables"),
        ]
    }

    /// Create a formatter writing to `writer`
    pub fn formatter<'w>(
        self,
        writer: Box<dyn Write + 'w>,
        pretty_json: bool,
    ) -> Box<dyn ReportFormatter + 'w> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

/// Sort POS or entity counts by count descending, then label
pub(crate) fn by_count_desc(counts: &std::collections::BTreeMap<String, usize>) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}
