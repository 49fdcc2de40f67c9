//! Plain text output formatter

use super::{by_count_desc, ReportFormatter};
use anyhow::Result;
use std::io::{self, Write};
use textlens_core::AnalysisResult;

/// Plain text formatter - one human-readable block per source
pub struct TextFormatter<W: Write> {
    writer: W,
    reports: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, reports: 0 }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn format_report(&mut self, source: &str, result: &AnalysisResult) -> Result<()> {
        if self.reports > 0 {
            writeln!(self.writer)?;
        }
        self.reports += 1;

        let stats = &result.statistics;
        let w = &mut self.writer;

        writeln!(w, "== {source} ==")?;
        writeln!(w, "Language:           {}", result.language_code)?;
        writeln!(w, "Readability:        {}", result.readability_grade)?;
        writeln!(w, "Reading time:       {:.2} min", result.reading_time_minutes)?;
        writeln!(w, "Words:              {}", stats.total_words)?;
        writeln!(w, "Sentences:          {}", stats.total_sentences)?;
        writeln!(w, "Unique words:       {}", stats.unique_words)?;
        writeln!(w, "Words per sentence: {:.2}", stats.avg_words_per_sentence)?;
        writeln!(w, "Avg word length:    {:.2}", stats.avg_word_length)?;

        if !result.keywords.is_empty() {
            writeln!(w, "Keywords:           {}", result.keywords.join(", "))?;
        }

        if !result.word_frequencies.is_empty() {
            writeln!(w, "Top words:")?;
            for entry in &result.word_frequencies {
                writeln!(w, "  {:<20} {}", entry.word, entry.count)?;
            }
        }

        if !result.pos_distribution.is_empty() {
            writeln!(w, "Word types:")?;
            for (label, count) in by_count_desc(&result.pos_distribution) {
                writeln!(w, "  {label:<26} {count}")?;
            }
        }

        if let Some(entities) = &result.named_entities {
            writeln!(w, "Named entities:")?;
            for (label, texts) in entities {
                writeln!(w, "  {label}: {}", texts.join(", "))?;
            }
        }

        writeln!(w, "Excerpt:")?;
        for line in result.text_excerpt.lines() {
            writeln!(w, "  {line}")?;
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{sample_result, SharedBuffer};

    #[test]
    fn test_text_report() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone());
        formatter.format_report("a.txt", &sample_result()).unwrap();
        formatter.format_report("b.txt", &sample_result()).unwrap();
        formatter.finish().unwrap();

        let output = buffer.contents();
        assert!(output.starts_with("== a.txt ==\n"));
        assert!(output.contains("\n\n== b.txt ==\n"));
        assert!(output.contains("Language:           pt"));
        assert!(output.contains("Readability:        Easy"));
        assert!(output.contains("Reading time:       0.09 min"));
        assert!(output.contains("Keywords:           Brasil, praia"));
        assert!(output.contains("  Location: Brasil"));
    }
}
