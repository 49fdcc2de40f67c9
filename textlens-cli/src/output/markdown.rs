//! Markdown output formatter
//!
//! Sections follow the printed report: summary, statistics, keywords,
//! top words, word types, named entities and the excerpt.

use super::{by_count_desc, ReportFormatter};
use anyhow::Result;
use std::io::Write;
use textlens_core::AnalysisResult;

/// Markdown formatter - one report per source
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    report_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            report_count: 0,
        }
    }
}

/// Escape characters that break a table cell
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write> ReportFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, source: &str, result: &AnalysisResult) -> Result<()> {
        if self.report_count > 0 {
            writeln!(self.writer)?;
        }
        self.report_count += 1;

        let stats = &result.statistics;
        let w = &mut self.writer;

        writeln!(w, "# Text Analysis Report: {source}")?;
        writeln!(w)?;

        writeln!(w, "## Summary")?;
        writeln!(w)?;
        writeln!(w, "- **Language:** {}", result.language_code)?;
        writeln!(w, "- **Readability:** {}", result.readability_grade)?;
        writeln!(
            w,
            "- **Reading time:** {:.2} min",
            result.reading_time_minutes
        )?;
        writeln!(w)?;

        writeln!(w, "## Statistics")?;
        writeln!(w)?;
        writeln!(w, "| Metric | Value |")?;
        writeln!(w, "|---|---|")?;
        writeln!(w, "| Total words | {} |", stats.total_words)?;
        writeln!(w, "| Total sentences | {} |", stats.total_sentences)?;
        writeln!(w, "| Unique words | {} |", stats.unique_words)?;
        writeln!(
            w,
            "| Words per sentence | {:.2} |",
            stats.avg_words_per_sentence
        )?;
        writeln!(w, "| Average word length | {:.2} |", stats.avg_word_length)?;
        writeln!(w)?;

        writeln!(w, "## Keywords")?;
        writeln!(w)?;
        if result.keywords.is_empty() {
            writeln!(w, "_None_")?;
        } else {
            writeln!(w, "{}", result.keywords.join(", "))?;
        }
        writeln!(w)?;

        writeln!(w, "## Top Words")?;
        writeln!(w)?;
        writeln!(w, "| Word | Count |")?;
        writeln!(w, "|---|---|")?;
        for entry in &result.word_frequencies {
            writeln!(w, "| {} | {} |", cell(&entry.word), entry.count)?;
        }
        writeln!(w)?;

        writeln!(w, "## Word Types")?;
        writeln!(w)?;
        writeln!(w, "| Type | Count |")?;
        writeln!(w, "|---|---|")?;
        for (label, count) in by_count_desc(&result.pos_distribution) {
            writeln!(w, "| {} | {count} |", cell(label))?;
        }
        writeln!(w)?;

        writeln!(w, "## Named Entities")?;
        writeln!(w)?;
        match &result.named_entities {
            None => writeln!(w, "_None_")?,
            Some(groups) => {
                for (label, texts) in groups {
                    writeln!(w, "- **{label}:** {}", texts.join(", "))?;
                }
            }
        }
        writeln!(w)?;

        writeln!(w, "## Excerpt")?;
        writeln!(w)?;
        for line in result.text_excerpt.lines() {
            writeln!(w, "> {line}")?;
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.report_count > 1 {
            writeln!(self.writer)?;
            writeln!(self.writer, "---")?;
            writeln!(self.writer, "*Total reports: {}*", self.report_count)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{sample_result, SharedBuffer};

    #[test]
    fn test_markdown_sections() {
        let buffer = SharedBuffer::default();
        let mut formatter = MarkdownFormatter::new(buffer.clone());
        formatter.format_report("a.txt", &sample_result()).unwrap();
        formatter.finish().unwrap();

        let output = buffer.contents();
        let sections = [
            "# Text Analysis Report: a.txt",
            "## Summary",
            "## Statistics",
            "## Keywords",
            "## Top Words",
            "## Word Types",
            "## Named Entities",
            "## Excerpt",
        ];
        let mut last = 0;
        for section in sections {
            let position = output.find(section).unwrap();
            assert!(position >= last, "{section} out of order");
            last = position;
        }

        assert!(output.contains("| brasil | 3 |"));
        assert!(output.contains("- **Location:** Brasil"));
        assert!(output.contains("> O Brasil é um país enorme."));
        assert!(!output.contains("Total reports"));

        // Word types sorted by count
        let noun = output.find("| Noun | 4 |").unwrap();
        let determiner = output.find("| Determiner | 3 |").unwrap();
        assert!(noun < determiner);
    }

    #[test]
    fn test_missing_entities_and_keywords() {
        let mut result = sample_result();
        result.named_entities = None;
        result.keywords.clear();

        let buffer = SharedBuffer::default();
        let mut formatter = MarkdownFormatter::new(buffer.clone());
        formatter.format_report("a.txt", &result).unwrap();
        formatter.format_report("b.txt", &result).unwrap();
        formatter.finish().unwrap();

        let output = buffer.contents();
        assert_eq!(output.matches("_None_").count(), 4);
        assert!(output.contains("*Total reports: 2*"));
    }
}
