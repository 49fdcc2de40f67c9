//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use super::document;
use crate::error::CliError;

/// Extensions the reader accepts
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "text", "md", "pdf", "docx"];

/// How a file's text is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// UTF-8 text read as is
    PlainText,
    /// Text extracted page by page
    Pdf,
    /// Paragraph text of a Word document
    Docx,
}

/// File reader with UTF-8 validation and document extraction
pub struct FileReader;

impl FileReader {
    /// Read a file's text, extracting it from PDF and DOCX documents
    pub fn read_text(path: &Path) -> Result<String> {
        match Self::check_format(path)? {
            InputFormat::PlainText => fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display())),
            InputFormat::Pdf => document::extract_pdf(path),
            InputFormat::Docx => document::extract_docx(path),
        }
    }

    /// Read all of standard input as UTF-8 text
    pub fn read_stdin() -> Result<String> {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read standard input")?;
        Ok(content)
    }

    /// Input format from the file extension
    pub fn check_format(path: &Path) -> Result<InputFormat> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("txt" | "text" | "md") => Ok(InputFormat::PlainText),
            Some("pdf") => Ok(InputFormat::Pdf),
            Some("docx") => Ok(InputFormat::Docx),
            _ => Err(CliError::UnsupportedFormat(format!(
                "{}: expected one of {}",
                path.display(),
                SUPPORTED_EXTENSIONS.join(", ")
            ))
            .into()),
        }
    }
}
