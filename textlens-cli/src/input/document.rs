//! Text extraction from PDF and DOCX documents

use anyhow::{Context, Result};
use pdf_oxide::PdfDocument;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use zip::ZipArchive;

use crate::error::CliError;

fn extraction_error(path: &Path, error: impl fmt::Display) -> anyhow::Error {
    CliError::ExtractionFailed(format!("{}: {error}", path.display())).into()
}

/// Text of every page, in page order, one page per block
pub fn extract_pdf(path: &Path) -> Result<String> {
    let mut document = PdfDocument::open(path).map_err(|e| extraction_error(path, e))?;
    let pages = document
        .page_count()
        .map_err(|e| extraction_error(path, e))?;

    let mut text = String::new();
    for page in 0..pages {
        let page_text = document
            .extract_text(page)
            .map_err(|e| extraction_error(path, e))?;
        text.push_str(&page_text);
        if !page_text.ends_with('\n') {
            text.push('\n');
        }
    }

    log::debug!(
        "Extracted {} characters from {} pages of {}",
        text.chars().count(),
        pages,
        path.display()
    );
    Ok(text)
}

/// Paragraph text of the main document part, one paragraph per line
pub fn extract_docx(path: &Path) -> Result<String> {
    let file = File::open(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let mut archive =
        ZipArchive::new(BufReader::new(file)).map_err(|e| extraction_error(path, e))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| extraction_error(path, e))?
        .read_to_string(&mut xml)
        .map_err(|e| extraction_error(path, e))?;

    let text = docx_paragraphs(&xml).map_err(|e| extraction_error(path, e))?;
    log::debug!(
        "Extracted {} characters from {}",
        text.chars().count(),
        path.display()
    );
    Ok(text)
}

/// Join the `w:t` runs of each `w:p` paragraph
fn docx_paragraphs(xml: &str) -> std::result::Result<String, quick_xml::Error> {
    // Whitespace inside w:t is significant
    let mut reader = Reader::from_str(xml);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"r" => in_run = true,
                b"t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"r" => in_run = false,
                b"t" => in_text = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" if in_run => current.push('\t'),
                b"br" | b"cr" if in_run => current.push('\n'),
                b"p" => paragraphs.push(String::new()),
                _ => {}
            },
            Event::Text(e) if in_text => current.push_str(&e.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}
