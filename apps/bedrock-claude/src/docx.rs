//! DOCX paragraph extraction as an injected capability.
//!
//! Classification treats `.docx` specially: instead of raw text, the file is
//! opened as a zip archive and the paragraph texts of `word/document.xml` are
//! extracted. The trait seam exists so absence of the capability is a typed
//! error rather than a silent misread.

use std::io::Read;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::errors::{CliError, Result};

/// Capability to extract plain text from a `.docx` file.
pub trait DocxExtractor {
    /// Returns the newline-joined non-empty paragraph texts of the document.
    fn extract(&self, path: &Path) -> Result<String>;
}

/// Extractor backed by `zip` + `quick-xml`.
pub struct ParagraphDocxExtractor;

impl DocxExtractor for ParagraphDocxExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let file = std::fs::File::open(path)?;
        let mut archive = zip::ZipArchive::new(file).map_err(|e| CliError::Docx {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| CliError::Docx {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
            .read_to_string(&mut xml)?;

        extract_paragraphs(&xml, path)
    }
}

/// Stand-in used when the build or caller carries no DOCX capability.
pub struct DocxUnavailable;

impl DocxExtractor for DocxUnavailable {
    fn extract(&self, path: &Path) -> Result<String> {
        Err(CliError::DocxUnavailable(path.to_path_buf()))
    }
}

/// Collects the text of each `w:p` paragraph, skipping empty ones.
fn extract_paragraphs(xml: &str, path: &Path) -> Result<String> {
    let xml_err = |e: quick_xml::Error| CliError::Docx {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event().map_err(xml_err)? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => current.clear(),
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    if !current.trim().is_empty() {
                        paragraphs.push(std::mem::take(&mut current));
                    } else {
                        current.clear();
                    }
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Text(t) if in_text => {
                current.push_str(&t.unescape().map_err(xml_err)?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}
