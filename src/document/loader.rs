//! Document loading
//!
//! This module contains `load_document()`, which validates a .docx file and
//! turns its body into paragraphs and tables in original order.

use log::{debug, info};
use std::path::Path;

use super::io::validate_docx_file;
use super::models::*;
use super::parsing::formatting::extract_paragraph;
use super::parsing::table::extract_table;
use crate::error::Result;

/// Load a .docx file from disk
///
/// The file is validated first (extension, ZIP container, presence of
/// `word/document.xml`), so non-Word inputs fail with a clear message
/// instead of a parser error.
pub fn load_document(file_path: &Path) -> Result<Document> {
    // Validate file type before attempting to parse
    validate_docx_file(file_path)?;

    info!("Loading {}", file_path.display());
    let file_data = std::fs::read(file_path)?;
    load_document_from_bytes(&file_data)
}

/// Parse .docx bytes into the body model
pub fn load_document_from_bytes(bytes: &[u8]) -> Result<Document> {
    let docx = docx_rs::read_docx(bytes)?;

    let mut elements = Vec::new();

    for child in &docx.document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(para) => {
                elements.push(BodyElement::Paragraph(extract_paragraph(para)));
            }
            docx_rs::DocumentChild::Table(table) => {
                elements.push(BodyElement::Table(extract_table(table)));
            }
            _ => {
                // Section properties, bookmarks and structured tags carry no body text
            }
        }
    }

    let document = Document { elements };
    debug!(
        "Parsed {} paragraphs and {} tables",
        document.paragraphs().count(),
        document.tables().count()
    );

    Ok(document)
}
