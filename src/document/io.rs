//! File I/O operations and validation
//!
//! This module handles input validation and reading/writing document bytes.

use std::fs::File;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

use crate::error::{Error, Result};

/// Validates that the file is a legitimate .docx file
pub(crate) fn validate_docx_file(file_path: &Path) -> Result<()> {
    // Check file extension
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if !extension.eq_ignore_ascii_case("docx") {
        return Err(Error::InvalidFormat(format!(
            "Invalid file format. Expected .docx file, got .{extension}\n\
            Note: docfix only supports Word .docx files (not .doc, .xlsx, .zip, etc.)"
        )));
    }

    // Check ZIP structure contains word/document.xml
    let file = File::open(file_path)?;
    let mut archive = ZipArchive::new(file)?;

    if archive.by_name("word/document.xml").is_err() {
        // Check if it might be an Excel file
        if archive.by_name("xl/workbook.xml").is_ok() {
            return Err(Error::InvalidFormat(
                "This appears to be an Excel file (.xlsx).\n\
                docfix only supports Word documents (.docx)."
                    .to_string(),
            ));
        }

        return Err(Error::InvalidFormat(
            "Invalid .docx file: missing word/document.xml\n\
            This file may be corrupted or is not a valid Word document."
                .to_string(),
        ));
    }

    Ok(())
}

/// Default output path: `<stem>_EDITED.docx` beside the input
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    input.with_file_name(format!("{stem}_EDITED.docx"))
}

/// Write packed document bytes, creating the parent directory if needed
pub(crate) fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_next_to_input() {
        let out = default_output_path(Path::new("/home/user/articles/Sepsis_withtrials (1).docx"));
        assert_eq!(
            out,
            PathBuf::from("/home/user/articles/Sepsis_withtrials (1)_EDITED.docx")
        );
    }

    #[test]
    fn rejects_wrong_extension() {
        let err = validate_docx_file(Path::new("report.doc")).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));
        assert!(err.to_string().contains("got .doc"));
    }

    #[test]
    fn rejects_zip_without_document_part() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.docx");
        let file = File::create(&path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        zip.start_file("xl/workbook.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        zip.finish().unwrap();

        let err = validate_docx_file(&path).unwrap_err();
        assert!(err.to_string().contains("Excel"));
    }
}
