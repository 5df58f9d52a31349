//! End-to-end revision of a .docx file
//!
//! Loads the source, applies the rules and writes the edited copy. The
//! output is fully built before anything is written, so a failed pass never
//! leaves a partial file behind.

use log::info;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::document::{load_document, write_document};
use crate::editor::Editor;
use crate::error::{Error, Result};
use crate::report::ChangeLog;
use crate::rules::RuleSet;

#[derive(Debug, Clone, Default)]
pub struct RevisionOptions {
    /// Where to write the edited document; `None` runs without writing
    pub output: Option<PathBuf>,
    pub settings: Settings,
}

/// Revise `input` with `rules`, returning the change log
pub fn revise_file(input: &Path, rules: &RuleSet, options: &RevisionOptions) -> Result<ChangeLog> {
    if let Some(output) = &options.output {
        if same_file(input, output) {
            return Err(Error::InvalidFormat(format!(
                "Refusing to overwrite the source document {}",
                input.display()
            )));
        }
    }

    let source = load_document(input)?;

    let (edited, log) = Editor::new(rules)
        .with_citation_style(options.settings.citation.clone())
        .edit(&source);

    match &options.output {
        Some(output) => {
            write_document(&edited, &options.settings.document_defaults(), output)?;
        }
        None => info!("Dry run: no output written"),
    }

    Ok(log)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
