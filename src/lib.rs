//! docfix: rule-driven correction and citation tool for .docx articles
//!
//! This library reads a Microsoft Word document, rewrites paragraphs that
//! match an ordered list of correction rules (appending superscript
//! Vancouver-style citation markers), copies everything else through with
//! its formatting, and writes the result as a new .docx file.

pub mod citation;
pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod rules;

// Re-export commonly used types
pub use config::Settings;
pub use document::{Document, load_document, write_document};
pub use editor::{Editor, edit_document};
pub use error::{Error, Result};
pub use pipeline::{RevisionOptions, revise_file};
pub use report::{ChangeLog, ReportFormat};
pub use rules::{Matcher, Rule, RuleSet};
