//! Document loading, writing and data structures module
//!
//! This module reads Microsoft Word (.docx) documents into a body model of
//! paragraphs and tables in original order, and writes that model back out.

pub(crate) mod io;
pub mod loader;
pub mod models;
pub(crate) mod parsing;
pub mod writer;

// Re-export all models and the load/write entry points
pub use io::default_output_path;
pub use loader::{load_document, load_document_from_bytes};
pub use models::*;
pub use writer::{build_docx, to_bytes, write_document, DocumentDefaults};
