//! Document parsing utilities
//!
//! This module contains the extraction functions that turn docx-rs
//! elements into the body model.

pub(crate) mod formatting;
pub(crate) mod table;
