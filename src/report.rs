//! Change log produced by an editing pass

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::error::{Error, Result};

/// Report output format
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeLog {
    /// Body paragraphs processed, blank ones included
    pub paragraphs: usize,
    pub tables: usize,
    /// Individual references added across all citation markers
    pub citations: usize,
    /// Paragraphs handled by a rule instead of copied through
    pub rules_matched: usize,
    pub edits: Vec<String>,
    /// Rules that matched no paragraph
    pub unmatched_rules: Vec<String>,
}

const RULE: &str =
    "================================================================================";

impl ChangeLog {
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_text()),
            ReportFormat::Json => {
                serde_json::to_string_pretty(self).map_err(|err| Error::Write(err.to_string()))
            }
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "CHANGE LOG");
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out);
        let _ = writeln!(out, "Paragraphs processed: {}", self.paragraphs);
        let _ = writeln!(out, "Tables copied: {}", self.tables);
        let _ = writeln!(out, "Paragraphs rewritten: {}", self.rules_matched);
        let _ = writeln!(out, "Total changes made: {}", self.edits.len());
        let _ = writeln!(out, "Total citations added: {}", self.citations);

        if !self.edits.is_empty() {
            let _ = writeln!(out, "\nDetailed changes:\n");
            for (i, change) in self.edits.iter().enumerate() {
                let _ = writeln!(out, "{}. {change}", i + 1);
            }
        }

        if !self.unmatched_rules.is_empty() {
            let _ = writeln!(out, "\nRules with no matching paragraph:\n");
            for rule in &self.unmatched_rules {
                let _ = writeln!(out, "- {rule}");
            }
        }

        out
    }
}
