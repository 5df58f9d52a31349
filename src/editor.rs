//! Rule application
//!
//! `Editor` walks a document body in order and builds the edited document:
//! blank paragraphs stay blank, paragraphs matched by a rule are rewritten,
//! and everything else (tables included) is copied through with its
//! formatting.

use log::{debug, info, warn};

use crate::citation::{Citation, CitationStyle};
use crate::document::{BodyElement, Document, Paragraph, Run, RunFormat, Table};
use crate::report::ChangeLog;
use crate::rules::{OutputMode, Rule, RuleSet};

pub struct Editor<'a> {
    rules: &'a RuleSet,
    citation_style: CitationStyle,
    log: ChangeLog,
    hits: Vec<usize>,
}

impl<'a> Editor<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Editor {
            rules,
            citation_style: CitationStyle::default(),
            log: ChangeLog::default(),
            hits: vec![0; rules.len()],
        }
    }

    pub fn with_citation_style(mut self, style: CitationStyle) -> Self {
        self.citation_style = style;
        self
    }

    /// Edit a whole document, returning the new body and the change log
    pub fn edit(mut self, source: &Document) -> (Document, ChangeLog) {
        info!("Processing document with {} rules", self.rules.len());

        let elements = source
            .elements
            .iter()
            .map(|element| match element {
                BodyElement::Paragraph(para) => BodyElement::Paragraph(self.edit_paragraph(para)),
                BodyElement::Table(table) => BodyElement::Table(self.copy_table(table)),
            })
            .collect();

        for (rule, hits) in self.rules.rules().iter().zip(&self.hits) {
            if *hits == 0 {
                warn!("Rule never matched: {}", rule.label());
                self.log.unmatched_rules.push(rule.label());
            }
        }

        info!(
            "Processing complete: {} citations, {} changes",
            self.log.citations,
            self.log.edits.len()
        );
        (Document { elements }, self.log)
    }

    /// Edit one body paragraph
    pub fn edit_paragraph(&mut self, source: &Paragraph) -> Paragraph {
        self.log.paragraphs += 1;

        let text = source.text();
        let text = text.trim();
        if text.is_empty() {
            return Paragraph::new();
        }

        let mut target = Paragraph {
            runs: Vec::new(),
            format: source.format.clone(),
            style: source.style.clone(),
        };

        let rules = self.rules;
        match rules.find(text) {
            Some(index) => {
                self.hits[index] += 1;
                self.log.rules_matched += 1;
                // find() only returns indices of existing rules
                if let Some(rule) = rules.get(index) {
                    debug!("{:?} -> {}", text, rule.label());
                    self.apply_rule(rule, source, text, &mut target);
                }
            }
            None => copy_runs(source, &mut target),
        }

        target
    }

    fn apply_rule(&mut self, rule: &Rule, source: &Paragraph, text: &str, target: &mut Paragraph) {
        if rule.output == OutputMode::Keep {
            copy_runs(source, target);
        } else {
            let format = RunFormat {
                bold: rule.style.bold,
                italic: rule.style.italic,
                size: rule.style.half_points(),
                ..RunFormat::default()
            };

            if rule.segments.is_empty() {
                target.push_run(Run::new(text).with_format(format.clone()));
            }

            for segment in &rule.segments {
                let segment_text = segment.text.as_deref().unwrap_or(text);
                if !segment_text.is_empty() {
                    target.push_run(Run::new(segment_text).with_format(format.clone()));
                }

                let citation = Citation::new(segment.cite.iter().copied());
                if !citation.is_empty() {
                    self.log.citations += citation.count();
                    target.push_run(citation.to_run(&self.citation_style));
                }
            }
        }

        if let Some(alignment) = rule.style.align {
            target.format.alignment = Some(alignment);
        }

        if let Some(entry) = &rule.log {
            self.log.edits.push(entry.clone());
        }
    }

    /// Copy a table cell by cell; table text is never rule-matched
    pub fn copy_table(&mut self, source: &Table) -> Table {
        self.log.tables += 1;
        source.clone()
    }
}

fn copy_runs(source: &Paragraph, target: &mut Paragraph) {
    target.runs.extend(source.runs.iter().cloned());
}

/// Edit `source` with `rules` using default citation style
pub fn edit_document(source: &Document, rules: &RuleSet) -> (Document, ChangeLog) {
    Editor::new(rules).edit(source)
}
