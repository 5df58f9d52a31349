//! Correction rules
//!
//! A rule pairs a paragraph matcher with what to emit in its place:
//! replacement text segments, each optionally followed by a citation marker,
//! plus the run styling and alignment for the rewritten paragraph. Rules are
//! evaluated in order and the first match wins.
//!
//! Rules files are TOML:
//!
//! ```toml
//! [[rule]]
//! match = { kind = "contains", text = "Serum lactate level >18 mg/dL (2 mmol/L)" }
//! log = "CORRECTED: Fixed lactate threshold"
//!
//! [[rule.segments]]
//! text = "Serum lactate level >2 mmol/L (18 mg/dL) despite adequate volume resuscitation"
//! cite = [2]
//! ```

pub mod builtin;
pub mod matcher;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::document::TextAlignment;
use crate::error::{Error, Result};
pub use matcher::Matcher;
use matcher::CompiledMatcher;

/// What a matching rule does with the source paragraph's runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Emit the rule's segments in place of the source runs
    #[default]
    Rewrite,
    /// Copy the source runs with their formatting and stop matching
    Keep,
}

/// A span of output text followed by an optional citation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Replacement text; the source paragraph's trimmed text when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cite: Vec<u32>,
}

impl Segment {
    pub fn text(text: impl Into<String>) -> Self {
        Segment {
            text: Some(text.into()),
            cite: Vec::new(),
        }
    }

    /// The source text, unchanged
    pub fn source() -> Self {
        Segment::default()
    }

    pub fn cite(mut self, numbers: impl IntoIterator<Item = u32>) -> Self {
        self.cite = numbers.into_iter().collect();
        self
    }
}

/// Run styling applied to rewritten text. Citation runs stay unstyled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleStyle {
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    /// Points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlignment>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl RuleStyle {
    /// Font size in half-points
    pub fn half_points(&self) -> Option<usize> {
        self.size.map(|pt| (pt * 2.0).round() as usize)
    }

    fn is_empty(&self) -> bool {
        *self == RuleStyle::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "is_rewrite")]
    pub output: OutputMode,
    /// Edit-log entry recorded when the rule fires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,
    #[serde(rename = "match")]
    pub matcher: Matcher,
    #[serde(default, skip_serializing_if = "RuleStyle::is_empty")]
    pub style: RuleStyle,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<Segment>,
}

fn is_rewrite(mode: &OutputMode) -> bool {
    *mode == OutputMode::Rewrite
}

impl Rule {
    pub fn new(matcher: Matcher) -> Self {
        Rule {
            name: None,
            output: OutputMode::Rewrite,
            log: None,
            matcher,
            style: RuleStyle::default(),
            segments: Vec::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn keep(mut self) -> Self {
        self.output = OutputMode::Keep;
        self
    }

    pub fn segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn style(mut self, style: RuleStyle) -> Self {
        self.style = style;
        self
    }

    pub fn log(mut self, entry: impl Into<String>) -> Self {
        self.log = Some(entry.into());
        self
    }

    /// Name used in reports: the explicit name, else the matcher description
    pub fn label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.matcher.to_string())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RulesFile {
    #[serde(default, rename = "rule")]
    rules: Vec<Rule>,
}

/// Ordered rules with matchers compiled
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
    compiled: Vec<CompiledMatcher>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Result<Self> {
        let compiled = rules
            .iter()
            .map(|rule| rule.matcher.compile())
            .collect::<Result<Vec<_>>>()?;
        Ok(RuleSet { rules, compiled })
    }

    /// Parse a TOML rules document
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: RulesFile =
            toml::from_str(content).map_err(|err| Error::Rules(err.to_string()))?;
        Self::new(file.rules)
    }

    /// Load a TOML rules file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|err| match err {
            Error::Rules(msg) => Error::Rules(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Render the rules back to TOML
    pub fn to_toml(&self) -> Result<String> {
        let file = RulesFile {
            rules: self.rules.clone(),
        };
        toml::to_string_pretty(&file).map_err(|err| Error::Rules(err.to_string()))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Index of the first rule matching `text`
    pub fn find(&self, text: &str) -> Option<usize> {
        self.compiled.iter().position(|matcher| matcher.is_match(text))
    }

    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }
}
