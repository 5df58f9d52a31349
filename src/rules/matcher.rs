//! Paragraph text matchers
//!
//! A `Matcher` is the serializable form that appears in rules files. It is
//! compiled into a `CompiledMatcher` once, when the rule set is built, so
//! regexes are checked up front and not rebuilt per paragraph.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Test applied to a paragraph's trimmed text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Matcher {
    Exact { text: String },
    Contains { text: String },
    ContainsIgnoreCase { text: String },
    /// Exact match against any of the listed texts
    OneOf { texts: Vec<String> },
    All { of: Vec<Matcher> },
    Any { of: Vec<Matcher> },
    Regex { pattern: String },
}

impl Matcher {
    pub fn exact(text: impl Into<String>) -> Self {
        Matcher::Exact { text: text.into() }
    }

    pub fn contains(text: impl Into<String>) -> Self {
        Matcher::Contains { text: text.into() }
    }

    pub fn contains_ignore_case(text: impl Into<String>) -> Self {
        Matcher::ContainsIgnoreCase { text: text.into() }
    }

    pub fn one_of<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Matcher::OneOf {
            texts: texts.into_iter().map(Into::into).collect(),
        }
    }

    pub fn regex(pattern: impl Into<String>) -> Self {
        Matcher::Regex {
            pattern: pattern.into(),
        }
    }

    pub(crate) fn compile(&self) -> Result<CompiledMatcher> {
        Ok(match self {
            Matcher::Exact { text } => CompiledMatcher::Exact(text.clone()),
            Matcher::Contains { text } => CompiledMatcher::Contains(text.clone()),
            Matcher::ContainsIgnoreCase { text } => {
                CompiledMatcher::ContainsIgnoreCase(text.to_lowercase())
            }
            Matcher::OneOf { texts } => CompiledMatcher::OneOf(texts.clone()),
            Matcher::All { of } => {
                CompiledMatcher::All(of.iter().map(Matcher::compile).collect::<Result<_>>()?)
            }
            Matcher::Any { of } => {
                CompiledMatcher::Any(of.iter().map(Matcher::compile).collect::<Result<_>>()?)
            }
            Matcher::Regex { pattern } => {
                let regex = Regex::new(pattern).map_err(|source| Error::Pattern {
                    pattern: pattern.clone(),
                    source,
                })?;
                CompiledMatcher::Regex(regex)
            }
        })
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Exact { text } => write!(f, "exact {text:?}"),
            Matcher::Contains { text } => write!(f, "contains {text:?}"),
            Matcher::ContainsIgnoreCase { text } => write!(f, "contains (any case) {text:?}"),
            Matcher::OneOf { texts } => write!(f, "one of {texts:?}"),
            Matcher::All { of } => write_joined(f, of, " and "),
            Matcher::Any { of } => write_joined(f, of, " or "),
            Matcher::Regex { pattern } => write!(f, "regex /{pattern}/"),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, matchers: &[Matcher], sep: &str) -> fmt::Result {
    write!(f, "(")?;
    for (i, matcher) in matchers.iter().enumerate() {
        if i > 0 {
            write!(f, "{sep}")?;
        }
        write!(f, "{matcher}")?;
    }
    write!(f, ")")
}

#[derive(Debug, Clone)]
pub(crate) enum CompiledMatcher {
    Exact(String),
    Contains(String),
    /// Needle is stored lowercased
    ContainsIgnoreCase(String),
    OneOf(Vec<String>),
    All(Vec<CompiledMatcher>),
    Any(Vec<CompiledMatcher>),
    Regex(Regex),
}

impl CompiledMatcher {
    pub(crate) fn is_match(&self, text: &str) -> bool {
        match self {
            CompiledMatcher::Exact(expected) => text == expected,
            CompiledMatcher::Contains(needle) => text.contains(needle.as_str()),
            CompiledMatcher::ContainsIgnoreCase(needle) => {
                text.to_lowercase().contains(needle.as_str())
            }
            CompiledMatcher::OneOf(texts) => texts.iter().any(|t| t == text),
            CompiledMatcher::All(matchers) => matchers.iter().all(|m| m.is_match(text)),
            CompiledMatcher::Any(matchers) => matchers.iter().any(|m| m.is_match(text)),
            CompiledMatcher::Regex(regex) => regex.is_match(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(matcher: Matcher, text: &str) -> bool {
        matcher.compile().unwrap().is_match(text)
    }

    #[test]
    fn exact_and_contains() {
        assert!(matches(Matcher::exact("References"), "References"));
        assert!(!matches(Matcher::exact("References"), "References and notes"));
        assert!(matches(
            Matcher::contains("6. Principles of Management"),
            "6. Principles of Management"
        ));
        assert!(!matches(Matcher::contains("BaSICS"), "basics"));
    }

    #[test]
    fn case_insensitive_contains() {
        let matcher = Matcher::contains_ignore_case("procalcitonin");
        assert!(matches(matcher.clone(), "Procalcitonin-guided de-escalation"));
        assert!(matches(matcher, "serial PROCALCITONIN levels"));
    }

    #[test]
    fn composition() {
        let safe = Matcher::All {
            of: vec![
                Matcher::contains("SAFE"),
                Matcher::contains_ignore_case("albumin"),
            ],
        };
        assert!(matches(safe.clone(), "The SAFE study compared Albumin with saline"));
        assert!(!matches(safe, "It is SAFE to proceed"));

        let organ = Matcher::Any {
            of: vec![
                Matcher::contains("4.Organ Cross-Talk"),
                Matcher::contains("4. Organ Cross-Talk"),
            ],
        };
        assert!(matches(organ.clone(), "4.Organ Cross-Talk"));
        assert!(matches(organ, "4. Organ Cross-Talk in Sepsis"));
    }

    #[test]
    fn one_of_requires_whole_text() {
        let matcher = Matcher::one_of(["Corticosteroids", "Glycemic Control"]);
        assert!(matches(matcher.clone(), "Glycemic Control"));
        assert!(!matches(matcher, "Glycemic Control targets"));
    }

    #[test]
    fn regex_matches_numbered_headings() {
        let matcher = Matcher::regex(r"^\d+\.\s*[A-Z]");
        assert!(matches(matcher.clone(), "6.Hemodynamic Management"));
        assert!(matches(matcher.clone(), "12. Conclusion"));
        assert!(!matches(matcher, "Table 1. Summary"));
    }

    #[test]
    fn invalid_regex_is_rejected() {
        let err = Matcher::regex("(unclosed").compile().unwrap_err();
        assert!(matches!(err, Error::Pattern { .. }));
    }

    #[test]
    fn display_names_the_test() {
        let matcher = Matcher::Any {
            of: vec![Matcher::contains("NEWS"), Matcher::exact("Screening Tool")],
        };
        assert_eq!(
            matcher.to_string(),
            "(contains \"NEWS\" or exact \"Screening Tool\")"
        );
    }
}
