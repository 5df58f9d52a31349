//! Vancouver-style citation markers

use serde::{Deserialize, Serialize};

use crate::document::Run;

/// Bracket and separator characters for rendered markers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CitationStyle {
    pub open: String,
    pub close: String,
    pub separator: String,
}

impl Default for CitationStyle {
    fn default() -> Self {
        CitationStyle {
            open: "[".to_string(),
            close: "]".to_string(),
            separator: ",".to_string(),
        }
    }
}

/// One marker referring to one or more bibliography entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    numbers: Vec<u32>,
}

impl Citation {
    pub fn new(numbers: impl IntoIterator<Item = u32>) -> Self {
        Citation {
            numbers: numbers.into_iter().collect(),
        }
    }

    /// References this marker adds to the citation count
    pub fn count(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn render(&self, style: &CitationStyle) -> String {
        let numbers: Vec<String> = self.numbers.iter().map(u32::to_string).collect();
        format!("{}{}{}", style.open, numbers.join(&style.separator), style.close)
    }

    /// The marker as a superscript run
    pub fn to_run(&self, style: &CitationStyle) -> Run {
        Run::superscript(self.render(style))
    }
}
