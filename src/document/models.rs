//! Core data structures for document representation
//!
//! This module defines the body model docfix reads from and writes back to
//! .docx files: paragraphs made of formatted runs, and tables made of cells
//! that hold paragraphs, kept in original body order.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub elements: Vec<BodyElement>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum BodyElement {
    Paragraph(Paragraph),
    Table(Table),
}

/// Run-level formatting. Sizes are in half-points, as stored in `w:sz`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RunFormat {
    pub bold: bool,
    pub italic: bool,
    pub underline: Option<String>,
    pub size: Option<usize>,
    pub font: Option<String>,
    pub color: Option<String>,
    pub superscript: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Run {
    pub text: String,
    pub format: RunFormat,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            format: RunFormat::default(),
        }
    }

    pub fn with_format(mut self, format: RunFormat) -> Self {
        self.format = format;
        self
    }

    /// A superscript run carrying no other styling, used for citation markers
    pub fn superscript(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            format: RunFormat {
                superscript: true,
                ..RunFormat::default()
            },
        }
    }
}

/// Paragraph-level formatting. Spacing and indents are in twips.
/// A negative `first_line` is a hanging indent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ParagraphFormat {
    pub alignment: Option<TextAlignment>,
    pub space_before: Option<u32>,
    pub space_after: Option<u32>,
    pub line: Option<i32>,
    pub line_rule: Option<LineRule>,
    pub indent_left: Option<i32>,
    pub indent_right: Option<i32>,
    pub first_line: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub format: ParagraphFormat,
    pub style: Option<String>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: ParagraphFormat) -> Self {
        self.format = format;
        self
    }

    pub fn add_run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    pub fn push_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Full paragraph text, runs concatenated in order
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TableCell {
    pub paragraphs: Vec<Paragraph>,
    pub grid_span: Option<usize>,
}

impl TableCell {
    /// Cell text with paragraphs joined by newlines
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Table {
    pub rows: Vec<TableRow>,
    pub style: Option<String>,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column count of the widest row, counting grid spans
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| {
                row.cells
                    .iter()
                    .map(|cell| cell.grid_span.unwrap_or(1))
                    .sum::<usize>()
            })
            .max()
            .unwrap_or(0)
    }

    /// Text of every cell, row by row
    pub fn cell_texts(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.cells.iter().map(TableCell::text).collect())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// How `line` is interpreted (`w:lineRule`). Absent means auto.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LineRule {
    Auto,
    AtLeast,
    Exact,
}

impl Document {
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.elements.iter().filter_map(|element| match element {
            BodyElement::Paragraph(para) => Some(para),
            BodyElement::Table(_) => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.elements.iter().filter_map(|element| match element {
            BodyElement::Table(table) => Some(table),
            BodyElement::Paragraph(_) => None,
        })
    }
}
