//! Document writing
//!
//! Turns the body model back into a docx-rs builder and packs it into a
//! .docx container, either in memory or on disk.

use log::info;
use std::io::Cursor;
use std::path::Path;

use super::io::write_bytes;
use super::models::*;
use crate::error::{Error, Result};

/// Document-wide defaults applied to the output's default run style
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentDefaults {
    pub font: String,
    /// Half-points
    pub size: usize,
}

impl Default for DocumentDefaults {
    fn default() -> Self {
        DocumentDefaults {
            font: "Times New Roman".to_string(),
            size: 24,
        }
    }
}

/// Build a docx-rs document from the body model
pub fn build_docx(document: &Document, defaults: &DocumentDefaults) -> docx_rs::Docx {
    let mut docx = docx_rs::Docx::new()
        .default_fonts(
            docx_rs::RunFonts::new()
                .ascii(defaults.font.as_str())
                .hi_ansi(defaults.font.as_str()),
        )
        .default_size(defaults.size);

    for element in &document.elements {
        docx = match element {
            BodyElement::Paragraph(para) => docx.add_paragraph(build_paragraph(para)),
            BodyElement::Table(table) => docx.add_table(build_table(table)),
        };
    }

    docx
}

/// Pack the document into .docx bytes
pub fn to_bytes(document: &Document, defaults: &DocumentDefaults) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    build_docx(document, defaults)
        .build()
        .pack(&mut buffer)
        .map_err(|err| Error::Write(err.to_string()))?;
    Ok(buffer.into_inner())
}

/// Pack the document and save it to `path`
pub fn write_document(document: &Document, defaults: &DocumentDefaults, path: &Path) -> Result<()> {
    let bytes = to_bytes(document, defaults)?;
    write_bytes(path, &bytes)?;
    info!("Document saved to: {}", path.display());
    Ok(())
}

fn build_paragraph(para: &Paragraph) -> docx_rs::Paragraph {
    let mut out = docx_rs::Paragraph::new();

    for run in &para.runs {
        out = out.add_run(build_run(run));
    }

    if let Some(style) = &para.style {
        out = out.style(style);
    }

    apply_paragraph_format(out, &para.format)
}

fn apply_paragraph_format(mut out: docx_rs::Paragraph, format: &ParagraphFormat) -> docx_rs::Paragraph {
    if let Some(alignment) = format.alignment {
        out = out.align(match alignment {
            TextAlignment::Left => docx_rs::AlignmentType::Left,
            TextAlignment::Center => docx_rs::AlignmentType::Center,
            TextAlignment::Right => docx_rs::AlignmentType::Right,
            TextAlignment::Justify => docx_rs::AlignmentType::Both,
        });
    }

    if format.space_before.is_some() || format.space_after.is_some() || format.line.is_some() {
        let mut spacing = docx_rs::LineSpacing::new();
        if let Some(before) = format.space_before {
            spacing = spacing.before(before);
        }
        if let Some(after) = format.space_after {
            spacing = spacing.after(after);
        }
        if let Some(line) = format.line {
            spacing = spacing.line(line);
        }
        if let Some(rule) = format.line_rule {
            spacing = spacing.line_rule(match rule {
                LineRule::Auto => docx_rs::LineSpacingType::Auto,
                LineRule::AtLeast => docx_rs::LineSpacingType::AtLeast,
                LineRule::Exact => docx_rs::LineSpacingType::Exact,
            });
        }
        out = out.line_spacing(spacing);
    }

    if format.indent_left.is_some() || format.indent_right.is_some() || format.first_line.is_some() {
        let special = format.first_line.map(|value| {
            if value < 0 {
                docx_rs::SpecialIndentType::Hanging(-value)
            } else {
                docx_rs::SpecialIndentType::FirstLine(value)
            }
        });
        out = out.indent(format.indent_left, special, format.indent_right, None);
    }

    out
}

fn build_run(run: &Run) -> docx_rs::Run {
    let mut out = docx_rs::Run::new();

    // Tabs and line breaks were flattened into the text on load
    for (line_index, line) in run.text.split('\n').enumerate() {
        if line_index > 0 {
            out = out.add_break(docx_rs::BreakType::TextWrapping);
        }
        for (piece_index, piece) in line.split('\t').enumerate() {
            if piece_index > 0 {
                out = out.add_tab();
            }
            if !piece.is_empty() {
                out = out.add_text(piece);
            }
        }
    }

    let format = &run.format;
    if format.bold {
        out = out.bold();
    }
    if format.italic {
        out = out.italic();
    }
    if let Some(underline) = &format.underline {
        out = out.underline(underline.as_str());
    }
    if let Some(size) = format.size {
        out = out.size(size);
    }
    if let Some(font) = &format.font {
        out = out.fonts(
            docx_rs::RunFonts::new()
                .ascii(font.as_str())
                .hi_ansi(font.as_str()),
        );
    }
    if let Some(color) = &format.color {
        out = out.color(color.as_str());
    }
    if format.superscript {
        out.run_property = out
            .run_property
            .vert_align(docx_rs::VertAlignType::SuperScript);
    }

    out
}

fn build_table(table: &Table) -> docx_rs::Table {
    let rows = table
        .rows
        .iter()
        .map(|row| docx_rs::TableRow::new(row.cells.iter().map(build_cell).collect()))
        .collect();

    let mut out = docx_rs::Table::new(rows);
    if let Some(style) = &table.style {
        out = out.style(style.as_str());
    }
    out
}

fn build_cell(cell: &TableCell) -> docx_rs::TableCell {
    let mut out = docx_rs::TableCell::new();

    // A cell must hold at least one paragraph
    if cell.paragraphs.is_empty() {
        out = out.add_paragraph(docx_rs::Paragraph::new());
    }
    for para in &cell.paragraphs {
        out = out.add_paragraph(build_paragraph(para));
    }

    if let Some(span) = cell.grid_span {
        out = out.grid_span(span);
    }
    out
}
