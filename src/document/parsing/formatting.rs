//! Text extraction and formatting utilities
//!
//! This module handles extraction of text and formatting information
//! from docx-rs paragraph and run elements.
//!
//! Several docx-rs property types keep their values in private fields, so
//! values are read back out of their `Debug` output.

use super::super::models::*;

/// Extract the runs of a paragraph, with text and formatting
pub(crate) fn extract_paragraph(para: &docx_rs::Paragraph) -> Paragraph {
    let mut runs = Vec::new();

    for child in &para.children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                push_run(&mut runs, run);
            }
            docx_rs::ParagraphChild::Insert(insert) => {
                // Accepted insertions (track changes) read as plain content
                for child in &insert.children {
                    if let docx_rs::InsertChild::Run(run) = child {
                        push_run(&mut runs, run);
                    }
                }
            }
            docx_rs::ParagraphChild::Delete(_) => {
                // Skip deletions (track changes)
            }
            _ => {}
        }
    }

    Paragraph {
        runs,
        format: extract_paragraph_format(&para.property),
        style: para.property.style.as_ref().map(|style| style.val.clone()),
    }
}

fn push_run(runs: &mut Vec<Run>, run: &docx_rs::Run) {
    let text = extract_run_text(run);
    if !text.is_empty() {
        runs.push(Run {
            text,
            format: extract_run_formatting(run),
        });
    }
}

/// Extract text from a run using docx-rs features
pub(crate) fn extract_run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => {
                text.push_str(&text_elem.text);
            }
            docx_rs::RunChild::Tab(_) => {
                text.push('\t');
            }
            docx_rs::RunChild::Break(_) => {
                // Break types are private, so we'll just add a line break
                text.push('\n');
            }
            _ => {}
        }
    }

    text
}

/// Extract formatting information from a run
pub(crate) fn extract_run_formatting(run: &docx_rs::Run) -> RunFormat {
    let props = &run.run_property;

    RunFormat {
        bold: props.bold.as_ref().is_some_and(|b| toggle_on(&format!("{b:?}"))),
        italic: props
            .italic
            .as_ref()
            .is_some_and(|i| toggle_on(&format!("{i:?}"))),
        underline: props
            .underline
            .as_ref()
            .and_then(|u| debug_string(&format!("{u:?}"), "val: \""))
            .filter(|val| val != "none"),
        size: props
            .sz
            .as_ref()
            .and_then(|sz| debug_number(&format!("{sz:?}"), "val: ")),
        font: props
            .fonts
            .as_ref()
            .and_then(|fonts| debug_string(&format!("{fonts:?}"), "ascii: Some(\"")),
        color: props
            .color
            .as_ref()
            .and_then(|color| debug_string(&format!("{color:?}"), "val: \""))
            .filter(|val| val != "auto"),
        superscript: props
            .vert_align
            .as_ref()
            .is_some_and(|va| format!("{va:?}").contains("SuperScript")),
    }
}

/// Extract alignment, spacing and indentation from paragraph properties
pub(crate) fn extract_paragraph_format(props: &docx_rs::ParagraphProperty) -> ParagraphFormat {
    let mut format = ParagraphFormat::default();

    if let Some(justification) = &props.alignment {
        format.alignment = debug_string(&format!("{justification:?}"), "val: \"")
            .and_then(|val| parse_alignment(&val));
    }

    if let Some(spacing) = &props.line_spacing {
        let spacing = format!("{spacing:?}");
        format.space_before = debug_number(&spacing, "before: Some(").map(|v| v as u32);
        format.space_after = debug_number(&spacing, "after: Some(").map(|v| v as u32);
        format.line = debug_signed(&spacing, "line: Some(");
        format.line_rule = parse_line_rule(&spacing);
    }

    if let Some(indent) = &props.indent {
        let indent = format!("{indent:?}");
        format.indent_left = debug_signed(&indent, "start: Some(");
        format.indent_right = debug_signed(&indent, "end: Some(");
        format.first_line = debug_signed(&indent, "FirstLine(")
            .or_else(|| debug_signed(&indent, "Hanging(").map(|v| -v));
    }

    format
}

/// Map a `w:jc` value onto an alignment
pub(crate) fn parse_alignment(val: &str) -> Option<TextAlignment> {
    match val {
        "left" | "start" => Some(TextAlignment::Left),
        "center" => Some(TextAlignment::Center),
        "right" | "end" => Some(TextAlignment::Right),
        "both" | "justified" | "distribute" => Some(TextAlignment::Justify),
        _ => None,
    }
}

/// `w:lineRule` as rendered by `LineSpacing`'s Debug output
fn parse_line_rule(debug: &str) -> Option<LineRule> {
    if debug.contains("line_rule: Some(Exact)") {
        Some(LineRule::Exact)
    } else if debug.contains("line_rule: Some(AtLeast)") {
        Some(LineRule::AtLeast)
    } else if debug.contains("line_rule: Some(Auto)") {
        Some(LineRule::Auto)
    } else {
        None
    }
}

/// Toggle properties (`w:b`, `w:i`) are on unless explicitly `val: false`
fn toggle_on(debug: &str) -> bool {
    !debug.contains("val: false")
}

/// Quoted string following `key` in a `Debug` rendering
pub(crate) fn debug_string(debug: &str, key: &str) -> Option<String> {
    let start = debug.find(key)? + key.len();
    let end = debug[start..].find('"')?;
    Some(debug[start..start + end].to_string())
}

/// Unsigned number following `key` in a `Debug` rendering
pub(crate) fn debug_number(debug: &str, key: &str) -> Option<usize> {
    let start = debug.find(key)? + key.len();
    let digits: String = debug[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Signed number following `key` in a `Debug` rendering
pub(crate) fn debug_signed(debug: &str, key: &str) -> Option<i32> {
    let start = debug.find(key)? + key.len();
    let digits: String = debug[start..]
        .chars()
        .enumerate()
        .take_while(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '-'))
        .map(|(_, c)| c)
        .collect();
    digits.parse().ok()
}
