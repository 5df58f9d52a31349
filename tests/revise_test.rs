mod common;

use docfix::document::{BodyElement, Document, Paragraph, TextAlignment, load_document};
use docfix::rules::builtin;
use docfix::{RevisionOptions, Settings, revise_file};

fn revise_fixture() -> (Document, Document, docfix::ChangeLog) {
    let dir = tempfile::tempdir().unwrap();
    let input = common::write_sepsis_article(dir.path());
    let output = dir.path().join("out").join("Sepsis_EDITED_Final.docx");

    let rules = builtin::sepsis().unwrap();
    let options = RevisionOptions {
        output: Some(output.clone()),
        settings: Settings::default(),
    };
    let log = revise_file(&input, &rules, &options).unwrap();

    let source = load_document(&input).unwrap();
    let edited = load_document(&output).unwrap();
    (source, edited, log)
}

fn paragraph_containing<'a>(document: &'a Document, needle: &str) -> &'a Paragraph {
    document
        .paragraphs()
        .find(|p| p.text().contains(needle))
        .unwrap_or_else(|| panic!("no paragraph containing {needle:?}"))
}

#[test]
fn test_lactate_threshold_is_corrected_and_cited() {
    let (_, edited, log) = revise_fixture();

    let para = paragraph_containing(&edited, "Serum lactate level");
    assert_eq!(para.runs.len(), 2);
    assert_eq!(
        para.runs[0].text,
        "Serum lactate level >2 mmol/L (18 mg/dL) despite adequate volume resuscitation"
    );
    assert_eq!(para.runs[1].text, "[2]");
    assert!(para.runs[1].format.superscript);
    assert!(
        log.edits
            .iter()
            .any(|e| e.starts_with("CORRECTED: Fixed lactate threshold"))
    );
}

#[test]
fn test_citation_total_matches_markers_added() {
    let (_, edited, log) = revise_fixture();

    // Count references in every superscript marker of the output
    let from_output: usize = edited
        .paragraphs()
        .flat_map(|p| p.runs.iter())
        .filter(|r| r.format.superscript)
        .map(|r| r.text.trim_matches(['[', ']']).split(',').count())
        .sum();

    assert_eq!(log.citations, 11);
    assert_eq!(from_output, log.citations);
}

#[test]
fn test_tables_survive_unchanged() {
    let (source, edited, log) = revise_fixture();

    let source_tables: Vec<_> = source.tables().collect();
    let edited_tables: Vec<_> = edited.tables().collect();
    assert_eq!(source_tables.len(), 1);
    assert_eq!(edited_tables.len(), source_tables.len());
    assert_eq!(log.tables, 1);

    for (before, after) in source_tables.iter().zip(&edited_tables) {
        assert_eq!(after.row_count(), before.row_count());
        assert_eq!(after.column_count(), before.column_count());
        assert_eq!(after.cell_texts(), before.cell_texts());
    }
}

#[test]
fn test_body_order_is_preserved() {
    let (source, edited, _) = revise_fixture();

    assert_eq!(edited.elements.len(), source.elements.len());
    let table_at = |doc: &Document| {
        doc.elements
            .iter()
            .position(|e| matches!(e, BodyElement::Table(_)))
    };
    assert_eq!(table_at(&edited), table_at(&source));
}

#[test]
fn test_sections_are_renumbered() {
    let (_, edited, log) = revise_fixture();

    let texts: Vec<String> = edited.paragraphs().map(Paragraph::text).collect();
    assert!(texts.contains(&"1. Introduction to Sepsis".to_string()));
    assert!(texts.contains(&"4. Organ Cross-Talk in Sepsis".to_string()));
    assert!(texts.contains(&"7. Principles of Management".to_string()));
    assert!(texts.contains(&"8. Hemodynamic Management".to_string()));
    assert!(!texts.iter().any(|t| t.starts_with("6.")));

    let renumbered = log
        .edits
        .iter()
        .filter(|e| e.contains("Renumbered 'Principles of Management'"))
        .count();
    assert_eq!(renumbered, 1);

    let heading = paragraph_containing(&edited, "7. Principles of Management");
    assert!(heading.runs[0].format.bold);
    assert_eq!(heading.runs[0].format.size, Some(28));
}

#[test]
fn test_title_and_passthrough_formatting() {
    let (source, edited, log) = revise_fixture();

    let title = paragraph_containing(&edited, "Sepsis and Septic Shock");
    assert_eq!(title.format.alignment, Some(TextAlignment::Center));
    assert!(title.runs[0].format.bold);
    assert_eq!(title.runs[0].format.size, Some(36));

    let before = paragraph_containing(&source, "Supportive care");
    let after = paragraph_containing(&edited, "Supportive care");
    assert_eq!(after.runs, before.runs);

    assert_eq!(log.paragraphs, 14);
    assert_eq!(log.rules_matched, 12);
    assert_eq!(log.edits.len(), 8);
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = common::write_sepsis_article(dir.path());

    let rules = builtin::sepsis().unwrap();
    let log = revise_file(&input, &rules, &RevisionOptions::default()).unwrap();

    assert_eq!(log.citations, 11);
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_refuses_to_overwrite_source() {
    let dir = tempfile::tempdir().unwrap();
    let input = common::write_sepsis_article(dir.path());

    let rules = builtin::sepsis().unwrap();
    let options = RevisionOptions {
        output: Some(input.clone()),
        settings: Settings::default(),
    };
    assert!(revise_file(&input, &rules, &options).is_err());
}
