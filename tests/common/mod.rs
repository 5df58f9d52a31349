//! Builds a small version of the sepsis article as a .docx fixture

use std::fs::File;
use std::path::{Path, PathBuf};

fn text_para(text: &str) -> docx_rs::Paragraph {
    docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text(text))
}

fn cell(text: &str) -> docx_rs::TableCell {
    docx_rs::TableCell::new().add_paragraph(text_para(text))
}

pub fn sepsis_article() -> docx_rs::Docx {
    docx_rs::Docx::new()
        .add_paragraph(text_para("Sepsis and Septic Shock"))
        .add_paragraph(text_para("1. Introduction"))
        .add_paragraph(
            docx_rs::Paragraph::new()
                .add_run(docx_rs::Run::new().add_text("Sepsis is common, with ").italic())
                .add_run(
                    docx_rs::Run::new()
                        .add_text("mortality rates ranging from moderate (10%) to substantial (>40%).")
                        .color("C00000"),
                ),
        )
        .add_paragraph(docx_rs::Paragraph::new())
        .add_paragraph(text_para("Septic shock is defined as a subset of sepsis in which..."))
        .add_paragraph(text_para(
            "Vasopressor therapy to maintain mean arterial pressure ≥65 mmHg",
        ))
        .add_paragraph(text_para("Serum lactate level >18 mg/dL (2 mmol/L)"))
        .add_table(docx_rs::Table::new(vec![
            docx_rs::TableRow::new(vec![cell("Phenotype"), cell("Features"), cell("Mortality")]),
            docx_rs::TableRow::new(vec![cell("α"), cell("Fewest abnormal labs"), cell("2%")]),
            docx_rs::TableRow::new(vec![cell("δ"), cell("Liver dysfunction, shock"), cell("32%")]),
        ]))
        .add_paragraph(text_para("4.Organ Cross-Talk"))
        .add_paragraph(text_para("6. Principles of Management"))
        .add_paragraph(text_para("6.Hemodynamic Management"))
        .add_paragraph(text_para(
            "The BaSICS trial compared balanced solution with saline in 11,052 patients.",
        ))
        .add_paragraph(text_para(
            "Empiric antimicrobials should be given within 1 hour of sepsis recognition.",
        ))
        .add_paragraph(text_para("Supportive care follows standard ICU practice."))
        .add_paragraph(text_para("References"))
}

/// Write the fixture article into `dir`, returning its path
pub fn write_sepsis_article(dir: &Path) -> PathBuf {
    let path = dir.join("Sepsis_withtrials.docx");
    let file = File::create(&path).unwrap();
    sepsis_article().build().pack(file).unwrap();
    path
}
