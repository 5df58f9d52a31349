//! Table extraction
//!
//! Tables are copied through unchanged, so extraction keeps every row and
//! cell in place (no header inference, no empty-row dropping) along with
//! each cell's paragraphs and grid span.

use super::super::models::*;
use super::formatting::{debug_number, debug_string, extract_paragraph};

/// Extract table data from a docx-rs Table
pub(crate) fn extract_table(table: &docx_rs::Table) -> Table {
    let mut rows = Vec::new();

    for table_child in &table.rows {
        let docx_rs::TableChild::TableRow(row) = table_child;
        let mut cells = Vec::new();

        for row_child in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = row_child;
            cells.push(extract_cell(cell));
        }

        rows.push(TableRow { cells });
    }

    Table {
        rows,
        style: debug_string(&format!("{:?}", table.property), "TableStyle { val: \""),
    }
}

fn extract_cell(cell: &docx_rs::TableCell) -> TableCell {
    let mut paragraphs = Vec::new();

    for content in &cell.children {
        match content {
            docx_rs::TableCellContent::Paragraph(para) => {
                paragraphs.push(extract_paragraph(para));
            }
            _ => {
                // Nested tables are not carried over
            }
        }
    }

    TableCell {
        paragraphs,
        grid_span: debug_number(&format!("{:?}", cell.property), "GridSpan { val: ")
            .filter(|span| *span > 1),
    }
}
