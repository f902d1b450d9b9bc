//! XLSX rendering of a RACI matrix.

use std::path::Path;

use rust_xlsxwriter::{Color, ColNum, Format, FormatAlign, Note, RowNum, Workbook, XlsxError};

use super::matrix::{RaciCode, RaciMatrix};
use crate::config::RACI_SHEET_NAME;
use crate::error_handling::RaciError;

/// Header row fill colour.
const HEADER_FILL: u32 = 0x1F4E78;

/// Writes the matrix to an XLSX workbook at `path`.
///
/// The single worksheet has a dark header row, colour-coded assignment
/// cells, and columns sized to their content. Task descriptions are
/// attached as notes on the task name cells.
///
/// # Errors
///
/// Returns `RaciError::Workbook` if the sheet exceeds Excel's limits or the
/// file cannot be saved.
pub fn write_workbook(matrix: &RaciMatrix, path: &Path) -> Result<(), RaciError> {
    let mut workbook = build_workbook(matrix)?;
    workbook.save(path)?;
    log::info!(
        "Wrote {} task row(s) to {}",
        matrix.rows.len(),
        path.display()
    );
    Ok(())
}

fn build_workbook(matrix: &RaciMatrix) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(RACI_SHEET_NAME)?;

    let centered = Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let header_format = centered
        .clone()
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_font_color(Color::White)
        .set_bold();

    for (col, title) in matrix.header.iter().enumerate() {
        worksheet.write_string_with_format(0, col_num(col)?, title, &header_format)?;
    }

    for (index, row) in matrix.rows.iter().enumerate() {
        let row_num = row_num(index + 1)?;
        worksheet.write_string(row_num, 0, &row.task)?;
        if let Some(description) = row.description.as_deref().filter(|d| !d.is_empty()) {
            worksheet.insert_note(row_num, 0, &Note::new(description))?;
        }

        for (offset, value) in row.cells.iter().enumerate() {
            let col = col_num(offset + 1)?;
            let format = match RaciCode::parse(value) {
                Some(code) => code_format(&centered, code),
                None => centered.clone(),
            };
            if value.is_empty() {
                worksheet.write_blank(row_num, col, &format)?;
            } else {
                worksheet.write_string_with_format(row_num, col, value, &format)?;
            }
        }
    }

    for (col, width) in matrix.column_widths().into_iter().enumerate() {
        worksheet.set_column_width(col_num(col)?, width as f64)?;
    }

    Ok(workbook)
}

fn code_format(base: &Format, code: RaciCode) -> Format {
    let format = base
        .clone()
        .set_background_color(Color::RGB(code.fill_rgb()));
    if code.is_bold() {
        format.set_bold()
    } else {
        format
    }
}

fn col_num(index: usize) -> Result<ColNum, XlsxError> {
    ColNum::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}

fn row_num(index: usize) -> Result<RowNum, XlsxError> {
    RowNum::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}
