use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::error::RosterError;
use crate::export::HEADERS;
use crate::model::StudentRecord;

pub const SHEET_NAME: &str = "Students";

/// Write records to a single-sheet workbook, replacing any existing file.
///
/// Row 1 holds the headers; records follow in order.
pub fn write_xlsx(records: &[StudentRecord], path: &Path) -> Result<(), RosterError> {
    let mut workbook = build_workbook(records).map_err(|e| write_error(path, e))?;
    workbook.save(path).map_err(|e| write_error(path, e))?;
    tracing::info!(path = %path.display(), records = records.len(), "wrote XLSX");
    Ok(())
}

fn build_workbook(records: &[StudentRecord]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, &record.student_id)?;
        sheet.write_string(row, 1, &record.name)?;
    }

    sheet.set_column_width(0, 14)?;
    sheet.set_column_width(1, 32)?;

    Ok(workbook)
}

fn write_error(path: &Path, err: XlsxError) -> RosterError {
    RosterError::Write {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
