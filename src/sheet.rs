//! Definition rows from a spreadsheet.
//!
//! Layout: header on row 1, data from row 2, columns 2–5 holding logical
//! name, physical name, data type and required flag.

use crate::{
    definition::FIELD_COUNT,
    error::{MakerError, Result},
};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// 0-based index of the logical name column (column B).
pub const FIRST_COLUMN: u32 = 1;

/// Fields that must be present; the required flag may be blank.
const MANDATORY_FIELDS: usize = 3;

pub fn read_definition_rows(path: &Path, worksheet: &str, first_row: usize) -> Result<Vec<[String; FIELD_COUNT]>> {
    let mut wb = open_workbook_auto(path).map_err(|e| MakerError::Sheet(e.to_string()))?;
    if !wb.sheet_names().iter().any(|n| n == worksheet) {
        return Err(MakerError::MissingWorksheet(worksheet.to_string()));
    }
    let range = wb
        .worksheet_range(worksheet)
        .map_err(|e| MakerError::Sheet(e.to_string()))?;
    tracing::info!(path = %path.display(), worksheet, "opened spreadsheet");
    Ok(rows_from_range(&range, first_row))
}

/// Reads rows from `first_row` (1-based) and stops at the first row whose
/// logical name, physical name or data type is blank.
pub fn rows_from_range(range: &Range<Data>, first_row: usize) -> Vec<[String; FIELD_COUNT]> {
    let Some((last_row, _)) = range.end() else {
        return vec![];
    };
    let start = u32::try_from(first_row.saturating_sub(1)).unwrap_or(u32::MAX);

    let mut out = Vec::new();
    let mut r = start;
    while r <= last_row {
        let fields: [String; FIELD_COUNT] =
            std::array::from_fn(|i| cell_text(range.get_value((r, FIRST_COLUMN + i as u32))));
        if fields[..MANDATORY_FIELDS].iter().any(|f| f.is_empty()) {
            tracing::debug!(row = r + 1, "stopping at incomplete row");
            break;
        }
        out.push(fields);
        r += 1;
    }
    out
}

fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.trim().to_string(),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Float(f)) if f.is_finite() && f.fract() == 0.0 => format!("{}", *f as i64),
        Some(other) => other.to_string().trim().to_string(),
    }
}
