use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::input::dates::excel_serial_to_datetime;
use crate::input::delimited::text_cell;
use crate::input::{Cell, InputError, RawTable};

/// Reads the first worksheet; the first row is the header.
pub fn read_sheet(path: &Path) -> Result<RawTable, InputError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range_at(0).ok_or_else(|| {
        InputError::Empty(format!("{} contains no worksheets", path.display()))
    })??;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| InputError::Empty(format!("{} has no header row", path.display())))?;
    let headers = header.iter().map(header_text).collect::<Vec<_>>();

    let body = rows
        .map(|row| row.iter().map(convert_cell).collect())
        .collect::<Vec<_>>();

    Ok(RawTable {
        headers,
        rows: body,
    })
}

fn header_text(data: &Data) -> String {
    match data {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

pub fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Int(v) => Cell::Number(*v as f64),
        Data::Float(v) => Cell::Number(*v),
        Data::Bool(v) => Cell::Text(v.to_string()),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => text_cell(s),
        Data::DateTime(dt) => match excel_serial_to_datetime(dt.as_f64()) {
            Some(value) => Cell::DateTime(value),
            None => Cell::Number(dt.as_f64()),
        },
        Data::Error(e) => Cell::Error(e.to_string()),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/sheet.rs"]
mod tests;
