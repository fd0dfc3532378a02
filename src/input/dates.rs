use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};

use crate::input::Cell;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
];

// Last serial Excel can represent (9999-12-31).
const EXCEL_MAX_SERIAL: f64 = 2_958_465.0;

pub fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let s = text.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

/// Excel 1900 date system; the fractional part is the time of day.
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 || serial > EXCEL_MAX_SERIAL + 1.0 {
        return None;
    }
    let days = serial.floor();
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let date = base.checked_add_days(Days::new(days as u64))?;
    let seconds = ((serial - days) * 86_400.0).round() as u32;
    date.and_hms_opt(0, 0, 0)
        .map(|midnight| midnight + chrono::Duration::seconds(i64::from(seconds.min(86_399))))
}

pub fn cell_to_date(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::DateTime(dt) => Some(dt.date()),
        Cell::Number(serial) => excel_serial_to_datetime(*serial).map(|dt| dt.date()),
        Cell::Text(text) => parse_date_text(text),
        Cell::Empty | Cell::Error(_) => None,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/dates.rs"]
mod tests;
