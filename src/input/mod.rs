use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::{debug, info};

pub mod dates;
pub mod delimited;
pub mod schema;
pub mod sheet;

use crate::model::record::CandidateRecord;
use delimited::read_delimited;
use schema::records_from_table;
use sheet::read_sheet;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),
    #[error("delimited text error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),
    #[error("parse error at data row {row}, column {column}: {message}")]
    Parse {
        row: usize,
        column: &'static str,
        message: String,
    },
    #[error("empty input: {0}")]
    Empty(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
    DateTime(NaiveDateTime),
    Error(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => f.write_str("<empty>"),
            Cell::Number(v) => write!(f, "{v}"),
            Cell::Text(s) => write!(f, "{s:?}"),
            Cell::DateTime(dt) => write!(f, "{dt}"),
            Cell::Error(code) => write!(f, "#{code}"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Spreadsheet,
    Delimited { delimiter: u8 },
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableFormat::Spreadsheet => f.write_str("spreadsheet"),
            TableFormat::Delimited { delimiter: b'\t' } => f.write_str("tsv"),
            TableFormat::Delimited { .. } => f.write_str("csv"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub source: PathBuf,
    pub format: TableFormat,
    pub records: Vec<CandidateRecord>,
}

pub fn detect_format(path: &Path) -> Result<TableFormat, InputError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_ascii_lowercase())
        .unwrap_or_default();
    let (stem, gz) = match name.strip_suffix(".gz") {
        Some(stem) => (stem, true),
        None => (name.as_str(), false),
    };
    let ext = stem.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
    match (ext, gz) {
        ("xlsx" | "xlsm" | "xlsb" | "xls" | "ods", false) => Ok(TableFormat::Spreadsheet),
        ("csv", _) => Ok(TableFormat::Delimited { delimiter: b',' }),
        ("tsv" | "tab" | "txt", _) => Ok(TableFormat::Delimited { delimiter: b'\t' }),
        _ => Err(InputError::UnsupportedFormat(path.display().to_string())),
    }
}

pub fn read_table(path: &Path) -> Result<(RawTable, TableFormat), InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let format = detect_format(path)?;
    info!("reading {} table from {}", format, path.display());
    let table = match format {
        TableFormat::Spreadsheet => read_sheet(path)?,
        TableFormat::Delimited { delimiter } => read_delimited(path, delimiter)?,
    };
    debug!(
        "table has {} columns and {} data rows",
        table.headers.len(),
        table.rows.len()
    );
    Ok((table, format))
}

pub fn load_records(path: &Path) -> Result<Dataset, InputError> {
    let (table, format) = read_table(path)?;
    let records = records_from_table(&table)?;
    if records.is_empty() {
        return Err(InputError::Empty(format!(
            "{} contains no candidate records",
            path.display()
        )));
    }
    info!("loaded {} candidate records", records.len());
    Ok(Dataset {
        source: path.to_path_buf(),
        format,
        records,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
