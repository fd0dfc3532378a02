use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::input::dates::cell_to_date;
use crate::input::{Cell, InputError, RawTable};
use crate::model::record::CandidateRecord;

pub const COL_DATE: &str = "Date";
pub const COL_AGE: &str = "Age";
pub const COL_POSITION: &str = "Position";
pub const COL_GENDER: &str = "Gender";
pub const COL_OVERALL: &str = "Overall";
pub const COL_IQ: &str = "IQ";
pub const COL_LOGICAL: &str = "Logical Reasoning";
pub const COL_NUMERICAL: &str = "Numerical Reasoning";
pub const COL_VERBAL: &str = "Verbal Reasoning";
pub const COL_OPENNESS: &str = "Openness";
pub const COL_CONSCIENTIOUSNESS: &str = "Conscientiousness";
pub const COL_EXTRAVERSION: &str = "Extraversion";
pub const COL_AGREEABLENESS: &str = "Agreeableness";
pub const COL_NEUROTICISM: &str = "Neuroticism";

pub const REQUIRED_COLUMNS: [&str; 14] = [
    COL_DATE,
    COL_AGE,
    COL_POSITION,
    COL_GENDER,
    COL_OVERALL,
    COL_IQ,
    COL_LOGICAL,
    COL_NUMERICAL,
    COL_VERBAL,
    COL_OPENNESS,
    COL_CONSCIENTIOUSNESS,
    COL_EXTRAVERSION,
    COL_AGREEABLENESS,
    COL_NEUROTICISM,
];

static EMPTY_CELL: Cell = Cell::Empty;

#[derive(Debug, Clone)]
pub struct ColumnIndex {
    positions: BTreeMap<&'static str, usize>,
}

impl ColumnIndex {
    pub fn locate(headers: &[String]) -> Result<Self, InputError> {
        let normalized = headers
            .iter()
            .map(|h| normalize_header(h))
            .collect::<Vec<_>>();
        let mut positions = BTreeMap::new();
        for name in REQUIRED_COLUMNS {
            let wanted = normalize_header(name);
            let idx = normalized
                .iter()
                .position(|h| *h == wanted)
                .ok_or(InputError::MissingColumn(name))?;
            positions.insert(name, idx);
        }
        Ok(Self { positions })
    }

    fn cell<'a>(&self, row: &'a [Cell], name: &'static str) -> &'a Cell {
        self.positions
            .get(name)
            .and_then(|idx| row.get(*idx))
            .unwrap_or(&EMPTY_CELL)
    }
}

fn normalize_header(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

pub fn records_from_table(table: &RawTable) -> Result<Vec<CandidateRecord>, InputError> {
    let columns = ColumnIndex::locate(&table.headers)?;
    let mut records = Vec::with_capacity(table.rows.len());

    for (idx, row) in table.rows.iter().enumerate() {
        if row.iter().all(|c| matches!(c, Cell::Empty)) {
            continue;
        }
        let row_no = idx + 1;
        let field = |name: &'static str| FieldRef {
            cell: columns.cell(row, name),
            row: row_no,
            column: name,
        };

        records.push(CandidateRecord {
            date: field(COL_DATE).date()?,
            age: field(COL_AGE).age()?,
            position: field(COL_POSITION).category()?,
            gender: field(COL_GENDER).category()?,
            overall: field(COL_OVERALL).number()?,
            iq: field(COL_IQ).number()?,
            logical_reasoning: field(COL_LOGICAL).number()?,
            numerical_reasoning: field(COL_NUMERICAL).number()?,
            verbal_reasoning: field(COL_VERBAL).number()?,
            openness: field(COL_OPENNESS).number()?,
            conscientiousness: field(COL_CONSCIENTIOUSNESS).number()?,
            extraversion: field(COL_EXTRAVERSION).number()?,
            agreeableness: field(COL_AGREEABLENESS).number()?,
            neuroticism: field(COL_NEUROTICISM).number()?,
        });
    }

    Ok(records)
}

struct FieldRef<'a> {
    cell: &'a Cell,
    row: usize,
    column: &'static str,
}

impl FieldRef<'_> {
    fn fail(&self, message: impl Into<String>) -> InputError {
        InputError::Parse {
            row: self.row,
            column: self.column,
            message: message.into(),
        }
    }

    fn absent(&self) -> InputError {
        match self.cell {
            Cell::Error(code) => self.fail(format!("cell error {code}")),
            _ => self.fail("missing value"),
        }
    }

    fn number(&self) -> Result<f64, InputError> {
        let value = match self.cell {
            Cell::Number(v) => *v,
            Cell::Text(s) => s
                .parse::<f64>()
                .map_err(|_| self.fail(format!("expected a number, found {s:?}")))?,
            Cell::DateTime(dt) => return Err(self.fail(format!("expected a number, found {dt}"))),
            Cell::Empty | Cell::Error(_) => return Err(self.absent()),
        };
        if !value.is_finite() {
            return Err(self.fail("value is not finite"));
        }
        Ok(value)
    }

    fn age(&self) -> Result<u32, InputError> {
        let value = self.number()?;
        if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
            return Err(self.fail(format!(
                "expected a whole non-negative age, found {value}"
            )));
        }
        Ok(value as u32)
    }

    fn category(&self) -> Result<String, InputError> {
        match self.cell {
            Cell::Text(s) => Ok(s.clone()),
            Cell::Number(v) if v.fract() == 0.0 => Ok(format!("{}", *v as i64)),
            Cell::Number(v) => Ok(v.to_string()),
            Cell::DateTime(dt) => Ok(dt.to_string()),
            Cell::Empty | Cell::Error(_) => Err(self.absent()),
        }
    }

    fn date(&self) -> Result<NaiveDate, InputError> {
        match self.cell {
            Cell::Empty | Cell::Error(_) => Err(self.absent()),
            cell => cell_to_date(cell)
                .ok_or_else(|| self.fail(format!("unrecognized date {cell}"))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/schema.rs"]
mod tests;
