use super::*;
use crate::fixtures::date;

fn headers() -> Vec<String> {
    REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect()
}

fn numeric_row(date_cell: Cell) -> Vec<Cell> {
    let mut row = vec![
        date_cell,
        Cell::Number(29.0),
        Cell::Text("Engineer".to_string()),
        Cell::Text("Female".to_string()),
    ];
    row.extend((0..10).map(|i| Cell::Number(50.0 + i as f64)));
    row
}

#[test]
fn test_records_from_spreadsheet_cells() {
    let stamped = date(2023, 7, 4).and_hms_opt(13, 30, 0).unwrap();
    let table = RawTable {
        headers: headers(),
        rows: vec![numeric_row(Cell::DateTime(stamped))],
    };
    let records = records_from_table(&table).unwrap();
    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.date, date(2023, 7, 4));
    assert_eq!(r.age, 29);
    assert_eq!(r.overall, 50.0);
    assert_eq!(r.iq, 51.0);
    assert_eq!(r.verbal_reasoning, 54.0);
    assert_eq!(r.neuroticism, 59.0);
}

#[test]
fn test_columns_may_appear_in_any_order() {
    let mut hdrs = headers();
    hdrs.reverse();
    let mut row = numeric_row(Cell::Text("2023-07-04".to_string()));
    row.reverse();
    let table = RawTable {
        headers: hdrs,
        rows: vec![row],
    };
    let records = records_from_table(&table).unwrap();
    assert_eq!(records[0].position, "Engineer");
    assert_eq!(records[0].neuroticism, 59.0);
}

#[test]
fn test_numeric_category_is_rendered_as_integer_text() {
    let mut row = numeric_row(Cell::Text("2023-07-04".to_string()));
    row[2] = Cell::Number(7.0);
    let table = RawTable {
        headers: headers(),
        rows: vec![row],
    };
    let records = records_from_table(&table).unwrap();
    assert_eq!(records[0].position, "7");
}

#[test]
fn test_short_row_reports_missing_value() {
    let mut row = numeric_row(Cell::Text("2023-07-04".to_string()));
    row.truncate(5);
    let table = RawTable {
        headers: headers(),
        rows: vec![row],
    };
    match records_from_table(&table).unwrap_err() {
        InputError::Parse {
            row, column, message, ..
        } => {
            assert_eq!(row, 1);
            assert_eq!(column, COL_IQ);
            assert_eq!(message, "missing value");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_error_cell_is_reported() {
    let mut row = numeric_row(Cell::Text("2023-07-04".to_string()));
    row[4] = Cell::Error("DIV/0!".to_string());
    let table = RawTable {
        headers: headers(),
        rows: vec![row],
    };
    let err = records_from_table(&table).unwrap_err();
    assert!(err.to_string().contains("cell error DIV/0!"));
}

#[test]
fn test_unrecognized_date_is_reported() {
    let table = RawTable {
        headers: headers(),
        rows: vec![numeric_row(Cell::Text("soon".to_string()))],
    };
    let err = records_from_table(&table).unwrap_err();
    assert!(matches!(err, InputError::Parse { column: COL_DATE, .. }));
}
