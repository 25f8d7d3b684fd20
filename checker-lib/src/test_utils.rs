// Test utilities available to both unit and integration tests
// Only compiled when testing

use calamine::{Data, Range};
use chrono::NaiveDate;

use crate::config::{ColumnRule, ColumnRules, ColumnType, SchemaDefinition, ValidationConfig};
use crate::dataset::{CellValue, Column, Dataset};

/// Columns and rules of the "Optix PDR TDR - Digitization Priority" template
pub const OPTIX_COLUMNS: [(&str, ColumnType, bool); 11] = [
    ("Customer", ColumnType::String, true),
    ("Customer RO", ColumnType::String, true),
    ("Customer Pre Work PN", ColumnType::String, true),
    ("Customer Pre Work SN", ColumnType::String, true),
    ("Description", ColumnType::String, true),
    ("Customer Supplier Code", ColumnType::String, true),
    ("Priority - PDR/TDR", ColumnType::Numeric, true),
    ("Supplier Name", ColumnType::String, true),
    ("Last Quote ID", ColumnType::String, false),
    ("RO Create Date", ColumnType::Date, true),
    ("RO Close Date", ColumnType::Date, true),
];

pub fn text(value: &str) -> CellValue {
    CellValue::String(value.to_string())
}

pub fn num(value: f64) -> CellValue {
    CellValue::Number(value)
}

pub fn date(year: i32, month: u32, day: u32) -> CellValue {
    CellValue::Date(
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid test date"),
    )
}

/// Build a dataset from (name, cells) pairs. Panics on ragged input.
pub fn dataset_from_columns(columns: Vec<(&str, Vec<CellValue>)>) -> Dataset {
    Dataset::new(
        columns
            .into_iter()
            .map(|(name, cells)| Column::new(name, cells))
            .collect(),
    )
    .expect("test columns must have equal length")
}

/// A dataset with the given headers and no rows
pub fn dataset_with_headers(headers: &[&str]) -> Dataset {
    dataset_from_columns(headers.iter().map(|h| (*h, Vec::new())).collect())
}

/// Worksheet range holding `rows`, first row first, padded to the widest row
pub fn range_from_rows(rows: Vec<Vec<Data>>) -> Range<Data> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    if rows.is_empty() || width == 0 {
        return Range::empty();
    }

    let mut range = Range::new((0, 0), (rows.len() as u32 - 1, width as u32 - 1));
    for (row_index, row) in rows.into_iter().enumerate() {
        for (column_index, cell) in row.into_iter().enumerate() {
            range.set_value((row_index as u32, column_index as u32), cell);
        }
    }
    range
}

pub fn optix_schema() -> SchemaDefinition {
    SchemaDefinition::new(OPTIX_COLUMNS.iter().map(|(name, _, _)| *name))
}

pub fn optix_rules() -> ColumnRules {
    OPTIX_COLUMNS
        .iter()
        .map(|(name, column_type, required)| {
            (name.to_string(), ColumnRule::new(*column_type, *required))
        })
        .collect()
}

pub fn optix_config() -> ValidationConfig {
    ValidationConfig::new(optix_schema(), optix_rules())
}

/// Two clean rows in the Optix layout
pub fn optix_dataset() -> Dataset {
    dataset_from_columns(vec![
        ("Customer", vec![text("ACME"), text("Globex")]),
        ("Customer RO", vec![text("RO-1001"), text("RO-1002")]),
        ("Customer Pre Work PN", vec![text("PN-1"), text("PN-2")]),
        ("Customer Pre Work SN", vec![text("SN-1"), text("SN-2")]),
        ("Description", vec![text("Hydraulic pump"), text("Actuator")]),
        ("Customer Supplier Code", vec![text("SUP-9"), text("SUP-7")]),
        ("Priority - PDR/TDR", vec![num(1.0), num(2.0)]),
        ("Supplier Name", vec![text("Initech"), text("Umbrella")]),
        ("Last Quote ID", vec![text("Q-77"), CellValue::Empty]),
        ("RO Create Date", vec![date(2024, 1, 15), text("2024-02-01")]),
        ("RO Close Date", vec![date(2024, 3, 1), num(45383.0)]),
    ])
}
