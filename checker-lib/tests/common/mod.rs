//! Common test utilities for the checker-lib integration tests

use std::path::{Path, PathBuf};

// Re-export shared test utilities from src/test_utils.rs
#[allow(unused_imports)]
pub use checker_lib::test_utils::*;

/// A cell written into a fixture workbook
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub enum Fixture<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

/// Write `rows` into the first sheet of a new xlsx file inside `dir`
#[allow(dead_code)]
pub fn write_workbook(dir: &Path, file_name: &str, rows: &[Vec<Fixture>]) -> PathBuf {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book
        .get_sheet_by_name_mut("Sheet1")
        .expect("new workbooks start with Sheet1");

    for (row_index, row) in rows.iter().enumerate() {
        for (column_index, cell) in row.iter().enumerate() {
            let coordinate = ((column_index + 1) as u32, (row_index + 1) as u32);
            match cell {
                Fixture::Text(value) => {
                    sheet.get_cell_mut(coordinate).set_value_string(*value);
                }
                Fixture::Number(value) => {
                    sheet.get_cell_mut(coordinate).set_value_number(*value);
                }
                Fixture::Blank => {}
            }
        }
    }

    let path = dir.join(file_name);
    umya_spreadsheet::writer::xlsx::write(&book, &path).expect("fixture workbook is written");
    path
}

/// Header row plus two clean rows in the Optix layout
#[allow(dead_code)]
pub fn optix_rows() -> Vec<Vec<Fixture<'static>>> {
    use Fixture::*;
    let mut rows = vec![OPTIX_COLUMNS.iter().map(|(name, _, _)| Text(*name)).collect()];
    rows.push(vec![
        Text("ACME"),
        Text("RO-1001"),
        Text("PN-1"),
        Text("SN-1"),
        Text("Hydraulic pump"),
        Text("SUP-9"),
        Number(1.0),
        Text("Initech"),
        Text("Q-77"),
        Text("2024-01-15"),
        Text("2024-03-01"),
    ]);
    rows.push(vec![
        Text("Globex"),
        Text("RO-1002"),
        Text("PN-2"),
        Text("SN-2"),
        Text("Actuator"),
        Text("SUP-7"),
        Number(2.0),
        Text("Umbrella"),
        Blank,
        Text("02/01/2024"),
        Number(45383.0),
    ]);
    rows
}
