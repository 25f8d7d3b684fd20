//! Common test utilities for the sheet-checker binary tests

use std::path::{Path, PathBuf};

#[allow(unused_imports)]
pub use checker_lib::test_utils::*;

/// Write `rows` of text cells into the first sheet of a new xlsx file inside `dir`.
/// Empty strings leave the cell blank.
#[allow(dead_code)]
pub fn write_text_workbook(dir: &Path, file_name: &str, rows: &[Vec<&str>]) -> PathBuf {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book
        .get_sheet_by_name_mut("Sheet1")
        .expect("new workbooks start with Sheet1");

    for (row_index, row) in rows.iter().enumerate() {
        for (column_index, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            let coordinate = ((column_index + 1) as u32, (row_index + 1) as u32);
            sheet.get_cell_mut(coordinate).set_value_string(*value);
        }
    }

    let path = dir.join(file_name);
    umya_spreadsheet::writer::xlsx::write(&book, &path).expect("fixture workbook is written");
    path
}

/// Header row plus one clean row in the Optix layout, all as text
#[allow(dead_code)]
pub fn optix_text_rows() -> Vec<Vec<&'static str>> {
    vec![
        OPTIX_COLUMNS.iter().map(|(name, _, _)| *name).collect(),
        vec![
            "ACME",
            "RO-1001",
            "PN-1",
            "SN-1",
            "Hydraulic pump",
            "SUP-9",
            "1",
            "Initech",
            "",
            "2024-01-15",
            "2024-03-01",
        ],
    ]
}

/// Optix configuration whose error log lives inside `dir`
#[allow(dead_code)]
pub fn optix_config_logging_to(dir: &Path) -> checker_lib::ValidationConfig {
    checker_lib::ValidationConfig {
        error_log_file: Some(dir.join("errors.log").display().to_string()),
        ..optix_config()
    }
}
