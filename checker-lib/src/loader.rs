use calamine::{Data, Range, Reader, Sheets, open_workbook};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::dataset::{CellValue, Column, Dataset};
use crate::error::{DatasetError, LoadError};
use crate::utils::{excel_serial_to_datetime, normalize_string, parse_date_str};

/// File extensions the spreadsheet reader understands
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Read the first worksheet of a spreadsheet file into a dataset
///
/// The first row holds the column names; every following non-empty row
/// becomes one row of the dataset.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let display_path = path.display().to_string();

    if !path.exists() {
        return Err(LoadError::FileNotFound { path: display_path });
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();
    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(LoadError::UnreadableFormat {
            path: display_path,
            reason: format!(
                "unsupported file extension, expected one of: {}",
                SUPPORTED_EXTENSIONS.join(", ")
            ),
        });
    }

    let unreadable = |reason: String| LoadError::UnreadableFormat {
        path: display_path.clone(),
        reason,
    };

    let mut workbook = open_sheets(path, &extension)
        .map_err(|reason| unreadable(format!("failed to open workbook: {}", reason)))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(Ok(range)) => range,
        Some(Err(e)) => return Err(unreadable(format!("failed to read first sheet: {}", e))),
        None => return Err(unreadable("workbook contains no worksheets".to_string())),
    };

    dataset_from_range(&range).map_err(|e| unreadable(format!("malformed first sheet: {}", e)))
}

/// Open the workbook with the reader matching its (lowercased) extension
fn open_sheets(path: &Path, extension: &str) -> Result<Sheets<BufReader<File>>, String> {
    let sheets = match extension {
        "xls" => Sheets::Xls(open_workbook(path).map_err(|e: calamine::XlsError| e.to_string())?),
        "xlsx" | "xlsm" => {
            Sheets::Xlsx(open_workbook(path).map_err(|e: calamine::XlsxError| e.to_string())?)
        }
        "xlsb" => {
            Sheets::Xlsb(open_workbook(path).map_err(|e: calamine::XlsbError| e.to_string())?)
        }
        "ods" => Sheets::Ods(open_workbook(path).map_err(|e: calamine::OdsError| e.to_string())?),
        other => return Err(format!("no reader for extension '{}'", other)),
    };
    Ok(sheets)
}

/// Convert a worksheet range (header row + data rows) into a dataset
pub fn dataset_from_range(range: &Range<Data>) -> Result<Dataset, DatasetError> {
    let mut rows = range.rows();

    let Some(header_row) = rows.next() else {
        return Ok(Dataset::default());
    };

    let headers: Vec<String> = header_row
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            let header = normalize_string(&cell.to_string());
            if header.is_empty() {
                format!("Unnamed: {}", index)
            } else {
                header
            }
        })
        .collect();

    let headers = deduplicate_headers(headers);

    let mut cells_by_column: Vec<Vec<CellValue>> = vec![Vec::new(); headers.len()];
    for row in rows {
        let converted: Vec<CellValue> = (0..headers.len())
            .map(|index| row.get(index).map(convert_cell).unwrap_or(CellValue::Empty))
            .collect();

        // Skip empty rows
        if converted.iter().all(CellValue::is_empty) {
            continue;
        }

        for (column_cells, cell) in cells_by_column.iter_mut().zip(converted) {
            column_cells.push(cell);
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells_by_column)
        .map(|(name, cells)| Column::new(name, cells))
        .collect();

    Dataset::new(columns)
}

/// Map one spreadsheet cell onto the dataset's cell model
pub fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::from(s.as_str()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        // Formula errors such as #N/A carry no value
        Data::Error(_) => CellValue::Empty,
        Data::DateTime(dt) => excel_serial_to_datetime(dt.as_f64())
            .map(CellValue::Date)
            .unwrap_or(CellValue::Number(dt.as_f64())),
        Data::DateTimeIso(dt_str) => parse_date_str(dt_str)
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::from(dt_str.as_str())),
        Data::DurationIso(dur_str) => CellValue::from(dur_str.as_str()),
    }
}

/// Make repeated header names unique
///
/// The first occurrence keeps its name, later ones get `.1`, `.2`, ... appended,
/// skipping suffixed names the sheet already uses.
///
/// # Arguments
/// * `headers` - Header strings, already normalized
///
/// # Returns
/// * Headers in the same order, all distinct
fn deduplicate_headers(headers: Vec<String>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut unique = Vec::with_capacity(headers.len());

    for header in headers {
        let mut name = header;
        let mut count = counts.get(&name).copied().unwrap_or(0);
        while count > 0 {
            counts.insert(name.clone(), count + 1);
            name = format!("{}.{}", name, count);
            count = counts.get(&name).copied().unwrap_or(0);
        }
        counts.insert(name.clone(), count + 1);
        unique.push(name);
    }

    return unique;
}
