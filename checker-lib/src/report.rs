use std::fmt::{self, Write};

use crate::config::ValidationConfig;
use crate::dataset::Dataset;
use crate::error::ValidationError;
use crate::pipeline::ValidationPass;
use crate::utils::join_or_none;

/// Result of the validation stages of a single pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    pub schema_valid: bool,
    /// `None` when type validation did not run
    pub type_valid: Option<bool>,
    pub missing_columns: Vec<String>,
    pub extra_columns: Vec<String>,
    pub column_errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.schema_valid && self.type_valid == Some(true)
    }

    /// All detected problems, the schema mismatch first
    pub fn errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if !self.missing_columns.is_empty() {
            errors.push(ValidationError::SchemaMismatch {
                missing: self.missing_columns.clone(),
            });
        }
        errors.extend(self.column_errors.iter().cloned());
        errors
    }
}

/// Human readable overview of a loaded dataset: size, columns and first rows
pub struct DataSummary<'a> {
    pub file_path: &'a str,
    pub dataset: &'a Dataset,
    pub preview_rows: usize,
}

impl fmt::Display for DataSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Data Summary ===")?;
        writeln!(f, "File: {}", self.file_path)?;
        writeln!(f, "Total rows: {}", self.dataset.row_count())?;
        writeln!(f, "Columns: {}", self.dataset.column_names().join(", "))?;
        writeln!(f)?;
        writeln!(f, "First {} rows:", self.preview_rows)?;
        write!(f, "{}", format_table(self.dataset, self.preview_rows))
    }
}

/// Right aligned text table of the first `rows` rows, with a row index column
pub fn format_table(dataset: &Dataset, rows: usize) -> String {
    let head = dataset.head(rows);
    if dataset.column_count() == 0 {
        return "(no columns)\n".to_string();
    }

    let headers = dataset.column_names();
    let cells: Vec<Vec<String>> = head
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    let index_width = head.len().saturating_sub(1).to_string().len();
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            cells
                .iter()
                .map(|row| row[column].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut table = String::new();
    let _ = write!(table, "{:>width$}", "", width = index_width);
    for (header, width) in headers.iter().zip(&widths) {
        let _ = write!(table, "  {:>width$}", header, width = *width);
    }
    table.push('\n');

    for (index, row) in cells.iter().enumerate() {
        let _ = write!(table, "{:>width$}", index, width = index_width);
        for (cell, width) in row.iter().zip(&widths) {
            let _ = write!(table, "  {:>width$}", cell, width = *width);
        }
        table.push('\n');
    }

    table
}

/// Console report for a finished pass
pub fn render_pass(pass: &ValidationPass, config: &ValidationConfig) -> String {
    let expected_columns = config.expected_columns.columns();
    let mut out = String::new();
    let _ = writeln!(out, "Reading file: {}", pass.file_path);

    if let Some(error) = &pass.load_error {
        let _ = writeln!(out, "❌ ERROR: {}", error);
        return out;
    }

    let Some(dataset) = &pass.dataset else {
        return out;
    };
    let report = &pass.report;

    let _ = writeln!(out, "✅ File loaded successfully!");
    let _ = writeln!(
        out,
        "  Found {} rows and {} columns",
        dataset.row_count(),
        dataset.column_count()
    );
    let _ = writeln!(out, "  Columns: {}", dataset.column_names().join(", "));

    if !expected_columns.is_empty() {
        out.push('\n');
        if report.schema_valid {
            let _ = writeln!(out, "✅ Column validation passed!");
            if !report.extra_columns.is_empty() {
                let _ = writeln!(
                    out,
                    "  Note: Extra columns found: {}",
                    report.extra_columns.join(", ")
                );
            }
        } else {
            let _ = writeln!(out, "❌ ERROR: Column validation failed!");
            let _ = writeln!(out, "  Expected columns: {}", expected_columns.join(", "));
            let _ = writeln!(out, "  Missing columns: {}", join_or_none(&report.missing_columns));
            if !report.extra_columns.is_empty() {
                let _ = writeln!(
                    out,
                    "  Extra columns found: {}",
                    report.extra_columns.join(", ")
                );
            }
        }
    }

    if let Some(type_valid) = report.type_valid {
        out.push('\n');
        let _ = writeln!(out, "Validating data types and format...");
        if type_valid {
            let _ = writeln!(out, "✅ Data type validation passed!");
        } else {
            let _ = writeln!(out, "❌ ERROR: Data validation failed!");
            for error in &report.column_errors {
                let _ = writeln!(out, "  - {}", error);
            }
        }
    }

    if pass.is_success() {
        let _ = writeln!(out, "\n{}", "=".repeat(60));
        let _ = writeln!(out, "SUCCESS! Data extracted and validated.");
        let _ = writeln!(out, "{}", "=".repeat(60));
        out.push('\n');
        let summary = DataSummary {
            file_path: &pass.file_path,
            dataset,
            preview_rows: config.preview_rows,
        };
        let _ = write!(out, "{}", summary);
    }

    out
}

/// Block written to the error log for a failed pass
pub fn render_error_log_entry(pass: &ValidationPass) -> String {
    let mut entry = String::new();
    entry.push_str("=============================\n");
    let _ = writeln!(entry, "File: {}", pass.file_path);
    let _ = writeln!(entry, "Stage reached: {:?}", pass.stage);

    if let Some(error) = &pass.load_error {
        let _ = writeln!(entry, "Load error: {}", error);
        return entry;
    }

    let errors = pass.report.errors();
    let _ = writeln!(entry, "Total errors: {}\n", errors.len());
    if !pass.report.extra_columns.is_empty() {
        let _ = writeln!(
            entry,
            "Extra columns: {}",
            pass.report.extra_columns.join(", ")
        );
    }
    entry.push_str("Errors:\n");
    for error in &errors {
        let _ = writeln!(entry, "  - {}", error);
    }
    entry
}
