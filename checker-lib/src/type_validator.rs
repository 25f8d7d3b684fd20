use crate::config::{ColumnRule, ColumnRules, ColumnType};
use crate::dataset::{CellValue, Column, Dataset};
use crate::error::{TypeProblem, ValidationError};
use crate::utils::{excel_serial_to_datetime, parse_date_str};

/// Outcome of the per-column type and required-field checks
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeCheck {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Check every ruled column of the dataset
///
/// Columns are visited in sheet order. Columns without a rule, and rules whose
/// column is absent, are ignored. Nothing is converted: coercion is a dry run
/// that only counts the cells that would fail.
pub fn validate_data_types(dataset: &Dataset, rules: &ColumnRules) -> TypeCheck {
    let errors: Vec<ValidationError> = dataset
        .columns()
        .iter()
        .filter_map(|column| rules.get(column.name()).map(|rule| (column, rule)))
        .flat_map(|(column, rule)| check_column(column, rule))
        .collect();

    TypeCheck {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Problems of a single column: at most one for nulls, at most one for coercion
pub fn check_column(column: &Column, rule: &ColumnRule) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if rule.required {
        let null_count = column.null_count();
        if null_count > 0 {
            errors.push(ValidationError::TypeMismatch {
                column: column.name().to_string(),
                problem: TypeProblem::EmptyRequired,
                count: null_count,
            });
        }
    }

    let problem = match rule.column_type {
        ColumnType::String => return errors,
        ColumnType::Numeric => TypeProblem::NonNumeric,
        ColumnType::Date => TypeProblem::InvalidDate,
    };

    let failures = column
        .non_null_cells()
        .filter(|cell| !coerces_to(cell, rule.column_type))
        .count();
    if failures > 0 {
        errors.push(ValidationError::TypeMismatch {
            column: column.name().to_string(),
            problem,
            count: failures,
        });
    }

    errors
}

/// Whether a cell can be read as the given type
pub fn coerces_to(cell: &CellValue, column_type: ColumnType) -> bool {
    match column_type {
        ColumnType::String => true,
        ColumnType::Numeric => is_numeric(cell),
        ColumnType::Date => is_date(cell),
    }
}

fn is_numeric(cell: &CellValue) -> bool {
    match cell {
        CellValue::Empty => false,
        CellValue::Number(n) => !n.is_nan(),
        // Booleans and dates are stored as numbers by the spreadsheet itself
        CellValue::Bool(_) | CellValue::Date(_) => true,
        CellValue::String(s) => s.trim().parse::<f64>().is_ok_and(|n| !n.is_nan()),
    }
}

fn is_date(cell: &CellValue) -> bool {
    match cell {
        CellValue::Empty | CellValue::Bool(_) => false,
        CellValue::Date(_) => true,
        CellValue::Number(n) => excel_serial_to_datetime(*n).is_some(),
        CellValue::String(s) => parse_date_str(s).is_some(),
    }
}
