//! Property-based tests for null counting, numeric and date coercion counts

use checker_lib::{
    CellValue, ColumnRule, ColumnRules, ColumnType, TypeProblem, ValidationError,
    validate_data_types,
};
use proptest::prelude::*;

mod common;

#[derive(Debug, Clone)]
enum Generated {
    Null,
    Number(f64),
    NumericText(i32),
    Word(String),
}

impl Generated {
    fn cell(&self) -> CellValue {
        match self {
            Generated::Null => CellValue::Empty,
            Generated::Number(n) => CellValue::Number(*n),
            Generated::NumericText(n) => CellValue::String(n.to_string()),
            Generated::Word(word) => CellValue::String(word.clone()),
        }
    }
}

fn generated_cell() -> impl Strategy<Value = Generated> {
    prop_oneof![
        Just(Generated::Null),
        (-1.0e6..1.0e6f64).prop_map(Generated::Number),
        any::<i32>().prop_map(Generated::NumericText),
        "[a-z]{1,8}".prop_map(Generated::Word),
    ]
}

#[derive(Debug, Clone)]
enum GeneratedDate {
    Serial(f64),
    IsoText(i32, u32, u32),
    Cell(i32, u32, u32),
}

impl GeneratedDate {
    fn cell(&self) -> CellValue {
        match self {
            GeneratedDate::Serial(serial) => CellValue::Number(*serial),
            GeneratedDate::IsoText(year, month, day) => {
                CellValue::String(format!("{:04}-{:02}-{:02}", year, month, day))
            }
            GeneratedDate::Cell(year, month, day) => common::date(*year, *month, *day),
        }
    }
}

fn generated_date() -> impl Strategy<Value = GeneratedDate> {
    prop_oneof![
        (0.0..2_958_466.0f64).prop_map(GeneratedDate::Serial),
        (1900i32..2100, 1u32..=12, 1u32..=28)
            .prop_map(|(year, month, day)| GeneratedDate::IsoText(year, month, day)),
        (1900i32..2100, 1u32..=12, 1u32..=28)
            .prop_map(|(year, month, day)| GeneratedDate::Cell(year, month, day)),
    ]
}

fn single_rule(name: &str, column_type: ColumnType, required: bool) -> ColumnRules {
    let mut rules = ColumnRules::new();
    rules.insert(name.to_string(), ColumnRule::new(column_type, required));
    rules
}

fn count_of(errors: &[ValidationError], wanted: TypeProblem) -> usize {
    errors
        .iter()
        .find_map(|error| match error {
            ValidationError::TypeMismatch { problem, count, .. } if *problem == wanted => {
                Some(*count)
            }
            _ => None,
        })
        .unwrap_or(0)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500, ..ProptestConfig::default()
    })]

    #[test]
    fn test_required_null_count_is_exact(cells in prop::collection::vec(generated_cell(), 0..40)) {
        let expected_nulls = cells.iter().filter(|c| matches!(c, Generated::Null)).count();
        let dataset = common::dataset_from_columns(vec![
            ("Customer", cells.iter().map(Generated::cell).collect()),
        ]);

        let check = validate_data_types(&dataset, &single_rule("Customer", ColumnType::String, true));

        prop_assert_eq!(count_of(&check.errors, TypeProblem::EmptyRequired), expected_nulls);
        prop_assert_eq!(check.is_valid, expected_nulls == 0);
    }

    #[test]
    fn test_non_numeric_count_is_exact(cells in prop::collection::vec(generated_cell(), 0..40)) {
        let expected_failures = cells.iter().filter(|c| matches!(c, Generated::Word(_))).count();
        let dataset = common::dataset_from_columns(vec![
            ("Priority - PDR/TDR", cells.iter().map(Generated::cell).collect()),
        ]);

        let check = validate_data_types(
            &dataset,
            &single_rule("Priority - PDR/TDR", ColumnType::Numeric, false),
        );

        prop_assert_eq!(count_of(&check.errors, TypeProblem::NonNumeric), expected_failures);
        prop_assert_eq!(count_of(&check.errors, TypeProblem::EmptyRequired), 0);
    }

    #[test]
    fn test_clean_required_column_has_no_errors(values in prop::collection::vec(any::<i32>(), 1..40)) {
        let dataset = common::dataset_from_columns(vec![
            ("Priority - PDR/TDR", values.iter().map(|v| CellValue::Number(*v as f64)).collect()),
        ]);

        let check = validate_data_types(
            &dataset,
            &single_rule("Priority - PDR/TDR", ColumnType::Numeric, true),
        );

        prop_assert!(check.is_valid);
        prop_assert!(check.errors.is_empty());
    }

    #[test]
    fn test_clean_date_column_has_no_errors(values in prop::collection::vec(generated_date(), 1..40)) {
        let dataset = common::dataset_from_columns(vec![
            ("RO Create Date", values.iter().map(GeneratedDate::cell).collect()),
        ]);

        let check = validate_data_types(&dataset, &single_rule("RO Create Date", ColumnType::Date, true));

        prop_assert!(check.is_valid, "{:?}", check.errors);
        prop_assert!(check.errors.is_empty());
    }

    #[test]
    fn test_invalid_date_count_is_exact(
        dates in prop::collection::vec(generated_date(), 0..20),
        words in prop::collection::vec("[a-z]{1,8}", 0..20),
    ) {
        let mut cells: Vec<CellValue> = dates.iter().map(GeneratedDate::cell).collect();
        cells.extend(words.iter().map(|word| CellValue::String(word.clone())));
        let dataset = common::dataset_from_columns(vec![("RO Close Date", cells)]);

        let check = validate_data_types(&dataset, &single_rule("RO Close Date", ColumnType::Date, false));

        prop_assert_eq!(count_of(&check.errors, TypeProblem::InvalidDate), words.len());
        prop_assert_eq!(check.is_valid, words.is_empty());
    }
}
