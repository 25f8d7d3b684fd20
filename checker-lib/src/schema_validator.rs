use std::collections::HashSet;

use crate::config::SchemaDefinition;
use crate::dataset::Dataset;

/// Outcome of comparing the loaded column names against the expected ones
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemaCheck {
    pub is_valid: bool,
    /// Expected but absent, in expected order
    pub missing_columns: Vec<String>,
    /// Present but not expected, in sheet order. Informational only.
    pub extra_columns: Vec<String>,
}

/// Compare the dataset's columns with the expected set
///
/// An empty schema accepts any layout.
pub fn validate_columns(dataset: &Dataset, schema: &SchemaDefinition) -> SchemaCheck {
    if schema.is_empty() {
        return SchemaCheck {
            is_valid: true,
            ..SchemaCheck::default()
        };
    }

    let actual_columns = dataset.column_names();
    let actual_set: HashSet<&str> = actual_columns.iter().map(String::as_str).collect();
    let expected_set: HashSet<&str> = schema.columns().iter().map(String::as_str).collect();

    let mut seen = HashSet::new();
    let missing_columns: Vec<String> = schema
        .columns()
        .iter()
        .filter(|name| !actual_set.contains(name.as_str()) && seen.insert(name.as_str()))
        .cloned()
        .collect();

    let extra_columns: Vec<String> = actual_columns
        .iter()
        .filter(|name| !expected_set.contains(name.as_str()))
        .cloned()
        .collect();

    SchemaCheck {
        is_valid: missing_columns.is_empty(),
        missing_columns,
        extra_columns,
    }
}
