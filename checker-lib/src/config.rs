use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::path::Path;

use crate::error::ConfigError;

pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Declared type of a column's values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    String,
    Numeric,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRule {
    #[serde(rename = "type", default)]
    pub column_type: ColumnType,
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

impl ColumnRule {
    pub fn new(column_type: ColumnType, required: bool) -> Self {
        ColumnRule {
            column_type,
            required,
        }
    }
}

/// The column names a valid file must contain. Empty accepts anything.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaDefinition(Vec<String>);

impl SchemaDefinition {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SchemaDefinition(columns.into_iter().map(Into::into).collect())
    }

    pub fn columns(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub type ColumnRules = HashMap<String, ColumnRule>;

/// Everything a validation pass needs to know besides the file itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub expected_columns: SchemaDefinition,
    pub column_validations: ColumnRules,
    /// Keep checking types after columns are found missing
    pub validate_types_on_schema_failure: bool,
    pub preview_rows: usize,
    pub error_log_file: Option<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        ValidationConfig {
            expected_columns: SchemaDefinition::default(),
            column_validations: ColumnRules::new(),
            validate_types_on_schema_failure: false,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            error_log_file: None,
        }
    }
}

impl ValidationConfig {
    pub fn new(expected_columns: SchemaDefinition, column_validations: ColumnRules) -> Self {
        ValidationConfig {
            expected_columns,
            column_validations,
            ..ValidationConfig::default()
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Parse a JSON configuration document, checking its layout first so that
    /// every mistake is reported at once with its location
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let document: Value = serde_json::from_str(content)?;

        let layout = config_layout_schema();
        let validator = jsonschema::validator_for(&layout)
            .map_err(|e| ConfigError::Layout(vec![format!("Invalid layout schema: {}", e)]))?;

        let problems: Vec<String> = validator
            .iter_errors(&document)
            .map(|error| {
                let path = error.instance_path.to_string();
                if path.is_empty() {
                    format!("  - {}", error)
                } else {
                    format!("  - at {}: {}", path, error)
                }
            })
            .collect();
        if !problems.is_empty() {
            return Err(ConfigError::Layout(problems));
        }

        Ok(serde_json::from_value(document)?)
    }
}

/// JSON Schema every configuration document must satisfy
fn config_layout_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "expected_columns": {
                "type": "array",
                "items": { "type": "string" }
            },
            "column_validations": {
                "type": "object",
                "additionalProperties": {
                    "type": "object",
                    "properties": {
                        "type": { "enum": ["string", "numeric", "date"] },
                        "required": { "type": "boolean" }
                    },
                    "additionalProperties": false
                }
            },
            "validate_types_on_schema_failure": { "type": "boolean" },
            "preview_rows": { "type": "integer", "minimum": 0 },
            "error_log_file": { "type": ["string", "null"] }
        },
        "additionalProperties": false
    })
}
