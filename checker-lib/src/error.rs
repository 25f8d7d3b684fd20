use std::fmt;
use thiserror::Error;

/// Failures of the loader. Any of these ends the pass before validation starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read spreadsheet '{path}': {reason}")]
    UnreadableFormat { path: String, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error("Column '{column}' has {actual} rows, expected {expected}")]
    RaggedColumns {
        column: String,
        expected: usize,
        actual: usize,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration does not match the expected layout:\n{}", .0.join("\n"))]
    Layout(Vec<String>),
}

/// What a single type problem in a column is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeProblem {
    EmptyRequired,
    NonNumeric,
    InvalidDate,
}

impl fmt::Display for TypeProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeProblem::EmptyRequired => write!(f, "empty/null values (required field)"),
            TypeProblem::NonNumeric => write!(f, "non-numeric values"),
            TypeProblem::InvalidDate => write!(f, "invalid date values"),
        }
    }
}

/// Problems collected into a validation report. They are never raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing columns: {}", .missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },

    #[error("Column '{column}' has {count} {problem}")]
    TypeMismatch {
        column: String,
        problem: TypeProblem,
        count: usize,
    },
}
