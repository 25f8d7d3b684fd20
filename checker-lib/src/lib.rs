#![allow(clippy::needless_return)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod schema_validator;
pub mod type_validator;
pub mod utils;

// Test utilities - only compiled when testing or with test feature
// #[cfg(test)] alone doesn't work for integration tests (they're external crates)
// The feature flag makes it available to integration tests via dev-dependencies
#[cfg(any(test, feature = "test"))]
pub mod test_utils;

pub use config::{ColumnRule, ColumnRules, ColumnType, SchemaDefinition, ValidationConfig};
pub use dataset::{CellValue, Column, Dataset};
pub use error::{ConfigError, DatasetError, LoadError, TypeProblem, ValidationError};
pub use loader::load_dataset;
pub use pipeline::{Stage, ValidationPass, run, validate_dataset};
pub use report::{DataSummary, ValidationReport, render_error_log_entry, render_pass};
pub use schema_validator::{SchemaCheck, validate_columns};
pub use type_validator::{TypeCheck, validate_data_types};

pub const ERRORS_LOG_FILE: &str = "errors.log";
