use std::path::Path;

use crate::config::ValidationConfig;
use crate::dataset::Dataset;
use crate::error::LoadError;
use crate::loader::load_dataset;
use crate::report::ValidationReport;
use crate::schema_validator::validate_columns;
use crate::type_validator::validate_data_types;

/// Where a pass stands. `Done` and `Error` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    Loaded,
    SchemaChecked,
    TypeChecked,
    Done,
    Error,
}

impl Stage {
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Done | Stage::Error)
    }
}

/// Everything one read-validate-report pass produced
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationPass {
    pub file_path: String,
    pub stage: Stage,
    pub dataset: Option<Dataset>,
    pub load_error: Option<LoadError>,
    pub report: ValidationReport,
}

impl ValidationPass {
    pub fn is_success(&self) -> bool {
        self.stage == Stage::Done
    }
}

/// Load a file and validate it. Always returns a pass, failures included.
pub fn run(path: impl AsRef<Path>, config: &ValidationConfig) -> ValidationPass {
    let path = path.as_ref();
    let file_path = path.display().to_string();

    match load_dataset(path) {
        Ok(dataset) => {
            let (stage, report) = validate_dataset(&dataset, config);
            ValidationPass {
                file_path,
                stage,
                dataset: Some(dataset),
                load_error: None,
                report,
            }
        }
        Err(error) => ValidationPass {
            file_path,
            stage: Stage::Error,
            dataset: None,
            load_error: Some(error),
            report: ValidationReport::default(),
        },
    }
}

/// Run the schema and type stages over an already loaded dataset
///
/// Type validation is skipped once columns are missing, unless the
/// configuration asks for it to run regardless.
pub fn validate_dataset(dataset: &Dataset, config: &ValidationConfig) -> (Stage, ValidationReport) {
    let mut stage = Stage::Start;
    let mut report = ValidationReport::default();

    while !stage.is_terminal() {
        stage = advance(stage, dataset, config, &mut report);
    }

    (stage, report)
}

/// One transition of the stage machine. Terminal stages map to themselves.
fn advance(
    stage: Stage,
    dataset: &Dataset,
    config: &ValidationConfig,
    report: &mut ValidationReport,
) -> Stage {
    match stage {
        // The dataset is handed in already read
        Stage::Start => Stage::Loaded,
        Stage::Loaded => {
            let schema_check = validate_columns(dataset, &config.expected_columns);
            report.schema_valid = schema_check.is_valid;
            report.missing_columns = schema_check.missing_columns;
            report.extra_columns = schema_check.extra_columns;

            if report.schema_valid || config.validate_types_on_schema_failure {
                Stage::SchemaChecked
            } else {
                Stage::Error
            }
        }
        Stage::SchemaChecked => {
            let type_check = validate_data_types(dataset, &config.column_validations);
            report.type_valid = Some(type_check.is_valid);
            report.column_errors = type_check.errors;
            Stage::TypeChecked
        }
        Stage::TypeChecked => {
            if report.is_valid() {
                Stage::Done
            } else {
                Stage::Error
            }
        }
        Stage::Done | Stage::Error => stage,
    }
}
