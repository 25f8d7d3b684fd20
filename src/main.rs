// reset; cargo run -- --excel-file ./data/Optix_input_template.xlsx --config ./config/optix_template.json
// reset; cargo run -- --config ./config/optix_template.json

use anyhow::Context;
use checker_lib::ValidationConfig;
use clap::Parser;
use sheet_checker::shell::{check_file, interactive};
use std::io::Write;

#[derive(Parser)]
#[command(name = "sheet-checker")]
#[command(about = "A tool to validate spreadsheet files against an expected column layout")]
#[command(version)]
struct Args {
    /// Path to the spreadsheet to validate. If not specified, paths are asked for interactively.
    #[arg(short, long)]
    excel_file: Option<String>,

    /// JSON file with the expected columns and the per-column validation rules.
    /// Without it every readable file passes.
    #[arg(short, long)]
    config: Option<String>,

    /// Number of rows shown in the data summary
    #[arg(long)]
    preview_rows: Option<usize>,

    /// Check data types even when expected columns are missing
    #[arg(long)]
    validate_types_on_schema_failure: bool,

    /// File where reports of failed validations are appended
    #[arg(long)]
    error_log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let arguments = Args::parse();

    let config = {
        let mut _config = match &arguments.config {
            Some(path) => ValidationConfig::from_file(path)
                .with_context(|| format!("Failed to load configuration from {path}"))?,
            None => ValidationConfig::default(),
        };
        if let Some(rows) = arguments.preview_rows {
            _config.preview_rows = rows;
        }
        if arguments.validate_types_on_schema_failure {
            _config.validate_types_on_schema_failure = true;
        }
        if let Some(error_log) = arguments.error_log {
            _config.error_log_file = Some(error_log);
        }
        _config
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match arguments.excel_file {
        Some(excel_file) => {
            if !check_file(&excel_file, &config, &mut out)? {
                out.flush()?;
                std::process::exit(1);
            }
        }
        None => interactive(&config, &mut std::io::stdin().lock(), &mut out)?,
    }

    Ok(())
}
