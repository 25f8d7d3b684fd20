//! Thin caller around the validation core: one pass per file, either from a
//! command line argument or from paths typed at a prompt.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use checker_lib::utils::{strip_wrapping_quotes, write_error_to_log};
use checker_lib::{render_error_log_entry, render_pass, run, ValidationConfig};

use crate::ERRORS_LOG_FILE;

const BANNER_WIDTH: usize = 60;

pub fn error_log_path(config: &ValidationConfig) -> PathBuf {
    PathBuf::from(config.error_log_file.as_deref().unwrap_or(ERRORS_LOG_FILE))
}

/// Validate one file and print its report. Failed passes are appended to the error log.
///
/// Returns whether the pass succeeded.
pub fn check_file<W: Write>(path: &str, config: &ValidationConfig, out: &mut W) -> io::Result<bool> {
    let pass = run(path, config);
    write!(out, "{}", render_pass(&pass, config))?;

    if pass.is_success() {
        writeln!(out, "\n✅ Data is ready for processing!")?;
        return Ok(true);
    }

    let log_path = error_log_path(config);
    match write_error_to_log(
        &log_path,
        "Spreadsheet Validation Error Report",
        &render_error_log_entry(&pass),
    ) {
        Ok(()) => writeln!(out, "❌ Check {} for details.", log_path.display())?,
        Err(e) => writeln!(
            out,
            "❌ Failed to write the error log {}: {}",
            log_path.display(),
            e
        )?,
    }
    Ok(false)
}

/// Prompt for paths until the user quits or input ends
pub fn interactive<R: BufRead, W: Write>(
    config: &ValidationConfig,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;
    writeln!(out, "          SHEET CHECKER - Data Validation Tool")?;
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;

    let expected_columns = config.expected_columns.columns();
    if !expected_columns.is_empty() {
        writeln!(out, "\nExpected spreadsheet format:")?;
        writeln!(out, "  Required columns: {}", expected_columns.join(", "))?;
    }

    loop {
        let Some(answer) = prompt(
            input,
            out,
            "\nEnter the path to your spreadsheet (or 'q' to quit): ",
        )?
        else {
            writeln!(out, "\nInput stream closed. Exiting...")?;
            return Ok(());
        };

        let path = strip_wrapping_quotes(&answer);
        if path.is_empty() {
            writeln!(out, "No file entered.")?;
            continue;
        }
        if matches!(path.to_lowercase().as_str(), "q" | "quit" | "exit") {
            break;
        }

        writeln!(out)?;
        let passed = check_file(path, config, out)?;

        let question = if passed {
            "\nProcess another file? (y/n): "
        } else {
            "\nPlease correct the errors and try again.\nTry again? (y/n): "
        };
        match prompt(input, out, question)? {
            Some(again) if again.trim().eq_ignore_ascii_case("y") => continue,
            Some(_) => break,
            None => {
                writeln!(out, "\nInput stream closed. Exiting...")?;
                return Ok(());
            }
        }
    }

    writeln!(out, "\nThank you for using Sheet Checker. Goodbye!")?;
    Ok(())
}

/// Print `question` and read one line. `None` once input is exhausted.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> io::Result<Option<String>> {
    write!(out, "{}", question)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
