pub mod shell;

pub use checker_lib::ERRORS_LOG_FILE;
