//! CLI error types for structured error handling.
//!
//! Core failures arrive as [`ErrorReport`]; everything else (config, IO,
//! serialization) is plain `anyhow` and exits with the generic code.

use std::fmt;

use bookstock_core::{ErrorKind, ErrorReport};

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// A rejected inventory operation.
    Inventory(ErrorReport),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Inventory(report) => write!(f, "{}", report.message),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ErrorReport> for CliError {
    fn from(report: ErrorReport) -> Self {
        CliError::Inventory(report)
    }
}

impl CliError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Inventory(report) => kind_exit_code(report.kind),
        }
    }

    /// Optional follow-up suggestion shown under the message.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::Inventory(report) => match report.kind {
                ErrorKind::NotFound => Some("bookstock list"),
                ErrorKind::DuplicateKey => Some("Pick an unused ID or update the existing book"),
                ErrorKind::Storage => Some("Check --store or store.path in the config file"),
                ErrorKind::Validation => None,
            },
        }
    }
}

/// Map a core error kind to its exit code.
pub fn kind_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Validation => exit_codes::INVALID_INPUT,
        ErrorKind::DuplicateKey => exit_codes::DUPLICATE,
        ErrorKind::NotFound => exit_codes::NOT_FOUND,
        ErrorKind::Storage => exit_codes::STORAGE_FAILED,
    }
}

/// Resolve the exit code for any error returned by a command handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    if let Some(report) = err.downcast_ref::<ErrorReport>() {
        return kind_exit_code(report.kind);
    }
    exit_codes::FAILURE
}

/// Hint for an error returned by a command handler, if any.
pub fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    err.downcast_ref::<CliError>().and_then(CliError::hint)
}
