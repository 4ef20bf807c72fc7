//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer, wrapping
//! library errors and providing appropriate exit codes.

use std::fmt;

use fspath::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error outside the library (e.g. writing output).
    Io(std::io::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Generic library failure
    /// - 2: Path not found
    /// - 3: Permission denied
    /// - 4: Target already exists
    /// - 5: Invalid arguments or option combination
    /// - 6: I/O error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => match lib_err {
                LibError::NotFound { .. } => 2,
                LibError::PermissionDenied { .. } => 3,
                LibError::AlreadyExists { .. } => 4,
                LibError::InvalidArgument { .. } => 5,
                _ => 1,
            },
            CliError::InvalidArguments(_) => 5,
            CliError::Io(_) => 6,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<LibError> for CliError {
    fn from(err: LibError) -> Self {
        CliError::Library(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err)
    }
}
