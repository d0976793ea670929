//! CLI-specific error types with exit codes.
//!
//! This module wraps library errors and maps each to the exit code the
//! process reports.

use composegen::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Startup failure before the session began.
    Config(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success, or the user cancelled (not an error)
    /// - 1: The document could not be rendered
    /// - 2: Usage error (reported by clap)
    /// - 3: Input ended before the session finished
    /// - 4: The file could not be written
    /// - 5: Other terminal I/O error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => match lib_err {
                LibError::Serialization(_) => 1,
                LibError::Write { .. } => 4,
                LibError::InputClosed => 3,
                LibError::Io(_) | LibError::Validation { .. } => 5,
            },
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Config(_) => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}
