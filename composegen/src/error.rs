//! Error types for the composegen library.
//!
//! This module provides the error hierarchy for the wizard, using `thiserror`
//! for ergonomic error handling. Input-validation failures are recoverable
//! and normally handled inside the prompter by asking again; everything else
//! propagates to the caller.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a composegen error.
///
/// # Examples
///
/// ```
/// use composegen::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("web".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the composegen library.
#[derive(Debug, Error)]
pub enum Error {
    /// A piece of user input failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The document could not be rendered as YAML.
    #[error("failed to render YAML: {0}")]
    Serialization(#[from] serde_yaml::Error),

    /// The rendered document could not be written to its destination.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// The destination path.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The input stream ended while a prompt was waiting for an answer.
    #[error("input closed before the session finished")]
    InputClosed,

    /// Reading from or writing to the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for building a [`Error::Validation`].
    ///
    /// # Examples
    ///
    /// ```
    /// use composegen::Error;
    ///
    /// let err = Error::validation("port", "must be numeric");
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if error is a recoverable input-validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
