//! Utility functions for CLI operations.

use crate::error::CliError;
use composegen::{WizardConfig, WizardConfigBuilder};

/// Global CLI options.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Build the session configuration for the current process.
pub fn load_configuration(_global: &GlobalOptions) -> Result<WizardConfig, CliError> {
    WizardConfigBuilder::new()
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}
