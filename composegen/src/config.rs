//! Session configuration.
//!
//! The wizard takes no configuration from flags or the environment; these
//! settings exist for embedding the session and for tests.

use std::env;
use std::path::{Path, PathBuf};

use crate::descriptor::DEFAULT_VERSION;
use crate::error::Result;

/// Settings for one wizard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardConfig {
    /// Version written when the user leaves the version prompt blank.
    pub default_version: String,

    /// Directory bare output file names are resolved against.
    pub working_dir: PathBuf,
}

/// Builds a [`WizardConfig`], filling unset values with defaults.
///
/// # Examples
///
/// ```
/// use composegen::WizardConfigBuilder;
/// use std::path::Path;
///
/// let config = WizardConfigBuilder::new()
///     .with_working_dir(Path::new("/srv/app"))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.default_version, "3.8");
/// assert_eq!(config.working_dir, Path::new("/srv/app"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WizardConfigBuilder {
    default_version: Option<String>,
    working_dir: Option<PathBuf>,
}

impl WizardConfigBuilder {
    /// Creates a builder with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the fallback compose version.
    #[must_use]
    pub fn with_default_version(mut self, version: impl Into<String>) -> Self {
        self.default_version = Some(version.into());
        self
    }

    /// Overrides the directory used to resolve bare file names.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no working directory was given and the process
    /// working directory cannot be determined.
    pub fn build(self) -> Result<WizardConfig> {
        let working_dir = match self.working_dir {
            Some(dir) => dir,
            None => env::current_dir()?,
        };

        Ok(WizardConfig {
            default_version: self
                .default_version
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            working_dir,
        })
    }
}
