//! One complete wizard run: collect, preview, confirm, render, write.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::collector::Collector;
use crate::config::WizardConfig;
use crate::emit::{render, resolve_output_path, write_document};
use crate::error::Result;
use crate::logging::Logger;
use crate::preview;
use crate::prompt::Prompter;

/// How a session ended without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The document was written to this path.
    Saved(PathBuf),
    /// The user declined to save or to overwrite; nothing was written.
    Cancelled,
}

/// Drives a wizard session over a [`Prompter`].
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use composegen::{Logger, Prompter, Session, SessionOutcome, WizardConfigBuilder};
///
/// let script = "\nweb\n1\nnginx\n\n\n\nn\nn\nn\n\n\nn\nn\nn\n";
/// let config = WizardConfigBuilder::new().build().unwrap();
/// let mut session = Session::new(
///     Prompter::new(Cursor::new(script), Vec::new()),
///     &config,
///     Logger::default(),
/// );
///
/// assert_eq!(session.run().unwrap(), SessionOutcome::Cancelled);
/// ```
pub struct Session<'a, R, W> {
    prompter: Prompter<R, W>,
    config: &'a WizardConfig,
    logger: Logger,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Creates a session.
    pub fn new(prompter: Prompter<R, W>, config: &'a WizardConfig, logger: Logger) -> Self {
        Self {
            prompter,
            config,
            logger,
        }
    }

    /// Consumes the session, returning the output stream.
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Runs the session to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends early, the terminal fails, the document
    /// cannot be rendered, or the file cannot be written. Nothing is written
    /// when rendering fails.
    pub fn run(&mut self) -> Result<SessionOutcome> {
        self.prompter.say("Interactive Docker Compose generator")?;

        let document = Collector::new(&mut self.prompter, self.logger)
            .collect_document(&self.config.default_version)?;

        self.prompter.say("")?;
        self.prompter.say(&preview::summary(&document))?;
        self.prompter.say("")?;

        if !self.prompter.confirm("Continue and save the file?")? {
            self.prompter.say("Operation cancelled by user.")?;
            return Ok(SessionOutcome::Cancelled);
        }

        let file_name = self
            .prompter
            .required_text("Output file name (e.g. docker-compose.yml):")?;
        let path = resolve_output_path(&file_name, &self.config.working_dir);
        self.logger.info(&format!("output path: {}", path.display()));

        if path.exists()
            && !self.prompter.confirm(&format!(
                "File '{}' already exists. Overwrite it?",
                path.display()
            ))?
        {
            self.prompter
                .say("Operation cancelled. The existing file was not overwritten.")?;
            return Ok(SessionOutcome::Cancelled);
        }

        let yaml = render(&document)?;
        write_document(&path, &yaml)?;

        self.prompter
            .say(&format!("File saved successfully to: {}", path.display()))?;
        Ok(SessionOutcome::Saved(path))
    }
}
