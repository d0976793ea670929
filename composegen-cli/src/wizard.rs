//! The interactive wizard, wired to the process terminal.

use std::io;

use composegen::{init_logger, Prompter, Session, SessionOutcome};

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};

/// Run one wizard session on stdin/stdout.
///
/// Cancellation is a successful outcome; only failures become errors.
pub fn execute(global: &GlobalOptions) -> Result<SessionOutcome, CliError> {
    let logger = init_logger(global.verbose, global.quiet);
    let config = load_configuration(global)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let prompter = Prompter::new(stdin.lock(), stdout.lock());

    let outcome = Session::new(prompter, &config, logger).run()?;
    if let SessionOutcome::Saved(path) = &outcome {
        logger.info(&format!("session finished, wrote {}", path.display()));
    } else {
        logger.info("session finished without writing");
    }

    Ok(outcome)
}
