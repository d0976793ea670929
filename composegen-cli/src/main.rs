//! Main entry point for the composegen CLI.
//!
//! Runs the interactive compose-file wizard on the current terminal and
//! maps the result to a process exit code.

mod cli;
mod error;
mod utils;
mod wizard;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    match wizard::execute(&global) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
