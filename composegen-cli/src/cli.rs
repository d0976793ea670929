//! CLI structure.
//!
//! The wizard is fully interactive, so the only options control how much
//! diagnostic output goes to stderr.

use clap::Parser;

/// Interactive generator for multi-service compose files.
#[derive(Parser)]
#[command(name = "composegen")]
#[command(version, about = "Interactively build a Docker Compose file", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,
}
