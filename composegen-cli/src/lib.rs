//! Library exports for composegen-cli.
//!
//! Exposes the argument parser and the wizard entry point for tests and
//! documentation tooling.

pub mod cli;
pub mod error;
pub mod utils;
pub mod wizard;

pub use cli::Cli;
