//! Build script for composegen-cli.
//!
//! This script generates a man page at build time using clap_mangen and
//! places it in OUT_DIR for inclusion in release builds.
//!
//! Note: build scripts cannot depend on the crate being built, so the
//! command structure is declared here rather than imported.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("composegen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactively build a Docker Compose file")
        .long_about(
            "Walks through each service's image or build context, ports, environment, \
             volumes, dependencies, networks and resource limits, then writes a compose file",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(clap::ArgAction::SetTrue),
        )
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("composegen.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
}
