//! Common test utilities for CLI integration tests.
//!
//! This module provides:
//! - An isolated working directory per test
//! - A command builder that runs `composegen` inside it
//! - Helpers that produce the stdin a user would type

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated working directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command running the binary with the temp dir as working directory.
    ///
    /// `COMPOSEGEN_LOG_MODE` is cleared so the caller's environment cannot
    /// change stderr expectations.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("composegen").expect("Failed to find composegen binary");
        cmd.current_dir(&self.temp_path)
            .env_remove("COMPOSEGEN_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Number of entries in the working directory.
    pub fn entry_count(&self) -> usize {
        std::fs::read_dir(&self.temp_path)
            .expect("Failed to read temp dir")
            .count()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Answers for one image-based service that declines every optional step.
///
/// `ports` are `(host, container)` pairs; `networks` is the raw
/// comma-separated answer.
#[allow(dead_code)]
pub fn image_service(name: &str, image: &str, ports: &[(&str, &str)], networks: &str) -> String {
    let mut lines = vec![name.to_string(), "1".to_string(), image.to_string()];
    // container name, command, restart policy
    lines.extend([String::new(), String::new(), String::new()]);

    if ports.is_empty() {
        lines.push("n".to_string());
    } else {
        lines.push("y".to_string());
        for (host, container) in ports {
            lines.push((*host).to_string());
            lines.push((*container).to_string());
        }
        lines.push(String::new());
    }

    // environment, volumes
    lines.extend(["n".to_string(), "n".to_string()]);
    // depends_on, networks
    lines.push(String::new());
    lines.push(networks.to_string());
    // resource limits
    lines.push("n".to_string());

    lines.join("\n") + "\n"
}

/// Stdin for a full session: default version, the given services, then the
/// trailing answers (save confirmation, file name, overwrite...).
#[allow(dead_code)]
pub fn session_input(services: &[String], trailing: &[&str]) -> String {
    let mut script = String::from("\n");
    for (i, service) in services.iter().enumerate() {
        if i > 0 {
            script.push_str("y\n");
        }
        script.push_str(service);
    }
    script.push_str("n\n");
    for answer in trailing {
        script.push_str(answer);
        script.push('\n');
    }
    script
}
