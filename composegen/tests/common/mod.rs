//! Common test utilities for integration tests.
//!
//! Scripts are built as the exact sequence of lines a user would type, so
//! tests read like the session they drive.

use std::io::Cursor;
use std::path::Path;

use composegen::{Logger, LogLevel, Prompter, Result, Session, SessionOutcome, WizardConfigBuilder};

/// Answers for one service, in prompt order.
#[derive(Debug, Clone)]
pub struct ServiceScript {
    name: String,
    source: Vec<String>,
    restart: String,
    ports: Vec<(String, String)>,
    environment: Vec<String>,
    volumes: Vec<String>,
    depends_on: String,
    networks: String,
    limits: Option<(String, String)>,
}

#[allow(dead_code)]
impl ServiceScript {
    /// A service using a prebuilt image, declining every optional step.
    pub fn image(name: &str, image: &str) -> Self {
        Self::with_source(name, vec!["1".to_string(), image.to_string()])
    }

    /// A service built from `context`; pass `""` for the default Dockerfile.
    pub fn build(name: &str, context: &str, dockerfile: &str) -> Self {
        Self::with_source(
            name,
            vec!["2".to_string(), context.to_string(), dockerfile.to_string()],
        )
    }

    fn with_source(name: &str, source: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            source,
            restart: String::new(),
            ports: Vec::new(),
            environment: Vec::new(),
            volumes: Vec::new(),
            depends_on: String::new(),
            networks: String::new(),
            limits: None,
        }
    }

    pub fn restart(mut self, policy: &str) -> Self {
        self.restart = policy.to_string();
        self
    }

    pub fn port(mut self, host: &str, container: &str) -> Self {
        self.ports.push((host.to_string(), container.to_string()));
        self
    }

    pub fn env(mut self, line: &str) -> Self {
        self.environment.push(line.to_string());
        self
    }

    pub fn volume(mut self, line: &str) -> Self {
        self.volumes.push(line.to_string());
        self
    }

    pub fn depends_on(mut self, answer: &str) -> Self {
        self.depends_on = answer.to_string();
        self
    }

    pub fn networks(mut self, answer: &str) -> Self {
        self.networks = answer.to_string();
        self
    }

    pub fn limits(mut self, cpus: &str, memory: &str) -> Self {
        self.limits = Some((cpus.to_string(), memory.to_string()));
        self
    }

    /// The typed lines for this service.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.name.clone()];
        lines.extend(self.source.iter().cloned());
        // container name, command
        lines.extend([String::new(), String::new()]);
        lines.push(self.restart.clone());

        push_gated_loop(
            &mut lines,
            self.ports
                .iter()
                .flat_map(|(h, c)| [h.clone(), c.clone()])
                .collect(),
        );
        push_gated_loop(&mut lines, self.environment.clone());
        push_gated_loop(&mut lines, self.volumes.clone());

        lines.push(self.depends_on.clone());
        lines.push(self.networks.clone());

        match &self.limits {
            Some((cpus, memory)) => lines.extend(["y".to_string(), cpus.clone(), memory.clone()]),
            None => lines.push("n".to_string()),
        }
        lines
    }
}

fn push_gated_loop(lines: &mut Vec<String>, entries: Vec<String>) {
    if entries.is_empty() {
        lines.push("n".to_string());
    } else {
        lines.push("y".to_string());
        lines.extend(entries);
        lines.push(String::new());
    }
}

/// Answers for a whole session.
#[derive(Debug, Clone)]
pub struct SessionScript {
    version: String,
    services: Vec<ServiceScript>,
    save_as: Option<String>,
    overwrite: Option<bool>,
}

#[allow(dead_code)]
impl SessionScript {
    /// A session with the default version that declines to save.
    pub fn new(services: Vec<ServiceScript>) -> Self {
        Self {
            version: String::new(),
            services,
            save_as: None,
            overwrite: None,
        }
    }

    pub fn version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    /// Confirms the save and answers the file name prompt.
    pub fn save_as(mut self, file_name: &str) -> Self {
        self.save_as = Some(file_name.to_string());
        self
    }

    /// Answers the overwrite question.
    pub fn overwrite(mut self, answer: bool) -> Self {
        self.overwrite = Some(answer);
        self
    }

    /// The full stdin transcript.
    pub fn render(&self) -> String {
        let mut lines = vec![self.version.clone()];
        for (i, service) in self.services.iter().enumerate() {
            if i > 0 {
                lines.push("y".to_string());
            }
            lines.extend(service.lines());
        }
        lines.push("n".to_string());

        match &self.save_as {
            Some(file_name) => {
                lines.push("y".to_string());
                lines.push(file_name.clone());
            }
            None => lines.push("n".to_string()),
        }
        if let Some(overwrite) = self.overwrite {
            lines.push(if overwrite { "y" } else { "n" }.to_string());
        }

        let mut script = lines.join("\n");
        script.push('\n');
        script
    }
}

/// Runs a session in `working_dir`, returning its outcome and transcript.
#[allow(dead_code)]
pub fn run_session(script: &str, working_dir: &Path) -> (Result<SessionOutcome>, String) {
    let config = WizardConfigBuilder::new()
        .with_working_dir(working_dir)
        .build()
        .expect("config");

    let prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let mut session = Session::new(prompter, &config, Logger::new(LogLevel::Quiet));
    let outcome = session.run();
    let transcript = String::from_utf8(session.into_output()).expect("utf-8 transcript");
    (outcome, transcript)
}
