//! Interactive collection of services and the surrounding document.
//!
//! The collector walks the user through a fixed sequence of prompts per
//! service. Every answer is validated inline by the [`Prompter`]; the only
//! cross-prompt retry is the port-mapping loop, where a missing container
//! port sends the user back to the host port.

use std::io::{BufRead, Write};

use crate::descriptor::{
    BuildDescriptor, DocumentDescriptor, PortMapping, ResourceLimits, ServiceDescriptor,
    ServiceSource,
};
use crate::error::Result;
use crate::input::{parse_method, SourceMethod};
use crate::logging::Logger;
use crate::prompt::Prompter;

/// Builds a [`DocumentDescriptor`] from answers read through a [`Prompter`].
pub struct Collector<'a, R, W> {
    prompter: &'a mut Prompter<R, W>,
    logger: Logger,
}

impl<'a, R: BufRead, W: Write> Collector<'a, R, W> {
    /// Creates a collector that prompts through `prompter`.
    pub fn new(prompter: &'a mut Prompter<R, W>, logger: Logger) -> Self {
        Self { prompter, logger }
    }

    /// Collects the version and at least one service.
    ///
    /// A blank version answer falls back to `default_version`. Services are
    /// collected until the user declines to add another. Reusing a service
    /// name replaces the earlier definition.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends early or the terminal fails.
    pub fn collect_document(&mut self, default_version: &str) -> Result<DocumentDescriptor> {
        let version = self
            .prompter
            .optional_text(&format!(
                "Compose file version (default {default_version}):"
            ))?
            .unwrap_or_else(|| default_version.to_string());

        let mut document = DocumentDescriptor::new(version);
        loop {
            let service = self.collect_service()?;
            let name = service.name().to_string();
            if document.insert_service(service).is_some() {
                self.logger.warn(&format!(
                    "service '{name}' was already defined; keeping the newer definition"
                ));
            }

            if !self.prompter.confirm("Add another service?")? {
                break;
            }
        }

        Ok(document)
    }

    /// Collects one service definition.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends early or the terminal fails.
    pub fn collect_service(&mut self) -> Result<ServiceDescriptor> {
        self.prompter.say("")?;
        self.prompter.say("New service")?;

        let name = self.prompter.required_text("Service name:")?;
        let source = self.collect_source()?;
        let mut service = ServiceDescriptor::new(name, source)?;

        service.container_name = self.prompter.optional_text("Container name (optional):")?;
        service.command = self.prompter.optional_text("Command to run (optional):")?;
        service.restart = self
            .prompter
            .optional_text("Restart policy, e.g. always or unless-stopped (optional):")?;

        if self.prompter.confirm("Map ports?")? {
            service.ports = self.collect_ports()?;
        }

        if self.prompter.confirm("Add environment variables?")? {
            service.environment = self.prompter.key_value_pairs(
                "Enter environment variables as KEY=VALUE. Leave blank to finish.",
            )?;
        }

        if self.prompter.confirm("Map volumes?")? {
            service.volumes = self.prompter.path_pairs(
                "Enter volume mappings as /host/path:/container/path. Leave blank to finish.",
            )?;
        }

        service.depends_on = self
            .prompter
            .list("Services this one depends on (comma separated, blank for none):")?;
        let networks = self
            .prompter
            .list("Networks to join (comma separated, blank for none):")?;
        service.set_networks(networks);

        if self.prompter.confirm("Set resource limits for this service?")? {
            service.limits = self.collect_limits()?;
        }

        Ok(service)
    }

    /// Shows the image/build menu until the user picks exactly `1` or `2`.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends early or the terminal fails.
    pub fn select_method(&mut self) -> Result<SourceMethod> {
        loop {
            self.prompter.say("How should this service get its image?")?;
            self.prompter.say("  1. Use a Docker image")?;
            self.prompter.say("  2. Specify a build context")?;

            let choice = self.prompter.optional_text("Enter 1 or 2:")?;
            if let Some(method) = choice.as_deref().and_then(parse_method) {
                return Ok(method);
            }
        }
    }

    fn collect_source(&mut self) -> Result<ServiceSource> {
        match self.select_method()? {
            SourceMethod::Image => {
                let image = self.prompter.required_text("Docker image name:")?;
                Ok(ServiceSource::Image(image))
            }
            SourceMethod::Build => {
                let context = self.prompter.required_text("Build context directory:")?;
                let dockerfile = self
                    .prompter
                    .optional_text("Dockerfile name (blank for 'Dockerfile'):")?;
                Ok(ServiceSource::Build(BuildDescriptor {
                    context,
                    dockerfile,
                }))
            }
        }
    }

    /// Reads host/container port pairs until the host port is left blank.
    ///
    /// A blank container port discards the half-entered pair and starts the
    /// iteration again at the host port.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends early or the terminal fails.
    pub fn collect_ports(&mut self) -> Result<Vec<PortMapping>> {
        let mut ports = Vec::new();
        loop {
            let Some(host) = self.prompter.port("Host port (blank to finish):")? else {
                return Ok(ports);
            };

            let Some(container) = self.prompter.port("Container port:")? else {
                self.prompter
                    .complain("a container port is required when a host port is given")?;
                continue;
            };

            ports.push(PortMapping::new(host, container)?);
        }
    }

    fn collect_limits(&mut self) -> Result<Option<ResourceLimits>> {
        let cpus = self
            .prompter
            .optional_text("Maximum CPUs, e.g. 0.5 (blank to skip):")?;
        let memory = self
            .prompter
            .optional_text("Maximum memory, e.g. 512M or 1G (blank to skip):")?;
        Ok(ResourceLimits::new(cpus, memory))
    }
}
