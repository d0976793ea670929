//! Human-readable summary shown before the user confirms the save.

use crate::descriptor::{DocumentDescriptor, ServiceDescriptor, ServiceSource};

/// Renders a plain-text summary of `document`.
///
/// Services are listed in insertion order with each present field on its own
/// line; absent fields are left out.
///
/// # Examples
///
/// ```
/// use composegen::{preview, DocumentDescriptor, ServiceDescriptor, ServiceSource};
///
/// let mut doc = DocumentDescriptor::new("3.8");
/// doc.insert_service(ServiceDescriptor::new("web", ServiceSource::Image("nginx".into())).unwrap());
///
/// let summary = preview::summary(&doc);
/// assert!(summary.contains("Service: web"));
/// assert!(summary.contains("  image: nginx"));
/// ```
#[must_use]
pub fn summary(document: &DocumentDescriptor) -> String {
    let mut lines = vec![
        "Compose summary".to_string(),
        format!("Version: {}", document.version()),
    ];

    for (name, service) in document.services() {
        lines.push(format!("Service: {name}"));
        lines.extend(service_lines(service).into_iter().map(|l| format!("  {l}")));
    }

    let networks: Vec<&str> = document.network_names().collect();
    if !networks.is_empty() {
        lines.push(format!("Networks: {}", networks.join(", ")));
    }

    lines.join("\n")
}

fn service_lines(service: &ServiceDescriptor) -> Vec<String> {
    let mut lines = Vec::new();

    match &service.source {
        ServiceSource::Image(image) => lines.push(format!("image: {image}")),
        ServiceSource::Build(build) => match &build.dockerfile {
            Some(dockerfile) => lines.push(format!(
                "build: context={}, dockerfile={dockerfile}",
                build.context
            )),
            None => lines.push(format!("build: context={}", build.context)),
        },
    }

    let optional = [
        ("container_name", &service.container_name),
        ("command", &service.command),
        ("restart", &service.restart),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            lines.push(format!("{label}: {value}"));
        }
    }

    if !service.ports.is_empty() {
        let ports: Vec<String> = service.ports.iter().map(ToString::to_string).collect();
        lines.push(format!("ports: {}", ports.join(", ")));
    }
    if !service.environment.is_empty() {
        let env: Vec<String> = service
            .environment
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        lines.push(format!("environment: {}", env.join(", ")));
    }
    if !service.volumes.is_empty() {
        lines.push(format!("volumes: {}", service.volumes.join(", ")));
    }
    if !service.depends_on.is_empty() {
        lines.push(format!("depends_on: {}", service.depends_on.join(", ")));
    }
    if !service.networks().is_empty() {
        lines.push(format!("networks: {}", service.networks().join(", ")));
    }
    if let Some(limits) = &service.limits {
        let mut parts = Vec::new();
        if let Some(cpus) = &limits.cpus {
            parts.push(format!("cpus={cpus}"));
        }
        if let Some(memory) = &limits.memory {
            parts.push(format!("memory={memory}"));
        }
        lines.push(format!("limits: {}", parts.join(", ")));
    }

    lines
}
