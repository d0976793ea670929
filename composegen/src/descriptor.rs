//! Typed model of a multi-service compose document.
//!
//! The collector fills these types field by field; the emitter serializes
//! them. Field declaration order is the emission order, and empty optional
//! collections are skipped so they never appear in the output.

use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::input::is_port;

/// Compose file format version used when the user does not supply one.
pub const DEFAULT_VERSION: &str = "3.8";

/// Build configuration for a service built from a local context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildDescriptor {
    /// Build context directory.
    pub context: String,
    /// Dockerfile name, when not the default `Dockerfile`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dockerfile: Option<String>,
}

/// Where a service's container image comes from.
///
/// Exactly one source exists per service, so a service without an image or a
/// build context cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ServiceSource {
    /// A prebuilt image reference such as `nginx:latest`.
    #[serde(rename = "image")]
    Image(String),
    /// A local build context.
    #[serde(rename = "build")]
    Build(BuildDescriptor),
}

/// A `host:container` port mapping with digit-only sides.
///
/// # Examples
///
/// ```
/// use composegen::PortMapping;
///
/// let mapping = PortMapping::new("8080", "80").unwrap();
/// assert_eq!(mapping.to_string(), "8080:80");
///
/// assert!(PortMapping::new("http", "80").is_err());
/// assert!(PortMapping::new("8080", "").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortMapping {
    host: String,
    container: String,
}

impl PortMapping {
    /// Creates a mapping after checking both sides are port numbers.
    ///
    /// # Errors
    ///
    /// Returns a validation error if either side is empty or not all digits.
    pub fn new(host: impl Into<String>, container: impl Into<String>) -> Result<Self> {
        let host = host.into();
        let container = container.into();

        if !is_port(&host) {
            return Err(Error::validation(
                "host port",
                format!("'{host}' is not a port number"),
            ));
        }
        if !is_port(&container) {
            return Err(Error::validation(
                "container port",
                format!("'{container}' is not a port number"),
            ));
        }

        Ok(Self { host, container })
    }

    /// Port on the host side.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port inside the container.
    #[must_use]
    pub fn container(&self) -> &str {
        &self.container
    }
}

impl fmt::Display for PortMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.container)
    }
}

impl Serialize for PortMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// CPU and memory caps for a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLimits {
    /// CPU quota, e.g. `0.5`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpus: Option<String>,
    /// Memory quota, e.g. `512M`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
}

impl ResourceLimits {
    /// Builds limits, returning `None` when neither cap is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use composegen::ResourceLimits;
    ///
    /// assert!(ResourceLimits::new(None, None).is_none());
    /// let limits = ResourceLimits::new(None, Some("512M".to_string())).unwrap();
    /// assert_eq!(limits.memory.as_deref(), Some("512M"));
    /// ```
    #[must_use]
    pub fn new(cpus: Option<String>, memory: Option<String>) -> Option<Self> {
        if cpus.is_none() && memory.is_none() {
            None
        } else {
            Some(Self { cpus, memory })
        }
    }
}

/// Writes limits nested as `deploy.resources.limits`.
fn serialize_deploy<S: Serializer>(
    limits: &Option<ResourceLimits>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    struct Deploy<'a> {
        resources: Resources<'a>,
    }

    #[derive(Serialize)]
    struct Resources<'a> {
        limits: &'a ResourceLimits,
    }

    match limits {
        Some(limits) => Deploy {
            resources: Resources { limits },
        }
        .serialize(serializer),
        None => serializer.serialize_none(),
    }
}

/// One deployable service definition.
///
/// # Examples
///
/// ```
/// use composegen::{ServiceDescriptor, ServiceSource};
///
/// let mut service =
///     ServiceDescriptor::new("web", ServiceSource::Image("nginx:latest".to_string())).unwrap();
/// service.set_networks(["backend", "frontend", "backend"]);
/// assert_eq!(service.networks(), ["backend", "frontend"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDescriptor {
    #[serde(skip)]
    name: String,

    /// Image reference or build context.
    #[serde(flatten)]
    pub source: ServiceSource,

    /// Explicit container name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,

    /// Command overriding the image default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Restart policy such as `always` or `unless-stopped`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart: Option<String>,

    /// Published ports, in entry order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<PortMapping>,

    /// Environment variables, in entry order.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub environment: IndexMap<String, String>,

    /// `host:container` volume mounts, kept verbatim.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,

    /// Services that must start first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    networks: Vec<String>,

    /// Resource caps, emitted under `deploy.resources.limits`.
    #[serde(
        rename = "deploy",
        serialize_with = "serialize_deploy",
        skip_serializing_if = "Option::is_none"
    )]
    pub limits: Option<ResourceLimits>,
}

impl ServiceDescriptor {
    /// Creates a service with only its name and source set.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is empty after trimming.
    pub fn new(name: impl Into<String>, source: ServiceSource) -> Result<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(Error::validation("service name", "must be non-empty"));
        }

        Ok(Self {
            name,
            source,
            container_name: None,
            command: None,
            restart: None,
            ports: Vec::new(),
            environment: IndexMap::new(),
            volumes: Vec::new(),
            depends_on: Vec::new(),
            networks: Vec::new(),
            limits: None,
        })
    }

    /// The service's key in the document.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Networks this service joins, without duplicates.
    #[must_use]
    pub fn networks(&self) -> &[String] {
        &self.networks
    }

    /// Replaces the network list, dropping repeats but keeping first-seen order.
    pub fn set_networks<I, S>(&mut self, networks: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.networks.clear();
        for network in networks {
            let network = network.into();
            if !self.networks.contains(&network) {
                self.networks.push(network);
            }
        }
    }
}

/// Top-level network definition. Always empty; networks use driver defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NetworkDefinition {}

/// The whole compose document.
///
/// # Examples
///
/// ```
/// use composegen::{DocumentDescriptor, ServiceDescriptor, ServiceSource};
///
/// let mut doc = DocumentDescriptor::new("3.8");
/// let mut api = ServiceDescriptor::new("api", ServiceSource::Image("api:1".into())).unwrap();
/// api.set_networks(["backend"]);
/// doc.insert_service(api);
///
/// assert_eq!(doc.network_names().collect::<Vec<_>>(), ["backend"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentDescriptor {
    version: String,
    services: IndexMap<String, ServiceDescriptor>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    networks: IndexMap<String, NetworkDefinition>,
}

impl DocumentDescriptor {
    /// Creates an empty document with the given format version.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            services: IndexMap::new(),
            networks: IndexMap::new(),
        }
    }

    /// Format version string.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Services keyed by name, in insertion order.
    #[must_use]
    pub fn services(&self) -> &IndexMap<String, ServiceDescriptor> {
        &self.services
    }

    /// Looks up a service by name.
    #[must_use]
    pub fn service(&self, name: &str) -> Option<&ServiceDescriptor> {
        self.services.get(name)
    }

    /// Names of the top-level networks, in first-referenced order.
    pub fn network_names(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }

    /// Adds a service, returning the definition it replaced if the name was taken.
    ///
    /// A replaced service keeps its original position. Top-level networks are
    /// recomputed from every service afterwards.
    pub fn insert_service(&mut self, service: ServiceDescriptor) -> Option<ServiceDescriptor> {
        let previous = self.services.insert(service.name.clone(), service);
        self.rebuild_networks();
        previous
    }

    fn rebuild_networks(&mut self) {
        self.networks.clear();
        for network in self.services.values().flat_map(|s| s.networks.iter()) {
            self.networks.entry(network.clone()).or_default();
        }
    }
}

impl Default for DocumentDescriptor {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION)
    }
}
