#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # composegen
//!
//! A library for interactively assembling multi-service compose documents.
//!
//! A session asks for each service's image or build context, ports,
//! environment, volumes, dependencies, networks and resource limits, shows
//! a summary, and writes the result as YAML.
//!
//! ## Core Types
//!
//! - [`DocumentDescriptor`] and [`ServiceDescriptor`]: the typed document
//! - [`Prompter`]: the I/O context every prompt goes through
//! - [`Collector`]: the per-service prompt sequence
//! - [`Session`]: collect, preview, confirm and write
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use composegen::{emit, DocumentDescriptor, PortMapping, ServiceDescriptor, ServiceSource};
//!
//! let mut web = ServiceDescriptor::new("web", ServiceSource::Image("nginx:latest".into())).unwrap();
//! web.ports.push(PortMapping::new("80", "80").unwrap());
//!
//! let mut doc = DocumentDescriptor::default();
//! doc.insert_service(web);
//!
//! let yaml = emit::render(&doc).unwrap();
//! assert!(yaml.contains("image: nginx:latest"));
//! ```

pub mod collector;
pub mod config;
pub mod descriptor;
pub mod emit;
pub mod error;
pub mod input;
pub mod logging;
pub mod preview;
pub mod prompt;
pub mod session;

// Re-export key types at crate root for convenience
pub use collector::Collector;
pub use config::{WizardConfig, WizardConfigBuilder};
pub use descriptor::{
    BuildDescriptor, DocumentDescriptor, NetworkDefinition, PortMapping, ResourceLimits,
    ServiceDescriptor, ServiceSource, DEFAULT_VERSION,
};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use prompt::Prompter;
pub use session::{Session, SessionOutcome};
