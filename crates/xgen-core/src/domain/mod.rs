//! Core domain layer for Xgen.
//!
//! This module contains pure logic with no I/O. Everything that touches a
//! filesystem or a decoder goes through the ports in `crate::application`.
//!
//! ## What lives here
//!
//! - **Platforms** and the identifiers Xcode associates with them
//! - **Path normalization** for bundle directories
//! - **Manifests**: the exact XML written into playgrounds and workspaces
//! - **Template descriptors** and their compatibility rules
pub mod descriptor;
pub mod error;
pub mod manifest;
pub mod path;
pub mod value_objects;

// Re-exports for convenience
pub use descriptor::{TEMPLATE_DESCRIPTOR_FILE, TemplateDescriptor};
pub use error::{DomainError, ErrorCategory};
pub use manifest::{PlaygroundManifest, WorkspaceManifest};
pub use value_objects::{PLAYGROUND_TEMPLATE_TYPE, Platform, UnknownPlatform};
