//! Application layer for Xgen.
//!
//! This layer contains:
//! - **Entities**: `Playground` and `Workspace`, which render themselves
//! - **Template resolution**: reading and validating `.xctemplate` folders
//! - **Ports**: Interface definitions (traits) for external dependencies
//!
//! All I/O goes through the ports held by a [`GenerationContext`]; the
//! rules about what gets written live in `crate::domain`.

pub mod context;
pub mod generatable;
pub mod playground;
pub mod ports;
pub mod template;
pub mod workspace;

pub use context::GenerationContext;
pub use generatable::Generatable;
pub use playground::{Playground, PlaygroundOptions, Source};
pub use template::Template;
pub use workspace::{DEFAULT_PLAYGROUND_NAME, Reference, SELF_REFERENCE, Workspace};

// Re-export port traits (for adapter implementation)
pub use ports::{DescriptorDecoder, Filesystem};
