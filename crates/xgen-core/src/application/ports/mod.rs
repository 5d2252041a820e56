//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `xgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File and folder operations
//!   - `DescriptorDecoder`: Property-list decoding of template descriptors
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `Generatable` (see `crate::application::generatable`)

pub mod output;

pub use output::{DescriptorDecoder, Filesystem};

#[cfg(test)]
pub use output::{MockDescriptorDecoder, MockFilesystem};
