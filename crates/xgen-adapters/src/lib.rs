//! Infrastructure adapters for Xgen.
//!
//! This crate implements the ports defined in `xgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod decoder;
pub mod filesystem;

use xgen_core::application::GenerationContext;

// Re-export commonly used adapters
pub use decoder::PlistDecoder;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};

/// Context that writes to the real filesystem and reads plist descriptors.
pub fn local_context() -> GenerationContext {
    GenerationContext::new(Box::new(LocalFilesystem::new()), Box::new(PlistDecoder::new()))
}

/// Context backed by `filesystem`; keep a clone to inspect what was written.
pub fn memory_context(filesystem: MemoryFilesystem) -> GenerationContext {
    GenerationContext::new(Box::new(filesystem), Box::new(PlistDecoder::new()))
}
