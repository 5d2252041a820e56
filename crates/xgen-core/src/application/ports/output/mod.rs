//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what generation needs from external systems.
//! The `xgen-adapters` crate provides implementations.

use crate::domain::TemplateDescriptor;
use crate::error::XgenResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `xgen_adapters::filesystem::LocalFilesystem` (production)
/// - `xgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Two folder-creation flavours: `create_dir_all` reuses an existing
///   directory, `create_dir` refuses one
/// - `write_file` creates the file if absent and truncates it otherwise
/// - The parent of any written or copied file must already exist
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> XgenResult<()>;

    /// Create a directory (and missing parents), failing if `path` exists.
    fn create_dir(&self, path: &Path) -> XgenResult<()>;

    /// Write content to a file, creating it if needed.
    fn write_file(&self, path: &Path, content: &str) -> XgenResult<()>;

    /// Read a whole file.
    fn read_file(&self, path: &Path) -> XgenResult<Vec<u8>>;

    /// Copy the file at `from` to the file path `to`.
    fn copy_file(&self, from: &Path, to: &Path) -> XgenResult<()>;

    /// Recursively copy the directory `from` so that it becomes `to`.
    fn copy_dir(&self, from: &Path, to: &Path) -> XgenResult<()>;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for decoding template descriptors.
///
/// Implemented by:
/// - `xgen_adapters::decoder::PlistDecoder` (XML and binary property lists)
#[cfg_attr(test, mockall::automock)]
pub trait DescriptorDecoder {
    /// Decode `bytes` read from `path`. `path` is only used for diagnostics.
    fn decode(&self, path: &Path, bytes: &[u8]) -> XgenResult<TemplateDescriptor>;
}
