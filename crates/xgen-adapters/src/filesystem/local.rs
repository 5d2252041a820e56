//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::trace;
use walkdir::WalkDir;
use xgen_core::{
    application::ports::Filesystem,
    error::{XgenError, XgenResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> XgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn create_dir(&self, path: &Path) -> XgenResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.create_dir_all(parent)?;
        }
        std::fs::create_dir(path).map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => {
                XgenError::filesystem(path, "Failed to create directory: already exists")
            }
            _ => map_io_error(path, e, "create directory"),
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> XgenResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_file(&self, path: &Path) -> XgenResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> XgenResult<()> {
        trace!(from = %from.display(), to = %to.display(), "copy");
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(from, e, "copy file"))
    }

    fn copy_dir(&self, from: &Path, to: &Path) -> XgenResult<()> {
        for entry in WalkDir::new(from) {
            let entry = entry.map_err(|e| {
                XgenError::filesystem(from, format!("Failed to walk directory: {e}"))
            })?;
            let relative = entry
                .path()
                .strip_prefix(from)
                .map_err(|_| XgenError::filesystem(entry.path(), "Failed to relativise path"))?;
            let target = to.join(relative);

            if entry.file_type().is_dir() {
                self.create_dir_all(&target)?;
            } else if entry.file_type().is_file() {
                self.copy_file(entry.path(), &target)?;
            }
        }
        Ok(())
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> XgenError {
    XgenError::filesystem(path, format!("Failed to {}: {}", operation, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_dir_refuses_existing_directory() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("Ws.xcworkspace");

        fs.create_dir(&dir).unwrap();
        let err = fs.create_dir(&dir).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        fs.create_dir_all(&dir).unwrap();
    }

    #[test]
    fn create_dir_creates_missing_parents() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("a/b/c");

        fs.create_dir(&dir).unwrap();
        assert!(fs.is_dir(&dir));
    }

    #[test]
    fn create_dir_reports_directory_made_by_another_process() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("Shared.xcworkspace");
        std::fs::create_dir(&dir).unwrap();

        let err = fs.create_dir(&dir).unwrap_err();
        assert!(matches!(err, XgenError::Filesystem { .. }));
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn create_dir_refuses_existing_file() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = temp.path().join("Ws.xcworkspace");
        std::fs::write(&path, "not a directory").unwrap();

        let err = fs.create_dir(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not a directory");
    }

    #[test]
    fn copy_dir_is_recursive() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let from = temp.path().join("Sources");
        std::fs::create_dir_all(from.join("Nested")).unwrap();
        std::fs::write(from.join("A.swift"), "a").unwrap();
        std::fs::write(from.join("Nested/B.swift"), "b").unwrap();

        let to = temp.path().join("Out/Sources");
        std::fs::create_dir_all(temp.path().join("Out")).unwrap();
        fs.copy_dir(&from, &to).unwrap();

        assert_eq!(std::fs::read_to_string(to.join("A.swift")).unwrap(), "a");
        assert_eq!(std::fs::read_to_string(to.join("Nested/B.swift")).unwrap(), "b");
    }

    #[test]
    fn read_missing_file_is_filesystem_error() {
        let temp = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .read_file(&temp.path().join("missing.plist"))
            .unwrap_err();
        assert!(matches!(err, XgenError::Filesystem { .. }));
    }
}
