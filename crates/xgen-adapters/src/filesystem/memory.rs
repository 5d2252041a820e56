//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use xgen_core::{
    application::ports::Filesystem,
    error::{XgenError, XgenResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can hand one clone to a
/// `GenerationContext` and inspect the result through another.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_directory_tree(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    fn require_parent(&self, path: &Path) -> XgenResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !self.directories.contains(parent) {
                return Err(XgenError::filesystem(path, "Parent directory does not exist"));
            }
        }
        Ok(())
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn insert_file(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        let path = path.as_ref();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            inner.add_directory_tree(parent);
        }
        inner.files.insert(path.to_path_buf(), content.as_ref().to_vec());
    }

    /// Read a file's content as UTF-8 (testing helper).
    pub fn read_to_string(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        let bytes = inner.files.get(path.as_ref())?;
        String::from_utf8(bytes.clone()).ok()
    }

    /// Whether a file or directory exists at `path` (testing helper).
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<PathBuf> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// List files directly or transitively under `dir`, sorted.
    pub fn files_under(&self, dir: impl AsRef<Path>) -> Vec<PathBuf> {
        let dir = dir.as_ref();
        self.list_files()
            .into_iter()
            .filter(|p| p.starts_with(dir))
            .collect()
    }

    fn write_lock(
        &self,
        path: &Path,
    ) -> XgenResult<std::sync::RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| XgenError::filesystem(path, "memory filesystem lock poisoned"))
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> XgenResult<()> {
        let mut inner = self.write_lock(path)?;
        if inner.files.contains_key(path) {
            return Err(XgenError::filesystem(path, "A file exists at this path"));
        }
        inner.add_directory_tree(path);
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> XgenResult<()> {
        let mut inner = self.write_lock(path)?;
        if inner.files.contains_key(path) || inner.directories.contains(path) {
            return Err(XgenError::filesystem(
                path,
                "Failed to create directory: already exists",
            ));
        }
        inner.add_directory_tree(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> XgenResult<()> {
        let mut inner = self.write_lock(path)?;
        inner.require_parent(path)?;
        inner
            .files
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> XgenResult<Vec<u8>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| XgenError::filesystem(path, "memory filesystem lock poisoned"))?;
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| XgenError::filesystem(path, "No such file"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> XgenResult<()> {
        let mut inner = self.write_lock(from)?;
        let content = inner
            .files
            .get(from)
            .cloned()
            .ok_or_else(|| XgenError::filesystem(from, "No such file"))?;
        inner.require_parent(to)?;
        inner.files.insert(to.to_path_buf(), content);
        Ok(())
    }

    fn copy_dir(&self, from: &Path, to: &Path) -> XgenResult<()> {
        let mut inner = self.write_lock(from)?;
        if !inner.directories.contains(from) {
            return Err(XgenError::filesystem(from, "No such directory"));
        }

        let directories: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter_map(|d| d.strip_prefix(from).ok())
            .map(|rel| to.join(rel))
            .collect();
        let files: Vec<(PathBuf, Vec<u8>)> = inner
            .files
            .iter()
            .filter_map(|(p, c)| p.strip_prefix(from).ok().map(|rel| (to.join(rel), c.clone())))
            .collect();

        for dir in directories {
            inner.add_directory_tree(&dir);
        }
        inner.files.extend(files);
        Ok(())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }
}
