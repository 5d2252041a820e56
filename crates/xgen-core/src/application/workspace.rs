//! Workspace entity - an `.xcworkspace` bundle and the references it lists.

use std::{cell::RefCell, fmt, path::Path, rc::Rc};

use tracing::{debug, info, instrument};

use crate::{
    application::{GenerationContext, Generatable, Playground},
    domain::{
        WorkspaceManifest,
        manifest::WORKSPACE_MANIFEST_FILE,
        path::{PLAYGROUND_SUFFIX, PROJECT_SUFFIX, WORKSPACE_SUFFIX, adding_suffix, has_suffix, normalize},
    },
    error::{GenerationError, XgenResult},
};

/// Reference location meaning "the directory containing this workspace".
///
/// Every playground's nested `playground.xcworkspace` holds exactly one
/// reference, to `self:`, so Xcode opens the playground bundle itself.
pub const SELF_REFERENCE: &str = "self:";

/// Name used by [`Workspace::add_default_playground`].
pub const DEFAULT_PLAYGROUND_NAME: &str = "Playground";

/// One entry in a workspace: a location, and optionally the entity the
/// workspace must generate at that location.
#[derive(Clone)]
pub struct Reference {
    path: String,
    generatable: Option<Rc<dyn Generatable>>,
}

impl Reference {
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether the workspace generates this reference's target.
    pub fn is_owned(&self) -> bool {
        self.generatable.is_some()
    }
}

impl fmt::Debug for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reference")
            .field("path", &self.path)
            .field("owned", &self.is_owned())
            .finish()
    }
}

/// An Xcode workspace.
///
/// References are written in the order they were added. Owned references
/// are generated, in that same order, before the manifest is written.
#[derive(Debug, Clone)]
pub struct Workspace {
    path: String,
    references: Vec<Reference>,
}

impl Workspace {
    /// A workspace at `path`, normalized to end in `.xcworkspace/`.
    pub fn new(path: impl AsRef<str>) -> Self {
        Self {
            path: normalize(path.as_ref(), WORKSPACE_SUFFIX),
            references: Vec::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// Reference an item that already exists at `path`.
    pub fn add_reference(&mut self, path: impl Into<String>) {
        self.push(path.into(), None);
    }

    /// Reference an existing Xcode project.
    ///
    /// # Panics
    /// Panics if `path` does not end in `.xcodeproj`.
    pub fn add_project(&mut self, path: impl Into<String>) {
        let path = path.into();
        assert!(
            has_suffix(&path, PROJECT_SUFFIX),
            "The path '{}' does not point to an Xcode project",
            path
        );
        self.push(path, None);
    }

    /// Create a playground named `name` inside this workspace's directory and
    /// generate it along with the workspace.
    ///
    /// The returned handle can still be configured before generation.
    pub fn add_new_playground(&mut self, name: &str) -> Rc<RefCell<Playground>> {
        let path = format!("{}{}", self.path, adding_suffix(name, PLAYGROUND_SUFFIX));
        self.add_playground(Playground::new(path))
    }

    /// [`add_new_playground`](Self::add_new_playground) named `Playground`.
    pub fn add_default_playground(&mut self) -> Rc<RefCell<Playground>> {
        self.add_new_playground(DEFAULT_PLAYGROUND_NAME)
    }

    /// Reference a playground that already exists at `path`.
    pub fn add_playground_at(&mut self, path: impl Into<String>) {
        self.push(path.into(), None);
    }

    /// Take ownership of `playground`; it is generated with the workspace.
    pub fn add_playground(&mut self, playground: Playground) -> Rc<RefCell<Playground>> {
        let handle = Rc::new(RefCell::new(playground));
        self.add_shared_playground(Rc::clone(&handle));
        handle
    }

    /// Register a playground the caller keeps a handle to.
    pub fn add_shared_playground(&mut self, playground: Rc<RefCell<Playground>>) {
        let path = playground.borrow().path().to_string();
        self.add_generatable(path, playground);
    }

    /// Register any generatable entity to be generated at `path`.
    pub fn add_generatable(&mut self, path: impl Into<String>, generatable: Rc<dyn Generatable>) {
        self.push(path.into(), Some(generatable));
    }

    fn push(&mut self, path: String, generatable: Option<Rc<dyn Generatable>>) {
        self.references.push(Reference { path, generatable });
    }

    fn write_all(&self, ctx: &GenerationContext) -> XgenResult<()> {
        let fs = ctx.filesystem();
        let folder = Path::new(&self.path);

        fs.create_dir(folder)?;

        let mut manifest = WorkspaceManifest::new();
        for reference in &self.references {
            if let Some(generatable) = &reference.generatable {
                generatable.generate(ctx)?;
            }

            manifest.push_file_ref(&reference.path);
            debug!(location = %reference.path, owned = reference.is_owned(), "reference added");
        }

        fs.write_file(&folder.join(WORKSPACE_MANIFEST_FILE), &manifest.finish())
    }
}

impl Generatable for Workspace {
    #[instrument(skip_all, fields(path = %self.path, references = self.references.len()))]
    fn generate(&self, ctx: &GenerationContext) -> Result<(), GenerationError> {
        self.write_all(ctx)
            .map_err(|e| GenerationError::new(&self.path, e))?;

        info!("Workspace generated");
        Ok(())
    }
}
