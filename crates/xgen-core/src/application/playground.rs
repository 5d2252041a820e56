//! Playground entity - an `.playground` bundle and how to write it.
//!
//! Generation order:
//! 1. Create (or reuse) the bundle directory
//! 2. Write `Contents.swift` from the configured [`Source`]
//! 3. Write `contents.xcplayground`
//! 4. Copy auxiliary sources into `Sources/` (only if there are any)
//! 5. Generate the nested `playground.xcworkspace` pointing at the bundle

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        GenerationContext, Generatable, Template, Workspace,
        ports::Filesystem,
        workspace::SELF_REFERENCE,
    },
    domain::{
        Platform, PlaygroundManifest,
        manifest::PLAYGROUND_MANIFEST_FILE,
        path::{CONTENTS_FILE, PLAYGROUND_SUFFIX, PLAYGROUND_WORKSPACE_DIR, SOURCES_DIR, normalize},
    },
    error::{GenerationError, XgenError, XgenResult},
};

/// Where a playground's `Contents.swift` comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Source {
    /// `import <SystemFramework>` followed by a blank line.
    #[default]
    Default,
    /// Written verbatim.
    Code(String),
    /// Copied from the `.xctemplate` directory at this path.
    Template(String),
}

/// Everything configurable about a playground besides its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaygroundOptions {
    pub platform: Platform,
    pub source: Source,
    /// `executeOnSourceChanges` in the manifest.
    pub run_on_edit: bool,
    /// `buildActiveScheme` in the manifest.
    pub build_active_scheme: bool,
    /// Files copied into `Sources/`, keeping their file names.
    pub auxiliary_files: Vec<PathBuf>,
}

impl Default for PlaygroundOptions {
    /// iOS, default source, both flags on, no auxiliary files.
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            source: Source::default(),
            run_on_edit: true,
            build_active_scheme: true,
            auxiliary_files: Vec::new(),
        }
    }
}

/// An Xcode playground.
///
/// Nothing touches the filesystem until [`Generatable::generate`] is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playground {
    path: String,
    options: PlaygroundOptions,
}

impl Playground {
    /// A playground at `path` with default options.
    ///
    /// `path` is normalized to end in `.playground/`.
    pub fn new(path: impl AsRef<str>) -> Self {
        Self::with_options(path, PlaygroundOptions::default())
    }

    pub fn with_options(path: impl AsRef<str>, options: PlaygroundOptions) -> Self {
        Self {
            path: normalize(path.as_ref(), PLAYGROUND_SUFFIX),
            options,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn options(&self) -> &PlaygroundOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut PlaygroundOptions {
        &mut self.options
    }

    pub fn set_platform(&mut self, platform: Platform) -> &mut Self {
        self.options.platform = platform;
        self
    }

    pub fn set_source(&mut self, source: Source) -> &mut Self {
        self.options.source = source;
        self
    }

    pub fn set_run_on_edit(&mut self, run_on_edit: bool) -> &mut Self {
        self.options.run_on_edit = run_on_edit;
        self
    }

    pub fn set_build_active_scheme(&mut self, build_active_scheme: bool) -> &mut Self {
        self.options.build_active_scheme = build_active_scheme;
        self
    }

    pub fn add_source_file(&mut self, file: impl Into<PathBuf>) -> &mut Self {
        self.options.auxiliary_files.push(file.into());
        self
    }

    /// The manifest this playground writes.
    pub fn manifest(&self) -> PlaygroundManifest {
        PlaygroundManifest {
            platform: self.options.platform,
            run_on_edit: self.options.run_on_edit,
            build_active_scheme: self.options.build_active_scheme,
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_all(&self, ctx: &GenerationContext) -> XgenResult<()> {
        let fs = ctx.filesystem();
        let folder = Path::new(&self.path);

        fs.create_dir_all(folder)?;
        self.write_source(folder, ctx)?;

        fs.write_file(
            &folder.join(PLAYGROUND_MANIFEST_FILE),
            &self.manifest().render(),
        )?;

        self.copy_auxiliary_files(folder, fs)?;

        let mut workspace = Workspace::new(format!("{}{}", self.path, PLAYGROUND_WORKSPACE_DIR));
        workspace.add_reference(SELF_REFERENCE);
        workspace.generate(ctx)?;

        Ok(())
    }

    fn write_source(&self, folder: &Path, ctx: &GenerationContext) -> XgenResult<()> {
        let contents = folder.join(CONTENTS_FILE);
        match &self.options.source {
            Source::Code(code) => ctx.filesystem().write_file(&contents, code),
            Source::Template(path) => {
                let template = Template::resolve(path, self.options.platform, ctx)?;
                template.copy_contents(folder, ctx.filesystem())
            }
            Source::Default => ctx
                .filesystem()
                .write_file(&contents, &self.options.platform.default_code()),
        }
    }

    fn copy_auxiliary_files(&self, folder: &Path, fs: &dyn Filesystem) -> XgenResult<()> {
        if self.options.auxiliary_files.is_empty() {
            return Ok(());
        }

        let sources = folder.join(SOURCES_DIR);
        fs.create_dir_all(&sources)?;

        for file in &self.options.auxiliary_files {
            let name = file
                .file_name()
                .ok_or_else(|| XgenError::filesystem(file, "auxiliary source has no file name"))?;
            fs.copy_file(file, &sources.join(name))?;
            debug!(file = %file.display(), "auxiliary source copied");
        }

        Ok(())
    }
}

impl Generatable for Playground {
    #[instrument(
        skip_all,
        fields(path = %self.path, platform = %self.options.platform)
    )]
    fn generate(&self, ctx: &GenerationContext) -> Result<(), GenerationError> {
        self.write_all(ctx)
            .map_err(|e| GenerationError::new(&self.path, e))?;

        info!("Playground generated");
        Ok(())
    }
}
