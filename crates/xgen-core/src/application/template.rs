//! Template resolution - turns an `.xctemplate` directory into content for a
//! playground.
//!
//! Resolution reads `TemplateInfo.plist`, decodes it through the
//! [`DescriptorDecoder`](crate::application::ports::DescriptorDecoder) port and
//! validates it against the target platform before a [`Template`] exists.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::{GenerationContext, ports::Filesystem},
    domain::{
        Platform, TEMPLATE_DESCRIPTOR_FILE, TemplateDescriptor,
        path::{CONTENTS_FILE, SOURCES_DIR, TEMPLATE_SUFFIX, normalize},
    },
    error::{XgenError, XgenResult},
};

/// A validated playground template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    info: TemplateDescriptor,
    folder: PathBuf,
}

impl Template {
    /// Resolve the template at `path` for `platform`.
    ///
    /// `path` gains the `.xctemplate` suffix if it lacks one.
    ///
    /// # Errors
    ///
    /// - [`XgenError::Filesystem`] if the descriptor cannot be read
    /// - [`XgenError::Decode`] if it is not a valid descriptor
    /// - [`XgenError::Domain`] if the template does not support `platform` or
    ///   is not a playground template
    #[instrument(skip(ctx), fields(platform = %platform))]
    pub fn resolve(path: &str, platform: Platform, ctx: &GenerationContext) -> XgenResult<Self> {
        let folder = PathBuf::from(normalize(path, TEMPLATE_SUFFIX));
        let descriptor_path = folder.join(TEMPLATE_DESCRIPTOR_FILE);

        let bytes = ctx.filesystem().read_file(&descriptor_path)?;
        let info = ctx.decoder().decode(&descriptor_path, &bytes)?;
        info.validate(platform)?;

        debug!(main = %info.main_filename, "template resolved");
        Ok(Self { info, folder })
    }

    pub fn info(&self) -> &TemplateDescriptor {
        &self.info
    }

    /// The template directory, normalized.
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Folder named by the descriptor's `MainTemplateFile`.
    pub fn main_folder(&self, fs: &dyn Filesystem) -> XgenResult<PathBuf> {
        let main = self.folder.join(&self.info.main_filename);
        if !fs.is_dir(&main) {
            return Err(XgenError::filesystem(main, "template content folder not found"));
        }
        Ok(main)
    }

    /// Copy `Contents.swift` and, when present, the `Sources` folder into
    /// `target`.
    #[instrument(skip(self, fs), fields(template = %self.folder.display()))]
    pub fn copy_contents(&self, target: &Path, fs: &dyn Filesystem) -> XgenResult<()> {
        let main = self.main_folder(fs)?;
        fs.copy_file(&main.join(CONTENTS_FILE), &target.join(CONTENTS_FILE))?;

        let sources = main.join(SOURCES_DIR);
        if fs.is_dir(&sources) {
            fs.copy_dir(&sources, &target.join(SOURCES_DIR))?;
        } else {
            debug!("template has no Sources folder");
        }

        Ok(())
    }
}
