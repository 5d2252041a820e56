//! `TemplateInfo.plist` decoding.
//!
//! Xcode ships template descriptors as XML property lists, but binary plists
//! are accepted too; the `plist` crate sniffs the format from the header.

use std::path::Path;

use tracing::{debug, instrument};
use xgen_core::{
    application::ports::DescriptorDecoder,
    domain::TemplateDescriptor,
    error::{XgenError, XgenResult},
};

/// Decodes template descriptors from property lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlistDecoder;

impl PlistDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl DescriptorDecoder for PlistDecoder {
    #[instrument(skip(self, bytes), fields(path = %path.display(), bytes = bytes.len()))]
    fn decode(&self, path: &Path, bytes: &[u8]) -> XgenResult<TemplateDescriptor> {
        let descriptor: TemplateDescriptor =
            plist::from_bytes(bytes).map_err(|e| XgenError::Decode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        debug!(
            main = %descriptor.main_filename,
            platforms = descriptor.platforms.len(),
            "descriptor decoded"
        );
        Ok(descriptor)
    }
}
