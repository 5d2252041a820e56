//! The set of adapters a generation run writes through.

use crate::application::ports::{DescriptorDecoder, Filesystem};

/// Adapters shared by every entity generated in one run.
///
/// A workspace hands the same context down to each playground it owns, so a
/// whole tree of bundles is written through one filesystem.
pub struct GenerationContext {
    filesystem: Box<dyn Filesystem>,
    decoder: Box<dyn DescriptorDecoder>,
}

impl GenerationContext {
    /// Create a new generation context with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use xgen_core::application::GenerationContext;
    ///
    /// let ctx = GenerationContext::new(
    ///     Box::new(filesystem), // impl Filesystem
    ///     Box::new(decoder),    // impl DescriptorDecoder
    /// );
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, decoder: Box<dyn DescriptorDecoder>) -> Self {
        Self {
            filesystem,
            decoder,
        }
    }

    pub fn filesystem(&self) -> &dyn Filesystem {
        self.filesystem.as_ref()
    }

    pub fn decoder(&self) -> &dyn DescriptorDecoder {
        self.decoder.as_ref()
    }
}

impl std::fmt::Debug for GenerationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationContext").finish_non_exhaustive()
    }
}
