use std::cell::RefCell;

use crate::{application::GenerationContext, error::GenerationError};

/// Something that can render itself to disk.
///
/// A [`Workspace`](crate::application::Workspace) stores references to
/// generatables and calls [`generate`](Generatable::generate) on each of them
/// before writing its own manifest.
pub trait Generatable {
    /// Write this entity's artifacts through `ctx`.
    ///
    /// Not transactional: on failure, whatever was written so far stays on
    /// disk.
    fn generate(&self, ctx: &GenerationContext) -> Result<(), GenerationError>;
}

/// Shared handles stay configurable after registration with a workspace.
impl<T: Generatable + ?Sized> Generatable for RefCell<T> {
    fn generate(&self, ctx: &GenerationContext) -> Result<(), GenerationError> {
        self.borrow().generate(ctx)
    }
}
