//! Unified error handling for Xgen Core.
//!
//! [`XgenError`] is the taxonomy of things that can go wrong inside a
//! generation step. [`GenerationError`] is the single envelope every public
//! `generate()` returns, carrying the underlying cause.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Root error type for Xgen Core operations.
#[derive(Debug, Error, Clone)]
pub enum XgenError {
    /// A filesystem port operation (create, read, write, copy) failed.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// A template descriptor could not be decoded.
    #[error("Failed to decode template descriptor {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    /// A template failed compatibility validation.
    #[error("Template error: {0}")]
    Domain(#[from] DomainError),

    /// A nested entity failed to generate.
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl XgenError {
    /// Shorthand for a filesystem failure at `path`.
    pub fn filesystem(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Filesystem {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Workspaces are never overwritten; remove an existing one first".into(),
            ],
            Self::Decode { path, .. } => vec![
                format!("Check that {} is a valid property list", path.display()),
                "It must contain MainTemplateFile, Platforms and AllowedTypes".into(),
            ],
            Self::Domain(e) => e.suggestions(),
            Self::Generation(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } => ErrorCategory::Filesystem,
            Self::Decode { .. } => ErrorCategory::Decode,
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Compatibility => ErrorCategory::Compatibility,
            },
            Self::Generation(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Filesystem,
    Decode,
    Compatibility,
}

/// Failure of a `generate()` call.
///
/// Wraps whatever went wrong with the path of the entity being generated.
/// Files already written before the failure are left on disk.
#[derive(Debug, Error, Clone)]
#[error("Failed to generate {target}: {cause}")]
pub struct GenerationError {
    target: String,
    #[source]
    cause: Box<XgenError>,
}

impl GenerationError {
    pub fn new(target: impl Into<String>, cause: impl Into<XgenError>) -> Self {
        Self {
            target: target.into(),
            cause: Box::new(cause.into()),
        }
    }

    /// Path of the playground or workspace that failed.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The immediate cause.
    pub fn cause(&self) -> &XgenError {
        &self.cause
    }

    /// The innermost cause, skipping nested generation envelopes.
    pub fn root_cause(&self) -> &XgenError {
        let mut cause = self.cause.as_ref();
        while let XgenError::Generation(inner) = cause {
            cause = inner.cause.as_ref();
        }
        cause
    }

    pub fn suggestions(&self) -> Vec<String> {
        self.root_cause().suggestions()
    }

    pub fn category(&self) -> ErrorCategory {
        self.root_cause().category()
    }
}

/// Convenient result type alias.
pub type XgenResult<T> = Result<T, XgenError>;
