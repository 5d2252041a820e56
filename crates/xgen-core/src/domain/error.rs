// ============================================================================
// domain/error.rs - TEMPLATE COMPATIBILITY ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::{PLAYGROUND_TEMPLATE_TYPE, Platform};

/// Root domain error type.
///
/// Raised while validating a template descriptor against the playground
/// being generated. All variants are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Compatibility Errors
    // ========================================================================
    #[error("template is not available for platform '{0}'")]
    UnsupportedPlatform(Platform),

    #[error("template is not a playground template (missing 'com.apple.dt.playground')")]
    InvalidTemplateType,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsupportedPlatform(platform) => vec![
                format!(
                    "The template's Platforms list does not contain '{}'",
                    platform.template_identifier()
                ),
                "Pick a platform the template declares, or use a different template".into(),
            ],
            Self::InvalidTemplateType => vec![
                format!("Add '{PLAYGROUND_TEMPLATE_TYPE}' to the template's AllowedTypes"),
                "Only playground templates can seed a playground".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedPlatform(_) | Self::InvalidTemplateType => {
                ErrorCategory::Compatibility
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Compatibility,
}
