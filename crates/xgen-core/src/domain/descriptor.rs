//! Template descriptors read from `TemplateInfo.plist`.

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{PLAYGROUND_TEMPLATE_TYPE, Platform},
};

/// File name of the descriptor inside a template directory.
pub const TEMPLATE_DESCRIPTOR_FILE: &str = "TemplateInfo.plist";

/// The three fields of a `TemplateInfo.plist` that playground generation
/// cares about. Every other key in the property list is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDescriptor {
    /// Name of the subfolder holding the template's content.
    #[serde(rename = "MainTemplateFile")]
    pub main_filename: String,
    /// Template-system platform identifiers, e.g. `com.apple.platform.macosx`.
    #[serde(rename = "Platforms")]
    pub platforms: Vec<String>,
    #[serde(rename = "AllowedTypes")]
    pub allowed_types: Vec<String>,
}

impl TemplateDescriptor {
    /// Check that this template can seed a playground for `platform`.
    ///
    /// The platform check runs first, so a descriptor failing both checks
    /// reports `UnsupportedPlatform`.
    pub fn validate(&self, platform: Platform) -> Result<(), DomainError> {
        let identifier = platform.template_identifier();
        if !self.platforms.iter().any(|p| p == identifier) {
            return Err(DomainError::UnsupportedPlatform(platform));
        }

        if !self
            .allowed_types
            .iter()
            .any(|t| t == PLAYGROUND_TEMPLATE_TYPE)
        {
            return Err(DomainError::InvalidTemplateType);
        }

        Ok(())
    }
}
