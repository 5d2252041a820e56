//! Domain value objects: Platform and the fixed identifiers Xcode expects.
//!
//! # Design
//!
//! These are pure value types: `Copy` and compared by value.
//! Each platform knows three spellings of itself: the raw identifier written
//! into `contents.xcplayground`, the template-system identifier listed in a
//! `TemplateInfo.plist`, and the system framework imported by default stubs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Allowed-type identifier a template must declare to seed a playground.
pub const PLAYGROUND_TEMPLATE_TYPE: &str = "com.apple.dt.playground";

// ── Platform ─────────────────────────────────────────────────────────────────

/// A platform that playgrounds can target.
///
/// Serializes as its raw identifier and deserializes through [`FromStr`], so
/// config values accept any case and the usual aliases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Platform {
    #[default]
    #[serde(rename = "ios")]
    Ios,
    #[serde(rename = "macos")]
    MacOs,
    #[serde(rename = "tvos")]
    TvOs,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Self::Ios, Self::MacOs, Self::TvOs];

    /// Raw identifier used as the manifest's `target-platform` attribute.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::MacOs => "macos",
            Self::TvOs => "tvos",
        }
    }

    /// Identifier used in a template descriptor's `Platforms` list.
    pub const fn template_identifier(&self) -> &'static str {
        match self {
            Self::Ios => "com.apple.platform.iphoneos",
            Self::MacOs => "com.apple.platform.macosx",
            Self::TvOs => "com.apple.platform.appletvos",
        }
    }

    /// Framework imported by the default `Contents.swift` stub.
    pub const fn system_framework(&self) -> &'static str {
        match self {
            Self::Ios | Self::TvOs => "UIKit",
            Self::MacOs => "Cocoa",
        }
    }

    /// Source written when a playground has no explicit content.
    pub fn default_code(&self) -> String {
        format!("import {}\n\n", self.system_framework())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known platform.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform '{0}' (expected one of: ios, macos, tvos)")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ios" | "iphoneos" => Ok(Self::Ios),
            "macos" | "macosx" | "osx" => Ok(Self::MacOs),
            "tvos" | "appletvos" => Ok(Self::TvOs),
            other => Err(UnknownPlatform(other.to_string())),
        }
    }
}

impl TryFrom<String> for Platform {
    type Error = UnknownPlatform;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_code_imports_system_framework() {
        assert_eq!(Platform::Ios.default_code(), "import UIKit\n\n");
        assert_eq!(Platform::TvOs.default_code(), "import UIKit\n\n");
        assert_eq!(Platform::MacOs.default_code(), "import Cocoa\n\n");
    }

    #[test]
    fn default_code_is_one_import_line_then_blank() {
        for platform in Platform::ALL {
            let code = platform.default_code();
            let lines: Vec<&str> = code.split('\n').collect();
            assert_eq!(lines.len(), 3);
            assert!(lines[0].starts_with("import "));
            assert!(lines[1].is_empty() && lines[2].is_empty());
        }
    }

    #[test]
    fn template_identifiers() {
        assert_eq!(
            Platform::Ios.template_identifier(),
            "com.apple.platform.iphoneos"
        );
        assert_eq!(
            Platform::MacOs.template_identifier(),
            "com.apple.platform.macosx"
        );
        assert_eq!(
            Platform::TvOs.template_identifier(),
            "com.apple.platform.appletvos"
        );
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("iOS".parse::<Platform>().unwrap(), Platform::Ios);
        assert_eq!("MACOS".parse::<Platform>().unwrap(), Platform::MacOs);
        assert_eq!("tvos".parse::<Platform>().unwrap(), Platform::TvOs);
    }

    #[test]
    fn parse_unknown_fails() {
        let err = "watchos".parse::<Platform>().unwrap_err();
        assert!(err.to_string().contains("watchos"));
    }

    #[test]
    fn parse_accepts_sdk_aliases() {
        assert_eq!("MacOSX".parse::<Platform>().unwrap(), Platform::MacOs);
        assert_eq!("iPhoneOS".parse::<Platform>().unwrap(), Platform::Ios);
        assert_eq!("AppleTVOS".parse::<Platform>().unwrap(), Platform::TvOs);
    }

    #[test]
    fn deserialize_ignores_case() {
        use serde::de::{IntoDeserializer, value::Error as ValueError};

        for (raw, expected) in [
            ("macOS", Platform::MacOs),
            ("iOS", Platform::Ios),
            ("tvOS", Platform::TvOs),
            ("osx", Platform::MacOs),
        ] {
            let de: serde::de::value::StrDeserializer<'_, ValueError> = raw.into_deserializer();
            assert_eq!(Platform::deserialize(de).unwrap(), expected);
        }
    }

    #[test]
    fn deserialize_unknown_reports_platform_error() {
        use serde::de::{IntoDeserializer, value::Error as ValueError};

        let de: serde::de::value::StrDeserializer<'_, ValueError> = "watchOS".into_deserializer();
        let err = Platform::deserialize(de).unwrap_err();
        assert!(err.to_string().contains("unknown platform 'watchos'"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for platform in Platform::ALL {
            assert_eq!(platform.to_string().parse::<Platform>().unwrap(), platform);
        }
    }
}
