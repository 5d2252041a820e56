//! Canonical path spelling for generated bundles.
//!
//! Xcode bundles are directories whose names carry a fixed extension. Every
//! entity normalizes its target path once, at construction, so later string
//! joins (`path + "contents.xcplayground"`) are always well-formed.

/// Suffix of a playground bundle directory.
pub const PLAYGROUND_SUFFIX: &str = ".playground";
/// Suffix of a workspace bundle directory.
pub const WORKSPACE_SUFFIX: &str = ".xcworkspace";
/// Suffix of an Xcode template directory.
pub const TEMPLATE_SUFFIX: &str = ".xctemplate";
/// Suffix of an Xcode project bundle.
pub const PROJECT_SUFFIX: &str = ".xcodeproj";

/// Source file at the root of every playground and playground template.
pub const CONTENTS_FILE: &str = "Contents.swift";
/// Folder of auxiliary sources inside a playground.
pub const SOURCES_DIR: &str = "Sources";
/// Helper workspace nested inside every playground bundle.
pub const PLAYGROUND_WORKSPACE_DIR: &str = "playground.xcworkspace";

const SEPARATOR: char = '/';

/// Normalize `path` so it ends in exactly one `suffix` followed by exactly
/// one `/`.
///
/// Idempotent: normalizing an already-normalized path returns it unchanged.
///
/// ```
/// use xgen_core::domain::path::{normalize, PLAYGROUND_SUFFIX};
///
/// assert_eq!(normalize("Foo", PLAYGROUND_SUFFIX), "Foo.playground/");
/// assert_eq!(normalize("Foo.playground/", PLAYGROUND_SUFFIX), "Foo.playground/");
/// ```
pub fn normalize(path: &str, suffix: &str) -> String {
    let trimmed = path.trim_end_matches(SEPARATOR);
    let mut normalized = adding_suffix(trimmed, suffix);
    normalized.push(SEPARATOR);
    normalized
}

/// Append `suffix` unless `value` already ends with it.
pub fn adding_suffix(value: &str, suffix: &str) -> String {
    if value.ends_with(suffix) {
        value.to_string()
    } else {
        format!("{value}{suffix}")
    }
}

/// Whether `path` names a bundle with `suffix`, ignoring trailing separators.
pub fn has_suffix(path: &str, suffix: &str) -> bool {
    path.trim_end_matches(SEPARATOR).ends_with(suffix)
}
