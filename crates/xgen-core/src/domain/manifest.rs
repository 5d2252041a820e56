//! XML manifests written into generated bundles.
//!
//! Both documents are emitted on a single line with no insignificant
//! whitespace; the exact byte layout is what Xcode round-trips, so tests pin
//! it down literally.

use crate::domain::value_objects::Platform;

/// File name of a playground's manifest.
pub const PLAYGROUND_MANIFEST_FILE: &str = "contents.xcplayground";
/// File name of a workspace's manifest.
pub const WORKSPACE_MANIFEST_FILE: &str = "contents.xcworkspacedata";
/// Timeline file referenced by every playground manifest.
pub const TIMELINE_FILE: &str = "timeline.xctimeline";

const PLAYGROUND_VERSION: &str = "5.0";
const WORKSPACE_VERSION: &str = "1.0";

/// `contents.xcplayground` document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaygroundManifest {
    pub platform: Platform,
    pub run_on_edit: bool,
    pub build_active_scheme: bool,
}

impl PlaygroundManifest {
    pub fn render(&self) -> String {
        let mut xml =
            String::from(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(&format!(
            r#"<playground version="{PLAYGROUND_VERSION}" target-platform="{}" executeOnSourceChanges="{}" buildActiveScheme="{}">"#,
            self.platform.as_str(),
            self.run_on_edit,
            self.build_active_scheme,
        ));
        xml.push_str(&format!(r#"<timeline fileName="{TIMELINE_FILE}"/>"#));
        xml.push_str("</playground>");
        xml
    }
}

/// `contents.xcworkspacedata` document, built one reference at a time.
#[derive(Debug, Clone)]
pub struct WorkspaceManifest {
    xml: String,
}

impl WorkspaceManifest {
    pub fn new() -> Self {
        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push_str(&format!(r#"<Workspace version="{WORKSPACE_VERSION}">"#));
        Self { xml }
    }

    /// Append a `FileRef` for `location`, preserving call order.
    pub fn push_file_ref(&mut self, location: &str) {
        self.xml.push_str(&format!(
            r#"<FileRef location="group:{}"></FileRef>"#,
            escape_attribute(location)
        ));
    }

    /// Close the root element and return the document.
    pub fn finish(mut self) -> String {
        self.xml.push_str("</Workspace>");
        self.xml
    }
}

impl Default for WorkspaceManifest {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape a value for use inside a double-quoted XML attribute.
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
