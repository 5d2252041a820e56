//! End-to-end generation against the in-memory and local filesystems.

use std::{path::Path, rc::Rc};

use xgen_adapters::{LocalFilesystem, MemoryFilesystem, local_context, memory_context};
use xgen_core::{
    domain::{DomainError, Platform},
    prelude::*,
};

const IOS_MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><playground version="5.0" target-platform="ios" executeOnSourceChanges="true" buildActiveScheme="true"><timeline fileName="timeline.xctimeline"/></playground>"#;

const SELF_WORKSPACE: &str = r#"<?xml version="1.0" encoding="UTF-8"?><Workspace version="1.0"><FileRef location="group:self:"></FileRef></Workspace>"#;

fn descriptor_plist(platform: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>MainTemplateFile</key>
    <string>Main.playground</string>
    <key>Platforms</key>
    <array><string>{platform}</string></array>
    <key>AllowedTypes</key>
    <array><string>com.apple.dt.playground</string></array>
</dict>
</plist>"#
    )
}

/// A macOS-only template with a nested `Sources` folder.
fn seed_macos_template(fs: &MemoryFilesystem) {
    fs.insert_file(
        "Templates/Mac.xctemplate/TemplateInfo.plist",
        descriptor_plist("com.apple.platform.macosx"),
    );
    fs.insert_file(
        "Templates/Mac.xctemplate/Main.playground/Contents.swift",
        "import Cocoa\n\nlet greeting = \"hi\"\n",
    );
    fs.insert_file(
        "Templates/Mac.xctemplate/Main.playground/Sources/Helpers.swift",
        "public func help() {}\n",
    );
    fs.insert_file(
        "Templates/Mac.xctemplate/Main.playground/Sources/Extra/More.swift",
        "public let more = 1\n",
    );
}

// ============================================================================
// Playground
// ============================================================================

#[test]
fn default_playground_writes_full_bundle() {
    let fs = MemoryFilesystem::new();
    let ctx = memory_context(fs.clone());

    Playground::new("Foo").generate(&ctx).unwrap();

    assert_eq!(
        fs.list_files(),
        vec![
            Path::new("Foo.playground/Contents.swift").to_path_buf(),
            Path::new("Foo.playground/contents.xcplayground").to_path_buf(),
            Path::new("Foo.playground/playground.xcworkspace/contents.xcworkspacedata")
                .to_path_buf(),
        ]
    );
    assert_eq!(
        fs.read_to_string("Foo.playground/Contents.swift").as_deref(),
        Some("import UIKit\n\n")
    );
    assert_eq!(
        fs.read_to_string("Foo.playground/contents.xcplayground").as_deref(),
        Some(IOS_MANIFEST)
    );
    assert_eq!(
        fs.read_to_string("Foo.playground/playground.xcworkspace/contents.xcworkspacedata")
            .as_deref(),
        Some(SELF_WORKSPACE)
    );
}

#[test]
fn default_stub_imports_platform_framework() {
    for (platform, framework) in [
        (Platform::Ios, "UIKit"),
        (Platform::MacOs, "Cocoa"),
        (Platform::TvOs, "UIKit"),
    ] {
        let fs = MemoryFilesystem::new();
        let mut playground = Playground::new("Stub");
        playground.set_platform(platform);
        playground.generate(&memory_context(fs.clone())).unwrap();

        assert_eq!(
            fs.read_to_string("Stub.playground/Contents.swift"),
            Some(format!("import {framework}\n\n"))
        );
        let manifest = fs
            .read_to_string("Stub.playground/contents.xcplayground")
            .unwrap();
        assert!(manifest.contains(&format!(r#"target-platform="{}""#, platform.as_str())));
    }
}

#[test]
fn disabled_flags_are_written_as_false() {
    let fs = MemoryFilesystem::new();
    let mut playground = Playground::new("Quiet");
    playground
        .set_platform(Platform::MacOs)
        .set_run_on_edit(false)
        .set_build_active_scheme(false);
    playground.generate(&memory_context(fs.clone())).unwrap();

    assert_eq!(
        fs.read_to_string("Quiet.playground/contents.xcplayground").as_deref(),
        Some(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><playground version="5.0" target-platform="macos" executeOnSourceChanges="false" buildActiveScheme="false"><timeline fileName="timeline.xctimeline"/></playground>"#
        )
    );
}

#[test]
fn explicit_code_is_written_verbatim() {
    let fs = MemoryFilesystem::new();
    let mut playground = Playground::new("Code.playground");
    playground.set_source(Source::Code("print(1)".into()));
    playground.generate(&memory_context(fs.clone())).unwrap();

    assert_eq!(
        fs.read_to_string("Code.playground/Contents.swift").as_deref(),
        Some("print(1)")
    );
}

#[test]
fn auxiliary_files_land_in_sources() {
    let fs = MemoryFilesystem::new();
    fs.insert_file("lib/Math.swift", "public func add() {}");
    fs.insert_file("other/Util.swift", "public func util() {}");

    let mut playground = Playground::new("Aux");
    playground
        .add_source_file("lib/Math.swift")
        .add_source_file("other/Util.swift");
    playground.generate(&memory_context(fs.clone())).unwrap();

    assert_eq!(
        fs.read_to_string("Aux.playground/Sources/Math.swift").as_deref(),
        Some("public func add() {}")
    );
    assert_eq!(
        fs.read_to_string("Aux.playground/Sources/Util.swift").as_deref(),
        Some("public func util() {}")
    );
}

#[test]
fn no_sources_folder_without_auxiliary_files() {
    let fs = MemoryFilesystem::new();
    Playground::new("Plain").generate(&memory_context(fs.clone())).unwrap();

    assert!(!fs.exists(Path::new("Plain.playground/Sources")));
}

#[test]
fn missing_auxiliary_file_fails_generation() {
    let fs = MemoryFilesystem::new();
    let mut playground = Playground::new("Broken");
    playground.add_source_file("nowhere/Gone.swift");

    let err = playground
        .generate(&memory_context(fs.clone()))
        .unwrap_err();

    assert_eq!(err.target(), "Broken.playground/");
    assert!(matches!(err.root_cause(), XgenError::Filesystem { .. }));
    // Already-written files are left behind.
    assert!(fs.exists(Path::new("Broken.playground/contents.xcplayground")));
    assert!(!fs.exists(Path::new("Broken.playground/playground.xcworkspace")));
}

#[test]
fn regenerating_a_playground_fails_on_its_nested_workspace() {
    let fs = MemoryFilesystem::new();
    let ctx = memory_context(fs.clone());
    let playground = Playground::new("Again");

    playground.generate(&ctx).unwrap();
    let err = playground.generate(&ctx).unwrap_err();

    match err.root_cause() {
        XgenError::Filesystem { path, .. } => {
            assert_eq!(path, Path::new("Again.playground/playground.xcworkspace/"))
        }
        other => panic!("expected filesystem error, got {other:?}"),
    }
}

// ============================================================================
// Templates
// ============================================================================

#[test]
fn macos_template_is_copied_into_macos_playground() {
    let fs = MemoryFilesystem::new();
    seed_macos_template(&fs);

    let mut playground = Playground::new("FromTemplate");
    playground
        .set_platform(Platform::MacOs)
        .set_source(Source::Template("Templates/Mac".into()));
    playground.generate(&memory_context(fs.clone())).unwrap();

    assert_eq!(
        fs.read_to_string("FromTemplate.playground/Contents.swift")
            .as_deref(),
        Some("import Cocoa\n\nlet greeting = \"hi\"\n")
    );
    assert_eq!(
        fs.read_to_string("FromTemplate.playground/Sources/Helpers.swift")
            .as_deref(),
        Some("public func help() {}\n")
    );
    assert_eq!(
        fs.read_to_string("FromTemplate.playground/Sources/Extra/More.swift")
            .as_deref(),
        Some("public let more = 1\n")
    );
}

#[test]
fn macos_template_is_rejected_for_ios_playground() {
    let fs = MemoryFilesystem::new();
    seed_macos_template(&fs);

    let mut playground = Playground::new("Wrong");
    playground.set_source(Source::Template("Templates/Mac.xctemplate/".into()));
    let err = playground
        .generate(&memory_context(fs.clone()))
        .unwrap_err();

    assert!(matches!(
        err.root_cause(),
        XgenError::Domain(DomainError::UnsupportedPlatform(Platform::Ios))
    ));
    assert!(!fs.exists(Path::new("Wrong.playground/Contents.swift")));
}

#[test]
fn template_without_sources_copies_only_contents() {
    let fs = MemoryFilesystem::new();
    fs.insert_file(
        "Bare.xctemplate/TemplateInfo.plist",
        descriptor_plist("com.apple.platform.appletvos"),
    );
    fs.insert_file("Bare.xctemplate/Main.playground/Contents.swift", "// tv\n");

    let mut playground = Playground::new("Tv");
    playground
        .set_platform(Platform::TvOs)
        .set_source(Source::Template("Bare".into()));
    playground.generate(&memory_context(fs.clone())).unwrap();

    assert_eq!(
        fs.read_to_string("Tv.playground/Contents.swift").as_deref(),
        Some("// tv\n")
    );
    assert!(fs.files_under("Tv.playground/Sources").is_empty());
}

#[test]
fn resolved_template_exposes_descriptor() {
    let fs = MemoryFilesystem::new();
    seed_macos_template(&fs);
    let ctx = memory_context(fs);

    let template = Template::resolve("Templates/Mac", Platform::MacOs, &ctx).unwrap();

    assert_eq!(template.info().main_filename, "Main.playground");
    assert_eq!(template.folder(), Path::new("Templates/Mac.xctemplate/"));
    assert_eq!(
        template.main_folder(ctx.filesystem()).unwrap(),
        Path::new("Templates/Mac.xctemplate/Main.playground")
    );
}

// ============================================================================
// Workspace
// ============================================================================

#[test]
fn workspace_lists_references_in_insertion_order() {
    let fs = MemoryFilesystem::new();
    let mut workspace = Workspace::new("Demo");
    workspace.add_reference("Docs/Notes.md");
    workspace.add_new_playground("Scratch");
    workspace.add_project("App/App.xcodeproj");
    workspace.add_playground_at("Old.playground");
    workspace.generate(&memory_context(fs.clone())).unwrap();

    assert_eq!(
        fs.read_to_string("Demo.xcworkspace/contents.xcworkspacedata")
            .as_deref(),
        Some(concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?><Workspace version="1.0">"#,
            r#"<FileRef location="group:Docs/Notes.md"></FileRef>"#,
            r#"<FileRef location="group:Demo.xcworkspace/Scratch.playground/"></FileRef>"#,
            r#"<FileRef location="group:App/App.xcodeproj"></FileRef>"#,
            r#"<FileRef location="group:Old.playground"></FileRef>"#,
            r#"</Workspace>"#,
        ))
    );
    assert!(fs.exists(Path::new("Demo.xcworkspace/Scratch.playground/contents.xcplayground")));
    assert!(!fs.exists(Path::new("Old.playground")));
}

#[test]
fn playground_handle_configures_before_generation() {
    let fs = MemoryFilesystem::new();
    let mut workspace = Workspace::new("Demo.xcworkspace");
    let playground = workspace.add_default_playground();
    playground
        .borrow_mut()
        .set_platform(Platform::MacOs)
        .set_source(Source::Code("// shared".into()));
    workspace.generate(&memory_context(fs.clone())).unwrap();

    assert_eq!(
        fs.read_to_string("Demo.xcworkspace/Playground.playground/Contents.swift")
            .as_deref(),
        Some("// shared")
    );
    let manifest = fs
        .read_to_string("Demo.xcworkspace/Playground.playground/contents.xcplayground")
        .unwrap();
    assert!(manifest.contains(r#"target-platform="macos""#));
}

#[test]
fn shared_playground_outside_workspace_is_generated() {
    let fs = MemoryFilesystem::new();
    let shared = Rc::new(std::cell::RefCell::new(Playground::new("Sibling")));
    let mut workspace = Workspace::new("Demo");
    workspace.add_shared_playground(Rc::clone(&shared));
    workspace.generate(&memory_context(fs.clone())).unwrap();

    assert!(fs.exists(Path::new("Sibling.playground/Contents.swift")));
    assert_eq!(workspace.references()[0].path(), "Sibling.playground/");
}

#[test]
fn workspaces_nest_as_generatables() {
    let fs = MemoryFilesystem::new();
    let mut inner = Workspace::new("Outer.xcworkspace/Inner");
    inner.add_reference("Lib.xcodeproj");
    let inner_path = inner.path().to_string();

    let mut outer = Workspace::new("Outer");
    outer.add_generatable(inner_path, Rc::new(inner));
    outer.generate(&memory_context(fs.clone())).unwrap();

    assert!(
        fs.read_to_string("Outer.xcworkspace/Inner.xcworkspace/contents.xcworkspacedata")
            .unwrap()
            .contains("group:Lib.xcodeproj")
    );
    assert!(
        fs.read_to_string("Outer.xcworkspace/contents.xcworkspacedata")
            .unwrap()
            .contains("group:Outer.xcworkspace/Inner.xcworkspace/")
    );
}

#[test]
fn workspace_never_overwrites() {
    let fs = MemoryFilesystem::new();
    let ctx = memory_context(fs.clone());
    let workspace = Workspace::new("Once");

    workspace.generate(&ctx).unwrap();
    let err = workspace.generate(&ctx).unwrap_err();

    assert_eq!(err.target(), "Once.xcworkspace/");
    assert!(matches!(err.cause(), XgenError::Filesystem { .. }));
}

#[test]
fn failing_playground_aborts_workspace_before_manifest() {
    let fs = MemoryFilesystem::new();
    let mut workspace = Workspace::new("Demo");
    workspace.add_new_playground("Good");
    let bad = workspace.add_new_playground("Bad");
    bad.borrow_mut()
        .set_source(Source::Template("Missing".into()));
    workspace.add_new_playground("Never");

    let err = workspace
        .generate(&memory_context(fs.clone()))
        .unwrap_err();

    assert_eq!(err.target(), "Demo.xcworkspace/");
    match err.cause() {
        XgenError::Generation(inner) => {
            assert_eq!(inner.target(), "Demo.xcworkspace/Bad.playground/")
        }
        other => panic!("expected nested generation error, got {other:?}"),
    }
    assert!(matches!(err.root_cause(), XgenError::Filesystem { .. }));
    assert!(fs.exists(Path::new("Demo.xcworkspace/Good.playground/Contents.swift")));
    assert!(!fs.exists(Path::new("Demo.xcworkspace/Never.playground")));
    assert!(!fs.exists(Path::new("Demo.xcworkspace/contents.xcworkspacedata")));
}

#[test]
#[should_panic(expected = "does not point to an Xcode project")]
fn add_project_rejects_non_project_paths() {
    Workspace::new("Demo").add_project("App.xcworkspace");
}

#[test]
fn paths_are_normalized() {
    assert_eq!(Workspace::new("W").path(), "W.xcworkspace/");
    assert_eq!(Workspace::new("W.xcworkspace//").path(), "W.xcworkspace/");
    assert_eq!(Playground::new("P.playground").path(), "P.playground/");
}

// ============================================================================
// Local filesystem
// ============================================================================

#[test]
fn local_workspace_round_trip() {
    let temp = tempfile::TempDir::new().unwrap();
    let root = temp.path().join("Demo");
    let mut workspace = Workspace::new(root.to_string_lossy());
    workspace.add_project("App.xcodeproj");
    workspace
        .add_new_playground("Scratch")
        .borrow_mut()
        .set_platform(Platform::TvOs);

    workspace.generate(&local_context()).unwrap();

    let bundle = temp.path().join("Demo.xcworkspace");
    let data = std::fs::read_to_string(bundle.join("contents.xcworkspacedata")).unwrap();
    assert!(data.contains(r#"<FileRef location="group:App.xcodeproj"></FileRef>"#));
    assert_eq!(
        std::fs::read_to_string(bundle.join("Scratch.playground/Contents.swift")).unwrap(),
        "import UIKit\n\n"
    );
    assert!(
        bundle
            .join("Scratch.playground/playground.xcworkspace/contents.xcworkspacedata")
            .is_file()
    );
}

#[test]
fn local_template_with_sources() {
    let temp = tempfile::TempDir::new().unwrap();
    let template = temp.path().join("Mac.xctemplate");
    std::fs::create_dir_all(template.join("Main.playground/Sources")).unwrap();
    std::fs::write(
        template.join("TemplateInfo.plist"),
        descriptor_plist("com.apple.platform.macosx"),
    )
    .unwrap();
    std::fs::write(template.join("Main.playground/Contents.swift"), "import Cocoa\n").unwrap();
    std::fs::write(template.join("Main.playground/Sources/A.swift"), "let a = 1\n").unwrap();

    let target = temp.path().join("Out");
    let mut playground = Playground::new(target.to_string_lossy());
    playground
        .set_platform(Platform::MacOs)
        .set_source(Source::Template(template.to_string_lossy().into_owned()));

    let ctx = GenerationContext::new(
        Box::new(LocalFilesystem::new()),
        Box::new(xgen_adapters::PlistDecoder::new()),
    );
    playground.generate(&ctx).unwrap();

    let bundle = temp.path().join("Out.playground");
    assert_eq!(
        std::fs::read_to_string(bundle.join("Sources/A.swift")).unwrap(),
        "let a = 1\n"
    );
    assert_eq!(
        std::fs::read_to_string(bundle.join("Contents.swift")).unwrap(),
        "import Cocoa\n"
    );
}
