use gdkit_core::{EntrySymbol, ProjectIdentity, ProjectName};
use gdkit_renderer::{Renderer, LIBRARY_MATRIX};
use rstest::rstest;

fn identity(name: &str, symbol: &str) -> ProjectIdentity {
    ProjectIdentity::new(ProjectName::from(name), EntrySymbol::from(symbol))
}

const DEMO_DESCRIPTOR: &str = r#"[configuration]

entry_symbol = "demo_entry"
compatibility_minimum = "4.2"
reloadable = true

[libraries]

macos.debug = "res://bin/demo.macos.template_debug.framework"
macos.release = "res://bin/demo.macos.template_release.framework"
windows.debug.x86_32 = "res://bin/demo.windows.template_debug.x86_32.dll"
windows.release.x86_32 = "res://bin/demo.windows.template_release.x86_32.dll"
windows.debug.x86_64 = "res://bin/demo.windows.template_debug.x86_64.dll"
windows.release.x86_64 = "res://bin/demo.windows.template_release.x86_64.dll"
linux.debug.x86_64 = "res://bin/demo.linux.template_debug.x86_64.so"
linux.release.x86_64 = "res://bin/demo.linux.template_release.x86_64.so"
linux.debug.arm64 = "res://bin/demo.linux.template_debug.arm64.so"
linux.release.arm64 = "res://bin/demo.linux.template_release.arm64.so"
linux.debug.rv64 = "res://bin/demo.linux.template_debug.rv64.so"
linux.release.rv64 = "res://bin/demo.linux.template_release.rv64.so"
android.debug.x86_64 = "res://bin/demo.android.template_debug.x86_64.so"
android.release.x86_64 = "res://bin/demo.android.template_release.x86_64.so"
android.debug.arm64 = "res://bin/demo.android.template_debug.arm64.so"
android.release.arm64 = "res://bin/demo.android.template_release.arm64.so"
"#;

#[test]
fn demo_descriptor_matches_expected_text() {
    let renderer = Renderer::new().expect("renderer");
    let out = renderer.descriptor(&identity("demo", "demo_entry")).expect("render");
    assert_eq!(out, DEMO_DESCRIPTOR);
}

#[test]
fn demo_descriptor_has_single_windows_debug_x86_64_entry() {
    let renderer = Renderer::new().unwrap();
    let out = renderer.descriptor(&identity("demo", "demo_entry")).unwrap();

    assert!(out.lines().any(|l| l == r#"entry_symbol = "demo_entry""#));
    let matches: Vec<&str> = out
        .lines()
        .filter(|l| l.starts_with("windows.debug.x86_64 = "))
        .collect();
    assert_eq!(
        matches,
        vec![r#"windows.debug.x86_64 = "res://bin/demo.windows.template_debug.x86_64.dll""#]
    );
}

#[test]
fn every_matrix_row_appears_exactly_once() {
    let renderer = Renderer::new().unwrap();
    let name = ProjectName::from("game");
    let out = renderer.descriptor(&identity("game", "game_init")).unwrap();

    for target in LIBRARY_MATRIX {
        let line = format!("{} = \"{}\"", target.key(), target.resource_path(&name));
        assert_eq!(
            out.lines().filter(|l| *l == line).count(),
            1,
            "expected exactly one line for {}",
            target.key()
        );
    }
}

#[test]
fn generation_is_deterministic_across_renderers() {
    let id = identity("demo", "demo_entry");
    let a = Renderer::new().unwrap().descriptor(&id).unwrap();
    let b = Renderer::new().unwrap().descriptor(&id).unwrap();
    let renderer = Renderer::new().unwrap();
    let c = renderer.descriptor(&id).unwrap();
    let d = renderer.descriptor(&id).unwrap();
    assert_eq!(a, b);
    assert_eq!(c, d);
    assert_eq!(a, c);
}

#[rstest]
#[case(identity("other", "demo_entry"))]
#[case(identity("demo", "other_entry"))]
fn changing_either_input_changes_output(#[case] changed: ProjectIdentity) {
    let renderer = Renderer::new().unwrap();
    let base = renderer.descriptor(&identity("demo", "demo_entry")).unwrap();
    let other = renderer.descriptor(&changed).unwrap();
    assert_ne!(base, other);
}

#[test]
fn no_crlf_in_rendered_output() {
    let renderer = Renderer::new().unwrap();
    let out = renderer.descriptor(&identity("demo", "demo_entry")).unwrap();
    let project = renderer.project_metadata(&ProjectName::from("demo")).unwrap();
    assert!(!out.contains('\r'));
    assert!(!project.contains('\r'));
}
