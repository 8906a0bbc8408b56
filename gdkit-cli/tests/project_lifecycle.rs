//! End-to-end tests for `init`, `show`, `rename`, `generate` and `diff`.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn gdkit(root: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gdkit"));
    cmd.arg("--root").arg(root).env_remove("RUST_LOG");
    cmd
}

fn init_demo(root: &Path) {
    gdkit(root)
        .args(["init", "demo", "--entry-symbol", "demo_entry"])
        .assert()
        .success()
        .stdout(contains("Initialized 'demo'"));
}

#[test]
fn init_lays_out_project_and_properties() {
    let tmp = TempDir::new().expect("tmp");
    init_demo(tmp.path());

    let project = tmp.path().join("demo");
    assert!(project.join("project.godot").is_file());
    let descriptor = fs::read_to_string(project.join("bin/demo.gdextension")).expect("descriptor");
    assert!(descriptor.contains("entry_symbol = \"demo_entry\""));
    assert!(descriptor.contains("windows.debug.x86_64 = \"res://bin/demo.windows.template_debug.x86_64.dll\""));

    assert_eq!(
        fs::read_to_string(tmp.path().join("properties.cfg")).expect("properties"),
        "[DEFAULT]\nprojectName = demo\nentrysymbol = demo_entry\n\n"
    );
}

#[test]
fn init_rejects_path_like_names() {
    let tmp = TempDir::new().expect("tmp");
    gdkit(tmp.path())
        .args(["init", "../escape"])
        .assert()
        .failure();
    assert!(!tmp.path().join("properties.cfg").exists());
}

#[test]
fn show_json_prints_identity() {
    let tmp = TempDir::new().expect("tmp");
    init_demo(tmp.path());

    let assert = gdkit(tmp.path()).args(["show", "--json"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(json["name"], "demo");
    assert_eq!(json["entry_symbol"], "demo_entry");
}

#[test]
fn show_without_properties_fails_with_missing_key() {
    let tmp = TempDir::new().expect("tmp");
    gdkit(tmp.path())
        .arg("show")
        .assert()
        .failure()
        .stderr(contains("Error:"))
        .stderr(contains("projectName"));
}

#[test]
fn properties_flag_overrides_default_location() {
    let tmp = TempDir::new().expect("tmp");
    let custom = tmp.path().join("custom.cfg");
    gdkit(tmp.path())
        .arg("--properties")
        .arg(&custom)
        .args(["init", "demo"])
        .assert()
        .success();

    assert!(custom.is_file());
    assert!(!tmp.path().join("properties.cfg").exists());
    gdkit(tmp.path())
        .arg("--properties")
        .arg(&custom)
        .arg("show")
        .assert()
        .success()
        .stdout(contains("default_entry_symbol"));
}

#[test]
fn rename_moves_directory_and_updates_everything() {
    let tmp = TempDir::new().expect("tmp");
    init_demo(tmp.path());
    fs::write(tmp.path().join("demo/bin/libdemo.so"), "elf").expect("artifact");

    gdkit(tmp.path())
        .args(["rename", "game"])
        .assert()
        .success()
        .stdout(contains("Renamed to 'game'"));

    let project = tmp.path().join("game");
    assert!(!tmp.path().join("demo").exists());
    let metadata = fs::read_to_string(project.join("project.godot")).expect("metadata");
    assert!(metadata.contains("name=\"game\""));

    let bin: Vec<_> = fs::read_dir(project.join("bin"))
        .expect("bin")
        .map(|e| e.expect("entry").file_name().into_string().expect("utf8"))
        .collect();
    assert_eq!(bin, vec!["game.gdextension".to_string()]);

    let properties = fs::read_to_string(tmp.path().join("properties.cfg")).expect("properties");
    assert!(properties.contains("projectName = game"));
    assert!(properties.contains("entrysymbol = demo_entry"));
}

#[test]
fn rename_onto_existing_directory_changes_nothing() {
    let tmp = TempDir::new().expect("tmp");
    init_demo(tmp.path());
    fs::create_dir_all(tmp.path().join("game")).expect("blocker");
    let properties_before = fs::read(tmp.path().join("properties.cfg")).expect("properties");

    gdkit(tmp.path())
        .args(["rename", "game"])
        .assert()
        .failure()
        .stderr(contains("destination already exists"));

    assert!(tmp.path().join("demo/bin/demo.gdextension").is_file());
    assert_eq!(
        fs::read(tmp.path().join("properties.cfg")).expect("properties"),
        properties_before
    );
}

#[test]
fn generate_clears_bin_and_writes_descriptor() {
    let tmp = TempDir::new().expect("tmp");
    init_demo(tmp.path());
    let bin = tmp.path().join("demo/bin");
    fs::write(bin.join("stale.gdextension"), "old").expect("stale");

    gdkit(tmp.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(contains("Regenerated 'demo' descriptor"));

    assert!(!bin.join("stale.gdextension").exists());
    assert!(bin.join("demo.gdextension").is_file());
}

#[test]
fn diff_reports_changed_entry_symbol() {
    let tmp = TempDir::new().expect("tmp");
    init_demo(tmp.path());

    gdkit(tmp.path())
        .arg("diff")
        .assert()
        .success()
        .stdout(contains("No differences for 'demo'."));

    fs::write(
        tmp.path().join("properties.cfg"),
        "[DEFAULT]\nprojectName = demo\nentrysymbol = other_entry\n",
    )
    .expect("edit properties");

    let assert = gdkit(tmp.path()).arg("diff").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert!(stdout.lines().any(|l| l == "-entry_symbol = \"demo_entry\""));
    assert!(stdout.lines().any(|l| l == "+entry_symbol = \"other_entry\""));

    // diff is read-only
    let descriptor =
        fs::read_to_string(tmp.path().join("demo/bin/demo.gdextension")).expect("descriptor");
    assert!(descriptor.contains("demo_entry"));
}

#[test]
fn template_override_is_used_for_generation() {
    let tmp = TempDir::new().expect("tmp");
    let templates = TempDir::new().expect("templates");
    fs::write(
        templates.path().join("descriptor.gdextension.tera"),
        "entry_symbol = \"{{ entry_symbol }}\"\n",
    )
    .expect("template");

    gdkit(tmp.path())
        .arg("--templates")
        .arg(templates.path())
        .args(["init", "demo", "--entry-symbol", "custom_init"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(tmp.path().join("demo/bin/demo.gdextension")).expect("descriptor"),
        "entry_symbol = \"custom_init\"\n"
    );
}
