//! End-to-end tests for the blaze-libsync binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_inputs(dir: &Path) {
    fs::write(
        dir.join("config.json"),
        r#"{ "workspace_root": "/ws", "execution_root": "/exec", "externally_added_libraries": ["android-sdk"] }"#,
    )
    .unwrap();
    fs::write(
        dir.join("desired.json"),
        r#"[
            { "name": "guava", "class_jar": { "relative_path": "third_party/guava.jar", "is_source": true } },
            { "name": "junit", "class_jar": { "root_path": "bazel-out/bin", "relative_path": "junit.jar" } }
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.join("libraries.json"),
        r#"{ "libraries": {
            "stale": { "classes": ["jar:///old.jar!/"] },
            "android-sdk": { "classes": ["jar:///sdk/android.jar!/"] }
        } }"#,
    )
    .unwrap();
}

fn sync_args(dir: &Path) -> Vec<String> {
    vec![
        "--table".to_string(),
        dir.join("libraries.json").display().to_string(),
        "--desired".to_string(),
        dir.join("desired.json").display().to_string(),
        "--config".to_string(),
        dir.join("config.json").display().to_string(),
    ]
}

#[test]
fn test_plan_lists_mutations() {
    let temp_dir = TempDir::new().unwrap();
    write_inputs(temp_dir.path());

    Command::cargo_bin("blaze-libsync")
        .unwrap()
        .arg("plan")
        .args(sync_args(temp_dir.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE guava"))
        .stdout(predicate::str::contains("CREATE junit"))
        .stdout(predicate::str::contains("REMOVE stale"))
        .stdout(predicate::str::contains("android-sdk").not());
}

#[test]
fn test_reconcile_rewrites_table() {
    let temp_dir = TempDir::new().unwrap();
    write_inputs(temp_dir.path());

    Command::cargo_bin("blaze-libsync")
        .unwrap()
        .arg("reconcile")
        .args(sync_args(temp_dir.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created 2, updated 0, removed 1 libraries (kept 1 externally added)",
        ));

    let table: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp_dir.path().join("libraries.json")).unwrap())
            .unwrap();
    let libraries = table["libraries"].as_object().unwrap();
    assert!(libraries.contains_key("guava"));
    assert!(libraries.contains_key("android-sdk"));
    assert!(!libraries.contains_key("stale"));
    assert_eq!(
        libraries["junit"]["classes"][0],
        "jar:///exec/bazel-out/bin/junit.jar!/"
    );
}

#[test]
fn test_wire_reports_missing_libraries() {
    let temp_dir = TempDir::new().unwrap();
    write_inputs(temp_dir.path());

    Command::cargo_bin("blaze-libsync")
        .unwrap()
        .arg("wire")
        .args(sync_args(temp_dir.path()))
        .args(["--modules", "app,external-guava-src", "--external"])
        .assert()
        .success()
        .stdout(predicate::str::contains("module  external-guava-src"))
        .stderr(predicate::str::contains(
            "Library missing: guava. Please resync project to resolve.",
        ));
}

#[test]
fn test_schema_shows_implicit_name_attribute() {
    let temp_dir = TempDir::new().unwrap();
    let schema = temp_dir.path().join("build_language.json");
    fs::write(
        &schema,
        r#"{ "rule": [ { "name": "java_import", "attribute": [ { "name": "jars", "type": "LABEL_LIST" } ] } ] }"#,
    )
    .unwrap();

    Command::cargo_bin("blaze-libsync")
        .unwrap()
        .args(["schema", "--file"])
        .arg(&schema)
        .args(["--rule", "java_import", "--attribute", "name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("type:      String"))
        .stdout(predicate::str::contains("mandatory: true"))
        .stdout(predicate::str::contains("default:   <none>"));
}

#[test]
fn test_settings_round_trip() {
    let temp_dir = TempDir::new().unwrap();

    Command::cargo_bin("blaze-libsync")
        .unwrap()
        .args(["settings", "--dir"])
        .arg(temp_dir.path())
        .args(["--set-local-sdk", "/opt/android-sdk"])
        .assert()
        .success();

    Command::cargo_bin("blaze-libsync")
        .unwrap()
        .args(["settings", "--dir"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("/opt/android-sdk"));
}

#[test]
fn test_plan_json_output() {
    let temp_dir = TempDir::new().unwrap();
    write_inputs(temp_dir.path());

    let output = Command::cargo_bin("blaze-libsync")
        .unwrap()
        .arg("plan")
        .args(sync_args(temp_dir.path()))
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let mutations: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        mutations,
        serde_json::json!([
            { "action": "create", "name": "guava" },
            { "action": "create", "name": "junit" },
            { "action": "remove", "name": "stale" },
        ])
    );
}

#[test]
fn test_schema_rule_listing_marks_labels_and_lists() {
    let temp_dir = TempDir::new().unwrap();
    let schema = temp_dir.path().join("build_language.json");
    fs::write(
        &schema,
        r#"{ "rule": [ { "name": "java_library", "attribute": [
            { "name": "deps", "type": "LABEL_LIST" },
            { "name": "javacopts", "type": "STRING_LIST" },
            { "name": "$java_toolchain", "type": "LABEL" },
            { "name": "neverlink", "type": "BOOLEAN" }
        ] } ] }"#,
    )
    .unwrap();

    Command::cargo_bin("blaze-libsync")
        .unwrap()
        .args(["schema", "--file"])
        .arg(&schema)
        .args(["--rule", "java_library"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deps: LabelList [label list]"))
        .stdout(predicate::str::contains("javacopts: StringList [list]"))
        .stdout(predicate::str::contains("$java_toolchain: Label [label]"))
        .stdout(predicate::str::contains("neverlink: Boolean\n"))
        .stdout(predicate::str::contains("name: String (mandatory)"));
}
