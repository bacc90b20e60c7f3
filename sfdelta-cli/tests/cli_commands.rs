use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const CATALOG: &str = r#"[
    {"directoryName": "classes", "xmlName": "ApexClass"},
    {"directoryName": "objects", "xmlName": "CustomObject", "childXmlNames": ["CustomField"]},
    {"directoryName": "fields", "xmlName": "CustomField"},
    {"directoryName": "reports", "xmlName": "Report", "inFolder": true}
]"#;

fn sfdelta_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sfdelta"));
    cmd.current_dir(cwd).env("RUST_LOG", "info");
    cmd
}

fn workspace() -> TempDir {
    let dir = TempDir::new().expect("workspace");
    fs::write(dir.path().join("metadata.json"), CATALOG).expect("write catalog");
    dir
}

#[test]
fn resolve_json_reports_types_and_members() {
    let dir = workspace();
    let assert = sfdelta_cmd(dir.path())
        .args([
            "resolve",
            "--format",
            "json",
            "-d",
            "force-app/main/default",
            "force-app/main/default/classes/Foo.cls",
            "force-app/main/default/objects/Account/fields/MyField.field-meta.xml",
            "force-app/main/default/reports/MyFolder/MyReport.report-meta.xml",
            "force-app/main/default/widgets/W.widget",
        ])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let rows: serde_json::Value = serde_json::from_str(&stdout).expect("json");
    let rows = rows.as_array().expect("array");

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["type"], "ApexClass");
    assert_eq!(rows[0]["member"], "Foo");
    assert_eq!(rows[1]["type"], "CustomField");
    assert_eq!(rows[1]["member"], "Account.MyField");
    assert_eq!(rows[2]["member"], "MyFolder/MyReport");
    assert!(rows[3]["type"].is_null());
    assert!(rows[3]["error"].as_str().expect("error").contains("widgets"));
}

#[test]
fn resolve_uses_project_descriptor_by_default() {
    let dir = workspace();
    fs::write(
        dir.path().join("sfdx-project.json"),
        r#"{"packageDirectories": [{"path": "force-app/main/default", "default": true}]}"#,
    )
    .expect("write project");

    sfdelta_cmd(dir.path())
        .args(["resolve", "force-app/main/default/classes/Foo.cls"])
        .assert()
        .success()
        .stdout(contains("ApexClass"))
        .stdout(contains("Foo"));
}

#[test]
fn resolve_without_project_descriptor_fails() {
    let dir = workspace();
    sfdelta_cmd(dir.path())
        .args(["resolve", "force-app/main/default/classes/Foo.cls"])
        .assert()
        .failure()
        .stderr(contains("sfdx-project.json"));
}

#[test]
fn delta_with_missing_catalog_fails_before_diffing() {
    let dir = TempDir::new().expect("workspace");
    sfdelta_cmd(dir.path())
        .args(["delta", "-f", "HEAD~1", "-t", "HEAD", "-d", "force-app"])
        .assert()
        .failure()
        .stderr(contains("metadata.json"));
    assert!(!dir.path().join("package.xml").exists());
}

#[test]
fn delta_outside_a_repository_fails() {
    let dir = workspace();
    let repo = TempDir::new().expect("not a repo");
    sfdelta_cmd(dir.path())
        .args(["delta", "-f", "HEAD~1", "-t", "HEAD", "-d", "force-app", "--repo"])
        .arg(repo.path())
        .assert()
        .failure()
        .stderr(contains("delta failed"));
    assert!(!dir.path().join("package.xml").exists());
    assert!(!dir.path().join("destructiveChanges").exists());
}

#[test]
fn resolve_requires_paths() {
    let dir = workspace();
    sfdelta_cmd(dir.path()).arg("resolve").assert().failure();
}
