//! End-to-end tests driving the built `luau-syntax-check` and `luau-fix`
//! binaries over real bundle files on disk.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn check_bin() -> Command {
    Command::cargo_bin("luau-syntax-check").expect("binary built")
}

fn fix_bin() -> Command {
    Command::cargo_bin("luau-fix").expect("binary built")
}

#[test]
fn syntax_check_reports_clean_scan_for_valid_scripts() {
    let dir = TempDir::new().unwrap();
    let bundle_path = dir.path().join("bundle.json");
    let report_path = dir.path().join("report.json");
    std::fs::write(&bundle_path, r#"[{"path": "a.lua", "content": "local x = 1\n"}]"#).unwrap();

    check_bin().arg(&bundle_path).arg(&report_path).assert().success();

    let report = std::fs::read_to_string(&report_path).unwrap();
    assert_eq!(report, "Scan complete. 0 issue(s) found.\n");
}

#[test]
fn syntax_check_reports_diagnostics_for_broken_script() {
    let dir = TempDir::new().unwrap();
    let bundle_path = dir.path().join("bundle.json");
    let report_path = dir.path().join("report.json");
    std::fs::write(&bundle_path, r#"[{"path": "a.lua", "content": "local x = "}]"#).unwrap();

    check_bin().arg(&bundle_path).arg(&report_path).assert().success();

    let report = std::fs::read_to_string(&report_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(parsed[0]["path"], "a.lua");
}

#[test]
fn syntax_check_exits_with_argument_error_when_paths_missing() {
    check_bin().assert().failure().code(1);
}

#[test]
fn syntax_check_exits_with_error_on_unreadable_bundle() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");
    let report_path = dir.path().join("report.json");

    check_bin()
        .arg(&missing)
        .arg(&report_path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn fix_repairs_targeted_script_and_writes_summary() {
    let dir = TempDir::new().unwrap();
    let bundle_path = dir.path().join("bundle.json");
    let diagnostics_path = dir.path().join("diagnostics.json");
    let out_bundle_path = dir.path().join("fixed.json");
    let out_diagnostics_path = dir.path().join("summary.json");

    std::fs::write(&bundle_path, r#"[{"path": "a.lua", "content": "local t = {1, 2"}]"#).unwrap();
    std::fs::write(&diagnostics_path, r#"[{"path": "a.lua", "line": 1, "message": "x", "snippet": ""}]"#).unwrap();

    fix_bin()
        .arg("--bundle")
        .arg(&bundle_path)
        .arg("--diagnostics")
        .arg(&diagnostics_path)
        .arg("--out-bundle")
        .arg(&out_bundle_path)
        .arg("--out-diagnostics")
        .arg(&out_diagnostics_path)
        .assert()
        .success();

    let fixed_bundle: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out_bundle_path).unwrap()).unwrap();
    assert_eq!(fixed_bundle[0]["content"], "local t = {1, 2\n}");

    let summary: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out_diagnostics_path).unwrap()).unwrap();
    assert_eq!(summary["fixedFiles"][0], "a.lua");
    assert!(summary["remainingDiagnostics"].as_array().unwrap().is_empty());
}

#[test]
fn fix_leaves_untargeted_scripts_untouched() {
    let dir = TempDir::new().unwrap();
    let bundle_path = dir.path().join("bundle.json");
    let diagnostics_path = dir.path().join("diagnostics.json");
    let out_bundle_path = dir.path().join("fixed.json");
    let out_diagnostics_path = dir.path().join("summary.json");

    std::fs::write(
        &bundle_path,
        r#"[{"path": "a.lua", "content": "local t = {1, 2"}, {"path": "b.lua", "content": "local u = {3, 4"}]"#,
    )
    .unwrap();
    std::fs::write(&diagnostics_path, r#"[{"path": "a.lua", "line": 1, "message": "x", "snippet": ""}]"#).unwrap();

    fix_bin()
        .arg("--bundle")
        .arg(&bundle_path)
        .arg("--diagnostics")
        .arg(&diagnostics_path)
        .arg("--out-bundle")
        .arg(&out_bundle_path)
        .arg("--out-diagnostics")
        .arg(&out_diagnostics_path)
        .assert()
        .success();

    let fixed_bundle: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out_bundle_path).unwrap()).unwrap();
    assert_eq!(fixed_bundle[1]["content"], "local u = {3, 4");
}

#[test]
fn fix_targets_every_script_when_diagnostics_file_is_absent() {
    let dir = TempDir::new().unwrap();
    let bundle_path = dir.path().join("bundle.json");
    let out_bundle_path = dir.path().join("fixed.json");
    let out_diagnostics_path = dir.path().join("summary.json");

    std::fs::write(&bundle_path, r#"[{"path": "a.lua", "content": "local t = {1, 2"}]"#).unwrap();

    fix_bin()
        .arg("--bundle")
        .arg(&bundle_path)
        .arg("--diagnostics")
        .arg(dir.path().join("does-not-exist.json"))
        .arg("--out-bundle")
        .arg(&out_bundle_path)
        .arg("--out-diagnostics")
        .arg(&out_diagnostics_path)
        .assert()
        .success();

    let fixed_bundle: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out_bundle_path).unwrap()).unwrap();
    assert_eq!(fixed_bundle[0]["content"], "local t = {1, 2\n}");
}

#[test]
fn syntax_check_help_mentions_usage() {
    check_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}
