// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

const BUILTIN_JSON: &str = include_str!("../../adbench-model/data/ksa_charity.json");

/// Runs the binary with config lookup and dataset env pinned inside `home`.
fn adbench(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_adbench"));
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("xdg"))
        .env_remove("ADBENCH_CONFIG")
        .env_remove("ADBENCH_DATASET")
        .env_remove("ADBENCH_LOG_JSON")
        .env_remove("ADBENCH_LOG_LEVEL");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    let text = String::from_utf8(output.stdout.clone()).expect("utf8 stdout");
    serde_json::from_str(text.trim()).expect("json stdout")
}

fn stderr_json(output: &std::process::Output) -> Value {
    let text = String::from_utf8(output.stderr.clone()).expect("utf8 stderr");
    let line = text.lines().last().expect("stderr line");
    serde_json::from_str(line).expect("json stderr")
}

#[test]
fn view_defaults_to_overview() {
    let home = TempDir::new().expect("tempdir");
    let output = adbench(home.path())
        .args(["--json", "view"])
        .output()
        .expect("run view");
    assert!(output.status.success());
    let body = stdout_json(&output);
    assert_eq!(body["active"], "overview");
    assert_eq!(body["section"]["view"], "overview");
    let tabs = body["tabs"].as_array().expect("tabs");
    assert_eq!(tabs.len(), 4);
    assert_eq!(tabs.iter().filter(|t| t["active"] == true).count(), 1);
}

#[test]
fn view_tab_flag_selects_section() {
    let home = TempDir::new().expect("tempdir");
    let output = adbench(home.path())
        .args(["--json", "view", "--tab", "insights"])
        .output()
        .expect("run view");
    assert!(output.status.success());
    let body = stdout_json(&output);
    assert_eq!(body["active"], "insights");
    assert!(body["section"]["data"]["strengths"].is_array());
}

#[test]
fn dashboard_lists_three_platforms_with_four_metrics() {
    let home = TempDir::new().expect("tempdir");
    let output = adbench(home.path())
        .args(["--json", "dashboard"])
        .output()
        .expect("run dashboard");
    assert!(output.status.success());
    let body = stdout_json(&output);
    let platforms = body["platforms"]["platforms"].as_array().expect("platforms");
    let names: Vec<&str> = platforms
        .iter()
        .map(|p| p["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, ["Snapchat", "Meta", "TikTok"]);
    for block in platforms {
        assert_eq!(block["metrics"].as_array().expect("metrics").len(), 4);
    }
}

#[test]
fn compare_rounds_half_away_from_zero() {
    let home = TempDir::new().expect("tempdir");
    let output = adbench(home.path())
        .args([
            "--json",
            "compare",
            "--measured",
            "0.83",
            "--benchmark",
            "1.1",
            "--better",
            "higher",
        ])
        .output()
        .expect("run compare");
    assert!(output.status.success());
    let body = stdout_json(&output);
    assert_eq!(body["display_percent"], -25);
    assert_eq!(body["favorable"], false);
    assert_eq!(body["badge"], "25% below benchmark");
}

#[test]
fn compare_zero_benchmark_is_a_validation_error() {
    let home = TempDir::new().expect("tempdir");
    let output = adbench(home.path())
        .args(["--json", "compare", "--measured", "1", "--benchmark", "0"])
        .output()
        .expect("run compare");
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stderr_json(&output)["code"], "validation_error");
}

#[test]
fn dataset_validate_reports_bad_file_as_validation_failure() {
    let home = TempDir::new().expect("tempdir");
    let path = home.path().join("broken.json");
    std::fs::write(&path, r#"{"title": "only a title"}"#).expect("write dataset");
    let output = adbench(home.path())
        .args(["--json", "dataset", "validate", "--path"])
        .arg(&path)
        .output()
        .expect("run validate");
    assert_eq!(output.status.code(), Some(3));
    let machine = stderr_json(&output);
    assert_eq!(machine["code"], "validation_error");
    assert_eq!(machine["details"]["dataset"], path.display().to_string());
}

#[test]
fn dataset_validate_missing_file_is_dependency_failure() {
    let home = TempDir::new().expect("tempdir");
    let output = adbench(home.path())
        .args(["--json", "dataset", "validate", "--path", "absent.json"])
        .output()
        .expect("run validate");
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn dataset_validate_rejects_unknown_extension() {
    let home = TempDir::new().expect("tempdir");
    let path = home.path().join("dataset.txt");
    std::fs::write(&path, BUILTIN_JSON).expect("write dataset");
    let output = adbench(home.path())
        .args(["--json", "dataset", "validate", "--path"])
        .arg(&path)
        .output()
        .expect("run validate");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn fingerprint_of_copied_builtin_matches_builtin() {
    let home = TempDir::new().expect("tempdir");
    let path = home.path().join("copy.json");
    std::fs::write(&path, BUILTIN_JSON).expect("write dataset");

    let builtin = adbench(home.path())
        .args(["--json", "dataset", "fingerprint"])
        .output()
        .expect("run fingerprint");
    let copied = adbench(home.path())
        .args(["--json", "--dataset"])
        .arg(&path)
        .args(["dataset", "fingerprint"])
        .output()
        .expect("run fingerprint");
    assert!(builtin.status.success());
    assert!(copied.status.success());
    let builtin = stdout_json(&builtin);
    let copied = stdout_json(&copied);
    assert_eq!(builtin["source"], "builtin");
    assert_eq!(builtin["sha256"].as_str().map(str::len), Some(64));
    assert_eq!(builtin["sha256"], copied["sha256"]);
}

#[test]
fn dataset_flag_beats_environment() {
    let home = TempDir::new().expect("tempdir");
    let path = home.path().join("flag.json");
    std::fs::write(&path, BUILTIN_JSON).expect("write dataset");
    let output = adbench(home.path())
        .env("ADBENCH_DATASET", home.path().join("missing.json"))
        .args(["--json", "--dataset"])
        .arg(&path)
        .args(["dataset", "validate"])
        .output()
        .expect("run validate");
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["source"], path.display().to_string());
}

#[test]
fn environment_dataset_is_used_without_flag() {
    let home = TempDir::new().expect("tempdir");
    let output = adbench(home.path())
        .env("ADBENCH_DATASET", home.path().join("missing.json"))
        .args(["--json", "dashboard"])
        .output()
        .expect("run dashboard");
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn workspace_config_sets_default_tab_and_dataset() {
    let home = TempDir::new().expect("tempdir");
    let dataset = home.path().join("from-config.json");
    std::fs::write(&dataset, BUILTIN_JSON).expect("write dataset");
    std::fs::create_dir_all(home.path().join(".adbench")).expect("config dir");
    std::fs::write(
        home.path().join(".adbench/config.toml"),
        format!(
            "dataset = {:?}\ndefault_tab = \"platforms\"\n",
            dataset.display().to_string()
        ),
    )
    .expect("write config");

    let view = adbench(home.path())
        .args(["--json", "view"])
        .output()
        .expect("run view");
    assert!(view.status.success());
    assert_eq!(stdout_json(&view)["active"], "platforms");

    let validate = adbench(home.path())
        .args(["--json", "dataset", "validate"])
        .output()
        .expect("run validate");
    assert!(validate.status.success());
    assert_eq!(stdout_json(&validate)["source"], dataset.display().to_string());
}

#[test]
fn config_with_unknown_key_is_rejected() {
    let home = TempDir::new().expect("tempdir");
    std::fs::create_dir_all(home.path().join(".adbench")).expect("config dir");
    std::fs::write(home.path().join(".adbench/config.toml"), "theme = \"dark\"\n")
        .expect("write config");
    let output = adbench(home.path())
        .args(["--json", "view"])
        .output()
        .expect("run view");
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn print_config_paths_honours_explicit_config_env() {
    let home = TempDir::new().expect("tempdir");
    let explicit = home.path().join("custom.toml");
    let output = adbench(home.path())
        .env("ADBENCH_CONFIG", &explicit)
        .args(["--json", "--print-config-paths"])
        .output()
        .expect("run print-config-paths");
    assert!(output.status.success());
    let body = stdout_json(&output);
    assert_eq!(body["user"], explicit.display().to_string());
    assert_eq!(body["workspace"], ".adbench/config.toml");
}
