//! CLI tests for the `addfiles` binary.
//!
//! Spawns the binary against temporary base directories and verifies the
//! checklist, the instruction block, and exit codes.

use std::process::{Command, Output};

use addfiles::exit_codes;
use addfiles::io::config::{AddFilesConfig, load_config, write_config};
use addfiles::test_support::Fixture;
use serde_json::Value;

fn addfiles(fixture: &Fixture, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_addfiles"))
        .current_dir(fixture.path())
        .args(args)
        .output()
        .expect("run addfiles")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

fn entry_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| {
            line.starts_with("  ✅") || line.starts_with("  ❌") || line.starts_with("  ⚠️")
        })
        .map(str::to_string)
        .collect()
}

#[test]
fn all_present_exits_ok_with_instructions() {
    let fixture = Fixture::new().expect("fixture");
    fixture.touch("a.txt").expect("touch");
    fixture.touch("b.txt").expect("touch");
    let base = fixture.path().to_str().expect("utf8 path").to_string();

    let output = addfiles(&fixture, &["--base-dir", &base, "a.txt", "b.txt"]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(entry_lines(&text), vec!["  ✅ a.txt", "  ✅ b.txt"]);
    assert!(text.contains("\n\n📝"));
    assert!(text.contains("   - a.txt"));
    assert!(text.contains("   - b.txt"));
    assert!(text.trim_end().ends_with("6. Then run: ./sync-xcode.sh"));
}

#[test]
fn one_missing_exits_missing_without_instructions() {
    let fixture = Fixture::new().expect("fixture");
    fixture.touch("a.txt").expect("touch");
    let base = fixture.path().to_str().expect("utf8 path").to_string();

    let output = addfiles(&fixture, &["--base-dir", &base, "a.txt", "b.txt"]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(exit_codes::MISSING));
    assert_eq!(
        entry_lines(&text),
        vec!["  ✅ a.txt", "  ❌ b.txt - MISSING FILE"]
    );
    assert!(!text.contains("MANUAL XCODE INSTRUCTIONS"));
}

#[test]
fn directory_entry_is_reported_missing() {
    let fixture = Fixture::new().expect("fixture");
    fixture.mkdir("Views.swift").expect("mkdir");
    let base = fixture.path().to_str().expect("utf8 path").to_string();

    let output = addfiles(&fixture, &["--base-dir", &base, "Views.swift"]);

    assert_eq!(output.status.code(), Some(exit_codes::MISSING));
    assert_eq!(
        entry_lines(&stdout(&output)),
        vec!["  ❌ Views.swift - MISSING FILE"]
    );
}

#[test]
fn config_file_drives_manifest_and_guide() {
    let fixture = Fixture::new().expect("fixture");
    fixture.touch("App/One.swift").expect("touch");
    fixture.touch("App/Two.swift").expect("touch");

    let mut cfg = AddFilesConfig {
        base_dir: fixture.path().to_path_buf(),
        files: vec!["App/Two.swift".to_string(), "App/One.swift".to_string()],
        ..AddFilesConfig::default()
    };
    cfg.guide.group = "App".to_string();
    cfg.guide.follow_up = "make sync".to_string();
    write_config(&fixture.path().join("addfiles.toml"), &cfg).expect("write config");

    let output = addfiles(&fixture, &[]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        entry_lines(&text),
        vec!["  ✅ App/Two.swift", "  ✅ App/One.swift"]
    );
    assert!(text.contains("right-click the 'App' folder"));
    assert!(text.contains("   - Two.swift\n   - One.swift\n"));
    assert!(text.contains("6. Then run: make sync"));
}

#[test]
fn empty_manifest_succeeds_vacuously() {
    let fixture = Fixture::new().expect("fixture");
    let cfg = AddFilesConfig {
        base_dir: fixture.path().to_path_buf(),
        files: Vec::new(),
        ..AddFilesConfig::default()
    };
    write_config(&fixture.path().join("addfiles.toml"), &cfg).expect("write config");

    let output = addfiles(&fixture, &[]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(entry_lines(&stdout(&output)).is_empty());
}

#[test]
fn absolute_entry_is_rejected_as_invalid() {
    let fixture = Fixture::new().expect("fixture");
    let base = fixture.path().to_str().expect("utf8 path").to_string();

    let output = addfiles(&fixture, &["--base-dir", &base, "/etc/hosts"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(stdout(&output).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must be a relative path"));
}

#[test]
fn malformed_config_is_rejected_as_invalid() {
    let fixture = Fixture::new().expect("fixture");
    std::fs::write(fixture.path().join("addfiles.toml"), "files = 3\n").expect("write");

    let output = addfiles(&fixture, &[]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("parse"));
}

#[test]
fn json_report_matches_exit_code() {
    let fixture = Fixture::new().expect("fixture");
    fixture.touch("a.txt").expect("touch");
    let base = fixture.path().to_str().expect("utf8 path").to_string();

    let output = addfiles(&fixture, &["--base-dir", &base, "--json", "a.txt", "b.txt"]);

    assert_eq!(output.status.code(), Some(exit_codes::MISSING));
    let value: Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(value["ok"], Value::Bool(false));
    let statuses: Vec<&str> = value["results"]
        .as_array()
        .expect("results array")
        .iter()
        .map(|row| row["status"].as_str().expect("status"))
        .collect();
    assert_eq!(statuses, vec!["present", "missing"]);
}

#[test]
fn repeated_runs_give_identical_output() {
    let fixture = Fixture::new().expect("fixture");
    fixture.touch("a.txt").expect("touch");
    let base = fixture.path().to_str().expect("utf8 path").to_string();
    let args = ["--base-dir", base.as_str(), "a.txt", "b.txt"];

    let first = addfiles(&fixture, &args);
    let second = addfiles(&fixture, &args);

    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn init_writes_default_config_once() {
    let fixture = Fixture::new().expect("fixture");
    let path = fixture.path().join("addfiles.toml");

    let output = addfiles(&fixture, &["--init"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(load_config(&path).expect("load"), AddFilesConfig::default());

    let edited = AddFilesConfig {
        files: vec!["only.swift".to_string()],
        ..AddFilesConfig::default()
    };
    write_config(&path, &edited).expect("write config");

    let output = addfiles(&fixture, &["--init"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout(&output).contains("config exists"));
    assert_eq!(load_config(&path).expect("load"), edited);

    let output = addfiles(&fixture, &["--init", "--force"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(load_config(&path).expect("load"), AddFilesConfig::default());
}

#[test]
fn missing_file_named_init_is_checked_not_run() {
    let fixture = Fixture::new().expect("fixture");
    let base = fixture.mkdir("project").expect("mkdir");
    let base = base.to_str().expect("utf8 path").to_string();

    let output = addfiles(&fixture, &["--base-dir", &base, "init"]);

    assert_eq!(output.status.code(), Some(exit_codes::MISSING));
    assert_eq!(
        entry_lines(&stdout(&output)),
        vec!["  ❌ init - MISSING FILE"]
    );
    assert!(!fixture.path().join("addfiles.toml").exists());
}

#[test]
fn present_file_named_init_passes_without_writing_config() {
    let fixture = Fixture::new().expect("fixture");
    fixture.touch("project/init").expect("touch");
    let base = fixture.path().join("project");
    let base = base.to_str().expect("utf8 path").to_string();

    let output = addfiles(&fixture, &["--base-dir", &base, "init"]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(entry_lines(&text), vec!["  ✅ init"]);
    assert!(text.contains("   - init"));
    assert!(!fixture.path().join("addfiles.toml").exists());
}

#[test]
fn init_flag_rejects_files_to_check() {
    let fixture = Fixture::new().expect("fixture");

    let output = addfiles(&fixture, &["--init", "a.txt"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(!fixture.path().join("addfiles.toml").exists());
}

#[cfg(unix)]
#[test]
fn unreadable_entry_is_reported_in_text_and_json() {
    let fixture = Fixture::new().expect("fixture");
    fixture.touch("a.txt").expect("touch");
    let base = fixture.path().to_str().expect("utf8 path").to_string();
    let long = "y".repeat(300);

    let output = addfiles(&fixture, &["--base-dir", &base, "a.txt", &long]);
    assert_eq!(output.status.code(), Some(exit_codes::MISSING));
    let lines = entry_lines(&stdout(&output));
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "  ✅ a.txt");
    assert!(lines[1].contains(" - UNREADABLE ("));

    let output = addfiles(&fixture, &["--base-dir", &base, "--json", "a.txt", &long]);
    assert_eq!(output.status.code(), Some(exit_codes::MISSING));
    let value: Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(value["ok"], Value::Bool(false));
    assert!(value["results"][0].get("error").is_none());
    assert_eq!(value["results"][1]["path"], long.as_str());
    assert_eq!(value["results"][1]["status"], "unreadable");
    let error = value["results"][1]["error"].as_str().expect("error string");
    assert!(!error.is_empty());
}
