use std::path::Path;
use std::process::{Command, Output};

use tempfile::{TempDir, tempdir};

const SETTINGS: &str = r#"{
    "version_info": {
        "version": "5.0.3",
        "gitVersion": "657fea5a61a74d7a79df7aff8e4bcf0bc742b748",
        "modules": ["enterprise"],
        "allocator": "tcmalloc",
        "jsEngine": "mozjs",
        "buildInfo": [
            {"key": "distmod", "value": "rhel80", "inBuildInfo": true},
            {"key": "ccflags", "value": "", "inBuildInfo": true},
            {"key": "linkflags", "value": "-pthread", "inBuildInfo": false}
        ]
    },
    "crypto": {"kind": "openssl", "running": "OpenSSL 3.0.2 15 Mar 2022", "compiled": "OpenSSL 3.0.2"}
}"#;

fn write_settings(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = tempdir().expect("create temp dir");
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, content).expect("write settings");
    (temp_dir, path)
}

fn verinfo(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_verinfo"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("run verinfo")
}

fn verinfo_at_home(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_verinfo"))
        .args(args)
        .env("VERINFO_HOME", home)
        .env("NO_COLOR", "1")
        .output()
        .expect("run verinfo")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn build_info_prints_ordered_document() {
    let (_dir, config) = write_settings(SETTINGS);

    let output = verinfo(&config, &["build-info"]);

    assert!(output.status.success());
    let json = stdout(&output);
    assert!(json.starts_with(
        r#"{"version":"5.0.3","gitVersion":"657fea5a61a74d7a79df7aff8e4bcf0bc742b748","#
    ));
    assert!(json.contains(r#""versionArray":[5,0,3,0]"#));
    assert!(json.contains(
        r#""openssl":{"running":"OpenSSL 3.0.2 15 Mar 2022","compiled":"OpenSSL 3.0.2"}"#
    ));
    assert!(json.contains(r#""buildEnvironment":{"distmod":"rhel80","ccflags":""}"#));

    let value: serde_json::Value = serde_json::from_str(&json).expect("output is json");
    assert_eq!(value["bits"], usize::BITS);
}

#[test]
fn version_and_banners_use_configured_version() {
    let (_dir, config) = write_settings(SETTINGS);

    assert_eq!(
        stdout(&verinfo(&config, &["version", "--binary", "mongod"])),
        "mongod v5.0.3"
    );
    assert_eq!(
        stdout(&verinfo(&config, &["banner", "mongo"])),
        "MongoDB shell version v5.0.3"
    );
    assert_eq!(
        stdout(&verinfo(&config, &["banner", "mongos"])),
        "mongos version v5.0.3"
    );
    assert_eq!(
        stdout(&verinfo(&config, &["banner", "mongod"])),
        "db version v5.0.3"
    );
}

#[test]
fn check_exit_code_reflects_major_minor_match() {
    let (_dir, config) = write_settings(SETTINGS);

    let same = verinfo(&config, &["check", "5.0.17"]);
    assert!(same.status.success());
    assert_eq!(stdout(&same), "compatible");

    for other in ["5.1.0", "5", "abc"] {
        let output = verinfo(&config, &["check", other]);
        assert_eq!(output.status.code(), Some(1), "peer version {other}");
        assert_eq!(stdout(&output), "incompatible");
    }
}

#[test]
fn log_command_writes_filtered_environment() {
    let (_dir, config) = write_settings(SETTINGS);

    let output = verinfo(&config, &["log"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(r#""openSSLVersion":"OpenSSL 3.0.2 15 Mar 2022""#));
    assert!(stderr.contains(r#""environment":[{"distmod":"rhel80"}]"#));
    assert!(stderr.contains("Target operating system minimum version"));
}

#[test]
fn file_logging_writes_to_configured_path() {
    let temp_dir = tempdir().expect("create temp dir");
    let log_path = temp_dir.path().join("logs").join("verinfo.log");
    let settings = format!(
        r#"{{"log_to_file": true, "log_file": {}}}"#,
        serde_json::to_string(&log_path).expect("path serializes")
    );
    let config = temp_dir.path().join("settings.json");
    std::fs::write(&config, settings).expect("write settings");

    let output = verinfo(&config, &["log"]);

    assert!(output.status.success());
    let contents = std::fs::read_to_string(&log_path).expect("log file written");
    assert!(contents.contains("Build Info"));
}

#[test]
fn home_override_supplies_settings_and_log_location() {
    let home = tempdir().expect("create temp dir");
    std::fs::write(
        home.path().join("settings.json"),
        r#"{"log_to_file": true, "version_info": {"version": "7.0.2"}}"#,
    )
    .expect("write settings");

    let output = verinfo_at_home(home.path(), &["log"]);

    assert!(output.status.success());
    let contents = std::fs::read_to_string(home.path().join("logs").join("verinfo.log"))
        .expect("log file written below the home override");
    assert!(contents.contains(r#"Build Info {"version":"7.0.2""#));
}

#[test]
fn invalid_settings_in_home_are_reported_not_replaced() {
    let home = tempdir().expect("create temp dir");
    std::fs::write(
        home.path().join("settings.json"),
        r#"{"version_info": {"version": "x.y"}}"#,
    )
    .expect("write settings");

    let output = verinfo_at_home(home.path(), &["version"]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid settings"));
}

#[test]
fn missing_settings_in_home_use_builtin_version() {
    let home = tempdir().expect("create temp dir");

    let output = verinfo_at_home(home.path(), &["version", "--binary", "verinfo"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("verinfo v{}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn non_ascii_pre_release_tag_is_accepted() {
    let (_dir, config) = write_settings(r#"{"version_info": {"version": "5.0.3-é"}}"#);

    let output = verinfo(&config, &["build-info"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains(r#""versionArray":[5,0,3,0]"#));
}

#[test]
fn invalid_settings_fail_with_message() {
    let (_dir, config) = write_settings(r#"{"version_info": {"version": "x.y"}}"#);

    let output = verinfo(&config, &["version"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid settings"));
}

#[test]
fn unknown_command_is_a_usage_error() {
    let (_dir, config) = write_settings("{}");

    let output = verinfo(&config, &["frobnicate"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage: verinfo"));
}
