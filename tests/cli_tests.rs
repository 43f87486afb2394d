//! CLI integration tests

use std::process::Command;

use tempfile::TempDir;

/// Binary with config lookups pointed at an empty temp dir
fn recorder_config_bin(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_recorder-config"));
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("RECORDER_PLATFORM_VERSION")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    let output = recorder_config_bin(&home)
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("resolve"));
    assert!(stdout.contains("validate"));
    assert!(stdout.contains("table"));
    assert!(stdout.contains("presets"));
    assert!(stdout.contains("config"));
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();
    let output = recorder_config_bin(&home)
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("recorder-config"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn resolve_inline_json() {
    let home = TempDir::new().unwrap();
    let output = recorder_config_bin(&home)
        .args([
            "resolve",
            "--json",
            r#"{"extension":".m4a","outputFormat":"mpeg4","audioEncoder":"aac","bitRate":128000}"#,
            "--platform-version",
            "30",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["nativeOutputFormat"], 2);
    assert_eq!(json["nativeAudioEncoder"], 3);
    assert_eq!(json["nativeAudioSource"], 1);
    assert_eq!(json["bitRate"], 128000);
}

#[test]
fn resolve_degrades_mpeg2ts_on_old_platform() {
    let home = TempDir::new().unwrap();
    let payload = r#"{"extension":".ts","outputFormat":"mpeg2ts"}"#;

    let old = recorder_config_bin(&home)
        .args(["resolve", "--json", payload, "-p", "25"])
        .output()
        .expect("Failed to execute command");
    assert!(old.status.success());
    assert_eq!(stdout_json(&old)["nativeOutputFormat"], 0);

    let new = recorder_config_bin(&home)
        .args(["resolve", "--json", payload, "-p", "26"])
        .output()
        .expect("Failed to execute command");
    assert!(new.status.success());
    assert_eq!(stdout_json(&new)["nativeOutputFormat"], 8);
}

#[test]
fn resolve_reads_options_file() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("options.json");
    std::fs::write(&file, r#"{"extension":".webm","outputFormat":"webm","isMeteringEnabled":true}"#)
        .unwrap();

    let output = recorder_config_bin(&home)
        .args(["resolve", "--options"])
        .arg(&file)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["nativeOutputFormat"], 9);
    assert_eq!(json["isMeteringEnabled"], true);
}

#[test]
fn resolve_with_preset_only() {
    let home = TempDir::new().unwrap();
    let output = recorder_config_bin(&home)
        .args(["resolve", "--preset", "low_quality"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["nativeOutputFormat"], 1);
    assert_eq!(json["nativeAudioEncoder"], 1);
    assert_eq!(json["bitRate"], 64000);
}

#[test]
fn validate_prints_normalized_payload() {
    let home = TempDir::new().unwrap();
    let output = recorder_config_bin(&home)
        .args(["validate", "--json", r#"{"extension":".3gp","outputFormat":"THREE_GP","extra":1}"#])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["outputFormat"], "3gp");
    assert_eq!(json["audioSource"], "mic");
    assert!(json.get("extra").is_none());
}

#[test]
fn table_lists_every_group() {
    let home = TempDir::new().unwrap();
    let output = recorder_config_bin(&home)
        .args(["table", "-p", "25"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("outputFormat"));
    assert!(stdout.contains("audioEncoder"));
    assert!(stdout.contains("audioSource"));
    assert!(stdout.contains("falls back to default"));
}

#[test]
fn presets_lists_both() {
    let home = TempDir::new().unwrap();
    let output = recorder_config_bin(&home)
        .arg("presets")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("high_quality"));
    assert!(stdout.contains("low_quality"));
}

#[test]
fn config_path_command() {
    let home = TempDir::new().unwrap();
    let output = recorder_config_bin(&home)
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("recorder-config"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_platform_version_is_used_by_resolve() {
    let home = TempDir::new().unwrap();

    let set = recorder_config_bin(&home)
        .args(["config", "set", "platform_version", "24"])
        .output()
        .expect("Failed to execute command");
    assert!(set.status.success());

    let output = recorder_config_bin(&home)
        .args(["resolve", "--json", r#"{"extension":".ts","outputFormat":"mpeg2ts"}"#])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["nativeOutputFormat"], 0);

    // The flag overrides the stored value
    let output = recorder_config_bin(&home)
        .args(["resolve", "--json", r#"{"extension":".ts","outputFormat":"mpeg2ts"}"#, "-p", "26"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(stdout_json(&output)["nativeOutputFormat"], 8);
}

#[test]
fn platform_version_from_environment() {
    let home = TempDir::new().unwrap();
    let output = recorder_config_bin(&home)
        .env("RECORDER_PLATFORM_VERSION", "21")
        .args(["resolve", "--json", r#"{"extension":".ts","outputFormat":"mpeg2ts"}"#])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["nativeOutputFormat"], 0);
}

#[test]
fn resolve_warns_when_format_is_degraded() {
    let home = TempDir::new().unwrap();
    let output = recorder_config_bin(&home)
        .args(["resolve", "--json", r#"{"extension":".ts","outputFormat":"mpeg2ts"}"#, "-p", "25"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("requires API 26"));
}

/// Write a config file where the binary will look for it
fn write_config(home: &TempDir, content: &str) {
    let output = recorder_config_bin(home)
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");
    let path = std::path::PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

#[test]
fn invalid_stored_values_fall_back_with_warning() {
    let home = TempDir::new().unwrap();
    write_config(&home, "audio_source = \"bogus\"\npreset = \"studio\"\n");

    let output = recorder_config_bin(&home)
        .args(["resolve", "--json", r#"{"extension":".m4a"}"#])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["nativeAudioSource"], 1);
    assert!(json["bitRate"].is_null());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("audio_source"));
    assert!(stderr.contains("preset"));
}

#[test]
fn invalid_stored_audio_source_does_not_hide_caller_errors() {
    let home = TempDir::new().unwrap();
    write_config(&home, "audio_source = \"bogus\"\n");

    let output = recorder_config_bin(&home)
        .args(["validate", "--json", r#"{"extension":"   "}"#])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("extension"));
    assert!(!stderr.contains("audioSource"));
}
