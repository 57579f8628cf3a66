//! Integration tests for the `generate digitmap` command

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

use crate::integration::{write_dialplan, SAMPLE_DIALPLAN, SAMPLE_MAP};

/// Run the binary with an isolated environment.
fn run(workspace: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_digitmap");
    Command::new(bin)
        .env("HOME", workspace.join("home"))
        .env("XDG_CONFIG_HOME", workspace.join("xdg-config"))
        .env("XDG_DATA_HOME", workspace.join("xdg-data"))
        .env_remove("DIGITMAP_LOG")
        .env_remove("DIGITMAP_LOG_FORMAT")
        .env_remove("DIGITMAP_LOG_OUTPUT")
        .env_remove("DIGITMAP_LOG_MODULES")
        .env_remove("DIGITMAP_ENV")
        .arg("--workspace")
        .arg(workspace)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_generate_prints_map() {
    let temp_dir = TempDir::new().unwrap();
    write_dialplan(temp_dir.path(), SAMPLE_DIALPLAN);

    let output = run(temp_dir.path(), &["generate", "digitmap", "default"]);
    assert!(
        output.status.success(),
        "generate should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), format!("{}\n", SAMPLE_MAP));
}

#[test]
fn test_generate_logs_circular_include_on_stderr() {
    let temp_dir = TempDir::new().unwrap();
    write_dialplan(temp_dir.path(), SAMPLE_DIALPLAN);

    let output = run(temp_dir.path(), &["generate", "digitmap", "default"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Avoiding circular include of default within local"),
        "stderr={:?}",
        stderr
    );

    let quiet = run(temp_dir.path(), &["--quiet", "generate", "digitmap", "default"]);
    assert!(quiet.status.success());
    assert!(quiet.stderr.is_empty());
}

#[test]
fn test_generate_unknown_context_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    write_dialplan(temp_dir.path(), SAMPLE_DIALPLAN);

    let output = run(temp_dir.path(), &["--quiet", "generate", "digitmap", "nowhere"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No such context: nowhere"));
}

#[test]
fn test_generate_truncation_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    write_dialplan(temp_dir.path(), SAMPLE_DIALPLAN);
    std::fs::create_dir_all(temp_dir.path().join("config")).unwrap();
    std::fs::write(
        temp_dir.path().join("config").join("config.toml"),
        "[generator]\nbuffer_size = 16\n",
    )
    .unwrap();

    let output = run(temp_dir.path(), &["--quiet", "generate", "digitmap", "default"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No space left"));
}

#[test]
fn test_generate_with_explicit_dialplan_and_braces() {
    let temp_dir = TempDir::new().unwrap();
    let pbx_dir = temp_dir.path().join("pbx");
    std::fs::create_dir_all(&pbx_dir).unwrap();
    let dialplan = write_dialplan(&pbx_dir, "[phones]\nexten => _2XX,1,Dial(SIP/${EXTEN})\n");
    let config = temp_dir.path().join("digitmap.toml");
    std::fs::write(&config, "[generator]\nbraces = true\n").unwrap();

    let output = run(
        temp_dir.path(),
        &[
            "--config",
            config.to_str().unwrap(),
            "--dialplan",
            dialplan.to_str().unwrap(),
            "generate",
            "digitmap",
            "phones",
        ],
    );
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "{2xx}\n");
}

#[test]
fn test_missing_dialplan_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["--quiet", "generate", "digitmap", "default"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_usage_requires_context() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["generate", "digitmap"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
