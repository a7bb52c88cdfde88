// Shared test helpers for integration tests.
// Used by cli_test.rs, cli_contract.rs and cli_flows.rs.
#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::NamedTempFile;

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_pre-commit-config"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Write config content to a temp file. Keep the handle alive while the
/// binary runs.
pub fn write_config(content: &str) -> NamedTempFile {
    let mut tmpfile = NamedTempFile::new().expect("failed to create temp config");
    tmpfile
        .write_all(content.as_bytes())
        .expect("failed to write config");
    tmpfile
}

/// Runs `<subcommand> --config <content as file> <extra args>`.
/// Returns (stdout, stderr, exit_code).
pub fn run_with_config(
    subcommand: &str,
    config_content: &str,
    extra_args: &[&str],
) -> (String, String, i32) {
    let tmpfile = write_config(config_content);
    let config_path = tmpfile.path().to_str().unwrap().to_string();
    let mut args = vec![subcommand, "--config", &config_path];
    args.extend_from_slice(extra_args);
    run_args("", &args)
}

/// Runs `<subcommand> --config <fixture> <extra args>`.
pub fn run_with_fixture(subcommand: &str, fixture: &str, extra_args: &[&str]) -> (String, String, i32) {
    let path = fixture_path(fixture);
    let config_path = path.to_str().unwrap().to_string();
    let mut args = vec![subcommand, "--config", &config_path];
    args.extend_from_slice(extra_args);
    run_args("", &args)
}

/// Runs the binary with the given stdin and args.
/// Returns (stdout, stderr, exit_code).
pub fn run_args(stdin_input: &str, args: &[&str]) -> (String, String, i32) {
    let mut cmd = Command::new(binary_path());
    cmd.args(args).env_remove("SKIP").env_remove("RUST_LOG");
    let output = cmd
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::{ErrorKind, Write};
            let write_result = child
                .stdin
                .take()
                .unwrap()
                .write_all(stdin_input.as_bytes());
            if let Err(e) = write_result {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e);
                }
            }
            child.wait_with_output()
        })
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

pub fn parse_json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout.trim()).expect("stdout should be valid JSON")
}
