//! End-to-end tests for the `todo` binary
//!
//! Drives the real executable over stdin and checks the activity log file it
//! leaves behind.

use std::io::Write;
use std::process::{Command, Stdio};

fn run_todo(args: &[&str], stdin: &str) -> std::process::Output {
    let binary = env!("CARGO_BIN_EXE_todo");
    let config_dir = tempfile::TempDir::new().unwrap();

    let mut child = Command::new(binary)
        .args(args)
        .arg("--config")
        .arg(config_dir.path().join("config.toml"))
        .env_remove("TODO_LIST_LOG_FILE")
        .env_remove("TODO_LIST_DEBUG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start todo");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().expect("Failed to wait for todo")
}

#[test]
fn test_session_writes_activity_log() {
    let dir = tempfile::TempDir::new().unwrap();
    let log_path = dir.path().join("app_log.txt");

    let output = run_todo(
        &["--log-file", log_path.to_str().unwrap()],
        "1\nBuy milk\n2024 01 01\n2\nBuy milk\n4\nall\n7\n",
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Buy milk - Completed, Due: 2024-1-1"));
    assert!(stdout.contains("Exiting..."));

    let log = std::fs::read_to_string(&log_path).unwrap();
    let messages: Vec<&str> = log
        .lines()
        .map(|l| {
            assert!(l.starts_with('['), "missing timestamp: {}", l);
            // "[YYYY-MM-DD HH:MM:SS] " is 22 bytes
            &l[22..]
        })
        .collect();
    assert_eq!(
        messages,
        vec![
            "To-Do List Manager",
            "Task added: Buy milk",
            "Task marked as completed: Buy milk",
        ]
    );
}

#[test]
fn test_no_log_leaves_no_file() {
    let dir = tempfile::TempDir::new().unwrap();

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_todo"))
        .current_dir(dir.path())
        .arg("--no-log")
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .env_remove("TODO_LIST_LOG_FILE")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run todo");

    assert!(output.status.success());
    assert!(!dir.path().join("app_log.txt").exists());
}

#[test]
fn test_malformed_config_exits_with_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[log]\nenabled = maybe\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_todo"))
        .arg("--config")
        .arg(&config)
        .arg("--no-log")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run todo");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid config file"));
}

#[test]
fn test_completion_generates_script() {
    let output = Command::new(env!("CARGO_BIN_EXE_todo"))
        .args(["completion", "bash"])
        .output()
        .expect("Failed to run todo completion");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("todo"));
}
