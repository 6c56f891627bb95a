//! Runs the built binary without `OPENAI_API_KEY` in its environment.

use std::process::Command;

fn run_binary(key: Option<&str>) -> std::process::Output {

    let mut command = Command::new(env!("CARGO_BIN_EXE_chat_oneshot"));

    // a .env in the package root must not supply the key
    command
        .current_dir(std::env::temp_dir())
        .env_remove("OPENAI_API_KEY")
        .env("RUST_LOG", "off");

    if let Some(key) = key {
        command.env("OPENAI_API_KEY", key);
    }

    command.output().expect("binary should start")

}

#[test]
fn test_unset_key_exits_with_config_error() {

    let output = run_binary(None);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Configuration error"), "stderr: {}", stderr);
    assert!(stderr.contains("OPENAI_API_KEY is not set"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty(), "nothing should reach stdout");

}

#[test]
fn test_empty_key_exits_with_config_error() {

    let output = run_binary(Some(""));
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("OPENAI_API_KEY is set but empty"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());

}
