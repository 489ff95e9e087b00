use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// The history entry the mock backend hands out for `facebook/react`.
pub fn react_json() -> serde_json::Value {
    serde_json::json!({
        "fullName": "facebook/react",
        "ownerAvatarUrl": "https://avatars.githubusercontent.com/u/69631?v=4",
        "language": "JavaScript",
        "htmlURL": "https://github.com/facebook/react"
    })
}

fn command(args: &[&str], data_dir: &Path, api: &str) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_libquality"));
    cmd.args(args);
    cmd.env("LIBQUALITY_DATA_DIR", data_dir);
    cmd.env("LIBQUALITY_API_URL", api);
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run the CLI against an isolated data directory.
pub fn run_cli(args: &[&str], data_dir: &Path, api: &str) -> Output {
    command(args, data_dir, api)
        .output()
        .expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_success(args: &[&str], data_dir: &Path, api: &str) -> String {
    let output = run_cli(args, data_dir, api);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI with `stdin` piped in.
pub fn run_cli_with_input(args: &[&str], data_dir: &Path, api: &str, stdin: &str) -> Output {
    let mut child = command(args, data_dir, api)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    child
        .stdin
        .take()
        .expect("stdin not piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for CLI")
}
