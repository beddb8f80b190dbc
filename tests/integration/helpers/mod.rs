//! Test helper utilities

#![allow(dead_code)]

use assert_cmd::Command;

/// The box binary with colors disabled for stable output
pub fn box_cmd() -> Command {
    let mut cmd = Command::cargo_bin("box").expect("box binary should be built");
    cmd.env("NO_COLOR", "1").env_remove("FORCE_COLOR").env_remove("BOX_LOG");
    cmd
}

/// The box binary with colors forced on
pub fn box_cmd_colored() -> Command {
    let mut cmd = Command::cargo_bin("box").expect("box binary should be built");
    cmd.env_remove("NO_COLOR").env_remove("BOX_LOG").arg("--color").arg("always");
    cmd
}

/// Run box and capture (stdout, stderr, exit code)
pub fn run_box(args: &[&str], stdin: Option<&str>) -> (String, String, i32) {
    let mut cmd = box_cmd();
    cmd.args(args);
    if let Some(input) = stdin {
        cmd.write_stdin(input);
    }
    let output = cmd.output().expect("Failed to execute box");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
