//! Shell completion output tests

use crate::helpers::run_box;

#[test]
fn completions_bash() {
    let (stdout, stderr, exit_code) = run_box(&["completion", "bash"], None);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("_box()"));
    assert!(stdout.contains("--hpadding"));
}

#[test]
fn completions_zsh() {
    let (stdout, _, exit_code) = run_box(&["completion", "zsh"], None);
    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("#compdef box"));
    assert!(stdout.contains("--mode"));
}

#[test]
fn completions_fish() {
    let (stdout, _, exit_code) = run_box(&["completion", "fish"], None);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("complete -c box"));
    assert!(stdout.contains("pride"));
}

#[test]
fn completions_reject_unknown_shell() {
    let (stdout, stderr, exit_code) = run_box(&["completion", "tcsh"], None);
    assert_ne!(exit_code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("tcsh"));
}
