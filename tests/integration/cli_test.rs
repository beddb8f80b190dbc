//! CLI behavior tests

use predicates::prelude::*;

use crate::helpers::{box_cmd, box_cmd_colored, run_box};

#[test]
fn boxes_positional_argument() {
    box_cmd()
        .args(["-T", "ascii", "-H", "1", "hi"])
        .assert()
        .success()
        .stdout("+----+\n| hi |\n+----+\n");
}

#[test]
fn multiple_arguments_become_lines() {
    box_cmd()
        .args(["-T", "ascii", "a", "bb"])
        .assert()
        .success()
        .stdout("+--+\n|a |\n|bb|\n+--+\n");
}

#[test]
fn literal_newline_escape_splits_argument() {
    let (stdout, _, code) = run_box(&["-T", "ascii", "one\\ntwo"], None);
    assert_eq!(code, 0);
    assert_eq!(stdout, "+---+\n|one|\n|two|\n+---+\n");
}

#[test]
fn piped_stdin_wins_over_arguments() {
    box_cmd()
        .args(["-T", "ascii", "ignored"])
        .write_stdin("from\nstdin\n")
        .assert()
        .success()
        .stdout("+-----+\n|from |\n|stdin|\n+-----+\n");
}

#[test]
fn depth_zero_echoes_input() {
    box_cmd()
        .args(["-n", "0"])
        .write_stdin("unchanged\n")
        .assert()
        .success()
        .stdout("unchanged\n");
}

#[test]
fn title_list_must_match_depth() {
    let (stdout, stderr, code) = run_box(&["-n", "3", "-t", "a,b", "x"], None);
    assert_ne!(code, 0);
    assert!(stdout.is_empty(), "no partial output expected: {}", stdout);
    assert!(stderr.contains("-t/--title must have either 1 value or 3 values, but got 2"));
}

#[test]
fn box_color_list_must_match_depth() {
    box_cmd()
        .args(["-n", "2", "-b", "red,green,blue", "x"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("-b/--box-color"));
}

#[test]
fn empty_stdin_draws_empty_titled_box() {
    box_cmd()
        .args(["-T", "ascii", "-t", "T"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("+T+\n+-+\n");
}

#[test]
fn empty_stdin_with_padding_keeps_width() {
    let (stdout, stderr, code) = run_box(&["-T", "ascii", "-H", "2", "-v", "1"], Some(""));
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert_eq!(stdout, "+----+\n|    |\n|    |\n+----+\n");
}

#[test]
fn unknown_theme_is_a_usage_error() {
    box_cmd()
        .args(["-T", "fancy", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fancy"));
}

#[test]
fn no_color_env_suppresses_escapes() {
    box_cmd()
        .args(["-b", "red", "-m", "pride", "-C", "blue", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn color_always_emits_border_color() {
    box_cmd_colored()
        .args(["-T", "ascii", "-b", "red", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[31m+\x1b[0m"));
}

#[test]
fn color_never_beats_force_color() {
    box_cmd()
        .env("FORCE_COLOR", "1")
        .env_remove("NO_COLOR")
        .args(["--color", "never", "-b", "red", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn pride_mode_colors_levels_in_order() {
    let output = box_cmd_colored()
        .args(["-n", "3", "-m", "pride", "x"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("\x1b[38;5;196m"));
    assert!(lines[1].contains("\x1b[38;5;208m┏"));
    assert!(lines[2].contains("\x1b[38;5;226m┏"));
}

#[test]
fn center_color_only_colors_innermost_content() {
    let output = box_cmd_colored()
        .args(["-n", "2", "-C", "green", "x"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("\x1b[32m").count(), 1);
    assert!(stdout.contains("\x1b[32mx\x1b[0m"));
}

#[test]
fn man_page_is_generated() {
    box_cmd()
        .args(["docs", "man"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".TH BOX"));
}

#[test]
fn version_flag() {
    box_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("box "));
}
