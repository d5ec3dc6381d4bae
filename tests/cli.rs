extern crate assert_cmd;
extern crate predicates;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn prints_one_line_per_row() {
    let output = Command::cargo_bin("mandel")
        .unwrap()
        .args(&["--size", "24x10"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 10);
    assert!(lines.iter().all(|l| l.chars().count() == 24));
}

#[test]
fn inside_of_the_set_is_blank_and_outside_is_not() {
    let output = Command::cargo_bin("mandel")
        .unwrap()
        .args(&["--size", "21x11", "--shift", "-0.5,0", "--iterations", "200"])
        .output()
        .unwrap();
    let text = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    // The center lands on -0.5, well inside the main cardioid; the
    // left edge of the middle row lands near -3.1, far outside.
    assert_eq!(lines[5].chars().nth(10), Some(' '));
    assert_ne!(lines[5].chars().nth(0), Some(' '));
}

#[test]
fn rejects_a_bad_size() {
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["--size", "wide"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse preview size"));
}

#[test]
fn rejects_a_zero_zoom() {
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["--zoom", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Zoom must be greater than zero"));
}

#[test]
fn rejects_too_many_iterations() {
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["--iterations", "5000000"])
        .assert()
        .failure();
}

#[test]
fn empty_raster_is_a_render_failure() {
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["--size", "0x0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render failure"));
}
