//! End-to-end runs of the julia binary: real processes, real files.

extern crate assert_cmd;
extern crate julia_set;
extern crate num;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use julia_set::julia::{DEFAULT_CONSTANT, DEFAULT_ITERATIONS, DEFAULT_THRESHOLD};
use julia_set::JuliaRenderer;
use num::Complex;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn a_two_by_two_run_produces_the_expected_thirty_bytes() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("tiny.tga");
    Command::cargo_bin("julia")
        .unwrap()
        .args(&["--size", "2x2", "--output"])
        .arg(&out)
        .assert()
        .success();

    // All four pixels of the default region's corners escape, so the
    // payload is twelve bytes of white after the eighteen-byte header.
    let mut expected: Vec<u8> = vec![0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 2, 0, 24, 0];
    expected.extend_from_slice(&[255; 12]);
    assert_eq!(fs::read(&out).unwrap(), expected);
}

#[test]
fn the_scale_multiplies_both_image_dimensions() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("scaled.tga");
    Command::cargo_bin("julia")
        .unwrap()
        .args(&["--size", "3x2", "--scale", "2", "--output"])
        .arg(&out)
        .assert()
        .success();

    // A 3x2 image at scale 2 is a 6x4 image: 18 header bytes plus 72 of payload.
    let contents = fs::read(&out).unwrap();
    assert_eq!(contents.len(), 18 + 3 * 6 * 4);
    assert_eq!(&contents[12..16], &[6, 0, 4, 0]);
}

#[test]
fn the_output_file_defaults_to_the_classic_name() {
    let dir = tempdir().unwrap();
    Command::cargo_bin("julia")
        .unwrap()
        .current_dir(dir.path())
        .args(&["--size", "2x2"])
        .assert()
        .success();
    assert!(dir.path().join("julia_set.tga").exists());
}

#[test]
fn the_thread_count_does_not_change_the_file() {
    let dir = tempdir().unwrap();
    let one = dir.path().join("one.tga");
    let many = dir.path().join("many.tga");

    Command::cargo_bin("julia")
        .unwrap()
        .args(&["--size", "16x16", "--threads", "1", "--output"])
        .arg(&one)
        .assert()
        .success();
    Command::cargo_bin("julia")
        .unwrap()
        .args(&["--size", "16x16", "--output"])
        .arg(&many)
        .assert()
        .success();

    assert_eq!(fs::read(&one).unwrap(), fs::read(&many).unwrap());
}

#[test]
fn the_payload_matches_the_library_renderer() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("five.tga");
    Command::cargo_bin("julia")
        .unwrap()
        .args(&["--size", "5x5", "--output"])
        .arg(&out)
        .assert()
        .success();

    let renderer = JuliaRenderer::new(
        5,
        5,
        Complex::new(-1.5, -1.5),
        Complex::new(1.5, 1.5),
        DEFAULT_CONSTANT,
        DEFAULT_ITERATIONS,
        DEFAULT_THRESHOLD,
    )
    .unwrap();
    let contents = fs::read(&out).unwrap();
    assert_eq!(&contents[18..], &renderer.render_single()[..]);
}

#[test]
fn a_degenerate_region_is_refused() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("never.tga");
    Command::cargo_bin("julia")
        .unwrap()
        .args(&["--leftlower", "1.5,1.5", "--rightupper", "-1.5,-1.5", "--output"])
        .arg(&out)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("left-lower corner"));
    assert!(!out.exists());
}

#[test]
fn an_oversized_render_is_refused_before_any_work() {
    Command::cargo_bin("julia")
        .unwrap()
        .args(&["--size", "2000x2000", "--scale", "64"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not fit in a TGA header"));
}

#[test]
fn a_non_positive_threshold_is_refused_at_the_door() {
    Command::cargo_bin("julia")
        .unwrap()
        .args(&["--threshold", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Divergence threshold must be a positive number",
        ));
}

#[test]
fn help_names_the_program_and_its_knobs() {
    Command::cargo_bin("julia")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Julia set renderer"))
        .stdout(predicate::str::contains("--iterations"));
}
