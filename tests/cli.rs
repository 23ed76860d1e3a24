extern crate assert_cmd;
extern crate image;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn mbrot() -> Command {
    Command::cargo_bin("mbrot").unwrap()
}

#[test]
fn output_is_required() {
    mbrot()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output"));
}

#[test]
fn renders_the_default_view() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("default.png");
    mbrot()
        .arg("-o")
        .arg(&path)
        .arg("--seed")
        .arg("1")
        .assert()
        .success();

    let rendered = image::open(&path).unwrap().to_rgba();
    assert_eq!(rendered.dimensions(), (640, 480));
    assert_eq!(rendered.get_pixel(320, 240).0, [0, 0, 0, 0]);
    assert_eq!(rendered.get_pixel(0, 0).0[3], 255);
}

#[test]
fn same_seed_same_image() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.png");
    let b = dir.path().join("b.png");
    for path in &[&a, &b] {
        mbrot()
            .args(&["--size", "64x48", "--mx", "-0.75", "--radius", "1.5", "--seed", "9"])
            .args(&["--threads", "1"])
            .arg("-o")
            .arg(path)
            .assert()
            .success();
    }
    let a = image::open(&a).unwrap().to_rgba().into_raw();
    let b = image::open(&b).unwrap().to_rgba().into_raw();
    assert_eq!(a, b);
}

#[test]
fn bad_parameters_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fallback.png");
    mbrot()
        .args(&["--size", "bigxsmall", "--mx", "left", "--radius", "-4"])
        .arg("-o")
        .arg(&path)
        .assert()
        .success();
    let rendered = image::open(&path).unwrap().to_rgba();
    assert_eq!(rendered.dimensions(), (640, 480));
    assert_eq!(rendered.get_pixel(320, 240).0, [0, 0, 0, 0]);
}

#[test]
fn query_strings_are_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("query.png");
    mbrot()
        .args(&["--size", "40x30", "--query", "mx=5&my=5&radius=0.1"])
        .arg("-o")
        .arg(&path)
        .assert()
        .success();
    // Far outside the set: everything escapes at once.
    let rendered = image::open(&path).unwrap().to_rgba();
    let first = *rendered.get_pixel(0, 0);
    assert_eq!(first.0[3], 255);
    assert!(rendered.pixels().all(|p| *p == first));
}

#[test]
fn query_conflicts_with_explicit_values() {
    mbrot()
        .args(&["-o", "never.png", "--query", "mx=1", "--mx", "2"])
        .assert()
        .failure();
}

#[test]
fn thread_count_is_validated() {
    mbrot()
        .args(&["-o", "never.png", "--threads", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Thread count"));
}

#[test]
fn unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.png");
    mbrot()
        .args(&["--size", "8x8"])
        .arg("-o")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not write"));
}

#[test]
fn encoded_query_values_are_decoded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("encoded.png");
    // %2D5 is -5: far outside the set, so every pixel escapes at once.
    mbrot()
        .args(&["--size", "16x12", "--query", "mx=%2D5&my=0&radius=0.1"])
        .arg("-o")
        .arg(&path)
        .assert()
        .success();
    let rendered = image::open(&path).unwrap().to_rgba();
    assert!(rendered.pixels().all(|p| p.0[3] == 255));
}

#[test]
fn overflowing_radius_renders_the_default_view() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("huge.png");
    mbrot()
        .args(&["--size", "64x48", "--radius", "1e308"])
        .arg("-o")
        .arg(&path)
        .assert()
        .success();
    let rendered = image::open(&path).unwrap().to_rgba();
    assert_eq!(rendered.get_pixel(32, 24).0, [0, 0, 0, 0]);
    assert_eq!(rendered.get_pixel(0, 0).0[3], 255);
}
