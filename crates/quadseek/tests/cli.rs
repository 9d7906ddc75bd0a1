#![cfg(feature = "cli")]

use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use std::path::Path;

fn write_frame(path: &Path, blob: Option<(u32, u32)>) {
    let img = RgbImage::from_fn(80, 60, |x, y| match blob {
        Some((cx, cy)) if x.abs_diff(cx) <= 4 && y.abs_diff(cy) <= 4 => Rgb([220, 20, 20]),
        _ => Rgb([30, 140, 60]),
    });
    img.save(path).expect("write frame");
}

fn parse_xy(stdout: &[u8]) -> (usize, usize) {
    let text = String::from_utf8_lossy(stdout);
    let (x, y) = text.trim().split_once(',').expect("x,y output");
    (x.parse().expect("x"), y.parse().expect("y"))
}

#[test]
fn missing_image_argument_prints_usage() {
    Command::cargo_bin("quadseek")
        .expect("binary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn prints_xy_near_the_red_blob() {
    let dir = tempfile::tempdir().expect("tempdir");
    let frame = dir.path().join("frame.png");
    write_frame(&frame, Some((20, 40)));

    let out = Command::cargo_bin("quadseek")
        .expect("binary")
        .arg(&frame)
        .output()
        .expect("run");
    assert!(out.status.success());
    let (x, y) = parse_xy(&out.stdout);
    assert!(x.abs_diff(20) <= 5, "x={x}");
    assert!(y.abs_diff(40) <= 5, "y={y}");
}

#[test]
fn empty_frame_still_prints_a_coordinate() {
    let dir = tempfile::tempdir().expect("tempdir");
    let frame = dir.path().join("empty.png");
    write_frame(&frame, None);

    Command::cargo_bin("quadseek")
        .expect("binary")
        .arg(&frame)
        .assert()
        .success()
        // 80x60 descends top-left down to (0, 0, 2, 1)
        .stdout(predicate::str::diff("1,0\n"));
}

#[test]
fn json_report_and_annotation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let frame = dir.path().join("frame.png");
    let marked = dir.path().join("marked.png");
    write_frame(&frame, Some((60, 15)));

    let out = Command::cargo_bin("quadseek")
        .expect("binary")
        .arg(&frame)
        .arg("--json")
        .arg("--annotate")
        .arg(&marked)
        .output()
        .expect("run");
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(report["detected"], true);
    assert_eq!(report["mass"], 81);
    assert_eq!(report["width"], 80);
    assert!(marked.exists());
    let marked_img = image::open(&marked).expect("marked").to_rgb8();
    assert_eq!(marked_img.dimensions(), (80, 60));
}

#[test]
fn config_file_and_flags_are_applied() {
    let dir = tempfile::tempdir().expect("tempdir");
    let frame = dir.path().join("frame.png");
    let config = dir.path().join("detect.json");
    write_frame(&frame, Some((60, 45)));
    std::fs::write(&config, r#"{ "search": { "min_mass": 1000 } }"#).expect("config");

    let out = Command::cargo_bin("quadseek")
        .expect("binary")
        .arg(&frame)
        .arg("--config")
        .arg(&config)
        .arg("--json")
        .output()
        .expect("run");
    assert!(out.status.success());
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(report["detected"], false);

    Command::cargo_bin("quadseek")
        .expect("binary")
        .arg(&frame)
        .args(["--lower", "200,0,0", "--upper", "100,255,255"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid color bounds"));
}

#[test]
fn unreadable_image_fails() {
    Command::cargo_bin("quadseek")
        .expect("binary")
        .arg("/nonexistent/frame.png")
        .assert()
        .failure();
}
