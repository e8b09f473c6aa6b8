extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Pixel triples of a binary PPM file, skipping the header.
fn read_ppm(path: &Path) -> Vec<u8> {
    let bytes = fs::read(path).expect("the render should have written a file");
    assert!(bytes.starts_with(b"P6"), "not a binary PPM: {:?}", &bytes[..2]);
    // Raster data begins after the maxval token and its single
    // trailing whitespace byte.
    let data_at = bytes
        .windows(3)
        .position(|w| w == b"255")
        .expect("a maxval token")
        + 4;
    bytes[data_at..].to_vec()
}

fn has_pixel(data: &[u8], rgb: (u8, u8, u8)) -> bool {
    data.chunks(3)
        .any(|p| p.len() == 3 && p[0] == rgb.0 && p[1] == rgb.1 && p[2] == rgb.2)
}

#[test]
fn renders_a_default_frame() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("frame.ppm");

    Command::cargo_bin("scope")
        .unwrap()
        .args(&["-o", target.to_str().unwrap(), "--size", "120x90"])
        .assert()
        .success();

    let data = read_ppm(&target);
    assert_eq!(data.len(), 120 * 90 * 3);
    // The backdrop and the bounded-set fill both show up in a default
    // Mandelbrot frame.
    assert!(has_pixel(&data, (0x16, 0x18, 0x1d)));
    assert!(has_pixel(&data, (0x6f, 0x73, 0x7a)));
}

#[test]
fn pointer_flag_adds_the_trajectory_overlay() {
    let dir = TempDir::new().unwrap();
    let quiet = dir.path().join("quiet.ppm");
    let probed = dir.path().join("probed.ppm");

    // A Julia frame; the screen centre maps to the world origin, whose
    // orbit for this seed stays bounded and draws a visible trace.
    let base = [
        "--size", "120x90", "--fractal", "julia", "--seed", "0.3,0.1",
    ];
    Command::cargo_bin("scope")
        .unwrap()
        .args(&["-o", quiet.to_str().unwrap()])
        .args(&base)
        .assert()
        .success();
    Command::cargo_bin("scope")
        .unwrap()
        .args(&["-o", probed.to_str().unwrap()])
        .args(&base)
        .args(&["--pointer", "60,45"])
        .assert()
        .success();

    let quiet_data = read_ppm(&quiet);
    let probed_data = read_ppm(&probed);
    assert!(!has_pixel(&quiet_data, (0x50, 0x9b, 0xe0)));
    assert!(has_pixel(&probed_data, (0x50, 0x9b, 0xe0)));
}

#[test]
fn rejects_a_malformed_size() {
    Command::cargo_bin("scope")
        .unwrap()
        .args(&["-o", "unused.ppm", "--size", "banana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse frame size").from_utf8());
}

#[test]
fn rejects_a_malformed_seed() {
    Command::cargo_bin("scope")
        .unwrap()
        .args(&["-o", "unused.ppm", "--seed", "0.3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse seed point").from_utf8());
}

#[test]
fn rejects_a_zero_trace_length() {
    Command::cargo_bin("scope")
        .unwrap()
        .args(&["-o", "unused.ppm", "--trace", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Trace length must be between").from_utf8());
}

#[test]
fn rejects_an_unknown_fractal() {
    Command::cargo_bin("scope")
        .unwrap()
        .args(&["-o", "unused.ppm", "--fractal", "cubic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("isn't a valid value").from_utf8());
}

#[test]
fn refuses_a_zero_frame_extent() {
    Command::cargo_bin("scope")
        .unwrap()
        .args(&["-o", "unused.ppm", "--size", "0x90"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render failure").from_utf8());
}
