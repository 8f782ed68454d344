//! End-to-end tests for the seamroute binary: the same three-stage
//! pipeline a user runs, against real files in a temp directory.

use assert_cmd::prelude::*;
use image::{ImageBuffer, Pixel, RgbImage};
use predicates::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn find_reports_and_saves_the_seam() {
    let dir = tempfile::tempdir().unwrap();
    let pixels = dir.path().join("pixels.txt");
    let seam = dir.path().join("seam.txt");
    fs::write(&pixels, "1 2 3\n4 1 6\n7 8 1\n").unwrap();

    Command::cargo_bin("seamroute")
        .unwrap()
        .arg("find")
        .arg(&pixels)
        .arg("-o")
        .arg(&seam)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Read pixels from file successfully. Image dimensions: 3x3",
        ))
        .stdout(predicate::str::contains(
            "Calculated minimum weighted seam: 0 1 2",
        ))
        .stdout(predicate::str::contains("Seam saved to"));

    assert_eq!(fs::read_to_string(&seam).unwrap(), "0 1 2 \n");
}

#[test]
fn missing_matrix_fails_with_the_path() {
    Command::cargo_bin("seamroute")
        .unwrap()
        .args(&["find", "definitely/not/here.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: could not read"))
        .stderr(predicate::str::contains("definitely/not/here.txt"));
}

#[test]
fn ragged_matrix_fails_with_the_line() {
    let dir = tempfile::tempdir().unwrap();
    let pixels = dir.path().join("ragged.txt");
    fs::write(&pixels, "1 2 3\n4 5\n").unwrap();

    Command::cargo_bin("seamroute")
        .unwrap()
        .arg("find")
        .arg(&pixels)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn run_pipeline_highlights_the_seam() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let pixels = dir.path().join("pixels.txt");
    let seam = dir.path().join("seam.txt");
    let output = dir.path().join("output.png");

    // A flat gray image: every seam costs zero, and the tie-break
    // pins the result to the leftmost column.
    let flat: RgbImage = ImageBuffer::from_pixel(3, 3, *Pixel::from_slice(&[128, 128, 128]));
    flat.save(&input).unwrap();

    Command::cargo_bin("seamroute")
        .unwrap()
        .arg("run")
        .arg(&input)
        .arg("--pixels")
        .arg(&pixels)
        .arg("--seam")
        .arg(&seam)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Seam highlighted and output saved"));

    assert_eq!(fs::read_to_string(&pixels).unwrap(), "128 128 128\n128 128 128\n128 128 128\n");
    assert_eq!(fs::read_to_string(&seam).unwrap(), "0 0 0 \n");

    let painted = image::open(&output).unwrap().to_rgb();
    for y in 0..3 {
        assert_eq!(painted.get_pixel(0, y).channels(), &[255, 0, 0][..]);
        assert_eq!(painted.get_pixel(1, y).channels(), &[128, 128, 128][..]);
    }
}
