use std::path::Path;
use std::process::{Command, Output};

use image::GrayImage;
use tempfile::tempdir;

fn extract(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cubemap-extract"))
        .current_dir(cwd)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn no_arguments_exits_with_usage() {
    let dir = tempdir().unwrap();

    let output = extract(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
    assert!(!dir.path().join("assets").exists());
}

#[test]
fn two_arguments_exit_with_usage() {
    let dir = tempdir().unwrap();
    let cubemaps = dir.path().join("assets/cubemaps");
    std::fs::create_dir_all(&cubemaps).unwrap();
    GrayImage::new(8, 6).save(cubemaps.join("studio.png")).unwrap();

    let output = extract(dir.path(), &["studio.png", "other.png"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
    assert!(!cubemaps.join("faces").exists());
}

#[test]
fn unsupported_width_fails_without_output() {
    let dir = tempdir().unwrap();
    let cubemaps = dir.path().join("assets/cubemaps");
    std::fs::create_dir_all(&cubemaps).unwrap();
    GrayImage::new(2048, 1536)
        .save(cubemaps.join("small.png"))
        .unwrap();

    let output = extract(dir.path(), &["small.png"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid cubemap size 2048x1536"));
    assert!(!cubemaps.join("faces").exists());
}

#[test]
fn missing_cubemap_fails() {
    let dir = tempdir().unwrap();

    let output = extract(dir.path(), &["studio.png"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
}

#[test]
fn help_exits_successfully() {
    let dir = tempdir().unwrap();

    let output = extract(dir.path(), &["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("cubemap"));
}
