//! Tests that drive the compiled `retrospex` binary.

mod common;

use common::fixtures;
use std::process::Command;

fn retrospex() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_retrospex"));
    cmd.env_remove("RETROSPEX_MODES");
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_convert_prints_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixtures::write_png(dir.path(), "in.png", &fixtures::gradient(50, 50));
    let output = dir.path().join("result.png");

    let result = retrospex()
        .arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["-m", "hires", "--dither", "bayer2", "--depth", "0.2"])
        .output()
        .unwrap();

    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert_eq!(stdout.trim(), output.display().to_string());
    let img = common::assert_png(&std::fs::read(&output).unwrap());
    assert_eq!(img.dimensions(), (320, 200));
}

#[test]
fn test_convert_failure_exits_nonzero_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("result.png");

    let result = retrospex()
        .arg("convert")
        .arg(dir.path().join("missing.png"))
        .arg("-o")
        .arg(&output)
        .output()
        .unwrap();

    assert!(!result.status.success());
    assert!(!output.exists());
}

#[test]
fn test_rejects_unknown_dither() {
    let result = retrospex()
        .args(["convert", "in.png", "--dither", "floyd"])
        .output()
        .unwrap();
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("unknown dither"));
}

#[test]
fn test_modes_lists_builtins() {
    let result = retrospex().arg("modes").output().unwrap();
    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    for name in ["hires", "koala (default)", "mcchar", "hireschar", "hires2", "mcchar3"] {
        assert!(stdout.contains(name), "missing {name} in:\n{stdout}");
    }
    assert!(stdout.contains("4x8 cells, patterns [0b01, 0b10, 0b11], terminal"));
}

#[test]
fn test_modes_reads_env_file() {
    let dir = tempfile::tempdir().unwrap();
    let modes = fixtures::write_modes_file(dir.path(), fixtures::BW_MODES_YAML);

    let result = retrospex()
        .arg("modes")
        .env("RETROSPEX_MODES", &modes)
        .output()
        .unwrap();
    assert!(result.status.success());
    assert!(String::from_utf8_lossy(&result.stdout).contains("bw: 16x8, pixel width 2, 2 colors"));
}

#[test]
fn test_status_without_subcommand() {
    let result = retrospex().output().unwrap();
    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Retrospex v"));
    assert!(stdout.contains("koala"));
}
