// e2e/cli_integration.rs — CLI integration tests
//
// Tests the `xzdec` binary as a black-box CLI tool using std::process::Command.
// Covers file and stdio decompression, keep/force/test flags, the memory
// limit option and its environment variable, and exit codes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Locate the `xzdec` binary produced by Cargo.
fn xzdec_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_xzdec") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("xzdec");
    p
}

fn xz(data: &[u8]) -> Vec<u8> {
    let mut enc = xz2::write::XzEncoder::new(Vec::new(), 6);
    enc.write_all(data).unwrap();
    enc.finish().unwrap()
}

fn content() -> Vec<u8> {
    "Hello, xz!\n".repeat(400).into_bytes()
}

/// TempDir with `input.txt.xz` holding the compressed `content()`.
fn make_temp_input() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.txt.xz");
    fs::write(&path, xz(&content())).unwrap();
    (dir, path)
}

fn xzdec(dir: &Path) -> Command {
    let mut cmd = Command::new(xzdec_bin());
    cmd.current_dir(dir).env_remove("XZDEC_MEMLIMIT");
    cmd
}

// ── 1. File decompression ────────────────────────────────────────────────────

#[test]
fn test_cli_decompress_file_removes_source() {
    let (dir, input) = make_temp_input();
    let status = xzdec(dir.path()).arg(&input).status().unwrap();
    assert!(status.success());
    assert_eq!(fs::read(dir.path().join("input.txt")).unwrap(), content());
    assert!(!input.exists(), "source should be removed without -k");
}

#[test]
fn test_cli_keep_source() {
    let (dir, input) = make_temp_input();
    let status = xzdec(dir.path()).arg("-k").arg(&input).status().unwrap();
    assert!(status.success());
    assert!(input.exists());
    assert_eq!(fs::read(dir.path().join("input.txt")).unwrap(), content());
}

#[test]
fn test_cli_output_option() {
    let (dir, input) = make_temp_input();
    let out = dir.path().join("custom.bin");
    let status = xzdec(dir.path())
        .args(["-k", "-o"])
        .arg(&out)
        .arg(&input)
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read(&out).unwrap(), content());
}

// ── 2. Overwrite policy ───────────────────────────────────────────────────────

#[test]
fn test_cli_refuses_overwrite_without_force() {
    let (dir, input) = make_temp_input();
    let existing = dir.path().join("input.txt");
    fs::write(&existing, b"keep me").unwrap();

    let output = xzdec(dir.path()).arg(&input).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(fs::read(&existing).unwrap(), b"keep me");
    assert!(input.exists());

    let status = xzdec(dir.path()).arg("-f").arg(&input).status().unwrap();
    assert!(status.success());
    assert_eq!(fs::read(&existing).unwrap(), content());
}

// ── 3. Standard streams ───────────────────────────────────────────────────────

#[test]
fn test_cli_stdout_flag() {
    let (dir, input) = make_temp_input();
    let output = xzdec(dir.path()).arg("-c").arg(&input).output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, content());
    assert!(input.exists(), "-c implies keep");
    assert!(!dir.path().join("input.txt").exists());
}

#[test]
fn test_cli_stdin_to_stdout() {
    let dir = TempDir::new().unwrap();
    let mut child = xzdec(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(&xz(&content())).unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, content());
}

#[test]
fn test_cli_concatenated_files_to_stdout() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.xz");
    let b = dir.path().join("b.xz");
    fs::write(&a, xz(b"first ")).unwrap();
    fs::write(&b, xz(b"second")).unwrap();
    let output = xzdec(dir.path()).arg("-c").arg(&a).arg(&b).output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, b"first second");
}

// ── 4. Test mode ──────────────────────────────────────────────────────────────

#[test]
fn test_cli_test_mode() {
    let (dir, input) = make_temp_input();
    let output = xzdec(dir.path()).arg("-t").arg(&input).output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(input.exists());
    assert!(!dir.path().join("input.txt").exists());
}

// ── 5. Failures ───────────────────────────────────────────────────────────────

#[test]
fn test_cli_corrupt_input_exit_code() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.xz");
    fs::write(&bad, b"definitely not xz").unwrap();
    let output = xzdec(dir.path()).arg(&bad).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("bad").exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("format"), "stderr: {stderr}");
}

#[test]
fn test_cli_quiet_suppresses_errors() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.xz");
    fs::write(&bad, b"definitely not xz").unwrap();
    let output = xzdec(dir.path()).arg("-qq").arg(&bad).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_cli_unknown_suffix() {
    let dir = TempDir::new().unwrap();
    let plain = dir.path().join("plain.txt");
    fs::write(&plain, b"x").unwrap();
    let output = xzdec(dir.path()).arg(&plain).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_memlimit_flag_and_env() {
    let (dir, input) = make_temp_input();

    let output = xzdec(dir.path()).args(["-c", "-M", "64KiB"]).arg(&input).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let output = xzdec(dir.path())
        .env("XZDEC_MEMLIMIT", "64KiB")
        .arg("-c")
        .arg(&input)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let output = xzdec(dir.path()).args(["-c", "-M", "max"]).arg(&input).output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, content());
}

#[test]
fn test_cli_version() {
    let output = Command::new(xzdec_bin()).arg("--version").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "stdout: {stdout}");
}
