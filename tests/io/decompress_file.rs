// Integration tests for src/io/decompress_file.rs — file-level decompression.
//
// Coverage:
//   - decompress_filename: output written, source removed or kept, overwrite policy
//   - failures leave no partial output and keep the source
//   - test mode writes nothing
//   - decompress_multiple_filenames: derived names, unknown suffixes, first error wins

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::TempDir;
use xzdec::io::{decompress_filename, decompress_multiple_filenames, io_status, Prefs};
use xzdec::Status;

fn xz(data: &[u8]) -> Vec<u8> {
    let mut enc = xz2::write::XzEncoder::new(Vec::new(), 6);
    enc.write_all(data).unwrap();
    enc.finish().unwrap()
}

fn write_xz(dir: &Path, name: &str, data: &[u8]) -> String {
    let path = dir.join(name);
    fs::write(&path, xz(data)).unwrap();
    path.to_str().unwrap().to_owned()
}

fn path_str(dir: &Path, name: &str) -> String {
    dir.join(name).to_str().unwrap().to_owned()
}

// ═════════════════════════════════════════════════════════════════════════════
// decompress_filename
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn writes_output_and_removes_source() {
    let dir = TempDir::new().unwrap();
    let src = write_xz(dir.path(), "a.txt.xz", b"alpha");
    let dst = path_str(dir.path(), "a.txt");

    let stats = decompress_filename(&src, &dst, &Prefs::default()).unwrap();
    assert_eq!(stats.bytes_out, 5);
    assert_eq!(fs::read(&dst).unwrap(), b"alpha");
    assert!(!Path::new(&src).exists());
}

#[test]
fn keep_source_leaves_input() {
    let dir = TempDir::new().unwrap();
    let src = write_xz(dir.path(), "a.xz", b"alpha");
    let dst = path_str(dir.path(), "a");
    let prefs = Prefs { keep_source: true, ..Prefs::default() };

    decompress_filename(&src, &dst, &prefs).unwrap();
    assert!(Path::new(&src).exists());
}

#[test]
fn existing_output_needs_overwrite() {
    let dir = TempDir::new().unwrap();
    let src = write_xz(dir.path(), "a.xz", b"fresh");
    let dst = path_str(dir.path(), "a");
    fs::write(&dst, b"stale").unwrap();

    let err = decompress_filename(&src, &dst, &Prefs::default()).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    assert_eq!(fs::read(&dst).unwrap(), b"stale");
    assert!(Path::new(&src).exists());

    let prefs = Prefs { overwrite: true, ..Prefs::default() };
    decompress_filename(&src, &dst, &prefs).unwrap();
    assert_eq!(fs::read(&dst).unwrap(), b"fresh");
}

#[test]
fn corrupt_input_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let src = path_str(dir.path(), "bad.xz");
    fs::write(&src, b"this is not an xz file").unwrap();
    let dst = path_str(dir.path(), "bad");

    let err = decompress_filename(&src, &dst, &Prefs::default()).unwrap_err();
    assert_eq!(io_status(&err), Some(Status::FormatError));
    assert!(!Path::new(&dst).exists());
    assert!(Path::new(&src).exists());
}

#[test]
fn test_mode_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let src = write_xz(dir.path(), "t.xz", b"verify me");
    let dst = path_str(dir.path(), "t");
    let mut prefs = Prefs::default();
    prefs.set_test_mode(true);

    let stats = decompress_filename(&src, &dst, &prefs).unwrap();
    assert_eq!(stats.bytes_out, 9);
    assert!(!Path::new(&dst).exists());
    assert!(Path::new(&src).exists());
}

#[test]
fn missing_source_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = decompress_filename(
        &path_str(dir.path(), "missing.xz"),
        &path_str(dir.path(), "missing"),
        &Prefs::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

// ═════════════════════════════════════════════════════════════════════════════
// decompress_multiple_filenames
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn multiple_files_use_derived_names() {
    let dir = TempDir::new().unwrap();
    let a = write_xz(dir.path(), "one.xz", b"1");
    let b = write_xz(dir.path(), "two.txz", b"22");
    let prefs = Prefs { keep_source: true, ..Prefs::default() };

    let total = decompress_multiple_filenames(&[a.as_str(), b.as_str()], false, &prefs).unwrap();
    assert_eq!(total.bytes_out, 3);
    assert_eq!(fs::read(dir.path().join("one")).unwrap(), b"1");
    assert_eq!(fs::read(dir.path().join("two.tar")).unwrap(), b"22");
}

#[test]
fn multiple_files_continue_after_failure() {
    let dir = TempDir::new().unwrap();
    let unknown = path_str(dir.path(), "plain.txt");
    fs::write(&unknown, b"x").unwrap();
    let good = write_xz(dir.path(), "good.xz", b"ok");

    let err = decompress_multiple_filenames(&[unknown.as_str(), good.as_str()], false, &Prefs::default())
        .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    assert_eq!(fs::read(dir.path().join("good")).unwrap(), b"ok");
}
