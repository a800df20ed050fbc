// Integration tests for src/io/decompress_stream.rs — the Read → Write driver.
//
// Coverage:
//   - decompress / decompress_with_stats over readers that return short reads
//   - buffer sizes from one byte up to the default
//   - single-stream mode ignores trailing bytes
//   - error statuses survive the io::Error wrapping
//   - decompress_to_vec

use std::io::{self, Cursor, Read, Write};

use xzdec::decoder::{Status, CONCATENATED};
use xzdec::io::{decompress, decompress_to_vec, decompress_with_stats, io_status, StreamOptions};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn xz(data: &[u8]) -> Vec<u8> {
    let mut enc = xz2::write::XzEncoder::new(Vec::new(), 6);
    enc.write_all(data).unwrap();
    enc.finish().unwrap()
}

fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8 ^ (i / 7) as u8).collect()
}

/// Reader that returns at most `max` bytes per call and an
/// `Interrupted` error every third call.
struct Trickle<'a> {
    data: &'a [u8],
    max: usize,
    calls: usize,
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.calls += 1;
        if self.calls % 3 == 0 {
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        let n = self.max.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

fn opts_with_buffer(buffer_size: usize) -> StreamOptions {
    StreamOptions { buffer_size, ..StreamOptions::default() }
}

// ═════════════════════════════════════════════════════════════════════════════
// Round trips
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn decompress_from_cursor() {
    let original = sample(100_000);
    let compressed = xz(&original);
    let mut out = Vec::new();
    let n = decompress(&mut Cursor::new(&compressed), &mut out, &StreamOptions::default()).unwrap();
    assert_eq!(n, original.len() as u64);
    assert_eq!(out, original);
}

#[test]
fn stats_count_both_sides() {
    let original = sample(10_000);
    let compressed = xz(&original);
    let mut out = Vec::new();
    let stats =
        decompress_with_stats(&mut compressed.as_slice(), &mut out, &StreamOptions::default())
            .unwrap();
    assert_eq!(stats.bytes_in, compressed.len() as u64);
    assert_eq!(stats.bytes_out, original.len() as u64);
}

#[test]
fn short_and_interrupted_reads() {
    let original = sample(50_000);
    let compressed = xz(&original);
    let mut src = Trickle { data: &compressed, max: 97, calls: 0 };
    let mut out = Vec::new();
    decompress(&mut src, &mut out, &StreamOptions::default()).unwrap();
    assert_eq!(out, original);
}

#[test]
fn tiny_buffers() {
    let original = sample(5_000);
    let compressed = xz(&original);
    for size in [1, 2, 7, 64, 4096] {
        let mut out = Vec::new();
        decompress(&mut compressed.as_slice(), &mut out, &opts_with_buffer(size)).unwrap();
        assert_eq!(out, original, "buffer size {size}");
    }
}

#[test]
fn zero_buffer_size_is_clamped() {
    let compressed = xz(b"clamped");
    let mut out = Vec::new();
    decompress(&mut compressed.as_slice(), &mut out, &opts_with_buffer(0)).unwrap();
    assert_eq!(out, b"clamped");
}

#[test]
fn empty_plaintext() {
    let compressed = xz(b"");
    let mut out = Vec::new();
    assert_eq!(decompress(&mut compressed.as_slice(), &mut out, &StreamOptions::default()).unwrap(), 0);
    assert!(out.is_empty());
}

// ═════════════════════════════════════════════════════════════════════════════
// Stream boundaries
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn concatenated_streams_by_default() {
    let mut compressed = xz(b"abc");
    compressed.extend_from_slice(&xz(b"def"));
    let mut out = Vec::new();
    decompress(&mut compressed.as_slice(), &mut out, &StreamOptions::default()).unwrap();
    assert_eq!(out, b"abcdef");
}

#[test]
fn single_stream_ignores_trailing_data() {
    let mut compressed = xz(b"abc");
    compressed.extend_from_slice(b"trailing garbage");
    let opts = StreamOptions { flags: StreamOptions::default().flags & !CONCATENATED, ..Default::default() };
    let mut out = Vec::new();
    decompress(&mut compressed.as_slice(), &mut out, &opts).unwrap();
    assert_eq!(out, b"abc");
}

#[test]
fn trailing_garbage_rejected_in_concatenated_mode() {
    // Only the first stream can fail with FORMAT_ERROR; a bad header after it
    // is corrupt data.
    let mut compressed = xz(b"abc");
    compressed.extend_from_slice(b"trailing garbage");
    let mut out = Vec::new();
    let err = decompress(&mut compressed.as_slice(), &mut out, &StreamOptions::default()).unwrap_err();
    assert_eq!(io_status(&err), Some(Status::DataError));
}

// ═════════════════════════════════════════════════════════════════════════════
// Errors
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn truncated_input_is_unexpected_eof() {
    let compressed = xz(&sample(1000));
    let truncated = &compressed[..compressed.len() - 5];
    let err = decompress(&mut &truncated[..], &mut io::sink(), &StreamOptions::default()).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    assert_eq!(io_status(&err), Some(Status::BufError));
}

#[test]
fn memlimit_too_small() {
    let compressed = xz(&sample(1000));
    let opts = StreamOptions { memlimit: 1024, ..StreamOptions::default() };
    let err = decompress(&mut compressed.as_slice(), &mut io::sink(), &opts).unwrap_err();
    assert_eq!(io_status(&err), Some(Status::MemlimitError));
}

#[test]
fn writer_errors_propagate() {
    struct Full;
    impl Write for Full {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::WriteZero, "disk full"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
    let compressed = xz(&sample(1000));
    let err = decompress(&mut compressed.as_slice(), &mut Full, &StreamOptions::default()).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::WriteZero);
    assert_eq!(io_status(&err), None);
}

// ═════════════════════════════════════════════════════════════════════════════
// decompress_to_vec
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn to_vec_roundtrip() {
    let original = sample(300_000);
    assert_eq!(decompress_to_vec(&xz(&original)).unwrap(), original);
}

#[test]
fn to_vec_reports_status() {
    assert_eq!(decompress_to_vec(b"not xz at all"), Err(Status::FormatError));
    let compressed = xz(b"cut short");
    assert_eq!(decompress_to_vec(&compressed[..20]), Err(Status::BufError));
}
