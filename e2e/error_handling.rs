//! E2E Test Suite: error handling
//!
//! Every failure must surface as the codec's own status, unchanged, and the
//! distinct failure kinds must stay distinguishable:
//! - truncated input           → LZMA_BUF_ERROR from finish
//! - flipped integrity check   → LZMA_DATA_ERROR
//! - not .xz at all            → LZMA_FORMAT_ERROR
//! - memory limit too small    → LZMA_MEMLIMIT_ERROR
//! - unknown flag bits         → LZMA_OPTIONS_ERROR at creation

extern crate xzdec;

use std::io::{self, Write};

use xz2::stream::{Check, Stream};
use xzdec::decoder::{Decoder, Status, CONCATENATED, IGNORE_CHECK};
use xzdec::io::{decompress, io_status, StreamOptions};

const MEMLIMIT: u64 = 128 << 20;

fn xz_with_check(data: &[u8], check: Check) -> Vec<u8> {
    let stream = Stream::new_easy_encoder(6, check).unwrap();
    let mut enc = xz2::write::XzEncoder::new_stream(Vec::new(), stream);
    enc.write_all(data).unwrap();
    enc.finish().unwrap()
}

/// Offset of the block's check field in a single-block stream.
///
/// Layout from the end: stream footer (12), index, then the check. The index
/// for one block is indicator, record count, unpadded size and uncompressed
/// size as varints, padding to four bytes, and a CRC32; its size is encoded
/// in the footer's Backward Size field as `(size / 4) - 1`.
fn check_offset(stream: &[u8], check_len: usize) -> usize {
    let footer = &stream[stream.len() - 12..];
    let backward = u32::from_le_bytes([footer[4], footer[5], footer[6], footer[7]]);
    let index_len = (backward as usize + 1) * 4;
    stream.len() - 12 - index_len - check_len
}

/// Feed everything in one window, then finish; return the first terminal status.
fn run(decoder: &mut Decoder, compressed: &[u8]) -> Status {
    let mut buf = vec![0u8; 64 * 1024];
    {
        let mut win = decoder.set_input(compressed);
        while !win.is_input_exhausted() {
            let (status, _) = win.next_output(&mut buf);
            if !status.is_progress() {
                return status;
            }
        }
    }
    loop {
        let (status, _) = decoder.finish(&mut buf);
        if !status.is_progress() {
            return status;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Truncation vs corruption
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn truncation_reports_buf_error() {
    let compressed = xz_with_check(&b"truncate me ".repeat(500), Check::Crc64);
    for cut in [1, 12, compressed.len() / 2, compressed.len() - 13] {
        let mut dec = Decoder::new(MEMLIMIT, CONCATENATED).unwrap();
        let status = run(&mut dec, &compressed[..compressed.len() - cut]);
        assert_eq!(status, Status::BufError, "cut {cut}");
    }
}

#[test]
fn flipped_check_reports_data_error() {
    let plaintext = b"integrity ".repeat(400);
    let mut compressed = xz_with_check(&plaintext, Check::Crc64);
    let at = check_offset(&compressed, 8);
    compressed[at] ^= 0xFF;

    let mut dec = Decoder::new(MEMLIMIT, CONCATENATED).unwrap();
    assert_eq!(run(&mut dec, &compressed), Status::DataError);
}

#[test]
fn flipped_crc32_check_reports_data_error() {
    let mut compressed = xz_with_check(b"crc32 protected payload", Check::Crc32);
    let at = check_offset(&compressed, 4);
    compressed[at + 3] ^= 0x01;

    let mut dec = Decoder::new(MEMLIMIT, CONCATENATED).unwrap();
    assert_eq!(run(&mut dec, &compressed), Status::DataError);
}

#[test]
fn ignore_check_accepts_flipped_check() {
    let plaintext = b"integrity ".repeat(400);
    let mut compressed = xz_with_check(&plaintext, Check::Crc64);
    let at = check_offset(&compressed, 8);
    compressed[at] ^= 0xFF;

    let mut dec = Decoder::new(MEMLIMIT, CONCATENATED | IGNORE_CHECK).unwrap();
    assert_eq!(run(&mut dec, &compressed), Status::StreamEnd);
}

#[test]
fn truncation_and_corruption_stay_distinct_through_io() {
    let plaintext = b"distinct ".repeat(300);
    let good = xz_with_check(&plaintext, Check::Crc64);

    let truncated = &good[..good.len() - 4];
    let err = decompress(&mut &truncated[..], &mut io::sink(), &StreamOptions::default()).unwrap_err();
    assert_eq!(io_status(&err), Some(Status::BufError));
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

    let mut corrupt = good.clone();
    let at = check_offset(&corrupt, 8);
    corrupt[at + 7] ^= 0x80;
    let err = decompress(&mut corrupt.as_slice(), &mut io::sink(), &StreamOptions::default()).unwrap_err();
    assert_eq!(io_status(&err), Some(Status::DataError));
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

// ─────────────────────────────────────────────────────────────────────────────
// Format, memory, options
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn non_xz_input_reports_format_error() {
    let mut dec = Decoder::new(MEMLIMIT, CONCATENATED).unwrap();
    assert_eq!(run(&mut dec, b"\x1f\x8b\x08\x00gzip, not xz"), Status::FormatError);
}

#[test]
fn memlimit_error_when_dictionary_exceeds_limit() {
    let compressed = xz_with_check(b"small payload, big dictionary", Check::Crc64);
    let mut dec = Decoder::new(64 * 1024, CONCATENATED).unwrap();
    assert_eq!(run(&mut dec, &compressed), Status::MemlimitError);
}

#[test]
fn unknown_flags_fail_creation() {
    for flags in [0x20_0000, 0x8000_0000, u32::MAX] {
        assert_eq!(Decoder::new(MEMLIMIT, flags).unwrap_err(), Status::OptionsError, "{flags:#x}");
    }
}

#[test]
fn empty_input_then_finish_is_buf_error() {
    let mut dec = Decoder::new(MEMLIMIT, CONCATENATED).unwrap();
    assert_eq!(run(&mut dec, &[]), Status::BufError);
}
