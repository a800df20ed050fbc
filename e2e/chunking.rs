//! E2E Test Suite: chunking invariance
//!
//! The decoded bytes must not depend on how the compressed input is split
//! into windows or how large the output buffers are. Each case drives the
//! safe handle the way a host does: one window per chunk, drain it with
//! `next_output`, then `finish` until `STREAM_END`.

extern crate xzdec;

use std::io::Write;

use xzdec::decoder::{Decoder, Status, CONCATENATED};

const MEMLIMIT: u64 = 128 << 20;

fn xz(data: &[u8], level: u32) -> Vec<u8> {
    let mut enc = xz2::write::XzEncoder::new(Vec::new(), level);
    enc.write_all(data).unwrap();
    enc.finish().unwrap()
}

/// Mixed text and pseudo-random bytes, so both match and literal paths run.
fn corpus(len: usize) -> Vec<u8> {
    let text = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
    let mut x: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..len)
        .map(|i| {
            if (i / 512) % 2 == 0 {
                text[i % text.len()]
            } else {
                x ^= x << 7;
                x ^= x >> 9;
                x as u8
            }
        })
        .collect()
}

fn decode_chunked(compressed: &[u8], chunk: usize, out_cap: usize) -> Vec<u8> {
    let mut dec = Decoder::new(MEMLIMIT, CONCATENATED).unwrap();
    let mut out = Vec::new();
    let mut buf = vec![0u8; out_cap];

    for piece in compressed.chunks(chunk) {
        let mut win = dec.set_input(piece);
        while !win.is_input_exhausted() {
            let (status, n) = win.next_output(&mut buf);
            out.extend_from_slice(&buf[..n]);
            assert_eq!(status, Status::Ok, "chunk {chunk}, cap {out_cap}");
        }
    }
    loop {
        let (status, n) = dec.finish(&mut buf);
        out.extend_from_slice(&buf[..n]);
        match status {
            Status::StreamEnd => break,
            Status::Ok => {}
            other => panic!("finish returned {other:?} (chunk {chunk}, cap {out_cap})"),
        }
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Input chunk sizes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn every_chunk_size_gives_same_output() {
    let original = corpus(40_000);
    let compressed = xz(&original, 6);
    for chunk in [1, 2, 3, 5, 12, 13, 64, 1000, 4096, compressed.len()] {
        assert_eq!(decode_chunked(&compressed, chunk, 4096), original, "chunk {chunk}");
    }
}

#[test]
fn one_byte_windows_and_one_byte_outputs() {
    let original = corpus(2_000);
    let compressed = xz(&original, 1);
    assert_eq!(decode_chunked(&compressed, 1, 1), original);
}

// ─────────────────────────────────────────────────────────────────────────────
// Output capacities
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn output_capacity_does_not_change_result() {
    let original = corpus(100_000);
    let compressed = xz(&original, 6);
    for cap in [1, 17, 512, 65_536, 200_000] {
        assert_eq!(decode_chunked(&compressed, 65_536, cap), original, "cap {cap}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Degenerate plaintexts
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_plaintext_any_chunking() {
    let compressed = xz(b"", 6);
    for chunk in [1, 4, compressed.len()] {
        assert!(decode_chunked(&compressed, chunk, 16).is_empty());
    }
}

#[test]
fn single_byte_plaintext() {
    let compressed = xz(b"Z", 6);
    for chunk in [1, 7, compressed.len()] {
        assert_eq!(decode_chunked(&compressed, chunk, 1), b"Z");
    }
}

#[test]
fn concatenated_streams_split_across_boundary() {
    let a = corpus(3_000);
    let b = corpus(5_000);
    let mut compressed = xz(&a, 6);
    let boundary = compressed.len();
    compressed.extend_from_slice(&xz(&b, 0));

    let mut expected = a.clone();
    expected.extend_from_slice(&b);
    // A chunk straddling the stream boundary, and one ending right at it.
    for chunk in [boundary - 3, boundary, 100] {
        assert_eq!(decode_chunked(&compressed, chunk, 1024), expected, "chunk {chunk}");
    }
}

#[test]
fn stream_padding_between_streams() {
    let mut compressed = xz(b"left", 6);
    compressed.extend_from_slice(&[0u8; 8]);
    compressed.extend_from_slice(&xz(b"right", 6));
    assert_eq!(decode_chunked(&compressed, 5, 64), b"leftright");
}
