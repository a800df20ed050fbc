//! E2E Test Suite: C-ABI boundary
//!
//! Drives the eight exported `xzdec_*` functions exactly as a sandboxed host
//! would: buffers come from `xzdec_allocate`, the handle travels as a raw
//! pointer, and every status is checked as the raw `lzma_ret` integer.

extern crate xzdec;

use std::io::Write;
use std::ptr;

use xzdec::abi::{
    xzdec_allocate, xzdec_deallocate, xzdec_drop, xzdec_finish, xzdec_input_empty,
    xzdec_new_stream_decoder, xzdec_next_output, xzdec_set_input, Xzdec,
};

// lzma_ret values as the host sees them.
const LZMA_OK: u32 = 0;
const LZMA_STREAM_END: u32 = 1;
const LZMA_MEMLIMIT_ERROR: u32 = 6;
const LZMA_FORMAT_ERROR: u32 = 7;
const LZMA_OPTIONS_ERROR: u32 = 8;
const LZMA_DATA_ERROR: u32 = 9;
const LZMA_BUF_ERROR: u32 = 10;

const LZMA_CONCATENATED: u32 = 0x08;
const MEM_LIMIT: u32 = 128 * 1024 * 1024;

fn xz(data: &[u8]) -> Vec<u8> {
    let mut enc = xz2::write::XzEncoder::new(Vec::new(), 6);
    enc.write_all(data).unwrap();
    enc.finish().unwrap()
}

fn create(memlimit: u32, flags: u32) -> Result<*mut Xzdec, u32> {
    let mut handle: *mut Xzdec = ptr::null_mut();
    let rc = unsafe { xzdec_new_stream_decoder(memlimit, flags, &mut handle) };
    if rc == LZMA_OK {
        assert!(!handle.is_null());
        Ok(handle)
    } else {
        assert!(handle.is_null(), "handle must not be stored on failure");
        Err(rc)
    }
}

/// Host loop: copy each chunk into module memory, set it as input, drain it,
/// then finish. Returns the first non-OK status (STREAM_END on success) and
/// all bytes produced up to that point.
fn host_decode(compressed: &[u8], chunk: usize, cap: u32) -> (u32, Vec<u8>) {
    let x = create(MEM_LIMIT, LZMA_CONCATENATED).unwrap();
    let out_buf = xzdec_allocate(cap.max(1));
    let mut out = Vec::new();
    let mut len: u32 = 0;

    let rc = 'decode: {
        for piece in compressed.chunks(chunk.max(1)) {
            let in_buf = xzdec_allocate(piece.len() as u32);
            unsafe {
                ptr::copy_nonoverlapping(piece.as_ptr(), in_buf, piece.len());
                xzdec_set_input(x, in_buf, piece.len() as u32);
                while xzdec_input_empty(x) == 0 {
                    let rc = xzdec_next_output(x, out_buf, cap, &mut len);
                    out.extend_from_slice(std::slice::from_raw_parts(out_buf, len as usize));
                    if rc != LZMA_OK {
                        xzdec_deallocate(in_buf);
                        break 'decode rc;
                    }
                }
                xzdec_deallocate(in_buf);
            }
        }
        loop {
            let rc = unsafe { xzdec_finish(x, out_buf, cap, &mut len) };
            out.extend_from_slice(unsafe { std::slice::from_raw_parts(out_buf, len as usize) });
            if rc != LZMA_OK {
                break 'decode rc;
            }
        }
    };

    unsafe {
        xzdec_deallocate(out_buf);
        xzdec_drop(x);
    }
    (rc, out)
}

// ─────────────────────────────────────────────────────────────────────────────
// Raw memory
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn allocate_and_deallocate() {
    let p = xzdec_allocate(4096);
    assert!(!p.is_null());
    unsafe {
        ptr::write_bytes(p, 0xA5, 4096);
        assert_eq!(*p.add(4095), 0xA5);
        xzdec_deallocate(p);
    }
}

#[test]
fn zero_length_allocation_can_be_released() {
    let p = xzdec_allocate(0);
    unsafe { xzdec_deallocate(p) };
}

#[test]
fn deallocate_null_is_a_no_op() {
    unsafe { xzdec_deallocate(ptr::null_mut()) };
}

// ─────────────────────────────────────────────────────────────────────────────
// Handle lifecycle
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn fresh_handle_reports_empty_input() {
    let x = create(MEM_LIMIT, LZMA_CONCATENATED).unwrap();
    unsafe {
        assert_eq!(xzdec_input_empty(x), 1);
        xzdec_drop(x);
    }
}

#[test]
fn bad_flags_return_options_error_verbatim() {
    assert_eq!(create(MEM_LIMIT, 0x4000_0000).unwrap_err(), LZMA_OPTIONS_ERROR);
}

#[test]
fn input_empty_tracks_window() {
    let compressed = xz(b"window");
    let x = create(MEM_LIMIT, LZMA_CONCATENATED).unwrap();
    let mut out = [0u8; 64];
    let mut len = 0u32;
    unsafe {
        xzdec_set_input(x, compressed.as_ptr(), compressed.len() as u32);
        assert_eq!(xzdec_input_empty(x), 0);
        let rc = xzdec_next_output(x, out.as_mut_ptr(), out.len() as u32, &mut len);
        assert_eq!(rc, LZMA_OK);
        assert_eq!(xzdec_input_empty(x), 1);

        // Zero-length window.
        xzdec_set_input(x, compressed.as_ptr(), 0);
        assert_eq!(xzdec_input_empty(x), 1);

        let rc = xzdec_finish(x, out[len as usize..].as_mut_ptr(), (64 - len) as u32, &mut len);
        assert_eq!(rc, LZMA_STREAM_END);
        xzdec_drop(x);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Decoding through the boundary
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn host_loop_roundtrip() {
    let original = b"boundary roundtrip ".repeat(5_000);
    let compressed = xz(&original);
    for (chunk, cap) in [(1, 1), (7, 100), (4096, 65_536), (compressed.len(), 1 << 20)] {
        let (rc, out) = host_decode(&compressed, chunk, cap);
        assert_eq!(rc, LZMA_STREAM_END, "chunk {chunk}, cap {cap}");
        assert_eq!(out, original, "chunk {chunk}, cap {cap}");
    }
}

#[test]
fn zero_capacity_reports_zero_length() {
    let compressed = xz(b"no room");
    let x = create(MEM_LIMIT, LZMA_CONCATENATED).unwrap();
    let mut len = u32::MAX;
    unsafe {
        xzdec_set_input(x, compressed.as_ptr(), compressed.len() as u32);
        let rc = xzdec_next_output(x, ptr::null_mut(), 0, &mut len);
        assert!(rc == LZMA_OK || rc == LZMA_BUF_ERROR, "rc {rc}");
        assert_eq!(len, 0);
        xzdec_drop(x);
    }
}

#[test]
fn errors_pass_through_as_raw_codes() {
    let (rc, out) = host_decode(b"plainly not xz data", 64, 64);
    assert_eq!(rc, LZMA_FORMAT_ERROR);
    assert!(out.is_empty());

    let compressed = xz(&b"cut".repeat(100));
    let (rc, _) = host_decode(&compressed[..compressed.len() - 1], 64, 64);
    assert_eq!(rc, LZMA_BUF_ERROR);
}

#[test]
fn memlimit_error_through_boundary() {
    let compressed = xz(b"needs a dictionary");
    let x = create(4096, LZMA_CONCATENATED).unwrap();
    let mut out = [0u8; 64];
    let mut len = 0u32;
    unsafe {
        xzdec_set_input(x, compressed.as_ptr(), compressed.len() as u32);
        let rc = xzdec_next_output(x, out.as_mut_ptr(), 64, &mut len);
        assert_eq!(rc, LZMA_MEMLIMIT_ERROR);
        xzdec_drop(x);
    }
}

#[test]
fn data_error_is_distinct_from_truncation() {
    let mut x: u32 = 7;
    let noise: Vec<u8> = (0..8192)
        .map(|_| {
            x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (x >> 16) as u8
        })
        .collect();
    let mut compressed = xz(&noise);
    let mid = compressed.len() / 2;
    compressed[mid] ^= 0x40;
    let (rc, _) = host_decode(&compressed, 1024, 4096);
    assert_eq!(rc, LZMA_DATA_ERROR);
}
