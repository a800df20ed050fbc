// config.rs — Compile-time configuration defaults.
//
// The stream driver and the CLI start from these values; the CLI can
// override the memory limit (-M / XZDEC_MEMLIMIT) and the decoder flags
// (--single-stream, --ignore-check) at runtime.

use crate::decoder::types::CONCATENATED;

pub const KB: usize = 1 << 10;
pub const MB: usize = 1 << 20;

// Size of the input chunk and of each output buffer handed to the decoder.
pub const BUF_SIZE: usize = 64 * KB;

// Default memory limit for the decoder: large enough for archives encoded
// with `xz -9` (64 MiB dictionary) plus margin.
pub const MEMLIMIT_DEFAULT: u64 = 128 * MB as u64;

// Default decoder flags: keep decoding concatenated .xz streams until finish.
pub const FLAGS_DEFAULT: u32 = CONCATENATED;

// Initial display level (2 = results + warnings).
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;
