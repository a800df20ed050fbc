// xzdec — streaming .xz decompression behind a small C-compatible boundary

pub mod config;
pub mod decoder;
pub mod abi;
pub mod io;
pub mod cli;

// ── Version constants ─────────────────────────────────────────────────────────
pub const VERSION_MAJOR: u32 = 0;
pub const VERSION_MINOR: u32 = 1;
pub const VERSION_RELEASE: u32 = 0;
pub const VERSION_NUMBER: u32 =
    VERSION_MAJOR * 100 * 100 + VERSION_MINOR * 100 + VERSION_RELEASE;
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version number (`major * 10000 + minor * 100 + release`).
pub fn version_number() -> u32 {
    VERSION_NUMBER
}

/// Returns the crate version string.
pub fn version_string() -> &'static str {
    VERSION_STRING
}

/// Returns the version number of the linked liblzma (`lzma_version_number()`).
pub fn liblzma_version_number() -> u32 {
    // SAFETY: no preconditions.
    unsafe { lzma_sys::lzma_version_number() }
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use decoder::{Action, Decoder, InputWindow, Status};
pub use io::{decompress, decompress_to_vec};
