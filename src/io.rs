//! Host-side decompression on top of the decoder handle.
//!
//! [`decompress_stream`] is the push/pull loop a boundary host runs, over
//! `Read`/`Write`; the other sub-modules add file handling for the CLI.

pub mod decompress_file;
pub mod decompress_stream;
pub mod file_io;
pub mod prefs;

pub use prefs::Prefs;

// ── Stream API ────────────────────────────────────────────────────────────────
pub use decompress_stream::{
    decompress, decompress_to_vec, decompress_with_stats, io_status, status_to_io, StreamOptions,
    StreamStats,
};

// ── File API ──────────────────────────────────────────────────────────────────
pub use decompress_file::{decompress_filename, decompress_multiple_filenames};
pub use file_io::output_filename;
