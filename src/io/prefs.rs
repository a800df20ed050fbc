// prefs.rs — per-run preferences for file-level decompression.
//
// `Prefs` is a plain value built by the CLI and passed by reference to the
// file operations; the decoder parameters live in the embedded
// `StreamOptions`.

use crate::decoder::{CONCATENATED, IGNORE_CHECK};
use crate::io::decompress_stream::StreamOptions;

/// Preferences for [`decompress_filename`](crate::io::decompress_filename).
#[derive(Debug, Clone, Default)]
pub struct Prefs {
    /// Decoder parameters and buffer sizing.
    pub stream: StreamOptions,
    /// Replace an existing destination file (`-f`).
    pub overwrite: bool,
    /// Keep the source file after a successful decompression (`-k`).
    /// Sources are only ever removed when this is `false` and the output is a file.
    pub keep_source: bool,
    /// Decode and verify, but discard the output (`-t`).
    pub test_mode: bool,
}

impl Prefs {
    pub fn set_memlimit(&mut self, memlimit: u64) -> u64 {
        self.stream.memlimit = memlimit;
        memlimit
    }

    /// Stop after the first .xz stream instead of decoding concatenated streams.
    pub fn set_single_stream(&mut self, single: bool) -> bool {
        if single {
            self.stream.flags &= !CONCATENATED;
        } else {
            self.stream.flags |= CONCATENATED;
        }
        single
    }

    /// Skip integrity-check verification.
    pub fn set_ignore_check(&mut self, ignore: bool) -> bool {
        if ignore {
            self.stream.flags |= IGNORE_CHECK;
        } else {
            self.stream.flags &= !IGNORE_CHECK;
        }
        ignore
    }

    pub fn set_test_mode(&mut self, test: bool) -> bool {
        self.test_mode = test;
        test
    }
}
