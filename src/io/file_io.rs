//! File I/O primitives for the decompression pipeline.
//!
//! - [`open_src_file`] resolves a path string to a `Box<dyn Read>`, handling
//!   the `"-"` sentinel and rejecting directories.
//! - [`open_dst_file`] resolves a path string to a `Box<dyn Write>`, handling
//!   the `"-"` sentinel and enforcing the overwrite policy.
//! - [`output_filename`] derives the decompressed name from a `.xz` / `.txz` name.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::cli::constants::{STDIO_MARK, TAR_EXTENSION, TXZ_EXTENSION, XZ_EXTENSION};
use crate::displaylevel;

#[inline]
pub fn is_stdio(s: &str) -> bool {
    s == STDIO_MARK
}

// ---------------------------------------------------------------------------
// Output naming
// ---------------------------------------------------------------------------

/// Name of the file `src` decompresses to: `a.xz` → `a`, `a.txz` → `a.tar`.
/// Returns `None` when `src` has no recognised suffix (or is nothing but the suffix).
pub fn output_filename(src: &str) -> Option<String> {
    if let Some(base) = src.strip_suffix(XZ_EXTENSION) {
        if !base.is_empty() && !base.ends_with(std::path::MAIN_SEPARATOR) {
            return Some(base.to_owned());
        }
    }
    if let Some(base) = src.strip_suffix(TXZ_EXTENSION) {
        if !base.is_empty() && !base.ends_with(std::path::MAIN_SEPARATOR) {
            return Some(format!("{base}{TAR_EXTENSION}"));
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Source file
// ---------------------------------------------------------------------------

/// Opens a source for reading. `"-"` is standard input; directories are rejected
/// with [`io::ErrorKind::InvalidInput`].
pub fn open_src_file(path: &str) -> io::Result<Box<dyn Read>> {
    if is_stdio(path) {
        displaylevel!(4, "Using stdin for input\n");
        return Ok(Box::new(io::stdin().lock()));
    }

    if Path::new(path).is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{path}: is a directory"),
        ));
    }

    let f = File::open(path)?;
    Ok(Box::new(BufReader::new(f)))
}

// ---------------------------------------------------------------------------
// Destination file
// ---------------------------------------------------------------------------

/// Opens a destination for writing. `"-"` is standard output.
///
/// An existing regular file is only replaced when `overwrite` is set;
/// otherwise the call fails with [`io::ErrorKind::AlreadyExists`].
pub fn open_dst_file(path: &str, overwrite: bool) -> io::Result<Box<dyn Write>> {
    if is_stdio(path) {
        displaylevel!(4, "Using stdout for output\n");
        return Ok(Box::new(io::stdout().lock()));
    }

    let mut opts = OpenOptions::new();
    opts.write(true);
    if overwrite {
        opts.create(true).truncate(true);
    } else {
        opts.create_new(true);
    }
    let f = opts.open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{path}: already exists; use -f to overwrite"),
            )
        } else {
            e
        }
    })?;
    Ok(Box::new(BufWriter::new(f)))
}
