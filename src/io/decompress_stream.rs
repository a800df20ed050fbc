// decompress_stream.rs — host-side push/pull driver over the decoder handle.
//
// This is the loop a host runs against the xzdec boundary, expressed over
// `Read` / `Write`:
//
//   1. read up to `buffer_size` compressed bytes and install them as the
//      input window,
//   2. call `next_output` with a fresh output buffer until the window is
//      exhausted, writing every produced byte,
//   3. at end of input call `finish` until liblzma reports STREAM_END.
//
// Memory stays bounded by two `buffer_size` buffers plus liblzma's own state
// (capped by `memlimit`), whatever the stream length.
//
// Codec statuses are mapped to `io::Error`:
//   - LZMA_BUF_ERROR from `finish` means the stream was cut short → UnexpectedEof
//   - LZMA_MEM_ERROR                                             → OutOfMemory
//   - every other non-progress status                            → InvalidData
// The `Status` itself is kept as the error's inner source so callers can
// downcast and branch on it.

use std::io::{self, Read, Write};

use crate::config::{BUF_SIZE, FLAGS_DEFAULT, MEMLIMIT_DEFAULT};
use crate::decoder::{Decoder, Status};
use crate::displaylevel;

// ---------------------------------------------------------------------------
// Options / statistics
// ---------------------------------------------------------------------------

/// Decoder parameters and buffer sizing for [`decompress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamOptions {
    /// Passed to `lzma_stream_decoder` as the memory usage limit.
    pub memlimit: u64,
    /// Passed to `lzma_stream_decoder` as the decoder flags.
    pub flags: u32,
    /// Size of the input chunk and of the output buffer. Values below 1 are treated as 1.
    pub buffer_size: usize,
}

impl Default for StreamOptions {
    fn default() -> Self {
        StreamOptions {
            memlimit: MEMLIMIT_DEFAULT,
            flags: FLAGS_DEFAULT,
            buffer_size: BUF_SIZE,
        }
    }
}

/// Byte counts for one decompressed stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Compressed bytes read from the source.
    pub bytes_in: u64,
    /// Decompressed bytes written to the destination.
    pub bytes_out: u64,
}

// ---------------------------------------------------------------------------
// Status → io::Error
// ---------------------------------------------------------------------------

/// Wrap a codec status in an `io::Error`, keeping the status as its source.
pub fn status_to_io(status: Status) -> io::Error {
    let kind = match status {
        Status::BufError => io::ErrorKind::UnexpectedEof,
        Status::MemError => io::ErrorKind::OutOfMemory,
        _ => io::ErrorKind::InvalidData,
    };
    io::Error::new(kind, status)
}

/// Recover the codec status from an error produced by this module, if any.
pub fn io_status(err: &io::Error) -> Option<Status> {
    err.get_ref().and_then(|inner| inner.downcast_ref::<Status>()).copied()
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Decompress one .xz input (concatenated streams included by default) from
/// `src` into `dst`. Returns the number of decompressed bytes written.
///
/// # Errors
///
/// Returns `Err` on I/O failure, on any codec error status, and on a
/// truncated stream.
pub fn decompress(
    src: &mut impl Read,
    dst: &mut impl Write,
    opts: &StreamOptions,
) -> io::Result<u64> {
    decompress_with_stats(src, dst, opts).map(|stats| stats.bytes_out)
}

/// Like [`decompress`], also reporting how many compressed bytes were read.
pub fn decompress_with_stats(
    src: &mut impl Read,
    dst: &mut impl Write,
    opts: &StreamOptions,
) -> io::Result<StreamStats> {
    let mut decoder = Decoder::new(opts.memlimit, opts.flags).map_err(status_to_io)?;
    let buf_size = opts.buffer_size.max(1);
    let mut in_buf = vec![0u8; buf_size];
    let mut out_buf = vec![0u8; buf_size];
    let mut stats = StreamStats::default();

    loop {
        let n = read_chunk(src, &mut in_buf)?;
        if n == 0 {
            break;
        }
        stats.bytes_in += n as u64;

        let mut window = decoder.set_input(&in_buf[..n]);
        while !window.is_input_exhausted() {
            let (status, written) = window.next_output(&mut out_buf);
            dst.write_all(&out_buf[..written])?;
            stats.bytes_out += written as u64;
            match status {
                s if s.is_progress() => {}
                // Single-stream mode: the stream ended inside this window.
                // Trailing bytes after it are not part of the .xz data.
                Status::StreamEnd => {
                    displaylevel!(4, "stream end with {} trailing bytes ignored\n", window.available_input());
                    drop(window);
                    dst.flush()?;
                    return Ok(stats);
                }
                s => return Err(status_to_io(s)),
            }
        }
        displaylevel!(4, "\rread {} KiB, wrote {} KiB", stats.bytes_in >> 10, stats.bytes_out >> 10);
    }

    loop {
        let (status, written) = decoder.finish(&mut out_buf);
        dst.write_all(&out_buf[..written])?;
        stats.bytes_out += written as u64;
        match status {
            Status::StreamEnd => break,
            s if s.is_progress() => {}
            s => return Err(status_to_io(s)),
        }
    }
    displaylevel!(4, "\r{:>60}\r", "");
    dst.flush()?;
    Ok(stats)
}

/// Decompress a complete in-memory .xz buffer with the default options.
///
/// # Errors
///
/// Returns the first non-progress status other than `STREAM_END`.
pub fn decompress_to_vec(data: &[u8]) -> Result<Vec<u8>, Status> {
    let opts = StreamOptions::default();
    let mut decoder = Decoder::new(opts.memlimit, opts.flags)?;
    let mut out = Vec::with_capacity(data.len().saturating_mul(4));
    let mut chunk = vec![0u8; opts.buffer_size];

    {
        let mut window = decoder.set_input(data);
        while !window.is_input_exhausted() {
            let (status, written) = window.next_output(&mut chunk);
            out.extend_from_slice(&chunk[..written]);
            if !status.is_progress() {
                return Err(status);
            }
        }
    }
    loop {
        let (status, written) = decoder.finish(&mut chunk);
        out.extend_from_slice(&chunk[..written]);
        match status {
            Status::StreamEnd => return Ok(out),
            s if s.is_progress() => {}
            s => return Err(s),
        }
    }
}

// Fill as much of `buf` as one read gives us, retrying on EINTR.
fn read_chunk(src: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match src.read(buf) {
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
