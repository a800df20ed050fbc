// decompress_file.rs — file-level decompression: open, decode, clean up.
//
// A failed decompression never leaves a partial output file behind, and the
// source is removed only after the output was fully written and flushed.

use std::fs;
use std::io::{self, Write};

use crate::displaylevel;
use crate::io::decompress_stream::{decompress_with_stats, StreamStats};
use crate::io::file_io::{is_stdio, open_dst_file, open_src_file, output_filename};
use crate::io::prefs::Prefs;

/// Decompress `src` into `dst`. Either may be `"-"` for stdin / stdout.
/// In test mode `dst` is ignored and the output discarded.
///
/// # Errors
///
/// I/O failures, codec errors (see
/// [`status_to_io`](crate::io::decompress_stream::status_to_io)), or an
/// existing `dst` without `prefs.overwrite`.
pub fn decompress_filename(src: &str, dst: &str, prefs: &Prefs) -> io::Result<StreamStats> {
    let mut reader = open_src_file(src)?;

    if prefs.test_mode {
        let stats = decompress_with_stats(&mut reader, &mut io::sink(), &prefs.stream)?;
        displaylevel!(2, "{src}: OK ({} bytes)\n", stats.bytes_out);
        return Ok(stats);
    }

    let mut writer = open_dst_file(dst, prefs.overwrite)?;
    let result = decompress_with_stats(&mut reader, &mut writer, &prefs.stream)
        .and_then(|stats| writer.flush().map(|()| stats));
    drop(writer);

    let stats = match result {
        Ok(stats) => stats,
        Err(e) => {
            if !is_stdio(dst) {
                let _ = fs::remove_file(dst);
            }
            return Err(e);
        }
    };

    displaylevel!(
        3,
        "{src}: {} -> {} bytes{}\n",
        stats.bytes_in,
        stats.bytes_out,
        ratio_suffix(&stats)
    );

    if !prefs.keep_source && !is_stdio(src) && !is_stdio(dst) {
        fs::remove_file(src)?;
    }
    Ok(stats)
}

/// Decompress every file in `srcs` to its derived output name, or to stdout
/// when `to_stdout` is set. Keeps going after a failure and reports the first
/// error at the end.
pub fn decompress_multiple_filenames(
    srcs: &[&str],
    to_stdout: bool,
    prefs: &Prefs,
) -> io::Result<StreamStats> {
    let mut total = StreamStats::default();
    let mut first_err: Option<io::Error> = None;

    for &src in srcs {
        let dst = if to_stdout || prefs.test_mode || is_stdio(src) {
            Some(crate::cli::constants::STDIO_MARK.to_owned())
        } else {
            output_filename(src)
        };
        let Some(dst) = dst else {
            displaylevel!(1, "{src}: filename has an unknown suffix, skipping\n");
            first_err.get_or_insert_with(|| {
                io::Error::new(io::ErrorKind::InvalidInput, format!("{src}: unknown suffix"))
            });
            continue;
        };

        match decompress_filename(src, &dst, prefs) {
            Ok(stats) => {
                total.bytes_in += stats.bytes_in;
                total.bytes_out += stats.bytes_out;
            }
            Err(e) => {
                displaylevel!(1, "{src}: {e}\n");
                first_err.get_or_insert(e);
            }
        }
    }

    match first_err {
        Some(e) => Err(e),
        None => Ok(total),
    }
}

fn ratio_suffix(stats: &StreamStats) -> String {
    if stats.bytes_out == 0 {
        return String::new();
    }
    format!(" ({:.1}%)", stats.bytes_in as f64 * 100.0 / stats.bytes_out as f64)
}
