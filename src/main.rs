//! Binary entry point for the `xzdec` command-line tool.
//!
//! # Control flow
//!
//! 1. [`Args::parse`] reads the command line.
//! 2. The display level is set from `-v` / `-q`.
//! 3. [`run`] dispatches to the file or stream operation.
//!
//! # Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0    | Success |
//! | 1    | Any file failed to decompress, or bad usage |

use std::io::IsTerminal;
use std::process;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;

use xzdec::cli::args::Args;
use xzdec::cli::constants::{display_level, set_display_level, AUTHOR, PROGRAM_NAME, STDIO_MARK};
use xzdec::io::{decompress_filename, decompress_multiple_filenames};

// ── Dispatch ──────────────────────────────────────────────────────────────────

fn run(args: &Args) -> Result<()> {
    xzdec::displaylevel!(
        4,
        "*** {} v{} {}-bit, by {} ***\n",
        PROGRAM_NAME,
        xzdec::VERSION_STRING,
        std::mem::size_of::<*const ()>() * 8,
        AUTHOR
    );

    let prefs = args.prefs();
    let inputs = args.inputs();

    if inputs.contains(&STDIO_MARK) && std::io::stdin().is_terminal() {
        bail!("refusing to read compressed data from a terminal");
    }

    if let Some(output) = &args.output {
        let [src] = inputs.as_slice() else {
            bail!("--output requires exactly one input file");
        };
        decompress_filename(src, output, &prefs).with_context(|| src.to_string())?;
        return Ok(());
    }

    if inputs == [STDIO_MARK] {
        decompress_filename(STDIO_MARK, STDIO_MARK, &prefs).context("(stdin)")?;
        return Ok(());
    }

    // Per-file errors are reported as they happen.
    decompress_multiple_filenames(&inputs, args.stdout, &prefs)
        .map_err(|_| anyhow!("some files could not be decompressed"))?;
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let args = Args::parse();
    set_display_level(args.display_level());

    if let Err(e) = run(&args) {
        if display_level() >= 1 {
            xzdec::display!("{PROGRAM_NAME}: {e:#}\n");
        }
        process::exit(1);
    }
}
