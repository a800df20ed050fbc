// args.rs — command-line definition for the `xzdec` binary.
//
// Parsing is done by clap; this module only declares the options and turns
// the parsed values into the `Prefs` consumed by the I/O layer.

use clap::{ArgAction, Parser};

use crate::cli::arg_utils::parse_memlimit;
use crate::cli::constants::{adjusted_display_level, STDIO_MARK};
use crate::config::MEMLIMIT_DEFAULT;
use crate::io::Prefs;

/// Decompress .xz files.
///
/// With no FILE, or when FILE is `-`, reads standard input and writes
/// standard output.
#[derive(Parser, Debug, Clone)]
#[command(name = "xzdec", version, about = "Decompress .xz files")]
pub struct Args {
    /// Files to decompress.
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Write to standard output and keep the input files.
    #[arg(short = 'c', long = "stdout")]
    pub stdout: bool,

    /// Keep the input files after decompressing them.
    #[arg(short, long)]
    pub keep: bool,

    /// Overwrite existing output files.
    #[arg(short, long)]
    pub force: bool,

    /// Verify the integrity of the input without writing output.
    #[arg(short, long)]
    pub test: bool,

    /// Decoder memory usage limit, e.g. `64MiB`; `0` or `max` for no limit.
    #[arg(
        short = 'M',
        long,
        env = "XZDEC_MEMLIMIT",
        value_name = "LIMIT",
        value_parser = parse_memlimit
    )]
    pub memlimit: Option<u64>,

    /// Stop after the first .xz stream and ignore any trailing data.
    #[arg(long)]
    pub single_stream: bool,

    /// Do not verify the integrity check of the decompressed data.
    #[arg(long)]
    pub ignore_check: bool,

    /// Write the output to this file (single input only).
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
    pub output: Option<String>,

    /// Be more verbose; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress warnings; repeat to suppress errors too.
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl Args {
    /// Display level after `-v` / `-q`.
    pub fn display_level(&self) -> u32 {
        adjusted_display_level(self.verbose, self.quiet)
    }

    /// Input names, with an empty list meaning standard input.
    pub fn inputs(&self) -> Vec<&str> {
        if self.files.is_empty() {
            vec![STDIO_MARK]
        } else {
            self.files.iter().map(String::as_str).collect()
        }
    }

    /// Builds the run preferences. `--stdout` implies `--keep`.
    pub fn prefs(&self) -> Prefs {
        let mut prefs = Prefs::default();
        prefs.set_memlimit(self.memlimit.unwrap_or(MEMLIMIT_DEFAULT));
        prefs.set_single_stream(self.single_stream);
        prefs.set_ignore_check(self.ignore_check);
        prefs.set_test_mode(self.test);
        prefs.overwrite = self.force;
        prefs.keep_source = self.keep || self.stdout;
        prefs
    }
}
