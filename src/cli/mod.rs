//! Command-line interface for the `xzdec` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity, file suffixes, and the `DISPLAY_LEVEL` global with its macros. |
//! | [`arg_utils`] | Size parsing for `--memlimit`. |
//! | [`args`]      | `Args`, the clap definition, and its conversion into [`Prefs`](crate::io::Prefs). |
//!
//! Typical call sequence: `Args::parse` → `Args::prefs` → dispatch to the I/O layer.

pub mod constants;
pub mod arg_utils;
pub mod args;
