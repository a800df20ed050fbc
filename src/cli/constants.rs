// constants.rs — CLI identity, file suffixes, and the display-level global.
//
// The display level is a crate-level atomic shared by the CLI and the
// stream driver. The decoder handle and the raw boundary never print.
//
// 0 = no output; 1 = errors only; 2 = results + warnings; 3 = per-file info; 4 = verbose

use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::DISPLAY_LEVEL_DEFAULT;

// ── Program identity ──────────────────────────────────────────────────────────

pub const PROGRAM_NAME: &str = "xzdec";
pub const AUTHOR: &str = "the xzdec authors";

// ── File suffixes ─────────────────────────────────────────────────────────────

/// Suffix stripped from `file.xz` to name the decompressed output.
pub const XZ_EXTENSION: &str = ".xz";
/// `file.txz` decompresses to `file.tar`.
pub const TXZ_EXTENSION: &str = ".txz";
pub const TAR_EXTENSION: &str = ".tar";

/// Pseudo file name for standard input / output.
pub const STDIO_MARK: &str = "-";

// ── Display level global ──────────────────────────────────────────────────────

pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Apply `-v` / `-q` counts on top of the default level, saturating at 0.
pub fn adjusted_display_level(verbose: u8, quiet: u8) -> u32 {
    (DISPLAY_LEVEL_DEFAULT + verbose as u32).saturating_sub(quiet as u32)
}

// ── Display macros ────────────────────────────────────────────────────────────

/// Print to stderr unconditionally.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Print to stderr when the display level is at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
