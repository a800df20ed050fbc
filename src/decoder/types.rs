//! Status codes, decoder flags and coding actions.
//!
//! Mirrors the parts of liblzma's `lzma/base.h` and `lzma/container.h` that
//! cross the xzdec boundary:
//! - `lzma_ret` → [`Status`] (same discriminants, so hosts branching on the
//!   numeric value keep working)
//! - `lzma_stream_decoder` flag bits → `TELL_*`, [`CONCATENATED`], [`IGNORE_CHECK`]
//! - `lzma_action` → [`Action`] (only the two actions a decoder uses)

use core::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Decoder flags (lzma/container.h)
// ─────────────────────────────────────────────────────────────────────────────

/// Return [`Status::NoCheck`] once the header says the stream has no integrity check.
/// Equivalent to `LZMA_TELL_NO_CHECK`.
pub const TELL_NO_CHECK: u32 = 0x01;

/// Return [`Status::UnsupportedCheck`] when the check type cannot be verified.
/// Equivalent to `LZMA_TELL_UNSUPPORTED_CHECK`.
pub const TELL_UNSUPPORTED_CHECK: u32 = 0x02;

/// Return [`Status::GetCheck`] as soon as the check type is known.
/// Equivalent to `LZMA_TELL_ANY_CHECK`.
pub const TELL_ANY_CHECK: u32 = 0x04;

/// Decode concatenated .xz streams until `Action::Finish` is given.
/// Equivalent to `LZMA_CONCATENATED`.
pub const CONCATENATED: u32 = 0x08;

/// Skip verification of the integrity check.
/// Equivalent to `LZMA_IGNORE_CHECK`.
pub const IGNORE_CHECK: u32 = 0x10;

/// Every flag bit the stream decoder accepts. Any other bit makes
/// [`Decoder::new`](crate::decoder::Decoder::new) fail with [`Status::OptionsError`].
pub const SUPPORTED_FLAGS: u32 =
    TELL_NO_CHECK | TELL_UNSUPPORTED_CHECK | TELL_ANY_CHECK | CONCATENATED | IGNORE_CHECK;

// ─────────────────────────────────────────────────────────────────────────────
// lzma_action → Action
// ─────────────────────────────────────────────────────────────────────────────

/// How a single coding step treats the input window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Normal progress; more input may follow (`LZMA_RUN`).
    Run,
    /// No more input will be supplied: flush and validate the stream end (`LZMA_FINISH`).
    Finish,
}

impl Action {
    pub(crate) fn to_raw(self) -> lzma_sys::lzma_action {
        match self {
            Action::Run => lzma_sys::LZMA_RUN,
            Action::Finish => lzma_sys::LZMA_FINISH,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// lzma_ret → Status
// ─────────────────────────────────────────────────────────────────────────────

/// The codec engine's native result signal.
///
/// Discriminants are the `lzma_ret` values, so `status as u32` is exactly what
/// the boundary functions hand to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Status {
    /// Progress was made; more output may follow.
    Ok = 0,
    /// The end of the stream was reached and fully validated.
    StreamEnd = 1,
    /// The stream has no integrity check (only with [`TELL_NO_CHECK`]).
    NoCheck = 2,
    /// The integrity check type cannot be verified (only with [`TELL_UNSUPPORTED_CHECK`]).
    UnsupportedCheck = 3,
    /// The integrity check type is now known (only with [`TELL_ANY_CHECK`]).
    GetCheck = 4,
    /// Internal allocation failed.
    MemError = 5,
    /// Decoding needs more memory than the configured limit.
    MemlimitError = 6,
    /// The input is not in the .xz format.
    FormatError = 7,
    /// Unsupported flags or stream options.
    OptionsError = 8,
    /// Compressed data is corrupt, including a mismatched integrity check.
    DataError = 9,
    /// No progress is possible: input exhausted or output buffer full.
    BufError = 10,
    /// Programming error, e.g. calling the decoder after `StreamEnd` with new input.
    ProgError = 11,
    /// Seek requested by a seekable decoder; never produced by the stream decoder.
    SeekNeeded = 12,
}

impl Status {
    /// Map a raw `lzma_ret` to a status. Returns `None` for values liblzma does
    /// not document (its internal `LZMA_RET_INTERNAL*` codes never escape).
    pub fn from_raw(code: u32) -> Option<Self> {
        match code {
            0 => Some(Status::Ok),
            1 => Some(Status::StreamEnd),
            2 => Some(Status::NoCheck),
            3 => Some(Status::UnsupportedCheck),
            4 => Some(Status::GetCheck),
            5 => Some(Status::MemError),
            6 => Some(Status::MemlimitError),
            7 => Some(Status::FormatError),
            8 => Some(Status::OptionsError),
            9 => Some(Status::DataError),
            10 => Some(Status::BufError),
            11 => Some(Status::ProgError),
            12 => Some(Status::SeekNeeded),
            _ => None,
        }
    }

    /// The raw `lzma_ret` value.
    #[inline]
    pub fn as_raw(self) -> u32 {
        self as u32
    }

    /// C identifier of the code, e.g. `"LZMA_DATA_ERROR"`.
    pub fn name(self) -> &'static str {
        match self {
            Status::Ok => "LZMA_OK",
            Status::StreamEnd => "LZMA_STREAM_END",
            Status::NoCheck => "LZMA_NO_CHECK",
            Status::UnsupportedCheck => "LZMA_UNSUPPORTED_CHECK",
            Status::GetCheck => "LZMA_GET_CHECK",
            Status::MemError => "LZMA_MEM_ERROR",
            Status::MemlimitError => "LZMA_MEMLIMIT_ERROR",
            Status::FormatError => "LZMA_FORMAT_ERROR",
            Status::OptionsError => "LZMA_OPTIONS_ERROR",
            Status::DataError => "LZMA_DATA_ERROR",
            Status::BufError => "LZMA_BUF_ERROR",
            Status::ProgError => "LZMA_PROG_ERROR",
            Status::SeekNeeded => "LZMA_SEEK_NEEDED",
        }
    }

    /// Short human-readable description, in the wording `xz` uses for its messages.
    pub fn message(self) -> &'static str {
        match self {
            Status::Ok => "operation completed successfully",
            Status::StreamEnd => "end of stream was reached",
            Status::NoCheck => "no integrity check; not verifying file integrity",
            Status::UnsupportedCheck => "unsupported type of integrity check; not verifying file integrity",
            Status::GetCheck => "integrity check type is now available",
            Status::MemError => "cannot allocate memory",
            Status::MemlimitError => "memory usage limit reached",
            Status::FormatError => "file format not recognized",
            Status::OptionsError => "unsupported options",
            Status::DataError => "compressed data is corrupt",
            Status::BufError => "unexpected end of input",
            Status::ProgError => "internal error (bug)",
            Status::SeekNeeded => "seek needed",
        }
    }

    /// `true` for the hard failures (`MEM_ERROR` and above, `SEEK_NEEDED` excluded).
    #[inline]
    pub fn is_error(self) -> bool {
        !matches!(
            self,
            Status::Ok
                | Status::StreamEnd
                | Status::NoCheck
                | Status::UnsupportedCheck
                | Status::GetCheck
                | Status::SeekNeeded
        )
    }

    /// `true` when decoding may continue after this status: `OK` and the
    /// informational check notifications. `STREAM_END` is terminal and not included.
    #[inline]
    pub fn is_progress(self) -> bool {
        matches!(
            self,
            Status::Ok | Status::NoCheck | Status::UnsupportedCheck | Status::GetCheck
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.name())
    }
}

impl std::error::Error for Status {}
