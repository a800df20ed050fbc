//! The decoder handle: one liblzma stream decoder plus its input window.
//!
//! The handle owns the `lzma_stream` (and through it every allocation liblzma
//! makes) and releases it with `lzma_end` on drop. Input bytes are never
//! copied: `next_in`/`avail_in` point into memory the caller still owns.
//! On the safe side that memory is lent through an [`InputWindow`] guard,
//! which empties the window again when it goes out of scope. Stepping the
//! `Decoder` directly empties the window first, so even a leaked guard never
//! lets the handle read past the borrow. Output buffers are only referenced
//! for the duration of a single step.

use core::fmt;
use core::{mem, ptr};

use lzma_sys::{lzma_code, lzma_end, lzma_stream, lzma_stream_decoder};

use crate::decoder::types::{Action, Status};

/// Streaming .xz decoder handle.
///
/// Lifecycle: [`Decoder::new`] → any number of [`set_input`](Decoder::set_input) /
/// [`next_output`](InputWindow::next_output) / [`finish`](Decoder::finish) calls → drop.
///
/// Not safe for use from several call sequences at once; it is `Send` but not `Sync`.
pub struct Decoder {
    stream: lzma_stream,
}

// SAFETY: the stream state lives behind liblzma's `internal` pointer and is only
// touched through `&mut self`. Safe code can only install an input window for
// the length of an `InputWindow` borrow.
unsafe impl Send for Decoder {}

impl Decoder {
    /// Create a stream decoder with an empty input window.
    ///
    /// `memlimit` caps liblzma's dictionary and history memory, `flags` is any
    /// combination of the constants in [`types`](crate::decoder::types). Both are
    /// passed to `lzma_stream_decoder` unmodified.
    ///
    /// # Errors
    ///
    /// Returns the status `lzma_stream_decoder` reported, e.g.
    /// [`Status::OptionsError`] for unsupported flag bits or [`Status::MemError`].
    pub fn new(memlimit: u64, flags: u32) -> Result<Self, Status> {
        Self::new_raw(memlimit, flags).map_err(status_from_raw)
    }

    /// Like [`new`](Decoder::new) but reports the raw `lzma_ret` on failure.
    pub(crate) fn new_raw(memlimit: u64, flags: u32) -> Result<Self, u32> {
        let mut decoder = Decoder {
            // SAFETY: lzma_stream is plain data; all-zero is LZMA_STREAM_INIT
            // (null pointers, zero counters, null allocator).
            stream: unsafe { mem::zeroed() },
        };
        // On failure `decoder` is dropped here, and lzma_end releases anything
        // the partial initialisation allocated.
        // SAFETY: `stream` is initialised to LZMA_STREAM_INIT and owned by `decoder`.
        let rc = unsafe { lzma_stream_decoder(&mut decoder.stream, memlimit, flags) } as u32;
        if rc != Status::Ok.as_raw() {
            return Err(rc);
        }
        Ok(decoder)
    }

    /// Lend `input` to the decoder as the new input window.
    ///
    /// Any unread bytes of a previous window are abandoned. The returned guard
    /// drives decoding against the window; when it is dropped the window is
    /// emptied, and bytes it did not consume are abandoned as well.
    pub fn set_input<'d>(&'d mut self, input: &'d [u8]) -> InputWindow<'d> {
        // SAFETY: `input` outlives the returned guard, and the guard empties
        // the window on drop. A leaked guard is covered by `next_output` and
        // `finish` on `Decoder` emptying the window before they step.
        unsafe { self.set_input_raw(input.as_ptr(), input.len()) };
        InputWindow { decoder: self }
    }

    /// Point the input window at raw host memory.
    ///
    /// # Safety
    ///
    /// `len` bytes starting at `ptr` must stay readable and unmodified until the
    /// window is consumed or replaced. `ptr` may be null only when `len` is 0.
    pub(crate) unsafe fn set_input_raw(&mut self, ptr: *const u8, len: usize) {
        self.stream.next_in = ptr;
        self.stream.avail_in = len;
    }

    /// `true` when no unread bytes remain in the current input window.
    #[inline]
    pub fn is_input_exhausted(&self) -> bool {
        self.stream.avail_in == 0
    }

    /// Number of unread bytes left in the current input window.
    #[inline]
    pub fn available_input(&self) -> usize {
        self.stream.avail_in
    }

    /// Total compressed bytes consumed since creation.
    #[inline]
    pub fn total_in(&self) -> u64 {
        self.stream.total_in
    }

    /// Total decompressed bytes produced since creation.
    #[inline]
    pub fn total_out(&self) -> u64 {
        self.stream.total_out
    }

    /// Decode in normal-progress mode (`LZMA_RUN`) into `output`.
    ///
    /// Runs against an empty window: any window left installed by a leaked
    /// [`InputWindow`] is discarded first, so this only drains output liblzma
    /// still has buffered. Returns the status together with the number of
    /// bytes written to the front of `output`.
    pub fn next_output(&mut self, output: &mut [u8]) -> (Status, usize) {
        self.clear_input();
        self.step(output, Action::Run)
    }

    /// Decode in end-of-stream mode (`LZMA_FINISH`) into `output`.
    ///
    /// Same contract as [`next_output`](Decoder::next_output), but tells liblzma
    /// no more input follows, so it flushes and validates the stream trailer.
    /// Returns [`Status::StreamEnd`] once everything has been written; call
    /// repeatedly while it returns [`Status::Ok`].
    pub fn finish(&mut self, output: &mut [u8]) -> (Status, usize) {
        self.clear_input();
        self.step(output, Action::Finish)
    }

    fn clear_input(&mut self) {
        // SAFETY: an empty window references no memory.
        unsafe { self.set_input_raw(ptr::null(), 0) };
    }

    fn step(&mut self, output: &mut [u8], action: Action) -> (Status, usize) {
        // SAFETY: `output` is writable for the call. The window is either
        // empty or borrowed by a live `InputWindow` that called us.
        let (rc, written) = unsafe { self.code_raw(output.as_mut_ptr(), output.len(), action) };
        (status_from_raw(rc), written)
    }

    /// Run one `lzma_code` step against `cap` bytes at `out`.
    ///
    /// Returns the raw `lzma_ret` and the number of bytes written. The output
    /// pointer is cleared before returning.
    ///
    /// # Safety
    ///
    /// `cap` bytes starting at `out` must be writable for the duration of the call,
    /// and the current input window must still satisfy the `set_input_raw` contract.
    pub(crate) unsafe fn code_raw(&mut self, out: *mut u8, cap: usize, action: Action) -> (u32, usize) {
        self.stream.next_out = out;
        self.stream.avail_out = cap;
        let rc = lzma_code(&mut self.stream, action.to_raw()) as u32;
        let written = cap - self.stream.avail_out;
        self.stream.next_out = ptr::null_mut();
        self.stream.avail_out = 0;
        (rc, written)
    }
}

/// A decoder with a borrowed input window installed.
///
/// Returned by [`Decoder::set_input`]. Dropping it empties the window.
pub struct InputWindow<'d> {
    decoder: &'d mut Decoder,
}

impl InputWindow<'_> {
    /// `true` when every byte of the window has been consumed.
    #[inline]
    pub fn is_input_exhausted(&self) -> bool {
        self.decoder.is_input_exhausted()
    }

    /// Number of unread bytes left in the window.
    #[inline]
    pub fn available_input(&self) -> usize {
        self.decoder.available_input()
    }

    /// `LZMA_RUN` step consuming from the window; see [`Decoder::next_output`].
    ///
    /// Call repeatedly with fresh buffers to drain arbitrarily large output
    /// from one window.
    pub fn next_output(&mut self, output: &mut [u8]) -> (Status, usize) {
        self.decoder.step(output, Action::Run)
    }

    /// `LZMA_FINISH` step consuming from the window; see [`Decoder::finish`].
    pub fn finish(&mut self, output: &mut [u8]) -> (Status, usize) {
        self.decoder.step(output, Action::Finish)
    }

    /// The underlying decoder, for its counters.
    pub fn decoder(&self) -> &Decoder {
        self.decoder
    }
}

impl Drop for InputWindow<'_> {
    fn drop(&mut self) {
        self.decoder.clear_input();
    }
}

impl Drop for Decoder {
    fn drop(&mut self) {
        // SAFETY: the stream was set up by `new_raw`; lzma_end is also valid
        // after a failed lzma_stream_decoder.
        unsafe { lzma_end(&mut self.stream) };
    }
}

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("avail_in", &self.stream.avail_in)
            .field("total_in", &self.stream.total_in)
            .field("total_out", &self.stream.total_out)
            .finish()
    }
}

/// liblzma only documents codes 0..=12; anything else would be a liblzma bug.
fn status_from_raw(rc: u32) -> Status {
    Status::from_raw(rc).unwrap_or(Status::ProgError)
}
