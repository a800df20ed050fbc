//! C-ABI boundary — the eight `xzdec_*` symbols a sandboxed host calls.
//!
//! Exported from the `cdylib` / `staticlib` artifacts. For a WASI module:
//!   cargo build --release --lib --target wasm32-wasip1
//!
//! Every integer crossing the boundary is 32 bits wide and every pointer
//! addresses the module's single flat memory. Status codes are liblzma's
//! `lzma_ret` values, returned exactly as liblzma produced them.
//!
//! Contract violations are undefined behaviour and are not detected: using a
//! handle after `xzdec_drop`, dropping twice, using a handle whose creation
//! failed, or letting an input window's memory change before it is consumed.
//! Debug builds only assert that pointers are non-null.

use crate::decoder::{Action, Decoder, Status};

/// Opaque handle type seen by the host. Its input window is installed with
/// `set_input_raw`, so window lifetime is the host's responsibility here.
pub type Xzdec = Decoder;

// ─── raw memory ──────────────────────────────────────────────────────────────

// ─────────────────────────────────────────────────────────────────────────────
// uint8_t *xzdec_allocate(uint32_t len);
//
// malloc pass-through. Returns null on allocation failure (malloc(0) may also
// return null). The region is uninitialised.
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub extern "C" fn xzdec_allocate(len: u32) -> *mut u8 {
    unsafe { libc::malloc(len as usize) as *mut u8 }
}

// ─────────────────────────────────────────────────────────────────────────────
// void xzdec_deallocate(uint8_t *ptr);
//
// free pass-through. `ptr` must come from `xzdec_allocate` (or be null).
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub unsafe extern "C" fn xzdec_deallocate(ptr: *mut u8) {
    libc::free(ptr as *mut libc::c_void);
}

// ─── handle lifecycle ────────────────────────────────────────────────────────

// ─────────────────────────────────────────────────────────────────────────────
// lzma_ret xzdec_new_stream_decoder(uint32_t memlimit, uint32_t flags,
//                                   struct Xzdec **xzdec_ptr);
//
// On LZMA_OK stores a new handle in *xzdec_ptr. On any other code nothing is
// stored and the code from lzma_stream_decoder is returned verbatim.
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub unsafe extern "C" fn xzdec_new_stream_decoder(
    memlimit: u32,
    flags: u32,
    xzdec_ptr: *mut *mut Xzdec,
) -> u32 {
    debug_assert!(!xzdec_ptr.is_null(), "xzdec_new_stream_decoder: null out-pointer");
    match Decoder::new_raw(memlimit as u64, flags) {
        Ok(decoder) => {
            *xzdec_ptr = Box::into_raw(Box::new(decoder));
            Status::Ok.as_raw()
        }
        Err(rc) => rc,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// void xzdec_drop(struct Xzdec *xzdec);
//
// lzma_end + release of the handle storage. Exactly once per created handle.
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub unsafe extern "C" fn xzdec_drop(xzdec: *mut Xzdec) {
    debug_assert!(!xzdec.is_null(), "xzdec_drop: null handle");
    drop(Box::from_raw(xzdec));
}

// ─── input window ────────────────────────────────────────────────────────────

// ─────────────────────────────────────────────────────────────────────────────
// uint32_t xzdec_input_empty(struct Xzdec *xzdec);
//
// 1 when the current input window has no unread bytes, 0 otherwise.
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub unsafe extern "C" fn xzdec_input_empty(xzdec: *mut Xzdec) -> u32 {
    debug_assert!(!xzdec.is_null(), "xzdec_input_empty: null handle");
    (*xzdec).is_input_exhausted() as u32
}

// ─────────────────────────────────────────────────────────────────────────────
// void xzdec_set_input(struct Xzdec *xzdec, const uint8_t *input_buf,
//                      uint32_t input_buf_len);
//
// Borrows (does not copy) the host buffer as the new input window. Unread
// bytes of the previous window are abandoned.
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub unsafe extern "C" fn xzdec_set_input(
    xzdec: *mut Xzdec,
    input_buf: *const u8,
    input_buf_len: u32,
) {
    debug_assert!(!xzdec.is_null(), "xzdec_set_input: null handle");
    (*xzdec).set_input_raw(input_buf, input_buf_len as usize);
}

// ─── output production ───────────────────────────────────────────────────────

// ─────────────────────────────────────────────────────────────────────────────
// lzma_ret xzdec_next_output(struct Xzdec *xzdec, uint8_t *output_buf,
//                            uint32_t output_buf_cap, uint32_t *output_buf_len);
//
// One LZMA_RUN step. *output_buf_len receives the bytes written this call.
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub unsafe extern "C" fn xzdec_next_output(
    xzdec: *mut Xzdec,
    output_buf: *mut u8,
    output_buf_cap: u32,
    output_buf_len: *mut u32,
) -> u32 {
    code_into(xzdec, output_buf, output_buf_cap, output_buf_len, Action::Run)
}

// ─────────────────────────────────────────────────────────────────────────────
// lzma_ret xzdec_finish(struct Xzdec *xzdec, uint8_t *output_buf,
//                       uint32_t output_buf_cap, uint32_t *output_buf_len);
//
// One LZMA_FINISH step. Repeat while it returns LZMA_OK to drain output.
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub unsafe extern "C" fn xzdec_finish(
    xzdec: *mut Xzdec,
    output_buf: *mut u8,
    output_buf_cap: u32,
    output_buf_len: *mut u32,
) -> u32 {
    code_into(xzdec, output_buf, output_buf_cap, output_buf_len, Action::Finish)
}

#[inline(always)]
unsafe fn code_into(
    xzdec: *mut Xzdec,
    output_buf: *mut u8,
    output_buf_cap: u32,
    output_buf_len: *mut u32,
    action: Action,
) -> u32 {
    debug_assert!(!xzdec.is_null(), "null handle");
    debug_assert!(!output_buf_len.is_null(), "null output length pointer");
    let (rc, written) = (*xzdec).code_raw(output_buf, output_buf_cap as usize, action);
    *output_buf_len = written as u32;
    rc
}
