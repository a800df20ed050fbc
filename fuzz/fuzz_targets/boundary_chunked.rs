#![no_main]
use libfuzzer_sys::fuzz_target;
use xzdec::abi::*;

fuzz_target!(|data: &[u8]| {
    // First byte picks the window size, the rest is fed through the raw
    // boundary functions the way a host would.
    let Some((&split, payload)) = data.split_first() else {
        return;
    };
    let chunk = split as usize % 64 + 1;

    unsafe {
        let mut x: *mut Xzdec = std::ptr::null_mut();
        if xzdec_new_stream_decoder(1 << 24, 0x08, &mut x) != 0 {
            return;
        }
        let out = xzdec_allocate(256);
        let mut len = 0u32;
        'feed: for piece in payload.chunks(chunk) {
            xzdec_set_input(x, piece.as_ptr(), piece.len() as u32);
            while xzdec_input_empty(x) == 0 {
                if xzdec_next_output(x, out, 256, &mut len) != 0 {
                    break 'feed;
                }
                assert!(len <= 256);
            }
        }
        while xzdec_finish(x, out, 256, &mut len) == 0 {
            assert!(len <= 256);
        }
        xzdec_deallocate(out);
        xzdec_drop(x);
    }
});
