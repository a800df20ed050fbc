#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes through the one-shot helper. Error statuses are
    // expected; what we verify is no panics or UB.
    let _ = xzdec::decompress_to_vec(data);

    // Same bytes through the streaming driver with a tiny buffer, so
    // window and output boundaries land everywhere.
    let opts = xzdec::io::StreamOptions {
        buffer_size: 13,
        ..Default::default()
    };
    let _ = xzdec::decompress(&mut &data[..], &mut std::io::sink(), &opts);
});
