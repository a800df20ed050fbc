// Integration tests for src/decoder/types.rs — status codes and flag bits.
//
// Coverage:
//   - every documented lzma_ret value maps to a variant and back
//   - codes outside the documented range are rejected
//   - progress / error classification used by the stream driver
//   - Display and std::error::Error impls

use std::error::Error;

use xzdec::decoder::{Status, SUPPORTED_FLAGS, CONCATENATED, IGNORE_CHECK};

#[test]
fn raw_values_roundtrip() {
    for code in 0..=12u32 {
        let status = Status::from_raw(code).unwrap();
        assert_eq!(status.as_raw(), code);
    }
}

#[test]
fn undocumented_codes_have_no_variant() {
    assert_eq!(Status::from_raw(13), None);
    assert_eq!(Status::from_raw(u32::MAX), None);
}

#[test]
fn known_code_values() {
    assert_eq!(Status::Ok.as_raw(), 0);
    assert_eq!(Status::StreamEnd.as_raw(), 1);
    assert_eq!(Status::MemlimitError.as_raw(), 6);
    assert_eq!(Status::FormatError.as_raw(), 7);
    assert_eq!(Status::OptionsError.as_raw(), 8);
    assert_eq!(Status::DataError.as_raw(), 9);
    assert_eq!(Status::BufError.as_raw(), 10);
}

#[test]
fn progress_statuses_are_not_errors() {
    for code in 0..=12u32 {
        let status = Status::from_raw(code).unwrap();
        if status.is_progress() {
            assert!(!status.is_error(), "{status:?}");
        }
    }
    assert!(!Status::StreamEnd.is_progress());
    assert!(!Status::StreamEnd.is_error());
}

#[test]
fn failure_statuses_are_errors() {
    for status in [
        Status::MemError,
        Status::MemlimitError,
        Status::FormatError,
        Status::OptionsError,
        Status::DataError,
        Status::BufError,
        Status::ProgError,
    ] {
        assert!(status.is_error(), "{status:?}");
        assert!(!status.is_progress(), "{status:?}");
    }
}

#[test]
fn display_names_the_liblzma_constant() {
    assert!(Status::DataError.to_string().contains("LZMA_DATA_ERROR"));
    assert!(Status::BufError.to_string().contains("LZMA_BUF_ERROR"));
    assert_eq!(Status::FormatError.name(), "LZMA_FORMAT_ERROR");
}

#[test]
fn status_is_a_std_error() {
    let err: Box<dyn Error + Send + Sync> = Box::new(Status::MemlimitError);
    assert!(err.source().is_none());
    assert!(!err.to_string().is_empty());
}

#[test]
fn supported_flags_cover_host_flags() {
    assert_eq!(SUPPORTED_FLAGS & CONCATENATED, CONCATENATED);
    assert_eq!(SUPPORTED_FLAGS & IGNORE_CHECK, IGNORE_CHECK);
    assert_eq!(SUPPORTED_FLAGS, 0x1F);
}
