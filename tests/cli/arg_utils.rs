// Integration tests for src/cli/arg_utils.rs — size parsing.

use xzdec::cli::arg_utils::{parse_memlimit, read_size_from_str};

#[test]
fn sizes_without_suffix() {
    assert_eq!(read_size_from_str("0"), Some((0, "")));
    assert_eq!(read_size_from_str("1048576"), Some((1 << 20, "")));
}

#[test]
fn all_suffix_spellings() {
    for s in ["2K", "2KB", "2KiB"] {
        assert_eq!(read_size_from_str(s), Some((2048, "")), "{s}");
    }
    for s in ["3M", "3MB", "3MiB"] {
        assert_eq!(read_size_from_str(s), Some((3 << 20, "")), "{s}");
    }
}

#[test]
fn lowercase_suffix_is_left_over() {
    assert_eq!(read_size_from_str("5k"), Some((5, "k")));
    assert!(parse_memlimit("5k").is_err());
}

#[test]
fn memlimit_no_limit_spellings() {
    assert_eq!(parse_memlimit("0"), Ok(u64::MAX));
    assert_eq!(parse_memlimit("MAX"), Ok(u64::MAX));
}

#[test]
fn memlimit_empty_string() {
    assert!(parse_memlimit("").is_err());
}

