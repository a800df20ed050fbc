// Integration tests for src/cli/args.rs — clap definition and Prefs mapping.

use clap::Parser;
use xzdec::cli::args::Args;
use xzdec::config::{BUF_SIZE, DISPLAY_LEVEL_DEFAULT, FLAGS_DEFAULT, MEMLIMIT_DEFAULT};
use xzdec::decoder::CONCATENATED;

#[test]
fn defaults_match_config() {
    let args = Args::try_parse_from(["xzdec", "in.xz"]).unwrap();
    let prefs = args.prefs();
    assert_eq!(prefs.stream.memlimit, MEMLIMIT_DEFAULT);
    assert_eq!(prefs.stream.flags, FLAGS_DEFAULT);
    assert_eq!(prefs.stream.buffer_size, BUF_SIZE);
    assert!(!prefs.keep_source);
    assert!(!prefs.overwrite);
    assert_eq!(args.display_level(), DISPLAY_LEVEL_DEFAULT);
}

#[test]
fn long_flags() {
    let args = Args::try_parse_from([
        "xzdec",
        "--stdout",
        "--force",
        "--test",
        "--single-stream",
        "--memlimit",
        "1GiB",
        "a.xz",
    ])
    .unwrap();
    let prefs = args.prefs();
    assert!(args.stdout);
    assert!(prefs.overwrite);
    assert!(prefs.test_mode);
    assert!(prefs.keep_source);
    assert_eq!(prefs.stream.flags & CONCATENATED, 0);
    assert_eq!(prefs.stream.memlimit, 1 << 30);
}

#[test]
fn output_takes_a_value() {
    let args = Args::try_parse_from(["xzdec", "-o", "out.bin", "in.xz"]).unwrap();
    assert_eq!(args.output.as_deref(), Some("out.bin"));
    assert_eq!(args.inputs(), vec!["in.xz"]);
}

#[test]
fn dash_is_stdin() {
    let args = Args::try_parse_from(["xzdec", "-"]).unwrap();
    assert_eq!(args.inputs(), vec!["-"]);
}

#[test]
fn verbosity_counts() {
    let args = Args::try_parse_from(["xzdec", "-vv"]).unwrap();
    assert_eq!(args.display_level(), DISPLAY_LEVEL_DEFAULT + 2);
    let args = Args::try_parse_from(["xzdec", "-q"]).unwrap();
    assert_eq!(args.display_level(), DISPLAY_LEVEL_DEFAULT - 1);
}

#[test]
fn unknown_flag_rejected() {
    assert!(Args::try_parse_from(["xzdec", "--compress"]).is_err());
}
