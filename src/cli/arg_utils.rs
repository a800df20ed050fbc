// arg_utils.rs — size parsing for the clap definitions in args.rs.

/// Parses an unsigned size from the start of `s`, optionally followed by a
/// binary suffix. Returns `None` when there are no leading digits or the value
/// overflows `u64`; otherwise `Some((value, remainder))`.
///
/// Recognised suffixes (case-sensitive):
///   `K` / `KB` / `KiB`  → multiply by 1 024
///   `M` / `MB` / `MiB`  → multiply by 1 048 576
///   `G` / `GB` / `GiB`  → multiply by 1 073 741 824
pub fn read_size_from_str(s: &str) -> Option<(u64, &str)> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let mut value: u64 = s[..digits].parse().ok()?;
    let mut rest = &s[digits..];

    let shift = match rest.as_bytes().first() {
        Some(b'K') => 10,
        Some(b'M') => 20,
        Some(b'G') => 30,
        _ => 0,
    };
    if shift > 0 {
        value = value.checked_mul(1u64 << shift)?;
        rest = &rest[1..];
        rest = rest.strip_prefix('i').unwrap_or(rest);
        rest = rest.strip_prefix('B').unwrap_or(rest);
    }
    Some((value, rest))
}

/// clap value parser for `--memlimit`.
///
/// Accepts a size with optional suffix (see [`read_size_from_str`]); `0` and
/// `max` mean no limit (`u64::MAX`).
pub fn parse_memlimit(s: &str) -> Result<u64, String> {
    if s.eq_ignore_ascii_case("max") {
        return Ok(u64::MAX);
    }
    match read_size_from_str(s) {
        Some((0, "")) => Ok(u64::MAX),
        Some((value, "")) => Ok(value),
        Some((_, rest)) => Err(format!("unexpected suffix {rest:?} in memory limit")),
        None => Err(format!("invalid memory limit {s:?}")),
    }
}
