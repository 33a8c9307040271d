//! Lenient value interpretation shared by the loader and the accessors.

/// Parse a signed integer the way C `atoi` does.
///
/// Leading whitespace (C `isspace`, so vertical tab included) is skipped, an
/// optional `+`/`-` is accepted, and the longest run of digits that follows is
/// used. Anything after it is ignored.
/// Input with no digits yields `0`. Out-of-range values saturate.
pub fn parse_int(raw: &str) -> i64 {
    let s = raw.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B');
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut out: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        // Accumulate toward the sign so i64::MIN is reachable.
        out = if negative {
            match out.checked_mul(10).and_then(|v| v.checked_sub(d)) {
                Some(v) => v,
                None => return i64::MIN,
            }
        } else {
            match out.checked_mul(10).and_then(|v| v.checked_add(d)) {
                Some(v) => v,
                None => return i64::MAX,
            }
        };
    }
    out
}

/// Interpret a stored value as a boolean.
///
/// An empty value (a bare `-flag`) is `true`; anything else is `true` only if it
/// parses to a non-zero integer. Note that `"true"` is therefore `false`.
pub fn interpret_bool(raw: &str) -> bool {
    raw.is_empty() || parse_int(raw) != 0
}

/// Render a boolean the way the store spells it.
pub(crate) fn bool_str(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}
