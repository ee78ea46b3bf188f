use crate::StreamError;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Integral floats below this magnitude are written as integers.
const INTEGRAL_LIMIT: f64 = 1e15;

/// Writes `f` as a JSON number. NaN has no JSON form and becomes `null`;
/// the infinities are clamped to `±1e308`.
pub(crate) fn format_float(f: f64) -> String {
    match f {
        f if f.is_nan() => "null".to_owned(),
        f if f.is_infinite() => (if f < 0.0 { "-1e308" } else { "1e308" }).to_owned(),
        f if f == 0.0 => (if f.is_sign_negative() { "-0" } else { "0" }).to_owned(),
        f if f.fract() == 0.0 && f.abs() < INTEGRAL_LIMIT => (f as i64).to_string(),
        f => f.to_string(),
    }
}

/// Appends `s` to `out` as a quoted JSON string.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD so the output is always a
/// valid JSON string literal.
pub(crate) fn write_escaped(out: &mut Vec<u8>, s: &[u8]) {
    let text = String::from_utf8_lossy(s);
    let bytes = text.as_bytes();
    out.reserve(bytes.len() + 2);
    out.push(b'"');
    let mut last = 0;
    for (i, &b) in bytes.iter().enumerate() {
        let short: &[u8] = match b {
            b'"' => b"\\\"",
            b'\\' => b"\\\\",
            b'\n' => b"\\n",
            b'\r' => b"\\r",
            b'\t' => b"\\t",
            0x08 => b"\\b",
            0x0c => b"\\f",
            0x00..=0x1f => {
                out.extend_from_slice(&bytes[last..i]);
                out.extend_from_slice(b"\\u00");
                out.push(HEX[(b >> 4) as usize]);
                out.push(HEX[(b & 0x0f) as usize]);
                last = i + 1;
                continue;
            }
            _ => continue,
        };
        out.extend_from_slice(&bytes[last..i]);
        out.extend_from_slice(short);
        last = i + 1;
    }
    out.extend_from_slice(&bytes[last..]);
    out.push(b'"');
}

/// Returns the index of the quote closing a string whose body starts at `x`.
pub(crate) fn find_ending_quote(data: &[u8], mut x: usize) -> Result<usize, StreamError> {
    while x < data.len() {
        match data[x] {
            b'"' => return Ok(x),
            b'\\' => x += 2,
            _ => x += 1,
        }
    }
    Err(StreamError::UnexpectedEof)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(s: &[u8]) -> String {
        let mut out = Vec::new();
        write_escaped(&mut out, s);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn format_float_integral_and_fractional() {
        assert_eq!(format_float(123.0), "123");
        assert_eq!(format_float(-0.5), "-0.5");
        assert_eq!(format_float(f64::NAN), "null");
        assert_eq!(format_float(f64::NEG_INFINITY), "-1e308");
        assert_eq!(format_float(f64::INFINITY), "1e308");
        assert_eq!(format_float(0.0), "0");
        assert_eq!(format_float(-0.0), "-0");
        assert_eq!(format_float(-42.0), "-42");
        assert_eq!(format_float(1e15), "1000000000000000");
    }

    #[test]
    fn escape_specials() {
        assert_eq!(escaped(b"plain"), r#""plain""#);
        assert_eq!(escaped(b"say \"hi\""), r#""say \"hi\"""#);
        assert_eq!(escaped(b"a\\b"), r#""a\\b""#);
        assert_eq!(escaped(b"line1\nline2\t"), r#""line1\nline2\t""#);
        assert_eq!(escaped(b"\x01\x1f"), r#""\u0001\u001f""#);
        assert_eq!(escaped("héllo".as_bytes()), "\"héllo\"");
    }

    #[test]
    fn escape_replaces_invalid_utf8() {
        assert_eq!(escaped(b"a\xffb"), "\"a\u{fffd}b\"");
    }

    #[test]
    fn ending_quote_skips_escapes() {
        let data = br#""a\"b" tail"#;
        assert_eq!(find_ending_quote(data, 1), Ok(5));
        assert_eq!(
            find_ending_quote(br#""abc"#, 1),
            Err(StreamError::UnexpectedEof)
        );
    }
}
