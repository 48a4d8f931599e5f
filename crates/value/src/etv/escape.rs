//! C-style escaping for ETV payloads
//!
//! Besides the usual `\\ \" \n \r \t \0` and `\xHH` for other control
//! characters, `}` is escaped so a payload never contains an unescaped
//! closing brace.

use std::fmt::Write;

use crate::error::{EtvError, EtvResult};

/// Append `raw` to `out` with escaping applied
pub fn escape_into(raw: &str, out: &mut String) {
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '}' => out.push_str("\\}"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    escape_into(raw, &mut out);
    out
}

/// Undo [`escape`]; `offset` is added to reported error positions
pub fn unescape(escaped: &str, offset: usize) -> EtvResult<String> {
    if !escaped.contains('\\') {
        return Ok(escaped.to_owned());
    }
    let mut out = String::with_capacity(escaped.len());
    let mut chars = escaped.char_indices();
    while let Some((_, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let (position, escaped_char) = match chars.next() {
            Some(next) => next,
            None => {
                return Err(EtvError::InvalidEscape {
                    position: offset + escaped.len() - 1,
                });
            }
        };
        let invalid = || EtvError::InvalidEscape {
            position: offset + position - 1,
        };
        let decoded = match escaped_char {
            '\\' => '\\',
            '"' => '"',
            '}' => '}',
            '{' => '{',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            '0' => '\0',
            'x' => {
                let hi = chars.next().and_then(|(_, d)| d.to_digit(16)).ok_or_else(invalid)?;
                let lo = chars.next().and_then(|(_, d)| d.to_digit(16)).ok_or_else(invalid)?;
                char::from_u32(hi * 16 + lo).ok_or_else(invalid)?
            }
            _ => return Err(invalid()),
        };
        out.push(decoded);
    }
    Ok(out)
}

/// Byte index of the first `target` not preceded by an escaping backslash
pub fn find_unescaped(text: &str, target: u8) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == target => return Some(i),
            _ => i += 1,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"a"b}c\"#), r#"a\"b\}c\\"#);
        assert_eq!(escape("line\nnext\t\0"), "line\\nnext\\t\\0");
        assert_eq!(escape("\u{1b}"), "\\x1b");
        assert_eq!(escape("héllo"), "héllo");
    }

    #[test]
    fn test_unescape_roundtrip() {
        let raw = "quote \" brace } slash \\ bell \u{7} tab \t";
        assert_eq!(unescape(&escape(raw), 0).unwrap(), raw);
    }

    #[test]
    fn test_invalid_escapes() {
        assert_eq!(unescape("ab\\q", 10), Err(EtvError::InvalidEscape { position: 12 }));
        assert_eq!(unescape("ab\\", 0), Err(EtvError::InvalidEscape { position: 2 }));
        assert_eq!(unescape("\\xz1", 0), Err(EtvError::InvalidEscape { position: 0 }));
    }

    #[test]
    fn test_find_unescaped() {
        assert_eq!(find_unescaped(r"a\}b}", b'}'), Some(4));
        assert_eq!(find_unescaped(r"a\\}", b'}'), Some(3));
        assert_eq!(find_unescaped(r"a\}", b'}'), None);
    }
}
