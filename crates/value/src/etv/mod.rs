//! External Typed Value (ETV) text codec
//!
//! Every value encodes as `<typecode>{<escaped payload>}`, except UTF-8 text,
//! which encodes as a bare quoted string:
//!
//! ```rust
//! use dynval_value::{TypedValue, etv};
//!
//! assert_eq!(etv::encode(&TypedValue::unsigned64(7)), "u64{7}");
//! assert_eq!(etv::encode(&TypedValue::utf8("a}b")), r#""a\}b""#);
//! assert_eq!(etv::decode("s64{-3}").unwrap(), *TypedValue::signed64(-3));
//! ```
//!
//! Decoding `null{}` and `foreign{}` is not supported: it logs a warning and
//! yields `Null`.

pub mod escape;

use tracing::{debug, warn};

use crate::core::kind::ValueKind;
use crate::core::limits::ValueLimits;
use crate::core::value::Value;
use crate::error::{EtvError, EtvResult};
use crate::scalar::number::{format_float, parse_float};
use crate::scalar::{ByteBuf, FloatVec, Pattern, PointF, Timestamp, Utf8Buf, Word};

use self::escape::{escape_into, find_unescaped, unescape};

// ==================== Encoding ====================

/// Encode a value as ETV text
pub fn encode(value: &Value) -> String {
    let mut out = String::new();
    if let Value::Utf8(text) = value {
        out.reserve(text.len() + 2);
        out.push('"');
        escape_into(text.as_str(), &mut out);
        out.push('"');
        return out;
    }
    let payload = payload(value);
    let code = value.kind().etv_code();
    out.reserve(code.len() + payload.len() + 2);
    out.push_str(code);
    out.push('{');
    escape_into(&payload, &mut out);
    out.push('}');
    out
}

fn payload(value: &Value) -> String {
    match value {
        Value::Null | Value::Utf8(_) => String::new(),
        Value::Unsigned64(w) | Value::Entity(w) => w.to_string(),
        Value::Signed64(i) => i.to_string(),
        Value::Boolean(w) => String::from(if w.as_bool() { "1" } else { "0" }),
        Value::Float64(f) => format_float(*f),
        Value::Bytes(b) => b.to_hex(),
        Value::Regexp(p) if !p.is_valid() => String::new(),
        Value::Regexp(p) => {
            let flags = if p.is_case_insensitive() { "i" } else { "" };
            format!("{flags}/{}", p.source())
        }
        // Every other payload is the text form
        other => other.to_text(),
    }
}

// ==================== Decoding ====================

/// Decode ETV text with [`ValueLimits::default`]
pub fn decode(text: &str) -> EtvResult<Value> {
    decode_with_limits(text, &ValueLimits::default())
}

/// Decode ETV text, rejecting input beyond `limits`
pub fn decode_with_limits(text: &str, limits: &ValueLimits) -> EtvResult<Value> {
    decode_inner(text, limits).inspect_err(|err| {
        debug!(code = err.code(), error = %err, "ETV decode failed");
    })
}

fn decode_inner(text: &str, limits: &ValueLimits) -> EtvResult<Value> {
    limits.check_etv_bytes(text.len())?;

    if let Some(quoted) = text.strip_prefix('"') {
        let close = find_unescaped(quoted, b'"').ok_or(EtvError::UnterminatedString)?;
        if close + 1 != quoted.len() {
            return Err(EtvError::UnterminatedString);
        }
        let content = unescape(&quoted[..close], 1)?;
        limits.check_text_bytes(content.len())?;
        return Ok(Value::Utf8(Utf8Buf::new(content)));
    }

    let open = text.find('{').ok_or(EtvError::MissingBrace)?;
    let code = &text[..open];
    let kind = ValueKind::from_etv_code(code).ok_or_else(|| EtvError::unknown_type_code(code))?;

    let body = &text[open + 1..];
    let close = find_unescaped(body, b'}').ok_or(EtvError::MissingClosingBrace)?;
    if close + 1 != body.len() {
        return Err(EtvError::MissingClosingBrace);
    }
    let payload = unescape(&body[..close], open + 1)?;
    parse_payload(kind, &payload, limits)
}

fn invalid(kind: ValueKind, reason: impl Into<String>) -> EtvError {
    EtvError::invalid_payload(kind, reason)
}

fn parse_payload(kind: ValueKind, payload: &str, limits: &ValueLimits) -> EtvResult<Value> {
    let value = match kind {
        ValueKind::Null | ValueKind::Foreign => {
            warn!(kind = %kind, "decoding this kind from ETV is not supported, yielding null");
            Value::Null
        }
        ValueKind::Unsigned64 => Value::Unsigned64(Word::new(parse_u64(kind, payload)?)),
        ValueKind::Entity => Value::Entity(Word::new(parse_u64(kind, payload)?)),
        ValueKind::Signed64 => Value::Signed64(
            payload
                .parse()
                .map_err(|e: std::num::ParseIntError| invalid(kind, e.to_string()))?,
        ),
        ValueKind::Boolean => match payload {
            "1" | "true" => Value::from(true),
            "0" | "false" => Value::from(false),
            other => return Err(invalid(kind, format!("expected 1 or 0, got '{other}'"))),
        },
        ValueKind::Float64 => Value::Float64(
            parse_float(payload).ok_or_else(|| invalid(kind, format!("'{payload}' is not a float")))?,
        ),
        ValueKind::Bytes => {
            limits.check_text_bytes(payload.len() / 2)?;
            Value::Bytes(ByteBuf::from_hex(payload).map_err(|e| invalid(kind, e.to_string()))?)
        }
        ValueKind::Utf8 => {
            limits.check_text_bytes(payload.len())?;
            Value::utf8(payload)
        }
        ValueKind::EntityVector => {
            let ids = split_list(payload, ',')
                .map(|id| parse_u64(kind, id))
                .collect::<EtvResult<Vec<_>>>()?;
            limits.check_vector_len(ids.len())?;
            Value::EntityVector(ids)
        }
        ValueKind::FloatVector => Value::FloatVector(parse_floats(kind, payload, None, limits)?),
        ValueKind::Point => Value::Point(parse_floats(kind, payload, Some(2), limits)?),
        ValueKind::Size => Value::Size(parse_floats(kind, payload, Some(2), limits)?),
        ValueKind::Rect => Value::Rect(parse_floats(kind, payload, Some(4), limits)?),
        ValueKind::Line => Value::Line(parse_floats(kind, payload, Some(4), limits)?),
        ValueKind::PointFVector => {
            let points = split_list(payload, ';')
                .map(|pair| {
                    parse_floats(kind, pair, Some(2), limits).map(|v| PointF::from_float_vec(&v))
                })
                .collect::<EtvResult<Vec<_>>>()?;
            limits.check_vector_len(points.len())?;
            Value::PointFVector(points)
        }
        ValueKind::Timestamp if payload.is_empty() => Value::Timestamp(Timestamp::invalid()),
        ValueKind::Timestamp => Value::Timestamp(
            Timestamp::parse(payload)
                .ok_or_else(|| invalid(kind, format!("'{payload}' is not RFC 3339")))?,
        ),
        ValueKind::Regexp => Value::Regexp(parse_pattern(payload, limits)?),
    };
    Ok(value)
}

fn parse_u64(kind: ValueKind, text: &str) -> EtvResult<u64> {
    text.trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| invalid(kind, format!("'{text}': {e}")))
}

/// Split a separated list; empty text is the empty list
fn split_list(text: &str, separator: char) -> impl Iterator<Item = &str> {
    let mut parts = text.split(separator);
    if text.is_empty() {
        parts.next();
    }
    parts
}

fn parse_floats(
    kind: ValueKind,
    text: &str,
    arity: Option<usize>,
    limits: &ValueLimits,
) -> EtvResult<FloatVec> {
    let components =
        FloatVec::parse(text).ok_or_else(|| invalid(kind, format!("'{text}' is not a float list")))?;
    limits.check_vector_len(components.len())?;
    match arity {
        Some(expected) if components.len() != expected => Err(invalid(
            kind,
            format!("expected {expected} components, got {}", components.len()),
        )),
        _ => Ok(components),
    }
}

fn parse_pattern(payload: &str, limits: &ValueLimits) -> EtvResult<Pattern> {
    if payload.is_empty() {
        return Ok(Pattern::invalid());
    }
    limits.check_text_bytes(payload.len())?;
    let (case_insensitive, source) = if let Some(source) = payload.strip_prefix("i/") {
        (true, source)
    } else if let Some(source) = payload.strip_prefix('/') {
        (false, source)
    } else {
        return Err(invalid(ValueKind::Regexp, "expected '/' or 'i/' before the pattern"));
    };
    Pattern::compile(source, case_insensitive)
        .ok_or_else(|| invalid(ValueKind::Regexp, format!("'{source}' does not compile")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{LineF, RectF, SizeF};
    use pretty_assertions::assert_eq;

    fn roundtrip(value: Value) {
        let encoded = encode(&value);
        assert_eq!(decode(&encoded).unwrap(), value, "encoded as {encoded}");
    }

    #[test]
    fn test_encode_examples() {
        assert_eq!(encode(&Value::from(true)), "b{1}");
        assert_eq!(encode(&Value::utf8("hi")), r#""hi""#);
        assert_eq!(encode(&Value::from(Vec::<u8>::new())), "bytes{}");
        assert_eq!(encode(&Value::Null), "null{}");
        assert_eq!(encode(&Value::Entity(Word::new(5))), "e{5}");
        assert_eq!(encode(&Value::from(0.5)), "f64{0.5}");
        assert_eq!(encode(&Value::from(vec![0xde_u8, 0xad])), "bytes{dead}");
        assert_eq!(encode(&Value::regexp("a}", true)), r"re{i/a\}}");
        assert_eq!(encode(&Value::regexp("(", false)), "re{}");
        assert_eq!(encode(&Value::from(Timestamp::invalid())), "ts{}");
        assert_eq!(
            encode(&Value::from(vec![PointF::new(1.0, 2.0), PointF::new(3.0, 4.5)])),
            "pfv{1,2;3,4.5}"
        );
    }

    #[test]
    fn test_roundtrips() {
        roundtrip(Value::from(u64::MAX));
        roundtrip(Value::from(i64::MIN));
        roundtrip(Value::from(false));
        roundtrip(Value::Entity(Word::new(42)));
        roundtrip(Value::from(1e-300));
        roundtrip(Value::from(f64::NEG_INFINITY));
        roundtrip(Value::from(vec![0_u8, 255, 16]));
        roundtrip(Value::utf8("quote \" brace } slash \\ newline \n"));
        roundtrip(Value::utf8(""));
        roundtrip(Value::EntityVector(vec![]));
        roundtrip(Value::EntityVector(vec![1, 2, 3]));
        roundtrip(Value::from(FloatVec::from_slice(&[0.1, -2.5e20])));
        roundtrip(Value::point(PointF::new(1.0, -1.0)));
        roundtrip(Value::size(SizeF::new(640.0, 480.0)));
        roundtrip(Value::rect(RectF::new(0.0, 0.0, 10.0, 5.5)));
        roundtrip(Value::line(LineF::new(1.0, 2.0, 3.0, 4.0)));
        roundtrip(Value::from(Vec::<PointF>::new()));
        roundtrip(Value::from(Timestamp::from_millis(1_700_000_000_123)));
        roundtrip(Value::from(Timestamp::invalid()));
        roundtrip(Value::regexp("^[a-z]+\\d{2}$", true));
        roundtrip(Value::regexp("", false));
        roundtrip(Value::regexp("(", false));
    }

    #[test]
    fn test_timestamp_years_beyond_rfc3339() {
        assert_eq!(
            encode(&Value::from(Timestamp::from_millis(253_402_300_800_000))),
            "ts{}"
        );
        roundtrip(Value::from(Timestamp::from_millis(253_402_300_799_999)));
        roundtrip(Value::from(Timestamp::from_millis(-62_167_219_200_000)));
        assert_eq!(
            decode("ts{+10000-01-01T00:00:00Z}").unwrap_err().code(),
            "ETV_INVALID_PAYLOAD"
        );
    }

    #[test]
    fn test_decode_nan() {
        assert!(decode("f64{nan}").unwrap().float64().is_nan());
    }

    #[test]
    fn test_decode_utf8_code() {
        assert_eq!(decode("utf8{a\\}b}").unwrap(), Value::utf8("a}b"));
    }

    #[test]
    fn test_unsupported_kinds_yield_null() {
        assert_eq!(decode("null{}").unwrap(), Value::Null);
        assert_eq!(decode(r#"foreign{{"a":1\}}"#).unwrap(), Value::Null);
    }

    #[test]
    fn test_errors() {
        assert_eq!(decode("u64"), Err(EtvError::MissingBrace));
        assert_eq!(decode("u64{1"), Err(EtvError::MissingClosingBrace));
        assert_eq!(decode("u64{1}x"), Err(EtvError::MissingClosingBrace));
        assert_eq!(decode("u64{1\\}"), Err(EtvError::MissingClosingBrace));
        assert_eq!(decode("zz{1}"), Err(EtvError::unknown_type_code("zz")));
        assert_eq!(decode("\"abc"), Err(EtvError::UnterminatedString));
        assert_eq!(decode("\"a\"b\""), Err(EtvError::UnterminatedString));
        assert_eq!(decode("\"a\\qb\""), Err(EtvError::InvalidEscape { position: 2 }));
        assert!(matches!(
            decode("u64{-1}"),
            Err(EtvError::InvalidPayload {
                kind: ValueKind::Unsigned64,
                ..
            })
        ));
        assert!(matches!(decode("pt{1,2,3}"), Err(EtvError::InvalidPayload { .. })));
        assert!(matches!(decode("b{2}"), Err(EtvError::InvalidPayload { .. })));
        assert!(matches!(decode("re{x}"), Err(EtvError::InvalidPayload { .. })));
        assert!(matches!(decode("ts{later}"), Err(EtvError::InvalidPayload { .. })));
        assert!(matches!(decode("bytes{abc}"), Err(EtvError::InvalidPayload { .. })));
    }

    #[test]
    fn test_limits() {
        let limits = ValueLimits {
            max_etv_bytes: 8,
            ..ValueLimits::default()
        };
        assert!(decode_with_limits("u64{1}", &limits).is_ok());
        assert!(matches!(
            decode_with_limits("u64{123456}", &limits),
            Err(EtvError::LimitExceeded { limit: "max_etv_bytes", .. })
        ));

        let limits = ValueLimits {
            max_vector_len: 2,
            ..ValueLimits::default()
        };
        assert!(matches!(
            decode_with_limits("ev{1,2,3}", &limits),
            Err(EtvError::LimitExceeded { limit: "max_vector_len", .. })
        ));
    }
}
