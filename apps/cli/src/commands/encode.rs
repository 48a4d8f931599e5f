//! The `encode` command - infer a literal and print its ETV form.

use anyhow::{Result, anyhow, bail};
use dynval_value::{TypedValue, ValueKind};

use super::literal;
use crate::cli::EncodeArgs;

pub fn run(args: EncodeArgs) -> Result<String> {
    let value = match args.kind.as_deref() {
        None => literal(&args.literal, args.collapse),
        Some(name) => {
            let kind =
                ValueKind::from_name(name).ok_or_else(|| anyhow!("unknown kind '{name}'"))?;
            let converted = convert(&args.literal, kind, args.collapse);
            if converted.is_null() && kind != ValueKind::Null {
                bail!("cannot convert '{}' to {kind}", args.literal);
            }
            converted
        }
    };
    Ok(value.to_etv())
}

/// Text targets take the literal verbatim; other kinds start from the
/// inferred literal and fall back to the raw text (e.g. `1,2` as a point).
fn convert(text: &str, kind: ValueKind, collapse: bool) -> TypedValue {
    let raw = TypedValue::utf8(text);
    if matches!(kind, ValueKind::Utf8 | ValueKind::Bytes) {
        return raw.convert_to(kind);
    }
    let inferred = literal(text, collapse).convert_to(kind);
    if inferred.is_null() {
        raw.convert_to(kind)
    } else {
        inferred
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(literal: &str, kind: Option<&str>, collapse: bool) -> Result<String> {
        run(EncodeArgs {
            literal: literal.into(),
            kind: kind.map(Into::into),
            collapse,
        })
    }

    #[test]
    fn infers_literals() {
        assert_eq!(encode("true", None, false).unwrap(), "b{1}");
        assert_eq!(encode("-7", None, false).unwrap(), "s64{-7}");
        assert_eq!(encode("2.0", None, true).unwrap(), "u64{2}");
        assert_eq!(encode("hi", None, false).unwrap(), "\"hi\"");
    }

    #[test]
    fn converts_to_requested_kind() {
        assert_eq!(encode("1,2", Some("point"), false).unwrap(), "pt{1,2}");
        assert_eq!(encode("5", Some("f64"), false).unwrap(), "f64{5}");
        assert_eq!(encode("7", Some("entity"), false).unwrap(), "e{7}");
        assert_eq!(encode("2.0", Some("f64"), true).unwrap(), "f64{2}");
        assert_eq!(encode("2.0", Some("utf8"), true).unwrap(), "\"2.0\"");
        assert!(encode("abc", Some("u64"), false).is_err());
        assert!(encode("1", Some("tensor"), false).is_err());
    }
}
