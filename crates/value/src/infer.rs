//! Literal inference
//!
//! Classifies a piece of text as the best-fitting number kind. Parsing is
//! prefix-based, so `"1.2k"` reads as `1.2` and `"1k"` as `1`.
//!
//! ```rust
//! use dynval_value::{best_number_type, ValueKind};
//!
//! assert_eq!(best_number_type("1k", false).kind(), ValueKind::Unsigned64);
//! assert_eq!(best_number_type("-3", false).signed64(), -3);
//! assert_eq!(best_number_type("2.0", true).kind(), ValueKind::Unsigned64);
//! assert!(best_number_type("abc", false).is_null());
//! ```

use crate::core::typed_value::TypedValue;
use crate::core::value::Value;
use crate::scalar::Number;

/// Options for [`best_number_type`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InferOptions {
    /// Report exactly integral finite floats as integers
    pub collapse_integral: bool,
}

impl InferOptions {
    pub const fn new() -> Self {
        Self {
            collapse_integral: false,
        }
    }

    #[must_use]
    pub const fn collapse_integral(mut self, collapse: bool) -> Self {
        self.collapse_integral = collapse;
        self
    }

    pub fn infer(&self, text: &str) -> TypedValue {
        TypedValue::new(infer_value(text, self.collapse_integral))
    }
}

/// Infer Boolean, Unsigned64, Signed64, Float64 or Null from `text`
pub fn best_number_type(text: &str, collapse_integral: bool) -> TypedValue {
    InferOptions::new()
        .collapse_integral(collapse_integral)
        .infer(text)
}

pub(crate) fn infer_value(text: &str, collapse_integral: bool) -> Value {
    let text = text.trim_ascii();
    match text {
        "true" => return Value::from(true),
        "false" => return Value::from(false),
        _ => {}
    }
    match infer_number(text) {
        Some(number) if collapse_integral => number_value(number.collapse_integral()),
        Some(number) => number_value(number),
        None => Value::Null,
    }
}

pub(crate) fn number_value(number: Number) -> Value {
    match number {
        Number::Unsigned(u) => Value::from(u),
        Number::Signed(i) => Value::from(i),
        Number::Float(f) => Value::from(f),
    }
}

fn infer_number(text: &str) -> Option<Number> {
    if let Some(special) = special_float(text) {
        return Some(Number::Float(special));
    }

    let mut hex = false;
    let mut float = false;
    for byte in text.bytes() {
        match byte {
            b'x' | b'X' => hex = true,
            b'.' => float = true,
            b'e' | b'E' if !hex => float = true,
            _ => {}
        }
    }

    if float {
        float_prefix(text).map(Number::Float)
    } else {
        integer_prefix(text)
    }
}

fn special_float(text: &str) -> Option<f64> {
    let lower = text.to_ascii_lowercase();
    match lower.as_str() {
        "nan" | "+nan" | "-nan" => Some(f64::NAN),
        "inf" | "+inf" | "infinity" | "+infinity" => Some(f64::INFINITY),
        "-inf" | "-infinity" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

fn count_digits(bytes: &[u8], radix: u32) -> usize {
    bytes
        .iter()
        .take_while(|b| char::from(**b).is_digit(radix))
        .count()
}

/// Longest prefix shaped like `[+-]digits[.digits][e[+-]digits]`
fn float_prefix(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_digits = count_digits(&bytes[end..], 10);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..], 10);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..], 10);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    text[..end].parse().ok()
}

/// Longest decimal or `0x` hex integer prefix, folding to float on overflow
fn integer_prefix(text: &str) -> Option<Number> {
    let bytes = text.as_bytes();
    let negative = bytes.first() == Some(&b'-');
    let mut start = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let radix = match bytes.get(start..start + 3) {
        Some([b'0', b'x' | b'X', d]) if d.is_ascii_hexdigit() => {
            start += 2;
            16
        }
        _ => 10,
    };
    let len = count_digits(&bytes[start..], radix);
    if len == 0 {
        return None;
    }
    let digits = &text[start..start + len];

    let Ok(magnitude) = u64::from_str_radix(digits, radix) else {
        let folded = fold_digits(digits, radix);
        return Some(Number::Float(if negative { -folded } else { folded }));
    };

    if !negative {
        return Some(Number::Unsigned(magnitude));
    }
    match i64::try_from(-i128::from(magnitude)) {
        Ok(signed) => Some(Number::Signed(signed)),
        Err(_) => Some(Number::Float(-(magnitude as f64))),
    }
}

fn fold_digits(digits: &str, radix: u32) -> f64 {
    if radix == 10 {
        return digits.parse().unwrap_or(f64::INFINITY);
    }
    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueKind;
    use pretty_assertions::assert_eq;

    fn infer(text: &str) -> Value {
        infer_value(text, false)
    }

    #[test]
    fn test_booleans() {
        assert_eq!(infer(" true "), Value::from(true));
        assert_eq!(infer("false"), Value::from(false));
        assert_eq!(infer("True").kind(), ValueKind::Null);
    }

    #[test]
    fn test_prefix_parsing() {
        assert_eq!(infer("1.2k"), Value::from(1.2));
        assert_eq!(infer("1k"), Value::from(1_u64));
        assert_eq!(infer("-12abc"), Value::from(-12_i64));
        assert_eq!(infer("+5"), Value::from(5_u64));
        assert_eq!(infer("1e3"), Value::from(1000.0));
        assert_eq!(infer("1e"), Value::from(1.0));
        assert_eq!(infer(".5"), Value::from(0.5));
    }

    #[test]
    fn test_hex() {
        assert_eq!(infer("0xff"), Value::from(255_u64));
        assert_eq!(infer("0x1e5"), Value::from(0x1e5_u64));
        assert_eq!(infer("-0x10"), Value::from(-16_i64));
        assert_eq!(infer("0x"), Value::from(0_u64));
    }

    #[test]
    fn test_special_floats() {
        assert!(infer("NaN").float64().is_nan());
        assert_eq!(infer("-Infinity"), Value::from(f64::NEG_INFINITY));
        assert_eq!(infer("+inf"), Value::from(f64::INFINITY));
    }

    #[test]
    fn test_overflow_folds_to_float() {
        assert_eq!(infer("18446744073709551616"), Value::from(18_446_744_073_709_551_616.0));
        assert_eq!(infer("-9223372036854775808"), Value::from(i64::MIN));
        assert_eq!(infer("-9223372036854775809").kind(), ValueKind::Float64);
        assert_eq!(infer("0x10000000000000000"), Value::from(18_446_744_073_709_551_616.0));
    }

    #[test]
    fn test_no_digits() {
        assert!(infer("").is_null());
        assert!(infer("-").is_null());
        assert!(infer("hello").is_null());
        assert!(infer(".").is_null());
    }

    #[test]
    fn test_collapse() {
        assert_eq!(infer_value("4.0", true), Value::from(4_u64));
        assert_eq!(infer_value("-4.0", true), Value::from(-4_i64));
        assert_eq!(infer_value("4.5", true), Value::from(4.5));
        assert!(infer_value("nan", true).float64().is_nan());
    }

    #[test]
    fn test_options_builder() {
        let opts = InferOptions::new().collapse_integral(true);
        assert_eq!(opts.infer("1e2").kind(), ValueKind::Unsigned64);
        assert_eq!(best_number_type("1e2", false).kind(), ValueKind::Float64);
    }
}
