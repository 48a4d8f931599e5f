//! Resolved numeric operand
//!
//! [`Number`] is what the comparator and the arithmetic layer work on after an
//! operand has been resolved (natively, or through literal inference).
//! Comparisons between the three domains are exact: no `u64`/`i64` value is
//! rounded through `f64` on the way.

use std::cmp::Ordering;
use std::fmt;

/// A number in one of the three native domains
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

/// 2^127, the first float outside `i128`
const TWO_POW_127: f64 = 1.701_411_834_604_692_3e38;

impl Number {
    #[inline]
    pub fn is_nan(self) -> bool {
        matches!(self, Number::Float(f) if f.is_nan())
    }

    #[inline]
    pub fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Nearest `f64` (may round for large integers)
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Unsigned(u) => u as f64,
            Number::Signed(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Exact integer value, if there is one
    ///
    /// Floats qualify only when finite and integral.
    pub fn to_i128(self) -> Option<i128> {
        match self {
            Number::Unsigned(u) => Some(i128::from(u)),
            Number::Signed(i) => Some(i128::from(i)),
            Number::Float(f) => {
                if f.is_finite() && f.trunc() == f && f.abs() < TWO_POW_127 {
                    Some(f as i128)
                } else {
                    None
                }
            }
        }
    }

    /// Turn an exactly integral finite float into an integer.
    ///
    /// Non-negative values become `Unsigned`, negative ones `Signed`; values
    /// that fit neither are left as floats.
    pub fn collapse_integral(self) -> Number {
        let Number::Float(f) = self else {
            return self;
        };
        match Number::Float(f).to_i128() {
            Some(i) if i >= 0 => u64::try_from(i).map_or(self, Number::Unsigned),
            Some(i) => i64::try_from(i).map_or(self, Number::Signed),
            None => self,
        }
    }

    /// Exact ordering across domains; `None` if either side is NaN
    pub fn partial_cmp_exact(self, other: Number) -> Option<Ordering> {
        use Number::*;
        match (self, other) {
            (Unsigned(a), Unsigned(b)) => Some(a.cmp(&b)),
            (Signed(a), Signed(b)) => Some(a.cmp(&b)),
            (Unsigned(a), Signed(b)) => Some(i128::from(a).cmp(&i128::from(b))),
            (Signed(a), Unsigned(b)) => Some(i128::from(a).cmp(&i128::from(b))),
            (Float(a), Float(b)) => a.partial_cmp(&b),
            (Float(a), int) => cmp_f64_i128(a, int.to_i128()?),
            (int, Float(b)) => cmp_f64_i128(b, int.to_i128()?).map(Ordering::reverse),
        }
    }
}

fn cmp_f64_i128(float: f64, int: i128) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= TWO_POW_127 {
        return Some(Ordering::Greater);
    }
    if float < -TWO_POW_127 {
        return Some(Ordering::Less);
    }
    let whole = float.trunc();
    match (whole as i128).cmp(&int) {
        Ordering::Equal => (float - whole).partial_cmp(&0.0),
        unequal => Some(unequal),
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Unsigned(u) => write!(f, "{u}"),
            Number::Signed(i) => write!(f, "{i}"),
            Number::Float(x) => f.write_str(&format_float(*x)),
        }
    }
}

/// Shortest round-trip text for a float.
///
/// Non-finite values print as `nan`, `inf` and `-inf`. Magnitudes outside
/// `[1e-5, 1e16)` use exponent notation.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-5..1e16).contains(&magnitude) {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

/// Parse text produced by [`format_float`] (and ordinary float literals).
pub fn parse_float(text: &str) -> Option<f64> {
    let text = text.trim();
    match text.to_ascii_lowercase().as_str() {
        "nan" | "+nan" | "-nan" => Some(f64::NAN),
        "inf" | "+inf" | "infinity" | "+infinity" => Some(f64::INFINITY),
        "-inf" | "-infinity" => Some(f64::NEG_INFINITY),
        _ => text.parse().ok(),
    }
}
