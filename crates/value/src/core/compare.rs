//! Numeric-first comparison across kinds
//!
//! Independent from `PartialEq`/`PartialOrd`, which only relate values of the
//! same kind. Here each operand is resolved to a number if it can be (text
//! goes through literal inference), numbers compare exactly, and everything
//! else falls back to a byte-wise comparison of the text forms.
//!
//! ```rust
//! use dynval_value::{TypedValue, ValueOrdering};
//!
//! let nan = TypedValue::float64(f64::NAN);
//! assert_eq!(nan.compare(&nan, false), ValueOrdering::Unordered);
//! assert_eq!(nan.compare(&TypedValue::utf8(""), true), ValueOrdering::Equivalent);
//! assert_eq!(
//!     TypedValue::signed64(-1).compare(&TypedValue::unsigned64(0), false),
//!     ValueOrdering::Less
//! );
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use crate::core::value::Value;
use crate::infer::infer_value;
use crate::scalar::Number;

/// Result of the numeric-first comparator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueOrdering {
    Less,
    Equivalent,
    Greater,
    Unordered,
}

impl ValueOrdering {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Less => "less",
            Self::Equivalent => "equivalent",
            Self::Greater => "greater",
            Self::Unordered => "unordered",
        }
    }

    #[inline]
    pub const fn is_equivalent(self) -> bool {
        matches!(self, Self::Equivalent)
    }

    /// `None` for `Unordered`
    pub const fn to_ordering(self) -> Option<Ordering> {
        match self {
            Self::Less => Some(Ordering::Less),
            Self::Equivalent => Some(Ordering::Equal),
            Self::Greater => Some(Ordering::Greater),
            Self::Unordered => None,
        }
    }

    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Less => Self::Greater,
            Self::Greater => Self::Less,
            other => other,
        }
    }
}

impl From<Ordering> for ValueOrdering {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equivalent,
            Ordering::Greater => Self::Greater,
        }
    }
}

impl From<Option<Ordering>> for ValueOrdering {
    fn from(ordering: Option<Ordering>) -> Self {
        ordering.map_or(Self::Unordered, Self::from)
    }
}

impl fmt::Display for ValueOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparator settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareOptions {
    /// Compare NaN and null operands as the empty string instead of
    /// reporting `Unordered`
    pub treat_null_or_nan_as_empty: bool,
}

impl CompareOptions {
    pub const fn new(treat_null_or_nan_as_empty: bool) -> Self {
        Self {
            treat_null_or_nan_as_empty,
        }
    }
}

enum Operand<'a> {
    Null,
    Number(Number),
    Text(Cow<'a, str>),
}

impl Value {
    /// Native number of the integral and floating kinds; Boolean counts as
    /// unsigned 0/1
    pub(crate) fn native_number(&self) -> Option<Number> {
        match self {
            Value::Unsigned64(w) | Value::Boolean(w) => Some(Number::Unsigned(w.get())),
            Value::Signed64(i) => Some(Number::Signed(*i)),
            Value::Float64(f) => Some(Number::Float(*f)),
            _ => None,
        }
    }

    /// Native number, or the inferred number of the text form
    pub(crate) fn resolve_number(&self) -> Option<Number> {
        match self {
            Value::Null => None,
            Value::Timestamp(ts) => ts.millis().map(Number::Signed),
            _ if self.kind().is_numeric() => self.native_number(),
            _ => infer_value(&self.to_text(), false).native_number(),
        }
    }

    fn operand(&self) -> Operand<'_> {
        if self.is_null() {
            return Operand::Null;
        }
        if let Some(number) = self.native_number() {
            return Operand::Number(number);
        }
        if let Value::Timestamp(ts) = self
            && let Some(millis) = ts.millis()
        {
            return Operand::Number(Number::Signed(millis));
        }
        let text = match self {
            Value::Utf8(t) => Cow::Borrowed(t.as_str()),
            other => Cow::Owned(other.to_text()),
        };
        match infer_value(&text, false).native_number() {
            Some(number) => Operand::Number(number),
            None => Operand::Text(text),
        }
    }

    /// Numeric-first comparison; see the module docs
    pub fn compare(&self, other: &Value, treat_null_or_nan_as_empty: bool) -> ValueOrdering {
        self.compare_with(other, CompareOptions::new(treat_null_or_nan_as_empty))
    }

    pub fn compare_with(&self, other: &Value, options: CompareOptions) -> ValueOrdering {
        let lhs = self.operand();
        let rhs = other.operand();

        if let (Operand::Number(a), Operand::Number(b)) = (&lhs, &rhs) {
            if !a.is_nan() && !b.is_nan() {
                return a.partial_cmp_exact(*b).into();
            }
        }

        let treat = options.treat_null_or_nan_as_empty;
        match (self.comparison_text(lhs, treat), other.comparison_text(rhs, treat)) {
            (Some(a), Some(b)) => a.as_bytes().cmp(b.as_bytes()).into(),
            _ => ValueOrdering::Unordered,
        }
    }

    fn comparison_text<'a>(&'a self, operand: Operand<'a>, treat: bool) -> Option<Cow<'a, str>> {
        match operand {
            Operand::Text(text) => Some(text),
            Operand::Number(n) if !n.is_nan() => Some(Cow::Owned(self.to_text())),
            Operand::Null | Operand::Number(_) => treat.then_some(Cow::Borrowed("")),
        }
    }
}
