//! Cross-kind conversions for Value
//!
//! Every coercion is total: it either produces the target or reports failure
//! with `None`. The `_or` variants substitute a caller default instead.

use std::borrow::Cow;

use crate::core::kind::ValueKind;
use crate::core::value::Value;
use crate::infer::infer_value;
use crate::scalar::{ByteBuf, FloatVec, LineF, Number, Pattern, PointF, RectF, SizeF, Timestamp, Word};

/// Numeric types reachable through [`Value::as_number`]
///
/// All implementations share the same exactness rule: integers accept only
/// values that are integral and in range; `f64` accepts any number; `f32`
/// rejects finite values beyond its range.
pub trait NumberTarget: Sized + Copy {
    fn from_number(number: Number) -> Option<Self>;
}

macro_rules! integer_target {
    ($($t:ty),+) => {
        $(
            impl NumberTarget for $t {
                fn from_number(number: Number) -> Option<Self> {
                    number.to_i128().and_then(|i| <$t>::try_from(i).ok())
                }
            }
        )+
    };
}

integer_target!(u8, u16, u32, u64, i8, i16, i32, i64);

impl NumberTarget for f64 {
    fn from_number(number: Number) -> Option<Self> {
        Some(number.to_f64())
    }
}

impl NumberTarget for f32 {
    fn from_number(number: Number) -> Option<Self> {
        let wide = number.to_f64();
        if wide.is_finite() && wide.abs() > f64::from(f32::MAX) {
            None
        } else {
            Some(wide as f32)
        }
    }
}

impl Value {
    /// The number a conversion starts from.
    ///
    /// Unsigned and Boolean words, signed and float natively; text through
    /// literal inference; timestamps as milliseconds since the epoch.
    pub(crate) fn conversion_number(&self) -> Option<Number> {
        match self {
            Value::Unsigned64(w) | Value::Boolean(w) => Some(Number::Unsigned(w.get())),
            Value::Signed64(i) => Some(Number::Signed(*i)),
            Value::Float64(f) => Some(Number::Float(*f)),
            Value::Bytes(_) | Value::Utf8(_) => {
                infer_value(&self.to_text(), false).conversion_number()
            }
            Value::Timestamp(ts) => ts.millis().map(Number::Signed),
            _ => None,
        }
    }

    /// Convert to any [`NumberTarget`] with range checking
    pub fn as_number<T: NumberTarget>(&self) -> Option<T> {
        self.conversion_number().and_then(T::from_number)
    }

    pub fn as_number_or<T: NumberTarget>(&self, default: T) -> T {
        self.as_number().unwrap_or(default)
    }

    /// Entity handles also convert, as their raw id
    pub fn as_unsigned64(&self) -> Option<u64> {
        match self {
            Value::Entity(w) => Some(w.get()),
            _ => self.as_number(),
        }
    }

    pub fn as_unsigned64_or(&self, default: u64) -> u64 {
        self.as_unsigned64().unwrap_or(default)
    }

    pub fn as_signed64(&self) -> Option<i64> {
        self.as_number()
    }

    pub fn as_signed64_or(&self, default: i64) -> i64 {
        self.as_signed64().unwrap_or(default)
    }

    pub fn as_float64(&self) -> Option<f64> {
        self.as_number()
    }

    pub fn as_float64_or(&self, default: f64) -> f64 {
        self.as_float64().unwrap_or(default)
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(w) => Some(w.as_bool()),
            Value::Unsigned64(w) => Some(w.get() != 0),
            Value::Signed64(i) => Some(*i != 0),
            Value::Float64(f) if f.is_nan() => None,
            Value::Float64(f) => Some(*f != 0.0),
            Value::Bytes(_) | Value::Utf8(_) => match infer_value(&self.to_text(), false) {
                Value::Null => None,
                inferred => inferred.as_boolean(),
            },
            _ => None,
        }
    }

    pub fn as_boolean_or(&self, default: bool) -> bool {
        self.as_boolean().unwrap_or(default)
    }

    pub fn as_entity(&self) -> Option<u64> {
        match self {
            Value::Entity(w) | Value::Unsigned64(w) => Some(w.get()),
            _ => None,
        }
    }

    /// Raw bytes of Bytes/Utf8, or the text form of any other non-null kind
    pub fn as_bytes(&self) -> Option<ByteBuf> {
        match self {
            Value::Null => None,
            Value::Bytes(b) => Some(b.clone()),
            Value::Utf8(t) => Some(t.as_byte_buf().clone()),
            other => Some(ByteBuf::new(other.to_text().into_bytes())),
        }
    }

    /// Utf8 as-is, Bytes only when valid UTF-8, anything else non-null as its
    /// text form
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Null => None,
            Value::Utf8(t) => Some(Cow::Borrowed(t.as_str())),
            Value::Bytes(b) => b.to_str().map(Cow::Borrowed),
            other => Some(Cow::Owned(other.to_text())),
        }
    }

    pub fn as_entity_vector(&self) -> Option<Vec<u64>> {
        match self {
            Value::EntityVector(ids) => Some(ids.clone()),
            Value::Entity(w) | Value::Unsigned64(w) => Some(vec![w.get()]),
            _ => None,
        }
    }

    pub fn as_float_vector(&self) -> Option<FloatVec> {
        match self {
            Value::EntityVector(ids) => Some(FloatVec::new(ids.iter().map(|id| *id as f64))),
            Value::PointFVector(points) => {
                Some(FloatVec::new(points.iter().flat_map(|p| [p.x, p.y])))
            }
            Value::Unsigned64(_) | Value::Signed64(_) | Value::Boolean(_) | Value::Float64(_) => {
                self.as_float64().map(|v| FloatVec::from_slice(&[v]))
            }
            Value::Bytes(_) | Value::Utf8(_) => FloatVec::parse(&self.to_text()),
            _ => self.float_vec_storage().cloned(),
        }
    }

    fn float_vector_of_len(&self, len: usize) -> Option<FloatVec> {
        self.as_float_vector().filter(|v| v.len() == len)
    }

    pub fn as_pointf(&self) -> Option<PointF> {
        self.float_vector_of_len(2)
            .map(|v| PointF::from_float_vec(&v))
    }

    pub fn as_sizef(&self) -> Option<SizeF> {
        self.float_vector_of_len(2).map(|v| SizeF::from_float_vec(&v))
    }

    pub fn as_rectf(&self) -> Option<RectF> {
        self.float_vector_of_len(4).map(|v| RectF::from_float_vec(&v))
    }

    pub fn as_linef(&self) -> Option<LineF> {
        self.float_vector_of_len(4).map(|v| LineF::from_float_vec(&v))
    }

    /// Even-length float vectors pair up as `(x, y)`
    pub fn as_pointf_vector(&self) -> Option<Vec<PointF>> {
        match self {
            Value::PointFVector(points) => Some(points.clone()),
            Value::Point(_) => Some(vec![self.pointf()]),
            _ => {
                let flat = self.as_float_vector()?;
                (flat.len() % 2 == 0).then(|| {
                    flat.as_slice()
                        .chunks_exact(2)
                        .map(|pair| PointF::new(pair[0], pair[1]))
                        .collect()
                })
            }
        }
    }

    /// Valid timestamps only. Integral numbers are milliseconds since the
    /// epoch; text is RFC 3339 or a numeric literal.
    pub fn as_timestamp(&self) -> Option<Timestamp> {
        let ts = match self {
            Value::Timestamp(ts) => *ts,
            Value::Bytes(_) | Value::Utf8(_) => {
                let text = self.to_text();
                match Timestamp::parse(&text) {
                    Some(ts) => ts,
                    None => Timestamp::from_millis(infer_value(&text, false).as_signed64()?),
                }
            }
            Value::Unsigned64(_) | Value::Signed64(_) | Value::Float64(_) => {
                Timestamp::from_millis(self.as_signed64()?)
            }
            _ => return None,
        };
        ts.is_valid().then_some(ts)
    }

    /// Valid patterns only; text compiles case-sensitively
    pub fn as_regex(&self) -> Option<Pattern> {
        match self {
            Value::Regexp(p) if p.is_valid() => Some(p.clone()),
            Value::Utf8(t) => Pattern::compile(t.as_str(), false),
            _ => None,
        }
    }

    /// Convert to a value of `kind`, or `None` when no conversion exists
    pub fn convert_to(&self, kind: ValueKind) -> Option<Value> {
        if self.kind() == kind {
            return Some(self.clone());
        }
        let converted = match kind {
            ValueKind::Null => Value::Null,
            ValueKind::Unsigned64 => Value::from(self.as_unsigned64()?),
            ValueKind::Signed64 => Value::from(self.as_signed64()?),
            ValueKind::Boolean => Value::from(self.as_boolean()?),
            ValueKind::Entity => Value::Entity(Word::new(self.as_entity()?)),
            ValueKind::Float64 => Value::from(self.as_float64()?),
            ValueKind::Bytes => Value::Bytes(self.as_bytes()?),
            ValueKind::Utf8 => Value::utf8(self.as_text()?.into_owned()),
            ValueKind::EntityVector => Value::EntityVector(self.as_entity_vector()?),
            ValueKind::FloatVector => Value::FloatVector(self.as_float_vector()?),
            ValueKind::Point => Value::point(self.as_pointf()?),
            ValueKind::Size => Value::size(self.as_sizef()?),
            ValueKind::Rect => Value::rect(self.as_rectf()?),
            ValueKind::Line => Value::line(self.as_linef()?),
            ValueKind::PointFVector => Value::PointFVector(self.as_pointf_vector()?),
            ValueKind::Timestamp => Value::Timestamp(self.as_timestamp()?),
            ValueKind::Regexp => Value::Regexp(self.as_regex()?),
            ValueKind::Foreign => Value::Foreign(self.to_foreign()),
        };
        Some(converted)
    }
}
