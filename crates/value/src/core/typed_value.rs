//! # TypedValue
//!
//! `TypedValue` is the shared, immutable handle the rest of the system passes
//! around. It holds at most one [`Value`] behind an `Arc`; an empty handle
//! behaves exactly like `Null`. Cloning a handle never copies the payload.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use std::sync::Arc;

use static_assertions::assert_impl_all;

use crate::core::limits::ValueLimits;
use crate::core::value::Value;
use crate::error::{EtvError, EtvResult};
use crate::etv;
use crate::scalar::{ByteBuf, FloatVec, LineF, Pattern, PointF, RectF, SizeF, Timestamp, Word};

static NULL: Value = Value::Null;

/// Shared handle to an immutable value
#[derive(Clone, Default)]
pub struct TypedValue {
    inner: Option<Arc<Value>>,
}

assert_impl_all!(TypedValue: Send, Sync, Clone, Default);
assert_impl_all!(Value: Send, Sync);

impl TypedValue {
    /// The empty handle
    #[inline]
    pub const fn null() -> Self {
        Self { inner: None }
    }

    /// Wrap a value; `Value::Null` gives the empty handle
    pub fn new(value: Value) -> Self {
        match value {
            Value::Null => Self::null(),
            value => Self {
                inner: Some(Arc::new(value)),
            },
        }
    }

    #[inline]
    pub fn value(&self) -> &Value {
        self.inner.as_deref().unwrap_or(&NULL)
    }

    /// Take the value out, cloning only if the handle is shared
    pub fn into_value(self) -> Value {
        match self.inner {
            Some(shared) => Arc::unwrap_or_clone(shared),
            None => Value::Null,
        }
    }

    /// Whether both handles share the same allocation (two empty handles do)
    pub fn ptr_eq(&self, other: &TypedValue) -> bool {
        match (&self.inner, &other.inner) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    // ==================== Constructors ====================

    pub fn unsigned64(v: u64) -> Self {
        Self::new(Value::from(v))
    }

    pub fn signed64(v: i64) -> Self {
        Self::new(Value::from(v))
    }

    pub fn boolean(v: bool) -> Self {
        Self::new(Value::from(v))
    }

    pub fn entity(id: u64) -> Self {
        Self::new(Value::Entity(Word::new(id)))
    }

    pub fn float64(v: f64) -> Self {
        Self::new(Value::from(v))
    }

    pub fn bytes(data: impl Into<ByteBuf>) -> Self {
        Self::new(Value::Bytes(data.into()))
    }

    pub fn utf8(text: impl Into<String>) -> Self {
        Self::new(Value::utf8(text))
    }

    pub fn entity_vector(ids: impl Into<Vec<u64>>) -> Self {
        Self::new(Value::EntityVector(ids.into()))
    }

    pub fn float_vector(components: impl Into<FloatVec>) -> Self {
        Self::new(Value::FloatVector(components.into()))
    }

    pub fn point(point: PointF) -> Self {
        Self::new(Value::point(point))
    }

    pub fn size(size: SizeF) -> Self {
        Self::new(Value::size(size))
    }

    pub fn rect(rect: RectF) -> Self {
        Self::new(Value::rect(rect))
    }

    pub fn line(line: LineF) -> Self {
        Self::new(Value::line(line))
    }

    pub fn pointf_vector(points: impl Into<Vec<PointF>>) -> Self {
        Self::new(Value::PointFVector(points.into()))
    }

    pub fn timestamp(ts: impl Into<Timestamp>) -> Self {
        Self::new(Value::Timestamp(ts.into()))
    }

    pub fn regexp(source: impl Into<String>, case_insensitive: bool) -> Self {
        Self::new(Value::regexp(source, case_insensitive))
    }

    /// Wrap JSON opaquely, without mapping scalars to native kinds
    pub fn foreign(json: serde_json::Value) -> Self {
        Self::new(Value::Foreign(json))
    }

    // ==================== Foreign bridge ====================

    /// JSON scalars become native kinds; arrays and objects stay foreign
    pub fn from_foreign(json: serde_json::Value) -> Self {
        Self::new(Value::from_foreign(json))
    }

    pub fn as_foreign(&self) -> serde_json::Value {
        self.value().to_foreign()
    }

    // ==================== ETV ====================

    pub fn to_etv(&self) -> String {
        etv::encode(self.value())
    }

    pub fn from_etv(text: &str) -> EtvResult<Self> {
        etv::decode(text).map(Self::new)
    }

    pub fn from_etv_with_limits(text: &str, limits: &ValueLimits) -> EtvResult<Self> {
        etv::decode_with_limits(text, limits).map(Self::new)
    }

    /// Decode, collapsing any failure to the empty handle
    pub fn from_etv_or_null(text: &str) -> Self {
        Self::from_etv(text).unwrap_or_default()
    }

    // ==================== Conversions ====================

    /// Convert to `kind`; the empty handle when no conversion exists
    pub fn convert_to(&self, kind: crate::ValueKind) -> Self {
        self.value()
            .convert_to(kind)
            .map_or_else(Self::null, Self::new)
    }
}

impl Deref for TypedValue {
    type Target = Value;

    #[inline]
    fn deref(&self) -> &Value {
        self.value()
    }
}

impl AsRef<Value> for TypedValue {
    fn as_ref(&self) -> &Value {
        self.value()
    }
}

impl PartialEq for TypedValue {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl PartialOrd for TypedValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value().partial_cmp(other.value())
    }
}

impl PartialEq<Value> for TypedValue {
    fn eq(&self, other: &Value) -> bool {
        self.value() == other
    }
}

impl fmt::Debug for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypedValue").field(self.value()).finish()
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.value(), f)
    }
}

impl FromStr for TypedValue {
    type Err = EtvError;

    /// Parses ETV text
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_etv(s)
    }
}

impl From<TypedValue> for Value {
    fn from(handle: TypedValue) -> Self {
        handle.into_value()
    }
}

macro_rules! typed_value_from {
    ($($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for TypedValue {
                fn from(v: $t) -> Self {
                    Self::new(Value::from(v))
                }
            }
        )+
    };
}

typed_value_from!(
    Value,
    u64,
    i64,
    bool,
    f64,
    &str,
    String,
    Vec<u8>,
    ByteBuf,
    FloatVec,
    Vec<PointF>,
    PointF,
    SizeF,
    RectF,
    LineF,
    Timestamp,
    Pattern,
    serde_json::Value,
);

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::TypedValue;

    /// Serialized as its ETV text
    impl Serialize for TypedValue {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_etv())
        }
    }

    impl<'de> Deserialize<'de> for TypedValue {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
            TypedValue::from_etv(&text).map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_handle_is_null() {
        let empty = TypedValue::default();
        assert!(empty.is_null());
        assert_eq!(empty.kind(), ValueKind::Null);
        assert_eq!(empty, TypedValue::new(Value::Null));
        assert!(empty.ptr_eq(&TypedValue::null()));
        assert!(!&empty);
    }

    #[test]
    fn test_clone_shares_payload() {
        let original = TypedValue::utf8("shared");
        let copy = original.clone();
        assert!(original.ptr_eq(&copy));
        assert_eq!(copy.text(), "shared");
        assert_eq!(copy.into_value(), Value::utf8("shared"));
    }

    #[test]
    fn test_accessors_through_deref() {
        let v = TypedValue::entity(7);
        assert_eq!(v.entity(), 7);
        assert_eq!(v.as_unsigned64(), Some(7));
        assert_eq!(v.to_string(), "#7");
    }

    #[test]
    fn test_etv_helpers() {
        let v: TypedValue = "s64{-5}".parse().unwrap();
        assert_eq!(v, TypedValue::signed64(-5));
        assert_eq!(v.to_etv(), "s64{-5}");
        assert!(TypedValue::from_etv_or_null("garbage").is_null());
    }

    #[test]
    fn test_foreign_bridge() {
        let v = TypedValue::from_foreign(serde_json::json!([1, 2]));
        assert_eq!(v.kind(), ValueKind::Foreign);
        assert_eq!(v.as_foreign(), serde_json::json!([1, 2]));
        assert_eq!(TypedValue::from_foreign(serde_json::json!(3)).kind(), ValueKind::Unsigned64);
        assert_eq!(TypedValue::foreign(serde_json::json!(3)).kind(), ValueKind::Foreign);
    }

    #[test]
    fn test_convert_to() {
        let v = TypedValue::utf8("1,2");
        assert_eq!(v.convert_to(ValueKind::Point), TypedValue::point(PointF::new(1.0, 2.0)));
        assert!(v.convert_to(ValueKind::Rect).is_null());
    }

    #[test]
    fn test_send_across_threads() {
        let v = TypedValue::float64(1.5);
        let handle = std::thread::spawn(move || v.as_float64());
        assert_eq!(handle.join().unwrap(), Some(1.5));
    }
}
