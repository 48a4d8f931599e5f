//! The closed `Value` enum
//!
//! Every kind has exactly one variant. Variants that share a representation
//! (`Word`, `ByteBuf`, `FloatVec`) differ only in how the rest of the crate
//! interprets them.

use std::cmp::Ordering;

use crate::core::kind::ValueKind;
use crate::scalar::{
    ByteBuf, FloatVec, LineF, Pattern, PointF, RectF, SizeF, Timestamp, Utf8Buf, Word,
};

static INVALID_PATTERN: Pattern = Pattern::invalid();
static JSON_NULL: serde_json::Value = serde_json::Value::Null;

/// A single dynamically typed value
///
/// Values are immutable once built; share them through
/// [`TypedValue`](crate::TypedValue).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Absent value
    #[default]
    Null,

    Unsigned64(Word),

    Signed64(i64),

    /// Stored as a `Word` holding 0 or 1
    Boolean(Word),

    /// Opaque 64-bit entity handle
    Entity(Word),

    Float64(f64),

    /// Arbitrary binary data
    Bytes(ByteBuf),

    /// Valid UTF-8 text
    Utf8(Utf8Buf),

    EntityVector(Vec<u64>),

    FloatVector(FloatVec),

    /// Two components: x, y
    Point(FloatVec),

    /// Two components: width, height
    Size(FloatVec),

    /// Four components: x, y, width, height
    Rect(FloatVec),

    /// Four components: x1, y1, x2, y2
    Line(FloatVec),

    PointFVector(Vec<PointF>),

    Timestamp(Timestamp),

    Regexp(Pattern),

    /// Opaque JSON passthrough
    Foreign(serde_json::Value),
}

impl Value {
    // ==================== Constructors ====================
    //
    // Scalar kinds are built through `From` or the variants directly; the
    // plain names (`unsigned64`, `bytes`, ...) are the native accessors below.

    pub fn utf8(text: impl Into<String>) -> Self {
        Self::Utf8(Utf8Buf::new(text))
    }

    pub fn point(point: PointF) -> Self {
        Self::Point(point.to_float_vec())
    }

    pub fn size(size: SizeF) -> Self {
        Self::Size(size.to_float_vec())
    }

    pub fn rect(rect: RectF) -> Self {
        Self::Rect(rect.to_float_vec())
    }

    pub fn line(line: LineF) -> Self {
        Self::Line(line.to_float_vec())
    }

    /// Compile a pattern; an uncompilable source yields an invalid regexp
    pub fn regexp(source: impl Into<String>, case_insensitive: bool) -> Self {
        Self::Regexp(Pattern::new(source, case_insensitive))
    }

    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Unsigned64(_) => ValueKind::Unsigned64,
            Self::Signed64(_) => ValueKind::Signed64,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Entity(_) => ValueKind::Entity,
            Self::Float64(_) => ValueKind::Float64,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Utf8(_) => ValueKind::Utf8,
            Self::EntityVector(_) => ValueKind::EntityVector,
            Self::FloatVector(_) => ValueKind::FloatVector,
            Self::Point(_) => ValueKind::Point,
            Self::Size(_) => ValueKind::Size,
            Self::Rect(_) => ValueKind::Rect,
            Self::Line(_) => ValueKind::Line,
            Self::PointFVector(_) => ValueKind::PointFVector,
            Self::Timestamp(_) => ValueKind::Timestamp,
            Self::Regexp(_) => ValueKind::Regexp,
            Self::Foreign(_) => ValueKind::Foreign,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Per-kind "absent or invalid" test.
    ///
    /// Zero and `false` are not falsy.
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Float64(v) => v.is_nan(),
            Self::Bytes(b) => b.is_empty(),
            Self::Utf8(t) => t.is_empty(),
            Self::Point(v) | Self::Size(v) | Self::Rect(v) | Self::Line(v) => v.has_nan(),
            Self::Timestamp(ts) => !ts.is_valid(),
            Self::Regexp(p) => !p.is_valid(),
            Self::Foreign(json) => json.is_null(),
            Self::Unsigned64(_)
            | Self::Signed64(_)
            | Self::Boolean(_)
            | Self::Entity(_)
            | Self::EntityVector(_)
            | Self::FloatVector(_)
            | Self::PointFVector(_) => false,
        }
    }

    // ==================== Native accessors ====================
    //
    // Each returns the stored payload for its own kind (and for kinds sharing
    // the same representation), and a neutral default otherwise.

    /// Raw word of Unsigned64, Entity or Boolean; 0 otherwise
    pub fn unsigned64(&self) -> u64 {
        match self {
            Self::Unsigned64(w) | Self::Entity(w) | Self::Boolean(w) => w.get(),
            _ => 0,
        }
    }

    pub fn signed64(&self) -> i64 {
        match self {
            Self::Signed64(v) => *v,
            _ => 0,
        }
    }

    /// NaN for non-float kinds
    pub fn float64(&self) -> f64 {
        match self {
            Self::Float64(v) => *v,
            _ => f64::NAN,
        }
    }

    pub fn boolean(&self) -> bool {
        match self {
            Self::Boolean(w) => w.as_bool(),
            _ => false,
        }
    }

    pub fn entity(&self) -> u64 {
        match self {
            Self::Entity(w) => w.get(),
            _ => 0,
        }
    }

    /// Payload of Bytes or Utf8
    pub fn bytes(&self) -> &[u8] {
        match self {
            Self::Bytes(b) => b.as_slice(),
            Self::Utf8(t) => t.as_byte_buf().as_slice(),
            _ => &[],
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Utf8(t) => t.as_str(),
            _ => "",
        }
    }

    pub fn entity_vector(&self) -> &[u64] {
        match self {
            Self::EntityVector(ids) => ids,
            _ => &[],
        }
    }

    /// Components of a float vector or any geometric kind
    pub fn float_vector(&self) -> &[f64] {
        self.float_vec_storage().map_or(&[], FloatVec::as_slice)
    }

    pub fn pointf(&self) -> PointF {
        match self {
            Self::Point(v) => PointF::from_float_vec(v),
            _ => PointF::invalid(),
        }
    }

    pub fn sizef(&self) -> SizeF {
        match self {
            Self::Size(v) => SizeF::from_float_vec(v),
            _ => SizeF::invalid(),
        }
    }

    pub fn rectf(&self) -> RectF {
        match self {
            Self::Rect(v) => RectF::from_float_vec(v),
            _ => RectF::invalid(),
        }
    }

    pub fn linef(&self) -> LineF {
        match self {
            Self::Line(v) => LineF::from_float_vec(v),
            _ => LineF::invalid(),
        }
    }

    pub fn pointf_vector(&self) -> &[PointF] {
        match self {
            Self::PointFVector(points) => points,
            _ => &[],
        }
    }

    /// Invalid for non-timestamp kinds
    pub fn timestamp(&self) -> Timestamp {
        match self {
            Self::Timestamp(ts) => *ts,
            _ => Timestamp::invalid(),
        }
    }

    pub fn regex(&self) -> &Pattern {
        match self {
            Self::Regexp(p) => p,
            _ => &INVALID_PATTERN,
        }
    }

    /// JSON null for non-foreign kinds
    pub fn foreign(&self) -> &serde_json::Value {
        match self {
            Self::Foreign(json) => json,
            _ => &JSON_NULL,
        }
    }

    pub(crate) fn float_vec_storage(&self) -> Option<&FloatVec> {
        match self {
            Self::FloatVector(v)
            | Self::Point(v)
            | Self::Size(v)
            | Self::Rect(v)
            | Self::Line(v) => Some(v),
            _ => None,
        }
    }
}

impl PartialOrd for Value {
    /// Same-kind ordering only. Kinds without an ordering report `Equal` when
    /// the values are equal and `None` otherwise; different kinds are always
    /// unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use Value::*;
        match (self, other) {
            (Unsigned64(a), Unsigned64(b))
            | (Boolean(a), Boolean(b))
            | (Entity(a), Entity(b)) => Some(a.cmp(b)),
            (Signed64(a), Signed64(b)) => Some(a.cmp(b)),
            (Float64(a), Float64(b)) => a.partial_cmp(b),
            (Bytes(a), Bytes(b)) => Some(a.cmp(b)),
            (Utf8(a), Utf8(b)) => Some(a.cmp(b)),
            (EntityVector(a), EntityVector(b)) => Some(a.cmp(b)),
            (FloatVector(a), FloatVector(b)) => a.partial_cmp(b),
            (PointFVector(a), PointFVector(b)) => a.partial_cmp(b),
            (Timestamp(a), Timestamp(b)) => a.partial_cmp(b),
            _ if self.kind() == other.kind() => (self == other).then_some(Ordering::Equal),
            _ => None,
        }
    }
}

// ==================== From impls ====================

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Unsigned64(Word::new(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Signed64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(Word::from_bool(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::utf8(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::utf8(v)
    }
}

impl From<ByteBuf> for Value {
    fn from(v: ByteBuf) -> Self {
        Self::Bytes(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(ByteBuf::new(v))
    }
}

impl From<FloatVec> for Value {
    fn from(v: FloatVec) -> Self {
        Self::FloatVector(v)
    }
}

impl From<Vec<PointF>> for Value {
    fn from(v: Vec<PointF>) -> Self {
        Self::PointFVector(v)
    }
}

impl From<serde_json::Value> for Value {
    /// Scalars map to native kinds; arrays and objects stay foreign
    fn from(v: serde_json::Value) -> Self {
        Self::from_foreign(v)
    }
}

impl From<Timestamp> for Value {
    fn from(v: Timestamp) -> Self {
        Self::Timestamp(v)
    }
}

impl From<Pattern> for Value {
    fn from(v: Pattern) -> Self {
        Self::Regexp(v)
    }
}

impl From<PointF> for Value {
    fn from(v: PointF) -> Self {
        Self::point(v)
    }
}

impl From<SizeF> for Value {
    fn from(v: SizeF) -> Self {
        Self::size(v)
    }
}

impl From<RectF> for Value {
    fn from(v: RectF) -> Self {
        Self::rect(v)
    }
}

impl From<LineF> for Value {
    fn from(v: LineF) -> Self {
        Self::line(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
