//! # dynval-value
//!
//! A closed set of dynamically typed scalar and small-vector values, behind a
//! cheap reference-counted handle ([`TypedValue`]).
//!
//! The crate provides:
//!
//! - total conversions between kinds (`as_*` accessors returning `Option`),
//! - strict same-kind equality/ordering (`==`, `partial_cmp`),
//! - a cross-kind "numeric-first" comparator ([`TypedValue::compare`]),
//! - overflow-checked arithmetic and bitwise operators that yield null on failure,
//! - literal inference ([`best_number_type`]),
//! - the reversible ETV text format (`typecode{payload}`).
//!
//! ```rust
//! use dynval_value::{TypedValue, ValueOrdering};
//!
//! let a = TypedValue::float64(42.0);
//! let b = TypedValue::utf8("42");
//! assert_eq!(a.compare(&b, false), ValueOrdering::Equivalent);
//!
//! let sum = &TypedValue::unsigned64(u64::MAX) + &TypedValue::unsigned64(1);
//! assert!(sum.is_null());
//!
//! let flag = TypedValue::boolean(true);
//! assert_eq!(flag.to_etv(), "b{1}");
//! assert_eq!(TypedValue::from_etv("b{1}").unwrap(), flag);
//! ```
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod core;
pub mod error;
pub mod etv;
pub mod infer;
pub mod scalar;

pub use crate::core::{
    compare::{CompareOptions, ValueOrdering},
    conversions::NumberTarget,
    foreign::{JsonValueExt, ValueRefExt},
    kind::ValueKind,
    limits::ValueLimits,
    ops::BinaryOp,
    typed_value::TypedValue,
    value::Value,
};
pub use error::{EtvError, EtvResult};
pub use infer::{InferOptions, best_number_type};
pub use scalar::{
    ByteBuf, FloatVec, LineF, Number, Pattern, PointF, RectF, SizeF, Timestamp, Utf8Buf, Word,
};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        BinaryOp, CompareOptions, EtvError, EtvResult, TypedValue, Value, ValueKind,
        ValueOrdering, best_number_type,
    };
    pub use crate::{LineF, PointF, RectF, SizeF, Timestamp};
}
