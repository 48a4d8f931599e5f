//! Core building blocks for the dynval value model.
//!
//! ## Core Components
//!
//! ### [`value`] - The Value enum
//!
//! The closed [`Value`] enum: one variant per kind, with native accessors
//! that return neutral defaults for other kinds.
//!
//! ### [`typed_value`] - Shared handles
//!
//! [`TypedValue`] wraps a value in an `Arc` and is what callers pass around.
//!
//! ### [`kind`] - Type classification
//!
//! [`ValueKind`] tags carry INTEGRAL/FLOATING flag bits and ETV type codes.
//!
//! ### Semantics
//!
//! - [`conversions`]: total `as_*` coercions
//! - [`compare`]: the numeric-first comparator
//! - [`ops`]: checked arithmetic, bitwise operators and concatenation
//! - [`display`]: the text form
//! - [`foreign`]: the `serde_json` bridge
//! - [`limits`]: bounds for untrusted ETV input
pub mod compare;
pub mod conversions;
pub mod display;
pub mod foreign;
pub mod kind;
pub mod limits;
pub mod ops;
pub mod typed_value;
pub mod value;

pub use compare::{CompareOptions, ValueOrdering};
pub use kind::ValueKind;
pub use typed_value::TypedValue;
pub use value::Value;
