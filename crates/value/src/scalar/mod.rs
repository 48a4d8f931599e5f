//! Scalar storage types for dynval-value
//!
//! Several value kinds share one physical representation and differ only in
//! meaning:
//!
//! - [`Word`] backs `Unsigned64`, `Entity` and `Boolean`
//! - [`ByteBuf`] backs `Bytes`, and through [`Utf8Buf`] also `Utf8`
//! - [`FloatVec`] backs `FloatVector`, `Point`, `Size`, `Rect` and `Line`

pub mod bytes;
pub mod geometry;
pub mod number;
pub mod pattern;
pub mod timestamp;
pub mod word;

pub use bytes::{ByteBuf, Utf8Buf};
pub use geometry::{FloatVec, LineF, PointF, RectF, SizeF};
pub use number::Number;
pub use pattern::Pattern;
pub use timestamp::Timestamp;
pub use word::Word;
