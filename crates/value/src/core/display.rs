//! Text form of values
//!
//! The text form is what `Display` prints, what `as_text` falls back to for
//! non-text kinds, and what the numeric-first comparator and `concat` work on.

use std::fmt;

use crate::core::value::Value;
use crate::scalar::number::format_float;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),

            Value::Unsigned64(w) => write!(f, "{w}"),

            Value::Signed64(i) => write!(f, "{i}"),

            Value::Boolean(w) => f.write_str(if w.as_bool() { "true" } else { "false" }),

            Value::Entity(w) => write!(f, "#{w}"),

            Value::Float64(v) => f.write_str(&format_float(*v)),

            Value::Bytes(b) => f.write_str(&b.to_string_lossy()),

            Value::Utf8(t) => f.write_str(t.as_str()),

            Value::EntityVector(ids) => {
                for (i, id) in ids.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{id}")?;
                }
                Ok(())
            }

            Value::FloatVector(v)
            | Value::Point(v)
            | Value::Size(v)
            | Value::Rect(v)
            | Value::Line(v) => write!(f, "{v}"),

            Value::PointFVector(points) => {
                for (i, point) in points.iter().enumerate() {
                    if i > 0 {
                        f.write_str(";")?;
                    }
                    write!(f, "{point}")?;
                }
                Ok(())
            }

            Value::Timestamp(ts) => write!(f, "{ts}"),

            Value::Regexp(pattern) => f.write_str(pattern.source()),

            Value::Foreign(json) => write!(f, "{json}"),
        }
    }
}

impl Value {
    /// Text form as an owned string (same as `to_string()`)
    pub fn to_text(&self) -> String {
        match self {
            Value::Utf8(t) => t.as_str().to_owned(),
            _ => self.to_string(),
        }
    }

    /// UTF-16 code units of the text form
    pub fn to_utf16(&self) -> Vec<u16> {
        self.to_text().encode_utf16().collect()
    }
}
