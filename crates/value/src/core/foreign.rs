//! Bridge between values and `serde_json::Value`
//!
//! JSON scalars map onto native kinds. Arrays and objects have no native
//! counterpart and are kept opaquely in [`Value::Foreign`], which hands them
//! back unchanged.

use serde_json::{Number as JsonNumber, Value as Json};

use crate::core::value::Value;

/// Extension trait for `&Value` providing conversion to `serde_json::Value`
pub trait ValueRefExt {
    fn to_json(&self) -> Json;
}

impl ValueRefExt for Value {
    fn to_json(&self) -> Json {
        self.to_foreign()
    }
}

/// Extension trait for `&serde_json::Value` providing conversion to [`Value`]
pub trait JsonValueExt {
    fn to_dynval_value(&self) -> Value;
}

impl JsonValueExt for Json {
    #[inline]
    fn to_dynval_value(&self) -> Value {
        Value::from_foreign(self.clone())
    }
}

fn float_json(v: f64) -> Json {
    JsonNumber::from_f64(v).map_or(Json::Null, Json::Number)
}

fn floats_json(components: &[f64]) -> Json {
    Json::Array(components.iter().copied().map(float_json).collect())
}

impl Value {
    /// Map a JSON value inbound
    pub fn from_foreign(json: Json) -> Value {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::from(b),
            Json::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Value::from(u)
                } else if let Some(i) = n.as_i64() {
                    Value::from(i)
                } else {
                    n.as_f64().map_or(Value::Null, Value::from)
                }
            }
            Json::String(s) => Value::utf8(s),
            other @ (Json::Array(_) | Json::Object(_)) => Value::Foreign(other),
        }
    }

    /// Map outbound to JSON.
    ///
    /// Non-finite floats become `null`, bytes a base64 string, timestamps an
    /// RFC 3339 string, vectors and geometry arrays.
    pub fn to_foreign(&self) -> Json {
        match self {
            Value::Null => Json::Null,
            Value::Unsigned64(w) | Value::Entity(w) => Json::from(w.get()),
            Value::Signed64(i) => Json::from(*i),
            Value::Boolean(w) => Json::Bool(w.as_bool()),
            Value::Float64(f) => float_json(*f),
            Value::Bytes(b) => Json::String(b.to_base64()),
            Value::Utf8(t) => Json::String(t.as_str().to_owned()),
            Value::EntityVector(ids) => Json::Array(ids.iter().map(|id| Json::from(*id)).collect()),
            Value::FloatVector(v)
            | Value::Point(v)
            | Value::Size(v)
            | Value::Rect(v)
            | Value::Line(v) => floats_json(v.as_slice()),
            Value::PointFVector(points) => Json::Array(
                points
                    .iter()
                    .map(|p| floats_json(&[p.x, p.y]))
                    .collect(),
            ),
            Value::Timestamp(ts) if ts.is_valid() => Json::String(ts.to_rfc3339()),
            Value::Timestamp(_) => Json::Null,
            Value::Regexp(p) if p.is_valid() => Json::String(p.source().to_owned()),
            Value::Regexp(_) => Json::Null,
            Value::Foreign(json) => json.clone(),
        }
    }
}
