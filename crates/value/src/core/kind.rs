//! Value kinds and classification flags.
//!
//! `ValueKind` is the closed tag of a [`Value`](crate::Value). Its
//! discriminants carry two category bits so promotion logic can ask
//! "is this integral?" without matching every kind:
//!
//! ```rust
//! use dynval_value::ValueKind;
//!
//! assert!(ValueKind::Boolean.is_integral());
//! assert!(ValueKind::Float64.is_floating());
//! assert!(!ValueKind::Entity.is_integral());
//! assert_eq!(ValueKind::from_etv_code("pt"), Some(ValueKind::Point));
//! ```
use core::fmt::{Display, Formatter};

const INTEGRAL_BIT: u16 = 0x100;
const FLOATING_BIT: u16 = 0x200;

/// Represents the kind of a value
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u16)]
pub enum ValueKind {
    Null = 0,
    Unsigned64 = 1 | INTEGRAL_BIT,
    Signed64 = 2 | INTEGRAL_BIT,
    Boolean = 3 | INTEGRAL_BIT,
    Float64 = 4 | FLOATING_BIT,
    Entity = 5,
    Bytes = 6,
    Utf8 = 7,
    EntityVector = 8,
    FloatVector = 9,
    Point = 10,
    Size = 11,
    Rect = 12,
    Line = 13,
    PointFVector = 14,
    Timestamp = 15,
    Regexp = 16,
    Foreign = 17,
}

impl ValueKind {
    /// Flag bit set on integer-like kinds
    pub const INTEGRAL: u16 = INTEGRAL_BIT;
    /// Flag bit set on floating-point kinds
    pub const FLOATING: u16 = FLOATING_BIT;

    /// Every kind, in declaration order
    pub const ALL: [ValueKind; 18] = [
        Self::Null,
        Self::Unsigned64,
        Self::Signed64,
        Self::Boolean,
        Self::Float64,
        Self::Entity,
        Self::Bytes,
        Self::Utf8,
        Self::EntityVector,
        Self::FloatVector,
        Self::Point,
        Self::Size,
        Self::Rect,
        Self::Line,
        Self::PointFVector,
        Self::Timestamp,
        Self::Regexp,
        Self::Foreign,
    ];

    /// Raw discriminant including flag bits
    #[inline]
    pub const fn bits(self) -> u16 {
        self as u16
    }

    #[inline]
    pub const fn is_integral(self) -> bool {
        self.bits() & Self::INTEGRAL != 0
    }

    #[inline]
    pub const fn is_floating(self) -> bool {
        self.bits() & Self::FLOATING != 0
    }

    /// Integral or floating
    #[inline]
    pub const fn is_numeric(self) -> bool {
        self.bits() & (Self::INTEGRAL | Self::FLOATING) != 0
    }

    /// Point, Size, Rect or Line
    pub const fn is_geometry(self) -> bool {
        matches!(self, Self::Point | Self::Size | Self::Rect | Self::Line)
    }

    /// Whether same-kind values have an ordering beyond equality
    pub const fn is_ordered(self) -> bool {
        !matches!(
            self,
            Self::Null
                | Self::Point
                | Self::Size
                | Self::Rect
                | Self::Line
                | Self::Regexp
                | Self::Foreign
        )
    }

    /// Get a descriptive name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Unsigned64 => "unsigned64",
            Self::Signed64 => "signed64",
            Self::Boolean => "boolean",
            Self::Float64 => "float64",
            Self::Entity => "entity",
            Self::Bytes => "bytes",
            Self::Utf8 => "utf8",
            Self::EntityVector => "entity_vector",
            Self::FloatVector => "float_vector",
            Self::Point => "point",
            Self::Size => "size",
            Self::Rect => "rect",
            Self::Line => "line",
            Self::PointFVector => "pointf_vector",
            Self::Timestamp => "timestamp",
            Self::Regexp => "regexp",
            Self::Foreign => "foreign",
        }
    }

    /// ETV type code.
    ///
    /// Utf8 values are encoded as bare quoted strings; `utf8` is only
    /// recognized when decoding.
    pub const fn etv_code(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Unsigned64 => "u64",
            Self::Signed64 => "s64",
            Self::Boolean => "b",
            Self::Float64 => "f64",
            Self::Entity => "e",
            Self::Bytes => "bytes",
            Self::Utf8 => "utf8",
            Self::EntityVector => "ev",
            Self::FloatVector => "fv",
            Self::Point => "pt",
            Self::Size => "sz",
            Self::Rect => "rc",
            Self::Line => "ln",
            Self::PointFVector => "pfv",
            Self::Timestamp => "ts",
            Self::Regexp => "re",
            Self::Foreign => "foreign",
        }
    }

    /// Look up an ETV type code (exact match)
    pub fn from_etv_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.etv_code() == code)
    }

    /// Parse a kind name or ETV code, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        match name.as_str() {
            "u64" | "uint" | "unsigned" => return Some(Self::Unsigned64),
            "i64" | "int" | "signed" => return Some(Self::Signed64),
            "bool" => return Some(Self::Boolean),
            "float" | "double" => return Some(Self::Float64),
            "text" | "string" | "str" => return Some(Self::Utf8),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name || kind.etv_code() == name)
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flags() {
        let integral: Vec<_> = ValueKind::ALL
            .into_iter()
            .filter(|k| k.is_integral())
            .collect();
        assert_eq!(
            integral,
            vec![ValueKind::Unsigned64, ValueKind::Signed64, ValueKind::Boolean]
        );
        let floating: Vec<_> = ValueKind::ALL
            .into_iter()
            .filter(|k| k.is_floating())
            .collect();
        assert_eq!(floating, vec![ValueKind::Float64]);
        assert!(!ValueKind::Entity.is_numeric());
    }

    #[test]
    fn test_etv_codes_are_unique() {
        for kind in ValueKind::ALL {
            assert_eq!(ValueKind::from_etv_code(kind.etv_code()), Some(kind));
        }
        assert_eq!(ValueKind::from_etv_code("U64"), None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ValueKind::from_name("Float64"), Some(ValueKind::Float64));
        assert_eq!(ValueKind::from_name("pfv"), Some(ValueKind::PointFVector));
        assert_eq!(ValueKind::from_name("bool"), Some(ValueKind::Boolean));
        assert_eq!(ValueKind::from_name("mystery"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ValueKind::EntityVector.to_string(), "entity_vector");
    }
}
