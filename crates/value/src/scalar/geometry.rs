//! Float vectors and 2-D geometry
//!
//! Every geometric kind shares [`FloatVec`] storage. The constructors fix the
//! component count (2 for points and sizes, 4 for rects and lines); reads go
//! through [`FloatVec::component`], which yields NaN for a missing component
//! instead of panicking.

use std::fmt;

use smallvec::SmallVec;

use super::number::format_float;

/// Inline-up-to-four vector of floats
#[derive(Debug, Clone, Default, PartialEq, PartialOrd)]
pub struct FloatVec {
    components: SmallVec<[f64; 4]>,
}

impl FloatVec {
    pub fn new(components: impl IntoIterator<Item = f64>) -> Self {
        Self {
            components: components.into_iter().collect(),
        }
    }

    pub fn from_slice(components: &[f64]) -> Self {
        Self {
            components: SmallVec::from_slice(components),
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.components
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Component at `index`, NaN when out of range
    #[inline]
    pub fn component(&self, index: usize) -> f64 {
        self.components.get(index).copied().unwrap_or(f64::NAN)
    }

    pub fn has_nan(&self) -> bool {
        self.components.iter().any(|c| c.is_nan())
    }

    /// Parse comma-separated floats; empty text is the empty vector
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Some(Self::default());
        }
        text.split(',')
            .map(super::number::parse_float)
            .collect::<Option<SmallVec<[f64; 4]>>>()
            .map(|components| Self { components })
    }
}

impl fmt::Display for FloatVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.components)
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, components: &[f64]) -> fmt::Result {
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        f.write_str(&format_float(*c))?;
    }
    Ok(())
}

impl From<Vec<f64>> for FloatVec {
    fn from(components: Vec<f64>) -> Self {
        Self::new(components)
    }
}

impl From<&[f64]> for FloatVec {
    fn from(components: &[f64]) -> Self {
        Self::from_slice(components)
    }
}

macro_rules! geometry {
    ($(#[$meta:meta])* $name:ident { $($field:ident),+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
        pub struct $name {
            $(pub $field: f64),+
        }

        impl $name {
            pub const fn new($($field: f64),+) -> Self {
                Self { $($field),+ }
            }

            /// All components NaN; what non-geometric values report
            pub const fn invalid() -> Self {
                Self { $($field: f64::NAN),+ }
            }

            /// No NaN component
            pub fn is_valid(&self) -> bool {
                $(!self.$field.is_nan())&&+
            }

            pub fn to_float_vec(&self) -> FloatVec {
                FloatVec::from_slice(&[$(self.$field),+])
            }

            /// Read from the leading components of a float vector
            pub fn from_float_vec(vec: &FloatVec) -> Self {
                let mut indices = 0_usize..;
                $(let $field = vec.component(indices.next().unwrap_or_default());)+
                Self { $($field),+ }
            }

            /// Component count
            pub fn arity() -> usize {
                [$(stringify!($field)),+].len()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_joined(f, &[$(self.$field),+])
            }
        }
    };
}

geometry!(
    /// A point in the plane
    PointF { x, y }
);
geometry!(
    /// A width/height pair
    SizeF { width, height }
);
geometry!(
    /// An axis-aligned rectangle: origin then extent
    RectF { x, y, width, height }
);
geometry!(
    /// A segment from `(x1, y1)` to `(x2, y2)`
    LineF { x1, y1, x2, y2 }
);
