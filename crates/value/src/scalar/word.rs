use std::fmt;

/// Raw 64-bit word shared by the unsigned, entity and boolean kinds.
///
/// The word itself carries no meaning; the `Value` variant wrapping it decides
/// how it is formatted and which accessors expose it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(u64);

impl Word {
    /// Create a word from raw bits
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    /// Create a word holding a boolean (`1` or `0`)
    pub const fn from_bool(flag: bool) -> Self {
        Self(flag as u64)
    }

    /// Raw bits
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Non-zero test
    #[inline]
    pub const fn as_bool(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Word {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl From<bool> for Word {
    fn from(flag: bool) -> Self {
        Self::from_bool(flag)
    }
}
