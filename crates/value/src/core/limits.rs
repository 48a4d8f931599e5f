//! Size limits for decoding untrusted ETV input
//!
//! ETV text may come from files, the command line or the network. These
//! limits bound how much a single decode may allocate.

use crate::error::{EtvError, EtvResult};

/// Configurable limits for ETV decoding
///
/// # Example
///
/// ```
/// use dynval_value::ValueLimits;
///
/// let limits = ValueLimits::default();
/// assert_eq!(limits.max_vector_len, 1_000_000);
///
/// let strict = ValueLimits::strict();
/// assert!(strict.check_etv_bytes(2_000_000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueLimits {
    /// Maximum length of the encoded input in bytes
    pub max_etv_bytes: usize,

    /// Maximum decoded text or bytes payload
    pub max_text_bytes: usize,

    /// Maximum number of elements in a decoded vector
    pub max_vector_len: usize,
}

impl Default for ValueLimits {
    fn default() -> Self {
        Self {
            max_etv_bytes: 64_000_000,  // 64MB
            max_text_bytes: 32_000_000, // 32MB
            max_vector_len: 1_000_000,
        }
    }
}

impl ValueLimits {
    /// Permissive limits for trusted environments
    pub fn permissive() -> Self {
        Self {
            max_etv_bytes: 1_000_000_000,
            max_text_bytes: 500_000_000,
            max_vector_len: 50_000_000,
        }
    }

    /// Strict limits for untrusted input
    pub fn strict() -> Self {
        Self {
            max_etv_bytes: 1_000_000, // 1MB
            max_text_bytes: 512_000,
            max_vector_len: 10_000,
        }
    }

    /// No limits (use with caution!)
    pub const fn unlimited() -> Self {
        Self {
            max_etv_bytes: usize::MAX,
            max_text_bytes: usize::MAX,
            max_vector_len: usize::MAX,
        }
    }

    /// Look up a preset by name: `default`, `strict`, `permissive`, `unlimited`
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" => Some(Self::default()),
            "strict" => Some(Self::strict()),
            "permissive" => Some(Self::permissive()),
            "unlimited" => Some(Self::unlimited()),
            _ => None,
        }
    }

    #[inline]
    fn check(limit: &'static str, max: usize, actual: usize) -> EtvResult<()> {
        if actual > max {
            Err(EtvError::limit_exceeded(limit, max, actual))
        } else {
            Ok(())
        }
    }

    /// Validate encoded input length
    #[inline]
    pub fn check_etv_bytes(&self, len: usize) -> EtvResult<()> {
        Self::check("max_etv_bytes", self.max_etv_bytes, len)
    }

    /// Validate decoded text/bytes length
    #[inline]
    pub fn check_text_bytes(&self, len: usize) -> EtvResult<()> {
        Self::check("max_text_bytes", self.max_text_bytes, len)
    }

    /// Validate decoded vector element count
    #[inline]
    pub fn check_vector_len(&self, len: usize) -> EtvResult<()> {
        Self::check("max_vector_len", self.max_vector_len, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = ValueLimits::default();
        assert!(limits.check_vector_len(1000).is_ok());
        assert!(limits.check_vector_len(2_000_000).is_err());
    }

    #[test]
    fn test_strict_limits() {
        let limits = ValueLimits::strict();
        assert!(limits.check_vector_len(5000).is_ok());
        assert!(limits.check_vector_len(20_000).is_err());
        assert!(limits.check_text_bytes(1_000_000).is_err());
    }

    #[test]
    fn test_unlimited() {
        let limits = ValueLimits::unlimited();
        assert!(limits.check_etv_bytes(usize::MAX - 1).is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(ValueLimits::preset("Strict"), Some(ValueLimits::strict()));
        assert_eq!(ValueLimits::preset("default"), Some(ValueLimits::default()));
        assert_eq!(ValueLimits::preset("tiny"), None);
    }

    #[test]
    fn test_error_carries_limit_name() {
        let err = ValueLimits::strict().check_etv_bytes(2_000_000).unwrap_err();
        assert!(matches!(
            err,
            EtvError::LimitExceeded {
                limit: "max_etv_bytes",
                max: 1_000_000,
                actual: 2_000_000
            }
        ));
    }
}
