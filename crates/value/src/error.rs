//! ETV decoding errors
//!
//! Conversions and operators report failure through `Option` and `Null`; the
//! only fallible API with a structured error is decoding untrusted ETV text.

use thiserror::Error;

use crate::core::kind::ValueKind;

// ============================================================================
// MAIN ERROR TYPE
// ============================================================================

/// ETV decoding errors
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EtvError {
    /// No `{` after the type code
    #[error("missing '{{' after type code")]
    MissingBrace,

    /// Payload not terminated by `}`
    #[error("missing closing '}}'")]
    MissingClosingBrace,

    /// Type code not in the code table
    #[error("unknown type code '{code}'")]
    UnknownTypeCode { code: String },

    /// Malformed escape sequence
    #[error("invalid escape sequence at byte {position}")]
    InvalidEscape { position: usize },

    /// Quoted string without an unescaped closing quote, or with trailing text
    #[error("unterminated quoted string")]
    UnterminatedString,

    /// Payload does not parse as the kind named by the type code
    #[error("invalid {kind} payload: {reason}")]
    InvalidPayload { kind: ValueKind, reason: String },

    /// Input rejected by [`ValueLimits`](crate::ValueLimits)
    #[error("{limit} exceeded: {actual} > {max}")]
    LimitExceeded {
        limit: &'static str,
        max: usize,
        actual: usize,
    },
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl EtvError {
    pub fn unknown_type_code(code: impl Into<String>) -> Self {
        Self::UnknownTypeCode { code: code.into() }
    }

    pub fn invalid_payload(kind: ValueKind, reason: impl Into<String>) -> Self {
        Self::InvalidPayload {
            kind,
            reason: reason.into(),
        }
    }

    pub fn limit_exceeded(limit: &'static str, max: usize, actual: usize) -> Self {
        Self::LimitExceeded { limit, max, actual }
    }
}

// ============================================================================
// ERROR CLASSIFICATION
// ============================================================================

impl EtvError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingBrace => "ETV_MISSING_BRACE",
            Self::MissingClosingBrace => "ETV_MISSING_CLOSING_BRACE",
            Self::UnknownTypeCode { .. } => "ETV_UNKNOWN_TYPE_CODE",
            Self::InvalidEscape { .. } => "ETV_INVALID_ESCAPE",
            Self::UnterminatedString => "ETV_UNTERMINATED_STRING",
            Self::InvalidPayload { .. } => "ETV_INVALID_PAYLOAD",
            Self::LimitExceeded { .. } => "ETV_LIMIT_EXCEEDED",
        }
    }

    /// Whether the input itself is malformed, as opposed to well-formed but
    /// rejected by limits
    pub fn is_syntax_error(&self) -> bool {
        !matches!(self, Self::LimitExceeded { .. })
    }
}

// ============================================================================
// RESULT TYPE
// ============================================================================

/// Result type alias for ETV decoding
pub type EtvResult<T> = Result<T, EtvError>;
