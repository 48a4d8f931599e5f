//! Errors raised while installing a subscriber

/// Result alias for logger operations
pub type LogResult<T> = Result<T, LogError>;

/// Logger setup failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// The level directive could not be parsed by `EnvFilter`
    #[error("invalid filter '{filter}': {reason}")]
    Filter {
        /// Directive as supplied
        filter: String,
        /// Parser message
        reason: String,
    },

    /// Format name is not one of compact, pretty or json
    #[error("unknown log format '{0}'")]
    UnknownFormat(String),

    /// A global subscriber is already installed
    #[error("failed to install subscriber: {0}")]
    Init(String),
}

impl LogError {
    /// Create a filter error
    pub fn filter(filter: impl Into<String>, reason: impl ToString) -> Self {
        Self::Filter {
            filter: filter.into(),
            reason: reason.to_string(),
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Filter { .. } => "LOG_FILTER",
            Self::UnknownFormat(_) => "LOG_UNKNOWN_FORMAT",
            Self::Init(_) => "LOG_INIT",
        }
    }
}
