//! Regular expressions for dynval-value
//!
//! A [`Pattern`] keeps its source text and case flag alongside the compiled
//! `regex::Regex`. A pattern that failed to compile is invalid; all invalid
//! patterns compare equal to each other.

use std::fmt;

use regex::{Regex, RegexBuilder};

/// Source pattern plus compiled matcher
#[derive(Debug, Clone, Default)]
pub struct Pattern {
    source: String,
    case_insensitive: bool,
    compiled: Option<Regex>,
}

impl Pattern {
    /// Compile `source`; the result is invalid if compilation fails
    pub fn new(source: impl Into<String>, case_insensitive: bool) -> Self {
        let source = source.into();
        let compiled = RegexBuilder::new(&source)
            .case_insensitive(case_insensitive)
            .build()
            .ok();
        Self {
            source,
            case_insensitive,
            compiled,
        }
    }

    /// The invalid pattern
    pub const fn invalid() -> Self {
        Self {
            source: String::new(),
            case_insensitive: false,
            compiled: None,
        }
    }

    /// Compile, returning `None` instead of an invalid pattern
    pub fn compile(source: &str, case_insensitive: bool) -> Option<Self> {
        let pattern = Self::new(source, case_insensitive);
        pattern.is_valid().then_some(pattern)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.compiled.is_some()
    }

    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    #[inline]
    pub fn regex(&self) -> Option<&Regex> {
        self.compiled.as_ref()
    }

    /// False for invalid patterns
    pub fn is_match(&self, haystack: &str) -> bool {
        self.compiled.as_ref().is_some_and(|re| re.is_match(haystack))
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_valid(), other.is_valid()) {
            (true, true) => {
                self.source == other.source && self.case_insensitive == other.case_insensitive
            }
            (false, false) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
