//! Timestamps for dynval-value
//!
//! A timestamp is either a valid UTC instant or invalid. The invalid state is
//! what a default-constructed timestamp holds and what a failed parse yields,
//! and it formats as the empty string.
//!
//! Valid instants are limited to the years RFC 3339 can spell (0000 through
//! 9999), so every valid timestamp survives a text round trip.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Datelike, SecondsFormat, Utc};

/// UTC instant, or the invalid timestamp
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Timestamp {
    instant: Option<DateTime<Utc>>,
}

impl Timestamp {
    /// Invalid when the instant falls outside years 0000 through 9999
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Some(instant).filter(representable),
        }
    }

    pub const fn invalid() -> Self {
        Self { instant: None }
    }

    /// Milliseconds since the Unix epoch; invalid outside years 0000 through 9999
    pub fn from_millis(millis: i64) -> Self {
        DateTime::from_timestamp_millis(millis).map_or_else(Self::invalid, Self::new)
    }

    /// Parse RFC 3339 text into a valid timestamp
    pub fn parse(text: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(text.trim())
            .ok()
            .map(|instant| Self::new(instant.with_timezone(&Utc)))
            .filter(Self::is_valid)
    }

    /// The current instant
    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.instant.is_some()
    }

    #[inline]
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        self.instant
    }

    /// Milliseconds since the Unix epoch
    pub fn millis(&self) -> Option<i64> {
        self.instant.map(|instant| instant.timestamp_millis())
    }

    /// RFC 3339 with a `Z` suffix and only as many fractional digits as
    /// needed; empty when invalid
    pub fn to_rfc3339(&self) -> String {
        self.instant
            .map(|instant| instant.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            .unwrap_or_default()
    }
}

fn representable(instant: &DateTime<Utc>) -> bool {
    (0..=9999).contains(&instant.year())
}

impl PartialOrd for Timestamp {
    /// Valid instants order chronologically and invalid equals invalid; a
    /// valid and an invalid timestamp are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.instant, other.instant) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            (None, None) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::new(instant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rfc3339_precision() {
        let ts = Timestamp::from_millis(1_700_000_000_000);
        assert_eq!(ts.to_rfc3339(), "2023-11-14T22:13:20Z");
        let ts = Timestamp::from_millis(1_700_000_000_123);
        assert_eq!(ts.to_rfc3339(), "2023-11-14T22:13:20.123Z");
    }

    #[test]
    fn test_parse_normalizes_offset() {
        let ts = Timestamp::parse("2023-11-14T23:13:20+01:00").unwrap();
        assert_eq!(ts.millis(), Some(1_700_000_000_000));
        assert!(Timestamp::parse("yesterday").is_none());
    }

    #[test]
    fn test_invalid() {
        let ts = Timestamp::default();
        assert!(!ts.is_valid());
        assert_eq!(ts.to_string(), "");
        assert_eq!(ts.millis(), None);
        assert_eq!(ts.partial_cmp(&Timestamp::invalid()), Some(Ordering::Equal));
        assert_eq!(ts.partial_cmp(&Timestamp::from_millis(0)), None);
    }

    #[test]
    fn test_range_is_rfc3339_years() {
        let last = Timestamp::from_millis(253_402_300_799_999);
        assert_eq!(last.to_rfc3339(), "9999-12-31T23:59:59.999Z");
        assert!(!Timestamp::from_millis(253_402_300_800_000).is_valid());

        let first = Timestamp::from_millis(-62_167_219_200_000);
        assert_eq!(first.to_rfc3339(), "0000-01-01T00:00:00Z");
        assert!(!Timestamp::from_millis(-62_167_219_200_001).is_valid());
        assert!(!Timestamp::from_millis(i64::MAX).is_valid());

        assert!(Timestamp::parse("9999-12-31T23:30:00-01:00").is_none());
        assert_eq!(Timestamp::parse(&last.to_rfc3339()), Some(last));
        assert_eq!(Timestamp::parse(&first.to_rfc3339()), Some(first));
    }

    #[test]
    fn test_ordering() {
        assert!(Timestamp::from_millis(1) < Timestamp::from_millis(2));
    }
}
