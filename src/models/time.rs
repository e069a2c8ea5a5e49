//! Timestamps as PayPal returns them.
//!
//! The API is not consistent about its timestamp format. Depending on the
//! resource, the same field can come back as:
//!
//! - `2018-08-15T19:14:04.543Z` (fractional seconds, UTC marker)
//! - `2018-08-15T19:14:04Z` (whole seconds, UTC marker)
//! - `2018-08-15T12:13:29-07:00` (numeric offset, a fraction is tolerated)
//!
//! Some resources also send `""`, `"0"` or `null` for timestamps that were
//! never set. [`PayPalTime`] accepts all of these.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

const LAYOUT_FRACTIONAL_UTC: &str = "%Y-%m-%dT%H:%M:%S%.fZ";
const LAYOUT_WHOLE_UTC: &str = "%Y-%m-%dT%H:%M:%SZ";
const LAYOUT_WITH_OFFSET: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// A timestamp string matched none of the accepted layouts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp {input:?}: {source}")]
pub struct TimestampParseError {
    input: String,
    #[source]
    source: chrono::ParseError,
}

impl TimestampParseError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A point in time decoded from a PayPal timestamp.
///
/// The value is offset-aware: a timestamp sent with `-07:00` keeps that
/// offset. Equality compares instants, so `2018-08-15T19:13:29Z` equals
/// `2018-08-15T12:13:29-07:00`.
///
/// Timestamps that were absent on the wire (`null`, `""`, `"0"`) become the
/// zero value, see [`PayPalTime::is_zero`].
///
/// Formatting always produces whole seconds with a `Z` suffix. Sub-second
/// precision and the original offset are not preserved.
///
/// # Example
///
/// ```
/// use paypal_rs::models::PayPalTime;
///
/// let t = PayPalTime::parse("2018-08-15T12:13:29-07:00").unwrap();
/// assert_eq!(t.to_string(), "2018-08-15T19:13:29Z");
///
/// assert!(PayPalTime::parse("").unwrap().is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PayPalTime(Option<DateTime<FixedOffset>>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    FractionalUtc,
    WholeUtc,
    WithOffset,
}

impl Layout {
    fn detect(text: &str) -> Self {
        if !text.ends_with('Z') {
            Layout::WithOffset
        } else if text.contains('.') {
            Layout::FractionalUtc
        } else {
            Layout::WholeUtc
        }
    }
}

impl PayPalTime {
    /// The absent timestamp.
    pub const ZERO: PayPalTime = PayPalTime(None);

    /// Parse a timestamp in any of the layouts PayPal uses.
    ///
    /// `""`, `"0"` and `"null"` are treated as absent and yield
    /// [`PayPalTime::ZERO`].
    ///
    /// # Errors
    ///
    /// Returns [`TimestampParseError`] when the text is not absent and does not
    /// match the layout implied by its shape.
    pub fn parse(text: &str) -> Result<Self, TimestampParseError> {
        let text = text.trim();
        if matches!(text, "" | "0" | "null") {
            return Ok(Self::ZERO);
        }

        let parsed = match Layout::detect(text) {
            Layout::FractionalUtc => NaiveDateTime::parse_from_str(text, LAYOUT_FRACTIONAL_UTC)
                .map(|naive| naive.and_utc().fixed_offset()),
            Layout::WholeUtc => NaiveDateTime::parse_from_str(text, LAYOUT_WHOLE_UTC)
                .map(|naive| naive.and_utc().fixed_offset()),
            Layout::WithOffset => DateTime::parse_from_str(text, LAYOUT_WITH_OFFSET),
        };

        parsed.map(|dt| Self(Some(dt))).map_err(|source| TimestampParseError {
            input: text.to_string(),
            source,
        })
    }

    /// Returns `true` if the timestamp was absent.
    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    /// The timestamp with the offset it was sent with.
    pub fn as_datetime(&self) -> Option<DateTime<FixedOffset>> {
        self.0
    }

    /// The timestamp converted to UTC.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        self.0.map(|dt| dt.with_timezone(&Utc))
    }
}

impl From<DateTime<Utc>> for PayPalTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(Some(dt.fixed_offset()))
    }
}

impl From<DateTime<FixedOffset>> for PayPalTime {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self(Some(dt))
    }
}

impl std::str::FromStr for PayPalTime {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PayPalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_utc() {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
            None => Ok(()),
        }
    }
}

impl Serialize for PayPalTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PayPalTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PayPalTimeVisitor;

        impl<'de> Visitor<'de> for PayPalTimeVisitor {
            type Value = PayPalTime;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a PayPal timestamp string or null")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                PayPalTime::parse(v).map_err(E::custom)
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(PayPalTime::ZERO)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(PayPalTime::ZERO)
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
                d.deserialize_any(self)
            }
        }

        deserializer.deserialize_any(PayPalTimeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[derive(Debug, Deserialize, Serialize)]
    struct Dated {
        date: PayPalTime,
    }

    fn decode(json: &str) -> serde_json::Result<PayPalTime> {
        serde_json::from_str::<Dated>(json).map(|d| d.date)
    }

    #[test]
    fn test_fractional_utc() {
        let t = decode(r#"{"date":"2018-08-15T19:14:04.543Z"}"#).unwrap();
        let expected = Utc.with_ymd_and_hms(2018, 8, 15, 19, 14, 4).unwrap()
            + chrono::Duration::milliseconds(543);
        assert_eq!(t.to_utc(), Some(expected));
    }

    #[test]
    fn test_numeric_offset() {
        let t = decode(r#"{"date":"2018-08-15T12:13:29-07:00"}"#).unwrap();
        let dt = t.as_datetime().unwrap();
        assert_eq!(dt.offset().local_minus_utc(), -7 * 3600);
        assert_eq!(dt.hour(), 12);
    }

    #[test]
    fn test_numeric_offset_with_fraction() {
        let t = PayPalTime::parse("2018-08-15T12:13:29.123-07:00").unwrap();
        assert_eq!(t, PayPalTime::parse("2018-08-15T19:13:29.123Z").unwrap());
        assert_eq!(t.to_string(), "2018-08-15T19:13:29Z");
    }

    #[test]
    fn test_whole_seconds_utc() {
        let t = decode(r#"{"date":"2018-08-15T19:14:04Z"}"#).unwrap();
        let expected = Utc.with_ymd_and_hms(2018, 8, 15, 19, 14, 4).unwrap();
        assert_eq!(t.to_utc(), Some(expected));
        assert_eq!(t.to_utc().unwrap().nanosecond(), 0);
    }

    #[test]
    fn test_absent_values() {
        assert!(decode(r#"{"date":null}"#).unwrap().is_zero());
        assert!(decode(r#"{"date":""}"#).unwrap().is_zero());
        assert!(decode(r#"{"date":"0"}"#).unwrap().is_zero());
        assert!(PayPalTime::parse("null").unwrap().is_zero());
    }

    #[test]
    fn test_malformed_is_an_error() {
        let err = PayPalTime::parse("not-a-date").unwrap_err();
        assert_eq!(err.input(), "not-a-date");
        assert!(decode(r#"{"date":"not-a-date"}"#).is_err());
        assert!(decode(r#"{"date":"2018-08-15 19:14:04Z"}"#).is_err());
        assert!(decode(r#"{"date":42}"#).is_err());
    }

    #[test]
    fn test_repeated_parse_is_stable() {
        for input in [
            "2018-08-15T19:14:04.543Z",
            "2018-08-15T19:14:04Z",
            "2018-08-15T12:13:29-07:00",
        ] {
            assert_eq!(PayPalTime::parse(input).unwrap(), PayPalTime::parse(input).unwrap());
        }
    }

    #[test]
    fn test_equality_across_layouts() {
        let utc = PayPalTime::parse("2018-08-15T19:13:29Z").unwrap();
        let offset = PayPalTime::parse("2018-08-15T12:13:29-07:00").unwrap();
        assert_eq!(utc, offset);
    }

    #[test]
    fn test_format_is_whole_seconds_utc() {
        let t = PayPalTime::parse("2018-08-15T19:14:04.543Z").unwrap();
        assert_eq!(t.to_string(), "2018-08-15T19:14:04Z");

        let json = serde_json::to_string(&Dated { date: t }).unwrap();
        assert_eq!(json, r#"{"date":"2018-08-15T19:14:04Z"}"#);

        assert_eq!(PayPalTime::ZERO.to_string(), "");
    }
}
