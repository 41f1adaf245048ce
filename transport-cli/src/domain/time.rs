//! Time and duration handling for connection data.
//!
//! The API sends timestamps as ISO 8601 strings carrying their own UTC
//! offset, and travel durations as `DDdHH:MM:SS`. Both formatters here
//! degrade to the raw input when it cannot be parsed, so one odd value
//! never aborts a whole report.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use tracing::debug;

/// Timestamp layout with an offset written without a colon (`+0100`).
/// The fraction after the seconds is optional.
const COMPACT_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Byte position of the date/time separator in `YYYY-MM-DDTHH:MM:SS`.
const DATE_TIME_SEPARATOR_POS: usize = 10;

/// Error returned when parsing an invalid duration string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid duration: {reason}")]
pub struct DurationError {
    reason: &'static str,
}

impl DurationError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Parse an API timestamp, accepting both `+01:00` and `+0100` offsets.
///
/// The date and time must be joined by an uppercase `T`; chrono's RFC 3339
/// parser would also take a space or `t`. The returned value keeps the
/// offset it was written in.
pub fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    if s.as_bytes().get(DATE_TIME_SEPARATOR_POS) != Some(&b'T') {
        return None;
    }

    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_str(s, COMPACT_OFFSET_FORMAT))
        .ok()
}

/// Format an API timestamp as 24-hour `HH:MM` in its own offset.
///
/// Empty input stays empty; anything unparseable is returned unchanged.
///
/// # Examples
///
/// ```
/// use transport_cli::domain::format_clock_time;
///
/// assert_eq!(format_clock_time("2024-03-15T14:07:00+01:00"), "14:07");
/// assert_eq!(format_clock_time("2024-03-15T14:07:00+0100"), "14:07");
/// assert_eq!(format_clock_time(""), "");
/// assert_eq!(format_clock_time("soon"), "soon");
/// ```
pub fn format_clock_time(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }

    match parse_timestamp(s) {
        Some(timestamp) => timestamp.format("%H:%M").to_string(),
        None => {
            debug!(value = s, "unparseable timestamp, passing through");
            s.to_string()
        }
    }
}

/// Total travel time of a connection, as sent by the API.
///
/// Displays as an English phrase such as `1 hour 5 minutes`. Seconds are
/// only shown when every larger unit is zero.
///
/// # Examples
///
/// ```
/// use transport_cli::domain::TravelDuration;
///
/// let d = TravelDuration::parse("01d02:00:00").unwrap();
/// assert_eq!(d.to_string(), "1 day 2 hours");
///
/// assert!(TravelDuration::parse("02:00:00").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TravelDuration {
    days: u32,
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl TravelDuration {
    /// Create a duration from its components.
    pub fn new(days: u32, hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Parse a duration from `<days>d<hours>:<minutes>:<seconds>`.
    pub fn parse(s: &str) -> Result<Self, DurationError> {
        let (days, clock) = s
            .split_once('d')
            .ok_or_else(|| DurationError::new("missing 'd' day separator"))?;

        let days = parse_component(days, "invalid day count")?;

        let mut parts = clock.split(':');
        let (Some(hours), Some(minutes), Some(seconds), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(DurationError::new("expected HH:MM:SS after day count"));
        };

        Ok(Self {
            days,
            hours: parse_component(hours, "invalid hours")?,
            minutes: parse_component(minutes, "invalid minutes")?,
            seconds: parse_component(seconds, "invalid seconds")?,
        })
    }

    /// Returns the day component.
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Returns the hour component.
    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// Returns the minute component.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Returns the second component.
    pub fn seconds(&self) -> u32 {
        self.seconds
    }
}

impl FromStr for TravelDuration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TravelDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut units = Vec::with_capacity(3);

        for (value, unit) in [
            (self.days, "day"),
            (self.hours, "hour"),
            (self.minutes, "minute"),
        ] {
            if value > 0 {
                units.push(pluralize(value, unit));
            }
        }

        if units.is_empty() && self.seconds > 0 {
            units.push(pluralize(self.seconds, "second"));
        }

        if units.is_empty() {
            return f.write_str("0 minutes");
        }

        f.write_str(&units.join(" "))
    }
}

/// Format an API duration string as an English phrase.
///
/// Malformed input is returned unchanged.
pub fn format_duration(s: &str) -> String {
    match TravelDuration::parse(s) {
        Ok(duration) => duration.to_string(),
        Err(e) => {
            debug!(value = s, error = %e, "unparseable duration, passing through");
            s.to_string()
        }
    }
}

fn parse_component(s: &str, reason: &'static str) -> Result<u32, DurationError> {
    s.parse().map_err(|_| DurationError::new(reason))
}

fn pluralize(value: u32, unit: &str) -> String {
    if value == 1 {
        format!("{value} {unit}")
    } else {
        format!("{value} {unit}s")
    }
}
