//! Time-of-day handling for the timetable format.
//!
//! The timetable gives times as "HH:MM" strings with minute resolution and
//! no date component. This module provides a plain minutes-since-midnight
//! type so comparisons stay free of calendar artifacts.

use std::fmt;

use chrono::Duration;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A minute-resolution time of day.
///
/// Stored as minutes since midnight, so ordering and subtraction are plain
/// integer arithmetic.
///
/// # Examples
///
/// ```
/// use bus_timetable::domain::DayTime;
///
/// let time = DayTime::parse_hhmm("14:30").unwrap();
/// assert_eq!(time.to_string(), "14:30");
/// assert!(time > DayTime::parse_hhmm("09:05").unwrap());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayTime {
    minutes_from_midnight: u16,
}

impl DayTime {
    /// Create a time from hour and minute components.
    pub fn new(hour: u16, minute: u16) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        Ok(Self {
            minutes_from_midnight: hour * 60 + minute,
        })
    }

    /// Parse a time from strict "HH:MM" format.
    ///
    /// The input must be exactly two digits, a colon, and two digits; no
    /// surrounding characters are tolerated.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_timetable::domain::DayTime;
    ///
    /// assert!(DayTime::parse_hhmm("00:00").is_ok());
    /// assert!(DayTime::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(DayTime::parse_hhmm("9:30").is_err());
    /// assert!(DayTime::parse_hhmm("09:30 ").is_err());
    /// assert!(DayTime::parse_hhmm("24:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;

        Self::new(hour, minute)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u16 {
        self.minutes_from_midnight / 60
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u16 {
        self.minutes_from_midnight % 60
    }

    /// Returns the total minutes since midnight.
    pub fn minutes_from_midnight(&self) -> u16 {
        self.minutes_from_midnight
    }

    /// Returns the duration between two times.
    ///
    /// Returns a negative duration if `other` is after `self`.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        Duration::minutes(
            i64::from(self.minutes_from_midnight) - i64::from(other.minutes_from_midnight),
        )
    }
}

impl fmt::Debug for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DayTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u16.
fn parse_two_digits(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)? as u16;
    let d2 = (bytes[1] as char).to_digit(10)? as u16;
    Some(d1 * 10 + d2)
}
