use crate::error::{Error, Result};
use std::str::FromStr;

pub const MINUTES_PER_DAY: i64 = 1440;
pub const DAY_SUFFIX: &str = "日";

/// Wall-clock time of day, in minutes since local midnight.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd)]
pub struct ClockTime(pub u16);

impl ClockTime {
    pub fn minutes(self) -> f64 {
        f64::from(self.0)
    }
}

impl FromStr for ClockTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason| Error::InvalidTimeFormat {
            input: s.to_string(),
            reason,
        };

        let (hours, mins) = s.split_once(':').ok_or_else(|| invalid("missing ':'"))?;
        if hours.len() != 2 || mins.len() != 2 {
            return Err(invalid("expected zero-padded HH:MM"));
        }
        if !hours.bytes().chain(mins.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid("non-numeric hour or minute"));
        }

        let hours: u16 = hours.parse().map_err(|_| invalid("non-numeric hour"))?;
        let mins: u16 = mins.parse().map_err(|_| invalid("non-numeric minute"))?;
        if hours > 23 {
            return Err(invalid("hour out of range 00-23"));
        }
        if mins > 59 {
            return Err(invalid("minute out of range 00-59"));
        }
        Ok(ClockTime(hours * 60 + mins))
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Minutes since midnight for a `HH:MM` string.
pub fn time_to_minutes(time: &str) -> Result<u16> {
    time.parse::<ClockTime>().map(|t| t.0)
}

/// Day-of-trip number, written as e.g. `1日`.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd)]
pub struct DayLabel(pub u32);

impl DayLabel {
    /// Signed minute offset from the start of `self` to the start of `later`.
    pub fn offset_minutes_to(self, later: DayLabel) -> i64 {
        (i64::from(later.0) - i64::from(self.0)) * MINUTES_PER_DAY
    }
}

impl FromStr for DayLabel {
    type Err = Error;

    // The suffix is optional: planning sheets sometimes carry bare day numbers.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidDayLabel {
            input: s.to_string(),
        };

        let digits_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (digits, rest) = s.split_at(digits_end);
        if digits.is_empty() || !(rest.is_empty() || rest == DAY_SUFFIX) {
            return Err(invalid());
        }
        digits.parse().map(DayLabel).map_err(|_| invalid())
    }
}

impl std::fmt::Display for DayLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.0, DAY_SUFFIX)
    }
}

pub fn parse_day(label: &str) -> Result<u32> {
    label.parse::<DayLabel>().map(|d| d.0)
}
