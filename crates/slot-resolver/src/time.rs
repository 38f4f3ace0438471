//! Wall-clock time labels and half-open intervals within a single day.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

use crate::error::{Result, SlotError};

/// A wall-clock point within one day, parsed from an `"HH:MM"` label.
/// Defaults to midnight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Parse an `"HH:MM"` label. A single-digit hour (`"9:00"`) is accepted;
    /// minutes must always be two digits.
    pub fn parse(label: &str) -> Result<Self> {
        let malformed = || SlotError::MalformedTimeLabel(label.to_string());

        let (hour, minute) = label.split_once(':').ok_or_else(malformed)?;
        if !(1..=2).contains(&hour.len()) || minute.len() != 2 {
            return Err(malformed());
        }
        if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let hour: u32 = hour.parse().map_err(|_| malformed())?;
        let minute: u32 = minute.parse().map_err(|_| malformed())?;
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(malformed)
    }

    /// Parse a database clock value: `HH:MM`, `HH:MM:SS`, or `HH:MM:SS.ffffff`.
    /// Seconds are truncated to the minute.
    pub fn parse_clock(value: &str) -> Result<Self> {
        let whole = value.split_once('.').map_or(value, |(whole, _)| whole);
        if whole.matches(':').count() == 2 {
            NaiveTime::parse_from_str(whole, "%H:%M:%S")
                .ok()
                .and_then(|t| Self::from_hm(t.hour(), t.minute()))
                .ok_or_else(|| SlotError::MalformedTimeLabel(value.to_string()))
        } else {
            Self::parse(whole).map_err(|_| SlotError::MalformedTimeLabel(value.to_string()))
        }
    }

    /// Build from whole hours and minutes. Returns `None` past 23:59.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.0.num_seconds_from_midnight() / 60
    }

    /// Zero-padded `"HH:MM"` label.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A half-open interval `[start, end)` within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeInterval {
    /// Fails with [`SlotError::InvalidInterval`] unless `start < end`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if start >= end {
            return Err(SlotError::InvalidInterval {
                start: start.label(),
                end: end.label(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(TimeOfDay::parse(start)?, TimeOfDay::parse(end)?)
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// `start <= t < end`.
    pub fn contains(&self, t: TimeOfDay) -> bool {
        self.start <= t && t < self.end
    }

    /// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
    /// Adjacent intervals do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes_since_midnight() - self.start.minutes_since_midnight()
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Parse a requested range such as `"09:00-10:00"` (surrounding whitespace allowed).
pub fn parse_slot_range(range: &str) -> Result<TimeInterval> {
    let malformed = || SlotError::MalformedSlotRange(range.to_string());

    let (start, end) = range.trim().split_once('-').ok_or_else(malformed)?;
    let start = TimeOfDay::parse(start.trim()).map_err(|_| malformed())?;
    let end = TimeOfDay::parse(end.trim()).map_err(|_| malformed())?;
    TimeInterval::new(start, end).map_err(|_| malformed())
}
