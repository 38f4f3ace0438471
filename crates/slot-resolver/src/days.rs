//! Day index → day token mapping.
//!
//! Day tokens are opaque keys. The resolver never interprets them beyond
//! matching a caller-supplied index (0 = Monday … 6 = Sunday) to a token.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{Result, SlotError};

/// Korean single-character weekday tokens sent by the timetable backend.
pub const KOREAN_WEEKDAYS: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

/// Number of weekdays the backend computes free slots for (Monday–Friday).
pub const SCHOOL_DAYS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTokens {
    tokens: [String; 7],
}

impl DayTokens {
    /// Tokens ordered Monday through Sunday.
    pub fn new(tokens: [&str; 7]) -> Self {
        Self {
            tokens: tokens.map(str::to_string),
        }
    }

    pub fn token(&self, index: usize) -> Result<&str> {
        self.tokens
            .get(index)
            .map(String::as_str)
            .ok_or(SlotError::DayIndexOutOfRange(index))
    }

    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.tokens.iter().position(|t| t == token)
    }

    pub fn for_weekday(&self, weekday: Weekday) -> &str {
        &self.tokens[weekday.num_days_from_monday() as usize]
    }

    pub fn for_date(&self, date: NaiveDate) -> &str {
        self.for_weekday(date.weekday())
    }

    /// Monday–Friday tokens, in order.
    pub fn school_days(&self) -> Vec<&str> {
        self.tokens[..SCHOOL_DAYS].iter().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl Default for DayTokens {
    fn default() -> Self {
        Self::new(KOREAN_WEEKDAYS)
    }
}
