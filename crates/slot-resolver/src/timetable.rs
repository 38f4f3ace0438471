//! A user's weekly timetable: day index → slot label → subject.
//!
//! Persisted as JSON, e.g. `{"0":{"09:00":"Algorithms"},"2":{"13:00":"Networks"}}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::time::TimeOfDay;

const DAYS_PER_WEEK: usize = 7;

/// One row of a day view. `label` is `None` for an empty slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableItem {
    pub time: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekTimetable {
    days: BTreeMap<usize, BTreeMap<String, String>>,
}

impl WeekTimetable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `subject` to `time` on `day_index` (0 = Monday). Replaces any
    /// previous subject and returns it. Times are stored as zero-padded labels.
    pub fn set(&mut self, day_index: usize, time: &str, subject: impl Into<String>) -> Result<Option<String>> {
        check_day(day_index)?;
        let key = TimeOfDay::parse(time)?.label();
        Ok(self.days.entry(day_index).or_default().insert(key, subject.into()))
    }

    pub fn clear(&mut self, day_index: usize, time: &str) -> Option<String> {
        let key = normalize(time)?;
        let day = self.days.get_mut(&day_index)?;
        let removed = day.remove(&key);
        if day.is_empty() {
            self.days.remove(&day_index);
        }
        removed
    }

    pub fn subject(&self, day_index: usize, time: &str) -> Option<&str> {
        let key = normalize(time)?;
        self.days.get(&day_index)?.get(&key).map(String::as_str)
    }

    /// Join the canonical labels with this day's subjects.
    pub fn day_view(&self, day_index: usize, canonical: &[String]) -> Result<Vec<TimetableItem>> {
        check_day(day_index)?;
        Ok(canonical
            .iter()
            .map(|time| TimetableItem {
                time: time.clone(),
                label: self.subject(day_index, time).map(str::to_string),
            })
            .collect())
    }

    /// Canonical labels with nothing scheduled on this day.
    pub fn empty_slots(&self, day_index: usize, canonical: &[String]) -> Result<Vec<String>> {
        Ok(self
            .day_view(day_index, canonical)?
            .into_iter()
            .filter(|item| item.label.is_none())
            .map(|item| item.time)
            .collect())
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a stored timetable, rejecting day indices past Sunday and
    /// malformed time labels. Labels are normalized to `HH:MM`.
    pub fn from_json(json: &str) -> Result<Self> {
        let stored: BTreeMap<usize, BTreeMap<String, String>> = serde_json::from_str(json)?;
        let mut timetable = WeekTimetable::new();
        for (day_index, entries) in stored {
            check_day(day_index)?;
            for (time, subject) in entries {
                timetable.set(day_index, &time, subject)?;
            }
        }
        Ok(timetable)
    }
}

/// Zero-padded form of `time`, or `None` if it is not a valid label.
fn normalize(time: &str) -> Option<String> {
    TimeOfDay::parse(time).ok().map(|t| t.label())
}

fn check_day(day_index: usize) -> Result<()> {
    if day_index < DAYS_PER_WEEK {
        Ok(())
    } else {
        Err(SlotError::DayIndexOutOfRange(day_index))
    }
}
