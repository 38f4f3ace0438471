//! Wire types for the room free-slot response.
//!
//! ```json
//! { "building_code": "310", "room_number": "607",
//!   "free_slots_by_day": { "월": [{"start": "09:00", "end": "10:00"}], "화": [] } }
//! ```
//!
//! Day order is significant: [`DaySlots`] keeps the keys in the order the
//! backend sent them (`serde_json` is built with `preserve_order`).

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Result, SlotError};
use crate::time::TimeInterval;

/// One free interval, with its labels kept exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlot {
    pub start: String,
    pub end: String,
}

impl FreeSlot {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn interval(&self) -> Result<TimeInterval> {
        TimeInterval::parse(&self.start, &self.end)
    }
}

impl From<TimeInterval> for FreeSlot {
    fn from(interval: TimeInterval) -> Self {
        Self::new(interval.start().label(), interval.end().label())
    }
}

/// Day token → free intervals, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySlots {
    days: Vec<(String, Vec<FreeSlot>)>,
}

impl DaySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a day, or replace its intervals in place if the token is already present.
    pub fn insert(&mut self, day: impl Into<String>, slots: Vec<FreeSlot>) {
        let day = day.into();
        match self.days.iter_mut().find(|(d, _)| *d == day) {
            Some((_, existing)) => *existing = slots,
            None => self.days.push((day, slots)),
        }
    }

    pub fn get(&self, day: &str) -> Option<&[FreeSlot]> {
        self.days
            .iter()
            .find(|(d, _)| d == day)
            .map(|(_, slots)| slots.as_slice())
    }

    /// Parsed intervals for one day. An absent day yields no intervals.
    pub fn intervals(&self, day: &str) -> Result<Vec<TimeInterval>> {
        self.get(day)
            .unwrap_or_default()
            .iter()
            .map(FreeSlot::interval)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FreeSlot])> {
        self.days.iter().map(|(d, s)| (d.as_str(), s.as_slice()))
    }

    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.days.iter().map(|(d, _)| d.as_str())
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of intervals across all days.
    pub fn slot_count(&self) -> usize {
        self.days.iter().map(|(_, s)| s.len()).sum()
    }
}

impl<D: Into<String>> FromIterator<(D, Vec<FreeSlot>)> for DaySlots {
    fn from_iter<I: IntoIterator<Item = (D, Vec<FreeSlot>)>>(iter: I) -> Self {
        let mut out = DaySlots::new();
        for (day, slots) in iter {
            out.insert(day, slots);
        }
        out
    }
}

impl Serialize for DaySlots {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (day, slots) in &self.days {
            map.serialize_entry(day, slots)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DaySlots {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct DaySlotsVisitor;

        impl<'de> Visitor<'de> for DaySlotsVisitor {
            type Value = DaySlots;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of day token to free-slot lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<DaySlots, A::Error> {
                let mut out = DaySlots::new();
                while let Some((day, slots)) = access.next_entry::<String, Vec<FreeSlot>>()? {
                    out.insert(day, slots);
                }
                Ok(out)
            }
        }

        deserializer.deserialize_map(DaySlotsVisitor)
    }
}

/// Free-slot response for one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlotsResponse {
    pub building_code: String,
    pub room_number: String,
    pub free_slots_by_day: DaySlots,
}

impl FreeSlotsResponse {
    /// Parse either a bare response object or the backend's list form,
    /// taking the first element of a list.
    pub fn from_json(json: &str) -> Result<Self> {
        match serde_json::from_str(json)? {
            Value::Array(items) => {
                let first = items.into_iter().next().ok_or(SlotError::EmptyResponse)?;
                Ok(serde_json::from_value(first)?)
            }
            other => Ok(serde_json::from_value(other)?),
        }
    }
}
