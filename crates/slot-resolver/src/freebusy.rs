//! Derive free intervals from a room's occupied timetable entries.
//!
//! For each day, occupied entries are clipped to the window and sorted by
//! start time. A cursor then walks the window and emits the gaps between them.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::response::{DaySlots, FreeSlot};
use crate::time::{TimeInterval, TimeOfDay};

/// One row of a room's timetable. Times may carry seconds (`"10:30:00"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupiedEntry {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

impl OccupiedEntry {
    pub fn interval(&self) -> Result<TimeInterval> {
        TimeInterval::new(
            TimeOfDay::parse_clock(&self.start_time)?,
            TimeOfDay::parse_clock(&self.end_time)?,
        )
    }
}

/// The part of the day searched for free time. Defaults to 09:00–20:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl FreeWindow {
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let interval = TimeInterval::parse(start, end)?;
        Ok(Self {
            start: interval.start(),
            end: interval.end(),
        })
    }
}

impl Default for FreeWindow {
    fn default() -> Self {
        let hm = |hour| TimeOfDay::from_hm(hour, 0).unwrap_or_default();
        Self {
            start: hm(9),
            end: hm(20),
        }
    }
}

/// Occupied intervals for one day, parsed from the matching entries.
///
/// Unparseable clock values are an error. Rows with `start >= end` occupy
/// no time and are skipped.
pub fn occupied_intervals(entries: &[OccupiedEntry], day: &str) -> Result<Vec<TimeInterval>> {
    let mut busy = Vec::new();
    for entry in entries.iter().filter(|e| e.day == day) {
        let start = TimeOfDay::parse_clock(&entry.start_time)?;
        let end = TimeOfDay::parse_clock(&entry.end_time)?;
        busy.extend(TimeInterval::new(start, end).ok());
    }
    Ok(busy)
}

/// Gaps between `busy` intervals inside `window`, sorted by start.
///
/// Busy intervals may overlap and arrive in any order.
pub fn free_intervals(busy: &[TimeInterval], window: FreeWindow) -> Vec<TimeInterval> {
    let mut clipped: Vec<(TimeOfDay, TimeOfDay)> = busy
        .iter()
        .filter(|b| b.start() < window.end && b.end() > window.start)
        .map(|b| (b.start().max(window.start), b.end().min(window.end)))
        .collect();
    clipped.sort();

    let mut free = Vec::new();
    let mut cursor = window.start;

    for (busy_start, busy_end) in clipped {
        if cursor < busy_start {
            free.extend(TimeInterval::new(cursor, busy_start).ok());
        }
        cursor = cursor.max(busy_end);
    }

    // Trailing gap after the last busy period.
    if cursor < window.end {
        free.extend(TimeInterval::new(cursor, window.end).ok());
    }

    free
}

/// Build the free-slot map for `days` (in that order) from occupied entries.
///
/// Entries for days not listed are ignored. A listed day without entries is
/// free for the whole window.
pub fn free_slots_by_day(entries: &[OccupiedEntry], days: &[&str], window: FreeWindow) -> Result<DaySlots> {
    days.iter()
        .map(|&day| {
            let busy = occupied_intervals(entries, day)?;
            let slots: Vec<FreeSlot> = free_intervals(&busy, window)
                .into_iter()
                .map(FreeSlot::from)
                .collect();
            Ok((day, slots))
        })
        .collect::<Result<Vec<_>>>()
        .map(|days| days.into_iter().collect())
}

/// True iff no requested range overlaps any occupied interval.
/// Ranges that only touch an occupied interval do not conflict.
pub fn all_ranges_free(occupied: &[TimeInterval], requested: &[TimeInterval]) -> bool {
    conflicting_ranges(occupied, requested).is_empty()
}

/// The requested ranges that overlap at least one occupied interval.
pub fn conflicting_ranges(occupied: &[TimeInterval], requested: &[TimeInterval]) -> Vec<TimeInterval> {
    requested
        .iter()
        .filter(|r| occupied.iter().any(|o| o.overlaps(r)))
        .copied()
        .collect()
}
