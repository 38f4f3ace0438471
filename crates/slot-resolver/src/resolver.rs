//! Free/busy classification of canonical slots against backend free intervals.
//!
//! Every function here is pure. A slot label `t` is free for a day iff some
//! interval `[s, e)` of that day has `s <= t < e`. Overlapping intervals are
//! not validated; membership is a boolean either way.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::response::DaySlots;
use crate::time::{TimeInterval, TimeOfDay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Free,
    Busy,
}

impl SlotStatus {
    pub fn is_free(self) -> bool {
        self == SlotStatus::Free
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SlotStatus::Free => "free",
            SlotStatus::Busy => "busy",
        }
    }
}

/// A canonical label together with its status for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotState {
    pub label: String,
    pub status: SlotStatus,
}

/// Whether `label` falls inside any of `intervals`. End bounds are exclusive.
pub fn is_free(label: &str, intervals: &[TimeInterval]) -> Result<bool> {
    let t = TimeOfDay::parse(label)?;
    Ok(contains(intervals, t))
}

fn contains(intervals: &[TimeInterval], t: TimeOfDay) -> bool {
    intervals.iter().any(|interval| interval.contains(t))
}

/// Flatten day → intervals into `"<day> <start> - <end>"` lines.
///
/// Output follows the mapping's own order. Labels are copied verbatim, empty
/// days contribute nothing, and duplicates are kept.
pub fn flatten(day_slots: &DaySlots) -> Vec<String> {
    day_slots
        .iter()
        .flat_map(|(day, slots)| {
            slots
                .iter()
                .map(move |slot| format!("{day} {} - {}", slot.start, slot.end))
        })
        .collect()
}

/// Keep the items whose parallel flag is `true`, preserving order.
///
/// # Errors
///
/// [`SlotError::MismatchedSelectionLength`] if the two lists differ in length.
pub fn selected_slots_from_checklist<T: Clone>(all_slots: &[T], checked: &[bool]) -> Result<Vec<T>> {
    if all_slots.len() != checked.len() {
        return Err(SlotError::MismatchedSelectionLength {
            slots: all_slots.len(),
            flags: checked.len(),
        });
    }

    Ok(all_slots
        .iter()
        .zip(checked)
        .filter(|(_, flag)| **flag)
        .map(|(slot, _)| slot.clone())
        .collect())
}

/// Classify every canonical label for one day.
///
/// The day's intervals are parsed once. A day token absent from `day_slots`
/// (or present with no intervals) makes every slot busy.
pub fn resolve_day(canonical: &[String], day_slots: &DaySlots, day: &str) -> Result<Vec<SlotState>> {
    let intervals = day_slots.intervals(day)?;

    canonical
        .iter()
        .map(|label| {
            let t = TimeOfDay::parse(label)?;
            let status = if contains(&intervals, t) {
                SlotStatus::Free
            } else {
                SlotStatus::Busy
            };
            Ok(SlotState {
                label: label.clone(),
                status,
            })
        })
        .collect()
}

/// Only the free canonical labels for one day, in canonical order.
pub fn free_labels(canonical: &[String], day_slots: &DaySlots, day: &str) -> Result<Vec<String>> {
    Ok(resolve_day(canonical, day_slots, day)?
        .into_iter()
        .filter(|state| state.status.is_free())
        .map(|state| state.label)
        .collect())
}
