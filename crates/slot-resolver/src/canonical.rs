//! Canonical slot labels: the fixed grid of time points a day view displays.

use crate::error::{Result, SlotError};
use crate::time::TimeOfDay;

/// First canonical hour used by the timetable and search views.
pub const DEFAULT_START_HOUR: u32 = 9;
/// Last canonical hour (inclusive).
pub const DEFAULT_END_HOUR: u32 = 20;
/// Default step between canonical labels.
pub const DEFAULT_INTERVAL_MINUTES: u32 = 60;

/// Generate labels from `start_hour:00` up to and including `end_hour:00`,
/// stepping by `interval_minutes`.
///
/// A step that does not divide the range stops at the last label that is
/// still `<= end_hour:00`, so `end_hour:00` itself may be missing.
///
/// # Errors
///
/// * [`SlotError::HourOutOfRange`] if either hour is above 23.
/// * [`SlotError::EmptyCanonicalRange`] if `end_hour < start_hour`.
/// * [`SlotError::ZeroInterval`] if `interval_minutes` is 0.
pub fn generate_canonical_slots(
    start_hour: u32,
    end_hour: u32,
    interval_minutes: u32,
) -> Result<Vec<String>> {
    for hour in [start_hour, end_hour] {
        if hour > 23 {
            return Err(SlotError::HourOutOfRange(hour));
        }
    }
    if end_hour < start_hour {
        return Err(SlotError::EmptyCanonicalRange {
            start_hour,
            end_hour,
        });
    }
    if interval_minutes == 0 {
        return Err(SlotError::ZeroInterval);
    }

    let end = end_hour * 60;
    let labels = (start_hour * 60..=end)
        .step_by(interval_minutes as usize)
        .filter_map(|minutes| TimeOfDay::from_hm(minutes / 60, minutes % 60))
        .map(|t| t.label())
        .collect();

    Ok(labels)
}
