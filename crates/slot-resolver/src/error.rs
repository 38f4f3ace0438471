//! Error types for slot-resolver operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Malformed time label: {0:?} (expected HH:MM)")]
    MalformedTimeLabel(String),

    #[error("Malformed slot range: {0:?} (expected HH:MM-HH:MM)")]
    MalformedSlotRange(String),

    #[error("Empty canonical range: end hour {end_hour} is before start hour {start_hour}")]
    EmptyCanonicalRange { start_hour: u32, end_hour: u32 },

    #[error("Hour out of range: {0} (expected 0-23)")]
    HourOutOfRange(u32),

    #[error("Slot interval must be a positive number of minutes")]
    ZeroInterval,

    #[error("Invalid interval: {start} is not before {end}")]
    InvalidInterval { start: String, end: String },

    #[error("Selection length mismatch: {slots} slots but {flags} checklist flags")]
    MismatchedSelectionLength { slots: usize, flags: usize },

    #[error("Slot index {index} out of range for {len} slots")]
    SlotIndexOutOfRange { index: usize, len: usize },

    #[error("Day index {0} out of range (expected 0-6)")]
    DayIndexOutOfRange(usize),

    #[error("Free-slot response array is empty")]
    EmptyResponse,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
