//! # slot-resolver
//!
//! Free/busy slot reconciliation for classroom availability grids.
//!
//! A backend reports, per room, the free intervals of each weekday. Views show
//! a fixed grid of canonical time labels instead. This crate translates between
//! the two, and every operation is a pure function of its inputs.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_resolver::{flatten, generate_canonical_slots, resolve_day, FreeSlotsResponse};
//!
//! let json = r#"{"building_code":"310","room_number":"607",
//!     "free_slots_by_day":{"월":[{"start":"09:00","end":"11:00"}],"화":[]}}"#;
//! let response = FreeSlotsResponse::from_json(json).unwrap();
//!
//! assert_eq!(flatten(&response.free_slots_by_day), vec!["월 09:00 - 11:00"]);
//!
//! let canonical = generate_canonical_slots(9, 12, 60).unwrap();
//! let monday = resolve_day(&canonical, &response.free_slots_by_day, "월").unwrap();
//! let free: Vec<bool> = monday.iter().map(|s| s.status.is_free()).collect();
//! assert_eq!(free, vec![true, true, false, false]);
//! ```
//!
//! ## Modules
//!
//! - [`canonical`] — canonical slot label generation
//! - [`resolver`] — free/busy classification, flattening, checklist selection
//! - [`response`] — free-slot response wire types (`DaySlots` keeps day order)
//! - [`freebusy`] — free intervals from occupied timetable entries
//! - [`checklist`] — slot list and check flags held together
//! - [`timetable`] — per-user weekly timetable
//! - [`days`] — day index → day token mapping
//! - [`time`] — `HH:MM` labels and half-open intervals
//! - [`error`] — Error types

pub mod canonical;
pub mod checklist;
pub mod days;
pub mod error;
pub mod freebusy;
pub mod resolver;
pub mod response;
pub mod time;
pub mod timetable;

pub use canonical::generate_canonical_slots;
pub use checklist::SlotChecklist;
pub use days::DayTokens;
pub use error::SlotError;
pub use freebusy::{all_ranges_free, free_slots_by_day, FreeWindow, OccupiedEntry};
pub use resolver::{flatten, free_labels, is_free, resolve_day, selected_slots_from_checklist, SlotState, SlotStatus};
pub use response::{DaySlots, FreeSlot, FreeSlotsResponse};
pub use time::{parse_slot_range, TimeInterval, TimeOfDay};
pub use timetable::{TimetableItem, WeekTimetable};
