//! Tests for deriving free slots from occupied timetable entries.

use slot_resolver::freebusy::{conflicting_ranges, free_intervals, occupied_intervals};
use slot_resolver::{
    all_ranges_free, flatten, free_slots_by_day, parse_slot_range, FreeSlot, FreeWindow, OccupiedEntry, SlotError,
    TimeInterval,
};

/// Helper to create an OccupiedEntry with database-style `HH:MM:SS` times.
fn entry(day: &str, start: &str, end: &str) -> OccupiedEntry {
    OccupiedEntry {
        day: day.to_string(),
        start_time: format!("{start}:00"),
        end_time: format!("{end}:00"),
    }
}

fn interval(start: &str, end: &str) -> TimeInterval {
    TimeInterval::parse(start, end).unwrap()
}

#[test]
fn single_entry_splits_window_in_two() {
    // Window 09:00-20:00, class 10:00-11:00 → free 09:00-10:00 and 11:00-20:00.
    let entries = vec![entry("월", "10:00", "11:00")];
    let free = free_slots_by_day(&entries, &["월"], FreeWindow::default()).unwrap();

    assert_eq!(
        free.get("월").unwrap(),
        &[FreeSlot::new("09:00", "10:00"), FreeSlot::new("11:00", "20:00")]
    );
}

#[test]
fn day_without_entries_is_free_all_window() {
    let free = free_slots_by_day(&[], &["화"], FreeWindow::default()).unwrap();
    assert_eq!(free.get("화").unwrap(), &[FreeSlot::new("09:00", "20:00")]);
}

#[test]
fn output_days_follow_requested_order() {
    let days = ["월", "화", "수", "목", "금"];
    let free = free_slots_by_day(&[], &days, FreeWindow::default()).unwrap();
    let order: Vec<&str> = free.days().collect();
    assert_eq!(order, days);
}

#[test]
fn entries_for_unlisted_days_are_ignored() {
    let entries = vec![entry("토", "09:00", "20:00")];
    let free = free_slots_by_day(&entries, &["월"], FreeWindow::default()).unwrap();
    assert_eq!(free.len(), 1);
    assert!(free.get("토").is_none());
}

#[test]
fn unsorted_and_overlapping_entries_are_merged() {
    let entries = vec![
        entry("수", "13:00", "15:00"),
        entry("수", "10:00", "11:30"),
        entry("수", "11:00", "12:00"),
    ];
    let free = free_slots_by_day(&entries, &["수"], FreeWindow::default()).unwrap();
    assert_eq!(
        flatten(&free),
        vec!["수 09:00 - 10:00", "수 12:00 - 13:00", "수 15:00 - 20:00"]
    );
}

#[test]
fn back_to_back_entries_leave_no_gap() {
    let entries = vec![entry("목", "09:00", "10:00"), entry("목", "10:00", "11:00")];
    let free = free_slots_by_day(&entries, &["목"], FreeWindow::default()).unwrap();
    assert_eq!(free.get("목").unwrap(), &[FreeSlot::new("11:00", "20:00")]);
}

#[test]
fn entries_outside_window_are_clipped() {
    // 08:00-09:30 starts before the window, 19:00-21:00 runs past it.
    let entries = vec![entry("금", "08:00", "09:30"), entry("금", "19:00", "21:00")];
    let free = free_slots_by_day(&entries, &["금"], FreeWindow::default()).unwrap();
    assert_eq!(free.get("금").unwrap(), &[FreeSlot::new("09:30", "19:00")]);
}

#[test]
fn fully_booked_day_has_no_free_slots() {
    let entries = vec![entry("월", "08:00", "21:00")];
    let free = free_slots_by_day(&entries, &["월"], FreeWindow::default()).unwrap();
    assert!(free.get("월").unwrap().is_empty());
}

#[test]
fn custom_window_is_respected() {
    let window = FreeWindow::parse("12:00", "15:00").unwrap();
    let entries = vec![entry("월", "13:00", "14:00")];
    let free = free_slots_by_day(&entries, &["월"], window).unwrap();
    assert_eq!(flatten(&free), vec!["월 12:00 - 13:00", "월 14:00 - 15:00"]);
}

#[test]
fn fractional_seconds_in_entries_are_accepted() {
    let entries = vec![OccupiedEntry {
        day: "월".into(),
        start_time: "10:00:00.000000".into(),
        end_time: "11:00:00.000000".into(),
    }];
    let busy = occupied_intervals(&entries, "월").unwrap();
    assert_eq!(busy, vec![interval("10:00", "11:00")]);
}

#[test]
fn malformed_entry_fails_instead_of_freeing_the_room() {
    let entries = vec![OccupiedEntry {
        day: "월".into(),
        start_time: "ten".into(),
        end_time: "11:00:00".into(),
    }];
    let err = free_slots_by_day(&entries, &["월"], FreeWindow::default()).unwrap_err();
    assert!(matches!(err, SlotError::MalformedTimeLabel(_)));
}

#[test]
fn free_intervals_on_empty_busy_list() {
    let window = FreeWindow::parse("09:00", "10:00").unwrap();
    assert_eq!(free_intervals(&[], window), vec![interval("09:00", "10:00")]);
}

// ── Requested-range availability ────────────────────────────────────────────

#[test]
fn requested_range_overlapping_a_class_is_not_free() {
    let occupied = vec![interval("10:00", "11:00")];
    let requested = vec![parse_slot_range("09:00-10:00").unwrap(), parse_slot_range("10:30-11:30").unwrap()];

    assert!(!all_ranges_free(&occupied, &requested));
    assert_eq!(conflicting_ranges(&occupied, &requested), vec![interval("10:30", "11:30")]);
}

#[test]
fn adjacent_ranges_do_not_conflict() {
    let occupied = vec![interval("10:00", "11:00")];
    let requested = vec![
        parse_slot_range("09:00-10:00").unwrap(),
        parse_slot_range("11:00-12:00").unwrap(),
    ];
    assert!(all_ranges_free(&occupied, &requested));
}

#[test]
fn no_requested_ranges_is_trivially_free() {
    assert!(all_ranges_free(&[interval("09:00", "20:00")], &[]));
}

#[test]
fn zero_length_entry_occupies_no_time() {
    let entries = vec![entry("월", "10:00", "10:00"), entry("월", "13:00", "14:00")];
    let free = free_slots_by_day(&entries, &["월"], FreeWindow::default()).unwrap();
    assert_eq!(flatten(&free), vec!["월 09:00 - 13:00", "월 14:00 - 20:00"]);
}

#[test]
fn inverted_entry_is_skipped_but_unparseable_one_still_fails() {
    let inverted = vec![entry("화", "12:00", "11:00")];
    let busy = occupied_intervals(&inverted, "화").unwrap();
    assert!(busy.is_empty());

    let unparseable = vec![OccupiedEntry {
        day: "화".into(),
        start_time: "12:00:00".into(),
        end_time: "noon".into(),
    }];
    assert!(matches!(
        occupied_intervals(&unparseable, "화"),
        Err(SlotError::MalformedTimeLabel(_))
    ));
}
