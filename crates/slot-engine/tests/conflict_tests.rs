//! Tests for double-booking detection.

use chrono::{TimeZone, Utc};
use slot_engine::{find_conflicts, has_conflict, Interval};

fn iv(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> Interval {
    Interval {
        start: Utc
            .with_ymd_and_hms(2026, 3, 3, start_hour, start_min, 0)
            .unwrap(),
        end: Utc
            .with_ymd_and_hms(2026, 3, 3, end_hour, end_min, 0)
            .unwrap(),
    }
}

#[test]
fn overlapping_slots_conflict() {
    let conflicts = find_conflicts(&[iv(10, 0, 11, 30)], &[iv(11, 0, 12, 0)]);

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].slot_a, iv(10, 0, 11, 30));
    assert_eq!(conflicts[0].slot_b, iv(11, 0, 12, 0));
    assert_eq!(conflicts[0].overlap_minutes, 30);
}

#[test]
fn adjacent_slots_do_not_conflict() {
    // Back-to-back lessons are fine.
    let conflicts = find_conflicts(&[iv(10, 0, 11, 0)], &[iv(11, 0, 12, 0)]);
    assert!(conflicts.is_empty());
}

#[test]
fn disjoint_slots_do_not_conflict() {
    let conflicts = find_conflicts(&[iv(9, 0, 10, 0)], &[iv(14, 0, 15, 0)]);
    assert!(conflicts.is_empty());
}

#[test]
fn containment_conflicts_for_inner_duration() {
    let conflicts = find_conflicts(&[iv(9, 0, 17, 0)], &[iv(12, 0, 13, 0)]);

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].overlap_minutes, 60);
}

#[test]
fn every_overlapping_pair_reported() {
    // One proposed slot against two existing bookings it overlaps.
    let proposed = [iv(10, 0, 12, 0)];
    let booked = [iv(9, 0, 10, 30), iv(11, 30, 13, 0), iv(14, 0, 15, 0)];

    let conflicts = find_conflicts(&proposed, &booked);

    assert_eq!(conflicts.len(), 2);
    assert_eq!(conflicts[0].overlap_minutes, 30);
    assert_eq!(conflicts[1].overlap_minutes, 30);
}

#[test]
fn empty_lists_no_conflicts() {
    assert!(find_conflicts(&[], &[iv(10, 0, 11, 0)]).is_empty());
    assert!(find_conflicts(&[iv(10, 0, 11, 0)], &[]).is_empty());
}

#[test]
fn has_conflict_guard() {
    let booked = [iv(9, 0, 10, 0), iv(13, 0, 14, 0)];

    assert!(has_conflict(iv(9, 30, 10, 30), &booked));
    assert!(!has_conflict(iv(10, 0, 11, 0), &booked));
    assert!(!has_conflict(iv(11, 0, 12, 0), &booked));
}
