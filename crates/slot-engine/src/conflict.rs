//! Double-booking detection between interval lists.
//!
//! Performs pairwise comparison between two interval lists to find time
//! overlaps — typically a proposed appointment against a tutor's existing
//! bookings. Adjacent intervals (where one ends exactly when another starts)
//! are NOT conflicts.

use crate::interval::Interval;

/// A detected conflict between two intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub slot_a: Interval,
    pub slot_b: Interval,
    pub overlap_minutes: i64,
}

/// Find all pairwise conflicts (overlapping time ranges) between two interval
/// lists.
///
/// The overlap duration is `min(a.end, b.end) - max(a.start, b.start)`.
/// Back-to-back lessons where one ends exactly when the next starts are fine.
pub fn find_conflicts(slots_a: &[Interval], slots_b: &[Interval]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for a in slots_a {
        for b in slots_b {
            if a.overlaps(b) {
                let overlap_start = a.start.max(b.start);
                let overlap_end = a.end.min(b.end);

                conflicts.push(Conflict {
                    slot_a: *a,
                    slot_b: *b,
                    overlap_minutes: (overlap_end - overlap_start).num_minutes(),
                });
            }
        }
    }

    conflicts
}

/// Whether a proposed interval overlaps any existing booking.
pub fn has_conflict(proposed: Interval, booked: &[Interval]) -> bool {
    booked.iter().any(|b| proposed.overlaps(b))
}
