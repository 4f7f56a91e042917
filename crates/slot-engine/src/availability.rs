//! Open-slot computation for a visible calendar range.
//!
//! Takes a tutor's declared availability windows and the intervals already
//! booked or blocked, and produces the open slots a student can book within
//! the range the calendar is showing. Windows are clipped to the view, merged
//! into disjoint blocks, then every booked interval is cut out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::interval::{exclude_interval, merge_overlapping, Interval};

/// A bookable span of time within the visible calendar range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_minutes: i64,
}

impl From<Interval> for OpenSlot {
    fn from(iv: Interval) -> Self {
        Self {
            start: iv.start,
            end: iv.end,
            duration_minutes: iv.duration_minutes(),
        }
    }
}

/// Compute the open slots within `[view_start, view_end)`.
///
/// `windows` are the tutor's availability windows in any order, possibly
/// overlapping; `booked` are the appointments and blocked ranges to cut out,
/// also in any order. Windows entirely outside the view are discarded and the
/// rest are clipped to it, so no slot leaks past the visible range.
///
/// Returns slots sorted by start, pairwise disjoint, every one with positive
/// `duration_minutes`. A degenerate view (`view_start >= view_end`) yields no
/// slots.
pub fn open_slots(
    windows: &[Interval],
    booked: &[Interval],
    view_start: DateTime<Utc>,
    view_end: DateTime<Utc>,
) -> Vec<OpenSlot> {
    if view_start >= view_end {
        return Vec::new();
    }

    let clipped: Vec<Interval> = windows
        .iter()
        .filter_map(|w| w.clip(view_start, view_end))
        .collect();

    // Merged windows are sorted and disjoint; subtraction preserves that,
    // so no re-merge is needed afterwards.
    let mut open = merge_overlapping(&clipped);
    for cut in booked {
        open = exclude_interval(&open, *cut);
    }

    // Zero-length windows survive clipping; they cover no bookable time.
    open.into_iter()
        .filter(|iv| !iv.is_empty())
        .map(OpenSlot::from)
        .collect()
}

/// Find the first open slot of at least `min_duration_minutes` within the view.
///
/// Delegates to [`open_slots`] and returns the first slot long enough for the
/// requested lesson length.
pub fn first_open_slot(
    windows: &[Interval],
    booked: &[Interval],
    view_start: DateTime<Utc>,
    view_end: DateTime<Utc>,
    min_duration_minutes: i64,
) -> Option<OpenSlot> {
    open_slots(windows, booked, view_start, view_end)
        .into_iter()
        .find(|slot| slot.duration_minutes >= min_duration_minutes)
}
