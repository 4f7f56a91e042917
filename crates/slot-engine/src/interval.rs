//! The `Interval` value type and the set algebra over it.
//!
//! Intervals are half-open `[start, end)`: an interval owns its start instant
//! but not its end. Two intervals that merely touch (`a.end == b.start`) share
//! no point, so [`Interval::overlaps`] is false for them and
//! [`exclude_interval`] leaves them alone; [`merge_overlapping`] still
//! coalesces them so rendered calendar blocks have no seams.
//!
//! Both operations are pure. Inputs are borrowed immutably and outputs are
//! newly constructed values — `Interval` is `Copy`, so "never mutate the
//! caller's data" holds by construction rather than by convention.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// A half-open span of time `[start, end)` between two UTC instants.
///
/// The algebra assumes `start <= end`; construct via [`Interval::new`] to have
/// that checked, or build the struct directly when the endpoints are already
/// known-ordered (e.g., decoded from trusted profile data).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    /// Checked constructor.
    ///
    /// # Errors
    /// Returns [`SlotError::InvalidInterval`] when `start > end`. A zero-length
    /// interval (`start == end`) is valid; it covers no point.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start > end {
            return Err(SlotError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse an interval from a pair of ISO 8601 datetime strings.
    ///
    /// Accepts RFC 3339 (e.g., "2026-02-17T14:00:00+00:00") and naive local
    /// time (e.g., "2026-02-17T14:00:00"), which is interpreted as UTC.
    ///
    /// # Errors
    /// Returns [`SlotError::InvalidDatetime`] for unparseable strings and
    /// [`SlotError::InvalidInterval`] when the parsed start is after the end.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_datetime(start)?, parse_datetime(end)?)
    }

    /// Whether two intervals share at least one point.
    ///
    /// Half-open test: `a.start < b.end && b.start < a.end`. Touching
    /// intervals (`a.end == b.start`) do NOT overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `self` covers every point of `other`.
    pub fn covers(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Length of the interval in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether the interval covers no point (`start == end`).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The largest interval covered by both `self` and the view range,
    /// or `None` when `self` lies entirely outside it.
    pub fn clip(&self, view_start: DateTime<Utc>, view_end: DateTime<Utc>) -> Option<Interval> {
        if self.start < view_end && view_start < self.end {
            Some(Interval {
                start: self.start.max(view_start),
                end: self.end.min(view_end),
            })
        } else {
            None
        }
    }
}

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| SlotError::InvalidDatetime(format!("'{}': {}", s, e)))
}

/// Merge a set of possibly-overlapping intervals into a minimal sorted
/// disjoint set.
///
/// The input may be in any order and may contain duplicates, containments,
/// and partial overlaps. The output is sorted ascending by start and strictly
/// disjoint: for consecutive entries, `prev.end < next.start`. Adjacent
/// intervals (`prev.end == next.start`) are coalesced into one.
///
/// Empty input produces empty output. Runs in O(n log n).
pub fn merge_overlapping(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted: Vec<Interval> = intervals.to_vec();
    // Sort by start, then by end, so equal starts merge deterministically.
    sorted.sort_by_key(|iv| (iv.start, iv.end));

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for iv in sorted {
        if let Some(last) = merged.last_mut() {
            if iv.start <= last.end {
                // Overlapping or adjacent — extend the current interval.
                last.end = last.end.max(iv.end);
                continue;
            }
        }
        merged.push(iv);
    }

    merged
}

/// Remove the portion of every interval that overlaps `to_exclude`.
///
/// Each input interval is handled independently, in input order:
///
/// - no overlap: copied through unchanged;
/// - `to_exclude` strictly inside: split into a left and a right piece;
/// - `to_exclude` reaching over one edge: shrunk to the surviving remainder;
/// - `to_exclude` covering the whole interval: dropped.
///
/// Positive-length inputs never produce empty pieces. The result keeps the
/// input's relative order and is NOT re-sorted or re-merged — pipe through
/// [`merge_overlapping`] when a canonical disjoint set is needed.
pub fn exclude_interval(intervals: &[Interval], to_exclude: Interval) -> Vec<Interval> {
    let mut result: Vec<Interval> = Vec::with_capacity(intervals.len());

    for iv in intervals {
        if !iv.overlaps(&to_exclude) {
            result.push(*iv);
            continue;
        }
        if to_exclude.start > iv.start {
            result.push(Interval {
                start: iv.start,
                end: to_exclude.start,
            });
        }
        if to_exclude.end < iv.end {
            result.push(Interval {
                start: to_exclude.end,
                end: iv.end,
            });
        }
    }

    result
}
