//! WASM bindings for slot-engine.
//!
//! Exposes the interval algebra, open-slot computation, and conflict detection
//! to JavaScript via `wasm-bindgen`, so a calendar front-end can call the same
//! scheduling core the backend uses. All complex types are passed as JSON
//! strings with ISO 8601 datetimes.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use serde::{Deserialize, Serialize};
use slot_engine::{Conflict, Interval, OpenSlot};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct IntervalDto {
    start: String,
    end: String,
}

impl From<&Interval> for IntervalDto {
    fn from(iv: &Interval) -> Self {
        Self {
            start: iv.start.to_rfc3339(),
            end: iv.end.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
struct OpenSlotDto {
    start: String,
    end: String,
    duration_minutes: i64,
}

impl From<&OpenSlot> for OpenSlotDto {
    fn from(s: &OpenSlot) -> Self {
        Self {
            start: s.start.to_rfc3339(),
            end: s.end.to_rfc3339(),
            duration_minutes: s.duration_minutes,
        }
    }
}

#[derive(Serialize)]
struct ConflictDto {
    slot_a: IntervalDto,
    slot_b: IntervalDto,
    overlap_minutes: i64,
}

impl From<&Conflict> for ConflictDto {
    fn from(c: &Conflict) -> Self {
        Self {
            slot_a: IntervalDto::from(&c.slot_a),
            slot_b: IntervalDto::from(&c.slot_b),
            overlap_minutes: c.overlap_minutes,
        }
    }
}

/// Input format for intervals passed from JavaScript.
#[derive(Deserialize)]
struct IntervalInput {
    start: String,
    end: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Convert a JSON array of `{start, end}` objects into `Vec<Interval>`.
///
/// Datetimes may be RFC 3339 or naive local time (interpreted as UTC), per
/// [`Interval::parse`].
fn parse_intervals_json(json: &str) -> Result<Vec<Interval>, JsValue> {
    let inputs: Vec<IntervalInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid intervals JSON: {}", e)))?;

    inputs
        .into_iter()
        .map(|input| {
            Interval::parse(&input.start, &input.end)
                .map_err(|e| JsValue::from_str(&e.to_string()))
        })
        .collect()
}

fn parse_interval(start: &str, end: &str) -> Result<Interval, JsValue> {
    Interval::parse(start, end).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Merge possibly-overlapping intervals into a minimal sorted disjoint set.
///
/// `intervals_json` must be a JSON array of `{start, end}` objects with
/// ISO 8601 datetime strings. Returns a JSON string in the same shape,
/// sorted by start, with overlapping and adjacent intervals coalesced.
#[wasm_bindgen(js_name = "mergeOverlapping")]
pub fn merge_overlapping(intervals_json: &str) -> Result<String, JsValue> {
    let intervals = parse_intervals_json(intervals_json)?;

    let merged = slot_engine::merge_overlapping(&intervals);

    let dtos: Vec<IntervalDto> = merged.iter().map(IntervalDto::from).collect();
    to_json(&dtos)
}

/// Remove a time range from every interval in a list.
///
/// `intervals_json` must be a JSON array of `{start, end}` objects;
/// `exclude_start` and `exclude_end` are ISO 8601 datetime strings. Returns
/// a JSON string with the surviving pieces in input order.
#[wasm_bindgen(js_name = "excludeInterval")]
pub fn exclude_interval(
    intervals_json: &str,
    exclude_start: &str,
    exclude_end: &str,
) -> Result<String, JsValue> {
    let intervals = parse_intervals_json(intervals_json)?;
    let to_exclude = parse_interval(exclude_start, exclude_end)?;

    let remaining = slot_engine::exclude_interval(&intervals, to_exclude);

    let dtos: Vec<IntervalDto> = remaining.iter().map(IntervalDto::from).collect();
    to_json(&dtos)
}

/// Compute the bookable open slots within a visible calendar range.
///
/// `windows_json` and `booked_json` must be JSON arrays of `{start, end}`
/// objects; `view_start` and `view_end` are ISO 8601 datetime strings.
/// Returns a JSON string containing an array of
/// `{start, end, duration_minutes}` objects.
#[wasm_bindgen(js_name = "findOpenSlots")]
pub fn find_open_slots(
    windows_json: &str,
    booked_json: &str,
    view_start: &str,
    view_end: &str,
) -> Result<String, JsValue> {
    let windows = parse_intervals_json(windows_json)?;
    let booked = parse_intervals_json(booked_json)?;
    let view = parse_interval(view_start, view_end)?;

    let slots = slot_engine::open_slots(&windows, &booked, view.start, view.end);

    let dtos: Vec<OpenSlotDto> = slots.iter().map(OpenSlotDto::from).collect();
    to_json(&dtos)
}

/// Find all pairwise conflicts (overlapping time ranges) between two interval
/// lists.
///
/// Both arguments must be JSON arrays of `{start, end}` objects. Returns a
/// JSON string containing an array of conflict objects, each with `slot_a`,
/// `slot_b`, and `overlap_minutes`. Back-to-back intervals are not conflicts.
#[wasm_bindgen(js_name = "findConflicts")]
pub fn find_conflicts(slots_a_json: &str, slots_b_json: &str) -> Result<String, JsValue> {
    let slots_a = parse_intervals_json(slots_a_json)?;
    let slots_b = parse_intervals_json(slots_b_json)?;

    let conflicts = slot_engine::find_conflicts(&slots_a, &slots_b);

    let dtos: Vec<ConflictDto> = conflicts.iter().map(ConflictDto::from).collect();
    to_json(&dtos)
}
