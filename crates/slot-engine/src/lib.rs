//! # slot-engine
//!
//! Half-open interval algebra and open-slot computation for tutoring calendars.
//!
//! The engine is the pure scheduling core behind a tutoring-marketplace
//! calendar: it merges a tutor's availability windows, subtracts booked and
//! blocked time, and reports the open slots a student can actually book.
//! Everything is a total function over UTC instants — no I/O, no shared state,
//! no clock.
//!
//! ## Modules
//!
//! - [`interval`] — the `Interval` value type and the set algebra (merge, exclude)
//! - [`availability`] — open-slot computation for a visible calendar range
//! - [`conflict`] — double-booking detection between interval lists
//! - [`error`] — error types

pub mod availability;
pub mod conflict;
pub mod error;
pub mod interval;

pub use availability::{first_open_slot, open_slots, OpenSlot};
pub use conflict::{find_conflicts, has_conflict, Conflict};
pub use error::SlotError;
pub use interval::{exclude_interval, merge_overlapping, Interval};
