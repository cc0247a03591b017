//! Core types for classcal.
//!
//! This crate provides the domain types shared by the classcal CLI:
//! - `orders` for day-order maps, the sync window, and holiday detection
//! - `schedule` for the local class schedule table
//! - `datetime` for timestamps in the timetable's timezone
//! - `colors` for per-subject calendar colors

pub mod colors;
pub mod datetime;
pub mod error;
pub mod orders;
pub mod schedule;

// Re-export the common types at crate root for convenience
pub use error::{ClasscalError, ClasscalResult};
pub use orders::{date_for, DayOrderMap, SyncWindow};
pub use schedule::{ClassEntry, ScheduleTable};
