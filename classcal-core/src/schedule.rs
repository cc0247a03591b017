//! The local class schedule table.
//!
//! A JSON object mapping day-order labels ("1".."5") to the ordered list of
//! classes held on a day with that order. The file is maintained by hand, so
//! loading is strict about shape but the caller decides how to react when the
//! file is missing or malformed.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClasscalError, ClasscalResult};

/// One class period: what is taught and when it starts and ends.
///
/// Times are wall-clock "HH:MM" strings (a leading zero may be missing,
/// e.g. "9:30"); they are validated when the event payload is built, not
/// at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassEntry {
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
}

/// Day-order label → classes held on such a day, in timetable order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleTable {
    entries: BTreeMap<String, Vec<ClassEntry>>,
}

impl ScheduleTable {
    /// Load the schedule table from a JSON file.
    pub fn load(path: &Path) -> ClasscalResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ClasscalError::ScheduleNotFound(path.display().to_string())
            } else {
                ClasscalError::Io(e)
            }
        })?;

        serde_json::from_str(&contents).map_err(|e| ClasscalError::ScheduleParse(e.to_string()))
    }

    /// Classes for a day with the given day-order label, in timetable order.
    /// Returns None when the table has no row for that label.
    pub fn classes_for(&self, label: &str) -> Option<&[ClassEntry]> {
        self.entries.get(label).map(|v| v.as_slice())
    }

    /// Day-order labels present in the table.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }
}
