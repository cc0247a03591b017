//! Google Calendar color assignments per subject.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Color used for subjects without an assignment (Graphite).
pub const DEFAULT_COLOR: &str = "8";

/// Subject code → Google Calendar colorId.
pub static SUBJECT_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("PQT", "1"),  // Lavender
        ("AI", "9"),   // Blueberry
        ("UHV", "6"),  // Tangerine
        ("DAA", "3"),  // Tomato
        ("DIP", "2"),  // Sage
        ("DBMS", "7"), // Peacock
        ("SE", "10"),  // Basil
    ])
});

/// The colorId for a subject as it appears in the schedule table.
///
/// Variants like "DBMS (Lab)" share the base subject's color; anything
/// not in the table gets [`DEFAULT_COLOR`].
pub fn color_for(subject: &str) -> &'static str {
    let base = subject.split(" (").next().unwrap_or(subject);
    SUBJECT_COLORS.get(base).copied().unwrap_or(DEFAULT_COLOR)
}
